use traffic_light::{PhaseTiming, Result, Simulate, TrafficLight};

use tracing_subscriber;
use tracing::info;
use clap::Parser;
use chrono::{DateTime, Local};
use std::time::SystemTime;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    #[clap(long)]
    #[clap(default_value_t = traffic_light::config::DEFAULT_MIN_INTERVAL_MS)]
    min_interval_ms: u64,

    #[clap(long)]
    #[clap(default_value_t = traffic_light::config::DEFAULT_MAX_INTERVAL_MS)]
    max_interval_ms: u64,

    #[clap(short, long)]
    #[clap(default_value_t = traffic_light::config::DEFAULT_POLL_INTERVAL_MS)]
    poll_interval_ms: u64,

    #[clap(short, long)]
    #[clap(default_value_t = 3)]
    cycles: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let options = Options::parse();
    let timing = PhaseTiming::from_millis(options.min_interval_ms, options.max_interval_ms, options.poll_interval_ms)?;
    info!("{:?}", timing);

    let light = TrafficLight::with_timing(timing)?;
    light.simulate()?;

    for cycle in 1..=options.cycles {
        light.wait_for_green();
        let now: DateTime<Local> = SystemTime::now().into();
        info!("{} cycle {} phase {}", now.format("%Y/%m/%d %T%.3f"), cycle, light.current_phase());
    }

    light.join()?;
    Ok(())
}
