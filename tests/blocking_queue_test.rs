use traffic_light::{BlockingQueue, Phase};
use rand::prelude::*;
use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};

const PRODUCERS: usize = 4;
const CONSUMERS: usize = 4;
const ITEMS_PER_PRODUCER: usize = 1000;

#[test]
fn test_receive_most_recent_first() {
    let queue = BlockingQueue::new();
    let mut rng = thread_rng();
    let sent: Vec<u64> = (0..100).map(|_| rng.gen()).collect();
    for v in sent.iter() {
        queue.send(*v);
    }
    assert_eq!(queue.len(), sent.len());

    let mut received = Vec::with_capacity(sent.len());
    for _ in 0..sent.len() {
        received.push(queue.receive());
    }
    let expected: Vec<u64> = sent.iter().rev().cloned().collect();
    assert_eq!(received, expected);
    assert!(queue.is_empty());
}

#[test]
fn test_tagged_phases_come_back_last_in_first_out() {
    let queue = BlockingQueue::new();
    queue.send((Phase::Red, 1));
    queue.send((Phase::Green, 2));
    queue.send((Phase::Red, 3));

    assert_eq!(queue.receive(), (Phase::Red, 3));
    assert_eq!(queue.receive(), (Phase::Green, 2));
    assert_eq!(queue.receive(), (Phase::Red, 1));
}

#[test]
fn test_receive_blocks_until_send() {
    let queue = BlockingQueue::new();
    let delay = Duration::from_millis(200);

    let start = Instant::now();
    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            queue.send(Phase::Green);
        })
    };

    assert_eq!(queue.receive(), Phase::Green);
    assert!(start.elapsed() >= delay);
    producer.join().unwrap();
}

#[test]
fn test_receive_timeout() {
    let queue = BlockingQueue::new();
    let timeout = Duration::from_millis(50);

    let start = Instant::now();
    assert_eq!(queue.receive_timeout(timeout), None);
    assert!(start.elapsed() >= timeout);

    queue.send(7);
    assert_eq!(queue.receive_timeout(timeout), Some(7));

    // deadline overflow falls back to an unbounded wait
    queue.send(8);
    assert_eq!(queue.receive_timeout(Duration::MAX), Some(8));
}

#[test]
fn test_try_receive() {
    let queue = BlockingQueue::default();
    assert_eq!(queue.try_receive(), None);
    queue.send("a");
    queue.send("b");
    assert_eq!(queue.try_receive(), Some("b"));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.try_receive(), Some("a"));
    assert_eq!(queue.try_receive(), None);
}

#[test]
fn test_clones_share_buffer() {
    let queue = BlockingQueue::new();
    let other = queue.clone();
    other.send(String::from("hello"));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.receive(), "hello");
    assert!(other.is_empty());
}

#[test]
fn test_many_producers_and_consumers_deliver_exactly_once() {
    let queue = BlockingQueue::new();

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|_| {
            let queue = queue.clone();
            thread::spawn(move || {
                let per_consumer = PRODUCERS * ITEMS_PER_PRODUCER / CONSUMERS;
                (0..per_consumer).map(|_| queue.receive()).collect::<Vec<usize>>()
            })
        })
        .collect();

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let queue = queue.clone();
            thread::spawn(move || {
                for i in 0..ITEMS_PER_PRODUCER {
                    queue.send(p * ITEMS_PER_PRODUCER + i);
                }
            })
        })
        .collect();

    for producer in producers {
        producer.join().unwrap();
    }

    let mut seen = HashSet::new();
    for consumer in consumers {
        for v in consumer.join().unwrap() {
            assert!(seen.insert(v), "{} delivered twice", v);
        }
    }
    assert_eq!(seen.len(), PRODUCERS * ITEMS_PER_PRODUCER);
    assert!(queue.is_empty());
}
