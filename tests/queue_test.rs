//! Delivery and blocking guarantees of the sample hand-off queue.

use rig_simulation::sync::blocking_queue::BlockingQueue;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// ============================================================================
// ORDERING TESTS
// ============================================================================

#[test]
fn test_fifo_order_single_producer() {
    let queue = BlockingQueue::new();

    for i in 0..100u64 {
        queue.push(i);
    }
    for expected in 0..100u64 {
        assert_eq!(queue.pop(), expected, "FIFO order should be preserved");
    }
}

#[test]
fn test_multi_producer_exactly_once_in_order() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: u64 = 250;

    let queue = Arc::new(BlockingQueue::new());

    let mut handles = Vec::new();
    for producer in 0..PRODUCERS {
        let q = queue.clone();
        handles.push(thread::spawn(move || {
            for seq in 0..PER_PRODUCER {
                q.push((producer, seq));
            }
        }));
    }

    // Single consumer: every popped value must be the next unseen sequence
    // number of its producer (exactly-once, per-producer order preserved).
    let mut next_expected = [0u64; PRODUCERS];
    for _ in 0..(PRODUCERS as u64 * PER_PRODUCER) {
        let (producer, seq) = queue.pop();
        assert_eq!(
            seq, next_expected[producer],
            "per-producer relative order should be preserved"
        );
        next_expected[producer] += 1;
    }

    for handle in handles {
        handle.join().expect("producer thread should finish");
    }
    assert!(queue.is_empty(), "every pushed value should be delivered once");
}

// ============================================================================
// BLOCKING TESTS
// ============================================================================

#[test]
fn test_pop_blocks_until_push() {
    let queue: Arc<BlockingQueue<u64>> = Arc::new(BlockingQueue::new());

    let q = queue.clone();
    let consumer = thread::spawn(move || {
        let start = Instant::now();
        let value = q.pop();
        (value, start.elapsed())
    });

    // Give the consumer time to park on the empty queue.
    thread::sleep(Duration::from_millis(150));
    queue.push(42);

    let (value, waited) = consumer.join().expect("consumer thread should finish");
    assert_eq!(value, 42, "pop should return the concurrently pushed value");
    assert!(
        waited >= Duration::from_millis(100),
        "pop should have blocked until the push, only waited {:?}",
        waited
    );
}

#[test]
fn test_push_wakes_one_parked_consumer_at_a_time() {
    let queue: Arc<BlockingQueue<u64>> = Arc::new(BlockingQueue::new());

    let mut consumers = Vec::new();
    for _ in 0..2 {
        let q = queue.clone();
        consumers.push(thread::spawn(move || q.pop()));
    }

    thread::sleep(Duration::from_millis(100));
    queue.push(1);
    queue.push(2);

    let mut values: Vec<u64> = consumers
        .into_iter()
        .map(|c| c.join().expect("consumer thread should finish"))
        .collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2], "each value should be delivered exactly once");
}

// ============================================================================
// SNAPSHOT TESTS
// ============================================================================

#[test]
fn test_len_and_is_empty_snapshots() {
    let queue = BlockingQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);

    queue.push(7u64);
    queue.push(8u64);
    assert!(!queue.is_empty());
    assert_eq!(queue.len(), 2);

    let _ = queue.pop();
    let _ = queue.pop();
    assert!(queue.is_empty());
}
