use std::collections::VecDeque;

use proptest::prelude::*;
use ringscan::{ReadError, ReadStatus, RingBuffer, WriteMode};

#[derive(Clone, Debug)]
enum Op {
    Insert(u32),
    Peek,
    Reset,
    Remove,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u32>().prop_map(Op::Insert),
        2 => Just(Op::Peek),
        1 => Just(Op::Reset),
        2 => Just(Op::Remove),
    ]
}

fn mode() -> impl Strategy<Value = WriteMode> {
    prop_oneof![Just(WriteMode::Overwrite), Just(WriteMode::Reject)]
}

fn full_scan(ring: &mut RingBuffer<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    loop {
        let read = ring.peek_read().unwrap().cloned();
        out.push(read.value);
        if read.is_complete() {
            return out;
        }
    }
}

fn drain(ring: &mut RingBuffer<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    while let Ok(read) = ring.remove_read() {
        out.push(read.value);
    }
    out
}

proptest! {
    #[test]
    fn len_stays_within_capacity(capacity in 1usize..8,
                                 mode in mode(),
                                 ops in prop::collection::vec(op(), 0..200)) {
        let mut ring = RingBuffer::new(capacity, mode).unwrap();
        for op in ops {
            match op {
                Op::Insert(x) => { let _ = ring.insert(x); }
                Op::Peek => { let _ = ring.peek_read(); }
                Op::Reset => ring.reset_scan(),
                Op::Remove => { let _ = ring.remove_read(); }
            }
            prop_assert!(ring.len() <= ring.capacity());
            prop_assert!(ring.scan_position() <= ring.len());
            prop_assert_eq!(ring.is_empty(), ring.len() == 0);
            prop_assert_eq!(ring.capacity(), capacity);
        }
    }

    #[test]
    fn insert_and_remove_match_a_deque(capacity in 1usize..8,
                                       mode in mode(),
                                       ops in prop::collection::vec(
                                           prop_oneof![
                                               any::<u32>().prop_map(Some),
                                               Just(None::<u32>),
                                           ], 0..200)) {
        let mut ring = RingBuffer::new(capacity, mode).unwrap();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Some(x) => {
                    let result = ring.insert(x);
                    if model.len() < capacity {
                        model.push_back(x);
                        prop_assert_eq!(result.ok(), Some(None));
                    } else if mode == WriteMode::Overwrite {
                        let oldest = model.pop_front();
                        model.push_back(x);
                        prop_assert_eq!(result.ok(), Some(oldest));
                    } else {
                        prop_assert_eq!(result.map_err(|e| e.element), Err(x));
                    }
                }
                None => {
                    match model.pop_front() {
                        Some(expected) => {
                            let read = ring.remove_read().unwrap();
                            prop_assert_eq!(read.value, expected);
                            prop_assert_eq!(read.has_more(), !model.is_empty());
                        }
                        None => prop_assert_eq!(ring.remove_read().err(), Some(ReadError::Empty)),
                    }
                }
            }
            prop_assert_eq!(ring.len(), model.len());
        }
    }

    #[test]
    fn reject_leaves_full_buffer_alone(capacity in 1usize..8,
                                       values in prop::collection::vec(any::<u32>(), 8..32)) {
        let mut ring = RingBuffer::new(capacity, WriteMode::Reject).unwrap();
        for (i, &x) in values.iter().enumerate() {
            let result = ring.insert(x);
            prop_assert_eq!(result.is_err(), i >= capacity);
        }
        prop_assert_eq!(ring.len(), capacity);
        prop_assert_eq!(full_scan(&mut ring), values[..capacity].to_vec());
    }

    #[test]
    fn overwrite_keeps_the_newest(capacity in 1usize..8,
                                  values in prop::collection::vec(any::<u32>(), 0..32)) {
        let mut ring = RingBuffer::new(capacity, WriteMode::Overwrite).unwrap();
        let mut evicted = Vec::new();
        for &x in &values {
            if let Some(old) = ring.insert(x).unwrap() {
                evicted.push(old);
            }
        }
        let keep = values.len().min(capacity);
        let split = values.len() - keep;
        prop_assert_eq!(&evicted[..], &values[..split]);
        prop_assert_eq!(drain(&mut ring), values[split..].to_vec());
    }

    #[test]
    fn scans_are_repeatable(capacity in 1usize..8,
                            mode in mode(),
                            values in prop::collection::vec(any::<u32>(), 1..32),
                            rounds in 2usize..5) {
        let mut ring = RingBuffer::new(capacity, mode).unwrap();
        for &x in &values {
            let _ = ring.insert(x);
        }
        let first = full_scan(&mut ring);
        prop_assert_eq!(first.len(), ring.len());
        for _ in 1..rounds {
            prop_assert_eq!(full_scan(&mut ring), first.clone());
        }
    }

    #[test]
    fn removal_refused_mid_scan(capacity in 2usize..8,
                                values in prop::collection::vec(any::<u32>(), 2..32),
                                peeks in 1usize..8) {
        let mut ring = RingBuffer::new(capacity, WriteMode::Overwrite).unwrap();
        for &x in &values {
            ring.insert(x).unwrap();
        }
        let peeks = peeks % ring.len();
        prop_assume!(peeks > 0);
        for _ in 0..peeks {
            prop_assert_eq!(ring.peek_read().unwrap().status, ReadStatus::Remaining);
        }
        let len = ring.len();
        prop_assert_eq!(ring.remove_read().err(), Some(ReadError::ScanInProgress));
        prop_assert_eq!(ring.len(), len);
        ring.reset_scan();
        prop_assert!(ring.remove_read().is_ok());
    }

    #[test]
    fn drain_matches_scan(capacity in 1usize..8,
                          mode in mode(),
                          values in prop::collection::vec(any::<u32>(), 1..32)) {
        let mut ring = RingBuffer::new(capacity, mode).unwrap();
        for &x in &values {
            let _ = ring.insert(x);
        }
        let scanned = full_scan(&mut ring);
        prop_assert_eq!(drain(&mut ring), scanned);
        prop_assert!(ring.is_empty());
    }
}
