use heap_select::{
    base::{Priority, Record},
    error::HeapError,
    heap::{inspect::HeapInspect, HeapOptions, PriorityQueue},
};
use log::debug;
use rstest::rstest;

use helpers::records::{priorities, random_records, test_rng};

/// Initialize the logger
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn to_records(input: &[(&str, Priority)]) -> Vec<Record> {
    input.iter().map(|&r| Record::from(r)).collect()
}

/// Enqueue then dequeue everything, validating the heap at every step
fn enqueue_dequeue_validated(queue: &mut PriorityQueue, input: &[Record]) -> Vec<Record> {
    queue.validate_internal_state().expect("invalid empty heap");
    for (ix, record) in input.iter().enumerate() {
        queue.enqueue(record.clone());
        assert_eq!(queue.len(), ix + 1);
        queue
            .validate_internal_state()
            .unwrap_or_else(|e| panic!("after enqueue {}: {}", ix, e));
    }

    let mut output = Vec::new();
    while !queue.is_empty() {
        let before = queue.len();
        output.push(queue.dequeue().expect("queue should not be empty"));
        assert_eq!(queue.len(), before - 1);
        queue
            .validate_internal_state()
            .unwrap_or_else(|e| panic!("after dequeue {}: {}", output.len(), e));
    }
    output
}

#[rstest]
#[case(vec![("H", 7.), ("W", 29.), ("J", 4.), ("K", 7.), ("G", 11.), ("V", 1.), ("T", 9.), ("S", 8.), ("O", 6.)])]
#[case(vec![("H", 7.)])]
#[case(vec![("H", 7.), ("W", 29.)])]
#[case(vec![("R", 4.), ("A", 5.), ("B", 3.), ("K", 2.), ("G", 2.), ("V", 36.), ("T", 1.), ("O", 8.), ("S", 3.)])]
// Requires resizing
#[case(vec![
    ("R", 4.), ("A", 5.), ("B", 3.), ("K", 2.), ("G", 2.), ("V", 36.), ("T", 1.), ("O", 8.), ("S", 3.),
    ("A", 5.), ("B", 3.), ("K", 2.), ("G", 2.), ("V", 36.), ("T", 1.), ("O", 8.), ("S", 3.)
])]
#[case(vec![("R", 4.), ("A", 5.), ("B", 3.), ("K", 7.), ("G", 2.), ("V", 9.), ("T", 1.), ("O", 8.), ("S", 6.)])]
#[case(vec![("e", 2.718), ("pi", 3.14), ("phi", 1.618)])]
fn test_enqueue_dequeue(#[case] input: Vec<(&str, Priority)>) {
    init_logger();
    let input = to_records(&input);
    let mut queue = PriorityQueue::new();

    let output = enqueue_dequeue_validated(&mut queue, &input);

    let mut expected = priorities(&input);
    expected.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(priorities(&output), expected);
}

#[test]
fn test_dequeue_order() {
    let mut queue: PriorityQueue = [7., 29., 4., 7., 11., 1., 9., 8., 6.]
        .iter()
        .map(|&p| Record::new("", p))
        .collect();

    let observed: Vec<Priority> = queue.drain_sorted().map(|r| r.priority).collect();
    assert_eq!(observed, vec![1., 4., 6., 7., 7., 8., 9., 11., 29.]);
}

#[test]
fn test_enlarge_storage() {
    let mut size = 5;
    while size <= 500 {
        let mut queue = PriorityQueue::new();
        for i in 1..=size {
            queue.enqueue(Record::new("", i as Priority));
        }
        queue.validate_internal_state().unwrap();
        assert!(queue.capacity() >= size);

        for i in 1..=size {
            assert_eq!(queue.dequeue(), Ok(Record::new("", i as Priority)));
        }
        size *= 5;
    }
}

#[rstest]
fn test_resize_transparency(
    #[values(1, 3, 10, 64)] initial_capacity: usize,
    #[values(2, 3, 8)] growth_factor: usize,
) {
    let mut rng = test_rng(Some(137));
    let input = random_records(300, &mut rng);

    let mut reference = PriorityQueue::new();
    reference.extend(input.iter().cloned());

    let mut queue = PriorityQueue::with_options(&HeapOptions {
        initial_capacity,
        growth_factor,
    });
    queue.extend(input.iter().cloned());

    assert_eq!(queue.len(), reference.len());
    assert_eq!(
        priorities(&queue.into_sorted_vec()),
        priorities(&reference.into_sorted_vec())
    );
}

#[test]
fn test_writeup_example() {
    init_logger();
    let mut queue = PriorityQueue::new();

    queue.enqueue(Record::new("Zoe", -3.));
    queue.enqueue(Record::new("Elmo", 10.));
    queue.enqueue(Record::new("Bert", 6.));
    assert_eq!(queue.len(), 3);
    queue.log_debug_info("After enqueue 3 elements");

    queue.enqueue(Record::new("Kermit", 5.));
    assert_eq!(queue.len(), 4);
    queue.log_debug_info("After enqueue one more");

    let removed = queue.dequeue().unwrap();
    assert_eq!(removed, Record::new("Zoe", -3.));
    debug!("Removed {}", removed);
    queue.log_debug_info("After dequeue one");
}

#[test]
fn test_empty_queue_errors() {
    let mut queue = PriorityQueue::new();
    let point = Record::new("Programming Abstractions", 106.);

    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), Err(HeapError::EmptyQueue));
    assert_eq!(queue.peek(), Err(HeapError::EmptyQueue));

    queue.enqueue(point.clone());
    assert_eq!(queue.peek(), Ok(&point));
    queue.dequeue().unwrap();
    assert_eq!(queue.dequeue(), Err(HeapError::EmptyQueue));
    assert_eq!(queue.peek(), Err(HeapError::EmptyQueue));

    queue.enqueue(point);
    queue.clear();
    assert_eq!(queue.dequeue(), Err(HeapError::EmptyQueue));
    assert_eq!(queue.peek(), Err(HeapError::EmptyQueue));
}

#[test]
fn test_size_is_empty_clear() {
    let mut queue = PriorityQueue::new();

    assert!(queue.is_empty());
    queue.clear();
    assert_eq!(queue.is_empty(), queue.len() == 0);

    queue.enqueue(Record::new("", 7.));
    assert_eq!(queue.len(), 1);
    queue.enqueue(Record::new("", 5.));
    assert_eq!(queue.len(), 2);
    queue.enqueue(Record::new("", 5.));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.is_empty(), queue.len() == 0);

    queue.clear();
    queue.validate_internal_state().unwrap();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);

    // Usable again after clear
    queue.enqueue(Record::new("", 2.));
    queue.enqueue(Record::new("", 1.));
    assert_eq!(queue.peek().map(|r| r.priority), Ok(1.));
}

#[test]
fn test_random_interleaved_operations() {
    use rand::Rng;

    let mut rng = test_rng(Some(42));
    let mut queue = PriorityQueue::new();
    let mut shadow: Vec<Priority> = Vec::new();

    for _ in 0..2000 {
        if shadow.is_empty() || rng.gen_bool(0.6) {
            let priority = rng.gen_range(-50.0..50.0);
            queue.enqueue(Record::new("", priority));
            shadow.push(priority);
        } else {
            shadow.sort_by(|a, b| b.total_cmp(a));
            let expected = shadow.pop().unwrap();
            assert_eq!(queue.dequeue().unwrap().priority, expected);
        }
        assert_eq!(queue.len(), shadow.len());
        queue.validate_internal_state().unwrap();
    }
}
