// Strategy Pattern - a context delegating sorting to an interchangeable
// algorithm. Both strategies sort ascending, in place.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no sort strategy has been set")]
    StrategyNotSet,
}

pub trait SortStrategy {
    fn sort(&self, data: &mut [i32]);
    fn name(&self) -> &str;
}

/// Classic adjacent-swap double loop. O(n²) comparisons.
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn sort(&self, data: &mut [i32]) {
        let n = data.len();
        for i in 0..n {
            for j in 0..n.saturating_sub(i + 1) {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Bubble Sort"
    }
}

/// Lomuto partition scheme with the last element as pivot. O(n log n)
/// average; already-sorted or reverse-sorted input hits the O(n²) worst
/// case with this pivot choice.
pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn sort(&self, data: &mut [i32]) {
        quicksort(data);
    }

    fn name(&self) -> &str {
        "Quick Sort"
    }
}

fn quicksort(data: &mut [i32]) {
    if data.len() <= 1 {
        return;
    }
    let pivot = partition(data);
    quicksort(&mut data[..pivot]);
    quicksort(&mut data[pivot + 1..]);
}

fn partition(data: &mut [i32]) -> usize {
    let pivot = data.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if data[i] <= data[pivot] {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, pivot);
    store
}

/// Holds the active strategy; `execute` always delegates to whichever one
/// was most recently set.
pub struct SortContext {
    strategy: Option<Box<dyn SortStrategy>>,
}

impl SortContext {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Replaces the active strategy unconditionally.
    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Sorts `data` in place with the active strategy.
    pub fn execute(&self, data: &mut [i32]) -> Result<(), StrategyError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(StrategyError::StrategyNotSet)?;
        println!("Sorting with {}", strategy.name());
        strategy.sort(data);
        Ok(())
    }
}

impl Default for SortContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo() {
    let mut context = SortContext::new();

    let mut numbers = vec![5, 2, 9, 1, 7];
    match context.execute(&mut numbers) {
        Ok(()) => println!("Sorted: {:?}", numbers),
        Err(e) => println!("Cannot sort yet: {}", e),
    }

    context.set_strategy(Box::new(BubbleSort));
    context.execute(&mut numbers).unwrap();
    println!("Sorted: {:?}", numbers);

    let mut more_numbers = vec![8, 3, 3, 0, -4, 12];
    context.set_strategy(Box::new(QuickSort));
    context.execute(&mut more_numbers).unwrap();
    println!("Sorted: {:?}", more_numbers);
}
