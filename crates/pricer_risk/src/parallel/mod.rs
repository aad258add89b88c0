//! Rayon-based parallelisation utilities.
//!
//! Batch workloads (valuing many positions, running many presets) fan out
//! across the rayon pool once they reach a size threshold. Results always
//! come back in input order so downstream sums and hashes stay
//! deterministic.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Batch size for parallel processing.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Minimum item count before work is spread across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Minimum chunk length handed to a single worker
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never fans out.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps each item, in parallel when the config allows, preserving order.
///
/// # Examples
///
/// ```
/// use pricer_risk::parallel::{ordered_map, ParallelConfig};
///
/// let items: Vec<i32> = (0..10).collect();
/// let doubled = ordered_map(&items, &ParallelConfig::new(2, 0), |&x| x * 2);
/// assert_eq!(doubled, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
/// ```
pub fn ordered_map<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.batch_size)
            .map(mapper)
            .collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Fallible [`ordered_map`]; returns the error of the earliest failing item
/// when run sequentially, or one of the failures when run in parallel.
pub fn try_ordered_map<T, R, E, F>(
    items: &[T],
    config: &ParallelConfig,
    mapper: F,
) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.batch_size)
            .map(mapper)
            .collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_parallel_keeps_order() {
        let items: Vec<i32> = (0..1000).collect();
        let config = ParallelConfig::new(8, 10);
        let doubled: Vec<i32> = ordered_map(&items, &config, |&x| x * 2);

        assert_eq!(doubled.len(), 1000);
        assert!(doubled.iter().enumerate().all(|(i, &v)| v == 2 * i as i32));
    }

    #[test]
    fn test_ordered_map_sequential() {
        let items = vec![3, 1, 2];
        let out: Vec<i32> = ordered_map(&items, &ParallelConfig::sequential(), |&x| x + 1);
        assert_eq!(out, vec![4, 2, 3]);
    }

    #[test]
    fn test_try_ordered_map_propagates_error() {
        let items: Vec<i32> = (0..200).collect();
        let config = ParallelConfig::new(4, 1);
        let result: Result<Vec<i32>, String> = try_ordered_map(&items, &config, |&x| {
            if x == 150 {
                Err(format!("bad item {}", x))
            } else {
                Ok(x)
            }
        });
        assert_eq!(result, Err("bad item 150".to_string()));

        let ok: Result<Vec<i32>, String> = try_ordered_map(&items, &config, |&x| Ok(x));
        assert_eq!(ok.unwrap(), items);
    }

    #[test]
    fn test_parallel_config() {
        let config = ParallelConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!config.should_parallelize(50));
        assert!(config.should_parallelize(100));

        let zero = ParallelConfig::new(0, 5);
        assert_eq!(zero.batch_size, 1);
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }
}
