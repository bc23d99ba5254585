//! Conditional parallel iteration for candidate evaluation.
//!
//! Uses rayon when the `parallel` feature is enabled and the engine config
//! asks for it. Output order always matches input order.

use crate::config::EngineConfig;

/// Maps `f` over `items`, on the rayon pool when
/// [`EngineConfig::should_parallelize`] allows it.
///
/// # Example
///
/// ```ignore
/// let outcomes = maybe_parallel_map(&candidates, &config, |c| screener.evaluate(c, 5, 10));
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &EngineConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let items: Vec<u32> = (0..64).collect();
        let config = EngineConfig::default().with_parallel(true);
        let doubled = maybe_parallel_map(&items, &config, |x| x * 2);
        assert_eq!(doubled, (0..64).map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_sequential_when_disabled() {
        let items = vec!["a", "b", "c"];
        let config = EngineConfig::default();
        assert!(!config.should_parallelize(items.len()));
        let upper = maybe_parallel_map(&items, &config, |s| s.to_uppercase());
        assert_eq!(upper, vec!["A", "B", "C"]);
    }
}
