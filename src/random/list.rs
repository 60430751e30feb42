//! Seeded random draws from an immutable list.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::DrawPolicy;
use crate::error::{Result, SfxError};

/// Construction parameters for a [`ListRandomizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListRandomizerConfig {
    /// Selection discipline.
    pub policy: DrawPolicy,
    /// Seed for the randomizer's own stream.
    pub random_seed: u64,
}

/// Draws items from a fixed list according to a [`DrawPolicy`].
///
/// The randomizer owns its items and a private random stream, so two
/// randomizers built from the same configuration and list produce the same
/// sequence of draws. It knows nothing about what the items represent.
///
/// # Examples
///
/// ```
/// use noisemix::{DrawPolicy, ListRandomizer, ListRandomizerConfig};
///
/// let config = ListRandomizerConfig {
///     policy: DrawPolicy::WithoutReplacement,
///     random_seed: 42,
/// };
/// let mut list = ListRandomizer::new(config, vec!["rain", "wind", "traffic"]).unwrap();
///
/// let mut cycle: Vec<&str> = (0..3).map(|_| *list.draw()).collect();
/// cycle.sort();
/// assert_eq!(cycle, ["rain", "traffic", "wind"]);
/// ```
#[derive(Debug, Clone)]
pub struct ListRandomizer<T> {
    items: Vec<T>,
    config: ListRandomizerConfig,
    rng: ChaCha8Rng,
    order: Vec<usize>, // current permutation, without-replacement only
    cursor: usize,     // next position in `order`, or next item for sequential
}

impl<T> ListRandomizer<T> {
    /// Creates a randomizer over `items`.
    ///
    /// # Errors
    ///
    /// Returns [`SfxError::EmptyList`] if `items` is empty.
    pub fn new(config: ListRandomizerConfig, items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(SfxError::EmptyList);
        }

        let len = items.len();
        let (order, cursor) = match config.policy {
            // An exhausted permutation forces a shuffle on the first draw.
            DrawPolicy::WithoutReplacement => ((0..len).collect(), len),
            DrawPolicy::WithReplacement | DrawPolicy::Sequential => (Vec::new(), 0),
        };

        Ok(Self {
            items,
            config,
            rng: ChaCha8Rng::seed_from_u64(config.random_seed),
            order,
            cursor,
        })
    }

    /// Returns the next item. Never fails and never returns an item outside
    /// the list.
    pub fn draw(&mut self) -> &T {
        let index = match self.config.policy {
            DrawPolicy::WithReplacement => self.rng.gen_range(0..self.items.len()),
            DrawPolicy::WithoutReplacement => {
                if self.cursor >= self.order.len() {
                    self.order.shuffle(&mut self.rng);
                    self.cursor = 0;
                }
                let index = self.order[self.cursor];
                self.cursor += 1;
                index
            }
            DrawPolicy::Sequential => {
                let index = self.cursor;
                self.cursor = (self.cursor + 1) % self.items.len();
                index
            }
        };
        &self.items[index]
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in their original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The selection discipline in use.
    pub fn policy(&self) -> DrawPolicy {
        self.config.policy
    }
}

/// Endless stream of cloned draws.
impl<T: Clone> Iterator for ListRandomizer<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.draw().clone())
    }
}

impl<T> fmt::Display for ListRandomizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListRandomizer{{policy={} size={} seed={}}}",
            self.config.policy,
            self.items.len(),
            self.config.random_seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config(policy: DrawPolicy, random_seed: u64) -> ListRandomizerConfig {
        ListRandomizerConfig {
            policy,
            random_seed,
        }
    }

    fn randomizer<T>(policy: DrawPolicy, seed: u64, items: Vec<T>) -> ListRandomizer<T> {
        ListRandomizer::new(config(policy, seed), items).unwrap()
    }

    #[test]
    fn test_empty_list_rejected() {
        let result = ListRandomizer::<u32>::new(config(DrawPolicy::WithReplacement, 1), vec![]);
        assert!(matches!(result, Err(SfxError::EmptyList)));
    }

    #[test]
    fn test_with_replacement_stays_in_list() {
        let mut list = randomizer(DrawPolicy::WithReplacement, 3, vec![10, 20, 30]);
        for _ in 0..1000 {
            assert!([10, 20, 30].contains(list.draw()));
        }
    }

    #[test]
    fn test_with_replacement_reaches_every_item() {
        let mut list = randomizer(DrawPolicy::WithReplacement, 9, (0..5).collect());
        let seen: HashSet<i32> = (0..500).map(|_| *list.draw()).collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_without_replacement_covers_each_cycle() {
        let items: Vec<u32> = (0..7).collect();
        let mut list = randomizer(DrawPolicy::WithoutReplacement, 11, items.clone());

        for _ in 0..20 {
            let mut cycle: Vec<u32> = (0..items.len()).map(|_| *list.draw()).collect();
            cycle.sort();
            assert_eq!(cycle, items);
        }
    }

    #[test]
    fn test_without_replacement_reshuffles() {
        let items: Vec<u32> = (0..16).collect();
        let mut list = randomizer(DrawPolicy::WithoutReplacement, 5, items);
        let first: Vec<u32> = (0..16).map(|_| *list.draw()).collect();
        let second: Vec<u32> = (0..16).map(|_| *list.draw()).collect();
        // Two equal permutations of 16 items would be a 1 in 16! coincidence.
        assert_ne!(first, second);
    }

    #[test]
    fn test_sequential_wraps() {
        let mut list = randomizer(DrawPolicy::Sequential, 0, vec!["a", "b", "c"]);
        let drawn: Vec<&str> = (0..7).map(|_| *list.draw()).collect();
        assert_eq!(drawn, ["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_single_item_never_stalls() {
        for policy in [
            DrawPolicy::WithReplacement,
            DrawPolicy::WithoutReplacement,
            DrawPolicy::Sequential,
        ] {
            let mut list = randomizer(policy, 2, vec!["only"]);
            for _ in 0..10 {
                assert_eq!(*list.draw(), "only");
            }
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        for policy in [DrawPolicy::WithReplacement, DrawPolicy::WithoutReplacement] {
            let items: Vec<u32> = (0..32).collect();
            let a = ListRandomizer::new(config(policy, 1234), items.clone()).unwrap();
            let b = ListRandomizer::new(config(policy, 1234), items).unwrap();
            let a: Vec<u32> = a.take(100).collect();
            let b: Vec<u32> = b.take(100).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seed_different_draws() {
        let items: Vec<u32> = (0..32).collect();
        let a = randomizer(DrawPolicy::WithReplacement, 1, items.clone());
        let b = randomizer(DrawPolicy::WithReplacement, 2, items);
        let a: Vec<u32> = a.take(50).collect();
        let b: Vec<u32> = b.take(50).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let list = randomizer(DrawPolicy::Sequential, 7, vec![1, 2]);
        assert_eq!(list.to_string(), "ListRandomizer{policy=sequential size=2 seed=7}");
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.items(), &[1, 2]);
        assert_eq!(list.policy(), DrawPolicy::Sequential);
    }
}
