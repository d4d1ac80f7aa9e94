//! Weighted random selection.
//!
//! Items are stored under their *cumulative* weight: the running total of
//! every weight added so far, including their own. A draw picks a uniform
//! value in `[0, total)` and returns the item with the smallest cumulative key
//! greater than or equal to it, so each item wins with probability
//! `weight / total` and a draw costs `O(log n)`.
//!
//! Keying by cumulative weight has two visible consequences which callers
//! rely on and which are kept as-is:
//!
//! - [`WeightedRandomSelector::add_all`] re-adds the source's cumulative keys
//!   as plain weights. The merged proportions only match the source's when the
//!   source holds a single item.
//! - [`WeightedRandomSelector::remove`] leaves the running total and every
//!   other key untouched. The removed item's share goes to the next higher
//!   key, and draws landing above the highest surviving key come back empty.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source shared between selectors created with
/// [`WeightedRandomSelector::copy_of`].
pub type SharedRng<R> = Rc<RefCell<R>>;

/// Computes a draw weight for an item.
///
/// Implemented for every `Fn(&T) -> f64`.
pub trait WeightProvider<T: ?Sized> {
    /// Weight for `item`. Non-positive weights are rejected by the selector.
    fn weight(&self, item: &T) -> f64;
}

impl<T: ?Sized, F> WeightProvider<T> for F
where
    F: Fn(&T) -> f64,
{
    fn weight(&self, item: &T) -> f64 {
        self(item)
    }
}

/// Map key wrapping a cumulative weight. Only finite positive values are stored.
#[derive(Debug, Clone, Copy)]
struct CumulativeWeight(f64);

impl PartialEq for CumulativeWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CumulativeWeight {}

impl PartialOrd for CumulativeWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CumulativeWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Container that picks items at random in proportion to their weight.
///
/// Not thread-safe: the random source is an `Rc<RefCell<_>>` shared with any
/// copies, so the selector is neither `Send` nor `Sync`.
pub struct WeightedRandomSelector<E, R = StdRng> {
    entries: BTreeMap<CumulativeWeight, E>,
    total: f64,
    rng: SharedRng<R>,
}

impl<E> WeightedRandomSelector<E, StdRng> {
    /// Create an empty selector backed by an entropy-seeded [`StdRng`].
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty selector with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<E> Default for WeightedRandomSelector<E, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> WeightedRandomSelector<E, R> {
    /// Create an empty selector that owns `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_shared_rng(Rc::new(RefCell::new(rng)))
    }

    /// Create an empty selector drawing from an existing shared random source.
    pub fn with_shared_rng(rng: SharedRng<R>) -> Self {
        Self {
            entries: BTreeMap::new(),
            total: 0.0,
            rng,
        }
    }

    /// Handle to the random source used by [`Self::next`].
    pub fn rng(&self) -> SharedRng<R> {
        Rc::clone(&self.rng)
    }

    /// Add `item` with the given weight.
    ///
    /// Returns `false` without touching the selector when `weight` is not a
    /// finite value greater than zero, or when adding it would overflow the
    /// running total. If the new running total equals an
    /// existing key (a weight too small to move the total), the earlier item at
    /// that key is replaced.
    pub fn add(&mut self, weight: f64, item: E) -> bool {
        if !weight.is_finite() || weight <= 0.0 {
            return false;
        }

        let total = self.total + weight;
        if !total.is_finite() {
            return false;
        }

        self.total = total;
        self.entries.insert(CumulativeWeight(total), item);
        true
    }

    /// Re-add every entry of `other`, using its cumulative keys as weights.
    ///
    /// This is a mechanical re-insertion, not a proportional merge: an `other`
    /// holding weights `1.0` and `2.0` (keys `1.0`, `3.0`) is added here as
    /// weights `1.0` and `3.0`.
    pub fn add_all<R2>(&mut self, other: &WeightedRandomSelector<E, R2>)
    where
        E: Clone,
    {
        for (key, item) in &other.entries {
            self.add(key.0, item.clone());
        }
    }

    /// Add every item in `items`, weighing each with `provider`.
    ///
    /// Items whose weight is rejected by [`Self::add`] are dropped. Returns the
    /// number of items accepted.
    pub fn extend_weighted<I, P>(&mut self, items: I, provider: P) -> usize
    where
        I: IntoIterator<Item = E>,
        P: WeightProvider<E>,
    {
        let mut accepted = 0;
        for item in items {
            let weight = provider.weight(&item);
            if self.add(weight, item) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Remove the lowest-keyed entry equal to `item`.
    ///
    /// The running total is left unchanged, see the module docs. Returns
    /// whether an entry was removed.
    pub fn remove(&mut self, item: &E) -> bool
    where
        E: PartialEq,
    {
        let key = self
            .entries
            .iter()
            .find(|(_, value)| *value == item)
            .map(|(key, _)| *key);

        match key {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// Whether any entry equals `item`.
    pub fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.entries.values().any(|value| value == item)
    }

    /// Items in ascending cumulative-key order.
    pub fn values(&self) -> impl Iterator<Item = &E> + '_ {
        self.entries.values()
    }

    /// `(cumulative_key, item)` pairs in ascending key order.
    pub fn weights(&self) -> impl Iterator<Item = (f64, &E)> + '_ {
        self.entries.iter().map(|(key, item)| (key.0, item))
    }

    /// Running sum of every accepted weight since the last [`Self::clear`].
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the running total.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = 0.0;
    }

    /// Draw an item using the supplied random source.
    ///
    /// Returns `None` when the selector is empty or the draw lands above the
    /// highest surviving key.
    pub fn next_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Option<&E> {
        let value = rng.gen::<f64>() * self.total;
        self.entries
            .range(CumulativeWeight(value)..)
            .next()
            .map(|(_, item)| item)
    }
}

impl<E, R: Rng> WeightedRandomSelector<E, R> {
    /// Draw an item using the selector's own random source.
    pub fn next(&self) -> Option<&E> {
        let mut rng = self.rng.borrow_mut();
        self.next_with(&mut *rng)
    }
}

impl<E: Clone, R> WeightedRandomSelector<E, R> {
    /// Build a selector sharing `source`'s random source and re-adding its
    /// entries through [`Self::add_all`].
    pub fn copy_of(source: &Self) -> Self {
        let mut copy = Self::with_shared_rng(source.rng());
        copy.add_all(source);
        copy
    }
}

impl<E: fmt::Debug, R> fmt::Debug for WeightedRandomSelector<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedRandomSelector")
            .field("total", &self.total)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_commons_testkit::{fixed_fraction_rng as fixed, max_fraction_rng};

    fn abc() -> WeightedRandomSelector<&'static str> {
        let mut selector = WeightedRandomSelector::seeded(7);
        assert!(selector.add(1.0, "a"));
        assert!(selector.add(2.0, "b"));
        assert!(selector.add(3.0, "c"));
        selector
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let mut selector = WeightedRandomSelector::seeded(7);
        assert!(selector.add(f64::MAX, "a"));
        assert!(!selector.add(f64::MAX, "b"));
        assert_eq!(selector.len(), 1);
        assert_eq!(selector.total_weight(), f64::MAX);
        assert_eq!(selector.next_with(&mut fixed(0.5)), Some(&"a"));
    }

    #[test]
    fn keys_are_cumulative() {
        let selector = abc();
        let keys: Vec<f64> = selector.weights().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![1.0, 3.0, 6.0]);
        assert_eq!(selector.total_weight(), 6.0);
        assert_eq!(selector.len(), 3);
    }

    #[test]
    fn rejects_non_positive_weights() {
        let mut selector = abc();
        assert!(!selector.add(0.0, "zero"));
        assert!(!selector.add(-1.0, "negative"));
        assert!(!selector.add(f64::NAN, "nan"));
        assert!(!selector.add(f64::INFINITY, "inf"));
        assert_eq!(selector.len(), 3);
        assert_eq!(selector.total_weight(), 6.0);
    }

    #[test]
    fn zero_draw_yields_first_item() {
        let selector = abc();
        assert_eq!(selector.next_with(&mut fixed(0.0)), Some(&"a"));
    }

    #[test]
    fn draw_uses_ceiling_lookup() {
        let selector = abc();
        // 0.5 * 6 = 3.0 lands exactly on b's key.
        assert_eq!(selector.next_with(&mut fixed(0.5)), Some(&"b"));
        // 0.25 * 6 = 1.5 falls between a and b.
        assert_eq!(selector.next_with(&mut fixed(0.25)), Some(&"b"));
        assert_eq!(selector.next_with(&mut max_fraction_rng()), Some(&"c"));
    }

    #[test]
    fn empty_selector_draws_nothing() {
        let selector: WeightedRandomSelector<u8> = WeightedRandomSelector::seeded(1);
        assert_eq!(selector.next(), None);
        assert_eq!(selector.next_with(&mut fixed(0.5)), None);
        assert_eq!(selector.next_with(&mut max_fraction_rng()), None);
    }

    #[test]
    fn remove_leaves_a_gap_for_the_next_key() {
        let mut selector = abc();
        assert!(selector.remove(&"b"));
        assert!(!selector.contains(&"b"));
        assert_eq!(selector.total_weight(), 6.0);
        assert_eq!(selector.next_with(&mut fixed(0.5)), Some(&"c"));

        assert!(selector.remove(&"c"));
        assert_eq!(selector.next_with(&mut max_fraction_rng()), None);
        assert_eq!(selector.next_with(&mut fixed(0.0)), Some(&"a"));
    }

    #[test]
    fn remove_takes_lowest_key_first() {
        let mut selector = WeightedRandomSelector::seeded(3);
        selector.add(1.0, "x");
        selector.add(1.0, "y");
        selector.add(1.0, "x");
        assert!(selector.remove(&"x"));
        let keys: Vec<(f64, &str)> = selector.weights().map(|(k, v)| (k, *v)).collect();
        assert_eq!(keys, vec![(2.0, "y"), (3.0, "x")]);
        assert!(!selector.remove(&"missing"));
    }

    #[test]
    fn add_all_reuses_cumulative_keys_as_weights() {
        let mut source = WeightedRandomSelector::seeded(5);
        source.add(1.0, "a");
        source.add(2.0, "b");

        let mut target = WeightedRandomSelector::seeded(6);
        target.add_all(&source);
        let keys: Vec<f64> = target.weights().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![1.0, 4.0]);
        assert_eq!(target.total_weight(), 4.0);
    }

    #[test]
    fn copy_of_shares_rng_and_inherits_merge() {
        let source = abc();
        let copy = WeightedRandomSelector::copy_of(&source);
        assert!(Rc::ptr_eq(&source.rng(), &copy.rng()));
        // 1, 1+3, 4+6
        assert_eq!(copy.total_weight(), 10.0);
        assert_eq!(copy.values().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn absorbed_weight_overwrites_existing_key() {
        let mut selector = WeightedRandomSelector::seeded(9);
        selector.add(1e20, "big");
        assert!(selector.add(1.0, "tiny"));
        assert_eq!(selector.len(), 1);
        assert_eq!(selector.values().next(), Some(&"tiny"));
    }

    #[test]
    fn clear_resets_total() {
        let mut selector = abc();
        selector.clear();
        assert!(selector.is_empty());
        assert_eq!(selector.total_weight(), 0.0);
        assert!(selector.add(2.0, "d"));
        assert_eq!(selector.weights().next(), Some((2.0, &"d")));
    }

    #[test]
    fn extend_weighted_skips_rejected_items() {
        let mut selector = WeightedRandomSelector::seeded(11);
        let accepted = selector.extend_weighted(vec![3_i32, 0, -2, 5], |n: &i32| *n as f64);
        assert_eq!(accepted, 2);
        assert_eq!(selector.total_weight(), 8.0);
        assert_eq!(selector.values().copied().collect::<Vec<_>>(), vec![3, 5]);
    }

    #[test]
    fn nullable_items_are_supported() {
        let mut selector: WeightedRandomSelector<Option<&str>> = WeightedRandomSelector::seeded(2);
        selector.add(1.0, None);
        selector.add(1.0, Some("loot"));
        assert!(selector.contains(&None));
        assert_eq!(selector.next_with(&mut fixed(0.0)), Some(&None));
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let a = abc();
        let b = abc();
        let draws_a: Vec<_> = (0..32).map(|_| *a.next().unwrap()).collect();
        let draws_b: Vec<_> = (0..32).map(|_| *b.next().unwrap()).collect();
        assert_eq!(draws_a, draws_b);
    }
}
