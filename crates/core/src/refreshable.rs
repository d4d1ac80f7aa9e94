//! Sets rebuilt from an external list of identifiers.
//!
//! Typical use is a config-driven allow list (`["zombie", "skeleton"]`) mapped
//! onto an enum. Identifiers the mapper does not recognise are skipped.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

type Refresher = Box<dyn Fn() -> Vec<String>>;
type Mapper<E> = Box<dyn Fn(&str) -> Option<E>>;

/// An ordered set whose contents can be re-pulled from a refresher.
///
/// Iteration follows `E`'s `Ord`, i.e. declaration order for derived enums.
pub struct RefreshableSet<E> {
    elements: BTreeSet<E>,
    refresher: Refresher,
    mapper: Mapper<E>,
}

impl<E: Ord> RefreshableSet<E> {
    /// Create the set and populate it immediately.
    pub fn new<F, M>(refresher: F, mapper: M) -> Self
    where
        F: Fn() -> Vec<String> + 'static,
        M: Fn(&str) -> Option<E> + 'static,
    {
        let mut set = Self {
            elements: BTreeSet::new(),
            refresher: Box::new(refresher),
            mapper: Box::new(mapper),
        };
        set.refresh();
        set
    }

    /// Discard the current contents and rebuild from the refresher.
    ///
    /// Manual insertions are lost.
    pub fn refresh(&mut self) {
        self.elements.clear();
        for id in (self.refresher)() {
            if let Some(element) = (self.mapper)(&id) {
                self.elements.insert(element);
            }
        }
    }

    /// Insert an element. Returns `false` if it was already present.
    pub fn insert(&mut self, element: E) -> bool {
        self.elements.insert(element)
    }

    /// Remove an element. Returns whether it was present.
    pub fn remove(&mut self, element: &E) -> bool {
        self.elements.remove(element)
    }

    /// Whether `element` is present.
    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<'a, E> IntoIterator for &'a RefreshableSet<E> {
    type Item = &'a E;
    type IntoIter = btree_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for RefreshableSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}
