//! Values computed on first access.

use once_cell::unsync::OnceCell;
use std::fmt;

/// A value produced by `evaluator` the first time it is read, then cached
/// until [`LazyValue::invalidate`] is called.
pub struct LazyValue<T, F = fn() -> T> {
    cell: OnceCell<T>,
    evaluator: F,
}

impl<T, F: Fn() -> T> LazyValue<T, F> {
    /// Wrap `evaluator` without running it.
    pub fn new(evaluator: F) -> Self {
        Self {
            cell: OnceCell::new(),
            evaluator,
        }
    }

    /// Cached value, evaluating it first if needed.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.evaluator)())
    }

    /// Whether the value is currently cached.
    pub fn is_evaluated(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Run `consumer` on the cached value, if any. Never triggers evaluation.
    pub fn if_evaluated(&self, consumer: impl FnOnce(&T)) {
        if let Some(value) = self.cell.get() {
            consumer(value);
        }
    }

    /// Drop the cached value so the next [`Self::get`] evaluates again.
    pub fn invalidate(&mut self) -> Option<T> {
        self.cell.take()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazyValue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyValue")
            .field("value", &self.cell.get())
            .finish_non_exhaustive()
    }
}
