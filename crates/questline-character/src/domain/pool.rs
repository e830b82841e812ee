//! Bounded `current / max` counters used for health, mana and stamina.

use serde::Serialize;

/// A depletable resource whose current value never exceeds its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourcePool {
    current: u32,
    max: u32,
}

impl ResourcePool {
    /// A pool filled to `max`.
    #[must_use]
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Current value.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Maximum value.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Whether the pool is at its maximum.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Adds up to `amount`, clamped at `max`. Returns how much was actually
    /// restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }

    /// Removes `amount` if the pool holds at least that much.
    ///
    /// Returns `false` and leaves the pool untouched otherwise.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        match self.current.checked_sub(amount) {
            Some(left) => {
                self.current = left;
                true
            }
            None => false,
        }
    }

    /// The maximum after growing by `by`, or `None` on overflow.
    #[must_use]
    pub const fn grown_max(&self, by: u32) -> Option<u32> {
        self.max.checked_add(by)
    }

    /// Raises the maximum to `new_max` and refills.
    pub(crate) fn raise_and_refill(&mut self, new_max: u32) {
        debug_assert!(new_max >= self.max);
        *self = Self::full(new_max);
    }
}
