//! Capacity management settings for [`List`](crate::List).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When and how a list resizes its storage.
///
/// A list grows before an insert once `len >= capacity * growth_load_factor`,
/// multiplying its capacity by `growth_factor`. It shrinks after a delete once
/// `len <= capacity * shrink_load_factor`, halving its capacity but never
/// going below one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResizePolicy {
    /// Capacity multiplier applied on growth.
    pub growth_factor: usize,

    /// Fraction of capacity that triggers growth before an insert.
    pub growth_load_factor: f64,

    /// Fraction of capacity at or below which a delete halves capacity.
    pub shrink_load_factor: f64,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            growth_factor: 2,
            growth_load_factor: 1.0,
            shrink_load_factor: 0.25,
        }
    }
}

impl ResizePolicy {
    /// Shrinks as soon as the list is half empty.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            shrink_load_factor: 0.5,
            ..Self::default()
        }
    }

    /// Grows ahead of need, at three quarters load.
    #[must_use]
    pub fn eager() -> Self {
        Self {
            growth_load_factor: 0.75,
            ..Self::default()
        }
    }

    /// Builder method to set the growth multiplier (values below 2 act as 2).
    #[must_use]
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Builder method to set the growth threshold.
    #[must_use]
    pub fn with_growth_load_factor(mut self, load: f64) -> Self {
        self.growth_load_factor = load;
        self
    }

    /// Builder method to set the shrink threshold.
    #[must_use]
    pub fn with_shrink_load_factor(mut self, load: f64) -> Self {
        self.shrink_load_factor = load;
        self
    }

    /// True if a list holding `len` of `capacity` slots must grow before
    /// taking another element.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn should_grow(&self, len: usize, capacity: usize) -> bool {
        len >= capacity || len as f64 >= capacity as f64 * self.growth_load_factor
    }

    /// Capacity after one growth step.
    #[must_use]
    pub fn grown(&self, capacity: usize) -> usize {
        capacity.saturating_mul(self.growth_factor.max(2))
    }

    /// True if a list holding `len` of `capacity` slots should shrink.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        capacity > 1 && len as f64 <= capacity as f64 * self.shrink_load_factor
    }

    /// Capacity after one shrink step.
    #[must_use]
    pub fn shrunk(capacity: usize) -> usize {
        (capacity / 2).max(1)
    }
}
