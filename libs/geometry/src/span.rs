//! A one-dimensional span.
//!
//! A span represents the closed interval `[start, stop]`.

use serde::{Deserialize, Serialize};

/// A closed interval of coordinates in one dimension.
///
/// Represents the range `[start, stop]`.
#[derive(
    Debug, Default, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize, PartialEq, Eq,
)]
pub struct Span {
    start: i64,
    stop: i64,
}

impl Span {
    /// Creates a new [`Span`] between two integers.
    pub fn new(start: i64, stop: i64) -> Self {
        use std::cmp::{max, min};
        let lower = min(start, stop);
        let upper = max(start, stop);
        Self {
            start: lower,
            stop: upper,
        }
    }

    /// Creates a new [`Span`] between two integers.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `start` is less
    /// than or equal to `stop`.
    pub const unsafe fn new_unchecked(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// Gets the start of the span.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Gets the stop of the span.
    #[inline]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    /// Gets the length of the span.
    #[inline]
    pub const fn length(&self) -> i64 {
        self.stop - self.start
    }

    /// Checks if the span contains the given coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let span = Span::new(10, 20);
    /// assert!(span.contains(10));
    /// assert!(span.contains(20));
    /// assert!(!span.contains(21));
    /// ```
    #[inline]
    pub const fn contains(&self, coord: i64) -> bool {
        self.start <= coord && coord <= self.stop
    }

    /// Checks if the span intersects with the [`Span`] `other`.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        !(other.stop < self.start || self.stop < other.start)
    }
}

impl From<(i64, i64)> for Span {
    fn from(value: (i64, i64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Span> for (i64, i64) {
    fn from(value: Span) -> Self {
        (value.start(), value.stop())
    }
}
