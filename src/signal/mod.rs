//! Signal module - the data behind the backdrop line
//!
//! This module provides:
//! - `RandomSource` trait and the `fastrand`-backed `FastRandom`
//! - Soft-clamped random walk step (`next_value`)
//! - `SignalBuffer`, the scrolling window of points

mod buffer;
mod random;
mod walk;

#[allow(unused_imports)]
pub use buffer::{point_count, SignalBuffer, OVERSCAN, SPACING, SPEED};
pub use random::{FastRandom, RandomSource};
#[allow(unused_imports)]
pub use walk::{next_value, START_VALUE};

#[cfg(test)]
pub use random::Scripted;
