//! Signal buffer - the scrolling window of random-walk points
//!
//! The buffer holds one normalized value per `SPACING` pixels of width plus
//! a few overscan points, so the rightmost curve segment always has data
//! to draw into while the next point is scrolling in.
//!
//! ## Scrolling
//!
//! `update()` advances a sub-spacing pixel offset by `SPEED`. Whenever the
//! offset reaches `SPACING`, it resets to 0, the oldest point is dropped
//! and a freshly generated point is appended. The length only changes on
//! `resize()`.

use std::collections::VecDeque;

use super::random::RandomSource;
use super::walk::{next_value, START_VALUE};

/// Horizontal distance between consecutive points, in pixels
pub const SPACING: f32 = 40.0;

/// Pixels scrolled per frame
pub const SPEED: f32 = 2.0;

/// Extra points kept beyond the visible width
pub const OVERSCAN: usize = 5;

/// Number of points needed to cover `width` pixels
///
/// Negative or non-finite widths count as zero.
pub fn point_count(width: f32) -> usize {
    if !width.is_finite() || width <= 0.0 {
        return OVERSCAN;
    }
    (width / SPACING).ceil() as usize + OVERSCAN
}

/// Scrolling buffer of normalized vertical positions
pub struct SignalBuffer<R: RandomSource> {
    /// Oldest (leftmost) point first
    points: VecDeque<f32>,
    /// Sub-spacing scroll position, always in [0, SPACING)
    scroll_offset: f32,
    width: f32,
    height: f32,
    /// Total points shifted in since the last resize
    shifts: u64,
    rng: R,
}

impl<R: RandomSource> SignalBuffer<R> {
    /// Create an empty buffer; call `resize()` before drawing
    pub fn new(rng: R) -> Self {
        Self {
            points: VecDeque::new(),
            scroll_offset: 0.0,
            width: 0.0,
            height: 0.0,
            shifts: 0,
            rng,
        }
    }

    /// Rebuild the buffer for new surface dimensions
    ///
    /// Discards all previous points and restarts the walk from
    /// `START_VALUE`; the scroll offset resets to 0.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = sanitize(width);
        self.height = sanitize(height);

        let count = point_count(self.width);
        self.points.clear();
        self.points.reserve(count);

        let mut value = START_VALUE;
        for _ in 0..count {
            self.points.push_back(value);
            value = next_value(value, &mut self.rng);
        }

        self.scroll_offset = 0.0;
        let shifted = std::mem::take(&mut self.shifts);

        log::debug!(
            "Signal buffer rebuilt: {}x{} -> {} points ({} shifted since last rebuild)",
            self.width,
            self.height,
            count,
            shifted
        );
    }

    /// Advance the scroll by one frame
    pub fn update(&mut self) {
        self.scroll_offset += SPEED;

        if self.scroll_offset >= SPACING {
            self.scroll_offset = 0.0;
            if let Some(&last) = self.points.back() {
                self.points.pop_front();
                let next = next_value(last, &mut self.rng);
                self.points.push_back(next);
                self.shifts += 1;
            }
        }
    }

    /// Points in order, oldest first
    pub fn points(&self) -> &VecDeque<f32> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Points shifted in since the last resize
    #[cfg(test)]
    pub fn shifts(&self) -> u64 {
        self.shifts
    }
}

fn sanitize(dim: f32) -> f32 {
    if dim.is_finite() && dim > 0.0 {
        dim
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::random::{FastRandom, Scripted};

    fn seeded(width: f32, height: f32) -> SignalBuffer<FastRandom> {
        let mut buffer = SignalBuffer::new(FastRandom::seeded(99));
        buffer.resize(width, height);
        buffer
    }

    #[test]
    fn test_point_count() {
        assert_eq!(point_count(800.0), 25);
        assert_eq!(point_count(400.0), 15);
        assert_eq!(point_count(801.0), 26);
        assert_eq!(point_count(1.0), 6);
        assert_eq!(point_count(0.0), 5);
        assert_eq!(point_count(-10.0), 5);
        assert_eq!(point_count(f32::NAN), 5);
    }

    #[test]
    fn test_resize_lengths() {
        for &width in &[0.0, 1.0, 39.0, 40.0, 41.0, 800.0, 1920.0] {
            let buffer = seeded(width, 400.0);
            assert_eq!(buffer.len(), point_count(width));
            assert_eq!(buffer.points()[0], START_VALUE);
            for &v in buffer.points() {
                assert!(v.is_finite());
                assert!((0.0..=1.0).contains(&v), "value out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_zero_size_surface() {
        let mut buffer = SignalBuffer::new(Scripted::constant(0.5));
        buffer.resize(0.0, 0.0);
        assert_eq!(buffer.len(), 5);
        // Zero perturbation never leaves the band, so no nudge fires
        assert!(buffer.points().iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }

    #[test]
    fn test_scroll_one_spacing() {
        let mut buffer = seeded(800.0, 400.0);
        assert_eq!(buffer.len(), 25);
        let before: Vec<f32> = buffer.points().iter().copied().collect();

        for _ in 0..20 {
            buffer.update();
        }

        let after: Vec<f32> = buffer.points().iter().copied().collect();
        assert_eq!(after.len(), 25);
        assert_eq!(buffer.scroll_offset(), 0.0);
        assert_eq!(buffer.shifts(), 1);
        assert_eq!(&after[..24], &before[1..]);
    }

    #[test]
    fn test_offset_after_k_updates() {
        for &k in &[0usize, 1, 19, 20, 21, 39, 40, 57, 200] {
            let mut buffer = seeded(800.0, 400.0);
            for _ in 0..k {
                buffer.update();
            }
            let total = k as f32 * SPEED;
            let expected_offset = total % SPACING;
            assert!((buffer.scroll_offset() - expected_offset).abs() < 1e-4);
            assert!(buffer.scroll_offset() < SPACING);
            assert_eq!(buffer.shifts(), (total / SPACING).floor() as u64);
            assert_eq!(buffer.len(), 25);
        }
    }

    #[test]
    fn test_resize_discards_previous_walk() {
        let mut buffer = seeded(800.0, 400.0);
        for _ in 0..45 {
            buffer.update();
        }

        buffer.resize(400.0, 400.0);
        assert_eq!(buffer.len(), 15);
        assert_eq!(buffer.points()[0], START_VALUE);
        assert_eq!(buffer.scroll_offset(), 0.0);
        assert_eq!(buffer.shifts(), 0);
        assert_eq!(buffer.width(), 400.0);
    }

    #[test]
    fn test_update_before_resize_is_harmless() {
        let mut buffer = SignalBuffer::new(Scripted::constant(0.5));
        for _ in 0..100 {
            buffer.update();
        }
        assert!(buffer.is_empty());
        assert!(buffer.scroll_offset() < SPACING);
    }
}
