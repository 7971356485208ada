//! RGBA color with a fractional alpha channel
//!
//! Stored unmultiplied, the way CSS `rgba()` colors are written, so that
//! gradient interpolation and the settings file both read naturally.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Unmultiplied RGBA color: 8-bit channels, alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Linear interpolation between two colors
    ///
    /// `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to egui's premultiplied color
    pub fn to_color32(self) -> Color32 {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0, 0, 0, 1.0)
    }
}

/// Neon cyan accent
pub const CYAN: Rgba = Rgba::new(0, 243, 255, 1.0);

/// Neon purple accent
pub const PURPLE: Rgba = Rgba::new(188, 19, 254, 1.0);

/// Near-black page background
pub const BACKGROUND: Rgba = Rgba::new(5, 5, 5, 1.0);
