//! Frame loop - drives the backdrop once per display refresh
//!
//! Each frame runs, in order: pending resize, `update()`, `draw()`, and a
//! request for the next frame. Resizes are applied to completion before
//! the update so a draw never sees a buffer built for stale dimensions.
//!
//! The loop can be stopped (window closing, user pause). A stopped loop
//! neither advances nor asks for more frames, but can still repaint its
//! frozen state.

use eframe::egui;

use crate::error::BackdropError;
use crate::render::{BackdropStyle, Canvas, ScrollingSignalRenderer};
use crate::signal::RandomSource;

/// "Run again before the next repaint"
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

/// Dimensions of the drawable surface, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<egui::Vec2> for SurfaceSize {
    fn from(size: egui::Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}

/// The running backdrop animation
pub struct FrameLoop<R: RandomSource> {
    renderer: ScrollingSignalRenderer<R>,
    /// Size the signal was last built for
    size: SurfaceSize,
    running: bool,
    frames: u64,
}

impl<R: RandomSource> FrameLoop<R> {
    /// Attach the backdrop to a surface and start it
    ///
    /// # Arguments
    /// * `surface` - The drawable surface, if one was found
    /// * `rng` - Randomness for the walk
    /// * `style` - Colors and stroke parameters
    ///
    /// # Errors
    /// `MissingSurface` when there is nothing to draw on; callers should
    /// stay inert in that case.
    pub fn mount(
        surface: Option<SurfaceSize>,
        rng: R,
        style: BackdropStyle,
    ) -> Result<Self, BackdropError> {
        let size = surface.ok_or(BackdropError::MissingSurface)?;

        let mut renderer = ScrollingSignalRenderer::new(rng, style);
        renderer.resize(size.width, size.height);

        log::info!(
            "Backdrop mounted on {}x{} surface ({} points)",
            size.width,
            size.height,
            renderer.signal().len()
        );

        Ok(Self {
            renderer,
            size,
            running: true,
            frames: 0,
        })
    }

    /// Rebuild the signal if the surface changed size
    fn sync_size(&mut self, size: SurfaceSize) {
        if size != self.size {
            self.renderer.resize(size.width, size.height);
            self.size = size;
        }
    }

    /// Run one iteration of the loop
    ///
    /// # Returns
    /// `true` if a frame was produced, `false` if the loop is stopped
    pub fn frame<C, S>(&mut self, size: SurfaceSize, canvas: &mut C, scheduler: &S) -> bool
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if !self.running {
            return false;
        }

        self.sync_size(size);
        self.renderer.update();
        self.renderer.draw(canvas);
        self.frames += 1;

        scheduler.request_frame();
        true
    }

    /// Paint the current state without advancing or rescheduling
    pub fn redraw<C: Canvas + ?Sized>(&mut self, size: SurfaceSize, canvas: &mut C) {
        self.sync_size(size);
        self.renderer.draw(canvas);
    }

    /// Stop the loop; no further frames are requested
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Backdrop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    /// Restart a stopped loop
    pub fn resume(&mut self) {
        if !self.running {
            log::info!("Backdrop resumed");
        }
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames produced since mounting
    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &ScrollingSignalRenderer<R> {
        &self.renderer
    }
}
