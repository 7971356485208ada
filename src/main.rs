//! backdrop-rs - Scrolling signal backdrop
//!
//! Opens a window and fills it with an ambient animated line graph: a
//! soft-clamped random walk that scrolls right to left, drawn as a
//! smoothed glowing line over a gradient area fill.
//!
//! ## Controls
//! - `Space` pauses and resumes the animation
//! - `Escape` closes the window

use eframe::egui;

mod error;
mod frame_loop;
mod render;
mod settings;
mod signal;

use frame_loop::{FrameLoop, SurfaceSize};
use render::PainterCanvas;
use settings::AppSettings;
use signal::FastRandom;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting backdrop-rs");

    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("backdrop-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "backdrop-rs",
        options,
        Box::new(|_cc| Ok(Box::new(BackdropApp::new(settings)))),
    )
}

/// Main application state
struct BackdropApp {
    settings: AppSettings,
    /// `None` until mounted, and forever if no surface was found
    backdrop: Option<FrameLoop<FastRandom>>,
    mount_attempted: bool,
}

impl BackdropApp {
    fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            backdrop: None,
            mount_attempted: false,
        }
    }

    /// Look up the window surface once and start the backdrop on it
    fn mount(&mut self, ctx: &egui::Context) {
        self.mount_attempted = true;

        let rng = self.settings.random_source();
        match FrameLoop::mount(surface(ctx), rng, self.settings.style()) {
            Ok(backdrop) => self.backdrop = Some(backdrop),
            Err(e) => log::warn!("{}; backdrop disabled", e),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (toggle, escape, closing) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::Escape),
                i.viewport().close_requested(),
            )
        });

        if escape {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if let Some(backdrop) = self.backdrop.as_mut() {
            if closing {
                backdrop.stop();
            } else if toggle {
                if backdrop.is_running() {
                    backdrop.stop();
                } else {
                    backdrop.resume();
                }
            }
        }
    }
}

/// The window's drawable area
///
/// Prefers the viewport's inner rect. Some platforms (Wayland, a window
/// that starts minimized) never report one, so fall back to the screen
/// rect egui lays out into. A rect that is not finite yields `None`.
fn surface(ctx: &egui::Context) -> Option<SurfaceSize> {
    let rect = ctx
        .input(|i| i.viewport().inner_rect)
        .unwrap_or_else(|| ctx.screen_rect());
    if !rect.is_finite() {
        return None;
    }
    Some(SurfaceSize::from(rect.size()))
}

impl eframe::App for BackdropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.mount_attempted {
            self.mount(ctx);
        }

        self.handle_input(ctx);

        let background = self.settings.background;
        let panel = egui::Frame::none().fill(background.to_color32());

        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            let Some(backdrop) = self.backdrop.as_mut() else {
                return;
            };

            let rect = ui.max_rect();
            let size = SurfaceSize::from(rect.size());
            let mut canvas = PainterCanvas::new(ui.painter(), rect.min, background);

            if backdrop.is_running() {
                backdrop.frame(size, &mut canvas, ctx);
            } else {
                backdrop.redraw(size, &mut canvas);
            }
        });
    }
}
