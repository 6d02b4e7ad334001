//! Desktop preview for navlight-composer
//!
//! A background thread plays the timer interrupt and posts ticks into a
//! static counter; the UI thread drains them through the scheduler and paints
//! the strip.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Once;
use std::thread;
use std::time::Duration as StdDuration;

use eframe::egui::{self};
use navlight_composer::{
    Duration, FrameBuffer, LightConfig, OutputDriver, Rgb, Side, StrobeScheduler, TickCounter,
    TickTimer, config::PIXEL_COUNT,
};

/// Size of each LED circle in pixels
const LED_SIZE: f32 = 40.0;

/// Gap between LEDs
const LED_GAP: f32 = 12.0;

/// Ticks posted by the simulated timer interrupt
static TICKS: TickCounter = TickCounter::new();

/// Tick thread is paused
static PAUSED: AtomicBool = AtomicBool::new(false);

/// Tick period in milliseconds, already scaled by the speed slider
static PERIOD_MS: AtomicU32 = AtomicU32::new(100);

static TIMER_THREAD: Once = Once::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 220.0])
            .with_title("Nav Light Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "navlight-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Keeps the last frame written to the "hardware"
#[derive(Default)]
struct PreviewDriver {
    frame: [Rgb; PIXEL_COUNT],
    writes: u32,
}

impl OutputDriver for PreviewDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.copy_from_slice(colors);
        self.writes += 1;
    }
}

/// Thread standing in for the hardware timer
struct ThreadTimer;

impl TickTimer for ThreadTimer {
    #[allow(clippy::cast_possible_truncation)]
    fn start_periodic(&mut self, period: Duration) {
        PERIOD_MS.store(period.as_millis() as u32, Ordering::Relaxed);
        TIMER_THREAD.call_once(|| {
            thread::spawn(|| {
                let sender = TICKS.sender();
                loop {
                    let period = PERIOD_MS.load(Ordering::Relaxed).max(1);
                    thread::sleep(StdDuration::from_millis(u64::from(period)));
                    if !PAUSED.load(Ordering::Relaxed) {
                        sender.post();
                    }
                }
            });
        });
    }
}

type PreviewScheduler = StrobeScheduler<FrameBuffer<PreviewDriver, PIXEL_COUNT>>;

struct PreviewApp {
    config: LightConfig,
    scheduler: PreviewScheduler,
    /// Simulated jumper state
    jumper_fitted: bool,
    /// Speed multiplier (1.0 = realtime)
    time_scale: f32,
    /// Total ticks processed since the last restart
    ticks: u64,
}

impl PreviewApp {
    fn new() -> Self {
        let config = LightConfig::default();
        let jumper_fitted = false;
        let scheduler = Self::boot(&config, jumper_fitted);
        Self {
            config,
            scheduler,
            jumper_fitted,
            time_scale: 1.0,
            ticks: 0,
        }
    }

    /// Power-cycle the board with the given jumper state
    fn boot(config: &LightConfig, jumper_fitted: bool) -> PreviewScheduler {
        let level = if jumper_fitted {
            config.side_select.present_level
        } else {
            !config.side_select.present_level
        };
        let sink = FrameBuffer::new(PreviewDriver::default());
        match StrobeScheduler::start(config, sink, &mut || level, &mut ThreadTimer) {
            Ok(scheduler) => scheduler,
            Err(err) => panic!("invalid light configuration: {err}"),
        }
    }

    fn restart(&mut self) {
        while TICKS.consume() {}
        self.scheduler = Self::boot(&self.config, self.jumper_fitted);
        self.ticks = 0;
        self.apply_speed();
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn apply_speed(&self) {
        let base = self.config.tick_period.as_millis() as f32;
        PERIOD_MS.store((base / self.time_scale).max(1.0) as u32, Ordering::Relaxed);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ticks += u64::from(self.scheduler.drain(&TICKS.receiver()));

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let old_fitted = self.jumper_fitted;
                ui.checkbox(&mut self.jumper_fitted, "Side jumper fitted");
                if self.jumper_fitted != old_fitted {
                    self.restart();
                }

                ui.add_space(8.0);

                let paused = PAUSED.load(Ordering::Relaxed);
                if ui.button(if paused { "▶ Play" } else { "⏸ Pause" }).clicked() {
                    PAUSED.store(!paused, Ordering::Relaxed);
                }
                if ui.button("⏮ Restart").clicked() {
                    self.restart();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let old_scale = self.time_scale;
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=10.0).logarithmic(true));
                if (self.time_scale - old_scale).abs() > f32::EPSILON {
                    self.apply_speed();
                }
            });

            ui.add_space(4.0);

            let side = match self.scheduler.side() {
                Side::Port => "port",
                Side::Starboard => "starboard",
            };
            let driver = self.scheduler.sink().driver();
            ui.label(format!(
                "Side: {side}   Ticks: {}   Flushes: {}   Resync every {} ticks",
                self.ticks,
                driver.writes,
                self.config.resync_ticks()
            ));

            ui.add_space(16.0);

            // === LED Display ===
            let led_pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let width = PIXEL_COUNT as f32 * led_pitch;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, led_pitch), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in driver.frame.iter().enumerate() {
                let center = egui::pos2(
                    origin.x + i as f32 * led_pitch + LED_SIZE / 2.0,
                    origin.y + LED_SIZE / 2.0,
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.circle_filled(center, LED_SIZE / 2.0, color);
                painter.circle_stroke(
                    center,
                    LED_SIZE / 2.0,
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                );
            }
        });
    }
}
