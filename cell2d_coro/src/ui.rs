// ui.rs - Live view of the field with keyboard speed control
//
//   +  step twice as often     -  step half as often     q  quit

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Key, Rect, Vec2};
use log::{debug, error, info};

use crate::{Simulation, palette};

const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_millis(1000);

pub struct Viewer {
    sim: Simulation,
    loop_count: u64,
    cell_size: f32,
    last_update: Instant,
    update_interval: Duration,
    reported: bool,
}

impl Viewer {
    pub fn new(sim: Simulation, loop_count: u64, cell_size: f32) -> Self {
        Self {
            sim,
            loop_count,
            cell_size,
            last_update: Instant::now(),
            update_interval: MIN_INTERVAL,
            reported: false,
        }
    }

    fn faster(&mut self) {
        self.update_interval = (self.update_interval / 2).max(MIN_INTERVAL);
        debug!("Step interval {:?}", self.update_interval);
    }

    fn slower(&mut self) {
        self.update_interval = (self.update_interval * 2).min(MAX_INTERVAL);
        debug!("Step interval {:?}", self.update_interval);
    }

    fn is_done(&self) -> bool {
        self.sim.field().generation() >= self.loop_count
    }

    /// Prints the summary line, once.
    fn finish(&mut self) {
        if !self.reported {
            self.reported = true;
            info!("Finished at generation {}", self.sim.field().generation());
            println!("{}", self.sim.summary());
        }
    }

    fn draw_field(&self, ui: &mut egui::Ui) {
        let field = self.sim.field();
        let size = self.cell_size;
        let total_size = Vec2::new(field.width() as f32 * size, field.height() as f32 * size);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);
        for row in 0..field.height() {
            for col in 0..field.width() {
                let color = palette::cell_color(field.previous_cell(row, col), field.current_cell(row, col));
                if color == Color32::BLACK {
                    continue;
                }
                let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
                painter.rect_filled(Rect::from_min_size(min, Vec2::splat(size)), 0.0, color);
            }
        }
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (faster, slower, quit) = ctx.input(|i| {
            (
                i.key_pressed(Key::PlusEquals),
                i.key_pressed(Key::Minus),
                i.key_pressed(Key::Q),
            )
        });
        if faster {
            self.faster();
        }
        if slower {
            self.slower();
        }

        if !quit && !self.is_done() && self.last_update.elapsed() >= self.update_interval {
            if let Err(err) = self.sim.update_generation() {
                error!("Step failed: {err:#}");
                self.finish();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| self.draw_field(ui));
            });

        if quit || self.is_done() {
            self.finish();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else {
            ctx.request_repaint_after(self.update_interval.saturating_sub(self.last_update.elapsed()));
        }
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.finish();
    }
}
