// ui.rs - egui front end: controls, input handling and grid painting

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Event, PointerButton, Rect, Stroke, pos2};
use tracing::info;

use crate::app::{BOUND_KEYS, Brush, KeyAction, LifeViewer, key_action};
use crate::patterns;
use crate::view::{MAX_ZOOM, MIN_ZOOM};

const SCROLL_ZOOM_RATE: f32 = 0.001;     // Zoom change per scrolled point
const MIN_LINE_CELL: f32 = 4.0;          // Below this cell size grid lines are skipped

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.run_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.step_once();
                }

                if ui.button("⏹ Restart").clicked() {
                    self.restart();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                if ui.button("⌖ Center").clicked() {
                    self.request_center();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            // Speed, zoom and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Zoom:");
                let mut zoom = self.view.zoom;
                if ui.add(egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)).changed() {
                    self.view.set_zoom(zoom);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.horizontal(|ui| {
                let population = self.state.population();
                ui.label(format!("Generation: {}", self.state.generation()));
                ui.label(format!("Population: {population}"));
                ui.label(format!(
                    "Density: {:.2}%",
                    population as f32 / self.state.area() as f32 * 100.0
                ));
            });

            ui.label("Left click/drag: birth · Right click/drag: kill · Middle or Shift+drag: pan · Scroll: zoom");
            ui.label("Space: start/pause · Shift+Space or N: step · R: restart · C: center · Esc or Q: quit");

            ui.separator();

            self.draw_grid(ui);
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl LifeViewer {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (actions, zoom_steps) = ctx.input(|i| {
            let mut zoom_steps = 0i32;
            for event in &i.events {
                if let Event::Text(text) = event {
                    match text.as_str() {
                        "+" => zoom_steps += 1,
                        "-" => zoom_steps -= 1,
                        _ => {}
                    }
                }
            }
            let actions: Vec<KeyAction> = BOUND_KEYS
                .iter()
                .filter(|&&key| i.key_pressed(key))
                .filter_map(|&key| key_action(key, i.modifiers.shift))
                .collect();
            (actions, zoom_steps)
        });

        for action in actions {
            if action == KeyAction::Quit {
                info!("Quitting");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                self.apply_key(action);
            }
        }

        for _ in 0..zoom_steps.max(0) {
            self.view.zoom_in();
        }
        for _ in 0..(-zoom_steps).max(0) {
            self.view.zoom_out();
        }
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas = response.rect;
        let width = self.state.width();

        if self.center_pending {
            self.view.center(canvas.size(), width);
            self.center_pending = false;
        }

        // Pan, zoom and paint from pointer input over the canvas
        let (shift, primary, secondary, middle, scroll, delta) = ui.input(|i| {
            (
                i.modifiers.shift,
                i.pointer.primary_down(),
                i.pointer.secondary_down(),
                i.pointer.button_down(PointerButton::Middle),
                i.scroll_delta,
                i.pointer.delta(),
            )
        });

        if response.hovered() || response.dragged() {
            if middle || (shift && primary) {
                self.view.pan(delta);
            } else if let Some(pos) = response.interact_pointer_pos() {
                let origin = self.view.origin(canvas);
                if let Some(index) = self.view.screen_to_index(pos, origin, width) {
                    if primary {
                        self.paint(index, Brush::Birth);
                    } else if secondary {
                        self.paint(index, Brush::Kill);
                    }
                }
            }

            if scroll.y != 0.0 {
                if let Some(pos) = response.hover_pos() {
                    self.view.zoom_at(pos - canvas.min, scroll.y * SCROLL_ZOOM_RATE);
                }
            }
        }

        painter.rect_filled(canvas, 0.0, Color32::BLACK);

        let origin = self.view.origin(canvas);
        let visible = self.view.grid_rect(width, origin).intersect(canvas);
        if !visible.is_positive() {
            return;
        }
        painter.rect_filled(visible, 0.0, self.dead_color);

        // Grid lines, only across the visible part of the grid
        let cell = self.view.cell_size();
        if cell >= MIN_LINE_CELL {
            let stroke = Stroke::new(0.5, Color32::from_gray(60));
            if let Some((first, last)) = self.view.visible_span(visible.min.x, visible.max.x, origin.x, width) {
                for col in first..=last {
                    let x = origin.x + col as f32 * cell;
                    painter.line_segment([pos2(x, visible.min.y), pos2(x, visible.max.y)], stroke);
                }
            }
            if let Some((first, last)) = self.view.visible_span(visible.min.y, visible.max.y, origin.y, width) {
                for row in first..=last {
                    let y = origin.y + row as f32 * cell;
                    painter.line_segment([pos2(visible.min.x, y), pos2(visible.max.x, y)], stroke);
                }
            }
        }

        // Live cells
        let inset = if cell >= MIN_LINE_CELL { 0.5 } else { 0.0 };
        for index in self.state.alive_cells() {
            let rect: Rect = self.view.cell_rect(index, width, origin);
            if rect.intersects(canvas) {
                painter.rect_filled(rect.shrink(inset), 0.0, self.live_color);
            }
        }
    }
}
