//! Converter form rendering

use super::App;
use crate::theme;
use crate::ui::components::{amount_input, caption, restore_cursor, swap_button};
use eframe::egui;

impl App {
    pub(crate) fn render_converter(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_LG);
            theme::card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    caption(ui, "From:");
                    let from = amount_input(
                        ui,
                        "amount_from",
                        &self.form.amount_from,
                        self.form.convert_from,
                    );
                    if from.pasted {
                        self.form.mark_pasted();
                    }
                    if let Some(raw) = from.edited {
                        if !self.form.input_amount_from(&raw, &self.rates) {
                            restore_cursor(ui.ctx(), from.text_id, from.cursor_before, &self.form.amount_from);
                        } else if self.form.amount_from != raw {
                            // Leading "." got a "0" in front; keep the caret at the end
                            restore_cursor(ui.ctx(), from.text_id, None, &self.form.amount_from);
                        }
                    }
                    if let Some(currency) = from.currency {
                        self.form.select_convert_from(currency, &self.rates);
                    }

                    ui.add_space(theme::SPACING_MD);
                    if swap_button(ui) {
                        self.form.swap();
                    }
                    ui.add_space(theme::SPACING_MD);

                    caption(ui, "To:");
                    let to = amount_input(
                        ui,
                        "amount_to",
                        &self.form.amount_to,
                        self.form.convert_to,
                    );
                    if to.pasted {
                        self.form.mark_pasted();
                    }
                    if let Some(raw) = to.edited {
                        if !self.form.input_amount_to(&raw, &self.rates) {
                            restore_cursor(ui.ctx(), to.text_id, to.cursor_before, &self.form.amount_to);
                        } else if self.form.amount_to != raw {
                            // Leading "." got a "0" in front; keep the caret at the end
                            restore_cursor(ui.ctx(), to.text_id, None, &self.form.amount_to);
                        }
                    }
                    if let Some(currency) = to.currency {
                        self.form.select_convert_to(currency, &self.rates);
                    }
                });
            });

            if let Some(message) = self.rate_status.message() {
                ui.add_space(theme::SPACING_MD);
                let color = if self.rate_status.is_error() {
                    theme::STATUS_WARNING
                } else {
                    theme::TEXT_DIM
                };
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(message)
                            .size(theme::FONT_SMALL)
                            .italics()
                            .color(color),
                    )
                    .selectable(false),
                );
            }
        });
    }
}
