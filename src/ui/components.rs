//! Reusable UI components
//!
//! Standalone widgets used by the converter view.

use crate::currency::Currency;
use crate::theme;
use eframe::egui;
use egui::text::{CCursor, CCursorRange};

/// Currency dropdown. Returns the newly picked currency, if it changed.
pub fn currency_select(ui: &mut egui::Ui, id_salt: &str, current: Currency) -> Option<Currency> {
    let mut selected = current;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(
            egui::RichText::new(current.label())
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .width(theme::CURRENCY_SELECT_WIDTH)
        .show_ui(ui, |ui| {
            for currency in Currency::ALL {
                ui.selectable_value(&mut selected, currency, currency.label());
            }
        });
    (selected != current).then_some(selected)
}

/// What happened to an amount field this frame
pub struct AmountFieldOutput {
    pub text_id: egui::Id,
    /// Field text after a user edit, before filtering
    pub edited: Option<String>,
    /// Caret/selection before this frame's edit, for undoing a rejected one
    pub cursor_before: Option<CCursorRange>,
    /// A paste landed in the field before the edit was applied
    pub pasted: bool,
    pub currency: Option<Currency>,
}

/// Amount text input with its currency selector inside one bordered frame.
/// The displayed text is always `value`; edits are reported, not applied.
pub fn amount_input(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &str,
    currency: Currency,
) -> AmountFieldOutput {
    let text_id = ui.make_persistent_id(id_salt);
    let mut output = AmountFieldOutput {
        text_id,
        edited: None,
        cursor_before: egui::TextEdit::load_state(ui.ctx(), text_id)
            .and_then(|state| state.cursor.char_range()),
        pasted: false,
        currency: None,
    };

    // Paste events must be seen before the TextEdit consumes them
    let focused = ui.memory(|mem| mem.has_focus(text_id));
    if focused {
        output.pasted = ui.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Paste(_)))
        });
    }

    theme::amount_frame(focused).show(ui, |ui| {
        ui.horizontal(|ui| {
            let mut buffer = value.to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .id(text_id)
                    .hint_text("0.00")
                    .frame(false)
                    .font(egui::FontId::proportional(theme::FONT_AMOUNT))
                    .desired_width(theme::AMOUNT_FIELD_WIDTH),
            );
            if response.changed() {
                output.edited = Some(buffer);
            }
            output.currency = currency_select(ui, &format!("{}_currency", id_salt), currency);
        });
    });
    output
}

/// Put the caret back where it was before an edit that did not stick.
/// Positions past the end of `text` are clamped to it.
pub fn restore_cursor(ctx: &egui::Context, id: egui::Id, before: Option<CCursorRange>, text: &str) {
    if let Some(mut state) = egui::TextEdit::load_state(ctx, id) {
        state.cursor.set_char_range(Some(clamp_cursor(before, text)));
        state.store(ctx, id);
    }
}

fn clamp_cursor(range: Option<CCursorRange>, text: &str) -> CCursorRange {
    let len = text.chars().count();
    match range {
        Some(r) => CCursorRange::two(
            CCursor::new(r.secondary.index.min(len)),
            CCursor::new(r.primary.index.min(len)),
        ),
        None => CCursorRange::one(CCursor::new(len)),
    }
}

/// Round icon button with the swap arrows. Returns true if clicked.
pub fn swap_button(ui: &mut egui::Ui) -> bool {
    let size = theme::SWAP_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let color = if response.hovered() {
            painter.circle_filled(rect.center(), size / 2.0, theme::BG_HOVER);
            theme::ACCENT_LIGHT
        } else {
            theme::ACCENT
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::ARROWS_LEFT_RIGHT,
            egui::FontId::proportional(theme::SWAP_ICON_SIZE),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.on_hover_text("Swap currencies").clicked()
}

/// Non-selectable caption label
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_SECONDARY),
        )
        .selectable(false),
    );
}
