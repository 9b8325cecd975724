//! App module - contains the main application state and logic

mod rate_fetch;
mod view;

use crate::fetch::RateError;
use crate::form::ConverterForm;
use crate::rates::RateTable;
use crate::settings::Settings;
use crate::theme;
use crate::types::{RateStatus, SellRates};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::oneshot;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: ConverterForm,
    pub(crate) rates: RateTable,
    pub(crate) rate_status: RateStatus,
    pub(crate) rate_rx: Option<oneshot::Receiver<Result<SellRates, RateError>>>,
    pub(crate) fetch_started: bool,
    pub(crate) rates_url: String,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Settings
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: &Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            form: ConverterForm::default(),
            rates: RateTable::fallback(),
            rate_status: RateStatus::Loading,
            rate_rx: None,
            fetch_started: false,
            rates_url: settings.rates_url_or_default().to_string(),
            runtime,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let previous = Settings::load(&self.data_dir);
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            rates_url: previous.rates_url,
        };
        settings.save(&self.data_dir);
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Kick off the rate fetch on first frame
        if !self.fetch_started {
            self.fetch_started = true;
            self.start_rate_fetch(ctx);
        }

        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.poll_rate_fetch();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                self.render_converter(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
