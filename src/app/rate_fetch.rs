//! Start-up rate fetch

use super::App;
use crate::constants::RATES_UNAVAILABLE_MESSAGE;
use crate::fetch::{fetch_sell_rates, RateError};
use crate::rates::RateTable;
use crate::types::{RateStatus, SellRates};
use eframe::egui;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

impl App {
    /// Spawn the one-off fetch on the app runtime. The result is picked up
    /// by `poll_rate_fetch`.
    pub fn start_rate_fetch(&mut self, ctx: &egui::Context) {
        let (tx, rx) = oneshot::channel();
        self.rate_rx = Some(rx);
        self.rate_status = RateStatus::Loading;

        let ctx = ctx.clone();
        let url = self.rates_url.clone();
        info!(url = %url, "Starting rate fetch");
        self.runtime.spawn(async move {
            let client = reqwest::Client::new();
            let result = fetch_sell_rates(&client, &url).await;
            if tx.send(result).is_err() {
                warn!("Rate fetch finished after the window closed");
            }
            ctx.request_repaint();
        });
    }

    pub fn poll_rate_fetch(&mut self) {
        let Some(rx) = self.rate_rx.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                error!("Rate fetch task ended without a result");
                self.rate_rx = None;
                self.rate_status = RateStatus::Fallback(RATES_UNAVAILABLE_MESSAGE.to_string());
                return;
            }
        };
        self.rate_rx = None;
        let (table, status) = resolve_rates(result);
        self.rates = table;
        self.rate_status = status;
    }
}

/// Rate table and status for a finished fetch. Any failure keeps the
/// fallback table and the fixed warning, whatever the cause.
pub(crate) fn resolve_rates(result: Result<SellRates, RateError>) -> (RateTable, RateStatus) {
    match result {
        Ok(sell) => {
            info!(usd = sell.usd, eur = sell.eur, "Live rates received");
            (RateTable::from_sell_rates(&sell), RateStatus::Live(sell.updated_at))
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch rates, using fallback");
            (
                RateTable::fallback(),
                RateStatus::Fallback(RATES_UNAVAILABLE_MESSAGE.to_string()),
            )
        }
    }
}
