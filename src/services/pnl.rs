// ============================================================================
// P/L - CALCULS DÉRIVÉS
// ============================================================================
//
// Description:
//   P/L par trade (dollars + pourcentage) et agrégats du portefeuille :
//   P/L ouvert, P/L réalisé du jour (heure de Chicago), valeur du portefeuille,
//   totaux des positions long.
//
// Points d'attention:
//   - Tout est pur et en mémoire : aucune I/O ici
//   - Le dernier prix connu par trade_id vient d'un PriceBook passé explicitement
//   - Un trade ouvert sans prix contribue 0 (valeur courante = prix d'achat)
//   - purchase_price = 0 donne un pourcentage non fini, pas de clamp
//
// ============================================================================

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::trade::{Trade, TradeStatus};
use crate::models::{historical_trade, long_position, open_trade, trade_datapoint};
use crate::utils::business_day;

/// Valeur courante d'un trade : prix de vente s'il est fermé,
/// sinon dernier prix observé, à défaut le prix d'achat
pub fn current_value(trade: &Trade<'_>, latest_price: Option<f64>) -> f64 {
    match trade {
        Trade::Closed(t) => t.sold_price,
        Trade::Open(t) => latest_price.unwrap_or(t.purchase_price),
    }
}

pub fn profit_loss_dollars(trade: &Trade<'_>, current_value: f64) -> f64 {
    (current_value - trade.purchase_price()) * trade.quantity()
}

pub fn profit_loss_percent(trade: &Trade<'_>, current_value: f64) -> f64 {
    let purchase_price = trade.purchase_price();
    (current_value - purchase_price) / purchase_price * 100.0
}

/// Zéro compte comme un gain
pub fn is_profit(profit_loss_dollars: f64) -> bool {
    profit_loss_dollars >= 0.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceObservation {
    pub price: f64,
    pub observed_at: DateTime<Utc>,
}

/// Dernier prix connu par trade_id, alimenté par des événements "prix observé"
#[derive(Clone, Debug, Default)]
pub struct PriceBook {
    latest: HashMap<String, PriceObservation>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retourne false si l'observation est plus ancienne que celle déjà connue
    pub fn observe(&mut self, trade_id: &str, observation: PriceObservation) -> bool {
        if let Some(known) = self.latest.get(trade_id) {
            if known.observed_at > observation.observed_at {
                return false;
            }
        }

        self.latest.insert(trade_id.to_string(), observation);
        true
    }

    pub fn observe_datapoint(&mut self, datapoint: &trade_datapoint::Model) -> bool {
        self.observe(
            &datapoint.trade_id,
            PriceObservation {
                price: datapoint.current_price,
                observed_at: datapoint.timestamp,
            },
        )
    }

    pub fn latest_price(&self, trade_id: &str) -> Option<f64> {
        self.latest.get(trade_id).map(|o| o.price)
    }

    pub fn len(&self) -> usize {
        self.latest.len()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePnl {
    #[serde(rename = "trade_id")]
    pub trade_id: String,
    pub ticker: String,
    pub status: TradeStatus,
    pub current_value: f64,
    pub profit_loss_dollars: f64,
    // None (null en JSON) quand le prix d'achat vaut 0
    pub profit_loss_percent: Option<f64>,
    pub is_profit: bool,
}

impl TradePnl {
    pub fn evaluate(trade: Trade<'_>, latest_price: Option<f64>) -> Self {
        let value = current_value(&trade, latest_price);
        let dollars = profit_loss_dollars(&trade, value);
        let percent = profit_loss_percent(&trade, value);

        Self {
            trade_id: trade.trade_id().to_string(),
            ticker: trade.ticker().to_string(),
            status: trade.status(),
            current_value: value,
            profit_loss_dollars: dollars,
            profit_loss_percent: percent.is_finite().then_some(percent),
            is_profit: is_profit(dollars),
        }
    }
}

/// Σ P/L des trades ouverts, au dernier prix connu de chacun
pub fn total_open_pl(open_trades: &[open_trade::Model], prices: &PriceBook) -> f64 {
    open_trades
        .iter()
        .map(|t| {
            let trade = Trade::from(t);
            let value = current_value(&trade, prices.latest_price(&t.trade_id));
            profit_loss_dollars(&trade, value)
        })
        .sum()
}

/// Σ P/L réalisé des trades fermés pendant la journée de bourse de `now` (Chicago)
pub fn today_realized_pl(historical_trades: &[historical_trade::Model], now: DateTime<Utc>) -> f64 {
    historical_trades
        .iter()
        .filter(|t| business_day::is_same_business_day(t.closed_time, now))
        .map(|t| {
            let trade = Trade::from(t);
            profit_loss_dollars(&trade, current_value(&trade, None))
        })
        .sum()
}

/// Σ valeur courante × quantité des trades ouverts
pub fn portfolio_value(open_trades: &[open_trade::Model], prices: &PriceBook) -> f64 {
    open_trades
        .iter()
        .map(|t| {
            let trade = Trade::from(t);
            current_value(&trade, prices.latest_price(&t.trade_id)) * trade.quantity()
        })
        .sum()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    #[serde(rename = "totalOpenPL")]
    pub total_open_pl: f64,
    #[serde(rename = "todayRealizedPL")]
    pub today_realized_pl: f64,
    pub portfolio_value: f64,
    pub business_day: NaiveDate,
    pub open_trades: Vec<TradePnl>,
    pub closed_today: Vec<TradePnl>,
    // Derniers trades fermés, plafonnés à DASHBOARD_PAGE_SIZE (rempli par le service)
    pub recent_trades: Vec<TradePnl>,
}

impl PortfolioSummary {
    pub fn compute(
        open_trades: &[open_trade::Model],
        historical_trades: &[historical_trade::Model],
        prices: &PriceBook,
        now: DateTime<Utc>,
    ) -> Self {
        let open_rows = open_trades
            .iter()
            .map(|t| TradePnl::evaluate(Trade::from(t), prices.latest_price(&t.trade_id)))
            .collect();

        let closed_rows = historical_trades
            .iter()
            .filter(|t| business_day::is_same_business_day(t.closed_time, now))
            .map(|t| TradePnl::evaluate(Trade::from(t), None))
            .collect();

        Self {
            total_open_pl: total_open_pl(open_trades, prices),
            today_realized_pl: today_realized_pl(historical_trades, now),
            portfolio_value: portfolio_value(open_trades, prices),
            business_day: business_day::business_day(now),
            open_trades: open_rows,
            closed_today: closed_rows,
            recent_trades: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongPositionTotals {
    pub total_value: f64,
    pub total_cost_basis: f64,
    #[serde(rename = "totalPL")]
    pub total_pl: f64,
    #[serde(rename = "totalPLPercent")]
    pub total_pl_percent: f64,
}

impl LongPositionTotals {
    // cost_basis est PAR action : le coût total est pondéré par la quantité
    pub fn compute(positions: &[long_position::Model]) -> Self {
        let total_value: f64 = positions.iter().map(|p| p.total_value).sum();
        let total_cost_basis: f64 = positions.iter().map(|p| p.position_cost()).sum();
        let total_pl = total_value - total_cost_basis;

        let total_pl_percent = if total_cost_basis > 0.0 {
            total_pl / total_cost_basis * 100.0
        } else {
            0.0
        };

        Self {
            total_value,
            total_cost_basis,
            total_pl,
            total_pl_percent,
        }
    }
}
