// pour les requêtes / réponses structurées de l'API
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{configuration, historical_trade, long_position, long_term_performance, open_trade};
use crate::services::pnl::LongPositionTotals;

/// Paramètres de GET /api/trades
/// `page` est validé par `PageRequest::new` (PaginationError -> 400)
#[derive(Debug, Deserialize, Validate)]
pub struct TradesQuery {
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesResponse {
    pub open_trades: Vec<open_trade::Model>,
    pub historical_trades: Vec<historical_trade::Model>,
    pub has_more: bool,
    pub page: u64,
    pub limit: u64,
    pub long_term_performance: Option<PerformanceResponse>,
    pub config: Option<configuration::Model>,
    pub system_active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResponse {
    #[serde(flatten)]
    pub performance: long_term_performance::Model,
    pub average_entry_price: f64,
}

impl From<long_term_performance::Model> for PerformanceResponse {
    fn from(performance: long_term_performance::Model) -> Self {
        Self {
            average_entry_price: performance.average_entry_price(),
            performance,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongPositionRow {
    #[serde(flatten)]
    pub position: long_position::Model,
    pub position_cost: f64,
    pub profit_loss_dollars: f64,
    pub is_profit: bool,
}

impl From<long_position::Model> for LongPositionRow {
    fn from(position: long_position::Model) -> Self {
        Self {
            position_cost: position.position_cost(),
            profit_loss_dollars: position.profit_loss_dollars(),
            is_profit: position.is_profit(),
            position,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongPositionsSummaryResponse {
    #[serde(flatten)]
    pub totals: LongPositionTotals,
    pub positions: Vec<LongPositionRow>,
}
