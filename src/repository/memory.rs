// Repository en mémoire pour les tests des services et des routes

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use super::TradeRepository;
use crate::models::{
    configuration, historical_trade, long_position, long_term_performance, open_trade,
    trade_datapoint,
};
use crate::services::pagination::PageRequest;

#[derive(Default)]
pub struct InMemoryTradeRepository {
    pub open_trades: Vec<open_trade::Model>,
    pub historical_trades: Vec<historical_trade::Model>,
    pub datapoints: Vec<trade_datapoint::Model>,
    pub config: Option<configuration::Model>,
    pub performance: Option<long_term_performance::Model>,
    pub long_positions: Vec<long_position::Model>,
    /// Toutes les lectures échouent
    pub unreachable: bool,
    /// Chaque lecture attend ce délai avant de répondre
    pub delay: Option<Duration>,
    /// trade_id dont la lecture du dernier prix échoue
    pub failing_price_lookups: HashSet<String>,
}

impl InMemoryTradeRepository {
    async fn read(&self) -> Result<(), DbErr> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.unreachable {
            return Err(DbErr::Custom("store unreachable".to_string()));
        }
        Ok(())
    }

    fn sorted_history(&self) -> Vec<historical_trade::Model> {
        let mut trades = self.historical_trades.clone();
        trades.sort_by(|a, b| {
            b.closed_time
                .cmp(&a.closed_time)
                .then_with(|| a.trade_id.cmp(&b.trade_id))
        });
        trades
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn open_trades(&self) -> Result<Vec<open_trade::Model>, DbErr> {
        self.read().await?;
        let mut trades = self.open_trades.clone();
        trades.sort_by(|a, b| b.opened_time.cmp(&a.opened_time));
        Ok(trades)
    }

    async fn historical_trades_page(
        &self,
        request: PageRequest,
    ) -> Result<Vec<historical_trade::Model>, DbErr> {
        self.read().await?;
        let Some(offset) = request.offset() else {
            return Ok(Vec::new());
        };
        Ok(self
            .sorted_history()
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(request.limit() as usize)
            .collect())
    }

    async fn historical_trades_closed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<historical_trade::Model>, DbErr> {
        self.read().await?;
        Ok(self
            .sorted_history()
            .into_iter()
            .filter(|t| t.closed_time >= since)
            .collect())
    }

    async fn datapoints(&self, trade_id: &str) -> Result<Vec<trade_datapoint::Model>, DbErr> {
        self.read().await?;
        let mut points: Vec<_> = self
            .datapoints
            .iter()
            .filter(|p| p.trade_id == trade_id)
            .cloned()
            .collect();
        points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(points)
    }

    async fn latest_datapoint(
        &self,
        trade_id: &str,
    ) -> Result<Option<trade_datapoint::Model>, DbErr> {
        self.read().await?;
        if self.failing_price_lookups.contains(trade_id) {
            return Err(DbErr::Custom(format!("price lookup failed for {}", trade_id)));
        }
        Ok(self
            .datapoints
            .iter()
            .filter(|p| p.trade_id == trade_id)
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp))
            .cloned())
    }

    async fn system_config(&self) -> Result<Option<configuration::Model>, DbErr> {
        self.read().await?;
        Ok(self.config.clone())
    }

    async fn long_term_performance(&self) -> Result<Option<long_term_performance::Model>, DbErr> {
        self.read().await?;
        Ok(self.performance.clone())
    }

    async fn long_positions(&self) -> Result<Vec<long_position::Model>, DbErr> {
        self.read().await?;
        let mut positions = self.long_positions.clone();
        positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(positions)
    }

    async fn ping(&self) -> Result<(), DbErr> {
        self.read().await
    }
}

pub fn sample_open_trade(trade_id: &str, purchase_price: f64, quantity: i32, opened_time: DateTime<Utc>) -> open_trade::Model {
    open_trade::Model {
        trade_id: trade_id.to_string(),
        ticker: "SPY".to_string(),
        description: format!("SPY call {}", trade_id),
        quantity,
        opened_time,
        purchase_price,
        change_percent: 0.0,
        change_dollars: 0.0,
    }
}

pub fn sample_historical_trade(
    trade_id: &str,
    purchase_price: f64,
    sold_price: f64,
    quantity: i32,
    closed_time: DateTime<Utc>,
) -> historical_trade::Model {
    let change_dollars = (sold_price - purchase_price) * f64::from(quantity);
    historical_trade::Model {
        trade_id: trade_id.to_string(),
        ticker: "QQQ".to_string(),
        description: format!("QQQ put {}", trade_id),
        quantity,
        opened_time: closed_time - chrono::Duration::hours(2),
        purchase_price,
        change_percent: (sold_price - purchase_price) / purchase_price * 100.0,
        change_dollars,
        sold_price,
        closed_time,
    }
}

pub fn sample_datapoint(trade_id: &str, timestamp: DateTime<Utc>, current_price: f64) -> trade_datapoint::Model {
    trade_datapoint::Model {
        id: 0,
        trade_id: trade_id.to_string(),
        timestamp,
        current_price,
    }
}
