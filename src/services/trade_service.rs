use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use sea_orm::DbErr;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::models::{
    configuration, historical_trade, long_position, long_term_performance, open_trade,
    trade_datapoint,
};
use crate::repository::TradeRepository;
use crate::models::trade::Trade;
use crate::services::pagination::{Page, PageRequest, DASHBOARD_PAGE_SIZE};
use crate::services::pnl::{LongPositionTotals, PortfolioSummary, PriceBook, TradePnl};
use crate::utils::business_day;

/// Tout ce qu'il faut pour la vue principale, chargé en une fois
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub open_trades: Vec<open_trade::Model>,
    pub historical_trades: Page<historical_trade::Model>,
    pub long_term_performance: Option<long_term_performance::Model>,
    pub config: Option<configuration::Model>,
}

#[derive(Clone)]
pub struct TradeService {
    repository: Arc<dyn TradeRepository>,
    fetch_timeout: Duration,
}

impl TradeService {
    pub fn new(repository: Arc<dyn TradeRepository>, fetch_timeout: Duration) -> Self {
        Self {
            repository,
            fetch_timeout,
        }
    }

    /// Exécute une lecture avec un délai borné : timeout = échec de lecture
    async fn fetch<T, F>(&self, operation: &'static str, query: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        debug!(operation, "fetching");

        match tokio::time::timeout(self.fetch_timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(AppError::Database { operation, source }),
            Err(_) => Err(AppError::Timeout {
                operation,
                timeout_ms: self.fetch_timeout.as_millis(),
            }),
        }
    }

    /// Charge trades ouverts + une page d'historique + performance + configuration.
    /// Les 4 lectures partent en parallèle ; une seule en échec fait échouer le tout.
    pub async fn load_dashboard(&self, request: PageRequest) -> Result<DashboardSnapshot, AppError> {
        let repository = self.repository.as_ref();

        let (open_trades, history, long_term_performance, config) = futures::try_join!(
            self.fetch("open trades", repository.open_trades()),
            self.fetch("historical trades", repository.historical_trades_page(request)),
            self.fetch("long term performance", repository.long_term_performance()),
            self.fetch("configuration", repository.system_config()),
        )?;

        let historical_trades = Page::from_window(request, history);

        info!(
            open = open_trades.len(),
            historical = historical_trades.records.len(),
            page = request.page(),
            has_more = historical_trades.has_more,
            "dashboard loaded"
        );

        Ok(DashboardSnapshot {
            open_trades,
            historical_trades,
            long_term_performance,
            config,
        })
    }

    pub async fn datapoints(&self, trade_id: &str) -> Result<Vec<trade_datapoint::Model>, AppError> {
        let datapoints = self
            .fetch("datapoints", self.repository.datapoints(trade_id))
            .await?;

        debug!(trade_id, count = datapoints.len(), "datapoints fetched");
        Ok(datapoints)
    }

    pub async fn long_positions(&self) -> Result<Vec<long_position::Model>, AppError> {
        self.fetch("long positions", self.repository.long_positions()).await
    }

    pub async fn long_position_totals(
        &self,
    ) -> Result<(Vec<long_position::Model>, LongPositionTotals), AppError> {
        let positions = self.long_positions().await?;
        let totals = LongPositionTotals::compute(&positions);
        Ok((positions, totals))
    }

    /// P/L agrégé du portefeuille à l'instant `now`
    pub async fn portfolio_summary(&self, now: DateTime<Utc>) -> Result<PortfolioSummary, AppError> {
        let repository = self.repository.as_ref();
        let day_start = business_day::business_day_start(business_day::business_day(now));
        let recent_page = PageRequest::first(DASHBOARD_PAGE_SIZE)?;

        // 1. Les listes de trades d'abord : les prix sont cherchés par trade_id
        let (open_trades, closed_today, recent) = futures::try_join!(
            self.fetch("open trades", repository.open_trades()),
            self.fetch("trades closed today", repository.historical_trades_closed_since(day_start)),
            self.fetch("recent trades", repository.historical_trades_page(recent_page)),
        )?;

        // 2. Dernier prix de chaque trade ouvert, lectures indépendantes
        let lookups = open_trades.iter().map(|trade| async move {
            let result = self
                .fetch("latest price", repository.latest_datapoint(&trade.trade_id))
                .await;
            (trade.trade_id.as_str(), result)
        });

        let mut prices = PriceBook::new();
        for (trade_id, result) in join_all(lookups).await {
            match result {
                Ok(Some(datapoint)) => {
                    prices.observe_datapoint(&datapoint);
                }
                Ok(None) => debug!(trade_id, "no price yet"),
                // Best effort : le trade compte pour 0 plutôt que de faire échouer le résumé
                Err(e) => warn!(trade_id, error = %e, "price lookup failed"),
            }
        }

        // 3. Agrégation pure sur les données chargées
        let mut summary = PortfolioSummary::compute(&open_trades, &closed_today, &prices, now);
        summary.recent_trades = Page::from_window(recent_page, recent)
            .records
            .iter()
            .map(|t| TradePnl::evaluate(Trade::from(t), None))
            .collect();

        info!(
            open = open_trades.len(),
            priced = prices.len(),
            closed_today = summary.closed_today.len(),
            "portfolio summary computed"
        );

        Ok(summary)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.fetch("ping", self.repository.ping()).await
    }
}
