// ============================================================================
// REPOSITORY - ACCÈS AUX COLLECTIONS
// ============================================================================
//
// Description:
//   Lectures seules sur les collections du système de trading :
//   trades ouverts, trades historiques, datapoints par trade,
//   les deux singletons (configuration, performance long terme)
//   et les positions long.
//
// Formes de requêtes utilisées:
//   - scan filtré + trié
//   - scan filtré + trié + fenêtré (offset / limit)
//   - lecture d'un document unique (singleton)
//
// Points d'attention:
//   - Aucune écriture n'est émise
//   - Aucune isolation entre deux pages : une fermeture de trade entre deux
//     appels peut décaler la fenêtre (doublon ou saut à la frontière)
//
// ============================================================================

pub mod sea_orm_repository;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::models::{
    configuration, historical_trade, long_position, long_term_performance, open_trade,
    trade_datapoint,
};
use crate::services::pagination::PageRequest;

pub use sea_orm_repository::SeaOrmTradeRepository;

#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Tous les trades ouverts, plus récents d'abord
    async fn open_trades(&self) -> Result<Vec<open_trade::Model>, DbErr>;

    /// Une fenêtre de l'historique, closed_time décroissant
    async fn historical_trades_page(
        &self,
        request: PageRequest,
    ) -> Result<Vec<historical_trade::Model>, DbErr>;

    /// Trades fermés depuis `since` (inclus), closed_time décroissant
    async fn historical_trades_closed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<historical_trade::Model>, DbErr>;

    /// Datapoints d'un trade en ordre chronologique (vide si aucun)
    async fn datapoints(&self, trade_id: &str) -> Result<Vec<trade_datapoint::Model>, DbErr>;

    async fn latest_datapoint(
        &self,
        trade_id: &str,
    ) -> Result<Option<trade_datapoint::Model>, DbErr>;

    async fn system_config(&self) -> Result<Option<configuration::Model>, DbErr>;

    async fn long_term_performance(&self) -> Result<Option<long_term_performance::Model>, DbErr>;

    async fn long_positions(&self) -> Result<Vec<long_position::Model>, DbErr>;

    async fn ping(&self) -> Result<(), DbErr>;
}
