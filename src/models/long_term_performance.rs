use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

// Résumé de performance pré-calculé par le système de trading (singleton, lecture seule)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "long_term_performance")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing, default)]
    pub id: i32,
    pub total_trades: i64,
    #[sea_orm(column_type = "Double")]
    pub total_capital_traded: f64,
    #[sea_orm(column_type = "Double")]
    pub total_pnl_dollars: f64,
    #[sea_orm(column_type = "Double")]
    pub total_pnl_percent: f64,
    #[sea_orm(column_type = "Double")]
    pub win_rate: f64, // 0-100
}

impl Model {
    /// Prix d'entrée moyen par contrat, 0 s'il n'y a encore aucun trade
    pub fn average_entry_price(&self) -> f64 {
        if self.total_trades > 0 {
            self.total_capital_traded / self.total_trades as f64
        } else {
            0.0
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
