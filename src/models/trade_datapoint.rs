use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

// Un point du graphique d'un trade (ouvert ou fermé).
// Append-only : une ligne n'est jamais mise à jour.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_datapoints")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing, default)]
    pub id: i64,
    #[sea_orm(indexed)]
    #[serde(rename = "trade_id")]
    pub trade_id: String,
    pub timestamp: DateTimeUtc,
    #[sea_orm(column_type = "Double")]
    pub current_price: f64,
}

// Pas de FK : le trade_id pointe vers open_trades OU historical_trades selon l'état du trade
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
