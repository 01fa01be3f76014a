use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

// Trade fermé : même trade_id que lorsqu'il était ouvert,
// avec le prix de vente et la date de fermeture en plus.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "historical_trades")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "trade_id")]
    pub trade_id: String,
    pub ticker: String,
    pub description: String,
    pub quantity: i32,
    pub opened_time: DateTimeUtc,
    #[sea_orm(column_type = "Double")]
    pub purchase_price: f64,
    #[sea_orm(column_type = "Double")]
    pub change_percent: f64,
    #[sea_orm(column_type = "Double")]
    pub change_dollars: f64,
    #[sea_orm(column_type = "Double")]
    pub sold_price: f64,
    pub closed_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
