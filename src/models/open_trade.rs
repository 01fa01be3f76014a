use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

// Position ouverte par le modèle de trading.
// change_percent / change_dollars restent à 0 tant que le trade est ouvert :
// le P/L courant se calcule avec le dernier datapoint, jamais avec ces champs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "open_trades")]
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
