use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

// Position long sur une action, identifiée seulement par son symbole
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "long_positions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub symbol: String,
    #[sea_orm(column_type = "Double")]
    pub quantity: f64,
    #[sea_orm(column_type = "Double")]
    pub cost_basis: f64,      // PAR action
    #[sea_orm(column_type = "Double")]
    pub percent_change: f64,
    #[sea_orm(column_type = "Double")]
    pub total_value: f64,     // valeur totale actuelle
}

impl Model {
    /// Coût total de la position (cost_basis est par action)
    pub fn position_cost(&self) -> f64 {
        self.cost_basis * self.quantity
    }

    pub fn profit_loss_dollars(&self) -> f64 {
        self.total_value - self.position_cost()
    }

    pub fn is_profit(&self) -> bool {
        self.percent_change >= 0.0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
