use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

/// Statut global du système de trading (document singleton)
pub const ACTIVE_STATUS: &str = "active";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "configuration")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    // Clé technique de la ligne singleton, jamais exposée dans l'API
    #[sea_orm(primary_key)]
    #[serde(skip_serializing, default)]
    pub id: i32,
    pub status: String,
    #[sea_orm(column_name = "profit_ytd", column_type = "Double")]
    #[serde(rename = "profitYTD")]
    pub profit_ytd: f64,
    pub last_updated: DateTimeUtc,
}

impl Model {
    /// Tout statut autre que "active" est considéré comme dégradé
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
