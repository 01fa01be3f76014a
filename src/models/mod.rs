// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque collection du système de trading correspond à une table SeaORM.
//
// Liste des modules:
//   - health : Health check API
//   - open_trade : Trades ouverts (P/L courant via les datapoints)
//   - historical_trade : Trades fermés (même trade_id qu'à l'ouverture)
//   - trade_datapoint : Prix horodatés par trade (graphiques)
//   - configuration : Statut du système (singleton)
//   - long_term_performance : Performance historique pré-calculée (singleton)
//   - long_position : Positions long en actions
//   - trade : Vue unifiée Open | Closed pour les calculs de P/L
//   - dto : Data Transfer Objects pour les requêtes / réponses API
//
// Points d'attention:
//   - Lecture seule : ce service n'écrit jamais dans ces tables
//   - JSON : trade_id en snake_case, tous les autres champs en camelCase
//   - Les singletons ont un id technique qui n'est jamais sérialisé
//
// ============================================================================

pub mod health;
pub mod open_trade;
pub mod historical_trade;
pub mod trade_datapoint;
pub mod configuration;
pub mod long_term_performance;
pub mod long_position;
pub mod trade;
pub mod dto;
