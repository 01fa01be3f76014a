use serde::Serialize;

use super::{historical_trade, open_trade};

/// Discriminant explicite de l'état d'un trade
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
}

// Vue sur un trade ouvert ou fermé.
// On ne devine jamais l'état par la présence de sold_price : on matche sur la variante.
#[derive(Clone, Copy, Debug)]
pub enum Trade<'a> {
    Open(&'a open_trade::Model),
    Closed(&'a historical_trade::Model),
}

impl<'a> Trade<'a> {
    pub fn status(&self) -> TradeStatus {
        match *self {
            Trade::Open(_) => TradeStatus::Open,
            Trade::Closed(_) => TradeStatus::Closed,
        }
    }

    pub fn trade_id(&self) -> &'a str {
        match *self {
            Trade::Open(t) => &t.trade_id,
            Trade::Closed(t) => &t.trade_id,
        }
    }

    pub fn ticker(&self) -> &'a str {
        match *self {
            Trade::Open(t) => &t.ticker,
            Trade::Closed(t) => &t.ticker,
        }
    }

    pub fn quantity(&self) -> f64 {
        match *self {
            Trade::Open(t) => f64::from(t.quantity),
            Trade::Closed(t) => f64::from(t.quantity),
        }
    }

    pub fn purchase_price(&self) -> f64 {
        match *self {
            Trade::Open(t) => t.purchase_price,
            Trade::Closed(t) => t.purchase_price,
        }
    }
}

impl<'a> From<&'a open_trade::Model> for Trade<'a> {
    fn from(trade: &'a open_trade::Model) -> Self {
        Trade::Open(trade)
    }
}

impl<'a> From<&'a historical_trade::Model> for Trade<'a> {
    fn from(trade: &'a historical_trade::Model) -> Self {
        Trade::Closed(trade)
    }
}
