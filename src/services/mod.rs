pub mod pagination;
pub mod pnl;
pub mod trade_service;
