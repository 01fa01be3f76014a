pub mod datapoints;
pub mod health;
pub mod long_positions;
pub mod summary;
pub mod trade;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health_check)
            .configure(trade::trade_routes)
            .configure(datapoints::datapoints_routes)
            .configure(long_positions::long_positions_routes)
            .configure(summary::summary_routes)
    );
}

#[cfg(test)]
pub(crate) fn test_data(
    repository: crate::repository::memory::InMemoryTradeRepository,
) -> web::Data<crate::services::trade_service::TradeService> {
    use std::sync::Arc;
    use std::time::Duration;

    web::Data::new(crate::services::trade_service::TradeService::new(
        Arc::new(repository),
        Duration::from_secs(5),
    ))
}
