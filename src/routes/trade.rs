use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::error::AppError;
use crate::models::dto::{PerformanceResponse, TradesQuery, TradesResponse};
use crate::services::pagination::{PageRequest, HISTORY_PAGE_SIZE};
use crate::services::trade_service::TradeService;

/// GET /api/trades?page=1&limit=25
#[get("")]
pub async fn get_trades(
    service: web::Data<TradeService>,
    query: web::Query<TradesQuery>,
) -> Result<HttpResponse, AppError> {
    if let Err(errors) = query.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let request = PageRequest::new(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(HISTORY_PAGE_SIZE),
    )?;

    let snapshot = service.load_dashboard(request).await?;

    Ok(HttpResponse::Ok().json(TradesResponse {
        open_trades: snapshot.open_trades,
        has_more: snapshot.historical_trades.has_more,
        page: snapshot.historical_trades.page,
        limit: snapshot.historical_trades.limit,
        historical_trades: snapshot.historical_trades.records,
        long_term_performance: snapshot.long_term_performance.map(PerformanceResponse::from),
        system_active: snapshot.config.as_ref().is_some_and(|c| c.is_active()),
        config: snapshot.config,
    }))
}

pub fn trade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trades")
            .service(get_trades)
    );
}
