use actix_web::{get, web, HttpResponse};

use crate::error::AppError;
use crate::models::dto::{LongPositionRow, LongPositionsSummaryResponse};
use crate::services::trade_service::TradeService;

/// GET /api/long-positions
#[get("")]
pub async fn get_long_positions(service: web::Data<TradeService>) -> Result<HttpResponse, AppError> {
    let positions = service.long_positions().await?;
    Ok(HttpResponse::Ok().json(positions))
}

/// GET /api/long-positions/summary - totaux valeur / coût / P/L
#[get("/summary")]
pub async fn get_long_positions_summary(
    service: web::Data<TradeService>,
) -> Result<HttpResponse, AppError> {
    let (positions, totals) = service.long_position_totals().await?;
    Ok(HttpResponse::Ok().json(LongPositionsSummaryResponse {
        totals,
        positions: positions.into_iter().map(LongPositionRow::from).collect(),
    }))
}

pub fn long_positions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/long-positions")
            .service(get_long_positions)
            .service(get_long_positions_summary)
    );
}
