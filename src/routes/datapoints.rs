use actix_web::{get, web, HttpResponse};

use crate::error::AppError;
use crate::services::trade_service::TradeService;

/// GET /api/datapoints/{trade_id} - historique de prix, ordre chronologique
#[get("/{trade_id}")]
pub async fn get_datapoints(
    service: web::Data<TradeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let trade_id = path.into_inner();
    let datapoints = service.datapoints(&trade_id).await?;

    // Aucun datapoint = tableau vide, pas une erreur
    Ok(HttpResponse::Ok().json(datapoints))
}

pub fn datapoints_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/datapoints")
            .service(get_datapoints)
    );
}
