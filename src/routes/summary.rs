use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::error::AppError;
use crate::services::trade_service::TradeService;

/// GET /api/summary - P/L ouvert, P/L réalisé du jour (Chicago), valeur du portefeuille
#[get("")]
pub async fn get_summary(service: web::Data<TradeService>) -> Result<HttpResponse, AppError> {
    let summary = service.portfolio_summary(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn summary_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/summary")
            .service(get_summary)
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use chrono::{Duration, Utc};
    use serde_json::Value;

    use crate::repository::memory::{
        sample_datapoint, sample_historical_trade, sample_open_trade, InMemoryTradeRepository,
    };
    use crate::routes::{configure_routes, test_data};
    use crate::utils::business_day::{business_day, business_day_start};

    #[actix_web::test]
    async fn test_summary_aggregates_open_and_closed_trades() {
        let now = Utc::now();
        // midi à Chicago : loin des deux bornes de la journée de bourse
        let midday = business_day_start(business_day(now)) + Duration::hours(12);
        let repository = InMemoryTradeRepository {
            open_trades: vec![sample_open_trade("open-1", 10.0, 5, now - Duration::hours(1))],
            datapoints: vec![sample_datapoint("open-1", now - Duration::minutes(1), 12.0)],
            historical_trades: vec![sample_historical_trade("closed-1", 10.0, 8.0, 3, midday)],
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(test_data(repository))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!((body["totalOpenPL"].as_f64().unwrap() - 10.0).abs() < 1e-9);
        assert!((body["todayRealizedPL"].as_f64().unwrap() + 6.0).abs() < 1e-9);
        assert!((body["portfolioValue"].as_f64().unwrap() - 60.0).abs() < 1e-9);

        let open = &body["openTrades"][0];
        assert_eq!(open["trade_id"], "open-1");
        assert_eq!(open["status"], "open");
        assert_eq!(open["isProfit"], true);
        assert!((open["profitLossPercent"].as_f64().unwrap() - 20.0).abs() < 1e-9);

        let closed = &body["closedToday"][0];
        assert_eq!(closed["status"], "closed");
        assert_eq!(closed["isProfit"], false);
    }

    #[actix_web::test]
    async fn test_summary_fails_when_trades_cannot_load() {
        let repository = InMemoryTradeRepository {
            unreachable: true,
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(test_data(repository))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
