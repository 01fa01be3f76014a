use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::models::health::HealthResponse;
use crate::services::trade_service::TradeService;

#[get("/health")]
pub async fn health_check(service: web::Data<TradeService>) -> HttpResponse {
    match service.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            database: "up",
            time: Utc::now(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unreachable");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded",
                database: "down",
                time: Utc::now(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::repository::memory::InMemoryTradeRepository;
    use crate::routes::{configure_routes, test_data};

    #[actix_web::test]
    async fn test_health_up() {
        let app = test::init_service(
            App::new()
                .app_data(test_data(InMemoryTradeRepository::default()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "up");
    }

    #[actix_web::test]
    async fn test_health_down() {
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

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);
    }
}
