use crate::{database::MongoDB, services::catalog_service, utils::error::AppError};
use actix_web::{web, HttpResponse};

const COLLECTION: &str = "investors";

#[utoipa::path(
    get,
    path = "/api/investors",
    tag = "Investors",
    responses(
        (status = 200, description = "All investors"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_investors(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /investors - Listing investors");

    match catalog_service::list_entries(&db, COLLECTION).await {
        Ok(investors) => {
            log::info!("✅ {} investors listed", investors.len());
            HttpResponse::Ok().json(investors)
        }
        Err(e) => {
            log::error!("❌ Failed to list investors: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error getting investors"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/investors",
    tag = "Investors",
    responses(
        (status = 200, description = "Investor created, store-assigned id returned"),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_investor(
    db: web::Data<MongoDB>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    log::info!("📝 POST /investors - Adding investor");

    match catalog_service::add_entry(&db, COLLECTION, &body).await {
        Ok(id) => {
            log::info!("✅ Investor added: {}", id);
            HttpResponse::Ok().json(serde_json::json!({ "id": id }))
        }
        Err(AppError::InvalidRequest(msg)) => {
            log::warn!("⚠️ Rejected investor: {}", msg);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::NotFound(msg)) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::DatabaseError(e)) => {
            log::error!("❌ Failed to add investor: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error adding investor"
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/venture_test".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running for ignored tests")
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn created_investor_round_trips_through_the_listing() {
        let db = test_db().await;
        let app = test::init_service(
            App::new().app_data(web::Data::new(db.clone())).service(
                web::scope("/api/investors")
                    .route("", web::get().to(get_investors))
                    .route("", web::post().to(create_investor)),
            ),
        )
        .await;

        let res = test::TestRequest::post()
            .uri("/api/investors")
            .set_json(json!({ "name": "Beta Fund", "focus": ["saas", "fintech"] }))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        let id = body["id"].as_str().expect("store-assigned id").to_string();

        let res = test::TestRequest::get()
            .uri("/api/investors")
            .send_request(&app)
            .await;

        assert_eq!(res.status(), 200);
        let listed: Vec<serde_json::Value> = test::read_body_json(res).await;
        let created = listed
            .iter()
            .find(|entry| entry["id"] == json!(id))
            .expect("created investor is listed");
        assert_eq!(created["name"], "Beta Fund");
        assert_eq!(created["focus"], json!(["saas", "fintech"]));
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn non_object_body_is_rejected() {
        let db = test_db().await;
        let app = test::init_service(
            App::new().app_data(web::Data::new(db.clone())).service(
                web::scope("/api/investors")
                    .route("", web::post().to(create_investor)),
            ),
        )
        .await;

        let res = test::TestRequest::post()
            .uri("/api/investors")
            .set_json(json!(["not", "an", "object"]))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), 400);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Expected a JSON object");
    }
}
