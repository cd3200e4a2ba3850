use crate::{database::MongoDB, services::catalog_service, utils::error::AppError};
use actix_web::{web, HttpResponse};

const COLLECTION: &str = "markets";

#[utoipa::path(
    get,
    path = "/api/markets",
    tag = "Markets",
    responses(
        (status = 200, description = "All markets"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_markets(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /markets - Listing markets");

    match catalog_service::list_entries(&db, COLLECTION).await {
        Ok(markets) => {
            log::info!("✅ {} markets listed", markets.len());
            HttpResponse::Ok().json(markets)
        }
        Err(e) => {
            log::error!("❌ Failed to list markets: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error getting markets"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/markets",
    tag = "Markets",
    responses(
        (status = 200, description = "Market created, store-assigned id returned"),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_market(
    db: web::Data<MongoDB>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    log::info!("📝 POST /markets - Adding market");

    match catalog_service::add_entry(&db, COLLECTION, &body).await {
        Ok(id) => {
            log::info!("✅ Market added: {}", id);
            HttpResponse::Ok().json(serde_json::json!({ "id": id }))
        }
        Err(AppError::InvalidRequest(msg)) => {
            log::warn!("⚠️ Rejected market: {}", msg);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::NotFound(msg)) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::DatabaseError(e)) => {
            log::error!("❌ Failed to add market: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error adding market"
            }))
        }
    }
}
