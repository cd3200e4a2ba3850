use crate::{
    database::MongoDB, models::StartupPayload, services::startup_service, utils::error::AppError,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/startup/{uid}",
    tag = "Startups",
    params(
        ("uid" = String, Path, description = "Owner identifier")
    ),
    responses(
        (status = 200, description = "Startups owned by the given identifier"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_startups(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let uid = path.into_inner();
    log::info!("🚀 GET /startup/{} - Listing startups", uid);

    match startup_service::list_startups(&db, &uid).await {
        Ok(startups) => {
            log::info!("✅ {} startups listed for {}", startups.len(), uid);
            HttpResponse::Ok().json(startups)
        }
        Err(e) => {
            log::error!("❌ Failed to list startups for {}: {}", uid, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error getting startups"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/startup/{uid}",
    tag = "Startups",
    params(
        ("uid" = String, Path, description = "Owner identifier")
    ),
    responses(
        (status = 200, description = "Startup created"),
        (status = 400, description = "Name missing or shorter than 5 characters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_startup(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<StartupPayload>,
) -> HttpResponse {
    let uid = path.into_inner();
    log::info!("📝 POST /startup/{} - Creating startup", uid);

    match startup_service::create_startup(&db, &uid, body.into_inner()).await {
        Ok(()) => {
            log::info!("✅ Startup created for {}", uid);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(AppError::InvalidRequest(msg)) => {
            log::warn!("⚠️ Rejected startup for {}: {}", uid, msg);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::NotFound(msg)) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::DatabaseError(e)) => {
            log::error!("❌ Failed to create startup for {}: {}", uid, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error saving startup"
            }))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/startup/{uid}/{id}",
    tag = "Startups",
    params(
        ("uid" = String, Path, description = "Owner identifier"),
        ("id" = String, Path, description = "Startup identifier")
    ),
    responses(
        (status = 200, description = "Startup updated"),
        (status = 400, description = "Name missing or shorter than 5 characters"),
        (status = 404, description = "No startup with this identifier owned by this caller"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_startup(
    db: web::Data<MongoDB>,
    path: web::Path<(String, String)>,
    body: web::Json<StartupPayload>,
) -> HttpResponse {
    let (uid, id) = path.into_inner();
    log::info!("🔧 PUT /startup/{}/{} - Updating startup", uid, id);

    match startup_service::update_startup(&db, &uid, &id, body.into_inner()).await {
        Ok(()) => {
            log::info!("✅ Startup {} updated", id);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(AppError::InvalidRequest(msg)) => {
            log::warn!("⚠️ Rejected update of {}: {}", id, msg);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::NotFound(msg)) => {
            log::warn!("⚠️ Startup {} not visible to {}", id, uid);
            HttpResponse::NotFound().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::DatabaseError(e)) => {
            log::error!("❌ Failed to update startup {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error updating startup"
            }))
        }
    }
}
