use crate::{
    database::MongoDB, models::UserUpsertRequest, services::user_service, utils::error::AppError,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /users - Listing users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ {} users listed", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error getting users"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserUpsertRequest,
    responses(
        (status = 200, description = "User stored at the supplied uid"),
        (status = 400, description = "uid or email missing"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn save_user(
    db: web::Data<MongoDB>,
    body: web::Json<UserUpsertRequest>,
) -> HttpResponse {
    log::info!("📝 POST /users - Saving user");

    match user_service::save_user(&db, body.into_inner()).await {
        Ok(()) => {
            log::info!("✅ User saved");
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(AppError::InvalidRequest(msg)) => {
            log::warn!("⚠️ Rejected user: {}", msg);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::NotFound(msg)) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": msg }))
        }
        Err(AppError::DatabaseError(e)) => {
            log::error!("❌ Failed to save user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error saving user"
            }))
        }
    }
}
