mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Venture Service...");

    api::metrics::init_process_start();

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // The API is consumed from arbitrary frontends; every origin is allowed
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Startups: owner-scoped collection
            .service(
                web::scope("/api/startup")
                    .route("/{uid}", web::get().to(api::startups::get_startups))
                    .route("/{uid}", web::post().to(api::startups::create_startup))
                    .route("/{uid}/{id}", web::put().to(api::startups::update_startup)),
            )
            // Investors: unconstrained catalog
            .service(
                web::scope("/api/investors")
                    .route("", web::get().to(api::investors::get_investors))
                    .route("", web::post().to(api::investors::create_investor)),
            )
            // Markets: unconstrained catalog
            .service(
                web::scope("/api/markets")
                    .route("", web::get().to(api::markets::get_markets))
                    .route("", web::post().to(api::markets::create_market)),
            )
            // Users: keyed by client-assigned uid
            .service(
                web::scope("/api/users")
                    .route("", web::get().to(api::users::get_users))
                    .route("", web::post().to(api::users::save_user)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await?;

    // Server stopped: close the store connection explicitly
    log::info!("👋 Shutting down, closing MongoDB connection");
    db.shutdown().await;

    Ok(())
}
