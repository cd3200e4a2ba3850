use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Venture Service API",
        version = "0.1.0",
        description = "REST façade over the venture document store.\n\n**Resources:**\n- Startups: owner-scoped, validated name, update restricted to the owner\n- Investors and Markets: unconstrained catalog collections\n- Users: keyed by a client-assigned uid\n\nNo authentication is enforced; ownership is established from path parameters.",
        contact(
            name = "Venture Service Team"
        )
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Startups
        crate::api::startups::get_startups,
        crate::api::startups::create_startup,
        crate::api::startups::update_startup,

        // Investors
        crate::api::investors::get_investors,
        crate::api::investors::create_investor,

        // Markets
        crate::api::markets::get_markets,
        crate::api::markets::create_market,

        // Users
        crate::api::users::get_users,
        crate::api::users::save_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
            crate::models::user::UserUpsertRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
        (name = "Startups", description = "Owner-scoped startup endpoints. A startup is only visible through the owner identifier it was created under."),
        (name = "Investors", description = "Investor catalog endpoints. Schemaless documents, listed with their store-assigned identifier."),
        (name = "Markets", description = "Market catalog endpoints. Schemaless documents, listed with their store-assigned identifier."),
        (name = "Users", description = "User profile endpoints. Keyed by the client-assigned uid; create is an upsert."),
    )
)]
pub struct ApiDoc;
