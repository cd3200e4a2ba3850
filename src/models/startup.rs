use serde::{Deserialize, Serialize};

/// Startup payload as submitted by the client (create and update share it).
///
/// Startups are schemaless apart from the validated `name`; whatever else the
/// client sends is stored as-is, so unknown fields are captured instead of
/// rejected. The owner identifier is never taken from the body — it comes
/// from the path and is stamped onto the document by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StartupPayload {
    /// Display name, required, minimum 5 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any additional client-defined fields, stored verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
