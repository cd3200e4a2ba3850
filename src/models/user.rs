use serde::Deserialize;

/// POST /api/users body. `uid` doubles as the document key, so users are the
/// one resource with a client-assigned identifier. Required fields are
/// options so the service can answer with the contract's 400 message instead
/// of a deserializer error.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UserUpsertRequest {
    pub uid: Option<String>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
}
