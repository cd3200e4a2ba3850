// ==================== USER MANAGEMENT ====================
// Users are keyed by a client-assigned `uid` (stored as the document `_id`),
// and a create is a full replace. Only the three known profile fields are
// persisted; anything else in the body is discarded.

use crate::{
    database::{self, MongoDB},
    models::UserUpsertRequest,
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};

const USERS_COLLECTION: &str = "users";

/// Lists every user with the `uid` key surfaced as `id`.
pub async fn list_users(db: &MongoDB) -> Result<Vec<serde_json::Value>, AppError> {
    let collection = db.collection::<Document>(USERS_COLLECTION);

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => users.push(database::document_to_json(document)),
            Err(e) => log::warn!("⚠️ Skipping unreadable user document: {}", e),
        }
    }

    Ok(users)
}

/// Creates or replaces the user stored at key `uid`.
pub async fn save_user(db: &MongoDB, request: UserUpsertRequest) -> Result<(), AppError> {
    let (uid, user_doc) = build_user_document(&request)?;

    let collection = db.collection::<Document>(USERS_COLLECTION);
    collection
        .replace_one(doc! { "_id": uid }, user_doc)
        .upsert(true)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Validates the request and builds the stored profile document. Absent
/// optionals are omitted rather than stored as nulls.
fn build_user_document(request: &UserUpsertRequest) -> Result<(String, Document), AppError> {
    let (uid, email) = match (request.uid.as_deref(), request.email.as_deref()) {
        (Some(uid), Some(email)) if !uid.is_empty() && !email.is_empty() => (uid, email),
        _ => return Err(AppError::InvalidRequest("Missing uid or email".to_string())),
    };

    let mut user_doc = doc! { "email": email };
    if let Some(nickname) = request.nickname.as_deref() {
        user_doc.insert("nickname", nickname);
    }
    if let Some(avatar) = request.avatar.as_deref() {
        user_doc.insert("avatar", avatar);
    }

    Ok((uid.to_string(), user_doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        uid: Option<&str>,
        email: Option<&str>,
        nickname: Option<&str>,
        avatar: Option<&str>,
    ) -> UserUpsertRequest {
        UserUpsertRequest {
            uid: uid.map(String::from),
            email: email.map(String::from),
            nickname: nickname.map(String::from),
            avatar: avatar.map(String::from),
        }
    }

    #[test]
    fn missing_uid_is_rejected() {
        let err = build_user_document(&request(None, Some("a@b.c"), None, None)).unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Missing uid or email".to_string()));
    }

    #[test]
    fn missing_email_is_rejected() {
        let err = build_user_document(&request(Some("u1"), None, None, None)).unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Missing uid or email".to_string()));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err = build_user_document(&request(Some(""), Some("a@b.c"), None, None)).unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Missing uid or email".to_string()));
    }

    #[test]
    fn absent_optionals_are_not_stored() {
        let (uid, doc) =
            build_user_document(&request(Some("u1"), Some("a@b.c"), None, None)).unwrap();

        assert_eq!(uid, "u1");
        assert_eq!(doc.get_str("email").unwrap(), "a@b.c");
        assert!(!doc.contains_key("nickname"));
        assert!(!doc.contains_key("avatar"));
    }

    #[test]
    fn present_optionals_are_stored() {
        let (_, doc) = build_user_document(&request(
            Some("u1"),
            Some("a@b.c"),
            Some("ace"),
            Some("https://cdn.example/a.png"),
        ))
        .unwrap();

        assert_eq!(doc.get_str("nickname").unwrap(), "ace");
        assert_eq!(doc.get_str("avatar").unwrap(), "https://cdn.example/a.png");
    }
}
