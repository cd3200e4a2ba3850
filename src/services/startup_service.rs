// ==================== STARTUP MANAGEMENT ====================
// Owner-scoped startup collection. Every operation is keyed by the owner
// identifier from the path; a startup whose stored `uid` differs from the
// caller's is reported exactly like a missing one.

use crate::{
    database::{self, MongoDB},
    models::StartupPayload,
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

const STARTUPS_COLLECTION: &str = "startups";
const MIN_NAME_LEN: usize = 5;

/// Lists every startup owned by `uid`, with the store-assigned `id` injected.
pub async fn list_startups(db: &MongoDB, uid: &str) -> Result<Vec<serde_json::Value>, AppError> {
    let collection = db.collection::<Document>(STARTUPS_COLLECTION);

    let mut cursor = collection
        .find(doc! { "uid": uid })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut startups = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => startups.push(database::document_to_json(document)),
            Err(e) => log::warn!("⚠️ Skipping unreadable startup document: {}", e),
        }
    }

    Ok(startups)
}

/// Creates a startup under `uid`. The store assigns the identifier.
pub async fn create_startup(
    db: &MongoDB,
    uid: &str,
    payload: StartupPayload,
) -> Result<(), AppError> {
    validate_name(&payload)?;

    let document = storable_document(uid, &payload)?;

    let collection = db.collection::<Document>(STARTUPS_COLLECTION);
    collection
        .insert_one(document)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Merges `payload` into an existing startup. The document is fetched first
/// and its stored owner compared to the path owner; an unparseable id, a
/// missing document and an ownership mismatch all produce the same NotFound.
pub async fn update_startup(
    db: &MongoDB,
    uid: &str,
    id: &str,
    payload: StartupPayload,
) -> Result<(), AppError> {
    validate_name(&payload)?;

    let object_id = ObjectId::parse_str(id)
        .map_err(|_| AppError::NotFound("Startup not found".to_string()))?;

    let collection = db.collection::<Document>(STARTUPS_COLLECTION);

    let existing = collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Startup not found".to_string()))?;

    if !matches!(existing.get_str("uid"), Ok(stored) if stored == uid) {
        return Err(AppError::NotFound("Startup not found".to_string()));
    }

    // Read-then-write, not atomic: a concurrent writer between the fetch and
    // the $set wins last. Accepted behavior for this service.
    let update = storable_document(uid, &payload)?;

    collection
        .update_one(doc! { "_id": object_id }, doc! { "$set": update })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(())
}

fn validate_name(payload: &StartupPayload) -> Result<(), AppError> {
    match payload.name.as_deref() {
        Some(name) if name.chars().count() >= MIN_NAME_LEN => Ok(()),
        _ => Err(AppError::InvalidRequest("Name too short".to_string())),
    }
}

/// Body fields as a storable document, with the owner stamped from the path.
/// Ownership never changes hands via the body.
fn storable_document(uid: &str, payload: &StartupPayload) -> Result<Document, AppError> {
    let value = serde_json::to_value(payload)
        .map_err(|e| AppError::InvalidRequest(format!("Unsupported JSON body: {}", e)))?;

    let mut document = database::json_object_to_document(&value)?;
    document.insert("uid", uid);

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> StartupPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn name_missing_is_too_short() {
        let err = validate_name(&payload(json!({ "pitch": "no name at all" }))).unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Name too short".to_string()));
    }

    #[test]
    fn name_under_five_chars_is_too_short() {
        let err = validate_name(&payload(json!({ "name": "Ab" }))).unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Name too short".to_string()));
    }

    #[test]
    fn name_of_exactly_five_chars_passes() {
        assert!(validate_name(&payload(json!({ "name": "Abcde" }))).is_ok());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // five characters, more than five bytes
        assert!(validate_name(&payload(json!({ "name": "Ångst" }))).is_ok());
    }

    #[test]
    fn storable_document_stamps_owner_from_path() {
        let payload = payload(json!({ "name": "Acme Inc", "uid": "intruder", "stage": "seed" }));

        let document = storable_document("u1", &payload).unwrap();

        assert_eq!(document.get_str("uid").unwrap(), "u1");
        assert_eq!(document.get_str("name").unwrap(), "Acme Inc");
        assert_eq!(document.get_str("stage").unwrap(), "seed");
    }

    #[test]
    fn storable_document_drops_client_supplied_ids() {
        let payload = payload(json!({ "name": "Acme Inc", "id": "fake", "_id": "faker" }));

        let document = storable_document("u1", &payload).unwrap();

        assert!(!document.contains_key("id"));
        assert!(!document.contains_key("_id"));
    }
}
