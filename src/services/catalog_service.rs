// ==================== CATALOG COLLECTIONS ====================
// Investors and markets share the same contract: unconstrained JSON
// documents, listed with the store-assigned id injected. One service covers
// both collections.

use crate::{
    database::{self, MongoDB},
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};

/// Lists every document in `collection_name` with `id` injected.
pub async fn list_entries(
    db: &MongoDB,
    collection_name: &str,
) -> Result<Vec<serde_json::Value>, AppError> {
    let collection = db.collection::<Document>(collection_name);

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut entries = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => entries.push(database::document_to_json(document)),
            Err(e) => log::warn!("⚠️ Skipping unreadable {} document: {}", collection_name, e),
        }
    }

    Ok(entries)
}

/// Inserts an arbitrary JSON object and returns the store-assigned id.
pub async fn add_entry(
    db: &MongoDB,
    collection_name: &str,
    body: &serde_json::Value,
) -> Result<String, AppError> {
    let document = database::json_object_to_document(body)?;

    let collection = db.collection::<Document>(collection_name);
    let result = collection
        .insert_one(document)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .ok_or_else(|| AppError::DatabaseError("Store returned no document id".to_string()))
}
