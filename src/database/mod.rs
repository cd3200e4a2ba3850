use mongodb::bson::{Bson, Document};
use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::utils::error::AppError;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool tuning
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty() && !s.contains(':'))
            .unwrap_or("venture");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates necessary indexes for optimal query performance
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // Index for startups: (uid) - the owner-scoped list and update paths
        // filter on the owner identifier
        let startups = self.db.collection::<Document>("startups");

        let startups_index = IndexModel::builder().keys(doc! { "uid": 1 }).build();

        match startups.create_index(startups_index).await {
            Ok(_) => log::info!("   ✅ Index created: startups(uid)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Closes the underlying client. Called once after the HTTP server exits.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Maps a stored document to its JSON wire shape: `_id` is surfaced as `id`
/// (ObjectIds as 24-char hex, client-assigned string keys as-is), every other
/// field passes through unchanged.
pub fn document_to_json(mut doc: Document) -> serde_json::Value {
    let mut map = serde_json::Map::new();

    if let Some(id) = doc.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        map.insert("id".to_string(), serde_json::Value::String(id));
    }

    for (key, value) in doc {
        map.insert(key, value.into());
    }

    serde_json::Value::Object(map)
}

/// Converts a JSON request body into a storable document. Only objects are
/// storable; anything else is the caller's fault. Identifier keys (`id`,
/// `_id`) are discarded — identity is assigned by the store, never taken
/// from the body.
pub fn json_object_to_document(value: &serde_json::Value) -> Result<Document, AppError> {
    if !value.is_object() {
        return Err(AppError::InvalidRequest("Expected a JSON object".to_string()));
    }

    let mut doc = mongodb::bson::to_document(value)
        .map_err(|e| AppError::InvalidRequest(format!("Unsupported JSON body: {}", e)))?;
    doc.remove("_id");
    doc.remove("id");

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn document_to_json_injects_hex_id() {
        let oid = ObjectId::new();
        let doc = doc! { "_id": oid, "name": "Acme Inc", "uid": "u1" };

        let value = document_to_json(doc);

        assert_eq!(value["id"], json!(oid.to_hex()));
        assert_eq!(value["name"], json!("Acme Inc"));
        assert_eq!(value["uid"], json!("u1"));
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn document_to_json_passes_string_id_through() {
        let doc = doc! { "_id": "user-42", "email": "a@b.c" };

        let value = document_to_json(doc);

        assert_eq!(value["id"], json!("user-42"));
        assert_eq!(value["email"], json!("a@b.c"));
    }

    #[test]
    fn document_to_json_keeps_nested_fields() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "tags": ["fintech", "b2b"],
            "funding": { "round": "seed", "amount": 500000 },
        };

        let value = document_to_json(doc);

        assert_eq!(value["tags"], json!(["fintech", "b2b"]));
        assert_eq!(value["funding"]["round"], json!("seed"));
        assert_eq!(value["funding"]["amount"], json!(500000));
    }

    #[test]
    fn json_object_to_document_rejects_non_objects() {
        let err = json_object_to_document(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Expected a JSON object".to_string()));

        let err = json_object_to_document(&json!("plain string")).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn json_object_to_document_round_trips() {
        let body = json!({ "name": "Beta Fund", "focus": ["saas"], "checks": 12 });

        let doc = json_object_to_document(&body).unwrap();

        assert_eq!(doc.get_str("name").unwrap(), "Beta Fund");
        assert_eq!(document_to_json(doc)["checks"], json!(12));
    }

    #[test]
    fn json_object_to_document_discards_identifier_keys() {
        let body = json!({ "id": "spoofed", "_id": "also spoofed", "name": "Beta Fund" });

        let doc = json_object_to_document(&body).unwrap();

        assert!(!doc.contains_key("id"));
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Beta Fund");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/venture".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}
