//! MongoDB implementation of TextRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson},
    error::{Error as MongoError, ErrorKind},
    Client, Collection, Database,
};

use vectext::{DomainError, TextDocument, TextRepository};

/// MongoDB implementation of TextRepository
pub struct MongoTextRepository {
    database: Database,
    collection: Collection<TextDocument>,
}

impl MongoTextRepository {
    /// Build a client from a connection string.
    ///
    /// The driver connects lazily; an unreachable server surfaces on first use.
    pub async fn connect(
        uri: &str,
        db_name: &str,
        collection_name: &str,
    ) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| DomainError::Repository(format!("Invalid MongoDB connection string: {e}")))?;

        Ok(Self::new(client.database(db_name), collection_name))
    }

    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection::<TextDocument>(collection_name);
        Self {
            database,
            collection,
        }
    }

    /// Round-trip to the server
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

fn map_mongo_error(err: MongoError) -> DomainError {
    match *err.kind {
        ErrorKind::BsonSerialization(_) => DomainError::Serialization(err.to_string()),
        _ => DomainError::Repository(err.to_string()),
    }
}

/// Render a generated `_id` as text: ObjectIds become their 24-char hex form
fn inserted_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl TextRepository for MongoTextRepository {
    async fn insert(&self, document: &TextDocument) -> Result<String, DomainError> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_mongo_error)?;

        Ok(inserted_id_to_string(result.inserted_id))
    }
}
