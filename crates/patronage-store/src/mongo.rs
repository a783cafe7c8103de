//! MongoDB-backed [`RecordStore`] using the driver's blocking API.

use mongodb::bson::{doc, Bson, DateTime, Document};
use mongodb::sync::{Client, Collection};
use patronage_core::config::MongoConfig;
use patronage_core::{FieldValue, NormalizedRecord};

use crate::{RecordStore, StoreError};

/// One collection in one database on one server.
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Build a client for `mongodb://host:port`. The driver connects lazily,
    /// so an unreachable server surfaces on the first operation.
    pub fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let uri = format!("mongodb://{}:{}", config.host, config.port);
        tracing::debug!(%uri, database = %config.database, collection = %config.collection, "connecting");

        let client = Client::with_uri_str(&uri)?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);
        Ok(Self { collection })
    }
}

impl RecordStore for MongoStore {
    fn insert(&mut self, record: &NormalizedRecord) -> Result<(), StoreError> {
        let document = to_document(record)?;
        self.collection.insert_one(document).run()?;
        Ok(())
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).run()?)
    }

    fn drop_all(&mut self) -> Result<u64, StoreError> {
        let existing = self.count()?;
        self.collection.drop().run()?;
        Ok(existing)
    }
}

/// Convert a record to BSON. Timestamps are stored as UTC date-times.
pub fn to_document(record: &NormalizedRecord) -> Result<Document, StoreError> {
    let mut document = Document::new();
    for (name, value) in record.iter() {
        if name.contains('\0') {
            return Err(StoreError::Encode {
                field: name.escape_debug().to_string(),
                reason: "BSON keys cannot contain NUL".to_string(),
            });
        }
        let value = match value {
            FieldValue::Text(s) => Bson::String(s.clone()),
            FieldValue::Null => Bson::Null,
            FieldValue::Timestamp(ts) => {
                Bson::DateTime(DateTime::from_millis(ts.and_utc().timestamp_millis()))
            }
            FieldValue::Float(f) => Bson::Double(*f),
            FieldValue::Integer(i) => Bson::Int64(*i),
        };
        document.insert(name, value);
    }
    Ok(document)
}
