use std::collections::BTreeMap;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::contact::draft::ContactSubmission;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("document store rejected the write ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// Append-only document store. Returns the id of the created document.
#[async_trait(?Send)]
pub trait DocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        record: &ContactSubmission,
    ) -> Result<String, StoreError>;
}

#[derive(Serialize, Debug, PartialEq)]
enum FieldValue {
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "timestampValue")]
    Timestamp(String),
}

#[derive(Serialize, Debug, PartialEq)]
struct FirestoreDocument {
    fields: BTreeMap<&'static str, FieldValue>,
}

impl From<&ContactSubmission> for FirestoreDocument {
    fn from(record: &ContactSubmission) -> Self {
        let draft = &record.draft;
        let mut fields = BTreeMap::new();
        fields.insert("name", FieldValue::String(draft.name.trim().to_string()));
        fields.insert("email", FieldValue::String(draft.email.trim().to_string()));
        fields.insert("phoneNumber", FieldValue::String(draft.phone_number.trim().to_string()));
        fields.insert("company", FieldValue::String(draft.company.trim().to_string()));
        fields.insert("message", FieldValue::String(draft.message.clone()));
        fields.insert("timestamp", FieldValue::Timestamp(record.timestamp_rfc3339()));
        fields.insert("status", FieldValue::String(record.status.as_str().to_string()));
        Self { fields }
    }
}

#[derive(Deserialize)]
struct CreatedDocument {
    name: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// projects/{p}/databases/(default)/documents/{collection}/{id}
fn document_id(resource_name: &str) -> Option<String> {
    resource_name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty() && *id != resource_name)
        .map(str::to_string)
}

/// Firestore over its REST API.
#[derive(Clone, Debug, PartialEq)]
pub struct FirestoreClient {
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(base_url: &str, project_id: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_firestore_url(),
            config::firestore_project_id(),
            config::firestore_api_key(),
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        let url = format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        );
        if self.api_key.is_empty() {
            url
        } else {
            format!("{}?key={}", url, urlencoding::encode(&self.api_key))
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreClient {
    async fn create_document(
        &self,
        collection: &str,
        record: &ContactSubmission,
    ) -> Result<String, StoreError> {
        let response = Request::post(&self.collection_url(collection))
            .json(&FirestoreDocument::from(record))
            .map_err(|e| StoreError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => response.status_text(),
            };
            return Err(StoreError::Rejected { status, message });
        }

        let created = response
            .json::<CreatedDocument>()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        document_id(&created.name)
            .ok_or_else(|| StoreError::Malformed(format!("no document id in {:?}", created.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::draft::ContactFormDraft;
    use serde_json::json;

    #[test]
    fn document_uses_typed_firestore_values() {
        let draft = ContactFormDraft {
            name: " A ".into(),
            email: "a@b.com".into(),
            phone_number: "1234567890".into(),
            company: String::new(),
            message: "hi".into(),
        };
        let record = ContactSubmission::new(draft, 1_700_000_000_000);

        let body = serde_json::to_value(FirestoreDocument::from(&record)).unwrap();
        assert_eq!(
            body,
            json!({
                "fields": {
                    "company": { "stringValue": "" },
                    "email": { "stringValue": "a@b.com" },
                    "message": { "stringValue": "hi" },
                    "name": { "stringValue": "A" },
                    "phoneNumber": { "stringValue": "1234567890" },
                    "status": { "stringValue": "new" },
                    "timestamp": { "timestampValue": "2023-11-14T22:13:20.000Z" }
                }
            })
        );
    }

    #[test]
    fn id_is_last_segment_of_resource_name() {
        assert_eq!(
            document_id("projects/p/databases/(default)/documents/contactSubmissions/abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(document_id("abc123"), None);
        assert_eq!(document_id("projects/p/documents/"), None);
    }

    #[test]
    fn collection_url_adds_key_only_when_configured() {
        let anonymous = FirestoreClient::new("http://localhost:8080/v1/", "demo", "");
        assert_eq!(
            anonymous.collection_url("contactSubmissions"),
            "http://localhost:8080/v1/projects/demo/databases/(default)/documents/contactSubmissions"
        );

        let keyed = FirestoreClient::new("https://firestore.googleapis.com/v1", "demo", "k+y");
        assert!(keyed.collection_url("c").ends_with("/documents/c?key=k%2By"));
    }
}
