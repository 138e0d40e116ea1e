use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::SecondsFormat;
use gloo_net::http::Request;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::email::EmailAddress;
use super::store::{StoreError, WaitlistEntry, WaitlistStore};
use crate::config;

const COUNT_ALIAS: &str = "count";

/// Where the Firestore REST API lives for this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreEndpoint {
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreEndpoint {
    pub fn new(base_url: &str, project_id: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_firestore_url(),
            config::get_firestore_project_id(),
            config::get_firestore_api_key(),
        )
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            self.base_url, self.project_id
        )
    }

    pub fn collection_url(&self, collection: &str) -> String {
        self.with_key(format!("{}/{}", self.documents_root(), collection))
    }

    pub fn run_query_url(&self) -> String {
        self.with_key(format!("{}:runQuery", self.documents_root()))
    }

    pub fn run_aggregation_url(&self) -> String {
        self.with_key(format!("{}:runAggregationQuery", self.documents_root()))
    }

    fn with_key(&self, url: String) -> String {
        match &self.api_key {
            Some(key) => format!("{}?key={}", url, urlencoding::encode(key)),
            None => url,
        }
    }
}

/// Typed Firestore value, serialized as `{"stringValue": "..."}` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    StringValue(String),
    TimestampValue(String),
    IntegerValue(String),
}

#[derive(Debug, Serialize)]
pub struct NewDocument {
    fields: BTreeMap<&'static str, FieldValue>,
}

pub fn encode_entry(entry: &WaitlistEntry) -> NewDocument {
    let mut fields = BTreeMap::new();
    fields.insert("email", FieldValue::StringValue(entry.email.to_string()));
    fields.insert(
        "timestamp",
        FieldValue::TimestampValue(entry.joined_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
    );
    if let Some(source) = &entry.source {
        fields.insert("source", FieldValue::StringValue(source.clone()));
    }
    if let Some(user_agent) = &entry.client_context {
        fields.insert("userAgent", FieldValue::StringValue(user_agent.clone()));
    }
    NewDocument { fields }
}

pub fn email_query(collection: &str, email: &EmailAddress) -> serde_json::Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "email" },
                    "op": "EQUAL",
                    "value": { "stringValue": email.as_str() }
                }
            },
            "limit": 1
        }
    })
}

pub fn count_query(collection: &str) -> serde_json::Value {
    json!({
        "structuredAggregationQuery": {
            "structuredQuery": {
                "from": [{ "collectionId": collection }]
            },
            "aggregations": [{ "alias": COUNT_ALIAS, "count": {} }]
        }
    })
}

#[derive(Deserialize)]
struct CreatedDocument {
    name: String,
}

#[derive(Deserialize)]
struct QueryRow {
    #[serde(default)]
    document: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct AggregationRow {
    #[serde(default)]
    result: Option<AggregationResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregationResult {
    aggregate_fields: HashMap<String, FieldValue>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

fn parse<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Returns the id segment of a created document's resource name.
pub fn decode_created_id(body: &str) -> Result<String, StoreError> {
    let created: CreatedDocument = parse(body)?;
    created
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| StoreError::Decode(format!("document name without id: {}", created.name)))
}

/// `runQuery` answers with one row per match, or a single row holding only
/// `readTime` when nothing matched.
pub fn decode_exists(body: &str) -> Result<bool, StoreError> {
    let rows: Vec<QueryRow> = parse(body)?;
    Ok(rows.iter().any(|row| row.document.is_some()))
}

pub fn decode_count(body: &str) -> Result<u64, StoreError> {
    let rows: Vec<AggregationRow> = parse(body)?;
    let value = rows
        .into_iter()
        .filter_map(|row| row.result)
        .find_map(|mut result| result.aggregate_fields.remove(COUNT_ALIAS))
        .ok_or_else(|| StoreError::Decode("aggregation result without count".to_string()))?;

    match value {
        FieldValue::IntegerValue(raw) => raw
            .parse()
            .map_err(|_| StoreError::Decode(format!("count is not an integer: {}", raw))),
        other => Err(StoreError::Decode(format!("count has unexpected type: {:?}", other))),
    }
}

pub fn decode_error(status: u16, body: &str) -> StoreError {
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.status, envelope.error.message),
        Err(_) => (String::new(), body.trim().to_string()),
    };

    match (code.as_str(), status) {
        ("PERMISSION_DENIED", _) | ("", 401 | 403) => StoreError::PermissionDenied(message),
        ("UNAVAILABLE", _) | ("", 503) => StoreError::Unavailable(message),
        ("ALREADY_EXISTS", _) => StoreError::Duplicate,
        _ => StoreError::Rejected { status, message },
    }
}

/// Waitlist collection in Firestore, reached over its REST API.
pub struct FirestoreStore {
    endpoint: FirestoreEndpoint,
    collection: String,
}

impl FirestoreStore {
    pub fn new(endpoint: FirestoreEndpoint, collection: &str) -> Self {
        Self {
            endpoint,
            collection: collection.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(FirestoreEndpoint::from_config(), config::WAITLIST_COLLECTION)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        operation: &str,
        url: &str,
        body: &T,
    ) -> Result<String, StoreError> {
        debug!("firestore {} on {}", operation, self.collection);
        let response = Request::post(url)
            .json(body)
            .map_err(|e| StoreError::Network(format!("could not build {} request: {}", operation, e)))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Network(format!("reading {} response: {}", operation, e)))?;

        debug!("firestore {} -> {} ({} bytes)", operation, status, text.len());
        if !ok {
            return Err(decode_error(status, &text));
        }
        Ok(text)
    }
}

#[async_trait(?Send)]
impl WaitlistStore for FirestoreStore {
    async fn exists(&self, email: &EmailAddress) -> Result<bool, StoreError> {
        let body = self
            .post_json(
                "runQuery",
                &self.endpoint.run_query_url(),
                &email_query(&self.collection, email),
            )
            .await?;
        decode_exists(&body)
    }

    async fn insert(&self, entry: WaitlistEntry) -> Result<String, StoreError> {
        let body = self
            .post_json(
                "createDocument",
                &self.endpoint.collection_url(&self.collection),
                &encode_entry(&entry),
            )
            .await?;
        decode_created_id(&body)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let body = self
            .post_json(
                "runAggregationQuery",
                &self.endpoint.run_aggregation_url(),
                &count_query(&self.collection),
            )
            .await?;
        decode_count(&body)
    }
}
