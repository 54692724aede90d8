//! Job domain entities
//!
//! Jobs are schemaless documents: whatever the HR side submits is stored and
//! returned as sent, `null`s and non-string values included. The fields the
//! service itself reads are exposed through typed accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Field name the identifier is serialized under
pub const ID_FIELD: &str = "_id";

/// Denormalized counter maintained by application submissions
pub const APPLICATION_COUNT_FIELD: &str = "applicationCount";

/// Owning HR identity
pub const HR_EMAIL_FIELD: &str = "hr_email";

/// Job posting document as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobDocument(Map<String, Value>);

impl JobDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// A field's value when it is a string
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn hr_email(&self) -> Option<&str> {
        self.str_field(HR_EMAIL_FIELD)
    }

    /// Current counter; absent until the first application arrives
    pub fn application_count(&self) -> Option<i64> {
        self.0.get(APPLICATION_COUNT_FIELD).and_then(Value::as_i64)
    }

    pub fn set_application_count(&mut self, count: i64) {
        self.0
            .insert(APPLICATION_COUNT_FIELD.to_string(), Value::from(count));
    }

    /// Drop client-supplied values for fields the store owns
    pub fn into_insertable(mut self) -> Self {
        self.0.remove(ID_FIELD);
        self.0.remove(APPLICATION_COUNT_FIELD);
        self
    }
}

/// Stored job: generated identifier plus document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub document: JobDocument,
}

/// Filter for listing jobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub hr_email: Option<String>,
}

impl JobFilter {
    pub fn by_hr_email(email: impl Into<String>) -> Self {
        Self {
            hr_email: Some(email.into()),
        }
    }

    pub fn matches(&self, document: &JobDocument) -> bool {
        match &self.hr_email {
            Some(email) => document.hr_email() == Some(email.as_str()),
            None => true,
        }
    }
}
