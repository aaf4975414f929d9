use bson::Document;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A published event listing.
///
/// Immutable from this service's point of view; the only write path in the
/// system is booking creation. Descriptive fields beyond the ones named here
/// are opaque payload and round-trip through `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// URL-safe unique key: lowercase, alphanumeric and hyphens only.
    pub slug: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub location: String,

    /// Short labels used to find related listings.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Remaining descriptive payload (image, agenda, audience, ...).
    #[serde(flatten)]
    pub extra: Document,
}
