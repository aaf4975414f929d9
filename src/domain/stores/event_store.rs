//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// Read access to the event collection: exact lookup by slug and the similar-events query.
// Similarity is tag intersection - any shared tag qualifies, no overlap threshold, no ranking.
// Results come back in the store's natural order.
//--------------------------------------------------------------------------------------------------

use std::sync::Arc;

use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::Collection;

use crate::db::{MongoConnectionManager, StoreError};
use crate::domain::models::Event;

pub const EVENTS_COLLECTION: &str = "events";

/// Read access to the event collection.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Exact-match lookup on the unique slug.
    ///
    /// `Ok(None)` means no such event; a backend failure stays distinct as
    /// `Err` so each caller chooses how to fold the two.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, StoreError>;

    /// Every other event sharing at least one tag with the event at `slug`.
    ///
    /// An unknown slug yields an empty list, not an error. The source event
    /// is never part of the result.
    async fn find_similar_by_slug(&self, slug: &str) -> Result<Vec<Event>, StoreError>;
}

/// `EventStore` backed by MongoDB, connecting through the shared manager.
pub struct MongoEventStore {
    manager: Arc<MongoConnectionManager>,
}

impl MongoEventStore {
    pub fn new(manager: Arc<MongoConnectionManager>) -> Self {
        Self { manager }
    }

    async fn events(&self) -> Result<Collection<Event>, StoreError> {
        let db = self.manager.connect().await?;
        Ok(db.collection(EVENTS_COLLECTION))
    }
}

/// Filter matching every event other than `event` that shares a tag with it.
fn similar_filter(event: &Event) -> Document {
    doc! {
        "_id": { "$ne": event.id },
        "tags": { "$in": event.tags.clone() },
    }
}

#[async_trait]
impl EventStore for MongoEventStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, StoreError> {
        let events = self.events().await?;
        let event = events.find_one(doc! { "slug": slug }).await?;
        Ok(event)
    }

    async fn find_similar_by_slug(&self, slug: &str) -> Result<Vec<Event>, StoreError> {
        let events = self.events().await?;
        let Some(event) = events.find_one(doc! { "slug": slug }).await? else {
            return Ok(Vec::new());
        };

        let similar = events
            .find(similar_filter(&event))
            .await?
            .try_collect()
            .await?;
        Ok(similar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;
    use bson::oid::ObjectId;

    fn event(slug: &str, tags: &[&str]) -> Event {
        Event {
            id: ObjectId::new(),
            slug: slug.to_string(),
            title: format!("{slug} meetup"),
            description: String::new(),
            date: String::new(),
            location: String::new(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            extra: Document::new(),
        }
    }

    #[test]
    fn test_similar_filter_excludes_source_and_matches_any_tag() {
        let source = event("gopherfest", &["go", "web"]);

        let filter = similar_filter(&source);

        let id_clause = filter.get_document("_id").unwrap();
        assert_eq!(id_clause.get_object_id("$ne").unwrap(), source.id);

        let tag_clause = filter.get_document("tags").unwrap();
        let any_of = tag_clause.get_array("$in").unwrap();
        assert_eq!(
            any_of,
            &vec![Bson::from("go"), Bson::from("web")],
            "any shared tag qualifies"
        );
    }

    #[test]
    fn test_similar_filter_with_no_tags_matches_nothing() {
        let source = event("untagged", &[]);

        let filter = similar_filter(&source);

        let tag_clause = filter.get_document("tags").unwrap();
        assert!(tag_clause.get_array("$in").unwrap().is_empty());
    }
}
