use crate::client::types::{AreaQuery, SuggestionRequest};
use crate::models::{Area, TransportStop};
use anyhow::Result;
use async_trait::async_trait;

/// Boundary to the remote affordability service. The engine only ever sees
/// the plain collections these calls resolve to, which keeps it testable
/// against an in-memory fake.
#[async_trait]
pub trait AffordabilityApi: Send + Sync {
    /// Areas for one profession, server-side filters applied per the query.
    async fn fetch_areas(&self, query: &AreaQuery) -> Result<Vec<Area>>;

    /// The full transit-stop collection.
    async fn fetch_stops(&self) -> Result<Vec<TransportStop>>;

    /// The service's ranked candidate pool for a user profile. An empty
    /// vector is a valid "no match" answer, not an error.
    async fn suggest(&self, request: &SuggestionRequest) -> Result<Vec<Area>>;
}
