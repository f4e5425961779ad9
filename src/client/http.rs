use crate::client::traits::AffordabilityApi;
use crate::client::types::{AreaQuery, SuggestionRequest};
use crate::models::{Area, TransportStop};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// reqwest-backed client for the affordability service.
///
/// Fetched records are validated before they reach the engine; a record that
/// breaks the data invariants fails the whole fetch. No retry here, the
/// caller keeps its last-known-good collections on failure.
pub struct HttpAffordabilityClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AreasResponse {
    areas: Vec<Area>,
}

#[derive(Debug, Deserialize)]
struct StopsResponse {
    stops: Vec<TransportStop>,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    suggested: Vec<Area>,
}

impl HttpAffordabilityClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn validated_areas(areas: Vec<Area>) -> Result<Vec<Area>> {
    for area in &areas {
        area.validate()?;
    }
    Ok(areas)
}

#[async_trait]
impl AffordabilityApi for HttpAffordabilityClient {
    async fn fetch_areas(&self, query: &AreaQuery) -> Result<Vec<Area>> {
        let url = self.url("/api/affordability");
        debug!("Fetching {} for profession '{}'", url, query.profession);

        let response = self
            .client
            .get(url.as_str())
            .query(&query.to_query_pairs())
            .send()
            .await
            .context("Failed to reach affordability endpoint")?;

        if !response.status().is_success() {
            warn!("Affordability endpoint returned status: {}", response.status());
            anyhow::bail!("Affordability request failed: {}", response.status());
        }

        let body: AreasResponse = response
            .json()
            .await
            .context("Failed to decode affordability response")?;

        info!(
            "Fetched {} areas for '{}'",
            body.areas.len(),
            query.profession
        );
        validated_areas(body.areas)
    }

    async fn fetch_stops(&self) -> Result<Vec<TransportStop>> {
        let url = self.url("/api/transport");
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .context("Failed to reach transport endpoint")?;

        if !response.status().is_success() {
            warn!("Transport endpoint returned status: {}", response.status());
            anyhow::bail!("Transport request failed: {}", response.status());
        }

        let body: StopsResponse = response
            .json()
            .await
            .context("Failed to decode transport response")?;

        for stop in &body.stops {
            stop.validate()?;
        }
        info!("Fetched {} transit stops", body.stops.len());
        Ok(body.stops)
    }

    async fn suggest(&self, request: &SuggestionRequest) -> Result<Vec<Area>> {
        let url = self.url("/api/suggest");
        debug!(
            "Requesting suggestions: income {}, family size {}",
            request.income, request.family_size
        );

        let response = self
            .client
            .post(url.as_str())
            .json(request)
            .send()
            .await
            .context("Failed to reach suggest endpoint")?;

        if !response.status().is_success() {
            warn!("Suggest endpoint returned status: {}", response.status());
            anyhow::bail!("Suggest request failed: {}", response.status());
        }

        let body: SuggestResponse = response
            .json()
            .await
            .context("Failed to decode suggest response")?;

        info!("Service suggested {} areas", body.suggested.len());
        validated_areas(body.suggested)
    }
}
