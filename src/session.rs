use crate::client::{AffordabilityApi, AreaQuery, SuggestionRequest};
use crate::engine::{
    build_comparison, filter_areas, heat_points, rank_suggestions, top_n, ComparisonResult,
    FilterCriteria, HeatField, HeatPoint, SortOrder, SuggestionOutcome, DEFAULT_TOP_N,
};
use crate::models::{Area, TransportStop};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Owner of the last-known-good analysis inputs.
///
/// Boundary fetches are tagged with a monotonic sequence number so a stale
/// in-flight response can never overwrite a fresher one (last-write-wins per
/// collection). A failed fetch simply never gets applied, leaving the
/// previous collections usable.
pub struct AnalysisSession {
    areas: Vec<Area>,
    stops: Vec<TransportStop>,
    criteria: FilterCriteria,
    fetched_at: Option<DateTime<Utc>>,
    issued_seq: u64,
    applied_area_seq: u64,
    applied_stop_seq: u64,
}

/// Fan-out of one filter pass. Lists, heatmap, and export all derive from
/// the same `filtered` snapshot, so they always agree.
pub struct AnalysisView {
    pub filtered: Vec<Area>,
    pub most_affordable: Vec<Area>,
    pub least_affordable: Vec<Area>,
    pub heatmap: Vec<HeatPoint>,
}

impl AnalysisSession {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            areas: Vec::new(),
            stops: Vec::new(),
            criteria,
            fetched_at: None,
            issued_seq: 0,
            applied_area_seq: 0,
            applied_stop_seq: 0,
        }
    }

    /// Tag for the next boundary fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Install a fetched area collection unless a newer one already landed.
    /// Returns whether the collection was applied.
    pub fn apply_areas(&mut self, seq: u64, areas: Vec<Area>) -> bool {
        if seq < self.applied_area_seq {
            debug!(
                "Discarding stale area fetch (seq {} < {})",
                seq, self.applied_area_seq
            );
            return false;
        }
        self.applied_area_seq = seq;
        self.areas = areas;
        self.fetched_at = Some(Utc::now());
        true
    }

    /// Same last-write-wins rule for the transit stops.
    pub fn apply_stops(&mut self, seq: u64, stops: Vec<TransportStop>) -> bool {
        if seq < self.applied_stop_seq {
            debug!(
                "Discarding stale stop fetch (seq {} < {})",
                seq, self.applied_stop_seq
            );
            return false;
        }
        self.applied_stop_seq = seq;
        self.stops = stops;
        self.fetched_at = Some(Utc::now());
        true
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn stops(&self) -> &[TransportStop] {
        &self.stops
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// One filter pass feeding every consumer. Called whenever any of
    /// (areas, stops, criteria) changes.
    pub fn recompute(&self) -> AnalysisView {
        let filtered = filter_areas(&self.areas, &self.criteria, &self.stops);
        let most_affordable = top_n(&filtered, DEFAULT_TOP_N, SortOrder::Descending);
        let least_affordable = top_n(&filtered, DEFAULT_TOP_N, SortOrder::Ascending);
        let heatmap = heat_points(&filtered, HeatField::Price);
        AnalysisView {
            filtered,
            most_affordable,
            least_affordable,
            heatmap,
        }
    }

    /// Cross-profession table: one fetch per profession, each filtered with
    /// the price/proximity part of the current criteria only, so the columns
    /// stay comparable.
    pub async fn compare(
        &self,
        api: &dyn AffordabilityApi,
        professions: &[String],
    ) -> Result<ComparisonResult> {
        if professions.is_empty() {
            return Ok(ComparisonResult::default());
        }
        let basic = FilterCriteria::basic(self.criteria.max_price, self.criteria.max_proximity_km);
        let mut per_profession = Vec::with_capacity(professions.len());
        for profession in professions {
            let areas = api
                .fetch_areas(&AreaQuery::for_profession(profession.clone()))
                .await?;
            let filtered = filter_areas(&areas, &basic, &self.stops);
            per_profession.push((profession.clone(), filtered));
        }
        Ok(build_comparison(&per_profession))
    }

    /// Ask the service for a ranked shortlist for this user profile. A
    /// successful response with no candidates is `NoMatch`, distinct from
    /// the `Err` a failed call produces.
    pub async fn suggest(
        &self,
        api: &dyn AffordabilityApi,
        request: &SuggestionRequest,
    ) -> Result<SuggestionOutcome> {
        let suggested = api.suggest(request).await?;
        Ok(rank_suggestions(suggested))
    }
}
