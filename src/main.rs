mod client;
mod engine;
mod models;
mod session;

use client::{AffordabilityApi, AreaQuery, HttpAffordabilityClient, SuggestionRequest};
use engine::{heat_points, to_csv, FilterCriteria, HeatField, SuggestionOutcome};
use session::AnalysisSession;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏙️ Area Scout - Affordability Explorer");
    info!("=======================================");
    info!("");

    let base_url =
        std::env::var("AREA_SCOUT_API").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let profession = std::env::args().nth(1).unwrap_or_else(|| "Teacher".to_string());

    let api = HttpAffordabilityClient::new(base_url)?;
    let mut session = AnalysisSession::new(FilterCriteria::basic(500_000.0, 5.0));

    // Optional overrides: max price and max transit distance (km)
    if let Some(max_price) = std::env::args().nth(2).and_then(|v| v.parse::<f64>().ok()) {
        let mut criteria = session.criteria().clone();
        criteria.max_price = max_price;
        session.set_criteria(criteria);
    }
    if let Some(max_km) = std::env::args().nth(3).and_then(|v| v.parse::<f64>().ok()) {
        let mut criteria = session.criteria().clone();
        criteria.max_proximity_km = max_km;
        session.set_criteria(criteria);
    }

    info!("Fetching transit stops and areas for '{}'...", profession);

    let stop_seq = session.begin_fetch();
    let stops = api.fetch_stops().await?;
    session.apply_stops(stop_seq, stops);

    let area_seq = session.begin_fetch();
    let areas = api
        .fetch_areas(&AreaQuery::for_profession(profession.as_str()))
        .await?;
    session.apply_areas(area_seq, areas);

    info!(
        "Loaded {} areas and {} stops (fetched at {:?})",
        session.areas().len(),
        session.stops().len(),
        session.fetched_at()
    );

    let view = session.recompute();

    info!(
        "\n✅ {} areas pass the current filter (price ≤ {}, transit ≤ {} km)\n",
        view.filtered.len(),
        session.criteria().max_price,
        session.criteria().max_proximity_km
    );

    println!("Most affordable areas for {}:", profession);
    for (i, area) in view.most_affordable.iter().enumerate() {
        println!(
            "{}. {} (AED {}, score {})",
            i + 1,
            area.name,
            area.price,
            area.score
        );
    }
    println!();
    println!("Least affordable areas:");
    for (i, area) in view.least_affordable.iter().enumerate() {
        println!(
            "{}. {} (AED {}, score {})",
            i + 1,
            area.name,
            area.price,
            area.score
        );
    }
    println!();

    // Save the filtered snapshot
    tokio::fs::write("filtered_areas.csv", to_csv(&view.filtered)).await?;
    info!("💾 Saved filtered areas to filtered_areas.csv");

    let json = serde_json::to_string_pretty(&view.filtered)?;
    tokio::fs::write("filtered_areas.json", json).await?;
    info!("💾 Saved filtered areas to filtered_areas.json");

    // Heatmap overlays for both gradients
    let overlays = serde_json::json!({
        "price": view.heatmap,
        "score": heat_points(&view.filtered, HeatField::Score),
    });
    tokio::fs::write(
        "heatmap_points.json",
        serde_json::to_string_pretty(&overlays)?,
    )
    .await?;
    info!("💾 Saved heatmap overlays to heatmap_points.json");

    // Smart-suggest for a sample profile at the current transit distance
    let request = SuggestionRequest::new(120_000.0, 2, session.criteria().max_proximity_km);
    match session.suggest(&api, &request).await? {
        SuggestionOutcome::NoMatch => {
            println!("No suitable areas found. Try adjusting your criteria.");
        }
        SuggestionOutcome::Suggestions(ranked) => {
            println!("Best areas for your profile:");
            for (i, area) in ranked.iter().enumerate() {
                let proximity = area
                    .proximity
                    .map(|km| format!(", {km:.1} km to transit"))
                    .unwrap_or_default();
                println!(
                    "{}. {} (AED {}, score {}{})",
                    i + 1,
                    area.name,
                    area.price,
                    area.score,
                    proximity
                );
            }
        }
    }
    println!();

    // Cross-profession comparison over a default panel
    let professions: Vec<String> = ["Teacher", "Engineer", "Nurse"]
        .iter()
        .map(|p| p.to_string())
        .collect();
    let comparison = session.compare(&api, &professions).await?;

    if comparison.is_empty() {
        println!("No professions selected, no comparison table.");
    } else {
        print!("{:<24}", "Area");
        for profession in &comparison.professions {
            print!("{:>12}", profession);
        }
        println!();
        for row in &comparison.rows {
            print!("{:<24}", row.area);
            for score in &row.scores {
                match score {
                    Some(s) => print!("{:>12.2}", s),
                    None => print!("{:>12}", "-"),
                }
            }
            println!();
        }
    }

    Ok(())
}
