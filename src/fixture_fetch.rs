use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::warn;

use crate::fixtures::{Fixture, Prediction};
use crate::models::AiModel;

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Fetch the fixture list for one calendar day from the upstream endpoint.
/// The feed takes its date parameter as `MM/DD/YYYY`.
pub fn fetch_fixtures(endpoint: &str, date: &str) -> Result<Vec<Fixture>> {
    let client = http_client()?;
    let url = format!("{endpoint}?date={}", api_date(date));
    let body = client
        .get(&url)
        .header(ACCEPT, "application/json")
        .send()
        .context("request failed")?
        .error_for_status()
        .context("request rejected")?
        .text()
        .context("failed reading body")?;
    parse_fixtures_json(&body)
}

fn api_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{month}/{day}/{year}"),
        _ => date.to_string(),
    }
}

/// Parse a raw feed body into normalized fixtures. Empty and `null` bodies
/// are valid and yield an empty list.
pub fn parse_fixtures_json(raw: &str) -> Result<Vec<Fixture>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let rows: Vec<FixtureRow> = serde_json::from_str(trimmed).context("invalid fixtures json")?;
    Ok(rows.into_iter().map(build_fixture).collect())
}

#[derive(Debug, Deserialize)]
struct FixtureRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    league: String,
    #[serde(default)]
    hometeam: String,
    #[serde(default)]
    hometeamlogo: String,
    #[serde(default)]
    awayteam: String,
    #[serde(default)]
    awayteamlogo: String,
    #[serde(default)]
    time: String,
    #[serde(default, rename = "hometeamRecentForm")]
    hometeam_recent_form: String,
    #[serde(default, rename = "awayteamRecentForm")]
    awayteam_recent_form: String,
    #[serde(default, rename = "modelPredictions")]
    model_predictions: Vec<PredictionRow>,
}

#[derive(Debug, Deserialize)]
struct PredictionRow {
    #[serde(default, rename = "predictedHomeGoal")]
    predicted_home_goal: Option<u32>,
    #[serde(default, rename = "predictedAwayGoal")]
    predicted_away_goal: Option<u32>,
    #[serde(default, rename = "predictedTotalGoals")]
    predicted_total_goals: Option<f64>,
    #[serde(default, rename = "confidenceLevel")]
    confidence_level: Option<u8>,
    #[serde(default, rename = "confidenceLevelReasoning")]
    confidence_level_reasoning: String,
    #[serde(default, rename = "confidenceLevelPTG")]
    confidence_level_ptg: Option<u8>,
    #[serde(default, rename = "confidenceLevelReasoningPTG")]
    confidence_level_reasoning_ptg: String,
    #[serde(default, rename = "aiModel")]
    ai_model: Option<AiModelRow>,
}

#[derive(Debug, Deserialize)]
struct AiModelRow {
    #[serde(default)]
    name: String,
}

fn build_fixture(row: FixtureRow) -> Fixture {
    let predictions = row
        .model_predictions
        .into_iter()
        .filter_map(build_prediction)
        .collect();

    Fixture {
        id: row.id,
        country: row.country,
        league: row.league,
        home_team: row.hometeam,
        home_logo: row.hometeamlogo,
        away_team: row.awayteam,
        away_logo: row.awayteamlogo,
        kickoff: row.time,
        home_form: row.hometeam_recent_form,
        away_form: row.awayteam_recent_form,
        predictions,
    }
}

/// Missing numeric fields default to zero, so a malformed record degrades to
/// the under/NG/draw side of every market instead of poisoning the listing.
fn build_prediction(row: PredictionRow) -> Option<Prediction> {
    let raw_name = row.ai_model.map(|model| model.name).unwrap_or_default();
    let Some(model) = AiModel::from_upstream(&raw_name) else {
        warn!(model = %raw_name, "dropping prediction from unknown model");
        return None;
    };

    Some(Prediction {
        model,
        home_goals: row.predicted_home_goal.unwrap_or(0),
        away_goals: row.predicted_away_goal.unwrap_or(0),
        total_goals: row.predicted_total_goals.unwrap_or(0.0),
        confidence: row.confidence_level.unwrap_or(0),
        confidence_reasoning: row.confidence_level_reasoning,
        total_goals_confidence: row.confidence_level_ptg.unwrap_or(0),
        total_goals_reasoning: row.confidence_level_reasoning_ptg,
    })
}
