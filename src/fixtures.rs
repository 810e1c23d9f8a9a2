use serde::Serialize;

use crate::models::AiModel;

/// One model's forecast for one fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub model: AiModel,
    pub home_goals: u32,
    pub away_goals: u32,
    /// Independent total-goals estimate. Not derived from the scoreline and
    /// never reconciled with it; the two can disagree.
    pub total_goals: f64,
    /// Scoreline confidence, 0-100.
    pub confidence: u8,
    pub confidence_reasoning: String,
    /// Total-goals confidence, 0-100. Shown instead of `confidence` on
    /// over/under market views.
    pub total_goals_confidence: u8,
    pub total_goals_reasoning: String,
}

/// One scheduled match with its per-model predictions. Immutable once loaded;
/// views derive filtered copies rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub id: String,
    pub country: String,
    pub league: String,
    pub home_team: String,
    pub home_logo: String,
    pub away_team: String,
    pub away_logo: String,
    /// Local kickoff time as an ISO `YYYY-MM-DDTHH:MM:SS` string.
    pub kickoff: String,
    pub home_form: String,
    pub away_form: String,
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    Win,
    Draw,
    Lose,
}

impl FormResult {
    pub fn letter(self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Lose => 'L',
        }
    }
}

/// Parse a comma-separated recent-form string ("win,draw,lose,...").
/// Unrecognised tokens are skipped.
pub fn form_results(raw: &str) -> Vec<FormResult> {
    raw.split(',')
        .filter_map(|token| match token.trim().to_lowercase().as_str() {
            "win" => Some(FormResult::Win),
            "draw" => Some(FormResult::Draw),
            "lose" | "loss" => Some(FormResult::Lose),
            _ => None,
        })
        .collect()
}
