use chrono::{Days, Local, NaiveDate};

use crate::fixtures::{Fixture, Prediction};
use crate::models::AiModel;

/// Offline dataset, structurally identical to the live feed. Kickoffs are
/// seeded relative to the current day so the board always has content.
pub fn mock_fixtures() -> Vec<Fixture> {
    let today = Local::now().date_naive();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

    vec![
        Fixture {
            id: "mock-laliga-1".to_string(),
            country: "Spain".to_string(),
            league: "LaLiga".to_string(),
            home_team: "Real Madrid".to_string(),
            home_logo: String::new(),
            away_team: "Barcelona".to_string(),
            away_logo: String::new(),
            kickoff: kickoff(today, "20:00"),
            home_form: "win,win,draw,win,win".to_string(),
            away_form: "win,draw,win,lose,win".to_string(),
            predictions: vec![
                prediction(
                    AiModel::Gemini,
                    2,
                    1,
                    2.5,
                    75,
                    "Strong home form and recent head-to-head advantage",
                    68,
                    "Both teams attack well but defend solidly",
                ),
                prediction(
                    AiModel::ChatGpt,
                    1,
                    2,
                    3.5,
                    70,
                    "Away side's recent form and tactical edge",
                    60,
                    "This fixture usually produces goals",
                ),
                prediction(
                    AiModel::Grok,
                    2,
                    2,
                    4.5,
                    65,
                    "Even match-up with both teams in excellent form",
                    55,
                    "Expect goals from both sides",
                ),
                prediction(
                    AiModel::Ml,
                    3,
                    1,
                    3.5,
                    80,
                    "Statistical edge for the home side",
                    72,
                    "Historical totals trend over 3.5 here",
                ),
                prediction(
                    AiModel::Consensus,
                    2,
                    1,
                    3.5,
                    74,
                    "Weighted blend of the forecaster models",
                    66,
                    "Forecasters agree on an open game",
                ),
            ],
        },
        Fixture {
            id: "mock-pl-1".to_string(),
            country: "England".to_string(),
            league: "Premier League".to_string(),
            home_team: "Arsenal".to_string(),
            home_logo: String::new(),
            away_team: "Chelsea".to_string(),
            away_logo: String::new(),
            kickoff: kickoff(today, "19:30"),
            home_form: "win,win,draw,win,lose".to_string(),
            away_form: "draw,win,win,lose,win".to_string(),
            predictions: vec![
                prediction(
                    AiModel::Gemini,
                    2,
                    1,
                    3.5,
                    72,
                    "Impressive home record this season",
                    65,
                    "Both teams carry scoring threat",
                ),
                prediction(
                    AiModel::ChatGpt,
                    1,
                    2,
                    2.5,
                    68,
                    "Visitors set up well for counter-attacks",
                    58,
                    "A tactical battle could limit chances",
                ),
                prediction(
                    AiModel::Grok,
                    3,
                    1,
                    4.5,
                    75,
                    "Home attacking output has been relentless",
                    70,
                    "An entertaining, high-scoring affair",
                ),
                prediction(
                    AiModel::Ml,
                    2,
                    2,
                    3.5,
                    61,
                    "Historical data points to an even contest",
                    63,
                    "Both teams likely to score more than once",
                ),
            ],
        },
        Fixture {
            id: "mock-pl-2".to_string(),
            country: "England".to_string(),
            league: "Premier League".to_string(),
            home_team: "Liverpool".to_string(),
            home_logo: String::new(),
            away_team: "Manchester City".to_string(),
            away_logo: String::new(),
            kickoff: kickoff(today, "16:00"),
            home_form: "win,win,win,draw,win".to_string(),
            away_form: "win,win,lose,win,win".to_string(),
            predictions: vec![
                prediction(
                    AiModel::Gemini,
                    2,
                    2,
                    4.5,
                    66,
                    "Two elite attacks cancelling each other out",
                    71,
                    "Top-of-the-table games here run high on goals",
                ),
                prediction(
                    AiModel::ChatGpt,
                    1,
                    1,
                    2.5,
                    64,
                    "Cagey opening likely between title rivals",
                    57,
                    "Midfield control keeps the total down",
                ),
                prediction(
                    AiModel::Grok,
                    3,
                    2,
                    4.5,
                    69,
                    "Home crowd tips a chaotic game",
                    73,
                    "Neither defence has kept pace with the attacks",
                ),
                prediction(
                    AiModel::Ml,
                    1,
                    2,
                    3.5,
                    62,
                    "Away side's underlying numbers edge it",
                    60,
                    "Expected-goals models point over the line",
                ),
            ],
        },
        Fixture {
            id: "mock-buli-1".to_string(),
            country: "Germany".to_string(),
            league: "Bundesliga".to_string(),
            home_team: "Bayern Munich".to_string(),
            home_logo: String::new(),
            away_team: "Borussia Dortmund".to_string(),
            away_logo: String::new(),
            kickoff: kickoff(tomorrow, "18:30"),
            home_form: "win,win,win,win,draw".to_string(),
            away_form: "win,lose,win,draw,win".to_string(),
            predictions: vec![
                prediction(
                    AiModel::Gemini,
                    3,
                    1,
                    4.5,
                    78,
                    "Dominant at home against this opponent",
                    74,
                    "Der Klassiker rarely stays under three goals",
                ),
                prediction(
                    AiModel::ChatGpt,
                    2,
                    2,
                    3.5,
                    63,
                    "Visitors have found form away from home",
                    61,
                    "Open game expected from both benches",
                ),
                prediction(
                    AiModel::Grok,
                    2,
                    0,
                    2.5,
                    67,
                    "Home defence has tightened considerably",
                    59,
                    "One-sided control keeps the total moderate",
                ),
                prediction(
                    AiModel::Ml,
                    3,
                    2,
                    4.5,
                    71,
                    "Goal expectancy models favour the hosts",
                    70,
                    "Both attacks rank top three in the league",
                ),
                prediction(
                    AiModel::Consensus,
                    2,
                    1,
                    3.5,
                    70,
                    "Forecasters lean home win at a healthy total",
                    65,
                    "Agreement on an above-average goal count",
                ),
            ],
        },
        Fixture {
            id: "mock-eliteserien-1".to_string(),
            country: "Norway".to_string(),
            league: "Eliteserien".to_string(),
            home_team: "Rosenborg".to_string(),
            home_logo: String::new(),
            away_team: "Molde".to_string(),
            away_logo: String::new(),
            kickoff: kickoff(today, "17:00"),
            home_form: "draw,win,lose,win,draw".to_string(),
            away_form: "lose,draw,win,win,lose".to_string(),
            predictions: vec![
                prediction(
                    AiModel::Gemini,
                    1,
                    1,
                    2.5,
                    58,
                    "Evenly matched rivals with patchy form",
                    54,
                    "Low tempo expected in this derby",
                ),
                prediction(
                    AiModel::Ml,
                    0,
                    1,
                    1.5,
                    55,
                    "Away side edges the defensive metrics",
                    52,
                    "Both sides have struggled to create lately",
                ),
            ],
        },
    ]
}

fn kickoff(day: NaiveDate, time: &str) -> String {
    format!("{}T{}:00", day.format("%Y-%m-%d"), time)
}

#[allow(clippy::too_many_arguments)]
fn prediction(
    model: AiModel,
    home: u32,
    away: u32,
    total: f64,
    confidence: u8,
    reasoning: &str,
    total_confidence: u8,
    total_reasoning: &str,
) -> Prediction {
    Prediction {
        model,
        home_goals: home,
        away_goals: away,
        total_goals: total,
        confidence,
        confidence_reasoning: reasoning.to_string(),
        total_goals_confidence: total_confidence,
        total_goals_reasoning: total_reasoning.to_string(),
    }
}
