use goalboard::filter::{
    MAX_CARD_PREDICTIONS, ViewFilter, card_predictions, filter_fixtures, fixtures_on_date,
};
use goalboard::fixtures::{Fixture, Prediction};
use goalboard::markets::Market;
use goalboard::models::AiModel;

fn prediction(model: AiModel, home: u32, away: u32, total: f64) -> Prediction {
    Prediction {
        model,
        home_goals: home,
        away_goals: away,
        total_goals: total,
        confidence: 70,
        confidence_reasoning: String::new(),
        total_goals_confidence: 60,
        total_goals_reasoning: String::new(),
    }
}

fn fixture(id: &str, country: &str, league: &str, kickoff: &str) -> Fixture {
    Fixture {
        id: id.to_string(),
        country: country.to_string(),
        league: league.to_string(),
        home_team: format!("{id} home"),
        home_logo: String::new(),
        away_team: format!("{id} away"),
        away_logo: String::new(),
        kickoff: kickoff.to_string(),
        home_form: String::new(),
        away_form: String::new(),
        predictions: Vec::new(),
    }
}

#[test]
fn date_filter_uses_calendar_day_boundaries() {
    let fixtures = vec![
        fixture("late", "Spain", "LaLiga", "2025-08-29T23:59:00"),
        fixture("early", "Spain", "LaLiga", "2025-08-30T00:01:00"),
    ];
    let matched = fixtures_on_date(&fixtures, "2025-08-30");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "early");
}

#[test]
fn malformed_kickoff_is_excluded_without_panicking() {
    let fixtures = vec![fixture("tbd", "Spain", "LaLiga", "postponed")];
    assert!(fixtures_on_date(&fixtures, "2025-08-30").is_empty());
}

#[test]
fn country_and_league_contexts_select_by_exact_name() {
    let fixtures = vec![
        fixture("f1", "Spain", "LaLiga", "2025-08-29T20:00:00"),
        fixture("f2", "England", "Premier League", "2025-08-29T19:30:00"),
        fixture("f3", "England", "Championship", "2025-08-30T19:30:00"),
    ];

    let spain = filter_fixtures(
        &fixtures,
        "2025-08-29",
        &ViewFilter::Country("Spain".to_string()),
    );
    assert_eq!(spain.len(), 1);
    assert_eq!(spain[0].id, "f1");

    // f3 matches the league but not the date.
    let championship = filter_fixtures(
        &fixtures,
        "2025-08-29",
        &ViewFilter::League("Championship".to_string()),
    );
    assert!(championship.is_empty());

    let premier = filter_fixtures(
        &fixtures,
        "2025-08-29",
        &ViewFilter::League("Premier League".to_string()),
    );
    assert_eq!(premier.len(), 1);
    assert_eq!(premier[0].id, "f2");
}

#[test]
fn model_context_trims_predictions_and_drops_empty_fixtures() {
    let mut with_grok = fixture("f1", "Spain", "LaLiga", "2025-08-29T20:00:00");
    with_grok.predictions = vec![
        prediction(AiModel::Gemini, 2, 1, 3.5),
        prediction(AiModel::Grok, 1, 1, 2.5),
    ];
    let mut without_grok = fixture("f2", "Spain", "LaLiga", "2025-08-29T18:00:00");
    without_grok.predictions = vec![prediction(AiModel::Ml, 0, 2, 2.5)];

    let filtered = filter_fixtures(
        &[with_grok, without_grok],
        "2025-08-29",
        &ViewFilter::Model(AiModel::Grok),
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "f1");
    assert_eq!(filtered[0].predictions.len(), 1);
    assert_eq!(filtered[0].predictions[0].model, AiModel::Grok);
}

#[test]
fn market_context_drops_fixtures_with_nothing_qualifying() {
    let mut high_scoring = fixture("f1", "Spain", "LaLiga", "2025-08-29T20:00:00");
    high_scoring.predictions = vec![
        prediction(AiModel::Gemini, 3, 1, 3.5),
        prediction(AiModel::Ml, 1, 0, 1.5),
    ];
    let mut low_scoring = fixture("f2", "Spain", "LaLiga", "2025-08-29T18:00:00");
    low_scoring.predictions = vec![prediction(AiModel::Grok, 0, 0, 1.5)];

    let filtered = filter_fixtures(
        &[high_scoring, low_scoring],
        "2025-08-29",
        &ViewFilter::Market(Market::Over25),
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "f1");
    assert_eq!(filtered[0].predictions.len(), 1);
    assert_eq!(filtered[0].predictions[0].model, AiModel::Gemini);
}

#[test]
fn market_context_excludes_the_aggregator() {
    let mut fx = fixture("f1", "Spain", "LaLiga", "2025-08-29T20:00:00");
    fx.predictions = vec![
        prediction(AiModel::Gemini, 3, 1, 3.5),
        prediction(AiModel::Consensus, 2, 1, 3.5),
    ];
    let mut consensus_only = fixture("f2", "Spain", "LaLiga", "2025-08-29T18:00:00");
    consensus_only.predictions = vec![prediction(AiModel::Consensus, 3, 0, 3.5)];

    let filtered = filter_fixtures(
        &[fx, consensus_only],
        "2025-08-29",
        &ViewFilter::Market(Market::Over25),
    );
    // Both consensus predictions qualify on the raw numbers, but market
    // listings only count forecasters.
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "f1");
    assert_eq!(filtered[0].predictions.len(), 1);
    assert_eq!(filtered[0].predictions[0].model, AiModel::Gemini);
}

#[test]
fn cards_exclude_the_aggregator_and_cap_at_four() {
    let mut fx = fixture("f1", "Spain", "LaLiga", "2025-08-29T20:00:00");
    fx.predictions = vec![
        prediction(AiModel::Consensus, 2, 1, 3.5),
        prediction(AiModel::Gemini, 2, 1, 3.5),
        prediction(AiModel::ChatGpt, 1, 2, 2.5),
        prediction(AiModel::Grok, 2, 2, 4.5),
        prediction(AiModel::Ml, 3, 1, 3.5),
    ];

    let cards = card_predictions(&fx);
    assert_eq!(cards.len(), MAX_CARD_PREDICTIONS);
    assert!(cards.iter().all(|p| !p.model.is_aggregator()));
    assert_eq!(cards[0].model, AiModel::Gemini);
}

#[test]
fn aggregator_is_reachable_through_its_own_model_view() {
    let mut fx = fixture("f1", "Spain", "LaLiga", "2025-08-29T20:00:00");
    fx.predictions = vec![
        prediction(AiModel::Gemini, 2, 1, 3.5),
        prediction(AiModel::Consensus, 2, 1, 3.5),
    ];

    let filtered = filter_fixtures(
        &[fx],
        "2025-08-29",
        &ViewFilter::Model(AiModel::Consensus),
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].predictions.len(), 1);
    assert!(filtered[0].predictions[0].model.is_aggregator());
}

#[test]
fn empty_inputs_produce_empty_outputs() {
    assert!(fixtures_on_date(&[], "2025-08-29").is_empty());
    assert!(filter_fixtures(&[], "2025-08-29", &ViewFilter::All).is_empty());
}
