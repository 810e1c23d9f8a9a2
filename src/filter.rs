use crate::dates::is_match_on_date;
use crate::fixtures::{Fixture, Prediction};
use crate::markets::{self, Market};
use crate::models::AiModel;

/// Context for a browse view. Always AND-combined with the date filter.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewFilter {
    All,
    Country(String),
    League(String),
    Model(AiModel),
    Market(Market),
}

/// How many predictions a listing card shows per fixture.
pub const MAX_CARD_PREDICTIONS: usize = 4;

pub fn fixtures_on_date(fixtures: &[Fixture], target_date: &str) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|fixture| is_match_on_date(&fixture.kickoff, target_date))
        .cloned()
        .collect()
}

/// Apply the date filter plus the view context. Model and market contexts
/// trim each fixture's predictions to the matching subset and drop fixtures
/// left with none, rather than returning them empty.
pub fn filter_fixtures(fixtures: &[Fixture], target_date: &str, view: &ViewFilter) -> Vec<Fixture> {
    let mut out = Vec::new();

    for fixture in fixtures {
        if !is_match_on_date(&fixture.kickoff, target_date) {
            continue;
        }
        match view {
            ViewFilter::All => out.push(fixture.clone()),
            ViewFilter::Country(country) => {
                if fixture.country == *country {
                    out.push(fixture.clone());
                }
            }
            ViewFilter::League(league) => {
                if fixture.league == *league {
                    out.push(fixture.clone());
                }
            }
            ViewFilter::Model(model) => {
                let predictions: Vec<Prediction> = fixture
                    .predictions
                    .iter()
                    .filter(|prediction| prediction.model == *model)
                    .cloned()
                    .collect();
                if !predictions.is_empty() {
                    out.push(Fixture {
                        predictions,
                        ..fixture.clone()
                    });
                }
            }
            ViewFilter::Market(market) => {
                // Market listings only show forecasters; the aggregator would
                // otherwise double-count the consensus in the group totals.
                let forecasts: Vec<Prediction> = fixture
                    .predictions
                    .iter()
                    .filter(|prediction| !prediction.model.is_aggregator())
                    .cloned()
                    .collect();
                let predictions = markets::filter_predictions_by_market(&forecasts, *market);
                if !predictions.is_empty() {
                    out.push(Fixture {
                        predictions,
                        ..fixture.clone()
                    });
                }
            }
        }
    }

    out
}

/// Predictions shown on a generic listing card: the consensus aggregator is
/// excluded and at most four forecaster entries are kept. The aggregator
/// stays reachable through its own model view and match detail.
pub fn card_predictions(fixture: &Fixture) -> Vec<&Prediction> {
    fixture
        .predictions
        .iter()
        .filter(|prediction| !prediction.model.is_aggregator())
        .take(MAX_CARD_PREDICTIONS)
        .collect()
}
