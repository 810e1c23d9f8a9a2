use serde::Serialize;

use crate::fixtures::Prediction;

/// Fixed catalog of betting markets a prediction can qualify for. Serialized
/// by key so grouped output stays plain data for downstream renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Market {
    #[serde(rename = "over2_5")]
    Over25,
    #[serde(rename = "under2_5")]
    Under25,
    #[serde(rename = "over1_5")]
    Over15,
    #[serde(rename = "under1_5")]
    Under15,
    #[serde(rename = "GG")]
    BttsYes,
    #[serde(rename = "NG")]
    BttsNo,
    #[serde(rename = "home_win")]
    HomeWin,
    #[serde(rename = "away_win")]
    AwayWin,
    #[serde(rename = "draw")]
    Draw,
}

impl Market {
    pub const ALL: [Market; 9] = [
        Market::Over25,
        Market::Under25,
        Market::Over15,
        Market::Under15,
        Market::BttsYes,
        Market::BttsNo,
        Market::HomeWin,
        Market::AwayWin,
        Market::Draw,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Market::Over25 => "over2_5",
            Market::Under25 => "under2_5",
            Market::Over15 => "over1_5",
            Market::Under15 => "under1_5",
            Market::BttsYes => "GG",
            Market::BttsNo => "NG",
            Market::HomeWin => "home_win",
            Market::AwayWin => "away_win",
            Market::Draw => "draw",
        }
    }

    pub fn from_key(key: &str) -> Option<Market> {
        Market::ALL.into_iter().find(|market| market.key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Market::Over25 => "Over 2.5",
            Market::Under25 => "Under 2.5",
            Market::Over15 => "Over 1.5",
            Market::Under15 => "Under 1.5",
            Market::BttsYes => "BTTS (Yes)",
            Market::BttsNo => "BTTS (No)",
            Market::HomeWin => "Home Win",
            Market::AwayWin => "Away Win",
            Market::Draw => "Draw",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Market::Over25 => "Over 2.5 Goals",
            Market::Under25 => "Under 2.5 Goals",
            Market::Over15 => "Over 1.5 Goals",
            Market::Under15 => "Under 1.5 Goals",
            Market::BttsYes => "Both Teams to Score (Yes)",
            Market::BttsNo => "Both Teams to Score (No)",
            Market::HomeWin => "Home Team Win",
            Market::AwayWin => "Away Team Win",
            Market::Draw => "Match Draw",
        }
    }

    /// True for the total-goals markets, whose views show the total-goals
    /// confidence fields instead of the scoreline ones. Kept in lock-step
    /// with the over/under rule groups in `qualified_markets`.
    pub fn uses_total_goals_confidence(self) -> bool {
        matches!(
            self,
            Market::Over25 | Market::Under25 | Market::Over15 | Market::Under15
        )
    }
}

/// Classify one prediction into the markets it qualifies for: exactly one
/// entry from each of the four rule groups (2.5 line, 1.5 line, BTTS, match
/// result). The goal lines use strict `>`, so a total of exactly 2.5 or 1.5
/// lands on the under side.
pub fn qualified_markets(prediction: &Prediction) -> Vec<Market> {
    let mut markets = Vec::with_capacity(4);

    markets.push(if prediction.total_goals > 2.5 {
        Market::Over25
    } else {
        Market::Under25
    });
    markets.push(if prediction.total_goals > 1.5 {
        Market::Over15
    } else {
        Market::Under15
    });
    markets.push(if prediction.home_goals >= 1 && prediction.away_goals >= 1 {
        Market::BttsYes
    } else {
        Market::BttsNo
    });
    markets.push(if prediction.home_goals > prediction.away_goals {
        Market::HomeWin
    } else if prediction.away_goals > prediction.home_goals {
        Market::AwayWin
    } else {
        Market::Draw
    });

    markets
}

pub fn prediction_qualifies(prediction: &Prediction, market: Market) -> bool {
    qualified_markets(prediction).contains(&market)
}

/// Predictions whose qualified set contains `market`. Market views use this
/// to trim fixtures and drop those left with nothing qualifying.
pub fn filter_predictions_by_market(predictions: &[Prediction], market: Market) -> Vec<Prediction> {
    predictions
        .iter()
        .filter(|prediction| prediction_qualifies(prediction, market))
        .cloned()
        .collect()
}

/// Short cell value for a prediction on a market view: the goal estimate on
/// total-goals markets, the scoreline everywhere else.
pub fn market_display_value(prediction: &Prediction, market: Market) -> String {
    if market.uses_total_goals_confidence() {
        let goals = if prediction.total_goals.fract() == 0.0 {
            format!("{:.0}", prediction.total_goals)
        } else {
            format!("{:.1}", prediction.total_goals)
        };
        format!("{goals} goals")
    } else {
        format!("{}-{}", prediction.home_goals, prediction.away_goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AiModel;

    fn prediction(home: u32, away: u32, total: f64) -> Prediction {
        Prediction {
            model: AiModel::Gemini,
            home_goals: home,
            away_goals: away,
            total_goals: total,
            confidence: 70,
            confidence_reasoning: String::new(),
            total_goals_confidence: 60,
            total_goals_reasoning: String::new(),
        }
    }

    #[test]
    fn keys_round_trip() {
        for market in Market::ALL {
            assert_eq!(Market::from_key(market.key()), Some(market));
        }
        assert_eq!(Market::from_key("over3_5"), None);
    }

    #[test]
    fn display_value_by_market_kind() {
        let p = prediction(2, 1, 3.5);
        assert_eq!(market_display_value(&p, Market::Over25), "3.5 goals");
        assert_eq!(market_display_value(&p, Market::HomeWin), "2-1");

        let whole = prediction(2, 2, 4.0);
        assert_eq!(market_display_value(&whole, Market::Over15), "4 goals");
    }
}
