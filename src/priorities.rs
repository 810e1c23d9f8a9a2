use std::cmp::Ordering;

/// Leagues shown first on the board and in the navigation pane, in this
/// order. Names must match feed league names verbatim to take effect.
pub const PRIORITY_LEAGUES: [&str; 10] = [
    "Premier League",
    "LaLiga",
    "Bundesliga",
    "Serie A",
    "Ligue 1",
    "Primeira Liga",
    "Eredivisie",
    "Champions League",
    "Europa League",
    "MLS",
];

pub const PRIORITY_COUNTRIES: [&str; 10] = [
    "England",
    "Spain",
    "Germany",
    "Italy",
    "France",
    "Portugal",
    "Netherlands",
    "Argentina",
    "Brazil",
    "USA",
];

/// How many priority entries navigation panes show before collapsing.
pub const MAX_PRIORITY_LEAGUES: usize = 6;
pub const MAX_PRIORITY_COUNTRIES: usize = 8;

pub fn league_priority(league: &str) -> Option<usize> {
    PRIORITY_LEAGUES.iter().position(|name| *name == league)
}

pub fn country_priority(country: &str) -> Option<usize> {
    PRIORITY_COUNTRIES.iter().position(|name| *name == country)
}

/// Configured ranks in list order first, unranked names after them. Equal
/// when neither side is ranked, so callers append their own tie-breaks.
pub fn priority_order(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_leagues_by_priority(mut leagues: Vec<String>) -> Vec<String> {
    leagues.sort_by(|a, b| {
        priority_order(league_priority(a), league_priority(b)).then_with(|| a.cmp(b))
    });
    leagues
}

pub fn sort_countries_by_priority(mut countries: Vec<String>) -> Vec<String> {
    countries.sort_by(|a, b| {
        priority_order(country_priority(a), country_priority(b)).then_with(|| a.cmp(b))
    });
    countries
}

pub fn top_priority_leagues(leagues: Vec<String>) -> Vec<String> {
    let mut sorted = sort_leagues_by_priority(leagues);
    sorted.truncate(MAX_PRIORITY_LEAGUES);
    sorted
}

pub fn top_priority_countries(countries: Vec<String>) -> Vec<String> {
    let mut sorted = sort_countries_by_priority(countries);
    sorted.truncate(MAX_PRIORITY_COUNTRIES);
    sorted
}
