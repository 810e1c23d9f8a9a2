use std::collections::HashSet;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goalboard::dates;
use goalboard::filter::{self, ViewFilter};
use goalboard::fixtures::{Fixture, Prediction, form_results};
use goalboard::grouping::{self, FixtureGroup};
use goalboard::markets::{self, Market};
use goalboard::models::AiModel;
use goalboard::pins;
use goalboard::priorities;
use goalboard::provider::{self, ProviderConfig};

#[derive(Parser)]
#[command(name = "goalboard", about = "AI football match predictions, grouped and ranked")]
struct Cli {
    /// Date to browse, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    date: Option<String>,
    /// Emit grouped output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Grouped board of all predictions for the selected date
    Board,
    /// Leagues with fixtures on the selected date, priority first
    Leagues,
    /// Countries with fixtures on the selected date, priority first
    Countries,
    /// Fixtures for one country
    Country { name: String },
    /// Fixtures for one league
    League { name: String },
    /// Fixtures whose predictions qualify for one market (e.g. over2_5, GG)
    Market { key: String },
    /// Predictions from a single model
    Model { name: String },
    /// Full prediction detail for one fixture
    Match { id: String },
    /// Selectable dates (today plus the next two days)
    Dates,
    /// Pin a league so it sorts first on board and country views
    Pin { league: String },
    /// Unpin a league
    Unpin { league: String },
    /// List pinned leagues
    Pins,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let date = cli.date.clone().unwrap_or_else(dates::today);

    match &cli.command {
        Command::Pin { league } => {
            let mut pinned = pins::load_pinned();
            if pinned.insert(league.clone()) {
                pins::save_pinned(&pinned)?;
                println!("pinned {league}");
            } else {
                println!("{league} is already pinned");
            }
            return Ok(());
        }
        Command::Unpin { league } => {
            let mut pinned = pins::load_pinned();
            if pinned.remove(league) {
                pins::save_pinned(&pinned)?;
                println!("unpinned {league}");
            } else {
                println!("{league} was not pinned");
            }
            return Ok(());
        }
        Command::Pins => {
            let mut pinned: Vec<String> = pins::load_pinned().into_iter().collect();
            pinned.sort();
            if pinned.is_empty() {
                println!("no pinned leagues");
            }
            for league in pinned {
                println!("{league}");
            }
            return Ok(());
        }
        Command::Dates => {
            for option in dates::available_dates() {
                println!("{}  {}", option.value, option.label);
            }
            return Ok(());
        }
        _ => {}
    }

    let config = ProviderConfig::from_env();
    let fixtures = provider::load_fixtures(&config, &date);
    let pinned = pins::load_pinned();

    match cli.command {
        Command::Board => {
            let on_date = filter::filter_fixtures(&fixtures, &date, &ViewFilter::All);
            let groups = grouping::group_for_board(&on_date, &pinned);
            if cli.json {
                print_json(&groups)?;
            } else {
                println!("Predictions for {}", dates::format_match_date(&date));
                print_board_groups(&groups, &pinned);
            }
        }
        Command::Country { name } => {
            let on_date = filter::filter_fixtures(&fixtures, &date, &ViewFilter::Country(name.clone()));
            let groups = grouping::group_for_board(&on_date, &pinned);
            if cli.json {
                print_json(&groups)?;
            } else if groups.is_empty() {
                println!("No matches found for {name} on this date");
            } else {
                print_board_groups(&groups, &pinned);
            }
        }
        Command::League { name } => {
            let on_date = filter::filter_fixtures(&fixtures, &date, &ViewFilter::League(name.clone()));
            let groups = grouping::group_for_board(&on_date, &pinned);
            if cli.json {
                print_json(&groups)?;
            } else if groups.is_empty() {
                println!("No matches found for {name} on this date");
            } else {
                print_board_groups(&groups, &pinned);
            }
        }
        Command::Market { key } => {
            let Some(market) = Market::from_key(&key) else {
                bail!("unknown market key: {key}");
            };
            let on_date = filter::filter_fixtures(&fixtures, &date, &ViewFilter::Market(market));
            let groups = grouping::group_for_market(&on_date);
            if cli.json {
                print_json(&groups)?;
            } else if groups.is_empty() {
                println!("No matches qualify for {} on this date", market.name());
            } else {
                println!("{} - {}", market.name(), market.description());
                print_market_groups(&groups, market);
            }
        }
        Command::Model { name } => {
            let Some(model) = AiModel::from_upstream(&name) else {
                bail!("unknown model: {name}");
            };
            let on_date = filter::filter_fixtures(&fixtures, &date, &ViewFilter::Model(model));
            let groups = grouping::group_alphabetical(&on_date);
            if cli.json {
                print_json(&groups)?;
            } else if groups.is_empty() {
                println!("No {} predictions on this date", model.as_str());
            } else {
                println!("{} predictions", model.as_str());
                print_model_groups(&groups);
            }
        }
        Command::Match { id } => {
            let Some(fixture) = fixtures.iter().find(|fixture| fixture.id == id) else {
                bail!("no fixture with id {id}");
            };
            if cli.json {
                print_json(fixture)?;
            } else {
                print_match_detail(fixture);
            }
        }
        Command::Leagues => {
            let on_date = filter::fixtures_on_date(&fixtures, &date);
            let leagues = priorities::sort_leagues_by_priority(unique_leagues(&on_date));
            if cli.json {
                print_json(&leagues)?;
            } else {
                let featured = priorities::top_priority_leagues(leagues.clone());
                print_nav_list("Leagues", &featured, &leagues);
            }
        }
        Command::Countries => {
            let on_date = filter::fixtures_on_date(&fixtures, &date);
            let countries = priorities::sort_countries_by_priority(unique_countries(&on_date));
            if cli.json {
                print_json(&countries)?;
            } else {
                let featured = priorities::top_priority_countries(countries.clone());
                print_nav_list("Countries", &featured, &countries);
            }
        }
        Command::Pin { .. } | Command::Unpin { .. } | Command::Pins | Command::Dates => {
            unreachable!()
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn unique_leagues(fixtures: &[Fixture]) -> Vec<String> {
    let mut seen = HashSet::new();
    fixtures
        .iter()
        .filter(|fixture| seen.insert(fixture.league.clone()))
        .map(|fixture| fixture.league.clone())
        .collect()
}

fn unique_countries(fixtures: &[Fixture]) -> Vec<String> {
    let mut seen = HashSet::new();
    fixtures
        .iter()
        .filter(|fixture| seen.insert(fixture.country.clone()))
        .map(|fixture| fixture.country.clone())
        .collect()
}

fn print_nav_list(title: &str, featured: &[String], all: &[String]) {
    if all.is_empty() {
        println!("No {} with matches on this date", title.to_lowercase());
        return;
    }
    println!("{title}:");
    for name in featured {
        println!("  {name}");
    }
    if all.len() > featured.len() {
        println!("  -- view all --");
        for name in &all[featured.len()..] {
            println!("  {name}");
        }
    }
}

fn print_board_groups(groups: &[FixtureGroup], pinned: &HashSet<String>) {
    if groups.is_empty() {
        println!("No matches found for this date");
        return;
    }
    for group in groups {
        let pin_mark = if pinned.contains(&group.league) { " *" } else { "" };
        println!();
        println!(
            "{} ({}){} - {} match(es)",
            group.league,
            group.country,
            pin_mark,
            group.fixtures.len()
        );
        for fixture in &group.fixtures {
            println!(
                "  {}  {} vs {}",
                dates::match_time(&fixture.kickoff),
                fixture.home_team,
                fixture.away_team
            );
            for prediction in filter::card_predictions(fixture) {
                println!(
                    "    {:<9} {}-{}  ({}% confidence)",
                    prediction.model.as_str(),
                    prediction.home_goals,
                    prediction.away_goals,
                    prediction.confidence
                );
            }
        }
    }
}

fn print_market_groups(groups: &[FixtureGroup], market: Market) {
    for group in groups {
        println!();
        println!(
            "{} ({}) - {} qualifying prediction(s)",
            group.league,
            group.country,
            group.prediction_count()
        );
        for fixture in &group.fixtures {
            println!(
                "  {}  {} vs {}  [{} model(s)]",
                dates::match_time(&fixture.kickoff),
                fixture.home_team,
                fixture.away_team,
                fixture.predictions.len()
            );
            for prediction in &fixture.predictions {
                let confidence = market_confidence(prediction, market);
                println!(
                    "    {:<9} {}  ({confidence}% confidence)",
                    prediction.model.as_str(),
                    markets::market_display_value(prediction, market)
                );
            }
        }
    }
}

/// Total-goals markets report the total-goals confidence; everything else
/// reports the scoreline confidence.
fn market_confidence(prediction: &Prediction, market: Market) -> u8 {
    if market.uses_total_goals_confidence() {
        prediction.total_goals_confidence
    } else {
        prediction.confidence
    }
}

fn print_model_groups(groups: &[FixtureGroup]) {
    for group in groups {
        println!();
        println!("{} ({})", group.league, group.country);
        for fixture in &group.fixtures {
            for prediction in &fixture.predictions {
                println!(
                    "  {}  {} vs {}  {}-{}  ({}% confidence)",
                    dates::match_time(&fixture.kickoff),
                    fixture.home_team,
                    fixture.away_team,
                    prediction.home_goals,
                    prediction.away_goals,
                    prediction.confidence
                );
            }
        }
    }
}

fn print_match_detail(fixture: &Fixture) {
    println!(
        "{} vs {}  ({}, {})",
        fixture.home_team, fixture.away_team, fixture.league, fixture.country
    );
    println!(
        "{} {}",
        dates::format_match_date(&fixture.kickoff),
        dates::match_time(&fixture.kickoff)
    );
    println!(
        "Form: {} {}  |  {} {}",
        fixture.home_team,
        form_letters(&fixture.home_form),
        fixture.away_team,
        form_letters(&fixture.away_form)
    );
    for prediction in &fixture.predictions {
        let keys: Vec<&str> = markets::qualified_markets(prediction)
            .into_iter()
            .map(|market| market.key())
            .collect();
        println!();
        println!(
            "{}: {}-{}, {} total goals expected",
            prediction.model.as_str(),
            prediction.home_goals,
            prediction.away_goals,
            prediction.total_goals
        );
        println!("  markets: {}", keys.join(", "));
        println!(
            "  scoreline {}%: {}",
            prediction.confidence, prediction.confidence_reasoning
        );
        println!(
            "  total goals {}%: {}",
            prediction.total_goals_confidence, prediction.total_goals_reasoning
        );
    }
}

fn form_letters(raw: &str) -> String {
    form_results(raw)
        .into_iter()
        .map(|result| result.letter())
        .collect()
}
