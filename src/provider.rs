use std::env;

use tracing::{info, warn};

use crate::fixture_fetch;
use crate::fixtures::Fixture;
use crate::mock;

/// Upstream endpoint configuration, read from the environment. Both values
/// must be set for live fetching; otherwise the bundled mock dataset is
/// served.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub base_url: Option<String>,
    pub fixtures_path: Option<String>,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: opt_env("GOALBOARD_API_BASE_URL"),
            fixtures_path: opt_env("GOALBOARD_FIXTURES_API"),
        }
    }

    pub fn endpoint(&self) -> Option<String> {
        let base = self.base_url.as_deref()?;
        let path = self.fixtures_path.as_deref()?;
        Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .and_then(|val| if val.trim().is_empty() { None } else { Some(val) })
}

/// Fixtures for one calendar day, normalized and ready for the engine. Any
/// fetch or parse failure falls back to the mock dataset so views always
/// have something to render.
pub fn load_fixtures(config: &ProviderConfig, date: &str) -> Vec<Fixture> {
    let Some(endpoint) = config.endpoint() else {
        info!("api not configured, serving mock fixtures");
        return mock::mock_fixtures();
    };

    match fixture_fetch::fetch_fixtures(&endpoint, date) {
        Ok(fixtures) => {
            info!(count = fixtures.len(), %date, "fixtures fetched");
            fixtures
        }
        Err(err) => {
            warn!(error = %err, "fixture fetch failed, serving mock fixtures");
            mock::mock_fixtures()
        }
    }
}
