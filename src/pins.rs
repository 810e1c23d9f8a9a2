use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const CACHE_DIR: &str = "goalboard";
const PINS_FILE: &str = "pinned_leagues.json";

/// Load the pinned-league set from the cache directory. Any failure reads as
/// "nothing pinned".
pub fn load_pinned() -> HashSet<String> {
    let Some(path) = pins_path() else {
        return HashSet::new();
    };
    load_pinned_from(&path)
}

pub fn load_pinned_from(path: &Path) -> HashSet<String> {
    let Ok(raw) = fs::read_to_string(path) else {
        return HashSet::new();
    };
    serde_json::from_str::<Vec<String>>(&raw)
        .map(|names| names.into_iter().collect())
        .unwrap_or_default()
}

pub fn save_pinned(pinned: &HashSet<String>) -> Result<()> {
    let Some(path) = pins_path() else {
        return Ok(());
    };
    save_pinned_to(&path, pinned)
}

pub fn save_pinned_to(path: &Path, pinned: &HashSet<String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let mut names: Vec<&String> = pinned.iter().collect();
    names.sort();
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(&names).context("serialize pinned leagues")?;
    fs::write(&tmp, json).context("write pinned leagues")?;
    fs::rename(&tmp, path).context("swap pinned leagues")?;
    Ok(())
}

fn pins_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CACHE_DIR).join(PINS_FILE));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".cache")
            .join(CACHE_DIR)
            .join(PINS_FILE),
    )
}
