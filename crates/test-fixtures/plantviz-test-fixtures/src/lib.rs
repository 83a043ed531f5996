use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    options: HashMap<String, String>,
    frames: HashMap<String, String>,
    scenarios: HashMap<String, ScenarioEntry>,
}

/// A persisted options record paired with the data frame it is resolved
/// against. Both refer to manifest keys.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioEntry {
    pub options: String,
    pub frame: String,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

fn sorted_keys<T>(map: &HashMap<String, T>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}

/// Persisted element options as a host would store them.
pub mod options {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_keys(&MANIFEST.options)
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.options, "options", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.options, "options", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.options, "options", name)?;
        Ok(resolve_path(rel))
    }
}

/// Data frames: write batches of live readings.
pub mod frames {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_keys(&MANIFEST.frames)
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.frames, "frame", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.frames, "frame", name)?;
        super::load_json(rel)
    }
}

pub mod scenarios {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_keys(&MANIFEST.scenarios)
    }

    pub fn entry(name: &str) -> Result<ScenarioEntry> {
        lookup(&MANIFEST.scenarios, "scenario", name).cloned()
    }

    /// Options and frame of a scenario, each deserialized into the caller's
    /// types.
    pub fn load<O: DeserializeOwned, F: DeserializeOwned>(name: &str) -> Result<(O, F)> {
        let entry = entry(name)?;
        let options = super::options::load(&entry.options)
            .with_context(|| format!("scenario '{name}' options"))?;
        let frame = super::frames::load(&entry.frame)
            .with_context(|| format!("scenario '{name}' frame"))?;
        Ok((options, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_exist_on_disk() {
        for key in options::keys() {
            assert!(options::path(&key).unwrap().exists(), "options {key}");
        }
        for key in frames::keys() {
            frames::json(&key).unwrap();
        }
        for key in scenarios::keys() {
            let entry = scenarios::entry(&key).unwrap();
            assert!(options::keys().contains(&entry.options), "{key}");
            assert!(frames::keys().contains(&entry.frame), "{key}");
        }
    }
}
