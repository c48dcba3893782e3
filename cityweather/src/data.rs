//! Reference data: the state list and the state -> cities index
//!
//! Both files are read once at startup. A failure in either one degrades the
//! matching list to empty and records a message for the display; it never
//! stops the app.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const STATES_FILE: &str = "states.txt";
pub const CITIES_FILE: &str = "cities.json";

pub const STATES_FAILED: &str = "Failed to load states";
pub const CITIES_FAILED: &str = "Failed to load city data";

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// State name -> ordered city names
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StateCityIndex(HashMap<String, Vec<String>>);

impl StateCityIndex {
    pub fn cities(&self, state: &str) -> Option<&[String]> {
        self.0.get(state).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for StateCityIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything the loader produced, including what went wrong
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    pub states: Vec<String>,
    pub index: StateCityIndex,
    /// Display messages, in load order
    pub failures: Vec<String>,
}

/// Split comma-separated state names, trimming each token.
pub fn parse_states(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_city_index(text: &str) -> Result<StateCityIndex, serde_json::Error> {
    serde_json::from_str(text)
}

pub fn load_states(path: &Path) -> Result<Vec<String>, DataError> {
    let text = read(path)?;
    Ok(parse_states(&text))
}

pub fn load_city_index(path: &Path) -> Result<StateCityIndex, DataError> {
    let text = read(path)?;
    parse_city_index(&text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both reference files, degrading each independently.
pub fn load_reference_data(states_path: &Path, cities_path: &Path) -> ReferenceData {
    let mut data = ReferenceData::default();

    match load_states(states_path) {
        Ok(states) => {
            tracing::info!(count = states.len(), "Loaded states");
            data.states = states;
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not load states");
            data.failures.push(STATES_FAILED.to_string());
        }
    }

    match load_city_index(cities_path) {
        Ok(index) => {
            tracing::info!(states = index.len(), "Loaded city index");
            data.index = index;
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not load city index");
            data.failures.push(CITIES_FAILED.to_string());
        }
    }

    data
}
