//! Command-line configuration

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::api::DEFAULT_BASE_URL;
use crate::data::{CITIES_FILE, STATES_FILE};

pub const API_KEY_FILE: &str = "api_key.txt";

/// City weather - pick a state and a city, fetch the current temperature
#[derive(Parser, Debug, Clone)]
#[command(name = "cityweather")]
#[command(about = "Current temperature for US cities, in your terminal")]
pub struct Args {
    /// Directory holding states.txt, cities.json and api_key.txt
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// File whose first line is the OpenWeatherMap API key
    /// [default: <data-dir>/api_key.txt]
    #[arg(long)]
    pub api_key_file: Option<PathBuf>,

    /// Weather service base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log file (the terminal belongs to the UI); filter with RUST_LOG
    #[arg(long, default_value = "cityweather.log")]
    pub log_file: PathBuf,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub states_path: PathBuf,
    pub cities_path: PathBuf,
    pub api_key_path: PathBuf,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_file: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let api_key_path = args
            .api_key_file
            .unwrap_or_else(|| args.data_dir.join(API_KEY_FILE));

        Self {
            states_path: args.data_dir.join(STATES_FILE),
            cities_path: args.data_dir.join(CITIES_FILE),
            api_key_path,
            base_url: args.base_url,
            timeout: args.timeout_secs.map(Duration::from_secs),
            log_file: args.log_file,
        }
    }
}

/// First line of the key file, trimmed. Missing or blank means no key.
pub fn read_api_key(path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "No API key file");
            return None;
        }
    };

    let key = contents.lines().next().map(str::trim).unwrap_or_default();
    if key.is_empty() {
        tracing::warn!(path = %path.display(), "API key file is empty");
        return None;
    }
    Some(key.to_string())
}
