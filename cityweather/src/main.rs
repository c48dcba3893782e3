//! City weather TUI
//!
//! Pick a state, pick a city, press Enter. The temperature (or what went
//! wrong) shows up under the lists.
//!
//! # Usage
//!
//! ```sh
//! # Reads data/states.txt, data/cities.json and data/api_key.txt
//! cargo run -p cityweather
//!
//! # Different data directory, verbose log
//! RUST_LOG=debug cargo run -p cityweather -- --data-dir ./my-data
//! ```

use std::cell::RefCell;
use std::io;

use anyhow::Context;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use cityweather::api::WeatherClient;
use cityweather::components::{Component, WeatherPanel, WeatherPanelProps};
use cityweather::config::{read_api_key, Args, Config};
use cityweather::data::load_reference_data;
use cityweather::event::EventKind;
use cityweather::reducer::reducer;
use cityweather::runtime::{EffectContext, Runtime};
use cityweather::store::{Store, TracingMiddleware};
use cityweather::tasks::TaskKey;
use cityweather::terminal::TerminalGuard;
use cityweather::{Action, AppState, Effect};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());
    let _log_guard = init_logging(&config)?;

    tracing::info!(?config, "Starting");

    let data = load_reference_data(&config.states_path, &config.cities_path);
    let api_key = read_api_key(&config.api_key_path);
    let client = WeatherClient::new(&config.base_url, api_key, config.timeout)
        .context("Failed to build HTTP client")?;

    // ===== Terminal setup =====
    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, AppState::new(data), client).await;

    // ===== Cleanup =====
    drop(guard);

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    result.context("UI loop failed")
}

/// Log to a file; the terminal is busy being the UI.
fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let dir = match config.log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => std::path::Path::new("."),
    };
    let file_name = config
        .log_file
        .file_name()
        .context("--log-file must name a file")?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    Ok(guard)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
    client: WeatherClient,
) -> io::Result<()> {
    let store = Store::with_middleware(state, reducer, TracingMiddleware);
    let mut runtime = Runtime::from_store(store);

    let panel = RefCell::new(WeatherPanel::new());

    runtime
        .run(
            terminal,
            |frame: &mut Frame, area: Rect, state: &AppState| {
                let props = WeatherPanelProps {
                    state,
                    is_focused: true,
                };
                panel.borrow_mut().render(frame, area, props);
            },
            |event: &EventKind, state: &AppState| {
                let props = WeatherPanelProps {
                    state,
                    is_focused: true,
                };
                panel.borrow_mut().handle_event(event, props)
            },
            |effect, ctx: &mut EffectContext<'_>| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Run effects as keyed tasks; results come back as actions
fn handle_effect(client: &WeatherClient, effect: Effect, ctx: &mut EffectContext<'_>) {
    match effect {
        Effect::FetchWeather { request, city } => {
            let client = client.clone();
            ctx.tasks().spawn(TaskKey::Weather, async move {
                match client.current_temperature(&city).await {
                    Ok(reading) => {
                        tracing::info!(request, city = %reading.city, fahrenheit = reading.fahrenheit, "Weather loaded");
                        Action::WeatherDidLoad { request, reading }
                    }
                    Err(e) => {
                        tracing::warn!(request, %city, error = ?e, "Weather fetch failed");
                        Action::WeatherDidError {
                            request,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}
