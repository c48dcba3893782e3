//! City weather
//!
//! Pick a US state and one of its cities, then fetch the current temperature
//! from OpenWeatherMap. Built as a small Redux/Elm-style terminal app:
//!
//! - **State** ([`state::AppState`]): what the app knows, including the
//!   display text that fetch results end up in
//! - **Actions** ([`action::Action`]): what can happen
//! - **Reducer** ([`reducer::reducer`]): how state changes; returns effects
//! - **Effects** ([`effect::Effect`]): async work, run as keyed tasks
//!   ([`tasks::TaskManager`]) that report back as actions
//! - **Runtime** ([`runtime::Runtime`]): the one loop that dispatches actions
//!   and renders

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod store;
pub mod tasks;
pub mod terminal;
pub mod testing;

pub use action::Action;
pub use effect::Effect;
pub use state::AppState;
