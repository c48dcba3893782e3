//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the runtime, which
//! keeps the reducer pure while making async work explicit.

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the current temperature for `city`, tagged with its request id
    FetchWeather { request: u64, city: String },
}
