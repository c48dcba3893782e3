//! State container with an effect-emitting reducer

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Result of dispatching one action
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchResult {
    /// Whether the state was modified (triggers a re-render)
    pub changed: bool,
    /// Effects to run after dispatch
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

impl From<bool> for DispatchResult {
    fn from(changed: bool) -> Self {
        Self {
            changed,
            effects: vec![],
        }
    }
}

pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

/// Hooks around every dispatch
pub trait Middleware {
    fn before(&mut self, action: &Action);
    fn after(&mut self, action: &Action, result: &DispatchResult);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl Middleware for NoopMiddleware {
    fn before(&mut self, _action: &Action) {}
    fn after(&mut self, _action: &Action, _result: &DispatchResult) {}
}

/// Logs every action through `tracing`. Ticks are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn before(&mut self, _action: &Action) {}

    fn after(&mut self, action: &Action, result: &DispatchResult) {
        if matches!(action, Action::Tick) {
            return;
        }
        tracing::debug!(
            action = %action.summary(),
            state_changed = result.changed,
            effects = result.effects.len(),
            "Action processed"
        );
    }
}

/// Owns `AppState`; `dispatch` is the only way to change it.
pub struct Store<M: Middleware = NoopMiddleware> {
    state: AppState,
    reducer: Reducer,
    middleware: M,
}

impl Store<NoopMiddleware> {
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<M: Middleware> Store<M> {
    pub fn with_middleware(state: AppState, reducer: Reducer, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, &result);
        result
    }
}
