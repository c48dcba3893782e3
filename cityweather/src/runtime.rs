//! The event/action/render loop
//!
//! 1. Terminal event -> component tree -> actions
//! 2. Actions (from events, ticks and finished tasks) -> store
//! 3. Reducer updates state and returns effects -> effect handler
//! 4. If state changed, re-render
//!
//! Every state mutation happens inside [`Runtime::run`], on one task.
//! Spawned work only ever talks back through the action channel.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::{layout::Rect, Frame, Terminal};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::effect::Effect;
use crate::event::{spawn_event_poller, EventKind, PollerConfig};
use crate::state::{AppState, LOADING_ANIM_TICK_MS};
use crate::store::{Middleware, Store};
use crate::tasks::TaskManager;

/// What an effect handler gets to work with
pub struct EffectContext<'a> {
    tasks: &'a mut TaskManager,
}

impl EffectContext<'_> {
    pub fn tasks(&mut self) -> &mut TaskManager {
        self.tasks
    }
}

pub struct Runtime<M: Middleware> {
    store: Store<M>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    tick_interval: Duration,
    should_render: bool,
}

impl<M: Middleware> Runtime<M> {
    pub fn from_store(store: Store<M>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());

        Self {
            store,
            action_tx,
            action_rx,
            tasks,
            tick_interval: Duration::from_millis(LOADING_ANIM_TICK_MS),
            should_render: true,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Dispatch one action and hand its effects to `handle_effect`.
    ///
    /// Returns false when the action asks the loop to stop.
    pub fn process<FEffect>(&mut self, action: Action, handle_effect: &mut FEffect) -> bool
    where
        FEffect: FnMut(Effect, &mut EffectContext<'_>),
    {
        if matches!(action, Action::Quit) {
            return false;
        }

        let result = self.store.dispatch(action);
        if result.has_effects() {
            let mut ctx = EffectContext { tasks: &mut self.tasks };
            for effect in result.effects {
                handle_effect(effect, &mut ctx);
            }
        }
        self.should_render |= result.changed;
        true
    }

    /// Run until `Action::Quit` or until every input closes.
    pub async fn run<B, FRender, FEvent, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &AppState),
        FEvent: FnMut(&EventKind, &AppState) -> Vec<Action>,
        FEffect: FnMut(Effect, &mut EffectContext<'_>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, PollerConfig::default(), cancel_token.clone());

        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    let area = frame.area();
                    render(frame, area, state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    if matches!(event, EventKind::Resize(..)) {
                        self.should_render = true;
                    }
                    for action in map_event(&event, self.store.state()) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if !self.process(action, &mut handle_effect) {
                        break;
                    }
                }

                _ = ticker.tick(), if self.store.state().is_loading => {
                    let _ = self.action_tx.send(Action::Tick);
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();

        Ok(())
    }
}
