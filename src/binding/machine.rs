//! Host binding that owns the state cell and drives dispatch.

use crate::binding::handler::EffectHandlers;
use crate::core::{Action, DispatchLog, DispatchRecord, Effect, EffectQueue, State, TransitionTable};
use chrono::Utc;
use std::collections::VecDeque;

/// Host binding around the pure transition table.
///
/// The machine owns the mutable "current state" cell, applies the table's
/// `reduce` on each incoming action, and triggers effect handlers exactly
/// once per fresh effect queue. It is the only stateful component; no
/// process-wide singletons exist, so independent machines coexist freely.
///
/// # Dispatch protocol
///
/// A call to [`dispatch`](Machine::dispatch) processes its action and then
/// drains, FIFO, every action that effect handlers issued along the way.
/// For each action:
///
/// 1. `reduce` looks up the handler (per-state, then global fallback). No
///    handler: the dispatch is a defined no-op and nothing below happens.
/// 2. The returned state replaces the cell wholesale. Replacement happens
///    only after the handler returns, so a panicking handler leaves the
///    cell at its pre-call value. Panics are not caught; they propagate to
///    the caller.
/// 3. The committed transition is recorded in the dispatch log.
/// 4. The effect queue is replaced (handler attached a fresh queue - its
///    generation advances and one handler per effect fires, in queue
///    order) or cleared (handler attached none - old effects do not leak
///    forward, nothing fires).
///
/// Effect handlers run after the state update is committed, on the same
/// single execution context. Dispatches they issue are deferred until the
/// handler returns, keeping stack depth bounded regardless of effect-chain
/// depth.
pub struct Machine<S: State, A: Action, E: Effect> {
    current: S,
    queue: EffectQueue<E>,
    table: TransitionTable<S, A, E>,
    handlers: EffectHandlers<A, E>,
    log: DispatchLog<S>,
}

impl<S: State, A: Action, E: Effect> Machine<S, A, E> {
    /// Create a machine seeded with `initial`, with an empty effect queue.
    pub fn new(initial: S, table: TransitionTable<S, A, E>, handlers: EffectHandlers<A, E>) -> Self {
        Self {
            current: initial,
            queue: EffectQueue::empty(),
            table,
            handlers,
            log: DispatchLog::new(),
        }
    }

    /// Get the current state (read-only snapshot).
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Get the effects currently queued on the state.
    pub fn effects(&self) -> &[E] {
        self.queue.items()
    }

    /// Get the dispatch log of committed transitions.
    pub fn log(&self) -> &DispatchLog<S> {
        &self.log
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Submit an action for processing.
    ///
    /// Processes the action and then drains, in FIFO order, any actions
    /// that effect handlers dispatched while it was being handled.
    pub fn dispatch(&mut self, action: A) {
        let mut pending = VecDeque::new();
        pending.push_back(action);
        self.drain(&mut pending);
    }

    /// Seed the effect queue and fire its handlers immediately, without a
    /// prior action.
    ///
    /// Used at construction time to trigger effects on mount. Actions
    /// dispatched by the fired handlers are drained before this returns.
    pub fn run_effects_on_mount(&mut self, effects: Vec<E>) {
        self.queue.replace(effects);
        let mut pending = VecDeque::new();
        self.fire_queue(&mut pending);
        self.drain(&mut pending);
    }

    fn drain(&mut self, pending: &mut VecDeque<A>) {
        while let Some(action) = pending.pop_front() {
            self.step(action, pending);
        }
    }

    /// Process a single action: reduce, commit, log, trigger effects.
    fn step(&mut self, action: A, pending: &mut VecDeque<A>) {
        let Some(next) = self.table.reduce(&self.current, &action) else {
            // Identity: state, queue, and log all stay untouched.
            return;
        };

        let effect_count = next.effects.as_ref().map_or(0, Vec::len);
        let from = std::mem::replace(&mut self.current, next.state);
        self.log = self.log.record(DispatchRecord {
            from,
            to: self.current.clone(),
            action: action.tag().to_string(),
            effects: effect_count,
            timestamp: Utc::now(),
        });

        match next.effects {
            Some(items) => {
                self.queue.replace(items);
                self.fire_queue(pending);
            }
            None => self.queue.clear(),
        }
    }

    fn fire_queue(&self, pending: &mut VecDeque<A>) {
        for effect in self.queue.items() {
            self.handlers.fire(effect, pending);
        }
    }
}
