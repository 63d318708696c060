//! Effect handler table and invocation context.
//!
//! Effect handlers are caller-supplied collaborators: each receives the
//! effect payload and a dispatch callback, performs its own side effects
//! (network, navigation, logging), and may dispatch zero or more actions
//! back into the machine.

use crate::core::{Action, Effect};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Parameters passed to an effect handler: the effect payload and a
/// deferring dispatch callback.
///
/// Actions dispatched through the context are not processed inside the
/// handler invocation. They are enqueued FIFO and reduced one by one after
/// the handler returns, so a handler can safely trigger further
/// transitions without re-entering the in-flight reduce step or growing
/// the stack with the effect-chain depth.
pub struct EffectContext<'a, A: Action, E: Effect> {
    effect: &'a E,
    pending: &'a mut VecDeque<A>,
}

impl<'a, A: Action, E: Effect> EffectContext<'a, A, E> {
    pub(crate) fn new(effect: &'a E, pending: &'a mut VecDeque<A>) -> Self {
        Self { effect, pending }
    }

    /// The effect payload being handled.
    pub fn effect(&self) -> &E {
        self.effect
    }

    /// Dispatch an action back into the machine.
    ///
    /// The action is enqueued and processed as a fresh transition after
    /// this handler returns, in the order it was issued.
    pub fn dispatch(&mut self, action: A) {
        self.pending.push_back(action);
    }
}

/// Type alias for effect handler functions.
pub type EffectHandler<A, E> = Arc<dyn Fn(&mut EffectContext<'_, A, E>) + Send + Sync>;

/// Mapping from effect-tag to handler function.
///
/// Built once at construction and treated as immutable. An enqueued effect
/// whose tag has no entry here is silently dropped - a defined no-op, not
/// an error, mirroring the reducer's missing-handler philosophy.
pub struct EffectHandlers<A: Action, E: Effect> {
    handlers: HashMap<String, EffectHandler<A, E>>,
}

impl<A: Action, E: Effect> EffectHandlers<A, E> {
    /// Create an empty handler table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for an effect-tag.
    ///
    /// Returns the previously registered handler for that tag, if any.
    pub fn insert<F>(&mut self, effect_tag: &str, handler: F) -> Option<EffectHandler<A, E>>
    where
        F: Fn(&mut EffectContext<'_, A, E>) + Send + Sync + 'static,
    {
        self.insert_handler(effect_tag, Arc::new(handler))
    }

    /// Register a pre-built handler for an effect-tag.
    pub fn insert_handler(
        &mut self,
        effect_tag: &str,
        handler: EffectHandler<A, E>,
    ) -> Option<EffectHandler<A, E>> {
        self.handlers.insert(effect_tag.to_string(), handler)
    }

    /// Look up the handler for an effect-tag.
    pub fn get(&self, effect_tag: &str) -> Option<&EffectHandler<A, E>> {
        self.handlers.get(effect_tag)
    }

    /// Invoke the handler matching this effect, if one is registered.
    ///
    /// Dispatches issued by the handler land on `pending` in issue order.
    pub(crate) fn fire(&self, effect: &E, pending: &mut VecDeque<A>) {
        if let Some(handler) = self.handlers.get(effect.tag()) {
            let mut ctx = EffectContext::new(effect, pending);
            handler(&mut ctx);
        }
    }
}

impl<A: Action, E: Effect> Default for EffectHandlers<A, E> {
    fn default() -> Self {
        Self::new()
    }
}
