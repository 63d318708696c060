//! Host binding around the pure core.
//!
//! This module provides the "imperative shell": it owns the current state
//! cell, applies the pure `reduce` step on each dispatched action, and
//! triggers registered effect handlers whenever a transition attaches a
//! fresh effect queue.
//!
//! # Key Concepts
//!
//! - **Machine**: owns the state cell, the dispatch log, and the handler
//!   tables; the caller's whole surface is `state()` and `dispatch()`
//! - **Effect handlers**: caller-supplied collaborators invoked with the
//!   effect payload and a dispatch callback
//! - **Deferred dispatch**: actions dispatched from inside a handler are
//!   queued FIFO and processed after the handler returns, so effect chains
//!   never grow the stack

mod handler;
mod machine;

pub use handler::{EffectContext, EffectHandler, EffectHandlers};
pub use machine::Machine;
