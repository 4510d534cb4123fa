//! Core state machine types.
//!
//! This module contains everything a state needs to know about:
//! - Lifecycle hooks via the `State` trait and event naming via `Event`
//! - Hook shape selection (`hooks`)
//! - The transition actions hooks return
//! - The `StateSet` schema owning every declared state
//!
//! Nothing in here owns shared data or performs a dispatch; that is the job
//! of [`crate::machine`].

mod action;
pub mod hooks;
mod set;
mod state;

pub(crate) use action::Action;
pub use action::{DoNothing, Either, Maybe, TransitionTo};
pub use hooks::{Cause, Hook, Shape};
pub use set::{Member, StateSet};
pub use state::{Event, State};
