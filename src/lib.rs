//! Variant FSM: a finite state machine runtime for state sets fixed at build
//! time.
//!
//! A machine is declared once with [`state_machine!`], listing its states
//! (the first one is initial), its events and the type of the data shared by
//! all hooks. States are ordinary types that opt into behaviour by overriding
//! the hooks of [`State`] they need; everything they leave out is a no-op.
//!
//! # Core Concepts
//!
//! - **State**: lifecycle hooks (`on_enter`, `on_exit`, `process`, `handle`)
//!   with no-op defaults, via the [`State`] trait
//! - **Actions**: hooks answer with [`DoNothing`], [`TransitionTo`],
//!   [`Either`] or [`Maybe`]; transition targets outside the declared set do
//!   not compile
//! - **Dispatcher**: [`StateMachine`] owns the states, tracks the active one
//!   and executes the returned actions
//! - **Logging**: an optional callback receives the names of both states on
//!   every transition, next to `tracing` diagnostics
//!
//! # Example
//!
//! ```rust
//! use variant_fsm::{state_machine, DoNothing, Event, Maybe, State, StateMachine, TransitionTo};
//!
//! #[derive(Default)]
//! struct Shared {
//!     floor: i32,
//! }
//!
//! struct Idle;
//! struct Moving;
//!
//! struct Call {
//!     floor: i32,
//! }
//!
//! impl Event for Call {}
//!
//! state_machine! {
//!     Lift {
//!         data: Shared,
//!         states: LiftState { Idle, Moving },
//!         events: LiftEvent { Call },
//!     }
//! }
//!
//! impl State<Lift> for Idle {
//!     const NAME: Option<&'static str> = Some("Idle");
//!
//!     fn handle(&mut self, event: &LiftEvent, data: &mut Shared) -> Maybe<Lift> {
//!         let LiftEvent::Call(call) = event;
//!         if call.floor == data.floor {
//!             return DoNothing.into();
//!         }
//!         TransitionTo::<Moving>::new().into()
//!     }
//! }
//!
//! impl State<Lift> for Moving {
//!     const NAME: Option<&'static str> = Some("Moving");
//! }
//!
//! let mut shared = Shared::default();
//! let mut lift = StateMachine::new(Lift::new(Idle, Moving), &mut shared);
//!
//! let transitions = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//! let sink = std::rc::Rc::clone(&transitions);
//! lift.set_log_callback(move |from, to| sink.borrow_mut().push(format!("{from} -> {to}")));
//!
//! lift.handle(Call { floor: 0 }, &mut shared);
//! assert!(lift.is_in_state::<Idle>());
//!
//! lift.handle(Call { floor: 3 }, &mut shared);
//! assert!(lift.is_in_state::<Moving>());
//! assert_eq!(*transitions.borrow(), vec!["Idle -> Moving".to_string()]);
//! ```

pub mod config;
pub mod core;
pub mod machine;
mod macros;

// Re-export commonly used types
pub use self::config::{ConfigError, MachineConfig, MissingName};
pub use self::core::{
    Cause, DoNothing, Either, Event, Hook, Maybe, Member, Shape, State, StateSet, TransitionTo,
};
pub use self::machine::{LogRecord, StateMachine};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
