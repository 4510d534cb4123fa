//! Hook selection.
//!
//! Every hook of a [`State`] exists in up to two shapes: one that receives the
//! event which caused the transition and one that does not. Which shape runs
//! depends only on the [`Cause`] of the transition:
//!
//! | cause                 | enter / exit shape                                 |
//! |-----------------------|----------------------------------------------------|
//! | [`Cause::Activation`] | data only                                          |
//! | [`Cause::Process`]    | data only                                          |
//! | [`Cause::Event`]      | event + data, falling back to data only by default |
//!
//! A hook a state does not override resolves to its no-op default, so a
//! missing hook is never an error.

use super::action::Maybe;
use super::set::StateSet;
use super::state::{Event, State};
use std::fmt;

/// What set a dispatch or a transition in motion.
pub enum Cause<'a, E> {
    /// Construction of the machine activating its initial state.
    Activation,

    /// A call to [`StateMachine::process`](crate::StateMachine::process).
    Process,

    /// A call to [`StateMachine::handle`](crate::StateMachine::handle).
    Event(&'a E),
}

impl<'a, E> Cause<'a, E> {
    /// The event carried by this cause, if any.
    pub fn event(&self) -> Option<&'a E> {
        match *self {
            Cause::Event(event) => Some(event),
            Cause::Activation | Cause::Process => None,
        }
    }

    /// Hook shape selected for enter and exit hooks under this cause.
    pub fn shape(&self) -> Shape {
        match self {
            Cause::Event(_) => Shape::EventAndData,
            Cause::Activation | Cause::Process => Shape::DataOnly,
        }
    }
}

impl<E: Event> Cause<'_, E> {
    /// Symbolic name of the carried event.
    ///
    /// `None` both when there is no event and when the event is unnamed.
    pub fn event_name(&self) -> Option<&'static str> {
        self.event().and_then(Event::name)
    }
}

impl<E> Clone for Cause<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Cause<'_, E> {}

impl<E> fmt::Debug for Cause<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Activation => f.write_str("Activation"),
            Cause::Process => f.write_str("Process"),
            Cause::Event(_) => f.write_str("Event"),
        }
    }
}

/// The hooks a state may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// `on_enter` or `on_event_enter`.
    Enter,
    /// `on_exit` or `on_event_exit`.
    Exit,
    /// The processing phase, run by `process`.
    Process,
    /// The event handler, run by `handle`.
    Handle,
}

impl Hook {
    /// Lowercase hook name, as used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::Enter => "enter",
            Hook::Exit => "exit",
            Hook::Process => "process",
            Hook::Handle => "handle",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument shape of an enter or exit hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `on_event_enter(event, data)` / `on_event_exit(event, data)`.
    EventAndData,

    /// `on_enter(data)` / `on_exit(data)`.
    DataOnly,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::EventAndData => f.write_str("event+data"),
            Shape::DataOnly => f.write_str("data"),
        }
    }
}

/// Run the enter hook of `state` in the shape selected by `cause`.
pub fn enter<S, T>(state: &mut T, cause: Cause<'_, S::Event>, data: &mut S::Data)
where
    S: StateSet,
    T: State<S>,
{
    match cause {
        Cause::Event(event) => state.on_event_enter(event, data),
        Cause::Activation | Cause::Process => state.on_enter(data),
    }
}

/// Run the exit hook of `state` in the shape selected by `cause`.
pub fn exit<S, T>(state: &mut T, cause: Cause<'_, S::Event>, data: &mut S::Data)
where
    S: StateSet,
    T: State<S>,
{
    match cause {
        Cause::Event(event) => state.on_event_exit(event, data),
        Cause::Activation | Cause::Process => state.on_exit(data),
    }
}

/// Run the processing phase of `state`.
pub fn process<S, T>(state: &mut T, data: &mut S::Data) -> Maybe<S>
where
    S: StateSet,
    T: State<S>,
{
    state.process(data)
}

/// Offer `event` to `state`.
pub fn handle<S, T>(state: &mut T, event: &S::Event, data: &mut S::Data) -> Maybe<S>
where
    S: StateSet,
    T: State<S>,
{
    state.handle(event, data)
}
