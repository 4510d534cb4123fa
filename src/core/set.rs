//! Storage of the declared states and the tag selecting the active one.
//!
//! A [`StateSet`] is the schema of a machine: it owns exactly one instance of
//! every declared state and knows how to route a hook call to the instance
//! selected by an [`Id`](StateSet::Id). Implementations are generated by
//! [`state_machine!`](crate::state_machine); writing one by hand is possible
//! but rarely useful.

use super::action::Maybe;
use super::hooks::Cause;
use super::state::{Event, State};
use std::fmt::Debug;
use std::hash::Hash;

/// Schema of a state machine: the fixed set of states and their routing.
pub trait StateSet: Sized + 'static {
    /// Shared data passed by mutable reference into every hook.
    type Data;

    /// Events accepted by [`StateMachine::handle`](crate::StateMachine::handle).
    type Event: Event;

    /// Tag with one variant per declared state.
    type Id: Copy + Eq + Hash + Debug + 'static;

    /// The state the machine starts in.
    const INITIAL: Self::Id;

    /// Every declared state, in declaration order.
    const IDS: &'static [Self::Id];

    /// Symbolic name of the state selected by `id`.
    fn name_of(id: Self::Id) -> Option<&'static str>;

    /// Run the enter hook of the state selected by `id`.
    fn enter(&mut self, id: Self::Id, cause: Cause<'_, Self::Event>, data: &mut Self::Data);

    /// Run the exit hook of the state selected by `id`.
    fn exit(&mut self, id: Self::Id, cause: Cause<'_, Self::Event>, data: &mut Self::Data);

    /// Run the processing phase of the state selected by `id`.
    fn process(&mut self, id: Self::Id, data: &mut Self::Data) -> Maybe<Self>;

    /// Offer `event` to the state selected by `id`.
    fn handle(&mut self, id: Self::Id, event: &Self::Event, data: &mut Self::Data) -> Maybe<Self>;
}

/// A state declared in the schema `S`.
///
/// Only declared states implement this trait, which is what restricts
/// [`TransitionTo`](crate::TransitionTo) targets and the typed accessors of
/// [`StateMachine`](crate::StateMachine) to the declared set.
pub trait Member<S: StateSet>: State<S> {
    /// Tag of this state.
    const ID: S::Id;

    /// The stored instance of this state.
    fn get(set: &S) -> &Self;

    /// The stored instance of this state, mutably.
    fn get_mut(set: &mut S) -> &mut Self;
}
