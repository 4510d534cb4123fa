//! Transition actions returned by hooks.
//!
//! A hook describes what should happen next by returning one of the values in
//! this module; the machine executes the returned action immediately, exactly
//! once.
//!
//! - [`DoNothing`]: stay in the current state.
//! - [`TransitionTo<T>`]: move to the declared state `T`.
//! - [`Either<S>`]: exactly one transition to a state of `S`, chosen at run time.
//! - [`Maybe<S>`]: an [`Either<S>`] or nothing. This is what hooks return.
//!
//! Transition targets are checked at compile time. Only states declared in a
//! machine implement [`Member`] for it, so naming anything else fails to
//! build:
//!
//! ```compile_fail
//! use variant_fsm::{state_machine, Maybe, State, TransitionTo};
//!
//! struct A;
//! struct B;
//! struct Stray;
//!
//! state_machine! {
//!     Pair {
//!         data: (),
//!         states: PairState { A, B },
//!         events: PairEvent {},
//!     }
//! }
//!
//! impl State<Pair> for A {
//!     fn process(&mut self, _data: &mut ()) -> Maybe<Pair> {
//!         // Stray is not part of Pair
//!         TransitionTo::<Stray>::new().into()
//!     }
//! }
//!
//! impl State<Pair> for B {}
//! ```

use super::hooks::Cause;
use super::set::{Member, StateSet};
use crate::machine::StateMachine;
use std::fmt;
use std::marker::PhantomData;

/// Something the machine can execute after a hook returned it.
///
/// Executing consumes the action, so an action runs at most once.
pub(crate) trait Action<S: StateSet> {
    fn execute(
        self,
        machine: &mut StateMachine<S>,
        cause: Cause<'_, S::Event>,
        data: &mut S::Data,
    );
}

/// Action that leaves the machine where it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DoNothing;

impl<S: StateSet> Action<S> for DoNothing {
    fn execute(self, _: &mut StateMachine<S>, _: Cause<'_, S::Event>, _: &mut S::Data) {}
}

/// Action that moves the machine to the state `T`.
///
/// Executing it logs the transition, runs the exit hook of the current
/// state, makes `T` the active state and runs the enter hook of `T`, in that
/// order.
pub struct TransitionTo<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> TransitionTo<T> {
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for TransitionTo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TransitionTo<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TransitionTo<T> {}

impl<T> fmt::Debug for TransitionTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionTo<{}>", std::any::type_name::<T>())
    }
}

impl<S: StateSet, T: Member<S>> Action<S> for TransitionTo<T> {
    fn execute(
        self,
        machine: &mut StateMachine<S>,
        cause: Cause<'_, S::Event>,
        data: &mut S::Data,
    ) {
        machine.transition(T::ID, cause, data);
    }
}

/// Exactly one transition to a declared state of `S`.
///
/// Unlike [`Maybe`], an `Either` can never be empty: it is only built from a
/// [`TransitionTo`] whose target belongs to `S`.
pub struct Either<S: StateSet> {
    target: S::Id,
}

impl<S: StateSet> Either<S> {
    /// Transition to the declared state `T`.
    pub fn to<T: Member<S>>() -> Self {
        Self { target: T::ID }
    }

    /// The state this transition leads to.
    pub fn target(&self) -> S::Id {
        self.target
    }
}

impl<S: StateSet, T: Member<S>> From<TransitionTo<T>> for Either<S> {
    fn from(_: TransitionTo<T>) -> Self {
        Self::to::<T>()
    }
}

impl<S: StateSet> Clone for Either<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: StateSet> Copy for Either<S> {}

impl<S: StateSet> PartialEq for Either<S> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<S: StateSet> Eq for Either<S> {}

impl<S: StateSet> fmt::Debug for Either<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Either")
            .field("target", &self.target)
            .finish()
    }
}

impl<S: StateSet> Action<S> for Either<S> {
    fn execute(
        self,
        machine: &mut StateMachine<S>,
        cause: Cause<'_, S::Event>,
        data: &mut S::Data,
    ) {
        machine.transition(self.target, cause, data);
    }
}

/// A transition to a declared state of `S`, or nothing.
///
/// Hooks return `Maybe` so that every branch can produce either outcome
/// through `.into()`:
///
/// ```rust
/// use variant_fsm::{state_machine, DoNothing, Maybe, State, TransitionTo};
///
/// struct Waiting;
/// struct Done;
///
/// state_machine! {
///     Job {
///         data: u32,
///         states: JobState { Waiting, Done },
///         events: JobEvent {},
///     }
/// }
///
/// impl State<Job> for Waiting {
///     fn process(&mut self, remaining: &mut u32) -> Maybe<Job> {
///         if *remaining == 0 {
///             return TransitionTo::<Done>::new().into();
///         }
///         *remaining -= 1;
///         DoNothing.into()
///     }
/// }
///
/// impl State<Job> for Done {}
///
/// let action = Waiting.process(&mut 0);
/// assert_eq!(action.target(), Some(JobState::Done));
/// ```
pub struct Maybe<S: StateSet> {
    either: Option<Either<S>>,
}

impl<S: StateSet> Maybe<S> {
    /// The empty alternative.
    pub fn nothing() -> Self {
        Self { either: None }
    }

    /// Transition to the declared state `T`.
    pub fn to<T: Member<S>>() -> Self {
        Either::<S>::to::<T>().into()
    }

    /// Check if executing this action does nothing.
    pub fn is_nothing(&self) -> bool {
        self.either.is_none()
    }

    /// The state this action leads to, if it is a transition.
    pub fn target(&self) -> Option<S::Id> {
        self.either.as_ref().map(Either::target)
    }
}

impl<S: StateSet> Default for Maybe<S> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<S: StateSet> From<DoNothing> for Maybe<S> {
    fn from(_: DoNothing) -> Self {
        Self::nothing()
    }
}

impl<S: StateSet> From<Either<S>> for Maybe<S> {
    fn from(either: Either<S>) -> Self {
        Self {
            either: Some(either),
        }
    }
}

impl<S: StateSet, T: Member<S>> From<TransitionTo<T>> for Maybe<S> {
    fn from(transition: TransitionTo<T>) -> Self {
        Either::<S>::from(transition).into()
    }
}

impl<S: StateSet> Clone for Maybe<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: StateSet> Copy for Maybe<S> {}

impl<S: StateSet> PartialEq for Maybe<S> {
    fn eq(&self, other: &Self) -> bool {
        self.either == other.either
    }
}

impl<S: StateSet> Eq for Maybe<S> {}

impl<S: StateSet> fmt::Debug for Maybe<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.either {
            Some(either) => f.debug_tuple("Maybe").field(either).finish(),
            None => f.write_str("Maybe(DoNothing)"),
        }
    }
}

impl<S: StateSet> Action<S> for Maybe<S> {
    fn execute(
        self,
        machine: &mut StateMachine<S>,
        cause: Cause<'_, S::Event>,
        data: &mut S::Data,
    ) {
        if let Some(either) = self.either {
            either.execute(machine, cause, data);
        }
    }
}
