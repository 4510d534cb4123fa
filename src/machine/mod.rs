//! The dispatcher.
//!
//! A [`StateMachine`] owns the declared states (through the schema `S`), the
//! reference to the active one, the log callback slot and the configuration.
//! Shared data is never owned: every call borrows it from the caller.
//!
//! Dispatch is synchronous. `process` and `handle` run the active state's hook,
//! then execute the returned action before returning. A transition runs, in
//! order:
//!
//! 1. the log callback, if installed;
//! 2. the exit hook of the state being left;
//! 3. the reassignment of the active reference;
//! 4. the enter hook of the state being entered.

pub mod log;

pub use self::log::LogRecord;

use crate::config::MachineConfig;
use crate::core::{Action, Cause, Hook, Member, StateSet};
use self::log::Logger;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// A finite state machine over the declared state set `S`.
///
/// Exactly one declared state is active at any time. It starts in
/// `S::INITIAL`, whose enter hook runs during construction.
pub struct StateMachine<S: StateSet> {
    states: S,
    active: S::Id,
    logger: Logger,
    config: MachineConfig,
    dispatching: bool,
}

impl<S: StateSet> StateMachine<S> {
    /// Build a machine with the default configuration and activate the
    /// initial state.
    pub fn new(states: S, data: &mut S::Data) -> Self {
        Self::with_config(states, data, MachineConfig::default())
    }

    /// Build a machine with `config` and activate the initial state.
    ///
    /// `config` is used as given; see [`MachineConfig::validated`].
    pub fn with_config(states: S, data: &mut S::Data, config: MachineConfig) -> Self {
        let mut machine = Self {
            states,
            active: S::INITIAL,
            logger: Logger::default(),
            config,
            dispatching: false,
        };

        if machine.config.trace {
            debug!(
                state = ?S::INITIAL,
                name = ?S::name_of(S::INITIAL),
                "activating initial state"
            );
        }
        machine.states.enter(S::INITIAL, Cause::Activation, data);
        machine
    }

    /// Run the processing phase of the active state and execute the action it
    /// returns.
    pub fn process(&mut self, data: &mut S::Data) {
        let mut machine = self.begin_dispatch(Hook::Process);

        let active = machine.active;
        let action = machine.states.process(active, data);
        action.execute(&mut *machine, Cause::Process, data);
    }

    /// Offer `event` to the active state and execute the action it returns.
    pub fn handle(&mut self, event: impl Into<S::Event>, data: &mut S::Data) {
        let event = event.into();
        let mut machine = self.begin_dispatch(Hook::Handle);

        let active = machine.active;
        let action = machine.states.handle(active, &event, data);
        action.execute(&mut *machine, Cause::Event(&event), data);
    }

    /// Perform one transition. Called by the executed action.
    pub(crate) fn transition(&mut self, to: S::Id, cause: Cause<'_, S::Event>, data: &mut S::Data) {
        let from = self.active;

        self.logger.emit(
            &self.config.missing_name,
            S::name_of(from),
            S::name_of(to),
            &cause,
        );

        if self.config.trace {
            debug!(
                from = ?from,
                to = ?to,
                event = ?cause.event_name(),
                shape = %cause.shape(),
                "transition"
            );
        }

        self.states.exit(from, cause, data);
        self.active = to;
        self.states.enter(to, cause, data);
    }

    /// Mark the machine as dispatching until the returned guard is dropped,
    /// including when a hook unwinds.
    fn begin_dispatch(&mut self, hook: Hook) -> Dispatch<'_, S> {
        assert!(!self.dispatching, "reentrant dispatch");
        self.dispatching = true;

        if self.config.trace {
            trace!(hook = %hook, state = ?self.active, "dispatch");
        }
        Dispatch { machine: self }
    }

    /// Check if `T` is the active state.
    pub fn is_in_state<T: Member<S>>(&self) -> bool {
        self.active == T::ID
    }

    /// The stored instance of `T`, active or not.
    pub fn state<T: Member<S>>(&self) -> &T {
        T::get(&self.states)
    }

    /// The stored instance of `T`, active or not, mutably.
    pub fn state_mut<T: Member<S>>(&mut self) -> &mut T {
        T::get_mut(&mut self.states)
    }

    /// Tag of the active state.
    pub fn active(&self) -> S::Id {
        self.active
    }

    /// Symbolic name of the active state.
    pub fn active_name(&self) -> Option<&'static str> {
        S::name_of(self.active)
    }

    /// Install `callback`, called with the names of both states on every
    /// transition. Replaces any previous callback.
    pub fn set_log_callback(&mut self, callback: impl FnMut(&str, &str) + 'static) {
        self.logger.set_pair(Box::new(callback));
    }

    /// Install `callback`, called with a [`LogRecord`] (which also names the
    /// event) on every transition. Replaces any previous callback.
    pub fn set_event_log_callback(&mut self, callback: impl FnMut(&LogRecord<'_>) + 'static) {
        self.logger.set_record(Box::new(callback));
    }

    /// Remove the installed log callback, if any.
    pub fn clear_log_callback(&mut self) {
        self.logger.clear();
    }

    /// Check if a log callback is installed.
    pub fn has_log_callback(&self) -> bool {
        self.logger.is_installed()
    }

    /// Configuration the machine was built with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

impl<S: StateSet<Data = ()>> StateMachine<S> {
    /// [`process`](Self::process) for machines without shared data.
    pub fn tick(&mut self) {
        self.process(&mut ());
    }

    /// [`handle`](Self::handle) for machines without shared data.
    pub fn dispatch(&mut self, event: impl Into<S::Event>) {
        self.handle(event, &mut ());
    }
}

/// Scope of one dispatch. Clears the dispatching flag on drop.
struct Dispatch<'m, S: StateSet> {
    machine: &'m mut StateMachine<S>,
}

impl<S: StateSet> Deref for Dispatch<'_, S> {
    type Target = StateMachine<S>;

    fn deref(&self) -> &StateMachine<S> {
        self.machine
    }
}

impl<S: StateSet> DerefMut for Dispatch<'_, S> {
    fn deref_mut(&mut self) -> &mut StateMachine<S> {
        self.machine
    }
}

impl<S: StateSet> Drop for Dispatch<'_, S> {
    fn drop(&mut self) {
        self.machine.dispatching = false;
    }
}

impl<S: StateSet> fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("active", &self.active)
            .field("log_callback", &self.logger.is_installed())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
