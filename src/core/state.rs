//! Lifecycle hooks for states and the optional naming of events.
//!
//! A state opts into behaviour by overriding the hooks it needs. Every hook
//! has a no-op default, so a state that implements nothing is still a valid
//! member of a machine.

use super::action::{DoNothing, Maybe};
use super::set::StateSet;

/// Trait for stimuli dispatched to the active state.
///
/// Events are plain carriers. The only optional capability is a symbolic
/// name, which ends up in extended log records.
///
/// # Example
///
/// ```rust
/// use variant_fsm::Event;
///
/// struct Call {
///     floor: i32,
/// }
///
/// impl Event for Call {
///     fn name(&self) -> Option<&'static str> {
///         Some("Call")
///     }
/// }
///
/// struct Tick;
///
/// impl Event for Tick {}
///
/// assert_eq!(Call { floor: 3 }.name(), Some("Call"));
/// assert_eq!(Tick.name(), None);
/// ```
pub trait Event {
    /// Get the event's name for logging.
    ///
    /// Default implementation returns `None`.
    fn name(&self) -> Option<&'static str> {
        None
    }
}

/// Trait for the states of the machine schema `S`.
///
/// All hooks are optional. The data-only shape of a hook is used when a
/// transition has no event context (construction, [`process`]); the
/// event-carrying shape is preferred when a transition was caused by an
/// event, and falls back to the data-only shape unless overridden.
///
/// Hooks receive the shared data by mutable reference. A hook that does not
/// care about the data (or the event) simply ignores the parameter.
///
/// # Example
///
/// ```rust
/// use variant_fsm::{state_machine, DoNothing, Event, Maybe, State, StateMachine, TransitionTo};
///
/// #[derive(Default)]
/// struct Counter {
///     ticks: u32,
/// }
///
/// struct Off;
/// struct On;
/// struct Toggle;
///
/// impl Event for Toggle {}
///
/// state_machine! {
///     Lamp {
///         data: Counter,
///         states: LampState { Off, On },
///         events: LampEvent { Toggle },
///     }
/// }
///
/// impl State<Lamp> for Off {
///     const NAME: Option<&'static str> = Some("Off");
///
///     fn handle(&mut self, _event: &LampEvent, _data: &mut Counter) -> Maybe<Lamp> {
///         TransitionTo::<On>::new().into()
///     }
/// }
///
/// impl State<Lamp> for On {
///     const NAME: Option<&'static str> = Some("On");
///
///     fn on_enter(&mut self, data: &mut Counter) {
///         data.ticks = 0;
///     }
///
///     fn process(&mut self, data: &mut Counter) -> Maybe<Lamp> {
///         data.ticks += 1;
///         DoNothing.into()
///     }
///
///     fn handle(&mut self, _event: &LampEvent, _data: &mut Counter) -> Maybe<Lamp> {
///         TransitionTo::<Off>::new().into()
///     }
/// }
///
/// let mut data = Counter::default();
/// let mut lamp = StateMachine::new(Lamp::new(Off, On), &mut data);
///
/// lamp.handle(Toggle, &mut data);
/// lamp.process(&mut data);
/// lamp.process(&mut data);
///
/// assert!(lamp.is_in_state::<On>());
/// assert_eq!(data.ticks, 2);
/// ```
///
/// [`process`]: State::process
pub trait State<S: StateSet>: 'static {
    /// Symbolic name used by the transition log callback.
    ///
    /// States without a name never produce a log record unless the machine
    /// is configured with a placeholder.
    const NAME: Option<&'static str> = None;

    /// Enter hook without event context.
    fn on_enter(&mut self, _data: &mut S::Data) {}

    /// Enter hook for transitions caused by an event.
    ///
    /// Default implementation forwards to [`State::on_enter`].
    fn on_event_enter(&mut self, _event: &S::Event, data: &mut S::Data) {
        self.on_enter(data)
    }

    /// Exit hook without event context.
    fn on_exit(&mut self, _data: &mut S::Data) {}

    /// Exit hook for transitions caused by an event.
    ///
    /// Default implementation forwards to [`State::on_exit`].
    fn on_event_exit(&mut self, _event: &S::Event, data: &mut S::Data) {
        self.on_exit(data)
    }

    /// Processing phase, run on every [`StateMachine::process`] call while
    /// this state is active.
    ///
    /// [`StateMachine::process`]: crate::StateMachine::process
    fn process(&mut self, _data: &mut S::Data) -> Maybe<S> {
        DoNothing.into()
    }

    /// Event handler. Events the state does not care about are dropped by
    /// returning [`DoNothing`].
    fn handle(&mut self, _event: &S::Event, _data: &mut S::Data) -> Maybe<S> {
        DoNothing.into()
    }
}

impl Event for () {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::TransitionTo;
    use crate::state_machine;

    struct Payload {
        value: u8,
    }

    impl Event for Payload {
        fn name(&self) -> Option<&'static str> {
            Some("Payload")
        }
    }

    struct Anonymous;

    impl Event for Anonymous {}

    #[derive(Default)]
    struct Log {
        entered: Vec<&'static str>,
        exited: Vec<&'static str>,
    }

    struct Bare;

    #[derive(Default)]
    struct Eager {
        seen: u8,
    }

    state_machine! {
        Probe {
            data: Log,
            states: ProbeState { Bare, Eager },
            events: ProbeEvent { Payload, Anonymous },
        }
    }

    impl State<Probe> for Bare {}

    impl State<Probe> for Eager {
        const NAME: Option<&'static str> = Some("Eager");

        fn on_enter(&mut self, data: &mut Log) {
            data.entered.push("plain");
        }

        fn on_event_enter(&mut self, event: &ProbeEvent, data: &mut Log) {
            if let ProbeEvent::Payload(payload) = event {
                self.seen = payload.value;
            }
            data.entered.push("event");
        }

        fn on_exit(&mut self, data: &mut Log) {
            data.exited.push("plain");
        }

        fn handle(&mut self, _event: &ProbeEvent, _data: &mut Log) -> Maybe<Probe> {
            TransitionTo::<Bare>::new().into()
        }
    }

    #[test]
    fn event_name_defaults_to_none() {
        assert_eq!(Anonymous.name(), None);
        assert_eq!(().name(), None);
    }

    #[test]
    fn event_name_can_be_overridden() {
        assert_eq!(Payload { value: 1 }.name(), Some("Payload"));
    }

    #[test]
    fn state_name_defaults_to_none() {
        assert_eq!(<Bare as State<Probe>>::NAME, None);
        assert_eq!(<Eager as State<Probe>>::NAME, Some("Eager"));
    }

    #[test]
    fn default_hooks_do_nothing() {
        let mut bare = Bare;
        let mut log = Log::default();

        bare.on_enter(&mut log);
        bare.on_exit(&mut log);
        bare.on_event_enter(&ProbeEvent::Anonymous(Anonymous), &mut log);

        assert!(bare.process(&mut log).is_nothing());
        assert!(bare
            .handle(&ProbeEvent::Payload(Payload { value: 4 }), &mut log)
            .is_nothing());
        assert!(log.entered.is_empty());
        assert!(log.exited.is_empty());
    }

    #[test]
    fn event_exit_falls_back_to_plain_exit() {
        let mut eager = Eager::default();
        let mut log = Log::default();

        eager.on_event_exit(&ProbeEvent::Anonymous(Anonymous), &mut log);

        assert_eq!(log.exited, vec!["plain"]);
    }

    #[test]
    fn overridden_event_enter_replaces_plain_enter() {
        let mut eager = Eager::default();
        let mut log = Log::default();

        eager.on_event_enter(&ProbeEvent::Payload(Payload { value: 9 }), &mut log);

        assert_eq!(log.entered, vec!["event"]);
        assert_eq!(eager.seen, 9);
    }

    #[test]
    fn overridden_handle_returns_transition() {
        let mut eager = Eager::default();
        let mut log = Log::default();

        let action = eager.handle(&ProbeEvent::Anonymous(Anonymous), &mut log);

        assert_eq!(action.target(), Some(ProbeState::Bare));
    }
}
