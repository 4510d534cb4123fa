//! Macro for declaring state machines.

/// Declare the fixed set of states (and events) of a state machine.
///
/// The first state listed is the initial state. The macro generates:
///
/// - the schema struct `$name`, owning one instance of every state, with a
///   positional constructor `$name::new(..)`;
/// - the tag enum listing the states, used as the active-state reference;
/// - the event enum wrapping every event type, with a `From` impl per event;
/// - the [`StateSet`](crate::StateSet) and [`Member`](crate::Member) impls.
///
/// Every listed state must implement [`State<$name>`](crate::State) and every
/// listed event must implement [`Event`](crate::Event).
///
/// # Example
///
/// ```
/// use variant_fsm::{state_machine, Event, State, StateMachine};
///
/// #[derive(Default)]
/// pub struct Floors {
///     current: i32,
/// }
///
/// pub struct Idle;
/// pub struct Moving;
///
/// pub struct Call {
///     pub floor: i32,
/// }
///
/// impl Event for Call {}
///
/// state_machine! {
///     /// Two-state lift.
///     pub Lift {
///         data: Floors,
///         states: LiftState { Idle, Moving },
///         events: LiftEvent { Call },
///     }
/// }
///
/// impl State<Lift> for Idle {}
/// impl State<Lift> for Moving {}
///
/// let mut floors = Floors::default();
/// let lift = StateMachine::new(Lift::new(Idle, Moving), &mut floors);
///
/// assert_eq!(lift.active(), LiftState::Idle);
/// ```
#[macro_export]
macro_rules! state_machine {
    (
        @schema
        meta: [$(#[$meta:meta])*],
        vis: $vis:vis,
        name: $name:ident,
        data: $data:ty,
        id: $id:ident,
        initial: $initial:ident,
        states: [$($state:ident),+],
        event: $event:ident,
        events: [$($ev:ident),*],
    ) => {
        $crate::__private::paste! {
            $(#[$meta])*
            $vis struct $name {
                $([<state_ $state:snake>]: $state,)+
            }

            impl $name {
                /// Store every declared state. The first one is the initial state.
                #[allow(clippy::too_many_arguments)]
                $vis fn new($([<state_ $state:snake>]: $state),+) -> Self {
                    Self {
                        $([<state_ $state:snake>],)+
                    }
                }
            }

            #[doc = "Tag selecting the active state of [`" $name "`]."]
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
            $vis enum $id {
                $($state,)+
            }

            #[doc = "Events accepted by [`" $name "`]."]
            $vis enum $event {
                $($ev($ev),)*
            }

            $(
                impl ::std::convert::From<$ev> for $event {
                    fn from(event: $ev) -> Self {
                        Self::$ev(event)
                    }
                }
            )*

            impl $crate::Event for $event {
                fn name(&self) -> ::std::option::Option<&'static str> {
                    match *self {
                        $(Self::$ev(ref event) => $crate::Event::name(event),)*
                    }
                }
            }

            impl $crate::StateSet for $name {
                type Data = $data;
                type Event = $event;
                type Id = $id;

                const INITIAL: $id = $id::$initial;
                const IDS: &'static [$id] = &[$($id::$state),+];

                fn name_of(id: $id) -> ::std::option::Option<&'static str> {
                    match id {
                        $($id::$state => <$state as $crate::State<$name>>::NAME,)+
                    }
                }

                fn enter(
                    &mut self,
                    id: $id,
                    cause: $crate::Cause<'_, $event>,
                    data: &mut $data,
                ) {
                    match id {
                        $($id::$state => $crate::core::hooks::enter::<$name, $state>(
                            &mut self.[<state_ $state:snake>],
                            cause,
                            data,
                        ),)+
                    }
                }

                fn exit(
                    &mut self,
                    id: $id,
                    cause: $crate::Cause<'_, $event>,
                    data: &mut $data,
                ) {
                    match id {
                        $($id::$state => $crate::core::hooks::exit::<$name, $state>(
                            &mut self.[<state_ $state:snake>],
                            cause,
                            data,
                        ),)+
                    }
                }

                fn process(&mut self, id: $id, data: &mut $data) -> $crate::Maybe<$name> {
                    match id {
                        $($id::$state => $crate::core::hooks::process::<$name, $state>(
                            &mut self.[<state_ $state:snake>],
                            data,
                        ),)+
                    }
                }

                fn handle(
                    &mut self,
                    id: $id,
                    event: &$event,
                    data: &mut $data,
                ) -> $crate::Maybe<$name> {
                    match id {
                        $($id::$state => $crate::core::hooks::handle::<$name, $state>(
                            &mut self.[<state_ $state:snake>],
                            event,
                            data,
                        ),)+
                    }
                }
            }

            $(
                impl $crate::Member<$name> for $state {
                    const ID: $id = $id::$state;

                    fn get(set: &$name) -> &Self {
                        &set.[<state_ $state:snake>]
                    }

                    fn get_mut(set: &mut $name) -> &mut Self {
                        &mut set.[<state_ $state:snake>]
                    }
                }
            )+
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            data: $data:ty,
            states: $id:ident { $initial:ident $(, $state:ident)* $(,)? },
            events: $event:ident { $($ev:ident),* $(,)? } $(,)?
        }
    ) => {
        $crate::state_machine! {
            @schema
            meta: [$(#[$meta])*],
            vis: $vis,
            name: $name,
            data: $data,
            id: $id,
            initial: $initial,
            states: [$initial $(, $state)*],
            event: $event,
            events: [$($ev),*],
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Event, Member, State, StateSet};

    struct Solo;

    state_machine! {
        Single {
            data: (),
            states: SingleState { Solo },
            events: SingleEvent {},
        }
    }

    impl State<Single> for Solo {}

    pub(crate) struct Red;
    pub(crate) struct Amber;
    pub(crate) struct GreenLight;

    pub(crate) struct Press;

    impl Event for Press {
        fn name(&self) -> Option<&'static str> {
            Some("Press")
        }
    }

    pub(crate) struct Timeout;

    impl Event for Timeout {}

    state_machine! {
        /// Crossing lights.
        pub(crate) Crossing {
            data: u8,
            states: CrossingState { Red, Amber, GreenLight, },
            events: CrossingEvent { Press, Timeout, },
        }
    }

    impl State<Crossing> for Red {
        const NAME: Option<&'static str> = Some("Red");
    }

    impl State<Crossing> for Amber {}

    impl State<Crossing> for GreenLight {
        const NAME: Option<&'static str> = Some("Green");
    }

    #[test]
    fn single_state_machine_is_valid() {
        let _ = Single::new(Solo);

        assert_eq!(Single::INITIAL, SingleState::Solo);
        assert_eq!(Single::IDS.len(), 1);
    }

    #[test]
    fn trailing_commas_are_accepted() {
        assert_eq!(Crossing::IDS.len(), 3);
        assert_eq!(Crossing::INITIAL, CrossingState::Red);
    }

    #[test]
    fn multi_word_states_get_their_own_storage() {
        let mut crossing = Crossing::new(Red, Amber, GreenLight);

        let _: &mut GreenLight = GreenLight::get_mut(&mut crossing);

        assert_eq!(<GreenLight as Member<Crossing>>::ID, CrossingState::GreenLight);
        assert_eq!(Crossing::name_of(CrossingState::GreenLight), Some("Green"));
        assert_eq!(Crossing::name_of(CrossingState::Amber), None);
    }

    #[test]
    fn event_names_delegate_to_payloads() {
        assert_eq!(CrossingEvent::from(Press).name(), Some("Press"));
        assert_eq!(CrossingEvent::from(Timeout).name(), None);
    }
}
