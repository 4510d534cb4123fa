//! Blinking Light
//!
//! The smallest useful machine: two states, one event, no shared data.
//!
//! Run with: cargo run --example blinking

use variant_fsm::{state_machine, Event, Maybe, State, StateMachine, TransitionTo};

struct SwitchPressed;

impl Event for SwitchPressed {}

struct LightOff;
struct LightOn;

state_machine! {
    Lamp {
        data: (),
        states: LampState { LightOff, LightOn },
        events: LampEvent { SwitchPressed },
    }
}

impl State<Lamp> for LightOff {
    fn handle(&mut self, _event: &LampEvent, _data: &mut ()) -> Maybe<Lamp> {
        println!("Light is now on");
        TransitionTo::<LightOn>::new().into()
    }
}

impl State<Lamp> for LightOn {
    fn handle(&mut self, _event: &LampEvent, _data: &mut ()) -> Maybe<Lamp> {
        println!("Light is now off");
        TransitionTo::<LightOff>::new().into()
    }
}

fn main() {
    let mut lamp = StateMachine::new(Lamp::new(LightOff, LightOn), &mut ());

    lamp.dispatch(SwitchPressed);
    // Light is now on

    lamp.dispatch(SwitchPressed);
    // Light is now off

    lamp.dispatch(SwitchPressed);
    // Light is now on

    assert!(lamp.is_in_state::<LightOn>());
}
