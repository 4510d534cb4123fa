//! Traffic Light State Machine
//!
//! This example demonstrates a timed cyclic state machine.
//!
//! Key concepts:
//! - Shared data (a timer) mutated by every state
//! - `process` returning a transition only once a timer expires
//! - One state choosing between two targets at run time
//! - Events that only some states react to
//!
//! Run with: cargo run --example traffic_light

use variant_fsm::{state_machine, DoNothing, Event, Maybe, State, StateMachine, TransitionTo};

#[derive(Debug, Default)]
struct Timing {
    timer: u32,
    to_green: bool,
}

struct ButtonPushed;

impl Event for ButtonPushed {
    fn name(&self) -> Option<&'static str> {
        Some("ButtonPushed")
    }
}

struct Ambulance;

impl Event for Ambulance {
    fn name(&self) -> Option<&'static str> {
        Some("Ambulance")
    }
}

struct Red;
struct Yellow;
struct Green;

state_machine! {
    TrafficLight {
        data: Timing,
        states: Light { Red, Yellow, Green },
        events: Signal { ButtonPushed, Ambulance },
    }
}

const RED_TICKS: u32 = 5;
const YELLOW_TICKS: u32 = 2;
const GREEN_TICKS: u32 = 5;

impl State<TrafficLight> for Red {
    const NAME: Option<&'static str> = Some("Red");

    fn on_enter(&mut self, data: &mut Timing) {
        println!("\u{1b}[31m\u{2B24}\u{1b}[0m \u{2B24} \u{2B24}");
        data.timer = 0;
        data.to_green = true;
    }

    fn process(&mut self, data: &mut Timing) -> Maybe<TrafficLight> {
        data.timer += 1;
        if data.timer > RED_TICKS {
            return TransitionTo::<Yellow>::new().into();
        }
        DoNothing.into()
    }

    fn handle(&mut self, event: &Signal, _data: &mut Timing) -> Maybe<TrafficLight> {
        match event {
            Signal::ButtonPushed(_) => {
                println!("[Event] Button pushed");
                TransitionTo::<Yellow>::new().into()
            }
            Signal::Ambulance(_) => DoNothing.into(),
        }
    }
}

impl State<TrafficLight> for Yellow {
    const NAME: Option<&'static str> = Some("Yellow");

    fn on_enter(&mut self, data: &mut Timing) {
        println!("\u{2B24} \u{1b}[33m\u{2B24}\u{1b}[0m \u{2B24}");
        data.timer = 0;
    }

    fn process(&mut self, data: &mut Timing) -> Maybe<TrafficLight> {
        data.timer += 1;
        if data.timer <= YELLOW_TICKS {
            return DoNothing.into();
        }
        if data.to_green {
            TransitionTo::<Green>::new().into()
        } else {
            TransitionTo::<Red>::new().into()
        }
    }
}

impl State<TrafficLight> for Green {
    const NAME: Option<&'static str> = Some("Green");

    fn on_enter(&mut self, data: &mut Timing) {
        println!("\u{2B24} \u{2B24} \u{1b}[32m\u{2B24}\u{1b}[0m");
        data.timer = 0;
        data.to_green = false;
    }

    fn process(&mut self, data: &mut Timing) -> Maybe<TrafficLight> {
        data.timer += 1;
        if data.timer > GREEN_TICKS {
            return TransitionTo::<Yellow>::new().into();
        }
        DoNothing.into()
    }

    fn handle(&mut self, event: &Signal, _data: &mut Timing) -> Maybe<TrafficLight> {
        match event {
            Signal::Ambulance(_) => {
                println!("[Event] Ambulance");
                TransitionTo::<Yellow>::new().into()
            }
            Signal::ButtonPushed(_) => DoNothing.into(),
        }
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut timing = Timing::default();
    let mut light = StateMachine::new(TrafficLight::new(Red, Yellow, Green), &mut timing);
    light.set_log_callback(|from, to| println!("  {from} -> {to}"));

    // Scripted input: a pedestrian at tick 2, an ambulance at tick 8
    for tick in 0..30 {
        light.process(&mut timing);

        match tick {
            2 => light.handle(ButtonPushed, &mut timing),
            8 => light.handle(Ambulance, &mut timing),
            _ => {}
        }
    }

    println!("\nFinal state: {:?}", light.active());
    println!("Timing: {:?}", timing);

    println!("\n=== Example Complete ===");
}
