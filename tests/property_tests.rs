//! Property-based tests for the dispatcher.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

mod common;

use common::elevator::{Alarm, Call, ElevatorEvent, FloorSensor, Idle, Moving, Panic, SmData};
use common::elevator_machine;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use variant_fsm::{state_machine, Maybe, State, StateMachine, TransitionTo};

#[derive(Default)]
pub struct Visits {
    a: u32,
    b: u32,
}

pub struct A;
pub struct B;

state_machine! {
    pub Pair {
        data: Visits,
        states: PairState { A, B },
        events: PairEvent {},
    }
}

impl State<Pair> for A {
    const NAME: Option<&'static str> = Some("A");

    fn on_enter(&mut self, data: &mut Visits) {
        data.a += 1;
    }

    fn process(&mut self, _data: &mut Visits) -> Maybe<Pair> {
        TransitionTo::<B>::new().into()
    }
}

impl State<Pair> for B {
    const NAME: Option<&'static str> = Some("B");

    fn on_enter(&mut self, data: &mut Visits) {
        data.b += 1;
    }

    fn process(&mut self, _data: &mut Visits) -> Maybe<Pair> {
        TransitionTo::<A>::new().into()
    }
}

#[derive(Debug, Clone, Copy)]
enum Stimulus {
    Call(i32),
    Sensor(i32),
    Alarm,
}

impl From<Stimulus> for ElevatorEvent {
    fn from(stimulus: Stimulus) -> Self {
        match stimulus {
            Stimulus::Call(floor) => Call { floor }.into(),
            Stimulus::Sensor(floor) => FloorSensor { floor }.into(),
            Stimulus::Alarm => Alarm.into(),
        }
    }
}

prop_compose! {
    fn arbitrary_stimulus()(variant in 0..3u8, floor in -3..12i32) -> Stimulus {
        match variant {
            0 => Stimulus::Call(floor),
            1 => Stimulus::Sensor(floor),
            _ => Stimulus::Alarm,
        }
    }
}

fn active_count(machine: &StateMachine<common::elevator::Elevator>) -> usize {
    [
        machine.is_in_state::<Idle>(),
        machine.is_in_state::<Moving>(),
        machine.is_in_state::<Panic>(),
    ]
    .iter()
    .filter(|active| **active)
    .count()
}

proptest! {
    #[test]
    fn process_parity_selects_state(n in 0..200usize) {
        let mut visits = Visits::default();
        let mut machine = StateMachine::new(Pair::new(A, B), &mut visits);

        for _ in 0..n {
            machine.process(&mut visits);
        }

        prop_assert_eq!(machine.is_in_state::<A>(), n % 2 == 0);
        prop_assert_eq!(machine.is_in_state::<B>(), n % 2 == 1);
        prop_assert_eq!(visits.a as usize, 1 + n / 2);
        prop_assert_eq!(visits.b as usize, (n + 1) / 2);
    }

    #[test]
    fn one_log_call_per_transition(n in 0..50usize) {
        let mut visits = Visits::default();
        let mut machine = StateMachine::new(Pair::new(A, B), &mut visits);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        machine.set_log_callback(move |from, to| {
            sink.borrow_mut().push(format!("{from}{to}"));
        });

        for _ in 0..n {
            machine.process(&mut visits);
        }

        let calls = calls.borrow();
        prop_assert_eq!(calls.len(), n);
        for (i, call) in calls.iter().enumerate() {
            let expected = if i % 2 == 0 { "AB" } else { "BA" };
            prop_assert_eq!(call.as_str(), expected);
        }
    }

    #[test]
    fn exactly_one_state_active(stimuli in prop::collection::vec(arbitrary_stimulus(), 0..40)) {
        let mut data = SmData::default();
        let mut machine = elevator_machine(&mut data);
        prop_assert_eq!(active_count(&machine), 1);

        for stimulus in stimuli {
            machine.handle(stimulus, &mut data);
            prop_assert_eq!(active_count(&machine), 1);

            machine.process(&mut data);
            prop_assert_eq!(active_count(&machine), 1);
        }
    }

    #[test]
    fn panic_is_absorbing(stimuli in prop::collection::vec(arbitrary_stimulus(), 0..40)) {
        let mut data = SmData::default();
        let mut machine = elevator_machine(&mut data);
        machine.handle(Alarm, &mut data);
        let frozen = data.clone();

        for stimulus in stimuli {
            machine.handle(stimulus, &mut data);
        }

        prop_assert!(machine.is_in_state::<Panic>());
        prop_assert_eq!(data, frozen);
    }

    #[test]
    fn idle_direction_follows_call(start in -5..5i32, target in -5..5i32) {
        let mut data = SmData { floor: start, ..SmData::default() };
        let mut machine = elevator_machine(&mut data);

        machine.handle(Call { floor: target }, &mut data);

        prop_assert_eq!(data.dest_floor, target);
        if target == start {
            prop_assert!(machine.is_in_state::<Idle>());
        } else {
            prop_assert!(machine.is_in_state::<Moving>());
            prop_assert_eq!(data.direction, (target - start).signum());
        }
    }
}
