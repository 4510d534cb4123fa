#![allow(dead_code)]

pub mod elevator;

use elevator::{Elevator, Idle, Moving, Panic, SmData};
use variant_fsm::StateMachine;

pub fn elevator_machine(data: &mut SmData) -> StateMachine<Elevator> {
    StateMachine::new(Elevator::new(Idle, Moving, Panic::default()), data)
}
