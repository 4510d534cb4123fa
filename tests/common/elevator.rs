//! Elevator controller used by the integration tests.

use variant_fsm::{state_machine, DoNothing, Event, Maybe, State, TransitionTo};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SmData {
    pub floor: i32,
    pub dest_floor: i32,
    pub direction: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct Call {
    pub floor: i32,
}

impl Event for Call {
    fn name(&self) -> Option<&'static str> {
        Some("Call")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FloorSensor {
    pub floor: i32,
}

impl Event for FloorSensor {
    fn name(&self) -> Option<&'static str> {
        Some("FloorSensor")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Alarm;

impl Event for Alarm {
    fn name(&self) -> Option<&'static str> {
        Some("Alarm")
    }
}

pub struct Idle;

pub struct Moving;

#[derive(Default)]
pub struct Panic {
    pub panic_ticks: u32,
    pub maintenance_calls: u32,
    pub help_calls: u32,
}

state_machine! {
    /// Single-car elevator controller.
    pub Elevator {
        data: SmData,
        states: ElevatorState { Idle, Moving, Panic },
        events: ElevatorEvent { Call, FloorSensor, Alarm },
    }
}

impl State<Elevator> for Idle {
    const NAME: Option<&'static str> = Some("Idle");

    fn handle(&mut self, event: &ElevatorEvent, data: &mut SmData) -> Maybe<Elevator> {
        match event {
            ElevatorEvent::Call(call) => {
                data.dest_floor = call.floor;
                if data.dest_floor == data.floor {
                    return DoNothing.into();
                }
                data.direction = if data.dest_floor > data.floor { 1 } else { -1 };
                TransitionTo::<Moving>::new().into()
            }
            ElevatorEvent::FloorSensor(_) => DoNothing.into(),
            ElevatorEvent::Alarm(_) => TransitionTo::<Panic>::new().into(),
        }
    }
}

impl State<Elevator> for Moving {
    const NAME: Option<&'static str> = Some("Moving");

    fn handle(&mut self, event: &ElevatorEvent, data: &mut SmData) -> Maybe<Elevator> {
        match event {
            ElevatorEvent::Call(_) => DoNothing.into(),
            ElevatorEvent::FloorSensor(sensor) => {
                let expected = data.floor + data.direction;
                if sensor.floor != expected {
                    return TransitionTo::<Panic>::new().into();
                }
                data.floor = sensor.floor;
                if data.floor == data.dest_floor {
                    return TransitionTo::<Idle>::new().into();
                }
                DoNothing.into()
            }
            ElevatorEvent::Alarm(_) => TransitionTo::<Panic>::new().into(),
        }
    }
}

impl State<Elevator> for Panic {
    const NAME: Option<&'static str> = Some("Panic");

    fn on_event_enter(&mut self, event: &ElevatorEvent, _data: &mut SmData) {
        match event {
            ElevatorEvent::FloorSensor(_) => self.maintenance_calls += 1,
            ElevatorEvent::Alarm(_) => self.help_calls += 1,
            ElevatorEvent::Call(_) => {}
        }
    }

    fn process(&mut self, _data: &mut SmData) -> Maybe<Elevator> {
        self.panic_ticks += 1;
        DoNothing.into()
    }
}
