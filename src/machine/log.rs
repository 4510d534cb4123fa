//! Transition log callback.

use crate::config::MissingName;
use crate::core::{Cause, Event};
use serde::Serialize;

/// Names involved in one executed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord<'a> {
    /// Name of the state being left.
    pub from: &'a str,
    /// Name of the state being entered.
    pub to: &'a str,
    /// Name of the event that caused the transition, if there was a named one.
    pub event: Option<&'a str>,
}

type PairCallback = Box<dyn FnMut(&str, &str)>;
type RecordCallback = Box<dyn FnMut(&LogRecord<'_>)>;

enum Sink {
    Pair(PairCallback),
    Record(RecordCallback),
}

/// Slot for the installed log callback.
#[derive(Default)]
pub(crate) struct Logger {
    sink: Option<Sink>,
}

impl Logger {
    pub(crate) fn set_pair(&mut self, callback: PairCallback) {
        self.sink = Some(Sink::Pair(callback));
    }

    pub(crate) fn set_record(&mut self, callback: RecordCallback) {
        self.sink = Some(Sink::Record(callback));
    }

    pub(crate) fn clear(&mut self) {
        self.sink = None;
    }

    pub(crate) fn is_installed(&self) -> bool {
        self.sink.is_some()
    }

    /// Report a transition to the installed callback.
    ///
    /// Returns whether the callback ran. Nothing is emitted when no callback
    /// is installed, or when a state name is missing and `policy` skips.
    pub(crate) fn emit<E: Event>(
        &mut self,
        policy: &MissingName,
        from: Option<&'static str>,
        to: Option<&'static str>,
        cause: &Cause<'_, E>,
    ) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        let (Some(from), Some(to)) = (policy.resolve(from), policy.resolve(to)) else {
            return false;
        };

        match sink {
            Sink::Pair(callback) => callback(from, to),
            Sink::Record(callback) => {
                let event = cause.event().and_then(|event| policy.resolve(event.name()));
                callback(&LogRecord { from, to, event });
            }
        }
        true
    }
}
