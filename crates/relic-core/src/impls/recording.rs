//! Recording sink: captures everything written through the sink ports.
//!
//! One instance implements all three ports, so a test (or a host that wants
//! to buffer plugin output) can wire the same handle into every slot of a
//! [`JobContext`](crate::app::JobContext) and inspect the capture afterwards.

use std::sync::Mutex;

use crate::domain::StatusEvent;
use crate::ports::{LogSink, OutputChannel, OutputSink, StatusSink};

#[derive(Default)]
struct Captured {
    events: Vec<StatusEvent>,
    logs: Vec<String>,
    warns: Vec<String>,
    errors: Vec<String>,
    out: Vec<(String, OutputChannel)>,
}

#[derive(Default)]
pub struct RecordingSink {
    captured: Mutex<Captured>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<StatusEvent> {
        self.captured.lock().unwrap().events.clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.captured.lock().unwrap().logs.clone()
    }

    pub fn warns(&self) -> Vec<String> {
        self.captured.lock().unwrap().warns.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.captured.lock().unwrap().errors.clone()
    }

    pub fn out_messages(&self) -> Vec<(String, OutputChannel)> {
        self.captured.lock().unwrap().out.clone()
    }
}

impl StatusSink for RecordingSink {
    fn status(&self, event: &StatusEvent) {
        self.captured.lock().unwrap().events.push(event.clone());
    }
}

impl LogSink for RecordingSink {
    fn log(&self, message: &str) {
        self.captured.lock().unwrap().logs.push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.captured.lock().unwrap().warns.push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.captured
            .lock()
            .unwrap()
            .errors
            .push(message.to_string());
    }
}

impl OutputSink for RecordingSink {
    fn out(&self, message: &str, channel: OutputChannel) {
        self.captured
            .lock()
            .unwrap()
            .out
            .push((message.to_string(), channel));
    }
}
