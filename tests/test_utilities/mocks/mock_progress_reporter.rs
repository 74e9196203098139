use detect_rapid_report::prelude::*;
use std::sync::{Arc, Mutex};

/// What a use case told its progress reporter
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Message(String),
    Step {
        current: usize,
        total: usize,
        label: Option<String>,
    },
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter recording every event in order
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Labels of the per-component steps, in completion order
    pub fn step_labels(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Step { label, .. } => label,
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ProgressEvent::Step {
            current,
            total,
            label: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completion(message.to_string()));
    }
}
