use nuget_deptree::prelude::*;
use std::sync::{Arc, Mutex};

/// One call made on the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Info(String),
    Progress { current: usize, total: usize },
    Warning(String),
    Completion(String),
}

/// Mock ProgressReporter that records every call; clones share the log
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<Reported>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Reported> {
        self.log.lock().unwrap().clone()
    }

    /// Messages passed to `report_error`
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Reported::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Highest `current` value seen in `report_progress`
    pub fn last_progress(&self) -> Option<usize> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Reported::Progress { current, .. } => Some(current),
                _ => None,
            })
            .max()
    }

    fn push(&self, event: Reported) {
        self.log.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Reported::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.push(Reported::Progress { current, total });
    }

    fn report_error(&self, message: &str) {
        self.push(Reported::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(Reported::Completion(message.to_string()));
    }
}
