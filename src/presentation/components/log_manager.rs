use chrono::{DateTime, Local};
use std::collections::VecDeque;

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

pub struct LogManager {
    logs: VecDeque<LogEntry>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
        }
    }

    pub fn push(&mut self, message: String) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            timestamp: Local::now(),
            message,
        });
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn all_logs(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
