// Holds the user-visible failure message
use crate::application::dashboard_service::StatusDisplay;
use std::sync::RwLock;

#[derive(Default)]
pub struct StatusBoard {
    message: RwLock<Option<String>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<String> {
        self.message.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl StatusDisplay for StatusBoard {
    fn show_failure(&self, message: &str) {
        *self.message.write().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
    }
}
