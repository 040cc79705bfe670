use crate::domain::ports::Navigator;
use std::sync::{Mutex, PoisonError};

/// Navigator for non-browser front ends: logs the route and keeps a history.
#[derive(Debug, Default)]
pub struct LogNavigator {
    site_url: Option<String>,
    history: Mutex<Vec<String>>,
}

impl LogNavigator {
    pub fn new(site_url: Option<String>) -> Self {
        Self {
            site_url,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn location(&self, route: &str) -> String {
        match &self.site_url {
            Some(site) => format!("{}{}", site.trim_end_matches('/'), route),
            None => route.to_string(),
        }
    }
}

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        let location = self.location(route);
        tracing::info!("🧭 Navigating to gallery: {}", location);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location);
    }
}
