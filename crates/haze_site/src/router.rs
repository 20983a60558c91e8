//! Routing collaborator
//!
//! The app drives navigation through this interface so the host history
//! facility stays external. [`RecordingRouter`] stands in for tests and
//! headless runs.

/// The navigation capability
pub trait Router {
    fn navigate(&mut self, path: &str);
}

/// A router that records every navigation
#[derive(Debug, Default)]
pub struct RecordingRouter {
    history: Vec<String>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Router for RecordingRouter {
    fn navigate(&mut self, path: &str) {
        self.history.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_router_keeps_order() {
        let mut router = RecordingRouter::new();
        router.navigate("/");
        router.navigate("/about");
        assert_eq!(router.history(), &["/".to_string(), "/about".to_string()]);
        assert_eq!(router.current(), Some("/about"));
    }
}
