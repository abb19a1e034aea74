//! View port: the only way the crate touches the page.

use std::collections::HashMap;
use thiserror::Error;

/// Container ids for features that are not topic panels.
pub mod containers {
    pub const PASSWORD_STRENGTH: &str = "passwordStrength";
    pub const SYSTEM_RESULTS: &str = "systemResults";
    pub const SECURITY_SCORE: &str = "securityScore";
    pub const EASTER_EGG: &str = "easterEgg";
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewError {
    #[error("Container not present on page: {0}")]
    MissingContainer(String),
}

/// Something that can replace the content of a named container.
pub trait View {
    /// Replaces the content of `container` with `content`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingContainer` if the page has no such
    /// container.
    fn render(&mut self, container: &str, content: &str) -> Result<(), ViewError>;
}

/// In-memory page with a fixed set of containers.
///
/// Useful for headless hosts and for tests: every successful render is
/// also appended to a log.
#[derive(Debug, Default)]
pub struct MemoryView {
    containers: HashMap<String, String>,
    log: Vec<(String, String)>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the given containers, all empty.
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut view = Self::new();
        for id in ids {
            view.add_container(id);
        }
        view
    }

    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    /// Every successful render, oldest first.
    pub fn log(&self) -> &[(String, String)] {
        &self.log
    }

    pub fn renders_into(&self, id: &str) -> usize {
        self.log.iter().filter(|(c, _)| c == id).count()
    }
}

impl View for MemoryView {
    fn render(&mut self, container: &str, content: &str) -> Result<(), ViewError> {
        let slot = self
            .containers
            .get_mut(container)
            .ok_or_else(|| ViewError::MissingContainer(container.to_string()))?;
        *slot = content.to_string();
        self.log.push((container.to_string(), content.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_into_present_container() {
        let mut view = MemoryView::with_containers([containers::SECURITY_SCORE]);
        view.render(containers::SECURITY_SCORE, "<p>80%</p>").unwrap();
        assert_eq!(view.content(containers::SECURITY_SCORE), Some("<p>80%</p>"));
        assert_eq!(view.renders_into(containers::SECURITY_SCORE), 1);
    }

    #[test]
    fn test_render_into_missing_container() {
        let mut view = MemoryView::new();
        let result = view.render("nowhere", "x");
        assert_eq!(result, Err(ViewError::MissingContainer("nowhere".to_string())));
        assert!(view.log().is_empty());
    }

    #[test]
    fn test_render_replaces_content() {
        let mut view = MemoryView::with_containers(["a"]);
        view.render("a", "first").unwrap();
        view.render("a", "second").unwrap();
        assert_eq!(view.content("a"), Some("second"));
        assert_eq!(view.log().len(), 2);
    }
}
