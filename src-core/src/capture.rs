//! Exit-intent email capture.
//!
//! The modal appears the first time the pointer leaves the page through the
//! top edge and never again after that, dismissed or not.

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Hidden,
    Visible,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCapture {
    phase: CapturePhase,
    has_shown: bool,
    email: String,
}

impl Default for ExitCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCapture {
    pub fn new() -> Self {
        Self {
            phase: CapturePhase::Hidden,
            has_shown: false,
            email: String::new(),
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != CapturePhase::Hidden
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Pointer left the document at vertical position `client_y`.
    /// Returns true when this opened the modal.
    pub fn pointer_left(&mut self, client_y: i32) -> bool {
        if client_y > 0 || self.has_shown || self.phase == CapturePhase::Success {
            return false;
        }
        self.phase = CapturePhase::Visible;
        self.has_shown = true;
        true
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    /// Start the simulated submission. Requires an email and an open modal.
    pub fn submit(&mut self) -> bool {
        if self.phase != CapturePhase::Visible || self.email.trim().is_empty() {
            return false;
        }
        self.phase = CapturePhase::Submitting;
        true
    }

    /// Called when the simulated submission delay elapses.
    pub fn complete(&mut self) {
        if self.phase == CapturePhase::Submitting {
            self.phase = CapturePhase::Success;
            info!("Exit-intent email captured");
        }
    }

    pub fn dismiss(&mut self) {
        self.phase = CapturePhase::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_top_edge_opens() {
        let mut c = ExitCapture::new();
        assert!(!c.pointer_left(200));
        assert!(!c.is_open());
        assert!(c.pointer_left(0));
        assert_eq!(c.phase(), CapturePhase::Visible);
    }

    #[test]
    fn test_shown_at_most_once() {
        let mut c = ExitCapture::new();
        assert!(c.pointer_left(-5));
        c.dismiss();
        assert!(!c.pointer_left(-5));
        assert!(!c.is_open());
    }

    #[test]
    fn test_submit_flow() {
        let mut c = ExitCapture::new();
        c.pointer_left(0);
        assert!(!c.submit());
        c.set_email("jane@example.com");
        assert!(c.submit());
        assert_eq!(c.phase(), CapturePhase::Submitting);
        c.complete();
        assert_eq!(c.phase(), CapturePhase::Success);
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut c = ExitCapture::new();
        c.pointer_left(0);
        c.complete();
        assert_eq!(c.phase(), CapturePhase::Visible);
    }
}
