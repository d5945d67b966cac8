use crate::models::{AnalysisResult, HistoryItem};

/// Lifecycle phase of the session view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No input and nothing to show.
    Idle,
    /// Text present, no request in flight.
    Editing,
    /// One request outstanding.
    Analyzing,
    /// The last request succeeded and its result is current.
    Resulted,
    /// The last request failed; the error message is current.
    Failed,
}

/// Snapshot of everything the dashboard renders.
///
/// Owned exclusively by the session controller; the UI only ever sees
/// cloned snapshots.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    /// Current input text, exactly as typed.
    pub input: String,
    /// Result currently shown in the dashboard.
    pub result: Option<AnalysisResult>,
    /// User-visible error message, if the last request failed.
    pub error: Option<String>,
    /// Past analyses, most recent first.
    pub history: Vec<HistoryItem>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            result: None,
            error: None,
            history: Vec::new(),
        }
    }
}

impl SessionState {
    pub fn word_count(&self) -> usize {
        self.input.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == Phase::Analyzing
    }

    /// Whether a submit intent would start an analysis right now.
    pub fn can_submit(&self) -> bool {
        !self.is_analyzing() && !self.input.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_follow_the_input() {
        let mut state = SessionState::default();
        state.input = "I love this product!".to_string();

        assert_eq!(state.word_count(), 4);
        assert_eq!(state.char_count(), 20);
    }

    #[test]
    fn blank_input_cannot_be_submitted() {
        let mut state = SessionState::default();
        assert!(!state.can_submit());

        state.input = "   \n\t".to_string();
        assert!(!state.can_submit());

        state.input = "hello".to_string();
        assert!(state.can_submit());
    }

    #[test]
    fn no_submission_while_analyzing() {
        let mut state = SessionState::default();
        state.input = "hello".to_string();
        state.phase = Phase::Analyzing;

        assert!(!state.can_submit());
    }
}
