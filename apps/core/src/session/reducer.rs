//! Pure transition function for the session state machine.
//!
//! Every user intent and request outcome passes through [`reduce`]; the
//! only side channel is the returned [`Effect`], which the controller
//! executes. The function itself performs no I/O.

use uuid::Uuid;

use crate::models::{AnalysisResult, HistoryItem};

use super::state::{Phase, SessionState};

/// User intents and request outcomes fed to the reducer.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// The input text changed.
    InputChanged(String),
    /// The user asked for the current input to be analyzed.
    Submit,
    /// The outstanding request finished with a report.
    AnalysisSucceeded {
        /// The text that was analyzed, as captured at submit time.
        text: String,
        result: AnalysisResult,
    },
    /// The outstanding request failed; the message is already rendered for
    /// the user.
    AnalysisFailed(String),
    /// A history entry was selected.
    SelectHistory(Uuid),
    /// The whole history should be discarded.
    ClearHistory,
}

/// Side effect requested by a transition, executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one analysis of the given text.
    RunAnalysis(String),
}

/// Applies one action to the session state and returns the effect to run,
/// if any.
pub fn reduce(state: &mut SessionState, action: SessionAction) -> Option<Effect> {
    match action {
        SessionAction::InputChanged(text) => {
            state.input = text;
            // Resulted/Failed keep their phase so the dashboard stays up
            // while the user edits; only the idle/editing pair is derived
            // from the text.
            if matches!(state.phase, Phase::Idle | Phase::Editing) {
                state.phase = if state.input.trim().is_empty() {
                    Phase::Idle
                } else {
                    Phase::Editing
                };
            }
            None
        }

        SessionAction::Submit => {
            // The state machine itself refuses a second submit while a
            // request is outstanding; the disabled button is cosmetic.
            if state.is_analyzing() {
                return None;
            }
            if state.input.trim().is_empty() {
                return None;
            }
            state.phase = Phase::Analyzing;
            state.error = None;
            Some(Effect::RunAnalysis(state.input.clone()))
        }

        SessionAction::AnalysisSucceeded { text, result } => {
            // Completions arriving outside Analyzing are stale.
            if !state.is_analyzing() {
                return None;
            }
            state
                .history
                .insert(0, HistoryItem::new(text, result.clone()));
            state.result = Some(result);
            state.phase = Phase::Resulted;
            None
        }

        SessionAction::AnalysisFailed(message) => {
            if !state.is_analyzing() {
                return None;
            }
            // The prior result stays visible behind the error banner.
            state.error = Some(message);
            state.phase = Phase::Failed;
            None
        }

        SessionAction::SelectHistory(id) => {
            if state.is_analyzing() {
                return None;
            }
            if let Some(item) = state.history.iter().find(|item| item.id == id) {
                state.input = item.text.clone();
                state.result = Some(item.result.clone());
                state.error = None;
                state.phase = Phase::Editing;
            }
            None
        }

        SessionAction::ClearHistory => {
            state.history.clear();
            state.result = None;
            state.error = None;
            state.input.clear();
            state.phase = Phase::Idle;
            None
        }
    }
}
