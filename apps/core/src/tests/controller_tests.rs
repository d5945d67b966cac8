//! Session controller tests.
//!
//! Drive the controller through its handle with a mock provider and
//! observe the published snapshots.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::client::AnalysisProvider;
use crate::error::AppError;
use crate::models::{AnalysisResult, SentimentLabel};
use crate::session::controller::SessionHandle;
use crate::session::reducer::SessionAction;
use crate::session::state::Phase;
use crate::tests::fixtures;
use crate::tests::fixtures::wait_until;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Mock provider driven by a closure. Resolves after a short delay so the
/// Analyzing phase is observable through the watch channel.
struct MockProvider {
    calls: Arc<AtomicUsize>,
    response_fn: Box<dyn Fn(usize, &str) -> Result<AnalysisResult, AppError> + Send + Sync>,
}

impl MockProvider {
    fn new<F>(calls: &Arc<AtomicUsize>, f: F) -> Self
    where
        F: Fn(usize, &str) -> Result<AnalysisResult, AppError> + Send + Sync + 'static,
    {
        Self {
            calls: Arc::clone(calls),
            response_fn: Box::new(f),
        }
    }

    fn succeeding(calls: &Arc<AtomicUsize>) -> Self {
        Self::new(calls, |_, _| Ok(fixtures::sample_report()))
    }
}

#[async_trait]
impl AnalysisProvider for MockProvider {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(Duration::from_millis(40)).await;
        (self.response_fn)(call, text)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn submit_runs_one_analysis_to_completion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = SessionHandle::spawn(MockProvider::succeeding(&calls));

    handle.dispatch(SessionAction::InputChanged("I love this product!".to_string()));
    handle.dispatch(SessionAction::Submit);

    let analyzing = wait_until(&handle, |s| s.phase == Phase::Analyzing).await;
    assert!(!analyzing.can_submit());

    let resulted = wait_until(&handle, |s| s.phase == Phase::Resulted).await;
    assert_eq!(resulted.history.len(), 1);
    assert_eq!(resulted.history[0].text, "I love this product!");
    assert_eq!(
        resulted.result.as_ref().unwrap().sentiment.label,
        SentimentLabel::Positive
    );
    assert_eq!(resulted.error, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_submission_is_ignored() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = SessionHandle::spawn(MockProvider::succeeding(&calls));

    handle.dispatch(SessionAction::InputChanged("   \n".to_string()));
    handle.dispatch(SessionAction::Submit);
    sleep(Duration::from_millis(100)).await;

    let state = handle.state();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.history.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duplicate_submit_during_flight_is_ignored() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = SessionHandle::spawn(MockProvider::succeeding(&calls));

    handle.dispatch(SessionAction::InputChanged("some text".to_string()));
    handle.dispatch(SessionAction::Submit);
    wait_until(&handle, |s| s.phase == Phase::Analyzing).await;

    handle.dispatch(SessionAction::Submit);
    let resulted = wait_until(&handle, |s| s.phase == Phase::Resulted).await;
    sleep(Duration::from_millis(100)).await;

    assert_eq!(resulted.history.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(handle.state().history.len(), 1);
}

#[tokio::test]
async fn failure_surfaces_message_and_keeps_prior_result() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = MockProvider::new(&calls, |call, _| {
        if call == 0 {
            Ok(fixtures::sample_report())
        } else {
            Err(AppError::Api {
                status: 500,
                body: "Internal Server Error".to_string(),
            })
        }
    });
    let handle = SessionHandle::spawn(provider);

    handle.dispatch(SessionAction::InputChanged("first".to_string()));
    handle.dispatch(SessionAction::Submit);
    wait_until(&handle, |s| s.phase == Phase::Resulted).await;

    handle.dispatch(SessionAction::InputChanged("second".to_string()));
    handle.dispatch(SessionAction::Submit);
    let failed = wait_until(&handle, |s| s.phase == Phase::Failed).await;

    assert_eq!(
        failed.error.as_deref(),
        Some("Analysis failed. Please try again.")
    );
    assert!(failed.result.is_some());
    assert_eq!(failed.history.len(), 1);
    assert_eq!(failed.history[0].text, "first");
}

#[tokio::test]
async fn history_is_most_recent_first() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = SessionHandle::spawn(MockProvider::succeeding(&calls));

    for text in ["first", "second"] {
        handle.dispatch(SessionAction::InputChanged(text.to_string()));
        handle.dispatch(SessionAction::Submit);
        wait_until(&handle, |s| s.history.first().map(|i| i.text.as_str()) == Some(text)).await;
    }

    let state = handle.state();
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history[0].text, "second");
    assert_eq!(state.history[1].text, "first");
}

#[tokio::test]
async fn selecting_history_restores_without_a_network_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = SessionHandle::spawn(MockProvider::succeeding(&calls));

    handle.dispatch(SessionAction::InputChanged("first".to_string()));
    handle.dispatch(SessionAction::Submit);
    let resulted = wait_until(&handle, |s| s.phase == Phase::Resulted).await;
    let stored = resulted.history[0].clone();

    handle.dispatch(SessionAction::InputChanged("a new draft".to_string()));
    handle.dispatch(SessionAction::SelectHistory(stored.id));
    let state = wait_until(&handle, |s| s.phase == Phase::Editing && s.input == "first").await;

    assert_eq!(state.result.as_ref(), Some(&stored.result));
    assert_eq!(state.error, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn clear_history_resets_everything_and_is_idempotent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = SessionHandle::spawn(MockProvider::succeeding(&calls));

    handle.dispatch(SessionAction::InputChanged("first".to_string()));
    handle.dispatch(SessionAction::Submit);
    wait_until(&handle, |s| s.phase == Phase::Resulted).await;

    handle.dispatch(SessionAction::ClearHistory);
    let cleared = wait_until(&handle, |s| s.phase == Phase::Idle).await;
    assert!(cleared.history.is_empty());
    assert!(cleared.result.is_none());
    assert!(cleared.input.is_empty());

    handle.dispatch(SessionAction::ClearHistory);
    sleep(Duration::from_millis(50)).await;
    let state = handle.state();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.history.is_empty());
}
