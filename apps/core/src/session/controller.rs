use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{error, info};

use crate::client::AnalysisProvider;

use super::reducer::{reduce, Effect, SessionAction};
use super::state::SessionState;

/// A handle to the session controller task.
///
/// This struct provides a public, cloneable interface for dispatching
/// actions to the running controller and for observing its published
/// state snapshots.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionAction>,
    snapshot: watch::Receiver<SessionState>,
}

impl SessionHandle {
    /// Spawns the controller around the given provider and returns a
    /// handle to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<P: AnalysisProvider>(provider: P) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let (publisher, snapshot) = watch::channel(SessionState::default());
        let runner = SessionRunner {
            receiver,
            actions: sender.clone(),
            provider: Arc::new(provider),
            state: SessionState::default(),
            publisher,
        };
        tokio::spawn(async move { runner.run().await });
        Self { sender, snapshot }
    }

    /// Dispatches an action without waiting. Used by the UI thread, which
    /// lives outside the runtime.
    pub fn dispatch(&self, action: SessionAction) {
        if let Err(e) = self.sender.try_send(action) {
            error!("failed to dispatch session action: {}", e);
        }
    }

    /// The latest published snapshot.
    pub fn state(&self) -> SessionState {
        self.snapshot.borrow().clone()
    }

    /// A receiver for observing state changes as they are published.
    #[allow(dead_code)]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.snapshot.clone()
    }
}

/// Owns the authoritative session state and the single outstanding
/// request, if any.
struct SessionRunner<P: AnalysisProvider> {
    receiver: mpsc::Receiver<SessionAction>,
    /// Loops request outcomes back into the action stream.
    actions: mpsc::Sender<SessionAction>,
    provider: Arc<P>,
    state: SessionState,
    publisher: watch::Sender<SessionState>,
}

impl<P: AnalysisProvider> SessionRunner<P> {
    async fn run(mut self) {
        info!("session controller started");
        while let Some(action) = self.receiver.recv().await {
            let effect = reduce(&mut self.state, action);
            let _ = self.publisher.send(self.state.clone());
            if let Some(effect) = effect {
                self.execute(effect);
            }
        }
        info!("session controller stopped");
    }

    /// Runs an effect off the control loop. The reducer refuses a second
    /// submit while one request is outstanding, so at most one of these
    /// tasks is alive at a time.
    fn execute(&self, effect: Effect) {
        match effect {
            Effect::RunAnalysis(text) => {
                let provider = Arc::clone(&self.provider);
                let actions = self.actions.clone();
                tokio::spawn(async move {
                    let action = match provider.analyze(&text).await {
                        Ok(result) => SessionAction::AnalysisSucceeded { text, result },
                        Err(e) => {
                            error!("analysis failed: {}", e);
                            SessionAction::AnalysisFailed(e.user_message())
                        }
                    };
                    let _ = actions.send(action).await;
                });
            }
        }
    }
}
