//! Deterministic `TextCompletion` used by tests in place of the Gemini client.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{LlmError, TextCompletion};

type Responder = Box<dyn Fn(usize) -> Result<String, LlmError> + Send + Sync>;

/// Scripted provider. The responder receives the 0-based call index, which
/// is assigned when the call is issued, not when it completes.
pub struct FakeCompletion {
    respond: Responder,
    delays: Vec<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeCompletion {
    pub fn with_responder(
        respond: impl Fn(usize) -> Result<String, LlmError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            delays: Vec::new(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with_responder(move |_| Ok(text.clone()))
    }

    pub fn failing() -> Self {
        Self::with_responder(|_| {
            Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        })
    }

    /// Sleeps `delays[i]` before answering call `i`.
    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for FakeCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delays.get(index) {
            tokio::time::sleep(*delay).await;
        }

        (self.respond)(index)
    }
}
