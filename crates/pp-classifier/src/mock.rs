//! Mock generative backend for testing.
//!
//! Supports scripted reply queues, a standing reply, injected latency, and
//! call recording, so the generative path can be exercised without a model
//! server.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{GenerativeError, GenerativeResult};
use crate::generative::GenerativeBackend;

/// Mock backend with scripted replies and call recording.
pub struct MockBackend {
    /// Queued outcomes returned by `generate` (FIFO order). `Err` holds the
    /// transport error message.
    script: Mutex<VecDeque<Result<String, String>>>,
    /// Returned once the script is exhausted. `None` means fail.
    standing_reply: Option<String>,
    /// All `(system, instruction)` pairs passed to `generate`.
    calls: Mutex<Vec<(String, String)>>,
    /// Latency added before every reply.
    delay: Option<Duration>,
}

impl MockBackend {
    /// Create a mock with nothing scripted: every call fails.
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            standing_reply: None,
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Create a mock that answers every call with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self {
            standing_reply: Some(reply.to_string()),
            ..Self::new()
        }
    }

    /// Create a mock whose every call is a transport failure.
    pub fn failing() -> Self {
        Self::new()
    }

    /// Delay every reply by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a one-off reply, served before the standing reply.
    pub fn queue_reply(&self, reply: &str) {
        self.script.lock().unwrap().push_back(Ok(reply.to_string()));
    }

    /// Queue a one-off transport failure.
    pub fn queue_failure(&self, message: &str) {
        self.script.lock().unwrap().push_back(Err(message.to_string()));
    }

    /// Get copies of all `(system, instruction)` pairs received.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate(&self, system: &str, instruction: &str) -> GenerativeResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), instruction.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(GenerativeError::Transport(message)),
            None => self
                .standing_reply
                .clone()
                .ok_or_else(|| GenerativeError::Transport("mock backend has no reply".into())),
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls() {
        let mock = MockBackend::replying("{}");
        mock.generate("sys", "buy milk").await.unwrap();
        mock.generate("sys", "call mom").await.unwrap();

        let calls = mock.calls();
        assert_eq!(mock.call_count(), 2);
        assert_eq!(calls[1], ("sys".to_string(), "call mom".to_string()));
    }

    #[tokio::test]
    async fn script_is_served_before_standing_reply() {
        let mock = MockBackend::replying("standing");
        mock.queue_reply("first");
        mock.queue_failure("boom");

        assert_eq!(mock.generate("s", "i").await.unwrap(), "first");
        assert!(matches!(
            mock.generate("s", "i").await.unwrap_err(),
            GenerativeError::Transport(m) if m == "boom"
        ));
        assert_eq!(mock.generate("s", "i").await.unwrap(), "standing");
        assert_eq!(mock.generate("s", "i").await.unwrap(), "standing");
    }

    #[tokio::test]
    async fn failing_mock_always_fails() {
        let mock = MockBackend::failing();
        assert!(mock.generate("s", "i").await.is_err());
        assert!(mock.generate("s", "i").await.is_err());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_applied() {
        let mock = MockBackend::replying("late").with_delay(Duration::from_secs(3));
        let start = tokio::time::Instant::now();
        assert_eq!(mock.generate("s", "i").await.unwrap(), "late");
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
