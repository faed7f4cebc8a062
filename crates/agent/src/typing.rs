use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct TypingInner {
    token: Option<CancellationToken>,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TypingState {
    inner: Arc<Mutex<TypingInner>>,
}

impl TypingState {
    pub fn new() -> Self {
        Self::default()
    }

    // cancels whatever reply is still pending and hands out the next slot
    pub fn begin(&self) -> (CancellationToken, u64) {
        let mut inner = self.inner.lock();
        if let Some(previous) = inner.token.take() {
            previous.cancel();
        }

        inner.generation += 1;
        let token = CancellationToken::new();
        inner.token = Some(token.clone());

        (token, inner.generation)
    }

    // clears the indicator; returns false when a newer submission took over
    pub fn finish(&self, generation: u64) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != generation {
            return false;
        }

        inner.token = None;
        true
    }

    pub fn is_typing(&self) -> bool {
        self.inner.lock().token.is_some()
    }
}
