use std::sync::Arc;

use chrono::Utc;
use frontdesk_core::{Message, Sender};
use parking_lot::RwLock;

#[derive(Debug)]
struct TranscriptInner {
    messages: Vec<Message>,
    next_id: u64,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    inner: Arc<RwLock<TranscriptInner>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TranscriptInner {
                messages: Vec::new(),
                next_id: 1,
            })),
        }
    }

    pub fn append(&self, sender: Sender, text: impl Into<String>) -> Message {
        let mut inner = self.inner.write();
        let message = Message {
            id: inner.next_id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        };
        inner.next_id += 1;
        inner.messages.push(message.clone());

        message
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.read().messages.clone()
    }

    pub fn last(&self) -> Option<Message> {
        self.inner.read().messages.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
