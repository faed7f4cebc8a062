use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use frontdesk_core::{
    compose_reply, detect_intent, resolve_reply, BusinessInfo, Message, QuickAction, ReplyKind,
    Sender, GREETING,
};
use frontdesk_observability::AppMetrics;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};
use uuid::Uuid;

pub mod transcript;
pub mod typing;

pub use transcript::Transcript;
pub use typing::TypingState;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);

#[derive(Clone)]
pub struct FrontDeskAgent {
    business: Arc<BusinessInfo>,
    transcript: Transcript,
    typing: TypingState,
    reply_delay: Duration,
    metrics: Arc<AppMetrics>,
    session_id: String,
}

pub struct PendingReply {
    pub user_message: Message,
    token: CancellationToken,
    handle: JoinHandle<Option<Message>>,
}

impl PendingReply {
    pub async fn reply(self) -> Result<Option<Message>> {
        Ok(self.handle.await?)
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl FrontDeskAgent {
    pub fn new(business: BusinessInfo, metrics: Arc<AppMetrics>) -> Self {
        let transcript = Transcript::new();
        transcript.append(Sender::Bot, GREETING);

        Self {
            business: Arc::new(business),
            transcript,
            typing: TypingState::new(),
            reply_delay: DEFAULT_REPLY_DELAY,
            metrics,
            session_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn business(&self) -> &BusinessInfo {
        &self.business
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.transcript.messages()
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_typing()
    }

    // blank guard trims; the stored message keeps the text as typed
    #[instrument(skip(self, text))]
    pub fn submit(&self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        Some(self.send(text.to_string()))
    }

    pub fn quick_action(&self, action: QuickAction) -> PendingReply {
        self.metrics.inc_quick_action();
        self.send(action.prompt().to_string())
    }

    fn send(&self, text: String) -> PendingReply {
        let started = Instant::now();
        self.metrics.inc_message();

        let user_message = self.transcript.append(Sender::User, text.clone());
        let kind = resolve_reply(detect_intent(&text));
        let (token, generation) = self.typing.begin();

        info!(
            session_id = %self.session_id,
            message_id = user_message.id,
            kind = ?kind,
            "message received"
        );

        let agent = self.clone();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            agent
                .deliver_reply(kind, generation, task_token, started)
                .await
        });

        PendingReply {
            user_message,
            token,
            handle,
        }
    }

    async fn deliver_reply(
        self,
        kind: ReplyKind,
        generation: u64,
        token: CancellationToken,
        started: Instant,
    ) -> Option<Message> {
        tokio::select! {
            _ = token.cancelled() => {
                self.typing.finish(generation);
                self.metrics.inc_cancelled();
                info!(session_id = %self.session_id, kind = ?kind, "pending reply cancelled");
                None
            }
            _ = tokio::time::sleep(self.reply_delay) => {
                if !self.typing.finish(generation) {
                    self.metrics.inc_cancelled();
                    return None;
                }

                let message = self
                    .transcript
                    .append(Sender::Bot, compose_reply(kind, &self.business));

                self.metrics.inc_reply();
                if kind == ReplyKind::Fallback {
                    self.metrics.inc_fallback();
                }
                self.metrics.observe_reply_latency(started.elapsed());

                info!(
                    session_id = %self.session_id,
                    message_id = message.id,
                    kind = ?kind,
                    "reply sent"
                );

                Some(message)
            }
        }
    }
}
