pub mod intent;
pub mod models;
pub mod responder;

pub use intent::{classify, detect_intent, resolve_reply};
pub use models::*;
pub use responder::{compose_reply, respond, GREETING};
