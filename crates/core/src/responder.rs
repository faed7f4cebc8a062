use crate::intent::classify;
use crate::models::{BusinessInfo, ReplyKind};

pub const GREETING: &str = "Hello! I'm here to help you with our business information. You can ask me about our hours, contact number, or location!";

pub fn compose_reply(kind: ReplyKind, business: &BusinessInfo) -> String {
    match kind {
        ReplyKind::HoursAndContact => format!(
            "📞 Contact & Hours Information:\n\nPhone: {}\n\n⏰ Business Hours:\n{}\n{}\n{}",
            business.phone, business.hours.weekday, business.hours.saturday, business.hours.sunday
        ),
        ReplyKind::Hours => format!(
            "⏰ Our Business Hours:\n\n{}\n{}\n{}\n\nWe look forward to serving you!",
            business.hours.weekday, business.hours.saturday, business.hours.sunday
        ),
        ReplyKind::Contact => format!(
            "📞 Contact Information:\n\nPhone: {}\nEmail: {}\n\nFeel free to reach out anytime during business hours!",
            business.phone, business.email
        ),
        ReplyKind::Location => format!(
            "📍 Our Location:\n\n{}\n\nWe'd love to see you! Would you like to know our business hours?",
            business.address
        ),
        ReplyKind::Fallback => "I can help you with:\n\n• Business hours\n• Contact number\n• Location information\n\nWhat would you like to know?"
            .to_string(),
    }
}

pub fn respond(text: &str, business: &BusinessInfo) -> String {
    compose_reply(classify(text), business)
}
