use crate::models::{IntentFlags, ReplyKind};

pub const HOURS_KEYWORDS: &[&str] = &[
    "hours", "open", "close", "timing", "schedule", "when", "time",
];

pub const CONTACT_KEYWORDS: &[&str] = &[
    "contact", "phone", "call", "number", "reach", "telephone",
];

pub const LOCATION_KEYWORDS: &[&str] = &["location", "address", "where", "find", "visit"];

pub fn detect_intent(text: &str) -> IntentFlags {
    let lower = text.to_lowercase();

    IntentFlags {
        hours: contains_any(&lower, HOURS_KEYWORDS),
        contact: contains_any(&lower, CONTACT_KEYWORDS),
        location: contains_any(&lower, LOCATION_KEYWORDS),
    }
}

pub fn resolve_reply(flags: IntentFlags) -> ReplyKind {
    if flags.hours && flags.contact {
        return ReplyKind::HoursAndContact;
    }

    if flags.hours {
        return ReplyKind::Hours;
    }

    if flags.contact {
        return ReplyKind::Contact;
    }

    if flags.location {
        return ReplyKind::Location;
    }

    ReplyKind::Fallback
}

pub fn classify(text: &str) -> ReplyKind {
    resolve_reply(detect_intent(text))
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
