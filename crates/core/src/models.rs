use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub weekday: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub hours: BusinessHours,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Your Business Name".to_string(),
            hours: BusinessHours {
                weekday: "Monday - Friday: 9:00 AM - 6:00 PM".to_string(),
                saturday: "Saturday: 10:00 AM - 4:00 PM".to_string(),
                sunday: "Sunday: Closed".to_string(),
            },
            phone: "+1 (555) 123-4567".to_string(),
            email: "contact@yourbusiness.com".to_string(),
            address: "123 Business Street, City, State 12345".to_string(),
        }
    }
}

impl BusinessInfo {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("failed reading business info at {}", path.as_ref().display())
        })?;

        serde_json::from_str(&raw).with_context(|| {
            format!("invalid business info json at {}", path.as_ref().display())
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub hours: bool,
    pub contact: bool,
    pub location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    HoursAndContact,
    Hours,
    Contact,
    Location,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Hours,
    Contact,
    Location,
}

impl QuickAction {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "hours" => Some(Self::Hours),
            "contact" => Some(Self::Contact),
            "location" => Some(Self::Location),
            _ => None,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Hours => "What are your business hours?",
            Self::Contact => "What is your contact number?",
            Self::Location => "Where are you located?",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hours => "Business Hours",
            Self::Contact => "Contact Number",
            Self::Location => "Location",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Contact => "contact",
            Self::Location => "location",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Hours, Self::Contact, Self::Location]
    }
}
