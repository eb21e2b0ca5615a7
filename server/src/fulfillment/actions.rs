//! Intent Actions
//!
//! Action identifiers the agent platform attaches to recognized intents.

/// Intent actions this webhook fulfills.
///
/// Wire form is the platform's dot-separated action string
/// (e.g. `"inquiry.parades"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentAction {
    /// User asked about parade schedules.
    InquiryParades,
}

impl IntentAction {
    /// Parse from the platform's action string (e.g. `"inquiry.parades"`).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "inquiry.parades" => Some(Self::InquiryParades),
            _ => None,
        }
    }

    /// Convert to the dot-separated string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InquiryParades => "inquiry.parades",
        }
    }
}

impl std::fmt::Display for IntentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
