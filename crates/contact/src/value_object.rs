use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const FAILURE_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// One of the four inputs of the contact form, named the way the HTML form names them.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Subject)
    }
}

/// Outcome tracker for one submission attempt.
///
/// `Succeeded` and `Failed` stay visible until the next submit or an explicit
/// dismissal.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed => Some(FAILURE_MESSAGE),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Succeeded | SubmissionStatus::Failed
        )
    }
}
