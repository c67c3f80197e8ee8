//! Inbound request types.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{DeviceId, SessionId, UserId};
use crate::domain::game::GameState;

/// Slot carrying the spoken fact number on `FactNumberIntent`.
pub const FACT_NUMBER_SLOT: &str = "fact_number";

/// One event delivered by the platform, with who and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequest {
    pub context: RequestContext,
    pub event: SkillEvent,
}

impl SkillRequest {
    pub fn new(context: RequestContext, event: SkillEvent) -> Self {
        Self { context, event }
    }
}

/// Identity and session details attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
    pub session_id: SessionId,
    /// True on the first request of a conversation.
    pub new_session: bool,
    pub user_id: UserId,
    pub device_id: Option<DeviceId>,
    pub locale: Option<String>,
    /// State the platform echoed back from the previous response, if any.
    pub session_state: Option<GameState>,
}

/// The kind of event the platform sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillEvent {
    /// The user opened the skill without a specific request.
    Launch,
    /// The user said something the interaction model mapped to an intent.
    Intent(Intent),
    /// The platform closed the conversation.
    SessionEnded(SessionEndedReason),
}

impl SkillEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SkillEvent::Launch => "LaunchRequest",
            SkillEvent::Intent(_) => "IntentRequest",
            SkillEvent::SessionEnded(_) => "SessionEndedRequest",
        }
    }

    /// The intent, for intent requests.
    pub fn intent(&self) -> Option<&Intent> {
        match self {
            SkillEvent::Intent(intent) => Some(intent),
            _ => None,
        }
    }
}

/// A named intent and the slot values filled for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub name: IntentName,
    /// Slots that were filled; unfilled slots are absent.
    pub slots: BTreeMap<String, String>,
}

impl Intent {
    /// An intent with no slots.
    pub fn named(name: IntentName) -> Self {
        Self {
            name,
            slots: BTreeMap::new(),
        }
    }

    /// Adds a filled slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Raw value of a slot, if the user filled it.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}

/// Intents the skill's interaction model defines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntentName {
    FactNumber,
    StartOver,
    Yes,
    No,
    Stop,
    Cancel,
    Help,
    Fallback,
    /// Any name the skill does not know.
    Other(String),
}

impl IntentName {
    /// Maps a platform intent name to the typed name.
    pub fn from_platform(name: &str) -> Self {
        match name {
            "FactNumberIntent" => IntentName::FactNumber,
            "AMAZON.StartOverIntent" => IntentName::StartOver,
            "AMAZON.YesIntent" => IntentName::Yes,
            "AMAZON.NoIntent" => IntentName::No,
            "AMAZON.StopIntent" => IntentName::Stop,
            "AMAZON.CancelIntent" => IntentName::Cancel,
            "AMAZON.HelpIntent" => IntentName::Help,
            "AMAZON.FallbackIntent" => IntentName::Fallback,
            other => IntentName::Other(other.to_string()),
        }
    }

    /// The platform's name for this intent.
    pub fn as_str(&self) -> &str {
        match self {
            IntentName::FactNumber => "FactNumberIntent",
            IntentName::StartOver => "AMAZON.StartOverIntent",
            IntentName::Yes => "AMAZON.YesIntent",
            IntentName::No => "AMAZON.NoIntent",
            IntentName::Stop => "AMAZON.StopIntent",
            IntentName::Cancel => "AMAZON.CancelIntent",
            IntentName::Help => "AMAZON.HelpIntent",
            IntentName::Fallback => "AMAZON.FallbackIntent",
            IntentName::Other(name) => name,
        }
    }
}

impl fmt::Display for IntentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why the platform ended the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEndedReason {
    UserInitiated,
    Error,
    ExceededMaxReprompts,
    Other(String),
}

impl SessionEndedReason {
    pub fn from_platform(reason: &str) -> Self {
        match reason {
            "USER_INITIATED" => SessionEndedReason::UserInitiated,
            "ERROR" => SessionEndedReason::Error,
            "EXCEEDED_MAX_REPROMPTS" => SessionEndedReason::ExceededMaxReprompts,
            other => SessionEndedReason::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SessionEndedReason::UserInitiated => "USER_INITIATED",
            SessionEndedReason::Error => "ERROR",
            SessionEndedReason::ExceededMaxReprompts => "EXCEEDED_MAX_REPROMPTS",
            SessionEndedReason::Other(reason) => reason,
        }
    }
}

impl fmt::Display for SessionEndedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
