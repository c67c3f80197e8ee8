//! Inbound request envelope DTOs.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::EnvelopeError;
use crate::domain::foundation::{DeviceId, SessionId, UserId};
use crate::domain::game::GameState;
use crate::domain::skill::{
    Intent, IntentName, RequestContext, SessionEndedReason, SkillEvent, SkillRequest,
};

/// Top-level request envelope as delivered by the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<SessionDto>,
    #[serde(default)]
    pub context: Option<ContextDto>,
    pub request: RequestDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextDto {
    #[serde(rename = "System", default)]
    pub system: Option<SystemDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemDto {
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub device: Option<DeviceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub device_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentDto>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentDto {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, SlotDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotDto {
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestEnvelope {
    /// Parse an envelope from JSON text.
    pub fn from_json(json: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The user id, preferring the request context over the session copy.
    fn user_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.user.as_ref())
            .or_else(|| self.session.as_ref().and_then(|s| s.user.as_ref()))
            .map(|u| u.user_id.as_str())
    }

    fn device_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.device.as_ref())
            .map(|d| d.device_id.as_str())
    }
}

/// Empty objects and `null` mean the session carries no state yet.
fn parse_session_state(
    attributes: Option<serde_json::Value>,
) -> Result<Option<GameState>, EnvelopeError> {
    match attributes {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| EnvelopeError::InvalidSessionAttributes(e.to_string())),
    }
}

impl TryFrom<RequestEnvelope> for SkillRequest {
    type Error = EnvelopeError;

    fn try_from(envelope: RequestEnvelope) -> Result<Self, Self::Error> {
        let user_id = UserId::new(envelope.user_id().ok_or(EnvelopeError::MissingUserId)?)?;
        let device_id = envelope.device_id().map(DeviceId::new).transpose()?;

        let RequestEnvelope {
            session, request, ..
        } = envelope;
        let session = session.ok_or(EnvelopeError::MissingSession)?;

        let event = match request.request_type.as_str() {
            "LaunchRequest" => SkillEvent::Launch,
            "IntentRequest" => {
                let dto = request.intent.ok_or(EnvelopeError::MissingIntent)?;
                let slots = dto
                    .slots
                    .into_iter()
                    .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
                    .collect();
                SkillEvent::Intent(Intent {
                    name: IntentName::from_platform(&dto.name),
                    slots,
                })
            }
            "SessionEndedRequest" => SkillEvent::SessionEnded(SessionEndedReason::from_platform(
                request.reason.as_deref().unwrap_or("USER_INITIATED"),
            )),
            other => return Err(EnvelopeError::UnsupportedRequestType(other.to_string())),
        };

        let context = RequestContext {
            request_id: request.request_id,
            session_id: SessionId::new(session.session_id)?,
            new_session: session.new,
            user_id,
            device_id,
            locale: request.locale,
            session_state: parse_session_state(session.attributes)?,
        };

        Ok(SkillRequest::new(context, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skill::FACT_NUMBER_SLOT;
    use serde_json::json;

    fn envelope(request: serde_json::Value, attributes: serde_json::Value) -> String {
        json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.abc",
                "application": {"applicationId": "amzn1.ask.skill.xyz"},
                "attributes": attributes,
                "user": {"userId": "amzn1.ask.account.SESSION_USER"}
            },
            "context": {
                "System": {
                    "user": {"userId": "amzn1.ask.account.CONTEXT_USER"},
                    "device": {"deviceId": "amzn1.ask.device.D1", "supportedInterfaces": {}}
                }
            },
            "request": request
        })
        .to_string()
    }

    fn parse(json: &str) -> Result<SkillRequest, EnvelopeError> {
        SkillRequest::try_from(RequestEnvelope::from_json(json)?)
    }

    #[test]
    fn parses_launch_request() {
        let json = envelope(
            json!({"type": "LaunchRequest", "requestId": "r1", "locale": "en-US"}),
            json!({}),
        );
        let request = parse(&json).unwrap();

        assert_eq!(request.event, SkillEvent::Launch);
        assert_eq!(request.context.request_id, "r1");
        assert_eq!(request.context.locale.as_deref(), Some("en-US"));
        assert_eq!(request.context.session_state, None);
        assert_eq!(
            request.context.device_id.as_ref().map(|d| d.as_str()),
            Some("amzn1.ask.device.D1")
        );
    }

    #[test]
    fn context_user_takes_precedence_over_session_user() {
        let json = envelope(json!({"type": "LaunchRequest", "requestId": "r1"}), json!({}));
        let request = parse(&json).unwrap();
        assert_eq!(request.context.user_id.as_str(), "amzn1.ask.account.CONTEXT_USER");
    }

    #[test]
    fn parses_intent_with_filled_and_empty_slots() {
        let json = envelope(
            json!({
                "type": "IntentRequest",
                "requestId": "r2",
                "intent": {
                    "name": "FactNumberIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "fact_number": {"name": "fact_number", "value": "3"},
                        "unused": {"name": "unused"}
                    }
                }
            }),
            json!({"times_played": 1, "facts_index": 0}),
        );
        let request = parse(&json).unwrap();

        let intent = request.event.intent().unwrap();
        assert_eq!(intent.name, IntentName::FactNumber);
        assert_eq!(intent.slot(FACT_NUMBER_SLOT), Some("3"));
        assert_eq!(intent.slot("unused"), None);

        let state = request.context.session_state.unwrap();
        assert_eq!(state.times_played(), 1);
        assert_eq!(state.facts_index().value(), 0);
    }

    #[test]
    fn parses_session_ended_reason() {
        let json = envelope(
            json!({
                "type": "SessionEndedRequest",
                "requestId": "r3",
                "reason": "EXCEEDED_MAX_REPROMPTS"
            }),
            json!(null),
        );
        let request = parse(&json).unwrap();
        assert_eq!(
            request.event,
            SkillEvent::SessionEnded(SessionEndedReason::ExceededMaxReprompts)
        );
    }

    #[test]
    fn rejects_unsupported_request_type() {
        let json = envelope(
            json!({"type": "AudioPlayer.PlaybackStarted", "requestId": "r4"}),
            json!({}),
        );
        assert!(matches!(
            parse(&json),
            Err(EnvelopeError::UnsupportedRequestType(t)) if t == "AudioPlayer.PlaybackStarted"
        ));
    }

    #[test]
    fn rejects_out_of_range_session_attributes() {
        let json = envelope(
            json!({
                "type": "IntentRequest",
                "requestId": "r5",
                "intent": {"name": "AMAZON.YesIntent"}
            }),
            json!({"times_played": 0, "facts_index": 12}),
        );
        assert!(matches!(
            parse(&json),
            Err(EnvelopeError::InvalidSessionAttributes(_))
        ));
    }

    #[test]
    fn rejects_envelope_without_user() {
        let json = json!({
            "session": {"new": true, "sessionId": "s1"},
            "request": {"type": "LaunchRequest", "requestId": "r6"}
        })
        .to_string();
        assert!(matches!(parse(&json), Err(EnvelopeError::MissingUserId)));
    }

    #[test]
    fn rejects_envelope_without_session() {
        let json = json!({
            "context": {"System": {"user": {"userId": "u1"}}},
            "request": {"type": "LaunchRequest", "requestId": "r7"}
        })
        .to_string();
        assert!(matches!(parse(&json), Err(EnvelopeError::MissingSession)));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            RequestEnvelope::from_json("{not json"),
            Err(EnvelopeError::MalformedJson(_))
        ));
    }
}
