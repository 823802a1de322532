use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One logged conversational exchange, as posted by the chat frontend.
///
/// Every field is required. No semantic checks are made: the timestamp is
/// not parsed, `chatId` is not checked for uniqueness and `thinkingTime` is
/// kept as the caller formatted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    /// Caller-supplied time of the exchange.
    pub timestamp: String,
    /// Conversation identifier.
    pub chat_id: i64,
    pub user_message: String,
    /// The model's reasoning trace.
    pub bot_reasoning: String,
    pub bot_response: String,
    /// Thinking duration in seconds, pre-formatted by the caller.
    pub thinking_time: String,
}

/// Response body for `POST /save-record`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveRecordResponse {
    pub status: String,
}

impl SaveRecordResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_fields() {
        let record: ChatRecord = serde_json::from_value(json!({
            "timestamp": "2024-01-01T00:00:00",
            "chatId": 7,
            "userMessage": "hi",
            "botReasoning": "greet user",
            "botResponse": "hello",
            "thinkingTime": "0.5",
            "extra": "ignored",
        }))
        .unwrap();
        assert_eq!(record.chat_id, 7);
        assert_eq!(record.bot_reasoning, "greet user");
    }

    #[test]
    fn rejects_string_chat_id() {
        let res = serde_json::from_value::<ChatRecord>(json!({
            "timestamp": "t",
            "chatId": "7",
            "userMessage": "hi",
            "botReasoning": "r",
            "botResponse": "b",
            "thinkingTime": "1",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn rejects_null_field() {
        let res = serde_json::from_value::<ChatRecord>(json!({
            "timestamp": "t",
            "chatId": 1,
            "userMessage": null,
            "botReasoning": "r",
            "botResponse": "b",
            "thinkingTime": "1",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn success_response_shape() {
        let body = serde_json::to_value(SaveRecordResponse::success()).unwrap();
        assert_eq!(body, json!({ "status": "success" }));
    }
}
