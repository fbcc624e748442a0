use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::service::chat_relay::ChatTurn;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequestDto {
    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,

    pub budget: Option<i64>,
    pub city: Option<String>,
    pub property_type: Option<String>,

    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseDto {
    pub reply: String,
    /// True when the reply is a canned fallback rather than a model answer.
    pub fallback: bool,
}
