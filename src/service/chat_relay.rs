use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::currency::format_inr;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("chat provider rate limited the request")]
    RateLimited,

    #[error("chat provider rejected the API key (status {0})")]
    Misconfigured(StatusCode),

    #[error("chat provider returned status {0}")]
    Failed(StatusCode),

    #[error("chat provider request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("chat provider returned no usable completion")]
    EmptyCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

impl ChatSender {
    fn label(&self) -> &str {
        match self {
            ChatSender::User => "user",
            ChatSender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: ChatSender,
    pub content: String,
}

/// Per-request context supplied by the caller. The relay keeps no
/// conversation state of its own; the full prior transcript arrives on
/// every call.
#[derive(Debug, Default, Clone)]
pub struct ChatContext {
    pub budget: Option<i64>,
    pub city: Option<String>,
    pub property_type: Option<String>,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Stateless forwarder to the Gemini completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    http: reqwest::Client,
    api_key: String,
}

impl ChatRelay {
    pub fn new(api_key: String) -> Self {
        ChatRelay {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Forward one user message with its context, returning the first
    /// completion's text verbatim.
    pub async fn relay(&self, message: &str, context: &ChatContext) -> Result<String, RelayError> {
        if self.api_key.is_empty() {
            return Err(RelayError::Misconfigured(StatusCode::UNAUTHORIZED));
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: build_system_prompt(context),
                    },
                    Part {
                        text: format!("User message: {}", message),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 1024,
            },
        };

        let response = self
            .http
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => RelayError::RateLimited,
                StatusCode::UNAUTHORIZED | StatusCode::PAYMENT_REQUIRED | StatusCode::FORBIDDEN => {
                    RelayError::Misconfigured(status)
                }
                _ => RelayError::Failed(status),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        extract_completion(payload).ok_or(RelayError::EmptyCompletion)
    }
}

fn extract_completion(payload: GenerateContentResponse) -> Option<String> {
    payload
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
}

/// Canned replies keyed by failure class, so a rate-limited upstream reads
/// differently from a missing API key or a plain outage.
pub fn fallback_message(error: &RelayError) -> &'static str {
    match error {
        RelayError::RateLimited => {
            "I'm experiencing high demand right now. Let me help you with basic guidance:\n\n\
             What are you looking for?\n\
             1. Properties to buy\n\
             2. Properties to rent\n\
             3. Selling your property\n\
             4. Property market information\n\n\
             Please tell me your requirements and I'll do my best to assist!"
        }
        RelayError::Misconfigured(_) => {
            "The assistant isn't fully set up yet, but I can still point you in the right \
             direction: browse the listings page to filter by city, budget and property type, \
             or book a visit directly from any property page."
        }
        _ => {
            "Hello! I'm PropertyBuddy, your Indian real estate assistant.\n\n\
             I can help you with:\n\
             - Finding properties based on your budget and location\n\
             - Understanding property prices and market trends\n\
             - Guidance on buying, selling, or renting\n\
             - Property documentation and legal processes\n\n\
             How can I assist you with your property search today?"
        }
    }
}

/// System instruction for the assistant, with the caller's context embedded.
fn build_system_prompt(context: &ChatContext) -> String {
    let has_context = context.budget.is_some()
        || context.city.is_some()
        || context.property_type.is_some()
        || !context.history.is_empty();

    let context_block = if has_context {
        let transcript = context
            .history
            .iter()
            .map(|turn| format!("{}: {}", turn.sender.label(), turn.content))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Budget: {}\nPreferred City: {}\nProperty Type: {}\nConversation History: {}",
            context
                .budget
                .map(format_inr)
                .unwrap_or_else(|| "Not specified".to_string()),
            context.city.as_deref().unwrap_or("Not specified"),
            context.property_type.as_deref().unwrap_or("Not specified"),
            transcript,
        )
    } else {
        "This is a new conversation".to_string()
    };

    format!(
        "You are PropertyBuddy, an expert Indian real estate assistant dedicated to helping \
         users navigate the Indian property market.\n\n\
         Core Responsibilities:\n\
         - Help users find their perfect property based on their budget, location preferences, and requirements\n\
         - Answer questions about property listings, pricing, localities, and amenities\n\
         - Provide guidance on buying, selling, or renting properties in India\n\
         - Explain real estate processes, documentation, and legal requirements\n\
         - Offer market insights for major Indian cities (Mumbai, Delhi NCR, Bangalore, Pune, Chennai, Hyderabad, etc.)\n\n\
         Key Guidelines:\n\
         - Always use Indian Rupees (₹) and the Indian numbering system (Lakhs, Crores)\n\
         - Consider Indian-specific factors: Vastu, parking, power backup, water supply, society amenities\n\
         - Be conversational, friendly, and patient\n\
         - Ask clarifying questions to better understand user needs\n\
         - Provide practical, actionable advice\n\n\
         Current User Context:\n{}",
        context_block
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_without_context_marks_new_conversation() {
        let prompt = build_system_prompt(&ChatContext::default());
        assert!(prompt.contains("This is a new conversation"));
        assert!(!prompt.contains("Budget:"));
    }

    #[test]
    fn prompt_embeds_budget_city_and_type() {
        let context = ChatContext {
            budget: Some(7500000),
            city: Some("Pune".to_string()),
            property_type: Some("apartment".to_string()),
            history: vec![],
        };
        let prompt = build_system_prompt(&context);
        assert!(prompt.contains("Budget: ₹75,00,000"));
        assert!(prompt.contains("Preferred City: Pune"));
        assert!(prompt.contains("Property Type: apartment"));
    }

    #[test]
    fn prompt_flattens_prior_turns_in_order() {
        let context = ChatContext {
            history: vec![
                ChatTurn {
                    sender: ChatSender::User,
                    content: "Looking for a 2BHK".to_string(),
                },
                ChatTurn {
                    sender: ChatSender::Bot,
                    content: "Which city?".to_string(),
                },
            ],
            ..Default::default()
        };
        let prompt = build_system_prompt(&context);
        let user_pos = prompt.find("user: Looking for a 2BHK").unwrap();
        let bot_pos = prompt.find("bot: Which city?").unwrap();
        assert!(user_pos < bot_pos);
    }

    #[test]
    fn first_candidate_text_is_extracted() {
        let payload = GenerateContentResponse {
            candidates: vec![
                Candidate {
                    content: Some(CandidateContent {
                        parts: vec![Part {
                            text: "First answer".to_string(),
                        }],
                    }),
                },
                Candidate {
                    content: Some(CandidateContent {
                        parts: vec![Part {
                            text: "Second answer".to_string(),
                        }],
                    }),
                },
            ],
        };
        assert_eq!(extract_completion(payload), Some("First answer".to_string()));
    }

    #[test]
    fn empty_or_blank_completions_are_rejected() {
        assert_eq!(extract_completion(GenerateContentResponse { candidates: vec![] }), None);

        let blank = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![Part {
                        text: "   ".to_string(),
                    }],
                }),
            }],
        };
        assert_eq!(extract_completion(blank), None);
    }

    #[test]
    fn fallbacks_differ_by_failure_class() {
        let rate_limited = fallback_message(&RelayError::RateLimited);
        let misconfigured = fallback_message(&RelayError::Misconfigured(StatusCode::UNAUTHORIZED));
        let generic = fallback_message(&RelayError::EmptyCompletion);
        assert_ne!(rate_limited, misconfigured);
        assert_ne!(rate_limited, generic);
        assert_ne!(misconfigured, generic);
    }

    #[tokio::test]
    async fn missing_api_key_is_a_misconfiguration() {
        let relay = ChatRelay::new(String::new());
        let err = relay
            .relay("hello", &ChatContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Misconfigured(_)));
    }
}
