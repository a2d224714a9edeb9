use std::time::Duration;

use serde::Serialize;

use crate::portal::simulation::simulate_latency;

/// Canned bot turn: text plus the quick-reply buttons offered under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotMessage {
    pub content: String,
    pub options: Vec<String>,
}

impl BotMessage {
    fn new(content: &str, options: &[&str]) -> Self {
        Self {
            content: content.to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
        }
    }
}

/// Topic recognised in a chat message, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    NewConnection,
    Tracking,
    SampleIds,
    Login,
    General,
}

impl Intent {
    /// First rule whose keywords appear in the lower-cased text wins.
    pub fn classify(text: &str) -> Self {
        const RULES: [(Intent, &[&str]); 4] = [
            (Intent::NewConnection, &["new connection", "apply"]),
            (Intent::Tracking, &["track", "status"]),
            (Intent::SampleIds, &["sample"]),
            (Intent::Login, &["login"]),
        ];

        let lowered = text.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }

    pub fn reply(self) -> BotMessage {
        match self {
            Intent::NewConnection => BotMessage::new(
                "Great! To apply for a new water connection, I'll need some information:\n\n1. Property details (address, property ID)\n2. Owner information\n3. Connection type (Residential/Commercial)\n4. Required documents\n\nWould you like to:\n• Start the application process (requires login)\n• Know about required documents\n• Check eligibility criteria",
                &[
                    "Start Application (Login Required)",
                    "Required Documents",
                    "Eligibility Criteria",
                ],
            ),
            Intent::Tracking => BotMessage::new(
                "You can track your application or grievance status by entering your Tracking ID.\n\nTracking ID formats:\n• APP-YYYY-XXX (Logged-in user applications)\n• WNC-YYYY-XXXXXX (First water connection)\n• GRV-YYYY-XXX (Grievances)\n\nWould you like to track now?",
                &["Track Application", "Sample Tracking IDs"],
            ),
            Intent::SampleIds => BotMessage::new(
                "Sample Tracking IDs for testing:\n\n• APP-2025-001 (Under Review)\n• APP-2025-002 (Approved)\n• WNC-2025-180652 (First Connection - Under Review)\n• GRV-2025-023 (Grievance - In Progress)\n\nTry tracking any of these!",
                &[
                    "Track APP-2025-001",
                    "Track WNC-2025-180652",
                    "Track GRV-2025-023",
                ],
            ),
            Intent::Login => BotMessage::new(
                "🔐 To proceed, please login using:\n\n• Mobile Number + OTP\n• Consumer ID + OTP\n\nNo password required!",
                &["Go to Login Page"],
            ),
            Intent::General => BotMessage::new(
                "I can help you with:\n\n• New water connections\n• Bill payments\n• Application tracking\n• Meter readings\n• Grievances\n\nWhat would you like to know more about?",
                &["New Connection", "Pay Bills", "Track Application"],
            ),
        }
    }
}

/// Opening message shown when the chat window opens.
pub fn greeting() -> BotMessage {
    BotMessage::new(
        "👋 Hello! I'm your Water Services Assistant. I can help you with:\n\n• Apply for new water connection\n• Pay your water bills\n• Track application status\n• Submit meter readings\n• Raise grievances\n• General queries\n\nHow can I assist you today?",
        &[
            "Apply for New Connection",
            "Pay Bills",
            "Track Application",
            "Submit Meter Reading",
            "Raise Grievance",
            "General Query",
        ],
    )
}

/// Blank input gets no reply.
pub fn respond(text: &str) -> Option<BotMessage> {
    if text.trim().is_empty() {
        return None;
    }
    Some(Intent::classify(text).reply())
}

/// Side effect requested of the presentation layer after a quick-reply click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantAction {
    None,
    NavigateToLogin,
    OpenTracking { prefill: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub message: Option<BotMessage>,
    pub action: AssistantAction,
}

const TRACKABLE_PREFIXES: [&str; 3] = ["APP-", "WNC-", "GRV-"];

/// A quick-reply click is echoed as a chat message, then may trigger an action.
pub fn select_option(option: &str) -> AssistantReply {
    let message = respond(option);
    let option = option.trim();

    let action = if option == "Go to Login Page" || option.contains("Login Required") {
        AssistantAction::NavigateToLogin
    } else if option == "Track Application" {
        AssistantAction::OpenTracking { prefill: None }
    } else if let Some(id) = option
        .strip_prefix("Track ")
        .filter(|id| TRACKABLE_PREFIXES.iter().any(|prefix| id.starts_with(prefix)))
    {
        AssistantAction::OpenTracking {
            prefill: Some(id.to_string()),
        }
    } else {
        AssistantAction::None
    };

    AssistantReply { message, action }
}

/// Chat front end that pauses before each bot turn.
#[derive(Debug, Clone, Default)]
pub struct ChatAssistant {
    reply_delay: Duration,
}

impl ChatAssistant {
    pub fn new(reply_delay: Duration) -> Self {
        Self { reply_delay }
    }

    pub fn greeting(&self) -> BotMessage {
        greeting()
    }

    pub async fn send(&self, text: &str) -> Option<BotMessage> {
        let reply = respond(text)?;
        simulate_latency(self.reply_delay).await;
        Some(reply)
    }

    pub async fn choose(&self, option: &str) -> AssistantReply {
        let reply = select_option(option);
        if reply.message.is_some() {
            simulate_latency(self.reply_delay).await;
        }
        tracing::debug!(option, action = ?reply.action, "assistant option selected");
        reply
    }
}
