//! Landing-page chat assistant: ordered keyword rules mapped to canned replies.

pub mod dispatcher;
pub mod router;

pub use dispatcher::{
    greeting, respond, select_option, AssistantAction, AssistantReply, BotMessage, ChatAssistant,
    Intent,
};
pub use router::assistant_router;
