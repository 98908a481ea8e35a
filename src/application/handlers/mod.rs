//! Command and query handlers.

pub mod get_chat_history;
pub mod process_message;

pub use get_chat_history::{GetChatHistoryError, GetChatHistoryHandler, GetChatHistoryQuery};
pub use process_message::{
    ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler, ProcessMessageResult,
};
