//! In-memory adapters backing the ports without external services.

mod chat_turn_repository;
mod profile_reader;

pub use chat_turn_repository::InMemoryChatTurnRepository;
pub use profile_reader::InMemoryProfileReader;
