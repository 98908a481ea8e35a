//! PostgreSQL adapters backed by sqlx.

mod chat_turn_repository;
mod profile_reader;

pub use chat_turn_repository::PgChatTurnRepository;
pub use profile_reader::PgProfileReader;
