//! Ports: trait boundaries between the application core and adapters.

mod chat_turn_repository;
mod profile_reader;
mod token_verifier;

pub use chat_turn_repository::ChatTurnRepository;
pub use profile_reader::ProfileReader;
pub use token_verifier::TokenVerifier;
