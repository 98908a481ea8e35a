//! Chat records exchanged with the external collaborators.

mod profile;
mod turn;

pub use profile::CallerProfile;
pub use turn::{ChatTurn, GREETING_SENTINEL};
