//! Small HTTP proxy returning a player's ranked solo/duo standing from the
//! Riot API while keeping the API key on the server.

pub mod config;
pub mod error;
pub mod logging;
pub mod rank;
pub mod riot;
pub mod server;
