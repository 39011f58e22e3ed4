pub mod config;
mod defaults;
pub mod game;
pub mod identifiers;
pub mod logger;
pub mod replay;
pub mod session;
pub mod version;

pub use identifiers::*;
