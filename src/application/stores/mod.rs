//! # Stores
//!
//! Session Controller が所有する状態ストア
//!
//! - **RosterStore**: 名簿
//! - **RollSessionStore**: 進行中のロール

pub mod roll_session_store;
pub mod roster_store;

pub use roll_session_store::RollSessionStore;
pub use roster_store::RosterStore;
