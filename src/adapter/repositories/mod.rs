//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod api_roll_repository;
pub mod api_roster_repository;

pub use api_roll_repository::ApiRollRepository;
pub use api_roster_repository::ApiRosterRepository;
