//! # Data Transfer Objects

pub mod home_board_view;
pub mod load_state;

pub use home_board_view::{HomeBoardView, RollMode, StudentRow};
pub use load_state::LoadState;
