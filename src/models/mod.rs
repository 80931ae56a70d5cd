pub mod common;
pub mod player;
pub mod matches;
pub mod match_player;
pub mod stats;
