pub mod foosball_helpers;
pub mod utils;
