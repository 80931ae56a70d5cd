pub mod helpers;
pub mod includes;
pub mod match_queries;
pub mod player_queries;
