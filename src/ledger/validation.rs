use std::collections::HashSet;

use crate::error::AppError;
use crate::models::match_player::UpdateMatchPlayerRequest;
use crate::models::matches::{CreateMatchRequest, ParticipantInput, UpdateMatchRequest};

/// Presence and range checks run before any write.
pub struct MatchValidator;

impl MatchValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_create_match_request(&self, request: &CreateMatchRequest) -> Result<(), AppError> {
        self.validate_score("whiteTeamScore", request.white_team_score)?;
        self.validate_score("blackTeamScore", request.black_team_score)?;
        self.validate_participants(&request.players)?;
        Ok(())
    }

    pub fn validate_update_match_request(&self, request: &UpdateMatchRequest) -> Result<(), AppError> {
        if let Some(score) = request.white_team_score {
            self.validate_score("whiteTeamScore", score)?;
        }
        if let Some(score) = request.black_team_score {
            self.validate_score("blackTeamScore", score)?;
        }
        Ok(())
    }

    pub fn validate_update_match_player_request(
        &self,
        request: &UpdateMatchPlayerRequest,
    ) -> Result<(), AppError> {
        if let Some(gamelles) = request.gamelles_scored {
            self.validate_score("gamellesScored", gamelles)?;
        }
        if let Some(own_goals) = request.own_goals_scored {
            self.validate_score("ownGoalsScored", own_goals)?;
        }
        Ok(())
    }

    pub fn validate_score(&self, field: &str, value: i32) -> Result<(), AppError> {
        if value < 0 {
            return Err(AppError::validation(format!("{} cannot be negative", field)));
        }
        Ok(())
    }

    /// Non-empty, no player twice, no negative per-match values
    pub fn validate_participants(&self, participants: &[ParticipantInput]) -> Result<(), AppError> {
        if participants.is_empty() {
            return Err(AppError::validation("A match needs at least one player"));
        }

        let mut seen = HashSet::new();
        for participant in participants {
            if !seen.insert(participant.player_id) {
                return Err(AppError::validation(format!(
                    "Player {} is listed more than once",
                    participant.player_id
                )));
            }
            self.validate_score("gamellesScored", participant.gamelles_scored)?;
            self.validate_score("ownGoalsScored", participant.own_goals_scored)?;
        }

        Ok(())
    }
}

impl Default for MatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Names must contain something other than whitespace
pub fn validate_player_name(name: Option<&str>) -> Result<String, AppError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => {
            if trimmed.chars().count() > 255 {
                return Err(AppError::validation("Player name too long (maximum 255 characters)"));
            }
            Ok(trimmed.to_string())
        }
        _ => Err(AppError::validation("Player name is required")),
    }
}
