use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::utils::TestApp;

pub async fn create_player(app: &TestApp, client: &Client, name: &str) -> i64 {
    let response = client
        .post(app.api("/players"))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create player");

    assert_eq!(response.status(), StatusCode::CREATED, "Player creation should succeed");
    let body: Value = response.json().await.expect("Failed to parse player");
    body["id"].as_i64().expect("Player has no id")
}

pub async fn get_player(app: &TestApp, client: &Client, player_id: i64) -> Value {
    let response = client
        .get(app.api(&format!("/players/{}", player_id)))
        .send()
        .await
        .expect("Failed to fetch player");

    assert_eq!(response.status(), StatusCode::OK, "Player {} should exist", player_id);
    response.json().await.expect("Failed to parse player")
}

pub async fn create_match(app: &TestApp, client: &Client, body: &Value) -> Value {
    let response = client
        .post(app.api("/matches"))
        .json(body)
        .send()
        .await
        .expect("Failed to create match");

    assert_eq!(response.status(), StatusCode::CREATED, "Match creation should succeed");
    response.json().await.expect("Failed to parse match")
}

/// The seven ledger counters of a player, in a fixed order
pub fn counters(player: &Value) -> [i64; 7] {
    [
        "goalsScoredWhite",
        "goalsConcededWhite",
        "goalsScoredBlack",
        "goalsConcededBlack",
        "gamellesScored",
        "ownGoalsScored",
        "playerOfTheMatch",
    ]
    .map(|key| player[key].as_i64().unwrap_or_else(|| panic!("Missing counter {}", key)))
}

pub async fn audit(app: &TestApp, client: &Client) -> Value {
    let response = client
        .get(app.api("/stats/audit"))
        .send()
        .await
        .expect("Failed to audit");

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse audit report")
}

pub async fn count_rows(app: &TestApp, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count rows")
}

pub fn white_vs_black(white_score: i64, black_score: i64, white: i64, black: i64) -> Value {
    json!({
        "whiteTeamScore": white_score,
        "blackTeamScore": black_score,
        "players": [
            { "playerId": white, "team": true },
            { "playerId": black, "team": false }
        ]
    })
}
