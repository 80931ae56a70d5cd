use reqwest::{Client, StatusCode};
use serde_json::json;

mod common;
use common::foosball_helpers::{audit, count_rows, counters, create_match, create_player, get_player, white_vs_black};
use common::utils::spawn_app;

#[tokio::test]
async fn recording_a_match_updates_both_teams_counters() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;
    let bob = create_player(&test_app, &client, "Bob").await;

    let created = create_match(&test_app, &client, &json!({
        "whiteTeamScore": 5,
        "blackTeamScore": 2,
        "players": [
            { "playerId": alice, "team": true, "gamellesScored": 2 },
            { "playerId": bob, "team": false, "ownGoalsScored": 1 }
        ]
    })).await;

    assert_eq!(created["whiteTeamScore"], 5);
    assert_eq!(created["blackTeamScore"], 2);
    let participants = created["players"].as_array().expect("players should be a list");
    assert_eq!(participants.len(), 2);
    assert!(participants.iter().all(|p| p["player"]["name"].is_string()));

    let alice_after = get_player(&test_app, &client, alice).await;
    assert_eq!(counters(&alice_after), [5, 2, 0, 0, 2, 0, 0]);

    let bob_after = get_player(&test_app, &client, bob).await;
    assert_eq!(counters(&bob_after), [0, 0, 2, 5, 0, 1, 0]);

    // Player endpoint lists the match it took part in
    let alice_matches = alice_after["matches"].as_array().unwrap();
    assert_eq!(alice_matches.len(), 1);
    assert_eq!(alice_matches[0]["match"]["id"], created["id"]);
    assert_eq!(alice_matches[0]["team"], true);
}

#[tokio::test]
async fn deleting_a_match_restores_counters_and_removes_rows() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;
    let bob = create_player(&test_app, &client, "Bob").await;

    let created = create_match(&test_app, &client, &json!({
        "whiteTeamScore": 5,
        "blackTeamScore": 2,
        "players": [
            { "playerId": alice, "team": true, "gamellesScored": 2, "isPlayerOfTheMatch": true },
            { "playerId": bob, "team": false, "ownGoalsScored": 1 }
        ]
    })).await;
    let match_id = created["id"].as_i64().unwrap();

    assert_eq!(counters(&get_player(&test_app, &client, alice).await)[6], 1, "POTM should be counted");

    let response = client
        .delete(test_app.api(&format!("/matches/{}", match_id)))
        .send()
        .await
        .expect("Failed to delete match");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(counters(&get_player(&test_app, &client, alice).await), [0; 7]);
    assert_eq!(counters(&get_player(&test_app, &client, bob).await), [0; 7]);
    assert_eq!(count_rows(&test_app, "matches").await, 0);
    assert_eq!(count_rows(&test_app, "match_players").await, 0);

    let response = client
        .get(test_app.api(&format!("/matches/{}", match_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reversing_one_match_leaves_other_matches_intact() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;
    let bob = create_player(&test_app, &client, "Bob").await;

    create_match(&test_app, &client, &white_vs_black(10, 7, alice, bob)).await;
    let before = counters(&get_player(&test_app, &client, alice).await);

    let second = create_match(&test_app, &client, &white_vs_black(3, 10, bob, alice)).await;
    client
        .delete(test_app.api(&format!("/matches/{}", second["id"])))
        .send()
        .await
        .expect("Failed to delete match");

    assert_eq!(counters(&get_player(&test_app, &client, alice).await), before);
    assert_eq!(audit(&test_app, &client).await["drifted"], json!([]));
}

#[tokio::test]
async fn string_score_is_rejected_without_writes() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;

    let response = client
        .post(test_app.api("/matches"))
        .json(&json!({
            "whiteTeamScore": "3",
            "blackTeamScore": 1,
            "players": [{ "playerId": alice, "team": true }]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    assert_eq!(count_rows(&test_app, "matches").await, 0);
    assert_eq!(count_rows(&test_app, "match_players").await, 0);
    assert_eq!(counters(&get_player(&test_app, &client, alice).await), [0; 7]);
}

#[tokio::test]
async fn invalid_match_payloads_are_bad_requests() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;

    let payloads = vec![
        (json!({ "whiteTeamScore": 1, "blackTeamScore": 0, "players": [] }), "empty players"),
        (json!({ "whiteTeamScore": 1, "blackTeamScore": 0 }), "missing players"),
        (json!({ "whiteTeamScore": 1, "blackTeamScore": 0, "players": "Alice" }), "players not a list"),
        (json!({ "blackTeamScore": 0, "players": [{ "playerId": alice, "team": true }] }), "missing score"),
        (json!({ "whiteTeamScore": -1, "blackTeamScore": 0, "players": [{ "playerId": alice, "team": true }] }), "negative score"),
        (json!({
            "whiteTeamScore": 1,
            "blackTeamScore": 0,
            "players": [{ "playerId": alice, "team": true }, { "playerId": alice, "team": false }]
        }), "duplicate player"),
    ];

    for (payload, description) in payloads {
        let response = client
            .post(test_app.api("/matches"))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Expected 400 for {}",
            description
        );
    }

    assert_eq!(count_rows(&test_app, "matches").await, 0);
}

#[tokio::test]
async fn unknown_player_rolls_back_the_whole_match() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;

    let response = client
        .post(test_app.api("/matches"))
        .json(&white_vs_black(4, 1, alice, 999_999))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&test_app, "matches").await, 0);
    assert_eq!(counters(&get_player(&test_app, &client, alice).await), [0; 7]);
}

#[tokio::test]
async fn deleting_unknown_match_is_not_found() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;
    let bob = create_player(&test_app, &client, "Bob").await;
    create_match(&test_app, &client, &white_vs_black(2, 2, alice, bob)).await;

    let response = client
        .delete(test_app.api("/matches/424242"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Match not found");

    assert_eq!(count_rows(&test_app, "matches").await, 1);
    assert_eq!(counters(&get_player(&test_app, &client, alice).await), [2, 2, 0, 0, 0, 0, 0]);
}

#[tokio::test]
async fn non_numeric_match_id_is_a_bad_request() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .delete(test_app.api("/matches/abc"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn match_date_defaults_to_now_and_accepts_datetime_local() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;

    let mut body = white_vs_black(1, 0, alice, alice);
    body["players"] = json!([{ "playerId": alice, "team": true }]);
    let defaulted = create_match(&test_app, &client, &body).await;
    assert!(defaulted["date"].is_string());

    body["date"] = json!("2025-10-16T18:30");
    let dated = create_match(&test_app, &client, &body).await;
    assert!(dated["date"].as_str().unwrap().starts_with("2025-10-16T18:30:00"));
}

#[tokio::test]
async fn editing_match_scores_moves_counters_by_the_difference() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;
    let bob = create_player(&test_app, &client, "Bob").await;
    let created = create_match(&test_app, &client, &white_vs_black(10, 4, alice, bob)).await;

    let response = client
        .put(test_app.api(&format!("/matches/{}", created["id"])))
        .json(&json!({ "blackTeamScore": 8 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["blackTeamScore"], 8);
    assert_eq!(updated["whiteTeamScore"], 10);

    assert_eq!(counters(&get_player(&test_app, &client, alice).await), [10, 8, 0, 0, 0, 0, 0]);
    assert_eq!(counters(&get_player(&test_app, &client, bob).await), [0, 0, 8, 10, 0, 0, 0]);
    assert_eq!(audit(&test_app, &client).await["drifted"], json!([]));

    // Counter fields are not part of a match update
    let response = client
        .put(test_app.api(&format!("/matches/{}", created["id"])))
        .json(&json!({ "goalsScoredWhite": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn concurrent_record_and_delete_on_the_same_players_both_succeed() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let alice = create_player(&test_app, &client, "Alice").await;
    let bob = create_player(&test_app, &client, "Bob").await;

    // Bob (higher id) on white, so the delete walks the rows in team order
    let first = create_match(&test_app, &client, &white_vs_black(10, 4, bob, alice)).await;
    let mut to_delete = first["id"].as_i64().unwrap();

    for round in 0..20 {
        let delete = client
            .delete(test_app.api(&format!("/matches/{}", to_delete)))
            .send();
        let record = client
            .post(test_app.api("/matches"))
            .json(&white_vs_black(10, round, alice, bob))
            .send();
        let (deleted, recorded) = tokio::join!(delete, record);

        let deleted = deleted.expect("Failed to delete match");
        let recorded = recorded.expect("Failed to create match");
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT, "Delete failed in round {}", round);
        assert_eq!(recorded.status(), StatusCode::CREATED, "Create failed in round {}", round);

        // Next round deletes a match with the higher id on white again
        let next = create_match(&test_app, &client, &white_vs_black(10, 4, bob, alice)).await;
        to_delete = next["id"].as_i64().unwrap();
    }

    let report = audit(&test_app, &client).await;
    assert_eq!(report["drifted"], json!([]));
}
