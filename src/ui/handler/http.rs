//! HTTP API endpoint handlers.
//!
//! Read-only observability endpoints next to the WebSocket route; they
//! never mutate sessions.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    common::time::timestamp_to_jst_rfc3339,
    domain::{Outcome, Role, RoomCode},
    infrastructure::dto::http::{PlayerDetailDto, RoomDetailDto, RoomSummaryDto, ScoresDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of live rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let snapshots = state.registry.snapshots().await;

    let summaries = snapshots
        .iter()
        .map(|snapshot| RoomSummaryDto {
            room_code: snapshot.room_code.as_str().to_string(),
            players_connected: snapshot.players_connected(),
            game_over: snapshot.terminal,
            created_at: timestamp_to_jst_rfc3339(snapshot.created_at.value()),
        })
        .collect();

    Json(summaries)
}

/// Get room detail by code
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_code = RoomCode::new(room_code).map_err(|_| StatusCode::NOT_FOUND)?;
    let session = state
        .registry
        .get_session(&room_code)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    let snapshot = session.lock().await.snapshot();

    let detail = RoomDetailDto {
        room_code: snapshot.room_code.as_str().to_string(),
        board_size: snapshot.board_size,
        players: snapshot
            .seats
            .iter()
            .map(|seat| PlayerDetailDto {
                client_id: seat.client_id.as_str().to_string(),
                role: role_str(seat.role).to_string(),
            })
            .collect(),
        turn: role_str(snapshot.turn).to_string(),
        scores: ScoresDto {
            first: snapshot.scores.first,
            second: snapshot.scores.second,
        },
        game_over: snapshot.terminal,
        winner: snapshot.outcome.map(|outcome| outcome_str(outcome).to_string()),
        created_at: timestamp_to_jst_rfc3339(snapshot.created_at.value()),
    };

    Ok(Json(detail))
}

fn role_str(role: Role) -> &'static str {
    match role {
        Role::First => "first",
        Role::Second => "second",
    }
}

fn outcome_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstWins => "first-wins",
        Outcome::SecondWins => "second-wins",
        Outcome::Draw => "draw",
    }
}
