//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    common::time::get_jst_timestamp,
    domain::{ClientId, GameSnapshot, RegistryError, Timestamp},
    infrastructure::dto::websocket::{
        ClientMessage, ErrorMessage, GameStateMessage, NotificationMessage,
    },
    ui::state::{AppState, ConnectQuery},
    usecase::{
        CreateRoomUseCase, DisconnectOutcome, DisconnectPlayerUseCase, JoinRoomUseCase,
        SubmitMoveUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let client_id_str = query.client_id;

    // Convert String -> ClientId (Domain Model)
    let client_id = match ClientId::try_from(client_id_str.clone()) {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("Invalid client_id format: '{}'", client_id_str);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connected_at = Timestamp::new(get_jst_timestamp());

    match state
        .registry
        .register_client(client_id.clone(), tx, connected_at)
        .await
    {
        Ok(()) => {
            tracing::info!("Client '{}' connected and registered", client_id_str);
            Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, client_id, rx)))
        }
        Err(RegistryError::DuplicateClientId(_)) => {
            tracing::warn!(
                "Client with ID '{}' is already connected. Rejecting connection.",
                client_id_str
            );
            Err(StatusCode::CONFLICT)
        }
    }
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    client_id: ClientId,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    let (mut sender, mut receiver) = socket.split();

    let recv_state = state.clone();
    let recv_client_id = client_id.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_message(&recv_state, &recv_client_id, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", recv_client_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to receive messages for this client and push them out
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Use DisconnectPlayerUseCase to handle disconnection
    let disconnect_usecase = DisconnectPlayerUseCase::new(state.registry.clone());

    match disconnect_usecase.execute(&client_id).await {
        DisconnectOutcome::NotInRoom => {
            tracing::debug!("Client '{}' left no room behind", client_id);
        }
        DisconnectOutcome::RoomClosed { room_code } => {
            tracing::info!("Client '{}' left; room {} closed", client_id, room_code);
        }
        DisconnectOutcome::OpponentWins { winner, snapshot } => {
            tracing::info!(
                "Client '{}' disconnected mid-game; {:?} wins by default",
                client_id,
                winner
            );

            // One-shot notification to the remaining player, then the
            // terminal state broadcast
            let note = NotificationMessage::new("Opponent disconnected. You win!");
            let note_json = serde_json::to_string(&note).unwrap();
            for seat in &snapshot.seats {
                if let Some(tx) = state.registry.sender_for(&seat.client_id).await
                    && tx.send(note_json.clone()).is_err()
                {
                    tracing::warn!("Failed to send notification to client '{}'", seat.client_id);
                }
            }
            broadcast_game_state(&state, &snapshot).await;
        }
        DisconnectOutcome::AlreadyOver { .. } => {
            // Departure from a finished game changes nothing the remaining
            // player needs to hear about
            tracing::debug!("Client '{}' left a finished game", client_id);
        }
    }

    tracing::info!("Client '{}' disconnected and removed from registry", client_id);
}

async fn handle_client_message(state: &Arc<AppState>, client_id: &ClientId, text: &str) {
    tracing::info!("Received text: {}", text);

    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Failed to parse message as JSON: {}", e);
            return;
        }
    };

    match msg {
        ClientMessage::CreateRoom => {
            let usecase = CreateRoomUseCase::new(state.registry.clone());
            match usecase.execute(client_id.clone()).await {
                Ok(snapshot) => broadcast_game_state(state, &snapshot).await,
                Err(e) => {
                    tracing::warn!("Failed to create room for '{}': {}", client_id, e);
                }
            }
        }
        ClientMessage::JoinRoom { room_code } => {
            let usecase = JoinRoomUseCase::new(state.registry.clone());
            match usecase.execute(client_id.clone(), &room_code).await {
                Ok(snapshot) => broadcast_game_state(state, &snapshot).await,
                Err(e) => {
                    // Room-not-found and room-full go to the requester only
                    tracing::warn!("Client '{}' could not join '{}': {}", client_id, room_code, e);
                    send_error(state, client_id, &e.to_string()).await;
                }
            }
        }
        ClientMessage::SubmitMove {
            room_code,
            row,
            col,
            mark,
        } => {
            let usecase = SubmitMoveUseCase::new(state.registry.clone());
            match usecase
                .execute(client_id, &room_code, row, col, mark)
                .await
            {
                Ok(snapshot) => broadcast_game_state(state, &snapshot).await,
                Err(e) => {
                    // Rejected moves are silent: no broadcast, no error reply
                    tracing::debug!("Rejected move from '{}': {}", client_id, e);
                }
            }
        }
    }
}

/// Send the game state to every seated player of the room, with each
/// recipient's own role filled in.
async fn broadcast_game_state(state: &Arc<AppState>, snapshot: &GameSnapshot) {
    for seat in &snapshot.seats {
        let msg = GameStateMessage::from_snapshot(snapshot, Some(seat.role));
        let json = serde_json::to_string(&msg).unwrap();
        if let Some(tx) = state.registry.sender_for(&seat.client_id).await
            && tx.send(json).is_err()
        {
            tracing::warn!("Failed to send game state to client '{}'", seat.client_id);
        }
    }
}

/// Report an error to the originating connection only.
async fn send_error(state: &Arc<AppState>, client_id: &ClientId, message: &str) {
    let err = ErrorMessage::new(message);
    let json = serde_json::to_string(&err).unwrap();
    if let Some(tx) = state.registry.sender_for(client_id).await
        && tx.send(json).is_err()
    {
        tracing::warn!("Failed to send error to client '{}'", client_id);
    }
}
