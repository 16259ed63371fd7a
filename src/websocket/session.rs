use std::sync::Arc;

use tokio::{
    sync::mpsc,
    time::{self, Instant, MissedTickBehavior},
};
use uuid::Uuid;

use crate::{
    game::GameEngine,
    models::{GameEvent, GamePhase},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};

/// Runs one player's game until the command channel closes or the client
/// stops listening.
///
/// The actor is the only owner of its engine: client commands and timer ticks
/// are interleaved by a single `select!` loop, so engine calls never overlap.
pub async fn run_session(
    state: Arc<AppState>,
    session_id: Uuid,
    mut commands: mpsc::Receiver<ClientMessage>,
    tx: mpsc::Sender<ServerMessage>,
) {
    let (event_tx, mut events) = mpsc::unbounded_channel::<GameEvent>();
    let mut engine = state.create_engine();
    engine.subscribe(move |event: &GameEvent| {
        let _ = event_tx.send(event.clone());
    });

    let period = state.config.game.tick_interval();
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    engine.new_game();
    if tx.send(ServerMessage::Welcome { session_id }).await.is_err() {
        return;
    }

    loop {
        // Drain notifications raised by the previous step, then publish state
        while let Ok(event) = events.try_recv() {
            if let Some(message) = ServerMessage::from_event(&event) {
                if tx.send(message).await.is_err() {
                    return;
                }
            }
        }
        record_progress(&state, session_id, &engine);
        let snapshot = engine.snapshot();
        if tx.send(ServerMessage::State { snapshot }).await.is_err() {
            return;
        }

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                if matches!(command, ClientMessage::NewGame) {
                    ticker.reset();
                }
                if let Some(rejection) = apply_command(&mut engine, command) {
                    if tx.send(rejection).await.is_err() {
                        return;
                    }
                }
            }
            _ = ticker.tick(), if engine.phase() == GamePhase::Running => {
                engine.tick();
            }
        }
    }

    tracing::debug!("Session {} command stream closed", session_id);
}

/// Apply one client command; returns a message when a submission is refused
fn apply_command(engine: &mut GameEngine, command: ClientMessage) -> Option<ServerMessage> {
    match command {
        ClientMessage::NewGame => engine.new_game(),
        ClientMessage::Stage { tile_id } => {
            engine.move_to_staged(tile_id);
        }
        ClientMessage::Unstage { tile_id } => {
            engine.move_to_available(tile_id);
        }
        ClientMessage::Submit => {
            let word = engine.candidate_word();
            if engine.submit().is_none() {
                return Some(ServerMessage::InvalidWord {
                    reason: rejection_reason(engine, &word).to_string(),
                    word,
                });
            }
        }
    }

    None
}

fn rejection_reason(engine: &GameEngine, word: &str) -> &'static str {
    if engine.phase() != GamePhase::Running {
        "game is not running"
    } else if word.is_empty() {
        "no tiles staged"
    } else if engine.used_words().contains(word) {
        "word already played"
    } else {
        "not in dictionary"
    }
}

fn record_progress(state: &AppState, session_id: Uuid, engine: &GameEngine) {
    if let Some(mut info) = state.sessions.get_mut(&session_id) {
        info.score = engine.score();
        info.is_over = engine.is_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, dictionary::Dictionary, models::GameSnapshot, SessionInfo};
    use std::time::Duration;

    fn test_state(starting_seconds: u32, tick_interval_ms: u64) -> Arc<AppState> {
        let mut config = Config::default();
        config.game.starting_seconds = starting_seconds;
        config.game.tick_interval_ms = tick_interval_ms;
        config.game.letter_seed = Some(11);

        // Every single letter is a word, so any one staged tile can be played
        let letters: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
        Arc::new(AppState::new(config, Dictionary::from_words(letters)))
    }

    fn spawn_session(
        state: Arc<AppState>,
    ) -> (Uuid, mpsc::Sender<ClientMessage>, mpsc::Receiver<ServerMessage>) {
        let session_id = Uuid::new_v4();
        state.sessions.insert(session_id, SessionInfo::new(session_id));
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(run_session(state, session_id, cmd_rx, tx));
        (session_id, cmd_tx, rx)
    }

    async fn next(rx: &mut mpsc::Receiver<ServerMessage>) -> ServerMessage {
        time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for server message")
            .expect("session ended")
    }

    async fn next_state(rx: &mut mpsc::Receiver<ServerMessage>) -> GameSnapshot {
        loop {
            if let ServerMessage::State { snapshot } = next(rx).await {
                return snapshot;
            }
        }
    }

    #[tokio::test]
    async fn test_session_deals_on_connect() {
        let (session_id, _cmd_tx, mut rx) = spawn_session(test_state(30, 60_000));

        match next(&mut rx).await {
            ServerMessage::Welcome { session_id: id } => assert_eq!(id, session_id),
            other => panic!("Expected welcome, got {:?}", other),
        }
        let snapshot = next_state(&mut rx).await;
        assert_eq!(snapshot.available.len(), 9);
        assert_eq!(snapshot.seconds_remaining, 30);
        assert_eq!(snapshot.phase, GamePhase::Running);
    }

    #[tokio::test]
    async fn test_stage_and_submit_single_letter() {
        let state = test_state(30, 60_000);
        let (session_id, cmd_tx, mut rx) = spawn_session(state.clone());
        let snapshot = next_state(&mut rx).await;

        let tile_id = snapshot.available[0].id();
        cmd_tx.send(ClientMessage::Stage { tile_id }).await.unwrap();
        let snapshot = next_state(&mut rx).await;
        assert_eq!(snapshot.staged.len(), 1);
        assert!(snapshot.candidate_valid);
        assert!(snapshot.can_submit);

        cmd_tx.send(ClientMessage::Submit).await.unwrap();
        match next(&mut rx).await {
            ServerMessage::WordAccepted {
                points,
                bonus_seconds,
                score,
                ..
            } => {
                assert_eq!(points, 1);
                assert_eq!(bonus_seconds, 2);
                assert_eq!(score, 1);
            }
            other => panic!("Expected word_accepted, got {:?}", other),
        }
        let snapshot = next_state(&mut rx).await;
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.seconds_remaining, 32);
        assert!(snapshot.staged.is_empty());
        assert_eq!(state.sessions.get(&session_id).unwrap().score, 1);
    }

    #[tokio::test]
    async fn test_empty_submit_is_rejected() {
        let (_, cmd_tx, mut rx) = spawn_session(test_state(30, 60_000));
        next_state(&mut rx).await;

        cmd_tx.send(ClientMessage::Submit).await.unwrap();
        match next(&mut rx).await {
            ServerMessage::InvalidWord { word, reason } => {
                assert!(word.is_empty());
                assert_eq!(reason, "no tiles staged");
            }
            other => panic!("Expected invalid_word, got {:?}", other),
        }
        assert_eq!(next_state(&mut rx).await.score, 0);
    }

    #[tokio::test]
    async fn test_clock_runs_out() {
        let state = test_state(1, 10);
        let (session_id, _cmd_tx, mut rx) = spawn_session(state.clone());

        let final_score = loop {
            if let ServerMessage::GameOver { score } = next(&mut rx).await {
                break score;
            }
        };
        assert_eq!(final_score, 0);

        let snapshot = next_state(&mut rx).await;
        assert!(snapshot.is_over);
        assert!(!snapshot.can_submit);
        assert_eq!(snapshot.seconds_remaining, 0);
        assert!(state.sessions.get(&session_id).unwrap().is_over);
    }

    #[tokio::test]
    async fn test_new_game_after_game_over() {
        let (_, cmd_tx, mut rx) = spawn_session(test_state(0, 10));
        loop {
            if let ServerMessage::GameOver { .. } = next(&mut rx).await {
                break;
            }
        }
        next_state(&mut rx).await;

        cmd_tx.send(ClientMessage::NewGame).await.unwrap();
        let snapshot = next_state(&mut rx).await;
        assert!(!snapshot.is_over);
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert!(snapshot.used_words.is_empty());
    }
}
