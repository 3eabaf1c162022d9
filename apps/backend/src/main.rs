use std::sync::Arc;

use hanabi_backend::config::load_settings;
use hanabi_backend::realtime::{ChannelHub, ClientMsg};
use hanabi_backend::services::game_flow::{build_session, MoveOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Settings come from HANABI_* variables; see config::env.
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    // Room for every event of an all-automated game.
    let hub = Arc::new(ChannelHub::new(4096));
    let session = match build_session()
        .with_game(settings.game)
        .with_research(settings.research)
        .with_broadcaster(hub.clone())
        .build()
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("❌ Failed to create session ({}): {e}", e.code());
            std::process::exit(2);
        }
    };

    // One JSON line per event on stdout.
    let mut events = hub.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => warn!(error = %e, "could not encode event"),
                },
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "event printer lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut exit_code = 0;
    if let Err(e) = session.start().await {
        error!(code = %e.code(), error = %e, "session aborted");
        exit_code = 1;
    }

    // Human moves arrive as JSON lines on stdin.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while exit_code == 0 && !session.is_terminal() {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ClientMsg>(&line) {
            Ok(ClientMsg::Move { mv }) => match session.submit_move(mv).await {
                Ok(MoveOutcome::Accepted(_)) => {}
                Ok(MoveOutcome::Rejected { reason }) => eprintln!("move rejected: {reason}"),
                Err(e) => {
                    error!(code = %e.code(), error = %e, "session aborted");
                    exit_code = 1;
                }
            },
            Ok(ClientMsg::Shutdown) => break,
            Err(e) => warn!(error = %e, "unreadable client message"),
        }
    }

    if let Err(e) = session.shutdown() {
        error!(code = %e.code(), error = %e, "could not write records");
        exit_code = 1;
    }
    info!(score = ?session.score(), max_score = session.max_score(), "session over");

    drop(session);
    drop(hub);
    if let Err(e) = printer.await {
        warn!(error = %e, "event printer task failed");
    }
    std::process::exit(exit_code);
}
