//! Headless mode execution

use super::SessionData;
use super::messages::{print_session_exit_success, print_session_shutdown, print_session_starting};
use std::error::Error;

/// Runs the fetch worker without the TUI.
///
/// Refresh events print to stdout as `type [timestamp] message` lines, with
/// visibility following `RUST_LOG`. Ctrl-C broadcasts the same shutdown signal
/// the TUI quit keys do, and worker handles are awaited before exit.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    let ctrl_c_shutdown = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = ctrl_c_shutdown.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown_receiver.recv() => break,
        }
    }

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
