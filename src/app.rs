//! Application runtime: startup fetches, the event loop, and its timers.

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;

use crate::events;
use crate::logic;
use crate::sources;
use crate::state::{AppState, FetchEvent};
use crate::ui;

/// What: Run the catalog browser until the user quits.
///
/// Inputs:
/// - `terminal`: An initialized ratatui terminal; setup and teardown are
///   the caller's responsibility.
///
/// Output:
/// - `Ok(())` on a clean exit; draw errors bubble up.
///
/// Details:
/// - Spawns the two startup fetches independently; their completions are
///   applied whenever they arrive, in either order, and are never
///   cancelled or retried.
/// - A dedicated thread forwards crossterm events over a channel so the
///   select loop can also wake on the debounce and toast deadlines. Both
///   deadlines are single-slot: re-arming replaces the pending timer.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = AppState::default();

    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
    {
        let tx = fetch_tx.clone();
        tokio::spawn(async move {
            let outcome = sources::fetch_products().await.map_err(|e| e.to_string());
            let _ = tx.send(FetchEvent::Products(outcome));
        });
    }
    {
        let tx = fetch_tx;
        tokio::spawn(async move {
            let outcome = sources::fetch_categories().await.map_err(|e| e.to_string());
            let _ = tx.send(FetchEvent::Categories(outcome));
        });
    }

    let (ev_tx, mut ev_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(ev) => {
                    if ev_tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        let debounce_at = app.debounce_deadline;
        let toast_at = app.toast_expires_at;
        tokio::select! {
            maybe_ev = ev_rx.recv() => {
                match maybe_ev {
                    Some(ev) => {
                        if events::handle_event(ev, &mut app) {
                            break;
                        }
                    }
                    None => break,
                }
            }
            Some(fetched) = fetch_rx.recv() => {
                logic::apply_fetch(&mut app, fetched);
            }
            _ = sleep_until_deadline(debounce_at), if debounce_at.is_some() => {
                logic::commit_search(&mut app);
            }
            _ = sleep_until_deadline(toast_at), if toast_at.is_some() => {
                logic::dismiss_toast(&mut app);
            }
        }
    }
    Ok(())
}

/// Sleep until the given deadline; pending forever when there is none.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at.into()).await,
        None => std::future::pending().await,
    }
}
