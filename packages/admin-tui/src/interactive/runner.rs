//! Main event loop
//!
//! Runs on a current-thread runtime and waits on two sources: terminal events
//! and one auto-dismiss timer. The timer is re-armed whenever the live
//! notification's deadline changes and ignored while nothing is shown.

use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::{self, Duration};
use tracing::{debug, info};

use super::render::render;
use super::state::App;
use super::types::Flow;

/// Take over the terminal and run until the user quits.
pub async fn run_interactive(app: App) -> Result<()> {
    let mut terminal = ratatui::try_init().context("Failed to initialise terminal")?;
    info!("Provider admin screen started");

    let result = run_app(&mut terminal, app).await;

    ratatui::restore();
    info!("Provider admin screen closed");
    result
}

async fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    let mut events = EventStream::new();

    let toast_timer = time::sleep(Duration::ZERO);
    tokio::pin!(toast_timer);
    let mut armed_for: Option<Instant> = None;

    loop {
        terminal
            .draw(|frame| render(frame, &app))
            .context("Failed to draw frame")?;

        let deadline = app.toast_deadline();
        if deadline != armed_for {
            if let Some(deadline) = deadline {
                toast_timer
                    .as_mut()
                    .reset(time::Instant::from_std(deadline));
            }
            armed_for = deadline;
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key, Instant::now()) == Flow::Quit {
                        break;
                    }
                }
                // resize and the rest: redrawn on the next pass
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err).context("Terminal event stream failed"),
                None => break,
            },
            () = &mut toast_timer, if deadline.is_some() => {
                debug!("Notification timer fired");
                app.expire_toast(Instant::now());
            }
        }
    }

    Ok(())
}
