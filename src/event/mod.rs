//! Event handling module for WimaxUI
//!
//! This module handles keyboard input, radio notifications, and the main event loop.

mod handlers;

use crate::{
    app::{AppState, Screen},
    config,
    ui::render,
};
use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyModifiers};
use handlers::{handle_advanced_view, handle_main_view};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::info;

pub async fn run(mut terminal: DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        // Radio notifications first so the frame shows the latest state
        state.process_radio_events();

        terminal.draw(|frame| render(frame, state))?;

        if event::poll(Duration::from_millis(config::EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()?
                && key.kind == event::KeyEventKind::Press
            {
                // Global shortcuts
                if key.code == event::KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }

                let should_quit = match state.screen {
                    Screen::Main => handle_main_view(key, state),
                    Screen::Advanced => handle_advanced_view(key, state),
                };

                if should_quit {
                    break;
                }
            }
        } else {
            tokio::task::yield_now().await;
        }
    }

    state.shutdown();
    info!("Event loop finished");
    Ok(())
}
