use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, InputMode, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Tick drives data-channel polling between terminal events.
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.quit();
                                } else {
                                    // First Ctrl+C - footer shows the warning.
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key)?;
                            }
                        }
                        Event::Paste(text) => {
                            if app.input_mode == InputMode::Editing {
                                for c in text.chars() {
                                    app.input.push(c);
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }

            _ = tick_interval.tick() => {
                app.check_for_data_updates();
            }
        }
    }

    Ok(())
}
