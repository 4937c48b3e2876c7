use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, View};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.view {
        View::Connect => handle_connect_key(app, key),
        View::Gallery => handle_gallery_key(app, key),
    }
    Ok(())
}

fn handle_connect_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.connect(),
        KeyCode::Esc => app.quit(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    if app.lightbox_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_lightbox(),
            KeyCode::Left | KeyCode::Char('h') => app.lightbox_prev(),
            KeyCode::Right | KeyCode::Char('l') => app.lightbox_next(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('d') => app.disconnect(),
        KeyCode::Char('r') => app.toggle_reveal(),
        KeyCode::Char('e') => app.description_expanded = !app.description_expanded,
        KeyCode::Enter => app.open_lightbox(),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(0, 1),
        _ => {}
    }
}
