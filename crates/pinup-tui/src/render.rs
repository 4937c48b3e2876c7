use ratatui::{style::Style, widgets::Block, Frame};

use crate::ui::{self, App, View};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Fill entire frame with app background
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, area);

    match app.view {
        View::Connect => ui::views::connect::render_connect(f, app, area),
        View::Gallery => {
            ui::views::gallery::render_gallery(f, app, area);
            if app.lightbox_open {
                ui::views::lightbox::render_lightbox(f, app, area);
            }
        }
    }
}
