use pinup_core::constants::{APP_VERSION, MAIN_SITE_URL};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{theme, App};

pub fn render_connect(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    let site_link = Paragraph::new(format!("Main site: {MAIN_SITE_URL}"))
        .style(Style::default().fg(theme::ACCENT_LINK))
        .alignment(Alignment::Right);
    f.render_widget(site_link, chunks[0]);

    render_center(f, app, chunks[1]);

    let footer = Paragraph::new(APP_VERSION)
        .style(Style::default().fg(theme::TEXT_DIM))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

fn render_center(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .split(area);

    let title = Paragraph::new("Daring Divas App")
        .style(theme::title_style())
        .alignment(Alignment::Center);
    f.render_widget(title, rows[1]);

    let blurb = Paragraph::new(
        "Connect your wallet to view your collection and reveal any NSFW cards you hold.",
    )
    .style(theme::muted())
    .alignment(Alignment::Center);
    f.render_widget(blurb, rows[2]);

    let input_area = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ])
    .split(rows[3])[1];
    let input_widget = Paragraph::new(app.input.clone())
        .style(theme::primary())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Wallet address ")
                .border_style(Style::default().fg(theme::ACCENT_PRIMARY)),
        );
    f.render_widget(input_widget, input_area);

    let hint = Paragraph::new("Enter to connect · Esc to quit")
        .style(Style::default().fg(theme::TEXT_DIM))
        .alignment(Alignment::Center);
    f.render_widget(hint, rows[4]);

    if let Some(status) = &app.status {
        let status_widget = Paragraph::new(status.clone())
            .style(Style::default().fg(theme::ACCENT_ERROR))
            .alignment(Alignment::Center);
        f.render_widget(status_widget, rows[5]);
    }
}
