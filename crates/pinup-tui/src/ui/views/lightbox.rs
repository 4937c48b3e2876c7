use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::{theme, App};

/// Detail modal over the gallery for one card.
pub fn render_lightbox(f: &mut Frame, app: &mut App, area: Rect) {
    let cards = app.card_views();
    if cards.is_empty() {
        app.close_lightbox();
        return;
    }
    let index = app.lightbox_index.min(cards.len() - 1);
    let card = &cards[index];

    let modal = centered_rect(area, 70, 80);
    f.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}/{}) ", card.title, index + 1, cards.len()))
        .title_style(theme::title_style())
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .style(Style::default().bg(theme::BG_CARD));
    let inner = block.inner(modal);
    f.render_widget(block, modal);

    let image = if card.image.is_empty() {
        "(no image)".to_string()
    } else {
        card.image.clone()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Image: ", theme::muted()),
            Span::styled(image, Style::default().fg(theme::ACCENT_LINK)),
        ]),
        Line::default(),
        detail_line("Status", card.status_label),
        detail_line("Rarity", &card.rarity),
        detail_line("Wear", &card.wear),
        detail_line("Foil", &card.foil),
        detail_line("NSFW", if card.flagged { "Yes" } else { "No" }),
        detail_line("Minted", &card.minted),
        Line::styled(
            format!("{:.2} PUPs", card.score),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    if !card.description.is_empty() {
        lines.push(Line::styled(card.description.clone(), theme::primary()));
        lines.push(Line::default());
    }
    if card.flagged && !card.revealed {
        lines.push(Line::styled(
            "Censored - press r in the gallery to de-censor. Visual change only.",
            Style::default().fg(theme::ACCENT_DEEP),
        ));
    }
    lines.push(Line::styled(
        "←/→ navigate · Esc close",
        Style::default().fg(theme::TEXT_DIM),
    ));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value.to_string(), theme::primary()),
    ])
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
