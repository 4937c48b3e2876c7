use pinup_core::constants::{APP_VERSION, COLLECTION_TAGLINE};
use pinup_core::store::views::{CardView, CollectionInfo};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{theme, App};

const CARD_MIN_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 11;

pub fn render_gallery(f: &mut Frame, app: &mut App, area: Rect) {
    let cards = app.card_views();
    let info = app.collection_info();
    let total = app.total_score();
    let loading = app.is_loading();
    let address = app.wallet.address().unwrap_or("").to_string();

    let collection_height = match &info {
        Some(_) if app.description_expanded => 12,
        Some(_) => 8,
        None => 0,
    };
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(collection_height),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .split(area);

    render_header(f, chunks[0], &address, total, cards.len());
    if let Some(info) = &info {
        render_collection(f, chunks[1], info);
    }
    render_body(f, app, chunks[2], &cards, loading);
    render_footer(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, address: &str, total: f64, count: usize) {
    let halves = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let connected = Paragraph::new(format!("Connected: {address}")).style(theme::muted());
    f.render_widget(connected, halves[0]);

    let summary = Line::from(vec![
        Span::styled(
            format!("{total:.2} PUPs"),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {count} cards"), theme::muted()),
    ]);
    let summary = Paragraph::new(summary).alignment(Alignment::Right);
    f.render_widget(summary, halves[1]);
}

fn render_collection(f: &mut Frame, area: Rect, info: &CollectionInfo) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", info.name))
        .title_style(theme::title_style())
        .border_style(Style::default().fg(theme::BORDER_INACTIVE))
        .style(Style::default().bg(theme::BG_CARD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            COLLECTION_TAGLINE,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::styled(info.description.clone(), theme::primary()),
        Line::from(vec![
            Span::styled("Ticker: ", theme::muted()),
            Span::styled(info.symbol.clone(), theme::primary()),
            Span::styled("   Type: ", theme::muted()),
            Span::styled(info.token_type.clone(), theme::primary()),
            Span::styled("   Contract: ", theme::muted()),
            Span::styled(info.contract_address.clone(), theme::primary()),
        ]),
    ];
    if let Some(url) = &info.external_url {
        lines.push(Line::styled(
            format!("Trade collection on Vibe Market → {url}"),
            Style::default().fg(theme::ACCENT_LINK),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);
}

fn render_body(f: &mut Frame, app: &mut App, area: Rect, cards: &[CardView], loading: bool) {
    if loading {
        let message = Paragraph::new("Loading your collection...").style(theme::primary());
        f.render_widget(message, area);
        return;
    }
    if cards.is_empty() {
        let message =
            Paragraph::new("No Daring Divas found in this wallet.").style(theme::primary());
        f.render_widget(message, area);
        return;
    }
    render_grid(f, app, area, cards);
}

fn render_grid(f: &mut Frame, app: &mut App, area: Rect, cards: &[CardView]) {
    let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
    app.grid_columns = columns;

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = cards.len().div_ceil(columns);

    // Keep the selected card on screen.
    let selected_row = app.selected / columns;
    if selected_row < app.scroll_row {
        app.scroll_row = selected_row;
    }
    if selected_row >= app.scroll_row + visible_rows {
        app.scroll_row = selected_row + 1 - visible_rows;
    }
    if app.scroll_row + 1 > total_rows {
        app.scroll_row = total_rows.saturating_sub(1);
    }

    let row_constraints: Vec<Constraint> = (0..visible_rows)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let row_areas = Layout::vertical(row_constraints).split(area);

    for (offset, row_area) in row_areas.iter().enumerate() {
        let row = app.scroll_row + offset;
        if row >= total_rows {
            break;
        }
        let col_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let col_areas = Layout::horizontal(col_constraints).split(*row_area);
        for (col, col_area) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            if index >= cards.len() {
                break;
            }
            render_card(f, &cards[index], index == app.selected, *col_area);
        }
    }
}

fn render_card(f: &mut Frame, card: &CardView, selected: bool, area: Rect) {
    let border = if selected {
        theme::ACCENT_PRIMARY
    } else {
        theme::BORDER_INACTIVE
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme::BG_CARD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            card.title.clone(),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
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
    ];
    if card.flagged {
        let (label, color) = if card.revealed {
            ("r: Censor", theme::ACCENT_DEEP)
        } else {
            ("r: De-censor", theme::ACCENT_PRIMARY)
        };
        lines.push(Line::styled(label, Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value.to_string(), theme::primary()),
    ])
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.pending_quit {
        Line::styled(
            "Press Ctrl+C again to quit",
            Style::default().fg(theme::ACCENT_ERROR),
        )
    } else {
        Line::styled(
            format!(
                "←↑↓→ select · Enter lightbox · r reveal · e description · d disconnect · q quit   {APP_VERSION}"
            ),
            Style::default().fg(theme::TEXT_DIM),
        )
    };
    let footer = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(footer, area);
}
