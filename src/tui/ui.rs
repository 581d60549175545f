use crate::format_stars;
use crate::tui::app::App;
use crate::tui::colors;
use crate::view::{self, FilterMode, Placeholder};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_results(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Show cursor in search bar when focused
    if app.search.focused {
        // Border (1) + space (1) + search icon " \u{1F50D} " (approx 4 display cols)
        let typed_width = app.search.query[..app.search.cursor_pos].width() as u16;
        let cursor_x = chunks[0].x + 1 + 4 + typed_width;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search GitHub Repositories ");

    let search_text = format!(" \u{1F50D} {}", app.search.query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    // Area minus header row and summary line
    app.table.visible_rows = area.height.saturating_sub(2) as usize;

    let view = view::compose(
        app.filter_mode,
        &app.results,
        app.bookmarks.list(),
        &app.settled_query,
        app.is_loading,
        app.error.as_deref(),
    );

    if let Some(placeholder) = &view.placeholder {
        draw_placeholder(frame, placeholder, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    if let Some(summary) = &view.summary {
        let line = Paragraph::new(format!(" {}", summary))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, chunks[0]);
    }

    let header = Row::new(
        ["", "Repository", "Stars", "Language", "Description"]
            .into_iter()
            .map(|name| {
                Cell::from(name).style(
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Rgb(0, 95, 135))
                        .add_modifier(Modifier::BOLD),
                )
            }),
    )
    .height(1);

    // Build visible rows only
    let start = app.table.scroll_offset;
    let end = (start + app.table.visible_rows).min(view.rows.len());

    let rows: Vec<Row> = (start..end)
        .enumerate()
        .map(|(visual_idx, logical_idx)| {
            let repo = &view.rows[logical_idx];
            let is_selected = app.table.selected == Some(logical_idx);
            let is_bookmarked = app.bookmarks.is_bookmarked(repo.id);

            let marker = if is_bookmarked {
                colors::BOOKMARK_ICON
            } else {
                colors::BOOKMARK_EMPTY_ICON
            };
            let language = repo.language.as_deref().unwrap_or("");
            let description = repo.description.as_deref().unwrap_or("No description provided");

            // Alternating row background
            let bg = if is_selected {
                Color::Rgb(60, 60, 80)
            } else if visual_idx % 2 == 1 {
                Color::Rgb(25, 25, 35)
            } else {
                Color::Reset
            };

            let fg_modifier = if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            let marker_style = if is_bookmarked {
                Style::default().fg(Color::Yellow).bg(bg)
            } else {
                Style::default().fg(Color::DarkGray).bg(bg)
            };
            let name_color = colors::color_for_language(language);

            Row::new(vec![
                Cell::from(marker).style(marker_style),
                Cell::from(repo.full_name.clone())
                    .style(Style::default().fg(name_color).bg(bg).add_modifier(fg_modifier)),
                Cell::from(format!("{} {}", colors::STAR_ICON, format_stars(repo.stargazers_count)))
                    .style(Style::default().fg(Color::Yellow).bg(bg)),
                Cell::from(language.to_string()).style(Style::default().fg(Color::Green).bg(bg)),
                Cell::from(description.to_string()).style(Style::default().fg(Color::Gray).bg(bg)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(36),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(table, chunks[1]);
}

fn draw_placeholder(frame: &mut Frame, placeholder: &Placeholder, area: Rect) {
    let (message, style) = match placeholder {
        Placeholder::Error(_) => (
            placeholder.message().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Placeholder::Loading => (
            format!("\u{23F3} {}", placeholder.message()),
            Style::default().fg(Color::Yellow),
        ),
        Placeholder::NoBookmarksInResults | Placeholder::NoResults => (
            placeholder.message().to_string(),
            Style::default().fg(Color::Gray),
        ),
        Placeholder::Initial => (
            placeholder.message().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let vertical_pad = area.height.saturating_sub(1) / 2;
    let centered = Rect::new(
        area.x,
        area.y + vertical_pad,
        area.width,
        area.height.saturating_sub(vertical_pad).max(1),
    );

    let paragraph = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.is_loading {
        format!(" \u{23F3} Searching '{}'...", app.settled_query)
    } else if let Some(error) = &app.error {
        format!(" \u{2717} {}", error)
    } else {
        let row_count = app.row_count();
        match app.filter_mode {
            FilterMode::Bookmarked => format!(" {} bookmarked", row_count),
            FilterMode::All if !app.settled_query.trim().is_empty() => {
                format!(" {} of {} results", row_count, app.results.total_count)
            }
            FilterMode::All => " Ready".to_string(),
        }
    };

    let left_style = if app.error.is_some() && !app.is_loading {
        Style::default().fg(Color::Red).bg(Color::Rgb(40, 40, 50))
    } else {
        Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 50))
    };

    let right_text = format!(
        " {} {}  b:bookmark f:filter o:open Tab:focus Esc:quit ",
        colors::BOOKMARK_ICON,
        app.bookmarks.count()
    );

    let gap = (area.width as usize)
        .saturating_sub(left_text.width())
        .saturating_sub(right_text.width());

    let line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::styled(
            " ".repeat(gap),
            Style::default().bg(Color::Rgb(40, 40, 50)),
        ),
        Span::styled(
            right_text,
            Style::default().fg(Color::Gray).bg(Color::Rgb(40, 40, 50)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
