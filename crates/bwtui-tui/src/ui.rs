//! UI rendering with Ratatui.

use crate::app::{App, Focus};
use bwtui_core::{Action, DetailsView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Item list on top, filter and feedback on the last line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_list(frame, app, chunks[0]);
    render_status_line(frame, app, chunks[1]);

    if let Some(view) = app.details.view() {
        render_details(frame, app, &view, area);
    }
}

/// Render the filtered item list.
fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::List;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(
            " Vault ({}/{}) ",
            app.filter.len(),
            app.repository.len()
        ))
        .title_bottom(Line::from(list_hints(app)).style(Style::default().fg(Color::DarkGray)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = app
        .visible_items()
        .map(|item| ListItem::new(Line::from(item.to_string())))
        .collect();

    if items.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let message = Paragraph::new("No matching items")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(message, centered_rect(inner.width, 1, inner));
        return;
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(60, 60, 80))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

fn list_hints(app: &App) -> String {
    let key = |action: Action| {
        app.keys
            .key_for(action)
            .map(String::from)
            .unwrap_or_default()
    };
    format!(
        " {}: filter | {}: clear | {}: password | {}: username | Enter: details | {}: quit ",
        key(Action::FocusFilter),
        key(Action::ClearFilter),
        key(Action::CopyPassword),
        key(Action::CopyUsername),
        key(Action::Quit),
    )
}

/// Render the filter input and the feedback message side by side.
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let editing = app.focus == Focus::Filter;
    let prompt_color = if editing { Color::Magenta } else { Color::DarkGray };
    let mut spans = vec![
        Span::styled("▸ ", Style::default().fg(prompt_color)),
        Span::styled(&app.filter_text, Style::default().fg(Color::White)),
    ];
    if editing {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let feedback = Paragraph::new(app.feedback.message())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Right);
    frame.render_widget(feedback, chunks[1]);
}

/// Render the details overlay.
fn render_details(frame: &mut Frame, app: &App, view: &DetailsView<'_>, area: Rect) {
    let dialog_width = 60.min(area.width.saturating_sub(4));
    let dialog_height = 16.min(area.height.saturating_sub(2));
    let dialog_area = centered_rect(dialog_width, dialog_height, area);

    // Clear background
    frame.render_widget(Clear, dialog_area);

    let toggle = app.keys.key_for(Action::ToggleReveal).unwrap_or('r');
    let reveal_hint = if app.details.reveal_password() {
        "hide"
    } else {
        "reveal"
    };
    let block = Block::default()
        .title(" Details ")
        .title_bottom(
            Line::from(format!(" {toggle}: {reveal_hint} password | Esc: close "))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(Span::styled(
            view.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        field_line("Type", &view.kind, Color::DarkGray),
    ];
    if let Some(folder) = view.folder {
        lines.push(field_line("Folder", folder, Color::Yellow));
    }
    if let Some(username) = view.username {
        lines.push(field_line("Username", username, Color::Green));
    }
    if let Some(password) = view.password {
        lines.push(field_line("Password", password, Color::Yellow));
    }
    if let Some(notes) = view.notes {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Notes:",
            Style::default().fg(Color::DarkGray),
        )));
        lines.extend(notes.lines().map(|line| Line::from(line.to_string())));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, dialog_area);
}

fn field_line<'a>(label: &'a str, value: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

/// Helper to create a centered rectangle.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_with, login, sample_app};
    use bwtui_core::PASSWORD_MASK;
    use ratatui::{backend::TestBackend, Terminal};

    /// Render into an in-memory buffer and return plain text (no styles).
    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn list_shows_display_names_and_counts() {
        let mut app = sample_app();
        let screen = render_to_string(&app);
        assert!(screen.contains("Vault (4/4)"), "{screen}");
        assert!(screen.contains("Bank (Finance)"));
        assert!(screen.contains("Wifi"));

        app.set_filter_text("zzz");
        let screen = render_to_string(&app);
        assert!(screen.contains("Vault (0/4)"));
        assert!(screen.contains("No matching items"));
    }

    #[test]
    fn feedback_and_filter_on_status_line() {
        let mut app = sample_app();
        app.set_filter_text("bank");
        app.feedback.post("password copied to clipboard");
        let screen = render_to_string(&app);
        let last = screen.lines().last().unwrap();
        assert!(last.contains("▸ bank"), "{last}");
        assert!(last.ends_with("password copied to clipboard"), "{last}");
    }

    #[test]
    fn details_mask_and_reveal() {
        let mut app = app_with(vec![login("Bank", "alice", "s3cret", Some("f1"))]);
        app.open_details();
        let screen = render_to_string(&app);
        assert!(screen.contains("Folder: Finance"), "{screen}");
        assert!(screen.contains("Username: alice"));
        assert!(screen.contains(&format!("Password: {PASSWORD_MASK}")));
        assert!(!screen.contains("s3cret"));

        app.toggle_reveal();
        let screen = render_to_string(&app);
        assert!(screen.contains("Password: s3cret"), "{screen}");

        app.close_details();
        let screen = render_to_string(&app);
        assert!(!screen.contains("Password:"));
    }
}
