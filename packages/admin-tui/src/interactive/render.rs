//! Screen rendering: search bar, provider table, filter panel, pager, toast

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use provider_view::{
    PageLabel, PaginationConfig, ProviderRecord, ProviderStatus, Severity, SortField,
};

use super::filters::FilterDraft;
use super::state::App;
use super::types::{FilterField, Focus};

const FILTER_PANEL_WIDTH: u16 = 38;
const TOAST_WIDTH: u16 = 56;

pub fn render(frame: &mut Frame, app: &App) {
    let [top, middle, pager, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [table_area, panel_area] = Layout::horizontal([
        Constraint::Min(40),
        Constraint::Length(FILTER_PANEL_WIDTH),
    ])
    .areas(middle);

    render_search(frame, app, top);
    render_table(frame, app, table_area);
    render_filter_panel(frame, app, panel_area);
    render_pager(frame, app, pager);

    frame.render_widget(
        Paragraph::new(app.focus().hints()).style(Style::default().fg(Color::DarkGray)),
        hints,
    );

    render_toast(frame, app, frame.area());
}

fn focus_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.focus() == Focus::Search;
    let text = if active {
        app.search_input()
    } else {
        app.session().state().search_term.as_str()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(active))
        .title(" Service Providers ");
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(text),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if active {
        frame.set_cursor_position((search_cursor_x(area, text), area.y + 1));
    }
}

// Column after the typed text, kept inside the right border
fn search_cursor_x(area: Rect, text: &str) -> u16 {
    let offset = 1usize
        .saturating_add("Search: ".len())
        .saturating_add(text.chars().count());
    let x = area
        .x
        .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
    x.min(area.right().saturating_sub(2))
}

fn header_checkbox(app: &App) -> &'static str {
    let session = app.session();
    if session.is_all_selected() {
        "[x]"
    } else if session.is_indeterminate() {
        "[-]"
    } else {
        "[ ]"
    }
}

fn header_label(app: &App, index: usize, field: SortField) -> String {
    let indicator = app
        .session()
        .state()
        .sort
        .direction_for(field)
        .map(|direction| direction.indicator())
        .unwrap_or("");
    format!("{} {}{}", index + 1, field.label(), indicator)
}

fn row_cells(record: &ProviderRecord, selected: bool) -> Vec<Cell<'static>> {
    vec![
        Cell::from(if selected { "[x]" } else { "[ ]" }),
        Cell::from(record.email.clone()),
        Cell::from(record.phone_number.clone()),
        Cell::from(record.postcode.clone()),
        Cell::from(record.vendor_type.label()),
        Cell::from(record.service_offering.label()),
        Cell::from(record.signup_date_display()),
        Cell::from(record.status.label()).style(match record.status {
            ProviderStatus::Onboarded => Style::default().fg(Color::Green),
            ProviderStatus::Rejected => Style::default().fg(Color::Red),
        }),
    ]
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let page = session.page();
    let selection = &session.state().selection;

    if page.is_empty() {
        let empty = Paragraph::new("No providers match the current search and filters")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Providers "));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from(header_checkbox(app))).chain(
            SortField::all()
                .iter()
                .enumerate()
                .map(|(index, field)| Cell::from(header_label(app, index, *field))),
        ),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page
        .rows
        .iter()
        .map(|record| Row::new(row_cells(record, selection.contains(&record.id))))
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(22),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(19),
        Constraint::Length(14),
        Constraint::Length(11),
    ];

    let title = if selection.is_empty() {
        " Providers ".to_string()
    } else {
        format!(" Providers ({} selected) ", selection.len())
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus() == Focus::Table))
                .title(title),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_filter_panel(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.focus() == Focus::Filters;
    let committed = committed_draft(app);

    let lines: Vec<Line> = FilterField::all()
        .iter()
        .map(|field| {
            let focused = editing && app.draft().field() == *field;
            let value = if editing {
                app.draft().display(*field)
            } else {
                committed.display(*field)
            };
            let marker = if focused { "> " } else { "  " };
            let hint = if focused && !field.is_text() {
                " ◀▶"
            } else {
                ""
            };
            let style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<17}", field.label()), style),
                Span::raw(value),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let active = app.session().state().filters.active_count();
    let title = if active == 0 {
        " Filters ".to_string()
    } else {
        format!(" Filters ({active} active) ")
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(editing))
                .title(title),
        ),
        area,
    );
}

// Committed filters, formatted the same way as the draft
fn committed_draft(app: &App) -> FilterDraft {
    FilterDraft::from_committed(&app.session().state().filters)
}

fn pager_spans(pagination: &PaginationConfig) -> Vec<Span<'static>> {
    let enabled = Style::default();
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        "◀ Prev ",
        if pagination.has_previous() { enabled } else { disabled },
    )];

    for label in pagination.labels() {
        let style = match label {
            PageLabel::Page(page) if page == pagination.current_page => {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            }
            PageLabel::Page(_) => enabled,
            PageLabel::Ellipsis => disabled,
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }

    spans.push(Span::styled(
        " Next ▶",
        if pagination.has_next() { enabled } else { disabled },
    ));
    spans
}

fn render_pager(frame: &mut Frame, app: &App, area: Rect) {
    let pagination = app.session().state().pagination;

    let mut spans = pager_spans(&pagination);
    spans.push(Span::raw("   "));
    spans.push(Span::raw(pagination.summary()));

    if app.focus() == Focus::GoTo {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("Go to page: {}", app.goto_input()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::GoTo));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_toast(frame: &mut Frame, app: &App, screen: Rect) {
    let Some(notification) = app.toast() else {
        return;
    };

    let width = TOAST_WIDTH.min(screen.width);
    let area = Rect {
        x: screen.right().saturating_sub(width),
        y: screen.y,
        width,
        height: 3.min(screen.height),
    };

    let (title, color) = match notification.severity {
        Severity::Success => (" Success ", Color::Green),
        Severity::Error => (" Error ", Color::Red),
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(notification.message.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title)
                .title_bottom(Line::from(" x close ").right_aligned()),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use provider_view::{BrowserSession, RecordStore, ViewConfig};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn app() -> App {
        let config = ViewConfig::default();
        let session = BrowserSession::new(RecordStore::sample().unwrap(), config.items_per_page);
        App::new(session, &config)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_first_page_and_summary() {
        let app = app();
        let screen = draw(&app);

        let first = &app.session().page().rows[0];
        assert!(screen.contains(&first.email));
        assert!(screen.contains(&first.signup_date_display()));
        assert!(screen.contains("Showing 1 to 10 of 48 results"));
        assert!(screen.contains("Service Offering"));
    }

    #[test]
    fn test_renders_sort_indicator_and_toast() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE), now);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), now);

        let screen = draw(&app);
        assert!(screen.contains("Email▲"));
        assert!(screen.contains("Filters cleared successfully!"));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE), now);
        for c in "zzzz-no-match".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
        }

        let screen = draw(&app);
        assert!(screen.contains("No providers match"));
        assert!(screen.contains("No results"));
    }

    #[test]
    fn test_search_cursor_stays_inside_box() {
        let area = Rect::new(0, 0, 80, 3);
        assert_eq!(search_cursor_x(area, ""), 9);
        assert_eq!(search_cursor_x(area, "valet"), 14);

        // longer than u16::MAX characters
        let long = "a".repeat(70_000);
        assert_eq!(search_cursor_x(area, &long), 78);
    }

    #[test]
    fn test_renders_long_search_input() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE), now);
        for _ in 0..300 {
            app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), now);
        }

        let screen = draw(&app);
        assert!(screen.contains("Search: qqq"));
    }

    #[test]
    fn test_pager_marks_disabled_prev_on_first_page() {
        let pagination = PaginationConfig::new(10).with_totals(25);
        let spans = pager_spans(&pagination);
        assert_eq!(spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(spans.last().map(|s| s.style.fg), Some(None));
    }
}
