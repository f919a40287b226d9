//! TUI rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use seocalc_core::{format_usd, ServiceCategory, RETAINER_LABEL, SERVICE_CATALOG};

use super::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(38)])
        .split(chunks[1]);

    draw_services(f, app, body[0]);
    draw_sidebar(f, app, body[1]);
    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "SEO Cost Calculator | Tab: {} | {} services selected",
        app.tab_name(),
        app.calculator.selection().selected_count()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(header, area);
}

fn draw_services(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["QTY", "SERVICE", "PRICE", "CATEGORY"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).bold()));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let visible = app.visible_services();
    let rows = visible.iter().enumerate().map(|(i, service)| {
        let is_selected = i == app.selected;

        let qty = if is_selected && app.is_editing() {
            format!("{}_", app.quantity_input().unwrap_or(""))
        } else {
            app.calculator.selection().quantity(service.id).to_string()
        };

        let category_color = match service.category {
            ServiceCategory::Optimization => Color::Green,
            ServiceCategory::Content => Color::Yellow,
            ServiceCategory::OffPage => Color::Blue,
            ServiceCategory::Local => Color::Magenta,
            ServiceCategory::Analytics => Color::Cyan,
        };

        let cells = vec![
            Cell::from(qty),
            Cell::from(service.name),
            Cell::from(service.display_price()),
            Cell::from(service.category.display_name())
                .style(Style::default().fg(category_color)),
        ];

        let style = if is_selected {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        };

        Row::new(cells).style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(24),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" SEO Services "),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    state.select(Some(app.selected));

    f.render_stateful_widget(table, area, &mut state);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    draw_settings(f, app, chunks[0]);
    draw_breakdown(f, app, chunks[1]);
}

fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let selection = app.calculator.selection();

    let lines = vec![
        Line::from(format!("Duration     {} months", selection.project_duration)),
        Line::from(format!("Competition  {}", selection.competition_level)),
        Line::from(format!("Business     {}", selection.business_size)),
        Line::from(format!("Geographies  {}", selection.target_geographies)),
        Line::from(format!(
            "Retainer     {}",
            if selection.monthly_retainer { "on" } else { "off" }
        )),
    ];

    let settings = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Project Settings "),
    );

    f.render_widget(settings, area);
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let quote = app.calculator.quote();
    let selection = app.calculator.selection();

    let mut lines: Vec<Line> = Vec::new();

    if quote.is_empty() {
        lines.push(Line::from(Span::styled(
            "Select services to see breakdown",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        // Catalog order first, the retainer line last.
        for service in &SERVICE_CATALOG {
            if let Some(cost) = quote.line(service.name) {
                lines.push(breakdown_line(service.name, cost));
            }
        }
        if let Some(cost) = quote.line(RETAINER_LABEL) {
            lines.push(breakdown_line(RETAINER_LABEL, cost));
        }

        lines.push(Line::from("─".repeat(34)));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<22}", "Total"), Style::default().bold()),
            Span::styled(
                format!("{:>12}", format_usd(quote.total)),
                Style::default().fg(Color::Green).bold(),
            ),
        ]));
        lines.push(Line::from(format!(
            "{:<22}{:>12}",
            "Monthly avg",
            format_usd(quote.monthly_average(selection.project_duration))
        )));
    }

    let breakdown = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Cost Breakdown "),
    );

    f.render_widget(breakdown, area);
}

fn breakdown_line(label: &str, cost: f64) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<22}", truncate(label, 21))),
        Span::styled(
            format!("{:>12}", format_usd(cost)),
            Style::default().fg(Color::Green),
        ),
    ])
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let status = app.status().unwrap_or("");

    let help = if app.is_editing() {
        "Type quantity | Enter: done | Esc: cancel"
    } else {
        "j/k: move | +/-: qty | Enter: edit | Tab: category | c/b: multipliers | [ ]: months | { }: regions | m: retainer | e: export | r: reset | q: quit"
    };

    let footer_text = if status.is_empty() {
        help.to_string()
    } else {
        format!("{} | {}", status, help)
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(footer, area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…", &s[..max - 1])
    }
}
