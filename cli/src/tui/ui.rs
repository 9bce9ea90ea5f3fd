use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use trading_calendar_core::service::weeks_of;
use trading_calendar_core::{CalendarCell, DayOutcome, DayRecordSource, MonthView};

use crate::format::{format_pnl, format_trades, format_win_rate};
use crate::tui::app::App;

struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    profit: Color,
    loss: Color,
    idle: Color,
    today: Color,
    note: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    profit: Color::Green,
    loss: Color::Red,
    idle: Color::Gray,
    today: Color::Blue,
    note: Color::LightBlue,
};

pub fn draw<S: DayRecordSource>(f: &mut Frame, app: &App<S>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Calendar + sidebar
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    match &app.view {
        Some(view) => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(72),
                    Constraint::Length(1),
                    Constraint::Percentage(28),
                ])
                .split(main_chunks[1]);

            draw_calendar(f, app, view, content_chunks[0]);
            draw_sidebar(f, app, view, content_chunks[2]);
        }
        None => {
            let message = app.error.as_deref().unwrap_or("No data available");
            let error = Paragraph::new(message)
                .style(Style::default().fg(THEME.loss))
                .alignment(Alignment::Center)
                .block(rounded(" Calendar View "))
                .wrap(Wrap { trim: true });
            f.render_widget(error, main_chunks[1]);
        }
    }

    let help = Line::from(vec![
        Span::styled("MONTH: ", Style::default().fg(THEME.muted)),
        Span::styled("p/n ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("DAY: ", Style::default().fg(THEME.muted)),
        Span::styled("←↑↓→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("TODAY: ", Style::default().fg(THEME.muted)),
        Span::styled("t ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_chunks[2]);
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

fn draw_header<S: DayRecordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(40),
            Constraint::Min(1),
            Constraint::Length(30),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "TRADING CALENDAR",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track your trading performance day by day",
            Style::default().fg(THEME.muted),
        )),
    ]);
    f.render_widget(title, header_layout[0]);

    let nav = Line::from(vec![
        Span::styled(" < ", Style::default().fg(THEME.text)),
        Span::styled(app.month.to_string(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(nav).alignment(Alignment::Right), header_layout[2]);

    let underline = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    f.render_widget(underline, area);
}

fn draw_calendar<S: DayRecordSource>(f: &mut Frame, app: &App<S>, view: &MonthView, area: Rect) {
    let legend = Line::from(vec![
        Span::raw(" Calendar View  "),
        Span::styled("■ Profit ", Style::default().fg(THEME.profit)),
        Span::styled("■ Loss ", Style::default().fg(THEME.loss)),
        Span::styled("■ No Trading ", Style::default().fg(THEME.idle)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(legend);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let week_count = view.cells.len() / 7;
    let mut row_constraints = vec![Constraint::Length(1)];
    row_constraints.extend((0..week_count).map(|_| Constraint::Ratio(1, week_count as u32)));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    let day_columns = |area: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 7); 7])
            .split(area)
    };

    let header_cols = day_columns(rows[0]);
    for (label, col) in view.weekday_labels().iter().zip(header_cols.iter()) {
        let header = Paragraph::new(*label)
            .style(Style::default().fg(THEME.muted).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(header, *col);
    }

    for (week, row) in weeks_of(&view.cells).zip(rows.iter().skip(1)) {
        let cols = day_columns(*row);
        for (cell, col) in week.iter().zip(cols.iter()) {
            draw_day_cell(f, app, view, cell, *col);
        }
    }
}

fn outcome_color(outcome: DayOutcome) -> Color {
    match outcome {
        DayOutcome::Profit => THEME.profit,
        DayOutcome::Loss => THEME.loss,
        DayOutcome::NoTrading => THEME.idle,
    }
}

fn draw_day_cell<S: DayRecordSource>(f: &mut Frame, app: &App<S>, view: &MonthView, cell: &CalendarCell, area: Rect) {
    let record = view.record_for(cell.date);
    let is_selected = app.selected == Some(cell.date);

    let mut text_style = match record {
        Some(r) => Style::default().fg(outcome_color(r.outcome())),
        None => Style::default().fg(THEME.text),
    };
    if !cell.in_displayed_month {
        text_style = Style::default().fg(THEME.muted).add_modifier(Modifier::DIM);
    }

    let mut border_style = Style::default().fg(THEME.muted);
    if cell.is_today {
        border_style = Style::default().fg(THEME.today).add_modifier(Modifier::BOLD);
    }
    if is_selected {
        border_style = Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD);
    }

    let mut day_style = Style::default().add_modifier(Modifier::BOLD);
    if cell.is_today {
        day_style = day_style.fg(THEME.today).add_modifier(Modifier::UNDERLINED);
    }
    let mut first_line = vec![Span::styled(cell.date.format("%-d").to_string(), day_style)];
    if record.is_some_and(|r| r.has_note) {
        first_line.push(Span::styled(" ✎", Style::default().fg(THEME.note)));
    }

    let mut lines = vec![Line::from(first_line)];
    if let Some(r) = record.filter(|r| r.is_trading_day()) {
        lines.push(Line::from(Span::styled(format_pnl(r.pnl), text_style.add_modifier(Modifier::BOLD))));
        lines.push(Line::from(Span::styled(format_trades(r.trade_count), Style::default().fg(THEME.muted))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected { BorderType::Thick } else { BorderType::Plain })
        .border_style(border_style);
    let paragraph = Paragraph::new(lines).style(text_style).block(block);
    f.render_widget(paragraph, area);
}

fn draw_sidebar<S: DayRecordSource>(f: &mut Frame, app: &App<S>, view: &MonthView, area: Rect) {
    let weeks_height = view.weeks.len() as u16 * 2 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(weeks_height),
            Constraint::Min(0),
        ])
        .split(area);

    draw_monthly_summary(f, view, chunks[0]);
    draw_weekly_breakdown(f, view, chunks[1]);
    draw_day_detail(f, app, chunks[2]);
}

fn pnl_style(pnl: rust_decimal::Decimal) -> Style {
    let color = if pnl.is_sign_negative() && !pnl.is_zero() { THEME.loss } else { THEME.profit };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_monthly_summary(f: &mut Frame, view: &MonthView, area: Rect) {
    let stats = &view.summary;
    let lines = vec![
        Line::from(vec![
            Span::styled("Total P&L:    ", Style::default().fg(THEME.muted)),
            Span::styled(format_pnl(stats.total_pnl), pnl_style(stats.total_pnl)),
        ]),
        Line::from(vec![
            Span::styled("Trading Days: ", Style::default().fg(THEME.muted)),
            Span::styled(stats.trading_day_count.to_string(), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            Span::styled("Win Rate:     ", Style::default().fg(THEME.muted)),
            Span::styled(format_win_rate(stats.win_rate), Style::default().fg(THEME.text)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("▲ {}", stats.winning_day_count), Style::default().fg(THEME.profit)),
            Span::raw("   "),
            Span::styled(format!("▼ {}", stats.losing_day_count), Style::default().fg(THEME.loss)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(rounded(" Monthly Summary ")), area);
}

fn draw_weekly_breakdown(f: &mut Frame, view: &MonthView, area: Rect) {
    let mut lines = Vec::new();
    for (i, week) in view.weeks.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("Week {:<3}", i + 1), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
            Span::styled(format_pnl(week.total_pnl), pnl_style(week.total_pnl)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{} days", week.active_day_count),
            Style::default().fg(THEME.muted),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(rounded(" Weekly Breakdown ")), area);
}

fn draw_day_detail<S: DayRecordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let Some(record) = app.selected_record() else {
        let hint = Paragraph::new(Span::styled("Select a day to see details", Style::default().fg(THEME.muted)))
            .block(rounded(" Day Detail "))
            .wrap(Wrap { trim: true });
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("P&L:    ", Style::default().fg(THEME.muted)),
            Span::styled(format_pnl(record.pnl), pnl_style(record.pnl)),
        ]),
        Line::from(vec![
            Span::styled("Trades: ", Style::default().fg(THEME.muted)),
            Span::styled(record.trade_count.to_string(), Style::default().fg(THEME.text)),
        ]),
    ];
    if record.has_note {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("✎ Journal entry available", Style::default().fg(THEME.note))));
    }

    let title = format!(" {} ", record.date.format("%b %-d, %Y"));
    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted))
                .title(title),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}
