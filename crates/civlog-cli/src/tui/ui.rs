use civlog_engine::{PageSummary, PartitionSnapshot, Phase};
use civlog_types::{FlightRecord, PageTotals};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Clear, Paragraph, Row, Table},
};

use super::app::CloseApp;
use crate::views::DATE_FORMAT;

/// Scrollable record columns: title and width. Free-text columns share
/// whatever the fixed ones leave over.
const COLUMNS: [(&str, Constraint); 14] = [
    ("Date", Constraint::Length(10)),
    ("Aircraft", Constraint::Length(8)),
    ("From", Constraint::Length(5)),
    ("To", Constraint::Length(5)),
    ("Day", Constraint::Length(5)),
    ("Night", Constraint::Length(5)),
    ("Total", Constraint::Length(5)),
    ("Nav", Constraint::Length(5)),
    ("IFR", Constraint::Length(5)),
    ("Capt", Constraint::Length(5)),
    ("Ldg", Constraint::Length(3)),
    ("Function", Constraint::Fill(2)),
    ("Crew", Constraint::Fill(3)),
    ("Observation", Constraint::Fill(4)),
];

pub const COLUMN_COUNT: usize = COLUMNS.len();

fn record_cells(record: &FlightRecord) -> [String; COLUMN_COUNT] {
    [
        record.date.format(DATE_FORMAT).to_string(),
        record.aircraft.clone(),
        record.departure.clone(),
        record.arrival.clone(),
        record.day.to_string(),
        record.night.to_string(),
        record.total().to_string(),
        record.navigation.to_string(),
        record.instrument.to_string(),
        record.captain.to_string(),
        record.landings.to_string(),
        record.function.clone(),
        record.crew.clone(),
        record.observation.clone(),
    ]
}

fn totals_line(totals: &PageTotals) -> String {
    format!(
        "day {}  night {}  total {}  nav {}  ifr {}  capt {}  cmd {}  dual {}  co-pil {}  ldg {}",
        totals.day,
        totals.night,
        totals.total,
        totals.navigation,
        totals.instrument,
        totals.captain,
        totals.command,
        totals.dual,
        totals.copilot,
        totals.landings
    )
}

pub fn draw(f: &mut Frame, app: &CloseApp) {
    let snapshot = app.partitioner.snapshot();

    let pages_height = (snapshot.pages.len() as u16 + 3).min(10);
    let chunks = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(pages_height),
        Constraint::Length(1),
    ])
    .split(f.area());

    draw_records(f, chunks[0], app, &snapshot);
    draw_pages(f, chunks[1], &snapshot);
    draw_help(f, chunks[2], snapshot.phase);

    if let Some(review) = &snapshot.review {
        draw_review(f, review);
    }
}

fn draw_records(f: &mut Frame, area: Rect, app: &CloseApp, snapshot: &PartitionSnapshot) {
    let visible = &COLUMNS[app.column_offset..];

    let mut header_cells = vec![Cell::from("#"), Cell::from(" ")];
    header_cells.extend(visible.iter().map(|(title, _)| Cell::from(*title)));
    let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

    let rows = snapshot.rows.iter().map(|row| {
        let mut cells = vec![
            Cell::from((row.position + 1).to_string()),
            Cell::from(if row.selected { "x" } else { " " }),
        ];
        cells.extend(
            record_cells(&row.record)
                .into_iter()
                .skip(app.column_offset)
                .map(Cell::from),
        );

        let mut style = Style::default();
        if row.selected {
            style = style.fg(Color::Green);
        }
        if row.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Row::new(cells).style(style)
    });

    let mut widths = vec![Constraint::Length(4), Constraint::Length(1)];
    widths.extend(visible.iter().map(|(_, width)| *width));

    let title = format!(
        " {} | window {}/{} | {} unassigned | {} selected ",
        app.title,
        snapshot.window + 1,
        snapshot.window_count,
        snapshot.unassigned,
        snapshot.selected.len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().title(title));
    f.render_widget(table, area);
}

fn draw_pages(f: &mut Frame, area: Rect, snapshot: &PartitionSnapshot) {
    let mut lines: Vec<Line> = snapshot
        .pages
        .iter()
        .map(|page| {
            Line::from(format!(
                "Page {:>3} ({:>2} records)  {}",
                page.number,
                page.records,
                totals_line(&page.totals)
            ))
        })
        .collect();
    lines.push(Line::styled(
        format!("Running             {}", totals_line(&snapshot.running)),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    // keep the newest pages in view
    let inner = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(inner);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let pages = Paragraph::new(lines).block(Block::bordered().title(" Closed pages "));
    f.render_widget(pages, area);
}

fn draw_help(f: &mut Frame, area: Rect, phase: Phase) {
    let help = match phase {
        Phase::PageClosed => "Enter/Esc: continue",
        _ => {
            "↑↓ move  Enter select  ^←/^→ window  ←/→ columns  ^F close page  \
             d delete last page  s start here  r reset  q quit"
        }
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_review(f: &mut Frame, review: &PageSummary) {
    let area = centered(f.area(), 60, 14);
    let totals = &review.totals;

    let lines = vec![
        Line::from(format!("{} records", review.records)),
        Line::from(""),
        Line::from(format!("Day          {:>7}", totals.day.to_string())),
        Line::from(format!("Night        {:>7}", totals.night.to_string())),
        Line::from(format!("Total        {:>7}", totals.total.to_string())),
        Line::from(format!("Navigation   {:>7}", totals.navigation.to_string())),
        Line::from(format!("Instrument   {:>7}", totals.instrument.to_string())),
        Line::from(format!("Captain      {:>7}", totals.captain.to_string())),
        Line::from(format!(
            "Command {:>5}  Dual {:>5}  Co-pilot {:>5}",
            totals.command.to_string(),
            totals.dual.to_string(),
            totals.copilot.to_string()
        )),
        Line::from(format!("Landings     {:>7}", totals.landings)),
    ];

    let popup = Paragraph::new(lines).block(
        Block::bordered()
            .title(format!(" Page {} closed ", review.number))
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
