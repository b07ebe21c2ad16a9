//! Analytics screen rendering
//!
//! Profile card, stat tiles, SWOT quadrants and the two charts. Each section
//! shows a skeleton until its load message arrives.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
        Paragraph, Wrap,
    },
    Frame,
};

use crate::app::App;
use crate::state::analytics::{mock_snapshot_ref, AnalyticsSection, ChartGeometry, SwotKind};

use super::components::{full_badge, render_skeleton};
use super::helpers::{spinner_frame, truncate_string};
use super::layout::LayoutContext;
use super::theme::Palette;

fn card<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
}

pub fn render_analytics_screen(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = LayoutContext::from_rect(area);
    let stat_rows = if ctx.stat_columns() == 4 { 3 } else { 6 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Title and key hints
            Constraint::Length(3),         // Subscription
            Constraint::Length(4),         // Profile
            Constraint::Length(stat_rows), // Stat tiles
            Constraint::Min(8),            // SWOT and charts
        ])
        .split(area);

    render_title(frame, chunks[0], app, palette);
    frame.render_widget(
        Paragraph::new(full_badge(&app.subscription, palette)),
        chunks[1],
    );

    let loaded = |section| app.analytics.is_loaded(section);
    let tick = app.tick_count;

    if loaded(AnalyticsSection::Profile) {
        render_profile(frame, chunks[2], palette);
    } else {
        render_skeleton(frame, chunks[2], palette, tick);
    }

    if loaded(AnalyticsSection::Stats) {
        render_stats(frame, chunks[3], &ctx, palette);
    } else {
        render_skeleton(frame, chunks[3], palette, tick);
    }

    let lower = if ctx.is_narrow() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[4])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[4])
    };

    if loaded(AnalyticsSection::Swot) {
        render_swot(frame, lower[0], palette);
    } else {
        render_skeleton(frame, lower[0], palette, tick);
    }

    if loaded(AnalyticsSection::Charts) {
        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(lower[1]);
        render_growth_chart(frame, charts[0], palette);
        render_distribution_chart(frame, charts[1], palette);
    } else {
        render_skeleton(frame, lower[1], palette, tick);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled(
        "Аналитика",
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )];
    if app.analytics.generating_report {
        spans.push(Span::styled(
            format!("  {} Создание PDF...", spinner_frame(app.tick_count)),
            Style::default().fg(palette.accent),
        ));
    } else {
        spans.push(Span::styled(
            "  p предпросмотр · d скачать PDF · o открыть · u тарифы",
            Style::default().fg(palette.dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_profile(frame: &mut Frame, area: Rect, palette: &Palette) {
    let profile = &mock_snapshot_ref().profile;
    let block = card("Профиль", palette);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", profile.initials()),
                Style::default()
                    .fg(palette.surface)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                profile.name.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", profile.position),
                Style::default().fg(palette.dim),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} проектов", profile.projects),
                Style::default().fg(palette.fg),
            ),
            Span::styled(
                format!("   {}% успешных", profile.success_rate),
                Style::default().fg(palette.success),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stats(frame: &mut Frame, area: Rect, ctx: &LayoutContext, palette: &Palette) {
    let columns = ctx.stat_columns();
    let rows: Vec<Rect> = if columns == 4 {
        vec![area]
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area)
            .to_vec()
    };

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row);
        for (col, cell) in cells.iter().enumerate() {
            let Some(tile) = mock_snapshot_ref().stats.get(row_index * columns + col) else {
                continue;
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border));
            let width = cell.width.saturating_sub(2) as usize;
            let line = Line::from(vec![
                Span::raw(format!("{} ", tile.icon)),
                Span::styled(
                    tile.value.clone(),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", truncate_string(&tile.label, width.saturating_sub(8))),
                    Style::default().fg(palette.dim),
                ),
            ]);
            frame.render_widget(Paragraph::new(line).block(block), *cell);
        }
    }
}

fn swot_color(kind: SwotKind, palette: &Palette) -> ratatui::style::Color {
    match kind {
        SwotKind::Strengths => palette.success,
        SwotKind::Weaknesses => palette.error,
        SwotKind::Opportunities => palette.info,
        SwotKind::Threats => palette.warning,
    }
}

fn render_swot(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = card("SWOT-анализ", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    let quadrants = rows.iter().flat_map(|row| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row)
            .to_vec()
    });

    for (kind, quadrant) in SwotKind::ALL.into_iter().zip(quadrants) {
        let color = swot_color(kind, palette);
        let mut lines = vec![Line::from(Span::styled(
            format!("{} {}", kind.icon(), kind.title()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(mock_snapshot_ref().swot.entries(kind).iter().map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::styled(entry.clone(), Style::default().fg(palette.fg)),
            ])
        }));
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            quadrant,
        );
    }
}

fn render_growth_chart(frame: &mut Frame, area: Rect, palette: &Palette) {
    let growth = &mock_snapshot_ref().chart_data.growth;
    let values: Vec<u32> = growth.iter().map(|p| p.value).collect();
    let Some(geometry) = ChartGeometry::compute(&values) else {
        return;
    };

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.accent))
        .data(&geometry.points);

    let x_labels: Vec<Line> = growth
        .iter()
        .map(|p| Line::from(p.month.clone()))
        .collect();
    let y_labels: Vec<Line> = geometry
        .y_ticks
        .iter()
        .map(|(_, label)| Line::from(label.clone()))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(card("Рост показателей", palette))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.dim))
                .bounds([0.0, geometry.x_max()])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.dim))
                .bounds([geometry.y_min, geometry.y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

fn render_distribution_chart(frame: &mut Frame, area: Rect, palette: &Palette) {
    let bars: Vec<Bar> = mock_snapshot_ref()
        .chart_data
        .distribution
        .iter()
        .map(|slice| {
            Bar::default()
                .value(u64::from(slice.value))
                .label(Line::from(slice.label.clone()))
                .text_value(format!("{}%", slice.value))
                .style(Style::default().fg(palette.accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(card("Распределение", palette))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(100)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
