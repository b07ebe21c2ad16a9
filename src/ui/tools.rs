//! Tools screen rendering
//!
//! The catalog of three tools, the list view of each tool, the content detail
//! view, and the two screen-local overlays: the create/edit form and the
//! delete confirmation.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::forms::Choice;
use crate::state::tools::{
    Campaign, CampaignStatus, ContentItem, DeleteTarget, Priority, TaskItem, ToolForm, ToolKind,
    ToolView, ToolsScreen,
};

use super::components::{
    render_input_field, render_skeleton, Dialog, InputFieldConfig, INPUT_FIELD_HEIGHT,
};
use super::helpers::{spinner_frame, truncate_string};
use super::theme::Palette;

pub fn render_tools_screen(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let tools = &app.tools;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_title(frame, chunks[0], app, palette);

    match tools.view {
        ToolView::Catalog if !tools.catalog_loaded => {
            render_skeleton(frame, chunks[1], palette, app.tick_count)
        }
        ToolView::Catalog => render_catalog(frame, chunks[1], tools, palette),
        ToolView::Open(ToolKind::Content) => {
            let lines = content_lines(&tools.content.items, tools.list_cursor, palette);
            render_list(frame, chunks[1], ToolKind::Content, lines, palette)
        }
        ToolView::Open(ToolKind::Email) => {
            let lines = campaign_lines(&tools.campaigns.items, tools.list_cursor, palette);
            render_list(frame, chunks[1], ToolKind::Email, lines, palette)
        }
        ToolView::Open(ToolKind::Tasks) => {
            let lines = task_lines(&tools.tasks.items, tools.list_cursor, palette);
            render_list(frame, chunks[1], ToolKind::Tasks, lines, palette)
        }
        ToolView::ContentDetail(id) => {
            if let Some(item) = tools.content.get(id) {
                render_content_detail(frame, chunks[1], item, palette);
            }
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            key_hints(tools.view),
            Style::default().fg(palette.dim),
        ))),
        chunks[2],
    );

    if let Some(form) = &tools.form {
        render_form(frame, area, form, palette);
    } else if let Some(target) = tools.confirm_delete {
        render_delete_confirm(frame, area, target, palette);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = match app.tools.view {
        ToolView::Catalog => "Инструменты".to_string(),
        ToolView::Open(tool) => format!("Инструменты › {}", tool.title()),
        ToolView::ContentDetail(_) => format!("Инструменты › {}", ToolKind::Content.title()),
    };
    let mut spans = vec![Span::styled(
        title,
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )];
    if app.tools.busy {
        spans.push(Span::styled(
            format!("  {}", spinner_frame(app.tick_count)),
            Style::default().fg(palette.accent),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Footer hint for each view.
pub fn key_hints(view: ToolView) -> &'static str {
    match view {
        ToolView::Catalog => "↑↓ выбор · Enter открыть · u тарифы",
        ToolView::Open(ToolKind::Content) => {
            "↑↓ выбор · Enter читать · n создать · e изменить · x удалить · Esc назад"
        }
        ToolView::Open(ToolKind::Email) => "↑↓ выбор · n создать · s отправить · Esc назад",
        ToolView::Open(ToolKind::Tasks) => {
            "↑↓ выбор · Space готово · n создать · e изменить · x удалить · Esc назад"
        }
        ToolView::ContentDetail(_) => "Esc назад",
    }
}

fn render_catalog(frame: &mut Frame, area: Rect, tools: &ToolsScreen, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4); 3])
        .split(area);

    for (index, (tool, row)) in ToolKind::ALL.iter().zip(rows.iter()).enumerate() {
        let selected = index == tools.catalog_cursor;
        let border = if selected { palette.accent } else { palette.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let width = row.width.saturating_sub(4) as usize;
        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", tool.icon())),
                Span::styled(
                    tool.title(),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", tool.catalog_count()),
                    Style::default().fg(palette.accent),
                ),
            ]),
            Line::from(Span::styled(
                truncate_string(tool.description(), width),
                Style::default().fg(palette.dim),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), *row);
    }
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    tool: ToolKind,
    lines: Vec<Line<'static>>,
    palette: &Palette,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", tool.icon(), tool.title()),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));

    let lines = if lines.is_empty() {
        vec![Line::from(Span::styled(
            "Пока пусто. Нажмите n, чтобы создать.",
            Style::default().fg(palette.dim),
        ))]
    } else {
        lines
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn row_style(selected: bool, palette: &Palette) -> Style {
    if selected {
        Style::default()
            .fg(palette.fg)
            .bg(palette.skeleton)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg)
    }
}

fn marker(selected: bool) -> &'static str {
    if selected {
        "▶ "
    } else {
        "  "
    }
}

pub fn content_lines(
    items: &[ContentItem],
    cursor: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == cursor;
            Line::from(vec![
                Span::styled(marker(selected), Style::default().fg(palette.accent)),
                Span::styled(item.title.clone(), row_style(selected, palette)),
                Span::styled(
                    format!(
                        "  {} · {} · {}",
                        item.channel.label(),
                        item.status.label(),
                        item.date.format("%d.%m.%Y")
                    ),
                    Style::default().fg(palette.dim),
                ),
            ])
        })
        .collect()
}

pub fn campaign_lines(
    items: &[Campaign],
    cursor: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, campaign)| {
            let selected = i == cursor;
            let status_color = match campaign.status {
                CampaignStatus::Sent => palette.success,
                CampaignStatus::Draft => palette.warning,
            };
            let mut spans = vec![
                Span::styled(marker(selected), Style::default().fg(palette.accent)),
                Span::styled(campaign.name.clone(), row_style(selected, palette)),
                Span::styled(
                    format!("  [{}]", campaign.status.label()),
                    Style::default().fg(status_color),
                ),
            ];
            if campaign.status == CampaignStatus::Sent {
                spans.push(Span::styled(
                    format!(
                        "  {} получателей · открыто {}%",
                        campaign.recipients,
                        campaign.open_rate()
                    ),
                    Style::default().fg(palette.dim),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

fn priority_color(priority: Priority, palette: &Palette) -> Color {
    match priority {
        Priority::High => palette.error,
        Priority::Medium => palette.warning,
        Priority::Low => palette.info,
    }
}

pub fn task_lines(items: &[TaskItem], cursor: usize, palette: &Palette) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let selected = i == cursor;
            let check = if task.completed { "[✓] " } else { "[ ] " };
            let title_style = if task.completed {
                row_style(selected, palette)
                    .fg(palette.dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                row_style(selected, palette)
            };
            Line::from(vec![
                Span::styled(marker(selected), Style::default().fg(palette.accent)),
                Span::styled(check, Style::default().fg(palette.success)),
                Span::styled(task.title.clone(), title_style),
                Span::styled(
                    format!("  {}", task.priority.label()),
                    Style::default().fg(priority_color(task.priority, palette)),
                ),
                Span::styled(
                    format!(
                        " · {} · {} · до {}",
                        task.status.label(),
                        task.assignee,
                        task.due_date.format("%d.%m.%Y")
                    ),
                    Style::default().fg(palette.dim),
                ),
            ])
        })
        .collect()
}

fn render_content_detail(frame: &mut Frame, area: Rect, item: &ContentItem, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", item.title),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent));
    let lines = vec![
        Line::from(Span::styled(
            format!(
                "{} · {} · {}",
                item.channel.label(),
                item.status.label(),
                item.date.format("%d.%m.%Y")
            ),
            Style::default().fg(palette.dim),
        )),
        Line::default(),
        Line::from(Span::styled(item.body.clone(), Style::default().fg(palette.fg))),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_form(frame: &mut Frame, area: Rect, form: &ToolForm, palette: &Palette) {
    let state = &form.state;
    let fields_height = state.fields.len() as u16 * INPUT_FIELD_HEIGHT;
    let inner = Dialog::new(state.title, fields_height + 2)
        .width_range(40, 70)
        .render(frame, area, palette);

    let mut y = inner.y;
    let bottom = inner.y + inner.height.saturating_sub(1);
    for (index, field) in state.fields.iter().enumerate() {
        if y + INPUT_FIELD_HEIGHT > bottom {
            break;
        }
        let field_area = Rect {
            y,
            height: INPUT_FIELD_HEIGHT,
            ..inner
        };
        let config = InputFieldConfig::from_field(field).focused(index == state.focus);
        y += render_input_field(frame, field_area, palette, &config);
    }

    let hints = Line::from(vec![
        Span::styled(
            format!("Enter {}", state.purpose.submit_label()),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " · Tab поле · Esc отмена",
            Style::default().fg(palette.dim),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(hints),
        Rect {
            y: bottom,
            height: 1,
            ..inner
        },
    );
}

fn render_delete_confirm(frame: &mut Frame, area: Rect, target: DeleteTarget, palette: &Palette) {
    let inner = Dialog::new("Удаление", 3)
        .danger(true)
        .render(frame, area, palette);
    let lines = vec![
        Line::from(Span::styled(target.prompt(), Style::default().fg(palette.fg))),
        Line::default(),
        Line::from(vec![
            Span::styled(
                "Enter удалить",
                Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · Esc отмена", Style::default().fg(palette.dim)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tools::{seed_campaigns, seed_tasks};
    use crate::ui::theme::LIGHT;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_task_lines_mark_cursor_and_completion() {
        let mut tasks = seed_tasks();
        tasks[1].completed = true;
        let lines = task_lines(&tasks, 1, &LIGHT);
        assert_eq!(lines.len(), tasks.len());
        assert!(text(&lines[0]).starts_with("  [ ] "));
        assert!(text(&lines[1]).starts_with("▶ [✓] "));
        assert!(lines[1].spans[2]
            .style
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_campaign_lines_show_open_rate_only_when_sent() {
        let campaigns = seed_campaigns();
        let lines = campaign_lines(&campaigns, 0, &LIGHT);
        for (campaign, line) in campaigns.iter().zip(&lines) {
            let rendered = text(line);
            assert!(rendered.contains(campaign.status.label()));
            assert_eq!(
                rendered.contains("открыто"),
                campaign.status == CampaignStatus::Sent
            );
        }
    }

    #[test]
    fn test_key_hints_per_view() {
        assert!(key_hints(ToolView::Catalog).contains("Enter"));
        assert!(key_hints(ToolView::Open(ToolKind::Email)).contains("s отправить"));
        assert!(key_hints(ToolView::Open(ToolKind::Tasks)).contains("Space"));
    }
}
