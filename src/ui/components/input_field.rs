//! Input Field Component
//!
//! A labelled single-line field with focus handling. Text fields show a block
//! cursor when focused; choice fields show `◀ value ▶`.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::forms::FormField;
use crate::ui::helpers::truncate_string;
use crate::ui::theme::Palette;

/// Rows used by one field: label plus a bordered box.
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Appends ` *` to the label
    pub required: bool,
    /// Render as a choice with arrows instead of a text box
    pub choice: bool,
    /// Shown dimmed when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            required: false,
            choice: false,
            placeholder: None,
        }
    }

    /// Configuration mirroring a form field.
    pub fn from_field(field: &'a FormField) -> Self {
        Self {
            required: field.required,
            choice: field.is_choice(),
            ..Self::new(field.label, field.display())
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text inside the box, before styling.
    fn content(&self, width: usize) -> String {
        if self.choice {
            return format!("◀ {} ▶", self.value);
        }
        let mut content = match self.placeholder {
            Some(placeholder) if self.value.is_empty() => placeholder.to_string(),
            _ => self.value.to_string(),
        };
        if self.focused {
            content.push('█');
        }
        // Keep the cursor visible on long values
        let chars: Vec<char> = content.chars().collect();
        if chars.len() > width && width > 0 {
            content = chars[chars.len() - width..].iter().collect();
        }
        content
    }
}

/// Render an input field and return the rows it used.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    config: &InputFieldConfig,
) -> u16 {
    if area.height < INPUT_FIELD_HEIGHT {
        return 0;
    }

    let label_style = if config.focused {
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let mut label = vec![Span::styled(
        truncate_string(config.label, area.width as usize),
        label_style,
    )];
    if config.required {
        label.push(Span::styled(" *", Style::default().fg(palette.error)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(label)),
        Rect { height: 1, ..area },
    );

    let border_color = if config.focused {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let text_style = if config.value.is_empty() {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.fg)
    };
    let box_area = Rect {
        y: area.y + 1,
        height: 3,
        ..area
    };
    let content = config.content(box_area.width.saturating_sub(2) as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        box_area,
    );

    INPUT_FIELD_HEIGHT
}
