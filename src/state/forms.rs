//! Modal form state for the tool editors.
//!
//! A form is a flat list of fields. Text fields collect typed characters;
//! choice fields cycle through a fixed option list with Left/Right.

/// An enum offered as a choice field.
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPurpose {
    Create,
    Edit,
}

impl FormPurpose {
    pub fn submit_label(self) -> &'static str {
        match self {
            FormPurpose::Create => "Создать",
            FormPurpose::Edit => "Сохранить",
        }
    }

    /// Toast title when validation fails.
    pub fn error_title(self) -> &'static str {
        match self {
            FormPurpose::Create => "Ошибка создания",
            FormPurpose::Edit => "Ошибка сохранения",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: Vec<&'static str>,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub required: bool,
    pub value: FieldValue,
}

impl FormField {
    pub fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            required: false,
            value: FieldValue::Text(value.to_string()),
        }
    }

    pub fn required_text(label: &'static str, value: &str) -> Self {
        Self {
            required: true,
            ..Self::text(label, value)
        }
    }

    pub fn choice<C: Choice>(label: &'static str, current: C) -> Self {
        Self {
            label,
            required: false,
            value: FieldValue::Choice {
                options: C::ALL.iter().map(|c| c.label()).collect(),
                selected: current.index(),
            },
        }
    }

    /// Text shown in the input box.
    pub fn display(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text,
            FieldValue::Choice { options, selected } => options.get(*selected).copied().unwrap_or(""),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }
}

/// A form being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: &'static str,
    pub purpose: FormPurpose,
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl FormState {
    pub fn new(title: &'static str, purpose: FormPurpose, fields: Vec<FormField>) -> Self {
        Self {
            title,
            purpose,
            fields,
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    /// Type into the focused text field. Ignored on choice fields.
    pub fn insert_char(&mut self, c: char) {
        if let Some(FieldValue::Text(text)) = self.fields.get_mut(self.focus).map(|f| &mut f.value) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(FieldValue::Text(text)) = self.fields.get_mut(self.focus).map(|f| &mut f.value) {
            text.pop();
        }
    }

    /// Step the focused choice field forward or backward, wrapping around.
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(FieldValue::Choice { options, selected }) =
            self.fields.get_mut(self.focus).map(|f| &mut f.value)
        {
            let len = options.len();
            if len == 0 {
                return;
            }
            *selected = if forward {
                (*selected + 1) % len
            } else {
                (*selected + len - 1) % len
            };
        }
    }

    /// Trimmed text of field `index`; empty for choice fields.
    pub fn text(&self, index: usize) -> &str {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Text(text)) => text.trim(),
            _ => "",
        }
    }

    /// Selected option of field `index`, falling back to the first variant.
    pub fn choice<C: Choice>(&self, index: usize) -> C {
        let selected = match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Choice { selected, .. }) => *selected,
            _ => 0,
        };
        C::ALL.get(selected).copied().unwrap_or(C::ALL[0])
    }
}
