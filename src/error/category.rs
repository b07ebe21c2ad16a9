//! Who a failure is meant for.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad form input or a gated action. Shown inline, nothing mutated.
    User,
    /// The filesystem or the OS refused (theme file, export target).
    System,
    /// Bad command-line values. Reported before the UI starts.
    Configuration,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "config",
        }
    }

    /// Whether a toast is raised for it.
    pub fn is_user_visible(self) -> bool {
        !matches!(self, ErrorCategory::Configuration)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
