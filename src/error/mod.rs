//! Error handling for the mini-app.
//!
//! Each concern has its own `thiserror` enum; [`AppError`] unifies them so the
//! UI layer can turn any failure into a toast with [`AppError::user_message`].
//!
//! | Category      | Examples                                   | Surfaced as        |
//! |---------------|--------------------------------------------|--------------------|
//! | User          | empty required field, expired subscription | error toast        |
//! | System        | export write failed, theme file unwritable | error toast + log  |
//! | Configuration | bad `--expiry` value                       | startup error      |

mod category;

pub use category::ErrorCategory;

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the report export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The download target directory could not be created.
    #[error("не удалось подготовить папку {path}: {source}")]
    PrepareTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the document failed.
    #[error("не удалось записать {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sink refused the file for a reason of its own.
    #[error("{0}")]
    Rejected(String),
}

/// Failures of the theme preference store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme file: {0}")]
    Format(#[from] serde_json::Error),
}

/// A required form field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Toast title, e.g. «Ошибка создания».
    pub title: &'static str,
    /// Toast body naming what is missing.
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(title: &'static str, message: &'static str) -> Self {
        Self { title, message }
    }
}

/// Unified error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Export(_) | AppError::Storage(_) => ErrorCategory::System,
            AppError::Validation(_) => ErrorCategory::User,
            AppError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Best-effort message for the error toast body.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Export(ExportError::Rejected(msg)) => msg.clone(),
            AppError::Export(_) => "Не удалось создать PDF файл".to_string(),
            AppError::Storage(_) => "Не удалось сохранить настройки".to_string(),
            AppError::Validation(err) => err.message.to_string(),
            AppError::Config(msg) => msg.clone(),
        }
    }

    /// Log with a level matching the category.
    pub fn log(&self, context: &str) {
        let category = self.category();
        match category {
            ErrorCategory::User => tracing::info!(%category, "{}: {}", context, self),
            ErrorCategory::System => tracing::warn!(%category, "{}: {}", context, self),
            ErrorCategory::Configuration => tracing::error!(%category, "{}: {}", context, self),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_categorized_as_system() {
        let err: AppError = ExportError::Write {
            path: PathBuf::from("/tmp/x.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.user_message(), "Не удалось создать PDF файл");
    }

    #[test]
    fn test_rejected_export_keeps_its_message() {
        let err: AppError = ExportError::Rejected("диск переполнен".into()).into();
        assert_eq!(err.user_message(), "диск переполнен");
    }

    #[test]
    fn test_validation_error_is_user_category() {
        let err: AppError = ValidationError::new("Ошибка создания", "Введите название задачи").into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.user_message(), "Введите название задачи");
        assert_eq!(err.to_string(), "Введите название задачи");
    }

    #[test]
    fn test_storage_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = StorageError::from(serde_err).into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.to_string().starts_with("invalid theme file"));
    }
}
