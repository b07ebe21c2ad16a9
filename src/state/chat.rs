//! Chat screen state: message history, input line and attachment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Delay before the seeded history appears.
pub const HISTORY_LOAD_DELAY: Duration = Duration::from_millis(1500);
/// Simulated latency of sending a message.
pub const SEND_DELAY: Duration = Duration::from_millis(1000);
/// Time the assistant "types" before replying.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

pub const DEFAULT_REPLY: &str =
    "Отличный вопрос! Давайте разберем это пошагово. Я помогу вам создать детальный план.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// A file picked for sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    pub mime: &'static str,
    pub path: PathBuf,
}

impl Attachment {
    /// Stat a local file. Directories are rejected.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            mime: guess_mime(&name),
            name,
            size: meta.len(),
            path: path.to_path_buf(),
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// MIME type from the file extension.
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Human-readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2.25 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
}

impl ChatMessage {
    /// `HH:MM` shown under the bubble.
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// What the input line asks for when Enter is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Send(String),
    Attach(PathBuf),
    /// `/attach` typed without a path
    AttachWithoutPath,
    Detach,
    Nothing,
}

/// Interpret the input line. `/attach <path>` and `/detach` are commands;
/// anything else is message text. Blank input with no attachment does nothing.
pub fn parse_input(input: &str, has_attachment: bool) -> ChatCommand {
    let trimmed = input.trim();
    if trimmed == "/attach" {
        return ChatCommand::AttachWithoutPath;
    }
    if let Some(path) = trimmed.strip_prefix("/attach ") {
        return ChatCommand::Attach(PathBuf::from(path.trim()));
    }
    if trimmed == "/detach" {
        return ChatCommand::Detach;
    }
    if trimmed.is_empty() && !has_attachment {
        return ChatCommand::Nothing;
    }
    ChatCommand::Send(trimmed.to_string())
}

/// Text of the outgoing user message.
pub fn outgoing_text(text: &str, attachment: Option<&Attachment>) -> String {
    match attachment {
        Some(file) if text.is_empty() => format!("Отправил файл: {}", file.name),
        _ => text.to_string(),
    }
}

/// The canned assistant answer.
pub fn assistant_reply(attachment_name: Option<&str>) -> String {
    match attachment_name {
        Some(name) => format!("Получил ваш файл \"{}\". Анализирую содержимое...", name),
        None => DEFAULT_REPLY.to_string(),
    }
}

/// Local state of a mounted chat screen.
#[derive(Debug, Clone, Default)]
pub struct ChatScreen {
    pub loaded: bool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub attachment: Option<Attachment>,
    /// The assistant reply is pending.
    pub typing: bool,
    /// A send is waiting on its simulated latency.
    pub sending: bool,
    next_id: u64,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Replace the history with the greeting conversation.
    pub fn load_history(&mut self, now: DateTime<Utc>) {
        self.messages.clear();
        self.push(
            Author::Assistant,
            "Привет! Я ваш AI-помощник. Чем могу помочь? 😊",
            now,
            None,
        );
        self.push(
            Author::User,
            "Привет! Можешь помочь мне с планированием проекта?",
            now,
            None,
        );
        self.push(
            Author::Assistant,
            "Конечно! Расскажите подробнее о вашем проекте. Какие у вас цели и временные рамки?",
            now,
            None,
        );
        self.loaded = true;
    }

    pub fn push(
        &mut self,
        author: Author,
        text: &str,
        sent_at: DateTime<Utc>,
        attachment: Option<Attachment>,
    ) -> &ChatMessage {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.messages.push(ChatMessage {
            id,
            author,
            text: text.to_string(),
            sent_at,
            attachment,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn placeholder(expired: bool) -> &'static str {
        if expired {
            "Подписка истекла..."
        } else {
            "Напишите сообщение..."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(2_362_232), "2.25 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("   ", false), ChatCommand::Nothing);
        assert_eq!(parse_input("", true), ChatCommand::Send(String::new()));
        assert_eq!(parse_input(" привет ", false), ChatCommand::Send("привет".into()));
        assert_eq!(
            parse_input("/attach /tmp/a.pdf", false),
            ChatCommand::Attach(PathBuf::from("/tmp/a.pdf"))
        );
        assert_eq!(parse_input("/detach", true), ChatCommand::Detach);
    }

    #[test]
    fn test_bare_attach_is_a_command() {
        assert_eq!(parse_input("/attach", false), ChatCommand::AttachWithoutPath);
        assert_eq!(parse_input("  /attach   ", true), ChatCommand::AttachWithoutPath);
        assert_eq!(
            parse_input("/attachment", false),
            ChatCommand::Send("/attachment".into())
        );
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("photo.JPG"), "image/jpeg");
        assert_eq!(guess_mime("report.pdf"), "application/pdf");
        assert_eq!(guess_mime("noext"), "application/octet-stream");
    }

    #[test]
    fn test_attachment_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        let file = Attachment::from_path(&path).unwrap();
        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.size, 5);
        assert_eq!(file.mime, "text/plain");
        assert!(!file.is_image());

        assert!(Attachment::from_path(dir.path()).is_err());
        assert!(Attachment::from_path(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_reply_texts() {
        assert_eq!(assistant_reply(None), DEFAULT_REPLY);
        assert_eq!(
            assistant_reply(Some("a.pdf")),
            "Получил ваш файл \"a.pdf\". Анализирую содержимое..."
        );
        let file = Attachment {
            name: "a.pdf".into(),
            size: 1,
            mime: "application/pdf",
            path: PathBuf::from("a.pdf"),
        };
        assert_eq!(outgoing_text("", Some(&file)), "Отправил файл: a.pdf");
        assert_eq!(outgoing_text("hi", Some(&file)), "hi");
    }

    #[test]
    fn test_load_history_seeds_three_messages() {
        let mut chat = ChatScreen::new();
        chat.load_history(Utc::now());
        assert!(chat.loaded);
        let authors: Vec<_> = chat.messages.iter().map(|m| m.author).collect();
        assert_eq!(authors, vec![Author::Assistant, Author::User, Author::Assistant]);
        let ids: Vec<_> = chat.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
