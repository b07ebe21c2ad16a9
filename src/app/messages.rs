//! AppMessage enum for async communication within the application.
//!
//! Spawned tasks only sleep and then post one of these. Screen-scoped
//! messages carry the mount generation they were started under; the handler
//! drops their screen effects when the user has navigated away since.

use std::path::PathBuf;

use uuid::Uuid;

use crate::state::analytics::AnalyticsSection;
use crate::state::chat::Attachment;
use crate::state::notifications::NotificationId;
use crate::state::tools::{CampaignDraft, ContentDraft, TaskDraft};

/// A tool mutation whose simulated latency has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCompletion {
    ContentCreated(ContentDraft),
    ContentUpdated { id: Uuid, draft: ContentDraft },
    ContentDeleted(Uuid),
    CampaignCreated(CampaignDraft),
    CampaignSent { id: Uuid, recipients: u32 },
    TaskCreated(TaskDraft),
    TaskUpdated { id: Uuid, draft: TaskDraft },
    TaskDeleted(Uuid),
    TaskToggled(Uuid),
}

/// Messages received from async operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Chat history delay elapsed
    ChatHistoryLoaded { generation: u64 },
    /// Send latency elapsed; append the user message
    ChatMessageSent {
        generation: u64,
        loading: NotificationId,
        text: String,
        attachment: Option<Attachment>,
    },
    /// The assistant finished "typing"
    AssistantReplied { generation: u64, text: String },
    /// One analytics section finished loading
    AnalyticsSectionLoaded {
        generation: u64,
        section: AnalyticsSection,
    },
    /// Tool catalog delay elapsed
    ToolsCatalogLoaded { generation: u64 },
    /// A tool create/edit/delete/toggle/send finished
    ToolFinished {
        generation: u64,
        loading: NotificationId,
        completion: ToolCompletion,
    },
    /// Report export finished; `Err` carries the toast message
    ReportExported {
        generation: u64,
        loading: NotificationId,
        result: Result<PathBuf, String>,
    },
    /// Plan "payment" finished
    PlanActivated { plan_id: &'static str },
}

impl AppMessage {
    /// Generation the message belongs to, `None` for app-wide messages.
    pub fn generation(&self) -> Option<u64> {
        match self {
            AppMessage::ChatHistoryLoaded { generation }
            | AppMessage::ChatMessageSent { generation, .. }
            | AppMessage::AssistantReplied { generation, .. }
            | AppMessage::AnalyticsSectionLoaded { generation, .. }
            | AppMessage::ToolsCatalogLoaded { generation }
            | AppMessage::ToolFinished { generation, .. }
            | AppMessage::ReportExported { generation, .. } => Some(*generation),
            AppMessage::PlanActivated { .. } => None,
        }
    }
}
