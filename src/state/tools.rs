//! Tools screen: catalog plus the content, email and task boards.
//!
//! Boards are plain in-memory lists. Mutations are applied only after the
//! simulated latency elapses, so every operation here is synchronous and
//! already validated.

use std::time::Duration;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::state::forms::{Choice, FormField, FormPurpose, FormState};

/// Delay before the tool catalog appears.
pub const CATALOG_LOAD_DELAY: Duration = Duration::from_millis(1200);

/// Simulated latency of each tool operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOperation {
    CreateContent,
    EditContent,
    DeleteContent,
    CreateCampaign,
    SendCampaign,
    CreateTask,
    EditTask,
    DeleteTask,
    ToggleTask,
}

impl ToolOperation {
    pub fn delay(self) -> Duration {
        let ms = match self {
            ToolOperation::CreateContent => 1000,
            ToolOperation::EditContent => 800,
            ToolOperation::DeleteContent => 500,
            ToolOperation::CreateCampaign => 1000,
            ToolOperation::SendCampaign => 2000,
            ToolOperation::CreateTask => 800,
            ToolOperation::EditTask => 600,
            ToolOperation::DeleteTask => 500,
            ToolOperation::ToggleTask => 400,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Content,
    Email,
    Tasks,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Content, ToolKind::Email, ToolKind::Tasks];

    pub fn title(self) -> &'static str {
        match self {
            ToolKind::Content => "Контент",
            ToolKind::Email => "Рассылки",
            ToolKind::Tasks => "Задачи",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::Content => "Создание и управление контентом",
            ToolKind::Email => "Email и SMS маркетинг",
            ToolKind::Tasks => "Планирование и контроль",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Content => "📝",
            ToolKind::Email => "📧",
            ToolKind::Tasks => "✅",
        }
    }

    /// Item count advertised on the catalog card.
    pub fn catalog_count(self) -> u32 {
        match self {
            ToolKind::Content => 12,
            ToolKind::Email => 8,
            ToolKind::Tasks => 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChannel {
    Instagram,
    Facebook,
    Blog,
    Email,
}

impl Choice for ContentChannel {
    const ALL: &'static [Self] = &[
        ContentChannel::Instagram,
        ContentChannel::Facebook,
        ContentChannel::Blog,
        ContentChannel::Email,
    ];

    fn label(self) -> &'static str {
        match self {
            ContentChannel::Instagram => "Instagram",
            ContentChannel::Facebook => "Facebook",
            ContentChannel::Blog => "Blog",
            ContentChannel::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    InProgress,
    Ready,
}

impl Choice for ContentStatus {
    const ALL: &'static [Self] = &[
        ContentStatus::Draft,
        ContentStatus::InProgress,
        ContentStatus::Ready,
    ];

    fn label(self) -> &'static str {
        match self {
            ContentStatus::Draft => "Черновик",
            ContentStatus::InProgress => "В работе",
            ContentStatus::Ready => "Готов",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    pub channel: ContentChannel,
    pub status: ContentStatus,
    pub body: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Draft,
    Sent,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Черновик",
            CampaignStatus::Sent => "Отправлена",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub status: CampaignStatus,
    pub recipients: u32,
    pub opened: u32,
    pub clicked: u32,
    pub date: NaiveDate,
}

impl Campaign {
    /// Open rate in whole percent, 0 when nothing was sent.
    pub fn open_rate(&self) -> u32 {
        if self.recipients == 0 {
            0
        } else {
            (self.opened as f64 / self.recipients as f64 * 100.0).round() as u32
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Choice for Priority {
    const ALL: &'static [Self] = &[Priority::Low, Priority::Medium, Priority::High];

    fn label(self) -> &'static str {
        match self {
            Priority::Low => "Низкий",
            Priority::Medium => "Средний",
            Priority::High => "Высокий",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Planned,
    InProgress,
    Done,
}

impl Choice for TaskStatus {
    const ALL: &'static [Self] = &[TaskStatus::Planned, TaskStatus::InProgress, TaskStatus::Done];

    fn label(self) -> &'static str {
        match self {
            TaskStatus::Planned => "Планируется",
            TaskStatus::InProgress => "В работе",
            TaskStatus::Done => "Готово",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn parse_date(value: &str, fallback: NaiveDate) -> Option<NaiveDate> {
    if value.is_empty() {
        return Some(fallback);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn seed_content() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: Uuid::new_v4(),
            title: "Пост о новом продукте".to_string(),
            channel: ContentChannel::Instagram,
            status: ContentStatus::Ready,
            body: "Представляем наш новый продукт! 🚀 Инновационное решение для вашего бизнеса."
                .to_string(),
            date: date(2024, 1, 15),
        },
        ContentItem {
            id: Uuid::new_v4(),
            title: "Статья в блог".to_string(),
            channel: ContentChannel::Blog,
            status: ContentStatus::InProgress,
            body: "Как увеличить продажи в 2024 году: 10 проверенных стратегий...".to_string(),
            date: date(2024, 1, 16),
        },
    ]
}

pub fn seed_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: Uuid::new_v4(),
            name: "Новогодняя акция".to_string(),
            subject: "🎄 Скидки до 50% на все товары!".to_string(),
            body: String::new(),
            status: CampaignStatus::Sent,
            recipients: 1250,
            opened: 875,
            clicked: 156,
            date: date(2024, 1, 10),
        },
        Campaign {
            id: Uuid::new_v4(),
            name: "Еженедельная рассылка".to_string(),
            subject: "Новости недели и полезные советы".to_string(),
            body: String::new(),
            status: CampaignStatus::Draft,
            recipients: 0,
            opened: 0,
            clicked: 0,
            date: date(2024, 1, 15),
        },
    ]
}

pub fn seed_tasks() -> Vec<TaskItem> {
    let task = |title: &str, description: &str, status, priority, assignee: &str, due, completed| {
        TaskItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority,
            assignee: assignee.to_string(),
            due_date: due,
            completed,
        }
    };
    vec![
        task(
            "Создать контент-план",
            "Разработать план контента на следующий месяц",
            TaskStatus::InProgress,
            Priority::High,
            "Анна",
            date(2024, 1, 20),
            false,
        ),
        task(
            "Настроить рекламу",
            "Запустить рекламную кампанию в социальных сетях",
            TaskStatus::Done,
            Priority::Medium,
            "Петр",
            date(2024, 1, 15),
            true,
        ),
        task(
            "Анализ конкурентов",
            "Провести исследование конкурентов в нише",
            TaskStatus::Planned,
            Priority::Low,
            "Мария",
            date(2024, 1, 25),
            false,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDraft {
    pub title: String,
    pub channel: ContentChannel,
    pub status: ContentStatus,
    pub body: String,
}

impl ContentDraft {
    const TITLE: usize = 0;
    const CHANNEL: usize = 1;
    const STATUS: usize = 2;
    const BODY: usize = 3;

    pub fn form(purpose: FormPurpose, existing: Option<&ContentItem>) -> FormState {
        let title = match purpose {
            FormPurpose::Create => "Новый контент",
            FormPurpose::Edit => "Редактировать контент",
        };
        FormState::new(
            title,
            purpose,
            vec![
                FormField::required_text("Название", existing.map_or("", |c| c.title.as_str())),
                FormField::choice("Тип", existing.map_or(ContentChannel::Instagram, |c| c.channel)),
                FormField::choice("Статус", existing.map_or(ContentStatus::Draft, |c| c.status)),
                FormField::required_text("Текст", existing.map_or("", |c| c.body.as_str())),
            ],
        )
    }

    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        let draft = Self {
            title: form.text(Self::TITLE).to_string(),
            channel: form.choice(Self::CHANNEL),
            status: form.choice(Self::STATUS),
            body: form.text(Self::BODY).to_string(),
        };
        if draft.title.is_empty() || draft.body.is_empty() {
            return Err(ValidationError::new(
                form.purpose.error_title(),
                "Заполните все обязательные поля",
            ));
        }
        Ok(draft)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub subject: String,
    pub body: String,
}

impl CampaignDraft {
    pub fn form() -> FormState {
        FormState::new(
            "Новая рассылка",
            FormPurpose::Create,
            vec![
                FormField::required_text("Название", ""),
                FormField::required_text("Тема письма", ""),
                FormField::text("Текст письма", ""),
            ],
        )
    }

    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        let draft = Self {
            name: form.text(0).to_string(),
            subject: form.text(1).to_string(),
            body: form.text(2).to_string(),
        };
        if draft.name.is_empty() || draft.subject.is_empty() {
            return Err(ValidationError::new(
                form.purpose.error_title(),
                "Заполните название и тему рассылки",
            ));
        }
        Ok(draft)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assignee: String,
    pub due_date: NaiveDate,
}

impl TaskDraft {
    const TITLE: usize = 0;
    const DESCRIPTION: usize = 1;
    const PRIORITY: usize = 2;
    const STATUS: usize = 3;
    const ASSIGNEE: usize = 4;
    const DUE: usize = 5;

    pub fn form(purpose: FormPurpose, existing: Option<&TaskItem>) -> FormState {
        let title = match purpose {
            FormPurpose::Create => "Новая задача",
            FormPurpose::Edit => "Редактировать задачу",
        };
        let due = existing
            .map(|t| t.due_date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        FormState::new(
            title,
            purpose,
            vec![
                FormField::required_text("Название", existing.map_or("", |t| t.title.as_str())),
                FormField::text("Описание", existing.map_or("", |t| t.description.as_str())),
                FormField::choice("Приоритет", existing.map_or(Priority::Medium, |t| t.priority)),
                FormField::choice("Статус", existing.map_or(TaskStatus::Planned, |t| t.status)),
                FormField::text("Исполнитель", existing.map_or("", |t| t.assignee.as_str())),
                FormField::text("Срок (ГГГГ-ММ-ДД)", &due),
            ],
        )
    }

    /// `today` fills an empty due date.
    pub fn from_form(form: &FormState, today: NaiveDate) -> Result<Self, ValidationError> {
        let title = form.text(Self::TITLE).to_string();
        if title.is_empty() {
            return Err(ValidationError::new(
                form.purpose.error_title(),
                "Введите название задачи",
            ));
        }
        let due_date = parse_date(form.text(Self::DUE), today).ok_or_else(|| {
            ValidationError::new(form.purpose.error_title(), "Неверный формат даты")
        })?;
        Ok(Self {
            title,
            description: form.text(Self::DESCRIPTION).to_string(),
            priority: form.choice(Self::PRIORITY),
            status: form.choice(Self::STATUS),
            assignee: form.text(Self::ASSIGNEE).to_string(),
            due_date,
        })
    }
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ContentBoard {
    pub items: Vec<ContentItem>,
}

impl ContentBoard {
    pub fn seeded() -> Self {
        Self {
            items: seed_content(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&ContentItem> {
        self.items.iter().find(|c| c.id == id)
    }

    /// New items go to the top of the list.
    pub fn create(&mut self, draft: ContentDraft, today: NaiveDate) -> &ContentItem {
        self.items.insert(
            0,
            ContentItem {
                id: Uuid::new_v4(),
                title: draft.title,
                channel: draft.channel,
                status: draft.status,
                body: draft.body,
                date: today,
            },
        );
        &self.items[0]
    }

    pub fn update(&mut self, id: Uuid, draft: ContentDraft) -> Option<&ContentItem> {
        let item = self.items.iter_mut().find(|c| c.id == id)?;
        item.title = draft.title;
        item.channel = draft.channel;
        item.status = draft.status;
        item.body = draft.body;
        Some(item)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<ContentItem> {
        let index = self.items.iter().position(|c| c.id == id)?;
        Some(self.items.remove(index))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignBoard {
    pub items: Vec<Campaign>,
}

impl CampaignBoard {
    pub fn seeded() -> Self {
        Self {
            items: seed_campaigns(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Campaign> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn create(&mut self, draft: CampaignDraft, today: NaiveDate) -> &Campaign {
        self.items.insert(
            0,
            Campaign {
                id: Uuid::new_v4(),
                name: draft.name,
                subject: draft.subject,
                body: draft.body,
                status: CampaignStatus::Draft,
                recipients: 0,
                opened: 0,
                clicked: 0,
                date: today,
            },
        );
        &self.items[0]
    }

    pub fn mark_sent(&mut self, id: Uuid, recipients: u32) -> Option<&Campaign> {
        let campaign = self.items.iter_mut().find(|c| c.id == id)?;
        campaign.status = CampaignStatus::Sent;
        campaign.recipients = recipients;
        Some(campaign)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    pub items: Vec<TaskItem>,
}

impl TaskBoard {
    pub fn seeded() -> Self {
        Self { items: seed_tasks() }
    }

    pub fn get(&self, id: Uuid) -> Option<&TaskItem> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn create(&mut self, draft: TaskDraft) -> &TaskItem {
        self.items.insert(
            0,
            TaskItem {
                id: Uuid::new_v4(),
                title: draft.title,
                description: draft.description,
                status: TaskStatus::Planned,
                priority: draft.priority,
                assignee: draft.assignee,
                due_date: draft.due_date,
                completed: false,
            },
        );
        &self.items[0]
    }

    pub fn update(&mut self, id: Uuid, draft: TaskDraft) -> Option<&TaskItem> {
        let task = self.items.iter_mut().find(|t| t.id == id)?;
        task.title = draft.title;
        task.description = draft.description;
        task.priority = draft.priority;
        task.status = draft.status;
        task.completed = draft.status == TaskStatus::Done;
        task.assignee = draft.assignee;
        task.due_date = draft.due_date;
        Some(task)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<TaskItem> {
        let index = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(index))
    }

    /// Flip completion. Done tasks go back to «В работе».
    pub fn toggle(&mut self, id: Uuid) -> Option<&TaskItem> {
        let task = self.items.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        task.status = if task.completed {
            TaskStatus::Done
        } else {
            TaskStatus::InProgress
        };
        Some(task)
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Which part of the tools screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolView {
    Catalog,
    Open(ToolKind),
    /// Full text of one content item.
    ContentDetail(Uuid),
}

/// What a pending delete confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Content(Uuid),
    Task(Uuid),
}

impl DeleteTarget {
    pub fn prompt(self) -> &'static str {
        match self {
            DeleteTarget::Content(_) => "Вы уверены, что хотите удалить этот контент?",
            DeleteTarget::Task(_) => "Вы уверены, что хотите удалить эту задачу?",
        }
    }
}

/// Open form plus the record it edits, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolForm {
    pub tool: ToolKind,
    pub editing: Option<Uuid>,
    pub state: FormState,
}

/// Local state of a mounted tools screen.
#[derive(Debug, Clone)]
pub struct ToolsScreen {
    pub catalog_loaded: bool,
    pub view: ToolView,
    pub catalog_cursor: usize,
    pub list_cursor: usize,
    pub content: ContentBoard,
    pub campaigns: CampaignBoard,
    pub tasks: TaskBoard,
    pub form: Option<ToolForm>,
    pub confirm_delete: Option<DeleteTarget>,
    /// An operation is waiting on its simulated latency.
    pub busy: bool,
}

impl Default for ToolsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolsScreen {
    pub fn new() -> Self {
        Self {
            catalog_loaded: false,
            view: ToolView::Catalog,
            catalog_cursor: 0,
            list_cursor: 0,
            content: ContentBoard::seeded(),
            campaigns: CampaignBoard::seeded(),
            tasks: TaskBoard::seeded(),
            form: None,
            confirm_delete: None,
            busy: false,
        }
    }

    pub fn selected_tool(&self) -> ToolKind {
        ToolKind::ALL[self.catalog_cursor.min(ToolKind::ALL.len() - 1)]
    }

    /// Number of rows in the current list view.
    pub fn list_len(&self) -> usize {
        match self.view {
            ToolView::Catalog => ToolKind::ALL.len(),
            ToolView::Open(ToolKind::Content) => self.content.items.len(),
            ToolView::Open(ToolKind::Email) => self.campaigns.items.len(),
            ToolView::Open(ToolKind::Tasks) => self.tasks.items.len(),
            ToolView::ContentDetail(_) => 0,
        }
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let cursor = match self.view {
            ToolView::Catalog => &mut self.catalog_cursor,
            _ => &mut self.list_cursor,
        };
        *cursor = if down {
            (*cursor + 1).min(len - 1)
        } else {
            cursor.saturating_sub(1)
        };
    }

    /// Keep the list cursor inside the list after removals.
    pub fn clamp_cursor(&mut self) {
        let len = self.list_len();
        self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
    }

    pub fn open(&mut self, tool: ToolKind) {
        self.view = ToolView::Open(tool);
        self.list_cursor = 0;
    }

    /// Step back one level. Returns false when already at the catalog.
    pub fn back(&mut self) -> bool {
        match self.view {
            ToolView::Catalog => false,
            ToolView::Open(_) => {
                self.view = ToolView::Catalog;
                true
            }
            ToolView::ContentDetail(_) => {
                self.view = ToolView::Open(ToolKind::Content);
                true
            }
        }
    }

    pub fn selected_content(&self) -> Option<&ContentItem> {
        match self.view {
            ToolView::Open(ToolKind::Content) => self.content.items.get(self.list_cursor),
            ToolView::ContentDetail(id) => self.content.get(id),
            _ => None,
        }
    }

    pub fn selected_campaign(&self) -> Option<&Campaign> {
        match self.view {
            ToolView::Open(ToolKind::Email) => self.campaigns.items.get(self.list_cursor),
            _ => None,
        }
    }

    pub fn selected_task(&self) -> Option<&TaskItem> {
        match self.view {
            ToolView::Open(ToolKind::Tasks) => self.tasks.items.get(self.list_cursor),
            _ => None,
        }
    }
}
