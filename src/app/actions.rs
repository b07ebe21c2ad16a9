//! User-triggered operations.
//!
//! Every method here runs on the event loop in response to a key binding.
//! Operations that take time show a loading toast, record the mount
//! generation and post their completion back through the message channel.

use std::time::Duration;

use chrono::Local;
use rand::Rng;

use crate::error::AppError;
use crate::state::analytics::mock_snapshot;
use crate::state::chat::{parse_input, Attachment, ChatCommand, SEND_DELAY};
use crate::state::forms::FormPurpose;
use crate::state::subscription::{find_plan, PLANS};
use crate::state::theme::ThemePreference;
use crate::state::tools::{
    CampaignDraft, CampaignStatus, ContentDraft, DeleteTarget, TaskDraft, ToolForm, ToolKind,
    ToolOperation, ToolView,
};

use super::{App, AppMessage, MenuEntry, Modal, Tab, ToolCompletion};

/// Simulated payment latency.
const PLAN_ACTIVATION_DELAY: Duration = Duration::from_millis(1000);

const ACCESS_DENIED: &str = "Доступ ограничен";

impl App {
    /// Error toast shown instead of a gated action. Returns true when blocked.
    fn blocked_by_expiry(&mut self, message: &str) -> bool {
        if !self.subscription.is_expired {
            return false;
        }
        tracing::info!("Blocked by expired subscription: {}", message);
        self.notifications.show_error(ACCESS_DENIED, Some(message));
        self.mark_dirty();
        true
    }

    // -----------------------------------------------------------------------
    // Toasts
    // -----------------------------------------------------------------------

    pub fn dismiss_toast(&mut self) {
        if self.notifications.dismiss_latest().is_some() {
            self.mark_dirty();
        }
    }

    // -----------------------------------------------------------------------
    // Chat
    // -----------------------------------------------------------------------

    pub fn chat_insert_char(&mut self, c: char) {
        self.chat.input.push(c);
        self.mark_dirty();
    }

    pub fn chat_backspace(&mut self) {
        self.chat.input.pop();
        self.mark_dirty();
    }

    /// Act on the input line: send it, or run `/attach` / `/detach`.
    pub fn submit_chat_input(&mut self) {
        if !self.chat.loaded || self.chat.sending {
            return;
        }
        match parse_input(&self.chat.input, self.chat.attachment.is_some()) {
            ChatCommand::Nothing => {}
            ChatCommand::Attach(path) => {
                match Attachment::from_path(&path) {
                    Ok(file) => {
                        tracing::info!("Attached {} ({} bytes)", file.name, file.size);
                        let message = format!("{} готов к отправке", file.name);
                        self.notifications.show_success("Файл выбран", Some(&message));
                        self.chat.attachment = Some(file);
                        self.chat.input.clear();
                    }
                    Err(e) => {
                        tracing::warn!("Cannot attach {}: {}", path.display(), e);
                        let message = format!("Не удалось открыть {}", path.display());
                        self.notifications.show_error("Файл не выбран", Some(&message));
                    }
                }
                self.mark_dirty();
            }
            ChatCommand::AttachWithoutPath => {
                self.notifications
                    .show_error("Файл не выбран", Some("Укажите путь: /attach <путь>"));
                self.mark_dirty();
            }
            ChatCommand::Detach => {
                self.chat.attachment = None;
                self.chat.input.clear();
                self.mark_dirty();
            }
            ChatCommand::Send(text) => self.send_chat_message(text),
        }
    }

    fn send_chat_message(&mut self, text: String) {
        if self.blocked_by_expiry("Для отправки сообщений необходимо продлить подписку") {
            return;
        }
        tracing::info!("Sending chat message ({} chars)", text.chars().count());
        let loading = self.notifications.show_loading("Отправка сообщения...", None);
        let attachment = self.chat.attachment.take();
        self.chat.input.clear();
        self.chat.sending = true;
        let generation = self.generation;
        self.spawn_after(
            SEND_DELAY,
            AppMessage::ChatMessageSent {
                generation,
                loading,
                text,
                attachment,
            },
        );
        self.mark_dirty();
    }

    // -----------------------------------------------------------------------
    // Chat menu and theme
    // -----------------------------------------------------------------------

    pub fn open_chat_menu(&mut self) {
        if self.tab != Tab::Chat {
            return;
        }
        self.modal = Some(Modal::ChatMenu { cursor: 0 });
        self.mark_dirty();
    }

    /// Activate the highlighted chat menu row.
    pub fn confirm_chat_menu(&mut self, cursor: usize) {
        match MenuEntry::all().get(cursor).copied() {
            Some(MenuEntry::Theme(preference)) => self.set_theme(preference),
            Some(MenuEntry::Action(action)) => {
                tracing::info!("Menu action {:?}", action);
                self.notifications
                    .show_info(action.label(), Some(action.toast_message()));
                self.modal = None;
                self.mark_dirty();
            }
            None => {}
        }
    }

    /// Change and persist the theme preference.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        let saved = self.theme.set_preference(preference);
        let message = format!("Установлена {} тема", preference.adjective());
        self.notifications.show_success("Тема изменена", Some(&message));
        if let Err(e) = saved {
            let err = AppError::from(e);
            err.log("Failed to persist theme preference");
            if err.category().is_user_visible() {
                self.notifications
                    .show_error("Ошибка", Some(&err.user_message()));
            }
        }
        self.mark_dirty();
    }

    // -----------------------------------------------------------------------
    // Subscription modals
    // -----------------------------------------------------------------------

    /// Open the plan picker with the popular plan highlighted.
    pub fn open_plans(&mut self) {
        let cursor = PLANS.iter().position(|p| p.popular).unwrap_or(0);
        self.modal = Some(Modal::Plans {
            cursor,
            pending: false,
        });
        self.mark_dirty();
    }

    /// Close the plan picker, falling back to the expired notice if it still applies.
    pub fn close_plans(&mut self) {
        self.modal = if self.subscription.is_expired && !self.expired_modal_dismissed {
            Some(Modal::Expired)
        } else {
            None
        };
        self.mark_dirty();
    }

    /// Start the simulated purchase of the highlighted plan.
    pub fn select_plan(&mut self) {
        let Some(Modal::Plans { cursor, pending }) = self.modal else {
            return;
        };
        if pending {
            return;
        }
        let Some(plan) = PLANS.get(cursor) else {
            return;
        };
        tracing::info!("Activating plan {}", plan.id);
        self.modal = Some(Modal::Plans {
            cursor,
            pending: true,
        });
        self.spawn_after(
            PLAN_ACTIVATION_DELAY,
            AppMessage::PlanActivated { plan_id: plan.id },
        );
        self.mark_dirty();
    }

    pub(crate) fn finish_plan_activation(&mut self, plan_id: &str) {
        let name = find_plan(plan_id).map_or(plan_id, |p| p.name);
        let message = format!("Подписка \"{}\" успешно оформлена!", name);
        self.notifications
            .show_success("Подписка активирована!", Some(&message));
        if matches!(self.modal, Some(Modal::Plans { .. })) {
            self.modal = None;
        }
    }

    /// Hide the expired notice until the app restarts.
    pub fn dismiss_expired_modal(&mut self) {
        self.expired_modal_dismissed = true;
        self.modal = None;
        self.mark_dirty();
    }

    // -----------------------------------------------------------------------
    // Analytics
    // -----------------------------------------------------------------------

    pub fn open_report_preview(&mut self) {
        if self.tab != Tab::Analytics || self.analytics.is_loading() {
            return;
        }
        if self.blocked_by_expiry("Для предпросмотра PDF необходимо продлить подписку") {
            return;
        }
        self.modal = Some(Modal::ReportPreview);
        self.mark_dirty();
    }

    /// Render the report and hand it to the download sink off the event loop.
    pub fn download_report(&mut self) {
        if self.tab != Tab::Analytics || self.analytics.is_loading() {
            return;
        }
        if self.blocked_by_expiry("Для скачивания PDF необходимо продлить подписку") {
            return;
        }
        if self.analytics.generating_report {
            return;
        }
        if self.modal == Some(Modal::ReportPreview) {
            self.modal = None;
        }

        tracing::info!("Exporting analytics report");
        let loading = self.notifications.show_loading("Создание PDF отчета...", None);
        self.analytics.generating_report = true;
        self.begin_task();

        let generation = self.generation;
        let exporter = self.exporter().clone();
        let generated_at = self.now().with_timezone(&Local);
        let tx = self.message_tx.clone();
        tokio::task::spawn_blocking(move || {
            let result = exporter
                .export(&mock_snapshot(), &generated_at)
                .map_err(|e| {
                    let err = AppError::from(e);
                    err.log("Report export failed");
                    err.user_message()
                });
            let _ = tx.send(AppMessage::ReportExported {
                generation,
                loading,
                result,
            });
        });
        self.mark_dirty();
    }

    /// Open the most recent export with the system handler.
    pub fn open_last_export(&mut self) {
        match self.last_export.clone() {
            Some(path) => {
                if let Err(e) = open::that(&path) {
                    tracing::warn!("Failed to open {}: {}", path.display(), e);
                    self.notifications
                        .show_error("Не удалось открыть файл", Some(&path.display().to_string()));
                }
            }
            None => {
                self.notifications.show_info(
                    "Отчет еще не создан",
                    Some("Нажмите d, чтобы скачать отчет"),
                );
            }
        }
        self.mark_dirty();
    }

    // -----------------------------------------------------------------------
    // Tools
    // -----------------------------------------------------------------------

    pub fn tools_move(&mut self, down: bool) {
        self.tools.move_cursor(down);
        self.mark_dirty();
    }

    /// Enter on the tools screen: open a tool, view content, edit a task.
    pub fn tools_confirm(&mut self) {
        match self.tools.view {
            ToolView::Catalog => self.open_tool(self.tools.selected_tool()),
            ToolView::Open(ToolKind::Content) => self.view_content(),
            ToolView::Open(ToolKind::Tasks) => self.edit_item(),
            ToolView::Open(ToolKind::Email) | ToolView::ContentDetail(_) => {}
        }
    }

    pub fn open_tool(&mut self, tool: ToolKind) {
        if !self.tools.catalog_loaded {
            return;
        }
        let message = format!(
            "Для использования инструмента \"{}\" необходимо продлить подписку",
            tool.title()
        );
        if self.blocked_by_expiry(&message) {
            return;
        }
        tracing::debug!("Opening tool {:?}", tool);
        self.tools.open(tool);
        self.mark_dirty();
    }

    pub fn tools_back(&mut self) {
        if self.tools.back() {
            self.mark_dirty();
        }
    }

    pub fn view_content(&mut self) {
        if let Some(id) = self.tools.selected_content().map(|c| c.id) {
            self.tools.view = ToolView::ContentDetail(id);
            self.mark_dirty();
        }
    }

    pub fn new_item(&mut self) {
        if self.tools.busy {
            return;
        }
        let (tool, state) = match self.tools.view {
            ToolView::Open(ToolKind::Content) => (
                ToolKind::Content,
                ContentDraft::form(FormPurpose::Create, None),
            ),
            ToolView::Open(ToolKind::Email) => (ToolKind::Email, CampaignDraft::form()),
            ToolView::Open(ToolKind::Tasks) => {
                (ToolKind::Tasks, TaskDraft::form(FormPurpose::Create, None))
            }
            ToolView::Catalog | ToolView::ContentDetail(_) => return,
        };
        self.tools.form = Some(ToolForm {
            tool,
            editing: None,
            state,
        });
        self.mark_dirty();
    }

    pub fn edit_item(&mut self) {
        if self.tools.busy {
            return;
        }
        let form = if let Some(item) = self.tools.selected_content() {
            ToolForm {
                tool: ToolKind::Content,
                editing: Some(item.id),
                state: ContentDraft::form(FormPurpose::Edit, Some(item)),
            }
        } else if let Some(task) = self.tools.selected_task() {
            ToolForm {
                tool: ToolKind::Tasks,
                editing: Some(task.id),
                state: TaskDraft::form(FormPurpose::Edit, Some(task)),
            }
        } else {
            return;
        };
        self.tools.form = Some(form);
        self.mark_dirty();
    }

    pub fn cancel_form(&mut self) {
        self.tools.form = None;
        self.mark_dirty();
    }

    /// Validate the open form and schedule the create/edit it describes.
    ///
    /// Invalid input leaves the form open and shows an error toast.
    pub fn submit_form(&mut self) {
        if self.tools.busy {
            return;
        }
        let Some(form) = self.tools.form.as_ref() else {
            return;
        };
        let today = self.now().date_naive();

        let planned = match (form.tool, form.editing) {
            (ToolKind::Content, None) => ContentDraft::from_form(&form.state).map(|draft| {
                (
                    ToolOperation::CreateContent,
                    "Создание контента...",
                    ToolCompletion::ContentCreated(draft),
                )
            }),
            (ToolKind::Content, Some(id)) => ContentDraft::from_form(&form.state).map(|draft| {
                (
                    ToolOperation::EditContent,
                    "Сохранение изменений...",
                    ToolCompletion::ContentUpdated { id, draft },
                )
            }),
            (ToolKind::Email, _) => CampaignDraft::from_form(&form.state).map(|draft| {
                (
                    ToolOperation::CreateCampaign,
                    "Создание рассылки...",
                    ToolCompletion::CampaignCreated(draft),
                )
            }),
            (ToolKind::Tasks, None) => TaskDraft::from_form(&form.state, today).map(|draft| {
                (
                    ToolOperation::CreateTask,
                    "Создание задачи...",
                    ToolCompletion::TaskCreated(draft),
                )
            }),
            (ToolKind::Tasks, Some(id)) => TaskDraft::from_form(&form.state, today).map(|draft| {
                (
                    ToolOperation::EditTask,
                    "Сохранение изменений...",
                    ToolCompletion::TaskUpdated { id, draft },
                )
            }),
        };

        match planned {
            Ok((operation, loading_title, completion)) => {
                self.tools.form = None;
                self.run_tool_operation(operation, loading_title, completion);
            }
            Err(err) => {
                tracing::debug!("Form rejected: {}", err);
                self.notifications.show_error(err.title, Some(err.message));
                self.mark_dirty();
            }
        }
    }

    /// Ask for confirmation before deleting the selected content or task.
    pub fn request_delete(&mut self) {
        if self.tools.busy {
            return;
        }
        let target = if let Some(item) = self.tools.selected_content() {
            DeleteTarget::Content(item.id)
        } else if let Some(task) = self.tools.selected_task() {
            DeleteTarget::Task(task.id)
        } else {
            return;
        };
        self.tools.confirm_delete = Some(target);
        self.mark_dirty();
    }

    pub fn cancel_delete(&mut self) {
        self.tools.confirm_delete = None;
        self.mark_dirty();
    }

    pub fn confirm_delete(&mut self) {
        let Some(target) = self.tools.confirm_delete.take() else {
            return;
        };
        match target {
            DeleteTarget::Content(id) => self.run_tool_operation(
                ToolOperation::DeleteContent,
                "Удаление контента...",
                ToolCompletion::ContentDeleted(id),
            ),
            DeleteTarget::Task(id) => self.run_tool_operation(
                ToolOperation::DeleteTask,
                "Удаление задачи...",
                ToolCompletion::TaskDeleted(id),
            ),
        }
    }

    pub fn toggle_selected_task(&mut self) {
        if self.tools.busy {
            return;
        }
        let Some(task) = self.tools.selected_task() else {
            return;
        };
        let loading_title = if task.completed {
            "Возобновление задачи..."
        } else {
            "Завершение задачи..."
        };
        let id = task.id;
        self.run_tool_operation(
            ToolOperation::ToggleTask,
            loading_title,
            ToolCompletion::TaskToggled(id),
        );
    }

    pub fn send_selected_campaign(&mut self) {
        if self.tools.busy {
            return;
        }
        let Some(campaign) = self.tools.selected_campaign() else {
            return;
        };
        if campaign.status == CampaignStatus::Sent {
            self.notifications
                .show_info("Рассылка уже отправлена", Some(campaign.name.as_str()));
            self.mark_dirty();
            return;
        }
        let id = campaign.id;
        let recipients = rand::thread_rng().gen_range(500..1500);
        self.run_tool_operation(
            ToolOperation::SendCampaign,
            "Отправка рассылки...",
            ToolCompletion::CampaignSent { id, recipients },
        );
    }

    fn run_tool_operation(
        &mut self,
        operation: ToolOperation,
        loading_title: &str,
        completion: ToolCompletion,
    ) {
        tracing::info!("Tool operation {:?}", operation);
        let loading = self.notifications.show_loading(loading_title, None);
        self.tools.busy = true;
        let generation = self.generation;
        self.spawn_after(
            operation.delay(),
            AppMessage::ToolFinished {
                generation,
                loading,
                completion,
            },
        );
        self.mark_dirty();
    }
}
