//! Message handling for the App.

use crate::state::chat::{assistant_reply, outgoing_text, Author, REPLY_DELAY};
use crate::state::tools::ToolView;

use super::{App, AppMessage, ToolCompletion};

impl App {
    /// Handle an incoming async message.
    ///
    /// Loading toasts are hidden for every completion, even stale ones.
    /// Screen effects only apply while the mount that started the work is
    /// still showing.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.finish_task();
        self.mark_dirty();

        let current = msg.generation().map_or(true, |g| self.is_current(g));
        if !current {
            tracing::debug!("Dropping stale message {:?}", msg.generation());
        }

        match msg {
            AppMessage::ChatHistoryLoaded { .. } => {
                if current {
                    let now = self.now();
                    self.chat.load_history(now);
                }
            }
            AppMessage::ChatMessageSent {
                generation,
                loading,
                text,
                attachment,
            } => {
                self.notifications.hide(loading);
                if !current {
                    return;
                }
                let now = self.now();
                let body = outgoing_text(&text, attachment.as_ref());
                let reply = assistant_reply(attachment.as_ref().map(|a| a.name.as_str()));
                self.chat.push(Author::User, &body, now, attachment);
                self.chat.sending = false;
                self.notifications.show_success("Сообщение отправлено", None);
                self.chat.typing = true;
                self.spawn_after(
                    REPLY_DELAY,
                    AppMessage::AssistantReplied {
                        generation,
                        text: reply,
                    },
                );
            }
            AppMessage::AssistantReplied { text, .. } => {
                if current {
                    let now = self.now();
                    self.chat.push(Author::Assistant, &text, now, None);
                    self.chat.typing = false;
                }
            }
            AppMessage::AnalyticsSectionLoaded { section, .. } => {
                if current {
                    tracing::debug!("Analytics section {:?} loaded", section);
                    self.analytics.mark_loaded(section);
                }
            }
            AppMessage::ToolsCatalogLoaded { .. } => {
                if current {
                    self.tools.catalog_loaded = true;
                }
            }
            AppMessage::ToolFinished {
                loading,
                completion,
                ..
            } => {
                self.notifications.hide(loading);
                if current {
                    self.apply_tool_completion(completion);
                }
            }
            AppMessage::ReportExported {
                loading, result, ..
            } => {
                self.notifications.hide(loading);
                if current {
                    self.analytics.generating_report = false;
                }
                // The file is on disk either way, so a stale export still reports it
                match result {
                    Ok(path) => {
                        self.notifications
                            .show_success("PDF создан", Some("Отчет успешно скачан"));
                        self.last_export = Some(path);
                    }
                    Err(message) => {
                        self.notifications
                            .show_error("Ошибка создания PDF", Some(&message));
                    }
                }
            }
            AppMessage::PlanActivated { plan_id } => {
                self.finish_plan_activation(plan_id);
            }
        }
    }

    fn apply_tool_completion(&mut self, completion: ToolCompletion) {
        self.tools.busy = false;
        let today = self.now().date_naive();

        match completion {
            ToolCompletion::ContentCreated(draft) => {
                let item = self.tools.content.create(draft, today);
                let message = format!("\"{}\" успешно добавлен", item.title);
                self.notifications.show_success("Контент создан", Some(&message));
                self.tools.list_cursor = 0;
            }
            ToolCompletion::ContentUpdated { id, draft } => {
                if self.tools.content.update(id, draft).is_some() {
                    self.notifications
                        .show_success("Изменения сохранены", Some("Контент успешно обновлен"));
                } else {
                    self.notifications
                        .show_error("Ошибка сохранения", Some("Контент не найден"));
                }
            }
            ToolCompletion::ContentDeleted(id) => {
                if let Some(item) = self.tools.content.remove(id) {
                    let message = format!("\"{}\" удален", item.title);
                    self.notifications.show_success("Контент удален", Some(&message));
                }
                if self.tools.view == ToolView::ContentDetail(id) {
                    self.tools.back();
                }
            }
            ToolCompletion::CampaignCreated(draft) => {
                let campaign = self.tools.campaigns.create(draft, today);
                let message = format!("\"{}\" готова к отправке", campaign.name);
                self.notifications.show_success("Рассылка создана", Some(&message));
                self.tools.list_cursor = 0;
            }
            ToolCompletion::CampaignSent { id, recipients } => {
                if let Some(campaign) = self.tools.campaigns.mark_sent(id, recipients) {
                    let message = format!(
                        "\"{}\" отправлена {} получателям",
                        campaign.name, campaign.recipients
                    );
                    self.notifications.show_success("Рассылка отправлена", Some(&message));
                }
            }
            ToolCompletion::TaskCreated(draft) => {
                let task = self.tools.tasks.create(draft);
                let message = format!("\"{}\" добавлена в список", task.title);
                self.notifications.show_success("Задача создана", Some(&message));
                self.tools.list_cursor = 0;
            }
            ToolCompletion::TaskUpdated { id, draft } => {
                if self.tools.tasks.update(id, draft).is_some() {
                    self.notifications
                        .show_success("Задача обновлена", Some("Изменения успешно сохранены"));
                } else {
                    self.notifications
                        .show_error("Ошибка сохранения", Some("Задача не найдена"));
                }
            }
            ToolCompletion::TaskDeleted(id) => {
                if let Some(task) = self.tools.tasks.remove(id) {
                    let message = format!("\"{}\" удалена", task.title);
                    self.notifications.show_success("Задача удалена", Some(&message));
                }
            }
            ToolCompletion::TaskToggled(id) => match self.tools.tasks.toggle(id) {
                Some(task) if task.completed => {
                    let message = format!("\"{}\" отмечена как выполненная", task.title);
                    self.notifications.show_success("Задача выполнена", Some(&message));
                }
                Some(task) => {
                    let message = format!("\"{}\" снова в работе", task.title);
                    self.notifications.show_success("Задача возобновлена", Some(&message));
                }
                None => {
                    self.notifications
                        .show_error("Ошибка", Some("Не удалось изменить статус задачи"));
                }
            },
        }
        self.tools.clamp_cursor();
    }
}
