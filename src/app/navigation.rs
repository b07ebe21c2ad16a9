//! Tab switching and screen mounting.

use crate::state::analytics::{AnalyticsScreen, AnalyticsSection};
use crate::state::chat::{ChatScreen, HISTORY_LOAD_DELAY};
use crate::state::subscription::{SubscriptionSnapshot, CURRENT_PLAN_NAME};
use crate::state::tools::{ToolsScreen, CATALOG_LOAD_DELAY};

use super::{App, AppMessage, Modal, Tab};

impl App {
    /// Show `tab`. Selecting the current tab does nothing.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        tracing::debug!("Switching tab {:?} -> {:?}", self.tab, tab);
        self.tab = tab;
        self.mount();
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    /// Reset the selected screen and schedule its loading.
    ///
    /// Screen-local state starts over on every mount and the subscription
    /// snapshot is recomputed. Pending results from the previous mount are
    /// recognised by generation and dropped.
    pub(crate) fn mount(&mut self) {
        self.generation += 1;
        let generation = self.generation;

        self.subscription = SubscriptionSnapshot::compute(
            CURRENT_PLAN_NAME,
            self.config.subscription_expiry,
            self.now(),
        );
        self.chat = ChatScreen::new();
        self.analytics = AnalyticsScreen::new();
        self.tools = ToolsScreen::new();

        // Screen-scoped overlays do not survive a tab change
        if matches!(self.modal, Some(Modal::ChatMenu { .. }) | Some(Modal::ReportPreview)) {
            self.modal = None;
        }
        if self.subscription.is_expired && !self.expired_modal_dismissed && self.modal.is_none() {
            self.modal = Some(Modal::Expired);
        }

        match self.tab {
            Tab::Chat => {
                self.spawn_after(HISTORY_LOAD_DELAY, AppMessage::ChatHistoryLoaded { generation });
            }
            Tab::Analytics => {
                for section in AnalyticsSection::ALL {
                    self.spawn_after(
                        section.load_delay(),
                        AppMessage::AnalyticsSectionLoaded {
                            generation,
                            section,
                        },
                    );
                }
            }
            Tab::Tools => {
                self.spawn_after(CATALOG_LOAD_DELAY, AppMessage::ToolsCatalogLoaded { generation });
            }
        }

        tracing::debug!(
            "Mounted {:?} (generation {}, subscription {:?})",
            self.tab,
            generation,
            self.subscription.status()
        );
        self.mark_dirty();
    }
}
