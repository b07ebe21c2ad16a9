//! Subscription expiry snapshot and plan catalog.
//!
//! The snapshot is a pure function of the expiry date and the current instant.
//! It is recomputed whenever a screen mounts and never updates on its own.

use chrono::{DateTime, NaiveDate, Utc};

/// Name of the mocked current plan.
pub const CURRENT_PLAN_NAME: &str = "Продвинутая";

/// Days-left threshold (inclusive) for the "expiring soon" warning.
pub const EXPIRING_SOON_DAYS: i64 = 3;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Fixed expiry date of the mocked subscription.
pub fn default_expiry_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap_or_default()
}

/// Coarse status used by badges and gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    ExpiringSoon,
    Expired,
}

/// Derived, read-only view of the subscription at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionSnapshot {
    pub plan_name: String,
    pub expiry_date: NaiveDate,
    /// Ceiling of the day difference between expiry and now.
    pub days_left: i64,
    pub is_expired: bool,
    pub is_expiring_soon: bool,
    pub is_active: bool,
}

impl SubscriptionSnapshot {
    /// Derive the snapshot. The expiry date means midnight UTC of that day.
    ///
    /// `is_expired` holds from the expiry instant on, so during the final
    /// partial day `days_left` can be 0 while the subscription is expired.
    pub fn compute(plan_name: &str, expiry_date: NaiveDate, now: DateTime<Utc>) -> Self {
        let expires_at = expiry_date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now);
        let remaining_ms = (expires_at - now).num_milliseconds();
        let days_left = (remaining_ms as f64 / MS_PER_DAY as f64).ceil() as i64;

        let is_expired = now >= expires_at;
        let is_expiring_soon = !is_expired && (0..=EXPIRING_SOON_DAYS).contains(&days_left);

        Self {
            plan_name: plan_name.to_string(),
            expiry_date,
            days_left,
            is_expired,
            is_expiring_soon,
            is_active: !is_expired && days_left > 0,
        }
    }

    pub fn status(&self) -> SubscriptionStatus {
        if self.is_expired {
            SubscriptionStatus::Expired
        } else if self.is_expiring_soon {
            SubscriptionStatus::ExpiringSoon
        } else {
            SubscriptionStatus::Active
        }
    }

    /// Short badge text.
    pub fn badge_text(&self) -> String {
        match self.status() {
            SubscriptionStatus::Expired => "Истекла".to_string(),
            _ => format!("{} дн.", self.days_left),
        }
    }

    /// One-line status message.
    pub fn status_message(&self) -> String {
        match self.status() {
            SubscriptionStatus::Expired => {
                "Подписка истекла! Продлите для продолжения работы".to_string()
            }
            SubscriptionStatus::ExpiringSoon => {
                format!("Подписка истекает через {} дней", self.days_left)
            }
            SubscriptionStatus::Active => {
                format!("Подписка активна еще {} дней", self.days_left)
            }
        }
    }

    /// Expiry date as shown in the badge details, e.g. `15.08.2025`.
    pub fn expiry_label(&self) -> String {
        self.expiry_date.format("%d.%m.%Y").to_string()
    }
}

/// A purchasable plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
}

pub static PLANS: [SubscriptionPlan; 3] = [
    SubscriptionPlan {
        id: "basic",
        name: "Базовая",
        price: "1000₽",
        period: "/мес",
        description: "Для начинающих предпринимателей",
        popular: false,
        features: &[
            "Базовый SWOT-анализ и рекомендации",
            "До 5 AI-постов в месяц",
            "План роста (до 5 шагов)",
            "Микрообучение в чате",
            "Голосовой ввод",
            "Опросы (до 3/мес.)",
            "Доступ к mini app (личный чат)",
        ],
        limitations: &[
            "Нет интеграций",
            "Нет прогнозов роста",
            "Нет анализа конкурентов",
            "Нет бренд-мониторинга",
            "Нет AI для переговоров",
        ],
    },
    SubscriptionPlan {
        id: "advanced",
        name: "Продвинутая",
        price: "2500₽",
        period: "/мес",
        description: "Для малого и среднего бизнеса",
        popular: true,
        features: &[
            "Всё из Базовой подписки",
            "SWOT с рыночными трендами",
            "Прогнозы роста (до 3/мес.)",
            "Анализ конкурентов (до 3/мес.)",
            "Интеграции: Google Analytics, Яндекс.Метрика, 1 CRM",
            "План роста (до 10 шагов)",
            "Управление задачами (до 10/мес.)",
            "Воронки (до 3 этапов)",
            "AI-контент (до 15 постов/мес.)",
            "Аудиоответы",
            "Интерактивные дашборды",
        ],
        limitations: &[
            "Нет AI-переговорщика",
            "Нет бренд-мониторинга",
            "Ограниченные функции",
        ],
    },
    SubscriptionPlan {
        id: "premium",
        name: "Премиум",
        price: "5000₽",
        period: "/мес",
        description: "Для опытных предпринимателей и компаний",
        popular: false,
        features: &[
            "Всё из Продвинутой подписки",
            "Безлимитный анализ конкурентов и прогнозы",
            "Интеграция с любыми CRM, SimilarWeb",
            "Сравнение с отраслевыми метриками",
            "Полная автоматизация воронок и задач",
            "Финансовый учет",
            "Мониторинг бренда (Telegram, X и др.)",
            "Безлимитные рассылки, посты, розыгрыши",
            "AI-ассистент для переговоров",
            "Генератор идей, многоязычная поддержка",
            "Приоритетная поддержка",
        ],
        limitations: &[],
    },
];

pub fn find_plan(id: &str) -> Option<&'static SubscriptionPlan> {
    PLANS.iter().find(|plan| plan.id == id)
}

/// Features frozen while the subscription is expired.
pub const BLOCKED_FEATURES: [&str; 8] = [
    "📊 Аналитика и отчеты",
    "🤖 AI-чат и помощник",
    "📧 Email рассылки",
    "📝 Управление контентом",
    "✅ Планирование задач",
    "📈 SWOT анализ",
    "📋 PDF экспорт",
    "🔗 Интеграции",
];

/// What a renewal brings back.
pub const RENEWAL_BENEFITS: [&str; 6] = [
    "Безлимитный AI-чат",
    "Продвинутая аналитика",
    "Автоматические отчеты",
    "Приоритетная поддержка",
    "Все интеграции",
    "Экспорт в любых форматах",
];
