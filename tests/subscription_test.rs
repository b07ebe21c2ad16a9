//! Subscription snapshot boundaries and the plan catalog.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use miniapp::state::subscription::{find_plan, PLANS};
use miniapp::state::{SubscriptionSnapshot, SubscriptionStatus};

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn snapshot_for(y: i32, m: u32, d: u32, now: DateTime<Utc>) -> SubscriptionSnapshot {
    SubscriptionSnapshot::compute("Продвинутая", NaiveDate::from_ymd_opt(y, m, d).unwrap(), now)
}

#[test]
fn test_days_left_rounds_up() {
    // 2.5 days remain
    let snap = snapshot_for(2026, 10, 19, noon());
    assert_eq!(snap.days_left, 3);
    assert_eq!(snap.status(), SubscriptionStatus::ExpiringSoon);
    assert_eq!(snap.badge_text(), "3 дн.");
}

#[test]
fn test_four_days_is_active() {
    let snap = snapshot_for(2026, 10, 20, noon());
    assert_eq!(snap.days_left, 4);
    assert_eq!(snap.status(), SubscriptionStatus::Active);
    assert!(snap.is_active);
    assert_eq!(snap.status_message(), "Подписка активна еще 4 дней");
}

#[test]
fn test_last_half_day_is_expiring_soon() {
    let snap = snapshot_for(2026, 10, 17, noon());
    assert_eq!(snap.days_left, 1);
    assert!(snap.is_expiring_soon);
    assert!(!snap.is_expired);
}

#[test]
fn test_expiry_instant_is_midnight_utc() {
    let midnight = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
    let snap = snapshot_for(2026, 10, 16, midnight);
    assert!(snap.is_expired);
    assert_eq!(snap.days_left, 0);
    assert!(!snap.is_active);

    let just_before = Utc.with_ymd_and_hms(2026, 10, 15, 23, 59, 59).unwrap();
    let snap = snapshot_for(2026, 10, 16, just_before);
    assert!(!snap.is_expired);
    assert_eq!(snap.days_left, 1);
}

#[test]
fn test_expired_snapshot_texts() {
    let snap = snapshot_for(2025, 8, 15, noon());
    assert!(snap.is_expired);
    assert!(snap.days_left < 0);
    assert_eq!(snap.status(), SubscriptionStatus::Expired);
    assert_eq!(snap.badge_text(), "Истекла");
    assert_eq!(snap.expiry_label(), "15.08.2025");
}

#[test]
fn test_plan_catalog() {
    assert_eq!(PLANS.len(), 3);
    let popular: Vec<&str> = PLANS.iter().filter(|p| p.popular).map(|p| p.id).collect();
    assert_eq!(popular, vec!["advanced"]);

    let premium = find_plan("premium").unwrap();
    assert_eq!(premium.price, "5000₽");
    assert!(premium.limitations.is_empty());
    assert!(find_plan("enterprise").is_none());
}

fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

#[test]
fn test_expiry_two_days_ahead_is_two_days_and_soon() {
    let now = morning();
    let expiry = now.date_naive() + chrono::Days::new(2);
    let snap = SubscriptionSnapshot::compute("Базовая", expiry, now);
    assert_eq!(snap.days_left, 2);
    assert!(snap.is_expiring_soon);
    assert!(!snap.is_expired);
    assert_eq!(snap.status(), SubscriptionStatus::ExpiringSoon);
}

#[test]
fn test_expiry_yesterday_is_minus_one_and_expired() {
    let now = morning();
    let expiry = now.date_naive() - chrono::Days::new(1);
    let snap = SubscriptionSnapshot::compute("Базовая", expiry, now);
    assert_eq!(snap.days_left, -1);
    assert!(snap.is_expired);
    assert!(!snap.is_expiring_soon);
    assert_eq!(snap.status(), SubscriptionStatus::Expired);
}
