//! Performance benchmarks for frame rendering and report export
//!
//! Measures a full frame per screen, the HTML report, toast ticking and the
//! chart geometry.
//! Run with: cargo bench

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};

use miniapp::adapters::mock::{
    FixedColorScheme, InMemoryDownloads, InMemoryThemeStore, ManualClock, NoDelay,
};
use miniapp::app::{App, AppDeps, Tab};
use miniapp::export::render_report_html;
use miniapp::startup::AppConfig;
use miniapp::state::analytics::{mock_snapshot, ChartGeometry};
use miniapp::state::{EffectiveTheme, NotificationCenter, NotificationKind};
use miniapp::ui;

/// App mounted on `tab` with every section loaded.
fn loaded_app(runtime: &tokio::runtime::Runtime, tab: Tab) -> App {
    let config = AppConfig::default()
        .with_subscription_expiry(chrono::NaiveDate::from_ymd_opt(2027, 1, 1).unwrap_or_default());
    let deps = AppDeps {
        clock: Arc::new(ManualClock::default()),
        delay: Arc::new(NoDelay::new()),
        theme_store: Arc::new(InMemoryThemeStore::new()),
        color_scheme: Arc::new(FixedColorScheme::new(EffectiveTheme::Dark)),
        downloads: Arc::new(InMemoryDownloads::new()),
    };
    let mut app = App::new(config, deps);
    let mut rx = app.message_rx.take().expect("receiver present");

    runtime.block_on(async {
        app.start();
        app.switch_tab(tab);
        while app.in_flight() > 0 {
            match rx.recv().await {
                Some(msg) => app.handle_message(msg),
                None => break,
            }
        }
    });
    // Keep a receiver alive so later sends do not fail
    app.message_rx = Some(rx);
    app
}

fn bench_full_frame(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("full_frame");

    for tab in Tab::ALL {
        let app = loaded_app(&runtime, tab);
        for (width, height) in [(80u16, 24u16), (160, 48)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
            group.bench_with_input(
                BenchmarkId::new(tab.title(), format!("{}x{}", width, height)),
                &app,
                |b, app| {
                    b.iter(|| {
                        terminal
                            .draw(|frame| ui::render(frame, black_box(app)))
                            .expect("draw");
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_report_html(c: &mut Criterion) {
    let data = mock_snapshot();
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    c.bench_function("report_html", |b| {
        b.iter(|| {
            let html = render_report_html(black_box(&data), &at);
            black_box(html)
        });
    });
}

fn bench_notification_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_tick");
    for count in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let clock = ManualClock::default();
            let mut center = NotificationCenter::new(Arc::new(clock.clone()));
            for i in 0..count {
                center.show(
                    NotificationKind::Info,
                    "toast",
                    None,
                    Some(60_000 + i as u64),
                );
            }
            b.iter(|| {
                clock.advance_ms(1);
                black_box(center.tick())
            });
        });
    }
    group.finish();
}

fn bench_chart_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_geometry");
    for points in [6usize, 60, 600] {
        let values: Vec<u32> = (0..points).map(|i| (i as u32 * 37) % 100).collect();
        group.bench_with_input(BenchmarkId::from_parameter(points), &values, |b, values| {
            b.iter(|| black_box(ChartGeometry::compute(black_box(values))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_frame,
    bench_report_html,
    bench_notification_tick,
    bench_chart_geometry
);
criterion_main!(benches);
