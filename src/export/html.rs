//! HTML rendering of the analytics report.

use std::fmt::Write;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::state::analytics::{AnalyticsSnapshot, SwotKind};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const STYLE: &str = r#"
@page { size: A4; margin: 15mm; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Arial', sans-serif; line-height: 1.5; color: #333; background: white; font-size: 12px; }
.container { max-width: 100%; margin: 0 auto; }
.header { background: linear-gradient(135deg, #0088CC 0%, #34C759 100%); color: white; padding: 25px; text-align: center; border-radius: 8px; margin-bottom: 25px; }
.header h1 { font-size: 24px; margin-bottom: 8px; }
.profile-section { background: #f8f9fa; border-radius: 8px; padding: 20px; margin-bottom: 20px; text-align: center; border: 1px solid #e9ecef; }
.profile-name { font-size: 18px; font-weight: bold; color: #2c3e50; }
.profile-position { color: #7f8c8d; font-size: 14px; margin-bottom: 15px; }
.profile-stats { display: flex; justify-content: center; gap: 30px; }
.stat-value { font-size: 20px; font-weight: bold; color: #0088CC; }
.stat-label, .stat-card-label, .chart-label { color: #7f8c8d; }
.section { margin-bottom: 25px; page-break-inside: avoid; }
.section-title { font-size: 16px; margin-bottom: 15px; color: #2c3e50; border-bottom: 2px solid #0088CC; padding-bottom: 5px; }
.stats-grid, .swot-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
.stat-card { border-radius: 8px; padding: 15px; text-align: center; border: 1px solid #e9ecef; }
.stat-card-value { font-size: 16px; font-weight: bold; color: #2c3e50; }
.swot-item { border-radius: 8px; padding: 15px; }
.swot-strengths { background: #d4edda; border-left: 4px solid #28a745; }
.swot-weaknesses { background: #fff3cd; border-left: 4px solid #ffc107; }
.swot-opportunities { background: #cce5ff; border-left: 4px solid #007bff; }
.swot-threats { background: #f8d7da; border-left: 4px solid #dc3545; }
.swot-title { font-weight: bold; margin-bottom: 10px; }
.swot-list { list-style: none; }
.chart-section { background: #f8f9fa; border-radius: 8px; padding: 20px; margin-top: 20px; border: 1px solid #e9ecef; page-break-inside: avoid; }
.chart-title { font-size: 14px; font-weight: bold; margin-bottom: 15px; text-align: center; }
.chart-data { display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; }
.chart-item { text-align: center; background: white; border-radius: 6px; padding: 10px; }
.chart-value { font-size: 14px; font-weight: bold; color: #0088CC; }
.footer { background: #2c3e50; color: white; padding: 15px; text-align: center; border-radius: 8px; margin-top: 25px; }
.generated-date { opacity: 0.8; font-size: 10px; }
"#;

/// Escape text for use inside HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Russian long date with time, e.g. `16 октября 2026 г., 14:05`.
pub fn format_russian_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let month = MONTHS_GENITIVE[at.month0() as usize];
    format!(
        "{} {} {} г., {:02}:{:02}",
        at.day(),
        month,
        at.year(),
        at.hour(),
        at.minute()
    )
}

/// Render the full report document.
pub fn render_report_html<Tz: TimeZone>(
    data: &AnalyticsSnapshot,
    generated_at: &DateTime<Tz>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);
    // Writing into a String cannot fail
    let _ = write_document(&mut html, data, &format_russian_timestamp(generated_at));
    html
}

fn write_document(out: &mut String, data: &AnalyticsSnapshot, timestamp: &str) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"ru\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"UTF-8\">")?;
    writeln!(out, "<title>Аналитический отчет</title>")?;
    writeln!(out, "<style>{}</style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"container\">")?;

    writeln!(out, "<div class=\"header\">")?;
    writeln!(out, "<h1>📊 Аналитический отчет</h1>")?;
    writeln!(out, "<p>Детальный анализ деятельности и рекомендации</p>")?;
    writeln!(out, "</div>")?;

    let profile = &data.profile;
    writeln!(out, "<div class=\"profile-section\">")?;
    writeln!(out, "<div class=\"profile-name\">{}</div>", escape_html(&profile.name))?;
    writeln!(
        out,
        "<div class=\"profile-position\">{}</div>",
        escape_html(&profile.position)
    )?;
    writeln!(out, "<div class=\"profile-stats\">")?;
    writeln!(
        out,
        "<div class=\"stat-item\"><div class=\"stat-value\">{}</div><div class=\"stat-label\">Проектов</div></div>",
        profile.projects
    )?;
    writeln!(
        out,
        "<div class=\"stat-item\"><div class=\"stat-value\">{}%</div><div class=\"stat-label\">Успешность</div></div>",
        profile.success_rate
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2 class=\"section-title\">📈 Ключевые показатели</h2>")?;
    writeln!(out, "<div class=\"stats-grid\">")?;
    for stat in &data.stats {
        writeln!(
            out,
            "<div class=\"stat-card\"><div class=\"stat-icon\">{}</div><div class=\"stat-card-value\">{}</div><div class=\"stat-card-label\">{}</div></div>",
            escape_html(&stat.icon),
            escape_html(&stat.value),
            escape_html(&stat.label)
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2 class=\"section-title\">🎯 SWOT Анализ</h2>")?;
    writeln!(out, "<div class=\"swot-grid\">")?;
    for kind in SwotKind::ALL {
        writeln!(out, "<div class=\"swot-item swot-{}\">", kind.css_class())?;
        writeln!(out, "<div class=\"swot-title\">{} {}</div>", kind.icon(), kind.title())?;
        writeln!(out, "<ul class=\"swot-list\">")?;
        for entry in data.swot.entries(kind) {
            writeln!(out, "<li>{}</li>", escape_html(entry))?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"chart-section\">")?;
    writeln!(out, "<div class=\"chart-title\">📊 Динамика роста по месяцам</div>")?;
    writeln!(out, "<div class=\"chart-data\">")?;
    for point in &data.chart_data.growth {
        write_chart_item(out, point.value, &point.month)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"chart-section\">")?;
    writeln!(out, "<div class=\"chart-title\">🎯 Распределение ресурсов</div>")?;
    writeln!(out, "<div class=\"chart-data\">")?;
    for slice in &data.chart_data.distribution {
        write_chart_item(out, slice.value, &slice.label)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"footer\">")?;
    writeln!(out, "<p><strong>🤖 Telegram AI Assistant</strong></p>")?;
    writeln!(out, "<p>Ваш персональный помощник для бизнес-аналитики</p>")?;
    writeln!(out, "<p class=\"generated-date\">Отчет создан: {}</p>", timestamp)?;
    writeln!(out, "</div>")?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_chart_item(out: &mut String, value: u32, label: &str) -> std::fmt::Result {
    writeln!(
        out,
        "<div class=\"chart-item\"><div class=\"chart-value\">{}%</div><div class=\"chart-label\">{}</div></div>",
        value,
        escape_html(label)
    )
}
