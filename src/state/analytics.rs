//! Analytics screen data and loading state.
//!
//! The snapshot is fixed mock data shared by the screen and the report
//! exporter. Sections "arrive" one after another on staggered delays.

use std::time::Duration;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub position: String,
    pub projects: u32,
    pub success_rate: u32,
}

impl Profile {
    /// Avatar initials, e.g. «АИ» for «Александр Иванов».
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwotKind {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl SwotKind {
    pub const ALL: [SwotKind; 4] = [
        SwotKind::Strengths,
        SwotKind::Weaknesses,
        SwotKind::Opportunities,
        SwotKind::Threats,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SwotKind::Strengths => "Сильные стороны",
            SwotKind::Weaknesses => "Слабые стороны",
            SwotKind::Opportunities => "Возможности",
            SwotKind::Threats => "Угрозы",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SwotKind::Strengths => "💪",
            SwotKind::Weaknesses => "⚠️",
            SwotKind::Opportunities => "🚀",
            SwotKind::Threats => "⚡",
        }
    }

    /// CSS class suffix used by the exported report.
    pub fn css_class(self) -> &'static str {
        match self {
            SwotKind::Strengths => "strengths",
            SwotKind::Weaknesses => "weaknesses",
            SwotKind::Opportunities => "opportunities",
            SwotKind::Threats => "threats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl Swot {
    pub fn entries(&self, kind: SwotKind) -> &[String] {
        match kind {
            SwotKind::Strengths => &self.strengths,
            SwotKind::Weaknesses => &self.weaknesses,
            SwotKind::Opportunities => &self.opportunities,
            SwotKind::Threats => &self.threats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthPoint {
    pub month: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionSlice {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub growth: Vec<GrowthPoint>,
    pub distribution: Vec<DistributionSlice>,
}

/// Everything the analytics screen shows and the report exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSnapshot {
    pub profile: Profile,
    pub stats: Vec<StatTile>,
    pub swot: Swot,
    pub chart_data: ChartData,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static MOCK_ANALYTICS: Lazy<AnalyticsSnapshot> = Lazy::new(|| AnalyticsSnapshot {
    profile: Profile {
        name: "Александр Иванов".to_string(),
        position: "Предприниматель".to_string(),
        projects: 156,
        success_rate: 89,
    },
    stats: [
        ("Рост", "+24%", "📈"),
        ("Клиенты", "1,234", "👥"),
        ("Доход", "₽125K", "💰"),
        ("Цели", "8/10", "🎯"),
    ]
    .iter()
    .map(|(label, value, icon)| StatTile {
        label: label.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
    })
    .collect(),
    swot: Swot {
        strengths: strings(&["Опытная команда", "Уникальный продукт", "Сильный бренд"]),
        weaknesses: strings(&["Ограниченный бюджет", "Малая команда", "Новый рынок"]),
        opportunities: strings(&["Рост рынка", "Новые технологии", "Партнерства"]),
        threats: strings(&["Конкуренты", "Экономический кризис", "Изменения в законах"]),
    },
    chart_data: ChartData {
        growth: [
            ("Янв", 65),
            ("Фев", 78),
            ("Мар", 82),
            ("Апр", 75),
            ("Май", 90),
            ("Июн", 95),
        ]
        .iter()
        .map(|(month, value)| GrowthPoint {
            month: month.to_string(),
            value: *value,
        })
        .collect(),
        distribution: [("Продажи", 45), ("Маркетинг", 30), ("Разработка", 25)]
            .iter()
            .map(|(label, value)| DistributionSlice {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
    },
});

/// The fixed analytics data.
pub fn mock_snapshot() -> AnalyticsSnapshot {
    MOCK_ANALYTICS.clone()
}

/// Borrow the fixed analytics data without cloning it.
pub fn mock_snapshot_ref() -> &'static AnalyticsSnapshot {
    &MOCK_ANALYTICS
}

/// Independently loading parts of the analytics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsSection {
    Profile,
    Stats,
    Swot,
    Charts,
}

impl AnalyticsSection {
    pub const ALL: [AnalyticsSection; 4] = [
        AnalyticsSection::Profile,
        AnalyticsSection::Stats,
        AnalyticsSection::Swot,
        AnalyticsSection::Charts,
    ];

    /// Simulated delay before the section appears, measured from mount.
    pub fn load_delay(self) -> Duration {
        match self {
            AnalyticsSection::Profile => Duration::from_millis(800),
            AnalyticsSection::Stats => Duration::from_millis(1200),
            AnalyticsSection::Swot => Duration::from_millis(1600),
            AnalyticsSection::Charts => Duration::from_millis(2000),
        }
    }
}

/// Local state of a mounted analytics screen.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsScreen {
    profile_loaded: bool,
    stats_loaded: bool,
    swot_loaded: bool,
    charts_loaded: bool,
    /// A report export is running.
    pub generating_report: bool,
}

impl AnalyticsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, section: AnalyticsSection) -> bool {
        match section {
            AnalyticsSection::Profile => self.profile_loaded,
            AnalyticsSection::Stats => self.stats_loaded,
            AnalyticsSection::Swot => self.swot_loaded,
            AnalyticsSection::Charts => self.charts_loaded,
        }
    }

    pub fn mark_loaded(&mut self, section: AnalyticsSection) {
        match section {
            AnalyticsSection::Profile => self.profile_loaded = true,
            AnalyticsSection::Stats => self.stats_loaded = true,
            AnalyticsSection::Swot => self.swot_loaded = true,
            AnalyticsSection::Charts => self.charts_loaded = true,
        }
    }

    /// The screen counts as loading until the last section (charts) arrives.
    pub fn is_loading(&self) -> bool {
        !self.charts_loaded
    }
}

/// Axis and point layout for the growth line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// Lower bound: smallest value minus 10.
    pub y_min: f64,
    pub y_max: f64,
    /// Grid lines bottom to top with their rounded `%` labels.
    pub y_ticks: Vec<(f64, String)>,
    /// `(index, value)` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Number of horizontal grid intervals.
pub const GRID_INTERVALS: u32 = 5;

impl ChartGeometry {
    /// `None` for an empty series.
    pub fn compute(values: &[u32]) -> Option<Self> {
        let max = *values.iter().max()? as f64;
        let min = *values.iter().min()? as f64 - 10.0;
        let range = max - min;

        let y_ticks = (0..=GRID_INTERVALS)
            .map(|i| {
                let value = min + range / GRID_INTERVALS as f64 * i as f64;
                (value, format!("{}%", value.round() as i64))
            })
            .collect();

        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v as f64))
            .collect();

        Some(Self {
            y_min: min,
            y_max: max,
            y_ticks,
            points,
        })
    }

    /// Map a point into a `width x height` drawing area whose origin is the
    /// top-left corner. The first point sits on the left edge, the last on
    /// the right edge, `y_max` on the top edge and `y_min` on the bottom.
    pub fn project(&self, point: (f64, f64), width: f64, height: f64) -> (f64, f64) {
        let last_index = (self.points.len().max(2) - 1) as f64;
        let x = point.0 / last_index * width;
        let range = self.y_max - self.y_min;
        let fraction = if range > 0.0 {
            (point.1 - self.y_min) / range
        } else {
            1.0
        };
        (x, height - fraction * height)
    }

    pub fn x_max(&self) -> f64 {
        (self.points.len().max(1) - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_snapshot_contents() {
        let snap = mock_snapshot();
        assert_eq!(snap.profile.initials(), "АИ");
        assert_eq!(snap.stats.len(), 4);
        assert_eq!(snap.chart_data.growth.len(), 6);
        assert_eq!(
            snap.chart_data
                .distribution
                .iter()
                .map(|d| d.value)
                .sum::<u32>(),
            100
        );
        for kind in SwotKind::ALL {
            assert_eq!(snap.swot.entries(kind).len(), 3);
        }
    }

    #[test]
    fn test_sections_load_staggered() {
        let delays: Vec<_> = AnalyticsSection::ALL.iter().map(|s| s.load_delay()).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_loading_until_charts_arrive() {
        let mut screen = AnalyticsScreen::new();
        assert!(screen.is_loading());
        screen.mark_loaded(AnalyticsSection::Profile);
        screen.mark_loaded(AnalyticsSection::Swot);
        assert!(screen.is_loaded(AnalyticsSection::Profile));
        assert!(!screen.is_loaded(AnalyticsSection::Stats));
        assert!(screen.is_loading());
        screen.mark_loaded(AnalyticsSection::Charts);
        assert!(!screen.is_loading());
    }

    #[test]
    fn test_chart_geometry_ticks() {
        let geo = ChartGeometry::compute(&[65, 78, 82, 75, 90, 95]).unwrap();
        assert_eq!(geo.y_min, 55.0);
        assert_eq!(geo.y_max, 95.0);
        let labels: Vec<_> = geo.y_ticks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["55%", "63%", "71%", "79%", "87%", "95%"]);
        assert_eq!(geo.x_max(), 5.0);
    }

    #[test]
    fn test_chart_projection_corners() {
        let geo = ChartGeometry::compute(&[10, 20]).unwrap();
        assert_eq!(geo.project((0.0, 10.0), 100.0, 50.0), (0.0, 25.0));
        assert_eq!(geo.project((1.0, 20.0), 100.0, 50.0), (100.0, 0.0));
        assert_eq!(geo.project((0.0, 0.0), 100.0, 50.0), (0.0, 50.0));
    }

    #[test]
    fn test_chart_geometry_empty() {
        assert!(ChartGeometry::compute(&[]).is_none());
    }
}
