//! Chart options and date-bucketed series for the statistics view.
//!
//! The charts are drawn as inline SVG, so everything a chart needs (tick
//! density, colours, geometry) is computed here from plain data.

use chrono::{DateTime, Duration, DurationRound, Utc};

use crate::model::statistics::StatPointDto;

/// Widths below this are phones.
pub const EXTRA_SMALL_MAX_WIDTH: f64 = 576.0;
/// Portrait screens narrower than this get the medium tick density.
pub const LARGE_MAX_WIDTH: f64 = 1200.0;

const SVG_WIDTH: f64 = 800.0;
const SVG_HEIGHT: f64 = 300.0;
const PADDING_LEFT: f64 = 48.0;
const PADDING_RIGHT: f64 = 16.0;
const PADDING_TOP: f64 = 32.0;
const PADDING_BOTTOM: f64 = 40.0;
const Y_GRID_LINES: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    ExtraSmall,
    LargePortrait,
    Default,
}

impl Viewport {
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        if width < EXTRA_SMALL_MAX_WIDTH {
            Viewport::ExtraSmall
        } else if width < LARGE_MAX_WIDTH && height > width {
            Viewport::LargePortrait
        } else {
            Viewport::Default
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Upper bound of labelled x-axis ticks.
    pub max_ticks: usize,
    pub grid_color: &'static str,
    pub font_family: &'static str,
    pub font_size: u32,
    pub font_color: &'static str,
    pub line_color: &'static str,
    pub fill_color: &'static str,
}

impl ChartOptions {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let max_ticks = match viewport {
            Viewport::ExtraSmall => 8,
            Viewport::LargePortrait => 10,
            Viewport::Default => 20,
        };

        Self {
            max_ticks,
            grid_color: "rgba(255, 255, 255, 0.1)",
            font_family: "'Noto Sans KR', sans-serif",
            font_size: 12,
            font_color: "#adb5bd",
            line_color: "#4e9af1",
            fill_color: "rgba(78, 154, 241, 0.2)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    /// One bucket per day over the trailing 30 days.
    Daily,
    /// One bucket per hour over the trailing 24 hours.
    Hourly,
}

impl Interval {
    pub fn bucket_count(&self) -> usize {
        match self {
            Interval::Daily => 30,
            Interval::Hourly => 24,
        }
    }

    pub fn step(&self) -> Duration {
        match self {
            Interval::Daily => Duration::days(1),
            Interval::Hourly => Duration::hours(1),
        }
    }

    pub fn floor(&self, at: DateTime<Utc>) -> DateTime<Utc> {
        at.duration_trunc(self.step()).unwrap_or(at)
    }

    /// Short axis label.
    pub fn label(&self, at: DateTime<Utc>) -> String {
        match self {
            Interval::Daily => at.format("%m/%d").to_string(),
            Interval::Hourly => at.format("%H:00").to_string(),
        }
    }

    /// Unambiguous label used in exports.
    pub fn timestamp(&self, at: DateTime<Utc>) -> String {
        match self {
            Interval::Daily => at.format("%Y-%m-%d").to_string(),
            Interval::Hourly => at.format("%Y-%m-%d %H:00").to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Hourly => "hourly",
        }
    }
}

/// How several raw points falling in one bucket combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    /// Counters such as messages sent.
    Sum,
    /// Snapshots such as the member total; the latest point wins.
    Last,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesPoint {
    pub at: DateTime<Utc>,
    pub count: u64,
}

/// Buckets sparse points into the trailing window ending at `now`'s bucket.
/// Buckets without points are zero; points outside the window are dropped.
pub fn bucket_series(
    points: &[StatPointDto],
    interval: Interval,
    aggregate: Aggregate,
    now: DateTime<Utc>,
) -> Vec<SeriesPoint> {
    let count = interval.bucket_count();
    let step = interval.step();
    let end = interval.floor(now);
    let start = end - step * (count as i32 - 1);

    let mut series: Vec<SeriesPoint> = (0..count)
        .map(|i| SeriesPoint {
            at: start + step * i as i32,
            count: 0,
        })
        .collect();

    let mut ordered: Vec<&StatPointDto> = points.iter().collect();
    ordered.sort_by_key(|point| point.dt);

    for point in ordered {
        let bucket = interval.floor(point.dt);
        if bucket < start || bucket > end {
            continue;
        }
        let index = ((bucket - start).num_seconds() / step.num_seconds()) as usize;
        match aggregate {
            Aggregate::Sum => series[index].count += point.count,
            Aggregate::Last => series[index].count = point.count,
        }
    }

    series
}

/// Indices of the x labels to draw, evenly skipping so at most `max_ticks` remain.
pub fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 || max_ticks == 0 {
        return Vec::new();
    }
    let stride = len.div_ceil(max_ticks);
    (0..len).step_by(stride).collect()
}

/// Smallest 1, 2 or 5 times a power of ten that is at least `value`.
pub fn nice_ceiling(value: u64) -> u64 {
    if value <= 1 {
        return 1;
    }
    let mut magnitude = 1u64;
    loop {
        for factor in [1u64, 2, 5] {
            let candidate = factor.saturating_mul(magnitude);
            if candidate >= value {
                return candidate;
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a filled line chart as a standalone SVG document.
pub fn render_svg(
    title: &str,
    series: &[SeriesPoint],
    interval: Interval,
    options: &ChartOptions,
) -> String {
    let plot_width = SVG_WIDTH - PADDING_LEFT - PADDING_RIGHT;
    let plot_height = SVG_HEIGHT - PADDING_TOP - PADDING_BOTTOM;
    let bottom = PADDING_TOP + plot_height;

    let y_max = nice_ceiling(series.iter().map(|p| p.count).max().unwrap_or(0));
    let x_step = if series.len() > 1 {
        plot_width / (series.len() - 1) as f64
    } else {
        0.0
    };
    let x = |i: usize| PADDING_LEFT + x_step * i as f64;
    let y = |count: u64| bottom - plot_height * (count as f64 / y_max as f64);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" font-family="{font}" font-size="{size}" fill="{color}">"#,
        w = SVG_WIDTH,
        h = SVG_HEIGHT,
        font = escape_xml(options.font_family),
        size = options.font_size,
        color = options.font_color,
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="20" font-weight="bold">{}</text>"#,
        PADDING_LEFT,
        escape_xml(title)
    ));

    for line in 0..=Y_GRID_LINES {
        let value = y_max * line / Y_GRID_LINES;
        let line_y = y(value);
        svg.push_str(&format!(
            r#"<line x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="{grid}"/><text x="{tx}" y="{ty:.1}" text-anchor="end">{value}</text>"#,
            x1 = PADDING_LEFT,
            x2 = SVG_WIDTH - PADDING_RIGHT,
            y = line_y,
            grid = options.grid_color,
            tx = PADDING_LEFT - 6.0,
            ty = line_y + 4.0,
            value = value,
        ));
    }

    for index in tick_indices(series.len(), options.max_ticks) {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x(index),
            bottom + 20.0,
            interval.label(series[index].at)
        ));
    }

    if !series.is_empty() {
        let line: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(i, point)| format!("{:.1},{:.1}", x(i), y(point.count)))
            .collect();
        let line = line.join(" ");

        svg.push_str(&format!(
            r#"<polygon points="{:.1},{:.1} {} {:.1},{:.1}" fill="{}" stroke="none"/>"#,
            x(0),
            bottom,
            line,
            x(series.len() - 1),
            bottom,
            options.fill_color
        ));
        svg.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            line, options.line_color
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 30, 0).unwrap()
    }

    fn point(dt: DateTime<Utc>, count: u64) -> StatPointDto {
        StatPointDto { dt, count }
    }

    #[test]
    fn viewport_buckets_map_to_tick_limits() {
        let ticks = |w, h| ChartOptions::for_viewport(Viewport::from_dimensions(w, h)).max_ticks;

        assert_eq!(ticks(400.0, 800.0), 8);
        assert_eq!(ticks(1024.0, 1366.0), 10);
        assert_eq!(ticks(1024.0, 768.0), 20);
        assert_eq!(ticks(1920.0, 1080.0), 20);
    }

    #[test]
    fn daily_series_covers_thirty_days_with_zero_gaps() {
        let now = at(30, 12);
        let series = bucket_series(
            &[point(at(30, 1), 4), point(at(29, 5), 2), point(at(29, 6), 3)],
            Interval::Daily,
            Aggregate::Sum,
            now,
        );

        assert_eq!(series.len(), 30);
        assert_eq!(series[0].at, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(series[29].count, 4);
        assert_eq!(series[28].count, 5);
        assert!(series[..28].iter().all(|p| p.count == 0));
    }

    #[test]
    fn hourly_series_covers_twenty_four_hours() {
        let now = at(10, 23);
        let series = bucket_series(
            &[point(at(10, 23), 7), point(at(9, 23), 100)],
            Interval::Hourly,
            Aggregate::Sum,
            now,
        );

        assert_eq!(series.len(), 24);
        assert_eq!(series[0].at, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(series[23].count, 7);
        assert_eq!(series.iter().map(|p| p.count).sum::<u64>(), 7);
    }

    #[test]
    fn last_aggregate_keeps_latest_snapshot() {
        let now = at(30, 12);
        let series = bucket_series(
            &[point(at(30, 9), 120), point(at(30, 2), 100)],
            Interval::Daily,
            Aggregate::Last,
            now,
        );

        assert_eq!(series[29].count, 120);
    }

    #[test]
    fn tick_indices_respect_limit() {
        assert_eq!(tick_indices(5, 8), vec![0, 1, 2, 3, 4]);
        assert_eq!(tick_indices(30, 8).len(), 8);
        assert_eq!(tick_indices(30, 10).len(), 10);
        assert_eq!(tick_indices(24, 20).len(), 12);
        assert!(tick_indices(0, 8).is_empty());
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(0), 1);
        assert_eq!(nice_ceiling(3), 5);
        assert_eq!(nice_ceiling(17), 20);
        assert_eq!(nice_ceiling(200), 200);
        assert_eq!(nice_ceiling(201), 500);
    }

    #[test]
    fn svg_contains_one_label_per_tick() {
        let series = bucket_series(&[], Interval::Daily, Aggregate::Sum, at(30, 0));
        let options = ChartOptions::for_viewport(Viewport::ExtraSmall);
        let svg = render_svg("Members <daily>", &series, Interval::Daily, &options);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Members &lt;daily&gt;"));
        assert_eq!(svg.matches("text-anchor=\"middle\"").count(), 8);
    }
}
