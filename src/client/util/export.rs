//! CSV and image exports of the statistics charts.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};

use crate::client::util::chart::{Interval, SeriesPoint};

/// Byte order mark so spreadsheet programs detect UTF-8.
pub const UTF8_BOM: &str = "\u{FEFF}";

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Builds a BOM-prefixed CSV document with a header row.
pub fn to_csv<R, F>(headers: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    let mut csv = String::from(UTF8_BOM);
    let header: Vec<String> = headers.iter().map(|h| escape_field(h)).collect();
    csv.push_str(&header.join(","));
    csv.push_str("\r\n");

    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| escape_field(f.as_ref())).collect();
        csv.push_str(&fields.join(","));
        csv.push_str("\r\n");
    }

    csv
}

/// One row per bucket of an already bucketed series.
pub fn series_csv(value_header: &str, series: &[SeriesPoint], interval: Interval) -> String {
    to_csv(
        &["time", value_header],
        series
            .iter()
            .map(|point| vec![interval.timestamp(point.at), point.count.to_string()]),
    )
}

/// Wraps a rendered SVG chart into a data URL usable as a download link.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// Wraps a CSV document into a data URL usable as a download link.
pub fn csv_data_url(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8;base64,{}", STANDARD.encode(csv.as_bytes()))
}

pub fn export_file_name(
    guild_id: u64,
    kind: &str,
    interval: Interval,
    now: DateTime<Utc>,
    extension: &str,
) -> String {
    format!(
        "{}-{}-{}-{}.{}",
        guild_id,
        kind,
        interval.as_str(),
        now.format("%Y%m%d%H%M"),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::util::chart::{bucket_series, Aggregate};
    use crate::model::statistics::StatPointDto;
    use chrono::TimeZone;

    #[test]
    fn csv_starts_with_bom_and_has_row_per_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 30, 12, 0, 0).unwrap();
        let series = bucket_series(
            &[StatPointDto {
                dt: Utc.with_ymd_and_hms(2024, 3, 29, 8, 0, 0).unwrap(),
                count: 9,
            }],
            Interval::Daily,
            Aggregate::Sum,
            now,
        );

        let csv = series_csv("messages", &series, Interval::Daily);
        assert!(csv.starts_with(UTF8_BOM));

        let lines: Vec<&str> = csv.trim_start_matches(UTF8_BOM).lines().collect();
        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0], "time,messages");
        assert_eq!(lines[1], "2024-03-01,0");
        assert_eq!(lines[29], "2024-03-29,9");
        assert_eq!(lines[30], "2024-03-30,0");
    }

    #[test]
    fn hourly_csv_has_row_per_hour() {
        let now = Utc.with_ymd_and_hms(2024, 3, 30, 12, 0, 0).unwrap();
        let series = bucket_series(&[], Interval::Hourly, Aggregate::Sum, now);
        let csv = series_csv("messages", &series, Interval::Hourly);

        assert_eq!(csv.lines().count(), 25);
        assert!(csv.contains("2024-03-30 12:00,0"));
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let csv = to_csv(&["name", "count"], vec![vec!["a, \"b\"", "3"]]);
        assert!(csv.ends_with("\"a, \"\"b\"\"\",3\r\n"));
    }

    #[test]
    fn svg_data_url_is_base64() {
        let url = svg_data_url("<svg></svg>");
        assert_eq!(url, "data:image/svg+xml;base64,PHN2Zz48L3N2Zz4=");
    }
}
