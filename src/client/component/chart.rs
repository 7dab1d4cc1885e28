use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{
        hooks::use_viewport,
        util::{
            chart::{bucket_series, render_svg, Aggregate, ChartOptions, Interval},
            export::{csv_data_url, export_file_name, series_csv, svg_data_url},
        },
    },
    model::statistics::StatPointDto,
};

/// One statistics chart with its CSV and image download links.
#[component]
pub fn ChartCard(
    guild_id: u64,
    title: String,
    /// Short name used in export file names and the CSV header
    kind: String,
    points: Vec<StatPointDto>,
    interval: Interval,
    aggregate: Aggregate,
) -> Element {
    let viewport = use_viewport();

    let now = Utc::now();
    let series = bucket_series(&points, interval, aggregate, now);
    let options = ChartOptions::for_viewport(viewport());
    let svg = render_svg(&title, &series, interval, &options);

    let csv_href = csv_data_url(&series_csv(&kind, &series, interval));
    let csv_name = export_file_name(guild_id, &kind, interval, now, "csv");
    let svg_href = svg_data_url(&svg);
    let svg_name = export_file_name(guild_id, &kind, interval, now, "svg");

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-center",
                    h3 { class: "card-title", "{title}" }
                    div {
                        class: "flex gap-2",
                        a {
                            class: "btn btn-sm btn-outline",
                            href: "{csv_href}",
                            download: "{csv_name}",
                            "CSV"
                        }
                        a {
                            class: "btn btn-sm btn-outline",
                            href: "{svg_href}",
                            download: "{svg_name}",
                            "Image"
                        }
                    }
                }
                div {
                    class: "w-full overflow-x-auto",
                    dangerous_inner_html: "{svg}",
                }
            }
        }
    }
}
