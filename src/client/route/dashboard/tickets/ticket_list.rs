use dioxus::prelude::*;

use crate::{
    client::{
        component::Pagination,
        util::{list::ListQuery, pagination::MEMBER_PAGE_SIZE},
    },
    model::{
        discord::{ChannelDto, MemberDto},
        ticket::{TicketDto, TicketSetDto, TicketStatus},
    },
};

use super::channel_name;

const STATUS_TABS: [(&str, Option<TicketStatus>); 4] = [
    ("All", None),
    ("Open", Some(TicketStatus::Open)),
    ("Closed", Some(TicketStatus::Closed)),
    ("Deleted", Some(TicketStatus::Deleted)),
];

struct TicketRow {
    uuid: String,
    set: String,
    opener: String,
    channel: String,
    status: TicketStatus,
    created: String,
}

/// Tickets newest first, filtered by status.
#[component]
pub fn TicketList(
    tickets: Vec<TicketDto>,
    sets: Vec<TicketSetDto>,
    channels: Vec<ChannelDto>,
    members: Vec<MemberDto>,
) -> Element {
    let mut status = use_signal(|| None::<TicketStatus>);
    let mut page = use_signal(|| 0usize);

    let filter = status();
    let view = ListQuery::new(MEMBER_PAGE_SIZE)
        .filter(|t: &TicketDto| filter.is_none_or(|status| t.status == status))
        .sort_by(|a, b| b.created_at.cmp(&a.created_at))
        .run(&tickets, page());
    let last_page = view.last_page;

    let rows: Vec<TicketRow> = view
        .items
        .iter()
        .map(|ticket| TicketRow {
            uuid: ticket.uuid.clone(),
            set: sets
                .iter()
                .find(|s| s.uuid == ticket.ticketset)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "Deleted set".to_string()),
            opener: members
                .iter()
                .find(|m| m.id() == ticket.opener)
                .map(|m| m.display_name().to_string())
                .unwrap_or_else(|| ticket.opener.to_string()),
            channel: channel_name(&channels, ticket.channel),
            status: ticket.status,
            created: ticket.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            div {
                class: "flex flex-col sm:flex-row justify-between gap-2",
                h2 { class: "text-xl font-semibold", "Tickets" }
                div {
                    role: "tablist",
                    class: "tabs tabs-box",
                    for (label, tab) in STATUS_TABS {
                        a {
                            role: "tab",
                            class: if tab == filter { "tab tab-active" } else { "tab" },
                            onclick: move |_| {
                                status.set(tab);
                                page.set(0);
                            },
                            "{label}"
                        }
                    }
                }
            }
            if rows.is_empty() {
                p { class: "opacity-70", "No tickets." }
            } else {
                table {
                    class: "table table-zebra",
                    thead {
                        tr {
                            th { "Set" }
                            th { "Opened by" }
                            th { class: "hidden md:table-cell", "Channel" }
                            th { "Status" }
                            th { class: "hidden md:table-cell", "Created" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.uuid}",
                                td { "{row.set}" }
                                td { "{row.opener}" }
                                td { class: "hidden md:table-cell", "{row.channel}" }
                                td {
                                    span { class: "badge {row.status.badge_class()}", "{row.status.label()}" }
                                }
                                td { class: "hidden md:table-cell", "{row.created}" }
                            }
                        }
                    }
                }
            }
            Pagination {
                page: view.page,
                last_page,
                total: view.total,
                on_page_change: move |next: usize| page.set(next.min(last_page)),
            }
        }
    }
}
