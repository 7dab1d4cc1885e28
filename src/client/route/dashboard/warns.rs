use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Pagination},
        constant::SITE_NAME,
        hooks::use_cached,
        model::error::ApiError,
        router::Route,
        util::{
            list::ListQuery,
            pagination::{PageState, MEMBER_PAGE_SIZE},
            search::contains_normalized,
            warn_ranking::{rank, SUMMARY_SIZE},
        },
    },
    model::{discord::MemberDto, warn::WarnDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{guild::get_members, warn::delete_warn, warn::get_warns},
    hooks::use_fetch,
};

fn member_name(members: &[MemberDto], id: u64) -> String {
    members
        .iter()
        .find(|m| m.id() == id)
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn format_time(warn: &WarnDto) -> String {
    warn.dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Warn ranking summary and the full warn history.
#[component]
pub fn Warns(guild_id: u64) -> Element {
    #[allow(unused_mut)]
    let mut warns = use_cached::<Vec<WarnDto>>();
    let members = use_cached::<Vec<MemberDto>>();
    let mut list = use_signal(PageState::default);

    #[cfg(feature = "web")]
    {
        use_fetch(warns, move || get_warns(guild_id));
        use_fetch(members, move || get_members(guild_id));
    }

    let cache = warns.cache.read();
    let Some(all) = cache.data() else {
        return match cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };
    let member_list = members.cache.read().data().cloned().unwrap_or_default();

    let summary: Vec<(usize, String, u64)> = rank(all)
        .into_iter()
        .take(SUMMARY_SIZE)
        .map(|entry| (entry.rank, member_name(&member_list, entry.member), entry.total))
        .collect();

    let state = list();
    let view = ListQuery::new(MEMBER_PAGE_SIZE)
        .filter(|w: &WarnDto| {
            contains_normalized(&w.reason, &state.search)
                || contains_normalized(&member_name(&member_list, w.member), &state.search)
        })
        .sort_by(|a, b| b.dt.cmp(&a.dt))
        .run(all, state.page);
    let last_page = view.last_page;
    let rows: Vec<WarnDto> = view.items.iter().map(|w| (*w).clone()).collect();

    rsx! {
        Title { "Warns | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl font-semibold", "Warns" }
            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                if summary.is_empty() {
                    p { class: "opacity-70", "Nobody has been warned yet." }
                }
                for (position, name, total) in summary {
                    div {
                        class: "stat bg-base-200 rounded-box",
                        div { class: "stat-title", "#{position}" }
                        div { class: "stat-value text-2xl truncate", "{name}" }
                        div { class: "stat-desc", "{total} warns" }
                    }
                }
            }
            div {
                class: "flex flex-col gap-2",
                input {
                    r#type: "text",
                    class: "input input-bordered w-full sm:w-80",
                    placeholder: "Search by member or reason",
                    value: "{state.search}",
                    oninput: move |evt| list.write().set_search(evt.value()),
                }
                WarnTable {
                    guild_id,
                    warns: rows,
                    members: member_list,
                    on_deleted: move |_| warns.refresh(),
                }
                Pagination {
                    page: view.page,
                    last_page,
                    total: view.total,
                    on_page_change: move |page| list.write().go_to(page, last_page),
                }
            }
        }
    }
}

/// Warn rows in the given order, each deletable after confirmation.
#[component]
pub fn WarnTable(
    guild_id: u64,
    warns: Vec<WarnDto>,
    members: Vec<MemberDto>,
    on_deleted: EventHandler<()>,
) -> Element {
    let mut show_confirm = use_signal(|| false);
    let mut target = use_signal(|| None::<WarnDto>);
    let mut is_deleting = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    if warns.is_empty() {
        return rsx! { p { class: "opacity-70", "No warns." } };
    }

    rsx! {
        table {
            class: "table table-zebra",
            thead {
                tr {
                    th { "Member" }
                    th { "Reason" }
                    th { "Count" }
                    th { class: "hidden md:table-cell", "By" }
                    th { class: "hidden md:table-cell", "Date" }
                    th {}
                }
            }
            tbody {
                for warn in warns {
                    tr {
                        key: "{warn.uuid}",
                        td {
                            Link {
                                class: "link",
                                to: Route::MemberDetail { guild_id, member_id: warn.member },
                                "{member_name(&members, warn.member)}"
                            }
                        }
                        td { class: "max-w-xs truncate", "{warn.reason}" }
                        td { "{warn.count}" }
                        td { class: "hidden md:table-cell", "{member_name(&members, warn.by)}" }
                        td { class: "hidden md:table-cell", "{format_time(&warn)}" }
                        td {
                            class: "text-right",
                            button {
                                class: "btn btn-xs btn-error btn-outline",
                                onclick: {
                                    let warn = warn.clone();
                                    move |_| {
                                        target.set(Some(warn.clone()));
                                        error.set(None);
                                        show_confirm.set(true);
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_confirm,
            title: "Delete warn",
            message: target()
                .map(|w| format!("Delete the warn \"{}\"? The member's total goes down by {}.", w.reason, w.count))
                .unwrap_or_default(),
            is_processing: is_deleting(),
            error: error().map(|e| e.message),
            on_confirm: move |_| {
                let Some(warn) = target() else {
                    return;
                };
                is_deleting.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_warn(guild_id, &warn.uuid).await {
                        Ok(()) => {
                            show_confirm.set(false);
                            on_deleted.call(());
                        }
                        Err(err) => error.set(Some(err)),
                    }
                    is_deleting.set(false);
                });
                #[cfg(not(feature = "web"))]
                let _ = warn;
            },
        }
    }
}
