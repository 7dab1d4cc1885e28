use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Pagination},
        constant::SITE_NAME,
        hooks::use_cached,
        router::Route,
        route::dashboard::warns::WarnTable,
        util::{
            list::ListQuery,
            pagination::{PageState, MEMBER_PAGE_SIZE},
            search::{compare_members, member_matches, MemberSearchMode},
            warn_ranking::member_total,
        },
    },
    model::{
        discord::{MemberDto, RoleDto},
        warn::WarnDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        guild::{get_members, get_roles},
        warn::get_warns,
    },
    hooks::use_fetch,
};

#[component]
pub fn Members(guild_id: u64) -> Element {
    let members = use_cached::<Vec<MemberDto>>();
    let mut list = use_signal(PageState::default);
    let mut mode = use_signal(|| MemberSearchMode::NickAndTag);

    #[cfg(feature = "web")]
    use_fetch(members, move || get_members(guild_id));

    let cache = members.cache.read();
    let Some(all) = cache.data() else {
        return match cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };

    let state = list();
    let search_mode = mode();
    let view = ListQuery::new(MEMBER_PAGE_SIZE)
        .filter(|m: &MemberDto| member_matches(m, &state.search, search_mode))
        .sort_by(compare_members)
        .run(all, state.page);
    let last_page = view.last_page;
    let rows: Vec<MemberDto> = view.items.iter().map(|m| (*m).clone()).collect();

    rsx! {
        Title { "Members | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-4",
            div {
                class: "flex flex-col sm:flex-row justify-between gap-2",
                h1 { class: "text-2xl font-semibold", "Members ({all.len()})" }
                div {
                    class: "join",
                    select {
                        class: "select select-bordered join-item",
                        onchange: move |evt| {
                            if let Some(next) = MemberSearchMode::from_str(&evt.value()) {
                                mode.set(next);
                                list.write().page = 0;
                            }
                        },
                        option { value: MemberSearchMode::NickAndTag.as_str(), "Name" }
                        option { value: MemberSearchMode::Id.as_str(), "ID" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered join-item",
                        placeholder: search_mode.placeholder(),
                        value: "{state.search}",
                        oninput: move |evt| list.write().set_search(evt.value()),
                    }
                }
            }
            table {
                class: "table table-zebra",
                thead {
                    tr {
                        th { "Member" }
                        th { class: "hidden md:table-cell", "Joined" }
                        th {}
                    }
                }
                tbody {
                    for member in rows {
                        MemberRow { key: "{member.id()}", guild_id, member: member.clone() }
                    }
                }
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

#[component]
fn MemberRow(guild_id: u64, member: MemberDto) -> Element {
    let joined = member.joined_at.format("%Y-%m-%d").to_string();

    rsx! {
        tr {
            td {
                div {
                    class: "flex items-center gap-3",
                    img {
                        class: "w-8 h-8 rounded-full",
                        src: "{member.user.avatar_url(64)}",
                        alt: "",
                    }
                    div {
                        p {
                            class: "font-semibold",
                            "{member.display_name()}"
                            if member.is_bot() {
                                span { class: "badge badge-primary badge-sm ml-2", "BOT" }
                            }
                        }
                        p { class: "text-sm opacity-60", "{member.tag()}" }
                    }
                }
            }
            td { class: "hidden md:table-cell", "{joined}" }
            td {
                class: "text-right",
                Link {
                    to: Route::MemberDetail { guild_id, member_id: member.id() },
                    class: "btn btn-xs btn-outline",
                    "Details"
                }
            }
        }
    }
}

/// One member's profile, roles and warns.
#[component]
pub fn MemberDetail(guild_id: u64, member_id: u64) -> Element {
    let members = use_cached::<Vec<MemberDto>>();
    let roles = use_cached::<Vec<RoleDto>>();
    #[allow(unused_mut)]
    let mut warns = use_cached::<Vec<WarnDto>>();

    #[cfg(feature = "web")]
    {
        use_fetch(members, move || get_members(guild_id));
        use_fetch(roles, move || get_roles(guild_id));
        use_fetch(warns, move || get_warns(guild_id));
    }

    let member_cache = members.cache.read();
    let Some(all) = member_cache.data() else {
        return match member_cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };
    let Some(member) = all.iter().find(|m| m.id() == member_id).cloned() else {
        return rsx! { ErrorPage { status: 404, message: "This member is not in the server" } };
    };

    let mut member_roles: Vec<RoleDto> = roles
        .cache
        .read()
        .data()
        .map(|roles| {
            roles
                .iter()
                .filter(|r| member.roles.contains(&r.id))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    member_roles.sort_by(|a, b| b.position.cmp(&a.position));

    let warn_list: Vec<WarnDto> = warns.cache.read().data().cloned().unwrap_or_default();
    let total = member_total(&warn_list, member_id);
    let member_warns: Vec<WarnDto> = warn_list
        .into_iter()
        .filter(|w| w.member == member_id)
        .collect();
    let joined = member.joined_at.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx! {
        Title { "{member.display_name()} | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-6",
            Link { to: Route::Members { guild_id }, class: "link", "← Members" }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body flex-row items-center gap-4",
                    img {
                        class: "w-20 h-20 rounded-full",
                        src: "{member.user.avatar_url(128)}",
                        alt: "",
                    }
                    div {
                        class: "flex flex-col gap-1",
                        h1 { class: "text-2xl font-semibold", "{member.display_name()}" }
                        p { class: "opacity-70", "{member.tag()}" }
                        p { class: "text-sm opacity-60", "ID {member_id} · joined {joined}" }
                        div {
                            class: "flex flex-wrap gap-1 mt-2",
                            for role in member_roles {
                                span {
                                    key: "{role.id}",
                                    class: "badge badge-outline",
                                    style: role.color_hex().map(|color| format!("border-color: {}; color: {}", color, color)).unwrap_or_default(),
                                    "{role.name}"
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "flex flex-col gap-2",
                h2 { class: "text-xl font-semibold", "Warns ({total})" }
                WarnTable {
                    guild_id,
                    warns: member_warns,
                    members: all.clone(),
                    on_deleted: move |_| warns.refresh(),
                }
            }
        }
    }
}
