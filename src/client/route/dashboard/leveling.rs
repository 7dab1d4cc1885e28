use dioxus::prelude::*;

use crate::{
    client::{
        component::{ChannelSelect, ErrorPage, LoadingPage, Modal, Pagination, SaveBar},
        constant::{LEVEL_UP_PREVIEW_LEVEL, SITE_NAME},
        hooks::{use_cached, Resource},
        model::{auth::SessionContext, error::ApiError},
        route::dashboard::settings_form::use_settings_form,
        util::{
            list::ListQuery,
            pagination::{PageState, MEMBER_PAGE_SIZE},
            search::{member_matches, MemberSearchMode},
            template::{level_up_preview, render_markdown, LEVEL_UP_PLACEHOLDERS},
            validation::validate_leveling,
        },
    },
    model::{
        discord::{ChannelDto, MemberDto},
        level::MemberExpDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        guild::{get_channels, get_members},
        level::{get_exps, update_exp},
    },
    hooks::use_fetch,
};

/// Leveling settings and the experience ranking.
#[component]
pub fn Leveling(guild_id: u64) -> Element {
    rsx! {
        Title { "Leveling | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-8",
            LevelingSettings { guild_id }
            ExpRanking { guild_id }
        }
    }
}

#[component]
fn LevelingSettings(guild_id: u64) -> Element {
    let mut form = use_settings_form(guild_id);
    let channels = use_cached::<Vec<ChannelDto>>();
    let session = use_context::<SessionContext>();

    #[cfg(feature = "web")]
    use_fetch(channels, move || get_channels(guild_id));

    if let Some(error) = form.settings.cache.read().error() {
        return rsx! { ErrorPage { status: error.status, message: error.message.clone() } };
    }
    let Some(data) = form.edited() else {
        return rsx! { LoadingPage {} };
    };

    let errors = validate_leveling(&data);
    let dirty = !form.patch().is_empty();
    let channel_list = channels.cache.read().data().cloned().unwrap_or_default();
    let message = data.leveling.level_up_message.clone().unwrap_or_default();
    let username = session.user().map(|user| user.name).unwrap_or_else(|| "Aztra".to_string());
    let preview = render_markdown(&level_up_preview(&message, &username, LEVEL_UP_PREVIEW_LEVEL));
    let placeholders = LEVEL_UP_PLACEHOLDERS.join(" ");

    rsx! {
        div {
            class: "flex flex-col gap-4 max-w-2xl",
            h1 { class: "text-2xl font-semibold", "Leveling" }

            label {
                class: "label cursor-pointer justify-start gap-3",
                input {
                    r#type: "checkbox",
                    class: "toggle toggle-primary",
                    checked: data.leveling.enabled,
                    onchange: move |evt| form.edit(|d| d.leveling.enabled = evt.checked()),
                }
                span { "Give experience for chatting" }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Level-up channel" }
                ChannelSelect {
                    channels: channel_list,
                    selected: data.leveling.level_up_channel,
                    optional: true,
                    disabled: !data.leveling.enabled,
                    on_select: move |channel| form.edit(|d| d.leveling.level_up_channel = channel),
                }
                p { class: "text-sm opacity-70", "None answers in the channel the member chatted in." }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Level-up message" }
                textarea {
                    class: if errors.level_up_message.is_some() { "textarea textarea-bordered textarea-error w-full h-28" } else { "textarea textarea-bordered w-full h-28" },
                    disabled: !data.leveling.enabled,
                    value: "{message}",
                    oninput: move |evt| {
                        let value = evt.value();
                        form.edit(|d| {
                            d.leveling.level_up_message = (!value.is_empty()).then_some(value);
                        });
                    },
                }
                p { class: "text-sm opacity-70", "Placeholders: {placeholders}" }
                if let Some(error) = &errors.level_up_message {
                    p { class: "text-error text-sm", "{error}" }
                }
            }

            if !message.is_empty() {
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body p-4",
                        p { class: "text-xs opacity-60", "Preview" }
                        div { class: "prose", dangerous_inner_html: "{preview}" }
                    }
                }
            }

            SaveBar {
                state: form.save.read().clone(),
                dirty,
                valid: errors.is_valid(),
                on_save: move |_| form.submit(guild_id),
                on_reset: move |_| form.reset(),
            }
        }
    }
}

#[component]
fn ExpRanking(guild_id: u64) -> Element {
    let exps = use_cached::<Vec<MemberExpDto>>();
    let members = use_cached::<Vec<MemberDto>>();
    let mut list = use_signal(PageState::default);
    let mut mode = use_signal(|| MemberSearchMode::NickAndTag);
    let show_editor = use_signal(|| false);
    let mut editing = use_signal(|| None::<MemberExpDto>);

    #[cfg(feature = "web")]
    use_fetch(exps, move || get_exps(guild_id));
    #[cfg(feature = "web")]
    use_fetch(members, move || get_members(guild_id));

    let exp_cache = exps.cache.read();
    let member_list = members.cache.read().data().cloned().unwrap_or_default();

    let Some(all) = exp_cache.data() else {
        return match exp_cache.error() {
            Some(error) => rsx! { div { class: "alert alert-error", "Failed to load ranking: {error}" } },
            None => rsx! { span { class: "loading loading-spinner" } },
        };
    };

    let state = list();
    let search_mode = mode();
    let find_member = |id: u64| member_list.iter().find(|m| m.id() == id);
    let view = ListQuery::new(MEMBER_PAGE_SIZE)
        .filter(|entry: &MemberExpDto| match find_member(entry.member) {
            Some(member) => member_matches(member, &state.search, search_mode),
            None => state.search.trim().is_empty() || entry.member.to_string().starts_with(state.search.trim()),
        })
        .sort_by(|a, b| b.exp.cmp(&a.exp).then(a.member.cmp(&b.member)))
        .run(all, state.page);

    let last_page = view.last_page;

    // Ranks count over the whole list, not the filtered view
    let mut ranked: Vec<&MemberExpDto> = all.iter().collect();
    ranked.sort_by(|a, b| b.exp.cmp(&a.exp).then(a.member.cmp(&b.member)));
    let rank_of = |id: u64| ranked.iter().position(|e| e.member == id).map(|i| i + 1).unwrap_or_default();

    let rows: Vec<(usize, MemberExpDto, String)> = view
        .items
        .iter()
        .map(|entry| {
            let name = find_member(entry.member)
                .map(|m| format!("{} ({})", m.display_name(), m.tag()))
                .unwrap_or_else(|| format!("Left member ({})", entry.member));
            (rank_of(entry.member), (*entry).clone(), name)
        })
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-4",
            h2 { class: "text-xl font-semibold", "Experience ranking" }
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
                    class: "input input-bordered join-item w-full",
                    placeholder: search_mode.placeholder(),
                    value: "{state.search}",
                    oninput: move |evt| list.write().set_search(evt.value()),
                }
            }
            table {
                class: "table table-zebra",
                thead {
                    tr {
                        th { "#" }
                        th { "Member" }
                        th { "Experience" }
                        th {}
                    }
                }
                tbody {
                    for (rank, entry, name) in rows {
                        tr {
                            key: "{entry.member}",
                            td { "{rank}" }
                            td { "{name}" }
                            td { "{entry.exp}" }
                            td {
                                class: "text-right",
                                button {
                                    class: "btn btn-xs btn-outline",
                                    onclick: {
                                        let mut show_editor = show_editor;
                                        let entry = entry.clone();
                                        move |_| {
                                            editing.set(Some(entry.clone()));
                                            show_editor.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                            }
                        }
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
        if let Some(entry) = editing() {
            ExpEditor { key: "{entry.member}", guild_id, entry: entry.clone(), show: show_editor, exps }
        }
    }
}

#[component]
fn ExpEditor(guild_id: u64, entry: MemberExpDto, show: Signal<bool>, exps: Resource<Vec<MemberExpDto>>) -> Element {
    let mut value = use_signal(|| entry.exp.to_string());
    let mut is_saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);

    let parsed = value().trim().parse::<u64>().ok();

    #[cfg_attr(not(feature = "web"), allow(unused_variables, unused_mut))]
    let mut save = move |exp: u64| {
        is_saving.set(true);
        error.set(None);
        #[cfg(feature = "web")]
        {
            let mut exps = exps;
            let mut show = show;
            spawn(async move {
                match update_exp(guild_id, entry.member, exp).await {
                    Ok(()) => {
                        show.set(false);
                        exps.refresh();
                    }
                    Err(err) => error.set(Some(err)),
                }
                is_saving.set(false);
            });
        }
    };

    rsx! {
        Modal {
            show,
            title: "Edit experience",
            prevent_close: is_saving(),
            div {
                class: "flex flex-col gap-3",
                input {
                    r#type: "number",
                    class: "input input-bordered w-full",
                    min: "0",
                    value: "{value()}",
                    oninput: move |evt| value.set(evt.value()),
                }
                if let Some(error) = error() {
                    div { class: "alert alert-error", span { "{error}" } }
                }
            }
            div {
                class: "modal-action",
                button {
                    class: "btn btn-error btn-outline",
                    disabled: is_saving(),
                    onclick: move |_| save(0),
                    "Reset to 0"
                }
                button {
                    class: "btn btn-primary",
                    disabled: is_saving() || parsed.is_none(),
                    onclick: move |_| {
                        if let Some(exp) = parsed {
                            save(exp);
                        }
                    },
                    "Save"
                }
            }
        }
    }
}
