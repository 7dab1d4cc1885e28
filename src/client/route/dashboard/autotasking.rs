use dioxus::prelude::*;

use crate::{
    client::{
        component::{ChannelSelect, ConfirmationModal, ErrorPage, LoadingPage, RoleSelect},
        constant::SITE_NAME,
        hooks::use_cached,
        model::{error::ApiError, save::SaveState},
        util::validation::{parse_snowflake, validate_autotask},
    },
    model::{
        autotask::{AutotaskAction, AutotaskDto, AutotaskPostDto},
        discord::{ChannelDto, RoleDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        autotask::{create_autotask, delete_autotask, get_autotasks},
        guild::{get_channels, get_roles},
    },
    hooks::use_fetch,
};

const ACTIONS: [AutotaskAction; 2] = [AutotaskAction::AddRole, AutotaskAction::RemoveRole];

/// Reaction role rules: reacting to a message grants or revokes a role.
#[component]
pub fn Autotasking(guild_id: u64) -> Element {
    #[allow(unused_mut)]
    let mut autotasks = use_cached::<Vec<AutotaskDto>>();
    let channels = use_cached::<Vec<ChannelDto>>();
    let roles = use_cached::<Vec<RoleDto>>();

    let mut form = use_signal(AutotaskPostDto::default);
    let mut message_input = use_signal(String::new);
    let mut save = use_signal(SaveState::default);

    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| None::<AutotaskDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use_fetch(autotasks, move || get_autotasks(guild_id));
        use_fetch(channels, move || get_channels(guild_id));
        use_fetch(roles, move || get_roles(guild_id));
    }

    let cache = autotasks.cache.read();
    let Some(rules) = cache.data().cloned() else {
        return match cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };
    let channel_list = channels.cache.read().data().cloned().unwrap_or_default();
    let role_list = roles.cache.read().data().cloned().unwrap_or_default();

    let data = form();
    let errors = validate_autotask(&data);
    let show_errors = !message_input().is_empty() || save.read().save_error().is_some();

    let channel_name = |id: u64| {
        channel_list
            .iter()
            .find(|c| c.id == id)
            .map(|c| format!("#{}", c.name))
            .unwrap_or_else(|| id.to_string())
    };
    let role_name = |id: u64| {
        role_list
            .iter()
            .find(|r| r.id == id)
            .map(|r| format!("@{}", r.name))
            .unwrap_or_else(|| id.to_string())
    };
    let rows: Vec<(AutotaskDto, String, String)> = rules
        .iter()
        .map(|rule| (rule.clone(), channel_name(rule.channel), role_name(rule.role)))
        .collect();

    rsx! {
        Title { "Auto tasking | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl font-semibold", "Auto tasking" }

            div {
                class: "card bg-base-200",
                div {
                    class: "card-body gap-3",
                    h2 { class: "card-title text-base", "New reaction role" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Channel" }
                            ChannelSelect {
                                channels: channel_list.clone(),
                                selected: (data.channel != 0).then_some(data.channel),
                                on_select: move |channel: Option<u64>| form.write().channel = channel.unwrap_or_default(),
                            }
                        }
                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Message ID" }
                            input {
                                r#type: "text",
                                inputmode: "numeric",
                                class: if show_errors && errors.message.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                                value: "{message_input()}",
                                oninput: move |evt| {
                                    let value = evt.value();
                                    form.write().message = parse_snowflake(&value).unwrap_or_default();
                                    message_input.set(value);
                                },
                            }
                        }
                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Emoji" }
                            input {
                                r#type: "text",
                                class: "input input-bordered w-full",
                                placeholder: "👍",
                                value: "{data.emoji}",
                                oninput: move |evt| form.write().emoji = evt.value(),
                            }
                        }
                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Action" }
                            div {
                                class: "join w-full",
                                select {
                                    class: "select select-bordered join-item",
                                    onchange: move |evt| {
                                        if let Some(action) = AutotaskAction::from_str(&evt.value()) {
                                            form.write().action = action;
                                        }
                                    },
                                    for action in ACTIONS {
                                        option {
                                            value: action.as_str(),
                                            selected: data.action == action,
                                            "{action.label()}"
                                        }
                                    }
                                }
                                div {
                                    class: "join-item flex-1",
                                    RoleSelect {
                                        guild_id,
                                        roles: role_list.clone(),
                                        selected: (data.role != 0).then_some(data.role),
                                        on_select: move |role| form.write().role = role,
                                    }
                                }
                            }
                        }
                    }
                    if show_errors {
                        for error in [&errors.channel, &errors.message, &errors.emoji, &errors.role].into_iter().flatten() {
                            p { class: "text-error text-sm", "{error}" }
                        }
                    }
                    if let Some(error) = save.read().save_error() {
                        div {
                            class: "alert alert-error",
                            span { "Failed to create the rule: {error}" }
                            button { class: "btn btn-sm", onclick: move |_| save.write().reset(), "Dismiss" }
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary",
                            disabled: !errors.is_valid() || !save.read().can_submit(),
                            onclick: move |_| {
                                if !save.write().begin() {
                                    return;
                                }
                                #[cfg(feature = "web")]
                                {
                                    let payload = form();
                                    spawn(async move {
                                        let result = create_autotask(guild_id, &payload).await;
                                        let succeeded = result.is_ok();
                                        save.write().settle(result);
                                        if succeeded {
                                            form.set(AutotaskPostDto::default());
                                            message_input.set(String::new());
                                            autotasks.refresh();
                                        }
                                    });
                                }
                            },
                            if save.read().is_saving() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                            }
                            "Add"
                        }
                    }
                }
            }

            if rows.is_empty() {
                p { class: "opacity-70", "No reaction roles yet." }
            } else {
                table {
                    class: "table table-zebra",
                    thead {
                        tr {
                            th { "Channel" }
                            th { "Message" }
                            th { "Emoji" }
                            th { "Action" }
                            th {}
                        }
                    }
                    tbody {
                        for (rule, channel, role) in rows {
                            tr {
                                key: "{rule.uuid}",
                                td { "{channel}" }
                                td { class: "font-mono text-sm", "{rule.message}" }
                                td { "{rule.emoji}" }
                                td { "{rule.action.label()} {role}" }
                                td {
                                    class: "text-right",
                                    button {
                                        class: "btn btn-xs btn-error btn-outline",
                                        onclick: {
                                            let rule = rule.clone();
                                            move |_| {
                                                deleting.set(Some(rule.clone()));
                                                delete_error.set(None);
                                                show_delete.set(true);
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete reaction role",
            message: "Reactions on the message will no longer change roles.",
            is_processing: is_deleting(),
            error: delete_error().map(|e| e.message),
            on_confirm: move |_| {
                let Some(rule) = deleting() else {
                    return;
                };
                is_deleting.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_autotask(guild_id, &rule.uuid).await {
                        Ok(()) => {
                            show_delete.set(false);
                            autotasks.refresh();
                        }
                        Err(err) => delete_error.set(Some(err)),
                    }
                    is_deleting.set(false);
                });
                #[cfg(not(feature = "web"))]
                let _ = rule;
            },
        }
    }
}
