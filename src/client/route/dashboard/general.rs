use dioxus::prelude::*;

use crate::{
    client::{
        component::{ChannelSelect, ErrorPage, LoadingPage, SaveBar},
        constant::SITE_NAME,
        hooks::use_cached,
        route::dashboard::settings_form::use_settings_form,
        util::validation::{validate_general_settings, PREFIX_MAX_LENGTH, WARN_LIMIT_MAX},
    },
    model::{discord::ChannelDto, server_data::WarnAction},
};

#[cfg(feature = "web")]
use crate::client::{api::guild::get_channels, hooks::use_fetch};

const LOCALES: [(&str, &str); 2] = [("ko", "한국어"), ("en", "English")];

/// Prefix, locale, notice channel and warn limit settings.
#[component]
pub fn General(guild_id: u64) -> Element {
    let mut form = use_settings_form(guild_id);
    let channels = use_cached::<Vec<ChannelDto>>();

    #[cfg(feature = "web")]
    use_fetch(channels, move || get_channels(guild_id));

    if let Some(error) = form.settings.cache.read().error() {
        return rsx! { ErrorPage { status: error.status, message: error.message.clone() } };
    }
    let Some(data) = form.edited() else {
        return rsx! { LoadingPage {} };
    };

    let errors = validate_general_settings(&data);
    let dirty = !form.patch().is_empty();
    let channel_list = channels.cache.read().data().cloned().unwrap_or_default();
    let warn_limit = data.warn_limit.map(|limit| limit.to_string()).unwrap_or_default();

    rsx! {
        Title { "General | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-4 max-w-2xl",
            h1 { class: "text-2xl font-semibold", "General settings" }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Command prefix" }
                input {
                    r#type: "text",
                    class: if errors.prefix.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                    maxlength: "{PREFIX_MAX_LENGTH}",
                    value: "{data.prefix}",
                    oninput: move |evt| form.edit(|d| d.prefix = evt.value()),
                }
                if let Some(error) = &errors.prefix {
                    p { class: "text-error text-sm", "{error}" }
                }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Language" }
                select {
                    class: "select select-bordered w-full",
                    value: "{data.locale}",
                    onchange: move |evt| form.edit(|d| d.locale = evt.value()),
                    for (code, label) in LOCALES {
                        option { value: code, selected: data.locale == code, "{label}" }
                    }
                }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Notice channel" }
                ChannelSelect {
                    channels: channel_list,
                    selected: data.notice_channel,
                    optional: true,
                    on_select: move |channel| form.edit(|d| d.notice_channel = channel),
                }
                p { class: "text-sm opacity-70", "Bot announcements are posted here." }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Warn limit" }
                    input {
                        r#type: "number",
                        class: if errors.warn_limit.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                        min: "1",
                        max: "{WARN_LIMIT_MAX}",
                        placeholder: "No limit",
                        value: "{warn_limit}",
                        oninput: move |evt| {
                            let value = evt.value();
                            form.edit(|d| d.warn_limit = value.trim().parse::<u32>().ok());
                        },
                    }
                    if let Some(error) = &errors.warn_limit {
                        p { class: "text-error text-sm", "{error}" }
                    }
                }
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "At the limit" }
                    select {
                        class: "select select-bordered w-full",
                        disabled: data.warn_limit.is_none(),
                        onchange: move |evt| {
                            if let Some(action) = WarnAction::from_str(&evt.value()) {
                                form.edit(|d| d.warn_action = action);
                            }
                        },
                        for action in WarnAction::ALL {
                            option {
                                value: action.as_str(),
                                selected: data.warn_action == action,
                                "{action.label()}"
                            }
                        }
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
