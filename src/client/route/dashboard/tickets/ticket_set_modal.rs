use dioxus::prelude::*;

use crate::{
    client::{
        component::{ChannelFilter, ChannelSelect, Modal},
        model::save::SaveState,
        util::{
            template::render_markdown,
            validation::{validate_ticket_set, MESSAGE_MAX_LENGTH, TICKET_SET_NAME_MAX_LENGTH},
        },
    },
    model::{
        discord::ChannelDto,
        ticket::{TicketSetDto, TicketSetPostDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::ticket::{create_ticket_set, update_ticket_set};

/// Create form, or edit form when `editing` holds a set.
///
/// The channel and the category for open tickets are fixed once a set exists,
/// so they are read-only when editing.
#[component]
pub fn TicketSetModal(
    guild_id: u64,
    mut show: Signal<bool>,
    editing: Option<TicketSetDto>,
    channels: Vec<ChannelDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let initial = editing.as_ref().map(TicketSetDto::to_post).unwrap_or_default();
    let mut form = use_signal(|| initial);
    let mut save = use_signal(SaveState::default);

    let data = form();
    let errors = validate_ticket_set(&data);
    let patch = editing.as_ref().map(|set| set.diff(&data));
    let changed = patch.as_ref().is_none_or(|patch| !patch.is_empty());
    let can_submit = errors.is_valid() && changed && save.read().can_submit();
    let is_edit = editing.is_some();
    let title = if is_edit { "Edit ticket set" } else { "New ticket set" };
    let preview = render_markdown(&data.message);

    let submit = move |_| {
        if !save.write().begin() {
            return;
        }
        #[cfg(feature = "web")]
        {
            let data = form();
            let editing = editing.clone();
            spawn(async move {
                let result = match &editing {
                    Some(set) => update_ticket_set(guild_id, &set.uuid, &set.diff(&data)).await,
                    None => create_ticket_set(guild_id, &data).await,
                };
                let succeeded = result.is_ok();
                save.write().settle(result);
                if succeeded {
                    show.set(false);
                    on_saved.call(());
                }
            });
        }
    };

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            wide: true,
            prevent_close: save.read().is_saving(),
            div {
                class: "flex flex-col gap-3",
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Name" }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        maxlength: "{TICKET_SET_NAME_MAX_LENGTH}",
                        value: "{data.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    if let Some(error) = &errors.name {
                        p { class: "text-error text-sm", "{error}" }
                    }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    fieldset {
                        class: "fieldset",
                        legend { class: "fieldset-legend", "Channel" }
                        ChannelSelect {
                            channels: channels.clone(),
                            selected: (data.channel != 0).then_some(data.channel),
                            disabled: is_edit,
                            on_select: move |channel: Option<u64>| form.write().channel = channel.unwrap_or_default(),
                        }
                        if let Some(error) = &errors.channel {
                            p { class: "text-error text-sm", "{error}" }
                        }
                    }
                    fieldset {
                        class: "fieldset",
                        legend { class: "fieldset-legend", "Emoji" }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "🎫",
                            value: "{data.emoji}",
                            oninput: move |evt| form.write().emoji = evt.value(),
                        }
                        if let Some(error) = &errors.emoji {
                            p { class: "text-error text-sm", "{error}" }
                        }
                    }
                    fieldset {
                        class: "fieldset",
                        legend { class: "fieldset-legend", "Category for open tickets" }
                        ChannelSelect {
                            channels: channels.clone(),
                            selected: (data.category_opened != 0).then_some(data.category_opened),
                            filter: ChannelFilter::Category,
                            disabled: is_edit,
                            on_select: move |channel: Option<u64>| form.write().category_opened = channel.unwrap_or_default(),
                        }
                        if let Some(error) = &errors.category_opened {
                            p { class: "text-error text-sm", "{error}" }
                        }
                    }
                    fieldset {
                        class: "fieldset",
                        legend { class: "fieldset-legend", "Category for closed tickets" }
                        ChannelSelect {
                            channels: channels.clone(),
                            selected: data.category_closed,
                            filter: ChannelFilter::Category,
                            optional: true,
                            on_select: move |channel| form.write().category_closed = channel,
                        }
                    }
                }
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Message" }
                    textarea {
                        class: "textarea textarea-bordered w-full h-32",
                        maxlength: "{MESSAGE_MAX_LENGTH}",
                        value: "{data.message}",
                        oninput: move |evt| form.write().message = evt.value(),
                    }
                    if let Some(error) = &errors.message {
                        p { class: "text-error text-sm", "{error}" }
                    }
                }
                if !data.message.is_empty() {
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body p-4",
                            p { class: "text-xs opacity-60", "Preview" }
                            div { class: "prose", dangerous_inner_html: "{preview}" }
                        }
                    }
                }
                if let Some(error) = save.read().save_error() {
                    div {
                        class: "alert alert-error",
                        span { "Failed to save: {error}" }
                        button {
                            class: "btn btn-sm",
                            onclick: move |_| save.write().reset(),
                            "Dismiss"
                        }
                    }
                }
            }
            div {
                class: "modal-action",
                button {
                    class: "btn",
                    disabled: save.read().is_saving(),
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    onclick: submit,
                    if save.read().is_saving() {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    if is_edit { "Save" } else { "Create" }
                }
            }
        }
    }
}
