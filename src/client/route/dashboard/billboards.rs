use dioxus::prelude::*;

use crate::{
    client::{
        component::{ChannelFilter, ChannelSelect, ConfirmationModal, ErrorPage, LoadingPage, Modal},
        constant::SITE_NAME,
        hooks::{use_cached, Resource},
        model::{error::ApiError, save::SaveState},
        util::{
            template::billboard_name,
            validation::{validate_billboard, CHANNEL_NAME_MAX_LENGTH},
        },
    },
    model::{
        billboard::{BillboardDto, GuildCountsDto, BILLBOARD_PLACEHOLDERS},
        discord::ChannelDto,
        statistics::StatisticsDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::{
            billboard::{create_billboard, delete_billboard, get_billboards, update_billboard},
            guild::get_channels,
            statistics::get_statistics,
        },
        hooks::use_fetch,
    },
    model::billboard::{BillboardPatchDto, BillboardPostDto},
};

/// Channels renamed periodically to show live server counters.
#[component]
pub fn Billboards(guild_id: u64) -> Element {
    #[allow(unused_mut)]
    let mut billboards = use_cached::<Vec<BillboardDto>>();
    let channels = use_cached::<Vec<ChannelDto>>();
    let statistics = use_cached::<StatisticsDto>();

    let mut channel = use_signal(|| None::<u64>);
    let mut format = use_signal(String::new);
    let mut save = use_signal(SaveState::default);

    let mut show_edit = use_signal(|| false);
    let mut editing = use_signal(|| None::<BillboardDto>);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| None::<BillboardDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use_fetch(billboards, move || get_billboards(guild_id));
        use_fetch(channels, move || get_channels(guild_id));
        use_fetch(statistics, move || get_statistics(guild_id));
    }

    let cache = billboards.cache.read();
    let Some(boards) = cache.data().cloned() else {
        return match cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };
    let channel_list = channels.cache.read().data().cloned().unwrap_or_default();
    let counts: GuildCountsDto = statistics
        .cache
        .read()
        .data()
        .map(|stats| stats.current)
        .unwrap_or_default();

    let errors = validate_billboard(channel().unwrap_or_default(), &format());
    let show_errors = !format().is_empty();
    let preview = billboard_name(&format(), &counts);
    let placeholders = BILLBOARD_PLACEHOLDERS.join(" ");

    let rows: Vec<(BillboardDto, String, String)> = boards
        .iter()
        .map(|board| {
            let current = channel_list
                .iter()
                .find(|c| c.id == board.channel)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| board.channel.to_string());
            (board.clone(), current, billboard_name(&board.format, &counts))
        })
        .collect();

    rsx! {
        Title { "Billboards | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl font-semibold", "Billboards" }

            div {
                class: "card bg-base-200",
                div {
                    class: "card-body gap-3",
                    h2 { class: "card-title text-base", "New billboard" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Channel" }
                            ChannelSelect {
                                channels: channel_list.clone(),
                                selected: channel(),
                                filter: ChannelFilter::NonCategory,
                                on_select: move |selected| channel.set(selected),
                            }
                        }
                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Name format" }
                            input {
                                r#type: "text",
                                class: if show_errors && errors.format.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                                maxlength: "{CHANNEL_NAME_MAX_LENGTH}",
                                placeholder: "Members: {{members}}",
                                value: "{format()}",
                                oninput: move |evt| format.set(evt.value()),
                            }
                        }
                    }
                    p { class: "text-sm opacity-70", "Placeholders: {placeholders}" }
                    if show_errors {
                        if let Some(error) = &errors.format {
                            p { class: "text-error text-sm", "{error}" }
                        }
                    }
                    if !preview.is_empty() {
                        p { class: "text-sm", "Preview: " span { class: "font-semibold", "{preview}" } }
                    }
                    if let Some(error) = save.read().save_error() {
                        div {
                            class: "alert alert-error",
                            span { "Failed to create the billboard: {error}" }
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
                                    let payload = BillboardPostDto {
                                        channel: channel().unwrap_or_default(),
                                        format: format(),
                                    };
                                    spawn(async move {
                                        let result = create_billboard(guild_id, &payload).await;
                                        let succeeded = result.is_ok();
                                        save.write().settle(result);
                                        if succeeded {
                                            channel.set(None);
                                            format.set(String::new());
                                            billboards.refresh();
                                        }
                                    });
                                }
                            },
                            "Add"
                        }
                    }
                }
            }

            if rows.is_empty() {
                p { class: "opacity-70", "No billboards yet." }
            } else {
                table {
                    class: "table table-zebra",
                    thead {
                        tr {
                            th { "Channel" }
                            th { "Format" }
                            th { "Renders as" }
                            th {}
                        }
                    }
                    tbody {
                        for (board, current, rendered) in rows {
                            tr {
                                key: "{board.uuid}",
                                td { "{current}" }
                                td { class: "font-mono text-sm", "{board.format}" }
                                td { "{rendered}" }
                                td {
                                    class: "text-right flex gap-1 justify-end",
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        onclick: {
                                            let board = board.clone();
                                            move |_| {
                                                editing.set(Some(board.clone()));
                                                show_edit.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-xs btn-error btn-outline",
                                        onclick: {
                                            let board = board.clone();
                                            move |_| {
                                                deleting.set(Some(board.clone()));
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

        if let Some(board) = editing() {
            BillboardEditor {
                key: "{board.uuid}",
                guild_id,
                board: board.clone(),
                counts,
                show: show_edit,
                billboards,
            }
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete billboard",
            message: "The channel keeps its current name but stops updating.",
            is_processing: is_deleting(),
            error: delete_error().map(|e| e.message),
            on_confirm: move |_| {
                let Some(board) = deleting() else {
                    return;
                };
                is_deleting.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_billboard(guild_id, &board.uuid).await {
                        Ok(()) => {
                            show_delete.set(false);
                            billboards.refresh();
                        }
                        Err(err) => delete_error.set(Some(err)),
                    }
                    is_deleting.set(false);
                });
                #[cfg(not(feature = "web"))]
                let _ = board;
            },
        }
    }
}

#[component]
fn BillboardEditor(
    guild_id: u64,
    board: BillboardDto,
    counts: GuildCountsDto,
    mut show: Signal<bool>,
    billboards: Resource<Vec<BillboardDto>>,
) -> Element {
    let mut format = use_signal(|| board.format.clone());
    let mut save = use_signal(SaveState::default);

    let errors = validate_billboard(board.channel, &format());
    let changed = format() != board.format;
    let preview = billboard_name(&format(), &counts);

    rsx! {
        Modal {
            show,
            title: "Edit billboard",
            prevent_close: save.read().is_saving(),
            div {
                class: "flex flex-col gap-3",
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    maxlength: "{CHANNEL_NAME_MAX_LENGTH}",
                    value: "{format()}",
                    oninput: move |evt| format.set(evt.value()),
                }
                if let Some(error) = &errors.format {
                    p { class: "text-error text-sm", "{error}" }
                }
                p { class: "text-sm", "Preview: " span { class: "font-semibold", "{preview}" } }
                if let Some(error) = save.read().save_error() {
                    div {
                        class: "alert alert-error",
                        span { "Failed to save: {error}" }
                        button { class: "btn btn-sm", onclick: move |_| save.write().reset(), "Dismiss" }
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
                    disabled: !changed || !errors.is_valid() || !save.read().can_submit(),
                    onclick: move |_| {
                        if !save.write().begin() {
                            return;
                        }
                        #[cfg(feature = "web")]
                        {
                            let uuid = board.uuid.clone();
                            let payload = BillboardPatchDto { format: format() };
                            let mut billboards = billboards;
                            spawn(async move {
                                let result = update_billboard(guild_id, &uuid, &payload).await;
                                let succeeded = result.is_ok();
                                save.write().settle(result);
                                if succeeded {
                                    show.set(false);
                                    billboards.refresh();
                                }
                            });
                        }
                    },
                    "Save"
                }
            }
        }
    }
}
