//! Ticket sets and the tickets opened through them. Both lists refresh in the
//! background while the page is open.

mod ticket_list;
mod ticket_set_modal;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage},
        constant::SITE_NAME,
        hooks::use_cached,
        model::error::ApiError,
        util::template::render_markdown,
    },
    model::{
        discord::{ChannelDto, MemberDto},
        ticket::{TicketDto, TicketSetDto},
    },
};

use ticket_list::TicketList;
use ticket_set_modal::TicketSetModal;

#[cfg(feature = "web")]
use crate::client::{
    api::{
        guild::{get_channels, get_members},
        ticket::{delete_ticket_set, get_ticket_sets, get_tickets, resend_ticket_set},
    },
    constant::REVALIDATE_INTERVAL_MS,
    hooks::{use_fetch, use_revalidate},
};

/// Outcome of a resend shown above the ticket set table.
#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Failure(String),
}

fn resend_failure_message(error: &ApiError) -> String {
    if error.is_rate_limited() {
        "The message was resent recently. Try again in one minute.".to_string()
    } else {
        format!("Failed to resend the message: {}", error)
    }
}

fn channel_name(channels: &[ChannelDto], id: u64) -> String {
    channels
        .iter()
        .find(|c| c.id == id)
        .map(|c| format!("#{}", c.name))
        .unwrap_or_else(|| id.to_string())
}

#[component]
pub fn Tickets(guild_id: u64) -> Element {
    #[allow(unused_mut)]
    let mut ticket_sets = use_cached::<Vec<TicketSetDto>>();
    let tickets = use_cached::<Vec<TicketDto>>();
    let channels = use_cached::<Vec<ChannelDto>>();
    let members = use_cached::<Vec<MemberDto>>();

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<TicketSetDto>);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| None::<TicketSetDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ApiError>);
    let mut form_generation = use_signal(|| 0u32);
    let mut notice = use_signal(|| None::<Notice>);
    let mut resending = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        use_fetch(ticket_sets, move || get_ticket_sets(guild_id));
        use_fetch(tickets, move || get_tickets(guild_id));
        use_fetch(channels, move || get_channels(guild_id));
        use_fetch(members, move || get_members(guild_id));
        use_revalidate(ticket_sets, REVALIDATE_INTERVAL_MS);
        use_revalidate(tickets, REVALIDATE_INTERVAL_MS);
    }

    let set_cache = ticket_sets.cache.read();
    let Some(sets) = set_cache.data().cloned() else {
        return match set_cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };
    let channel_list = channels.cache.read().data().cloned().unwrap_or_default();
    let member_list = members.cache.read().data().cloned().unwrap_or_default();
    let ticket_list = tickets.cache.read().data().cloned().unwrap_or_default();
    // Remounts the form with fresh state each time it is opened
    let form_key = format!("ticket-set-form-{}", form_generation());

    rsx! {
        Title { "Tickets | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-6",
            div {
                class: "flex justify-between items-center",
                h1 { class: "text-2xl font-semibold", "Tickets" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        *form_generation.write() += 1;
                        show_form.set(true);
                    },
                    "New ticket set"
                }
            }

            match notice() {
                Some(Notice::Success(message)) => rsx! {
                    div { class: "alert alert-success", span { "{message}" } }
                },
                Some(Notice::Failure(message)) => rsx! {
                    div { class: "alert alert-warning", span { "{message}" } }
                },
                None => rsx! {},
            }

            if sets.is_empty() {
                p { class: "opacity-70", "No ticket sets yet." }
            } else {
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                    for set in sets.iter().cloned() {
                        div {
                            key: "{set.uuid}",
                            class: "card bg-base-200",
                            div {
                                class: "card-body p-4 gap-2",
                                div {
                                    class: "flex justify-between items-center",
                                    h3 { class: "card-title text-base", "{set.emoji} {set.name}" }
                                    span { class: "text-sm opacity-70", "{channel_name(&channel_list, set.channel)}" }
                                }
                                div {
                                    class: "prose prose-sm max-h-24 overflow-hidden opacity-80",
                                    dangerous_inner_html: "{render_markdown(&set.message)}",
                                }
                                div {
                                    class: "card-actions justify-end",
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        disabled: resending().as_deref() == Some(set.uuid.as_str()),
                                        onclick: {
                                            let uuid = set.uuid.clone();
                                            move |_| {
                                                resending.set(Some(uuid.clone()));
                                                notice.set(None);
                                                #[cfg(feature = "web")]
                                                {
                                                    let uuid = uuid.clone();
                                                    spawn(async move {
                                                        match resend_ticket_set(guild_id, &uuid).await {
                                                            Ok(()) => {
                                                                notice.set(Some(Notice::Success("Ticket message resent".to_string())));
                                                                ticket_sets.refresh();
                                                            }
                                                            Err(err) => notice.set(Some(Notice::Failure(resend_failure_message(&err)))),
                                                        }
                                                        resending.set(None);
                                                    });
                                                }
                                            }
                                        },
                                        "Resend message"
                                    }
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        onclick: {
                                            let set = set.clone();
                                            move |_| {
                                                editing.set(Some(set.clone()));
                                                *form_generation.write() += 1;
                                                show_form.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-xs btn-error btn-outline",
                                        onclick: {
                                            let set = set.clone();
                                            move |_| {
                                                deleting.set(Some(set.clone()));
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

            TicketList {
                tickets: ticket_list,
                sets: sets.clone(),
                channels: channel_list.clone(),
                members: member_list,
            }
        }

        TicketSetModal {
            key: "{form_key}",
            guild_id,
            show: show_form,
            editing: editing(),
            channels: channel_list,
            on_saved: move |_| ticket_sets.refresh(),
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete ticket set",
            message: deleting()
                .map(|set| format!("Delete \"{}\"? Existing ticket channels stay in place.", set.name))
                .unwrap_or_default(),
            is_processing: is_deleting(),
            error: delete_error().map(|e| e.message),
            on_confirm: move |_| {
                let Some(set) = deleting() else {
                    return;
                };
                is_deleting.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_ticket_set(guild_id, &set.uuid).await {
                        Ok(()) => {
                            show_delete.set(false);
                            ticket_sets.refresh();
                        }
                        Err(err) => delete_error.set(Some(err)),
                    }
                    is_deleting.set(false);
                });
                #[cfg(not(feature = "web"))]
                let _ = set;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_resend_asks_to_wait() {
        let error = ApiError {
            status: 429,
            message: "Too many requests".to_string(),
        };
        assert!(resend_failure_message(&error).contains("one minute"));

        let error = ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(resend_failure_message(&error).ends_with("Bad gateway"));
    }
}
