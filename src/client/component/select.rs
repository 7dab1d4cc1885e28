//! Channel and role pickers backed by the shared list query.

use dioxus::prelude::*;

use crate::{
    client::{
        component::searchable_dropdown::{DropdownItem, SearchableDropdown},
        util::{list::ListQuery, search::contains_normalized},
    },
    model::discord::{ChannelDto, ChannelKind, RoleDto},
};

/// Which channels a picker offers.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ChannelFilter {
    /// Channels messages can be posted in.
    #[default]
    Text,
    Category,
    /// Anything but categories, e.g. billboards which rename the channel.
    NonCategory,
}

impl ChannelFilter {
    pub fn accepts(&self, channel: &ChannelDto) -> bool {
        match self {
            ChannelFilter::Text => channel.is_text_based(),
            ChannelFilter::Category => channel.kind == ChannelKind::Category,
            ChannelFilter::NonCategory => channel.kind != ChannelKind::Category,
        }
    }
}

fn channel_label(channel: &ChannelDto) -> String {
    match channel.kind {
        ChannelKind::Category => channel.name.to_uppercase(),
        ChannelKind::Voice | ChannelKind::Stage => format!("🔊 {}", channel.name),
        _ => format!("# {}", channel.name),
    }
}

#[component]
pub fn ChannelSelect(
    channels: Vec<ChannelDto>,
    selected: Option<u64>,
    #[props(default)]
    filter: ChannelFilter,
    /// Offers a "None" entry that clears the selection.
    #[props(default = false)]
    optional: bool,
    #[props(default = false)]
    disabled: bool,
    on_select: EventHandler<Option<u64>>,
) -> Element {
    let search = use_signal(String::new);

    let query = search();
    let matched: Vec<ChannelDto> = ListQuery::new(channels.len().max(1))
        .filter(|c: &ChannelDto| filter.accepts(c) && contains_normalized(&c.name, &query))
        .sort_by_number(|c| c.position)
        .apply(&channels)
        .into_iter()
        .cloned()
        .collect();

    let display_value = selected.and_then(|id| {
        channels
            .iter()
            .find(|c| c.id == id)
            .map(channel_label)
    });
    let placeholder = if optional { "None" } else { "Select a channel" };

    rsx! {
        SearchableDropdown {
            search_query: search,
            placeholder: placeholder.to_string(),
            display_value,
            disabled,
            has_items: optional || !matched.is_empty(),
            if optional {
                DropdownItem {
                    selected: selected.is_none(),
                    on_select: move |_| on_select.call(None),
                    span { class: "opacity-70", "None" }
                }
            }
            for channel in matched {
                DropdownItem {
                    key: "{channel.id}",
                    selected: selected == Some(channel.id),
                    on_select: move |_| on_select.call(Some(channel.id)),
                    "{channel_label(&channel)}"
                }
            }
        }
    }
}

/// Role picker listing roles highest first. `@everyone` and roles managed by
/// integrations cannot be granted and are left out.
#[component]
pub fn RoleSelect(
    guild_id: u64,
    roles: Vec<RoleDto>,
    selected: Option<u64>,
    #[props(default = false)]
    disabled: bool,
    on_select: EventHandler<u64>,
) -> Element {
    let search = use_signal(String::new);

    let query = search();
    let matched: Vec<RoleDto> = ListQuery::new(roles.len().max(1))
        .filter(|r: &RoleDto| {
            r.id != guild_id && !r.managed && contains_normalized(&r.name, &query)
        })
        .sort_by_number(|r| -r.position)
        .apply(&roles)
        .into_iter()
        .cloned()
        .collect();

    let display_value = selected.and_then(|id| {
        roles
            .iter()
            .find(|r| r.id == id)
            .map(|r| format!("@{}", r.name))
    });

    rsx! {
        SearchableDropdown {
            search_query: search,
            placeholder: "Select a role",
            display_value,
            disabled,
            has_items: !matched.is_empty(),
            for role in matched {
                DropdownItem {
                    key: "{role.id}",
                    selected: selected == Some(role.id),
                    on_select: move |_| on_select.call(role.id),
                    span {
                        style: role.color_hex().map(|color| format!("color: {}", color)).unwrap_or_default(),
                        "@{role.name}"
                    }
                }
            }
        }
    }
}
