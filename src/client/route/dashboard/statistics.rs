use dioxus::prelude::*;

use crate::{
    client::{
        component::{ChartCard, ErrorPage, LoadingPage, Pagination},
        constant::SITE_NAME,
        hooks::use_cached,
        util::{
            chart::{Aggregate, Interval},
            list::ListQuery,
            pagination::{PageState, STATISTICS_PAGE_SIZE},
        },
    },
    model::{
        discord::MemberDto,
        statistics::{MemberMessageCountDto, StatisticsDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{guild::get_members, statistics::get_statistics},
    constant::REVALIDATE_INTERVAL_MS,
    hooks::{use_fetch, use_revalidate},
};

/// Activity charts and the most active members.
#[component]
pub fn Statistics(guild_id: u64) -> Element {
    let statistics = use_cached::<StatisticsDto>();
    let members = use_cached::<Vec<MemberDto>>();
    let mut interval = use_signal(|| Interval::Daily);

    #[cfg(feature = "web")]
    {
        use_fetch(statistics, move || get_statistics(guild_id));
        use_fetch(members, move || get_members(guild_id));
        use_revalidate(statistics, REVALIDATE_INTERVAL_MS);
    }

    let cache = statistics.cache.read();
    let Some(stats) = cache.data().cloned() else {
        return match cache.error() {
            Some(error) => rsx! { ErrorPage { status: error.status, message: error.message.clone() } },
            None => rsx! { LoadingPage {} },
        };
    };
    let member_list = members.cache.read().data().cloned().unwrap_or_default();
    let current = stats.current;
    let selected = interval();

    let tabs = [Interval::Daily, Interval::Hourly].map(|option| {
        let label = match option {
            Interval::Daily => "Last 30 days",
            Interval::Hourly => "Last 24 hours",
        };
        let class = if option == selected { "tab tab-active" } else { "tab" };
        (option, option.as_str(), label, class)
    });

    rsx! {
        Title { "Statistics | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl font-semibold", "Statistics" }

            div {
                class: "stats stats-vertical md:stats-horizontal bg-base-200",
                StatTile { title: "Members", value: current.members }
                StatTile { title: "Users", value: current.users }
                StatTile { title: "Bots", value: current.bots }
                StatTile { title: "Online", value: current.online }
                StatTile { title: "Boosts", value: current.boosts }
            }

            div {
                role: "tablist",
                class: "tabs tabs-box w-fit",
                for (option, id, label, class) in tabs {
                    a {
                        key: "{id}",
                        role: "tab",
                        class,
                        onclick: move |_| interval.set(option),
                        "{label}"
                    }
                }
            }

            ChartCard {
                guild_id,
                title: "Members",
                kind: "members",
                points: stats.members.clone(),
                interval: selected,
                aggregate: Aggregate::Last,
            }
            ChartCard {
                guild_id,
                title: "Messages",
                kind: "messages",
                points: stats.messages.clone(),
                interval: selected,
                aggregate: Aggregate::Sum,
            }

            TopChatters { counts: stats.member_messages.clone(), members: member_list }
        }
    }
}

#[component]
fn StatTile(title: String, value: u64) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
        }
    }
}

/// Orders members by messages sent, most active first.
pub fn compare_chatters(a: &MemberMessageCountDto, b: &MemberMessageCountDto) -> std::cmp::Ordering {
    b.count.cmp(&a.count).then(a.member.cmp(&b.member))
}

#[component]
fn TopChatters(counts: Vec<MemberMessageCountDto>, members: Vec<MemberDto>) -> Element {
    let mut list = use_signal(PageState::default);

    let state = list();
    let view = ListQuery::new(STATISTICS_PAGE_SIZE)
        .sort_by(compare_chatters)
        .run(&counts, state.page);
    let last_page = view.last_page;
    let offset = view.page * STATISTICS_PAGE_SIZE;

    let rows: Vec<(usize, u64, String, u64)> = view
        .items
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = members
                .iter()
                .find(|m| m.id() == entry.member)
                .map(|m| m.display_name().to_string())
                .unwrap_or_else(|| format!("Left member ({})", entry.member));
            (offset + index + 1, entry.member, name, entry.count)
        })
        .collect();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h3 { class: "card-title", "Most active members" }
                if rows.is_empty() {
                    p { class: "opacity-70", "No messages recorded in the last 30 days." }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "#" }
                                th { "Member" }
                                th { "Messages" }
                            }
                        }
                        tbody {
                            for (rank, member, name, count) in rows {
                                tr {
                                    key: "{member}",
                                    td { "{rank}" }
                                    td { "{name}" }
                                    td { "{count}" }
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chatter(member: u64, count: u64) -> MemberMessageCountDto {
        MemberMessageCountDto { member, count }
    }

    #[test]
    fn chatters_sort_by_count_then_id() {
        let counts = vec![chatter(3, 5), chatter(1, 9), chatter(2, 5)];
        let view = ListQuery::new(STATISTICS_PAGE_SIZE)
            .sort_by(compare_chatters)
            .run(&counts, 0);

        let order: Vec<u64> = view.items.iter().map(|c| c.member).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn chatters_page_by_ten() {
        let counts: Vec<MemberMessageCountDto> = (1..=25).map(|id| chatter(id, 100 - id)).collect();
        let view = ListQuery::new(STATISTICS_PAGE_SIZE)
            .sort_by(compare_chatters)
            .run(&counts, 2);

        assert_eq!(view.items.len(), 5);
        assert_eq!(view.last_page, 2);
        assert_eq!(view.items[0].member, 21);
    }
}
