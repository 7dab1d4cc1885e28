//! Per-member warn totals and their ranking.

use std::collections::HashMap;

use crate::model::warn::WarnDto;

/// Entries shown in the ranking summary card.
pub const SUMMARY_SIZE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarnRank {
    pub member: u64,
    pub total: u64,
    /// 1-based; members with equal totals share a rank.
    pub rank: usize,
}

/// Cumulative warn weight per member, in first-seen order.
///
/// The first warn of a member counts as 1 whatever its `count`; later warns
/// add their own `count`. This mirrors the totals members have always been
/// shown and is kept until the seeding is settled with moderators.
pub fn aggregate(warns: &[WarnDto]) -> Vec<(u64, u64)> {
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut totals: Vec<(u64, u64)> = Vec::new();

    for warn in warns {
        match index.get(&warn.member) {
            Some(&position) => totals[position].1 += u64::from(warn.count),
            None => {
                index.insert(warn.member, totals.len());
                totals.push((warn.member, 1));
            }
        }
    }

    totals
}

/// Members ordered by descending total; ties keep first-seen order and share
/// the rank of the first entry with the same total.
pub fn rank(warns: &[WarnDto]) -> Vec<WarnRank> {
    let mut totals = aggregate(warns);
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .iter()
        .map(|&(member, total)| {
            let first = totals
                .iter()
                .position(|&(_, other)| other == total)
                .unwrap_or_default();
            WarnRank {
                member,
                total,
                rank: first + 1,
            }
        })
        .collect()
}

/// Total for a single member, using the same seeding as [`aggregate`].
pub fn member_total(warns: &[WarnDto], member: u64) -> u64 {
    aggregate(warns)
        .into_iter()
        .find(|(id, _)| *id == member)
        .map(|(_, total)| total)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn warn(member: u64, count: u32) -> WarnDto {
        WarnDto {
            uuid: format!("{}-{}", member, count),
            member,
            by: 1,
            reason: "spam".to_string(),
            count,
            dt: Utc::now(),
        }
    }

    #[test]
    fn first_warn_seeds_one_and_later_warns_add_count() {
        let warns = [warn(10, 3), warn(10, 2), warn(20, 5)];

        assert_eq!(aggregate(&warns), vec![(10, 3), (20, 1)]);
    }

    #[test]
    fn three_two_then_five_ranks_a_above_b() {
        // B totals 1 here, not 5: the first warn seeds the total at 1.
        let ranking = rank(&[warn(10, 3), warn(10, 2), warn(20, 5)]);

        assert_eq!(
            ranking,
            vec![
                WarnRank { member: 10, total: 3, rank: 1 },
                WarnRank { member: 20, total: 1, rank: 2 },
            ]
        );
    }

    #[test]
    fn ranking_orders_by_total_descending() {
        let warns = [warn(10, 3), warn(10, 2), warn(20, 5), warn(20, 4), warn(20, 1)];
        let ranking = rank(&warns);

        assert_eq!(ranking[0].member, 20);
        assert_eq!(ranking[0].total, 6);
        assert_eq!(ranking[1].member, 10);
        assert_eq!(ranking[1].total, 3);
    }

    #[test]
    fn equal_totals_share_rank() {
        let warns = [warn(1, 1), warn(1, 4), warn(2, 1), warn(2, 4), warn(3, 1)];
        let ranking = rank(&warns);

        assert_eq!(ranking.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 1, 3]);
        assert_eq!(ranking[0].member, 1);
        assert_eq!(ranking[1].member, 2);
    }

    #[test]
    fn totals_follow_the_seed_rule() {
        let warns = [warn(7, 9), warn(8, 2), warn(7, 4), warn(8, 3), warn(7, 1)];
        let seeded: u64 = aggregate(&warns).iter().map(|(_, total)| total).sum();

        let members = 2;
        let later: u64 = [4u64, 3, 1].iter().sum();
        assert_eq!(seeded, members + later);
        assert_eq!(member_total(&warns, 7), 6);
        assert_eq!(member_total(&warns, 99), 0);
    }

    #[test]
    fn empty_list_has_no_ranking() {
        assert!(rank(&[]).is_empty());
    }
}
