//! Search normalization and member matching.

use std::cmp::Ordering;

use crate::model::discord::MemberDto;

/// Lowercases and folds full-width forms (U+FF01..U+FF5E, U+3000) to ASCII so
/// `ＡＺＴＲＡ` matches `aztra`.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized substring test; an empty needle always matches.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || normalize(haystack).contains(&normalize(needle))
}

/// Locale-naive string ordering where a missing key sorts as `""`, i.e. first.
pub fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or_default().cmp(b.unwrap_or_default())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemberSearchMode {
    /// Substring match on nickname or user tag.
    #[default]
    NickAndTag,
    /// Prefix match on the numeric user id.
    Id,
}

impl MemberSearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NickAndTag => "nick-and-tag",
            Self::Id => "id",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "nick-and-tag" => Some(Self::NickAndTag),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::NickAndTag => "Search by nickname or tag",
            Self::Id => "Search by user id",
        }
    }
}

/// Whether `member` matches the search box.
///
/// The query is trimmed first, so a query of only whitespace matches every
/// member like an empty one. `Id` mode is a prefix match on the decimal id;
/// `NickAndTag` is a normalized substring match on the tag or nickname.
pub fn member_matches(member: &MemberDto, query: &str, mode: MemberSearchMode) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    match mode {
        MemberSearchMode::Id => member.id().to_string().starts_with(query),
        MemberSearchMode::NickAndTag => {
            contains_normalized(&member.tag(), query)
                || member
                    .nick
                    .as_deref()
                    .is_some_and(|nick| contains_normalized(nick, query))
        }
    }
}

/// Members are listed by display name, ties broken by id for a stable order.
pub fn compare_members(a: &MemberDto, b: &MemberDto) -> Ordering {
    compare_names(Some(a.display_name()), Some(b.display_name())).then(a.id().cmp(&b.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::model::discord::DiscordUserDto;

    fn member(id: u64, username: &str, nick: Option<&str>) -> MemberDto {
        MemberDto {
            user: DiscordUserDto {
                id,
                username: username.to_string(),
                discriminator: Some("0001".to_string()),
                global_name: None,
                avatar: None,
                bot: false,
            },
            nick: nick.map(str::to_string),
            joined_at: Utc::now(),
            roles: Vec::new(),
        }
    }

    #[test]
    fn normalize_folds_case_and_width() {
        assert_eq!(normalize("ＡｚｔＲａ\u{3000}Bot"), "aztra bot");
        assert_eq!(normalize("#１２３"), "#123");
    }

    #[test]
    fn id_mode_matches_prefix_only() {
        let members = [member(123, "a", None), member(456, "b", None), member(9123, "c", None)];
        let found: Vec<u64> = members
            .iter()
            .filter(|m| member_matches(m, "12", MemberSearchMode::Id))
            .map(MemberDto::id)
            .collect();
        assert_eq!(found, vec![123]);
    }

    #[test]
    fn nick_and_tag_mode_checks_both_fields() {
        let by_tag = member(1, "Aztra", None);
        let by_nick = member(2, "someone", Some("ＡＺＴＲＡ fan"));
        let neither = member(3, "other", Some("nobody"));

        assert!(member_matches(&by_tag, "aztra#0001", MemberSearchMode::NickAndTag));
        assert!(member_matches(&by_nick, "aztra", MemberSearchMode::NickAndTag));
        assert!(!member_matches(&neither, "aztra", MemberSearchMode::NickAndTag));
    }

    #[test]
    fn nick_and_tag_mode_does_not_match_across_fields() {
        let m = member(1, "cd", Some("ab"));
        assert!(!member_matches(&m, "bc", MemberSearchMode::NickAndTag));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(member_matches(&member(1, "x", None), "  ", MemberSearchMode::Id));
    }

    #[test]
    fn missing_names_sort_first() {
        assert_eq!(compare_names(None, Some("a")), Ordering::Less);
        assert_eq!(compare_names(Some("b"), Some("a")), Ordering::Greater);
        assert_eq!(compare_names(None, Some("")), Ordering::Equal);
    }
}
