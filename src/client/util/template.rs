//! Placeholder substitution and markdown previews for message templates.

use pulldown_cmark::{html, Options, Parser};

use crate::model::billboard::GuildCountsDto;

/// Placeholders available in level-up messages.
pub const LEVEL_UP_PLACEHOLDERS: [&str; 3] = ["{user}", "{username}", "{level}"];

/// Replaces each `{key}` in `template` with its value; unknown keys are left as is.
pub fn fill_placeholders(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match candidate.find('}') {
            Some(end) => {
                let key = &candidate[1..end];
                match values.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&candidate[..=end]),
                }
                rest = &candidate[end + 1..];
            }
            None => {
                out.push_str(candidate);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Channel name a billboard format renders to with the given counters.
pub fn billboard_name(format: &str, counts: &GuildCountsDto) -> String {
    fill_placeholders(
        format,
        &[
            ("members", counts.members.to_string()),
            ("users", counts.users.to_string()),
            ("bots", counts.bots.to_string()),
            ("online", counts.online.to_string()),
            ("boosts", counts.boosts.to_string()),
        ],
    )
}

/// Level-up message as it would be sent for a sample member.
pub fn level_up_preview(template: &str, username: &str, level: u32) -> String {
    fill_placeholders(
        template,
        &[
            ("user", format!("@{}", username)),
            ("username", username.to_string()),
            ("level", level.to_string()),
        ],
    )
}

/// Renders Discord-flavoured markdown to HTML for previews.
///
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let escaped = source.replace('&', "&amp;").replace('<', "&lt;");
    // Discord keeps single newlines as line breaks.
    let with_breaks = escaped.replace('\n', "  \n");

    let parser = Parser::new_ext(&with_breaks, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billboard_placeholders_are_filled() {
        let counts = GuildCountsDto {
            members: 120,
            users: 100,
            bots: 20,
            online: 42,
            boosts: 3,
        };

        assert_eq!(
            billboard_name("👥 {members} | 🟢 {online} | {unknown}", &counts),
            "👥 120 | 🟢 42 | {unknown}"
        );
        assert_eq!(billboard_name("{bots}/{users}/{boosts}", &counts), "20/100/3");
    }

    #[test]
    fn unterminated_brace_is_kept() {
        assert_eq!(fill_placeholders("a {b", &[("b", "x".to_string())]), "a {b");
    }

    #[test]
    fn level_up_preview_substitutes_member() {
        assert_eq!(
            level_up_preview("{user} reached level {level}!", "aztra", 5),
            "@aztra reached level 5!"
        );
    }

    #[test]
    fn markdown_renders_emphasis_and_escapes_html() {
        let html = render_markdown("**hi** <script>");
        assert!(html.contains("<strong>hi</strong>"));
        assert!(html.contains("&lt;script"));
        assert!(!html.contains("<script>"));
    }
}
