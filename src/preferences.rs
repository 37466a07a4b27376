//! Viewer preferences read from the page query string.
//!
//! Every flag is tri-state: a recognized truthy token, a recognized falsy
//! token, or anything else (including absence), which falls back to the
//! caller's default.

use serde::Serialize;
use std::borrow::Cow;

const TRUTHY_TOKENS: [&str; 3] = ["1", "yes", "true"];
const FALSY_TOKENS: [&str; 3] = ["0", "no", "false"];

const CONTROLS_PARAM: &str = "controls";
const MUTED_PARAM: &str = "muted";
const AUTOPLAY_PARAM: &str = "autoplay";
const PLAYS_INLINE_PARAM: &str = "playsinline";

/// Snapshot of the display preferences for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedPreferences {
    pub show_controls: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub plays_inline: bool,
}

impl Default for FeedPreferences {
    fn default() -> Self {
        Self {
            show_controls: true,
            muted: true,
            autoplay: true,
            plays_inline: true,
        }
    }
}

/// Map a raw query value onto a boolean, using `default` for anything unrecognized.
pub fn resolve_tri_state_flag(raw: Option<&str>, default: bool) -> bool {
    let normalized = raw.unwrap_or_default().to_lowercase();
    if TRUTHY_TOKENS.contains(&normalized.as_str()) {
        return true;
    }
    if FALSY_TOKENS.contains(&normalized.as_str()) {
        return false;
    }
    default
}

/// Resolve the full preference snapshot from a page query string.
///
/// Accepts the string with or without its leading `?`.
pub fn resolve_configuration(query: &str) -> FeedPreferences {
    let defaults = FeedPreferences::default();
    let flag = |name: &str, default: bool| {
        let value = query_param(query, name);
        resolve_tri_state_flag(value.as_deref(), default)
    };

    FeedPreferences {
        show_controls: flag(CONTROLS_PARAM, defaults.show_controls),
        muted: flag(MUTED_PARAM, defaults.muted),
        autoplay: flag(AUTOPLAY_PARAM, defaults.autoplay),
        plays_inline: flag(PLAYS_INLINE_PARAM, defaults.plays_inline),
    }
}

/// First value for `name`, decoded the way `URLSearchParams::get` decodes it.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value).into_owned())
        })
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        // Malformed escapes stay literal.
        Err(_) => Cow::Owned(spaced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tri_state_truth_table() {
        for default in [true, false] {
            for token in ["1", "yes", "true", "YES", "True"] {
                assert!(resolve_tri_state_flag(Some(token), default), "{token}");
            }
            for token in ["0", "no", "false", "NO", "FaLsE"] {
                assert!(!resolve_tri_state_flag(Some(token), default), "{token}");
            }
            for token in ["", "maybe", "2", " yes", "on", "off"] {
                assert_eq!(resolve_tri_state_flag(Some(token), default), default, "{token}");
            }
            assert_eq!(resolve_tri_state_flag(None, default), default);
        }
    }

    #[test]
    fn explicit_values_override_defaults() {
        let prefs = resolve_configuration("?controls=0&muted=yes&autoplay=false&playsinline=1");
        assert_eq!(
            prefs,
            FeedPreferences {
                show_controls: false,
                muted: true,
                autoplay: false,
                plays_inline: true,
            }
        );
    }

    #[test]
    fn unrecognized_token_keeps_default() {
        let prefs = resolve_configuration("?controls=maybe");
        assert!(prefs.show_controls);
    }

    #[test]
    fn empty_query_resolves_all_true() {
        assert_eq!(resolve_configuration(""), FeedPreferences::default());
        assert_eq!(resolve_configuration("?"), FeedPreferences::default());
    }

    #[test]
    fn resolution_is_idempotent() {
        let query = "?muted=no&autoplay=YES&extra=1";
        assert_eq!(resolve_configuration(query), resolve_configuration(query));
    }

    #[test]
    fn leading_question_mark_is_optional() {
        assert_eq!(
            resolve_configuration("muted=0"),
            resolve_configuration("?muted=0")
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let prefs = resolve_configuration("?muted=0&muted=1");
        assert!(!prefs.muted);
    }

    #[test]
    fn parameter_names_are_case_sensitive() {
        let prefs = resolve_configuration("?Controls=0&PLAYSINLINE=false");
        assert!(prefs.show_controls);
        assert!(prefs.plays_inline);
    }

    #[test]
    fn values_are_percent_decoded() {
        assert_eq!(query_param("?controls=%46alse", "controls").as_deref(), Some("False"));
        assert_eq!(query_param("?a=b+c", "a").as_deref(), Some("b c"));
        assert_eq!(query_param("?play%73inline=0", "playsinline").as_deref(), Some("0"));
        assert!(!resolve_configuration("?autoplay=%30").autoplay);
    }

    #[test]
    fn bare_key_has_empty_value() {
        assert_eq!(query_param("?controls&muted=0", "controls").as_deref(), Some(""));
        assert!(resolve_configuration("?controls").show_controls);
    }

    #[test]
    fn malformed_escape_is_kept_literal() {
        assert_eq!(query_param("?controls=%zz", "controls").as_deref(), Some("%zz"));
    }

    #[test]
    fn missing_param_is_none() {
        assert_eq!(query_param("?muted=1", "controls"), None);
    }
}
