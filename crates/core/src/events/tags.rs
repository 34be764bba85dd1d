//! Tag lookup table and tag normalization.

use serde::Serialize;

/// Display metadata for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagMeta {
    pub tag: &'static str,
    pub label: &'static str,
    /// Icon name understood by the page (`music`, `leaf`, `bike`, `heart`, `star`).
    pub icon: &'static str,
}

/// Icon used for tags missing from [`TAG_TABLE`].
pub const DEFAULT_TAG_ICON: &str = "star";

/// Known tags and how they are shown.
pub const TAG_TABLE: [TagMeta; 9] = [
    TagMeta { tag: "music", label: "Music", icon: "music" },
    TagMeta { tag: "outdoors", label: "Outdoors", icon: "leaf" },
    TagMeta { tag: "fitness", label: "Fitness", icon: "bike" },
    TagMeta { tag: "family", label: "Family", icon: "heart" },
    TagMeta { tag: "arts", label: "Arts", icon: "star" },
    TagMeta { tag: "kids", label: "Kids", icon: "star" },
    TagMeta { tag: "education", label: "Education", icon: "star" },
    TagMeta { tag: "night", label: "Night", icon: "star" },
    TagMeta { tag: "spoken word", label: "Spoken Word", icon: "star" },
];

/// Tags offered as one-click filters on the listing page.
pub const QUICK_TAGS: [&str; 5] = ["family", "outdoors", "music", "arts", "kids"];

/// Resolved label and icon for any tag, known or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDisplay {
    pub tag: String,
    pub label: String,
    pub icon: &'static str,
}

/// Looks up a tag in [`TAG_TABLE`].
pub fn tag_meta(tag: &str) -> Option<&'static TagMeta> {
    TAG_TABLE.iter().find(|meta| meta.tag == tag)
}

/// Resolves display metadata, falling back to the tag itself with the
/// default icon.
pub fn tag_display(tag: &str) -> TagDisplay {
    match tag_meta(tag) {
        Some(meta) => TagDisplay {
            tag: tag.to_string(),
            label: meta.label.to_string(),
            icon: meta.icon,
        },
        None => TagDisplay {
            tag: tag.to_string(),
            label: tag.to_string(),
            icon: DEFAULT_TAG_ICON,
        },
    }
}

/// Lower-cases and trims tags, dropping empty ones. Order is preserved.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Splits a comma-separated tag field such as `"free, family, outdoors"`.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tag_display() {
        let display = tag_display("outdoors");
        assert_eq!(display.label, "Outdoors");
        assert_eq!(display.icon, "leaf");
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        let display = tag_display("trivia");
        assert_eq!(display.label, "trivia");
        assert_eq!(display.icon, DEFAULT_TAG_ICON);
        assert!(tag_meta("trivia").is_none());
    }

    #[test]
    fn test_multi_word_tag() {
        assert_eq!(tag_display("spoken word").label, "Spoken Word");
    }

    #[test]
    fn test_quick_tags_are_known() {
        for tag in QUICK_TAGS {
            assert!(tag_meta(tag).is_some(), "{tag} missing from table");
        }
    }

    #[test]
    fn test_normalize_tags() {
        assert_eq!(normalize_tags(["Family", "FREE"]), vec!["family", "free"]);
        assert_eq!(
            normalize_tags([" Outdoors ", "", "  "]),
            vec!["outdoors"]
        );
    }

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(
            parse_tag_list("free, family,outdoors ,"),
            vec!["free", "family", "outdoors"]
        );
        assert!(parse_tag_list("").is_empty());
    }
}
