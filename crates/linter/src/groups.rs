//! The property ordering convention.
//!
//! Groups are listed in the order their members must appear inside a rule
//! body. The last group matches everything, so every entry has a group.

use regex::Regex;
use sass_order_syntax::{Entry, EntryKind};
use std::sync::LazyLock;

/// One named category of the ordering convention
#[derive(Debug)]
pub struct RuleGroup {
    pub name: &'static str,
    /// Entry kinds that belong to this group regardless of name
    kinds: &'static [EntryKind],
    /// Exact, case-sensitive property names
    properties: &'static [&'static str],
    /// Additional property-name pattern
    pattern: Option<Regex>,
    catch_all: bool,
}

impl RuleGroup {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            kinds: &[],
            properties: &[],
            pattern: None,
            catch_all: false,
        }
    }

    fn kinds(mut self, kinds: &'static [EntryKind]) -> Self {
        self.kinds = kinds;
        self
    }

    fn properties(mut self, properties: &'static [&'static str]) -> Self {
        self.properties = properties;
        self
    }

    fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(Regex::new(pattern).expect("valid group pattern"));
        self
    }

    fn catch_all(mut self) -> Self {
        self.catch_all = true;
        self
    }

    /// Whether an entry belongs to this group
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.catch_all || self.kinds.contains(&entry.kind()) {
            return true;
        }

        entry.property_name().is_some_and(|name| {
            self.properties.iter().any(|property| *property == name)
                || self
                    .pattern
                    .as_ref()
                    .is_some_and(|pattern| pattern.is_match(name))
        })
    }
}

/// Ordered list of [`RuleGroup`]s
#[derive(Debug)]
pub struct RuleTable {
    groups: Vec<RuleGroup>,
}

impl RuleTable {
    /// Index of the first group matching the entry.
    ///
    /// The table always ends in a catch-all group, so this is total.
    #[must_use]
    pub fn index_of(&self, entry: &Entry) -> usize {
        self.groups
            .iter()
            .position(|group| group.matches(entry))
            .unwrap_or(self.groups.len() - 1)
    }

    #[must_use]
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }
}

static RULE_TABLE: LazyLock<RuleTable> = LazyLock::new(|| RuleTable {
    groups: vec![
        RuleGroup::new("Inheritance").kinds(&[EntryKind::Mixin]),
        RuleGroup::new("Position and Layout")
            .properties(&[
                "position", "z-index", "top", "bottom", "left", "right", "float", "clear",
            ])
            .pattern("(?i)flex"),
        RuleGroup::new("Display and Visibility").properties(&["display", "opacity", "transform"]),
        RuleGroup::new("Clipping").properties(&["overflow", "clip"]),
        RuleGroup::new("Animation").properties(&["animation", "transition"]),
        RuleGroup::new("Box Model")
            .properties(&[
                "box-shadow",
                "border",
                "border-radius",
                "box-sizing",
                "width",
                "height",
            ])
            .pattern("(?i)margin|padding"),
        RuleGroup::new("Background").properties(&["background", "cursor"]),
        RuleGroup::new("Typography").properties(&[
            "font-size",
            "line-height",
            "font-family",
            "font-weight",
            "font-style",
            "text-align",
            "text-transform",
            "word-spacing",
            "color",
        ]),
        RuleGroup::new("Others").catch_all(),
    ],
});

/// The process-wide ordering convention
#[must_use]
pub fn rule_table() -> &'static RuleTable {
    &RULE_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use sass_order_types::Position;

    fn property(name: &str) -> Entry {
        Entry::Property {
            name: name.to_string(),
            value: "0".to_string(),
            position: Position::new(1, 2),
        }
    }

    fn group(entry: &Entry) -> &'static str {
        let table = rule_table();
        table.groups()[table.index_of(entry)].name
    }

    #[test]
    fn test_group_order() {
        let names: Vec<_> = rule_table().groups().iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                "Inheritance",
                "Position and Layout",
                "Display and Visibility",
                "Clipping",
                "Animation",
                "Box Model",
                "Background",
                "Typography",
                "Others",
            ]
        );
    }

    #[test]
    fn test_inheritance_entries() {
        let position = Position::new(1, 2);
        assert_eq!(group(&Entry::Mixin { position }), "Inheritance");
        assert_eq!(rule_table().index_of(&Entry::Mixin { position }), 0);
    }

    #[test]
    fn test_exact_names() {
        assert_eq!(group(&property("z-index")), "Position and Layout");
        assert_eq!(group(&property("opacity")), "Display and Visibility");
        assert_eq!(group(&property("overflow")), "Clipping");
        assert_eq!(group(&property("transition")), "Animation");
        assert_eq!(group(&property("border-radius")), "Box Model");
        assert_eq!(group(&property("cursor")), "Background");
        assert_eq!(group(&property("color")), "Typography");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(group(&property("Color")), "Others");
        assert_eq!(group(&property("TOP")), "Others");
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        assert_eq!(group(&property("flex-direction")), "Position and Layout");
        assert_eq!(group(&property("-webkit-Flex")), "Position and Layout");
        assert_eq!(group(&property("margin-top")), "Box Model");
        assert_eq!(group(&property("PADDING")), "Box Model");
    }

    #[test]
    fn test_unlisted_properties_fall_through() {
        assert_eq!(group(&property("list-style")), "Others");
        assert_eq!(group(&property("border-top")), "Others");
        assert_eq!(rule_table().index_of(&property("content")), 8);
    }

    #[test]
    fn test_every_entry_has_a_group() {
        let entries = [
            property(""),
            property("-"),
            property("x"),
            Entry::Mixin {
                position: Position::default(),
            },
        ];
        for entry in &entries {
            assert!(rule_table().index_of(entry) < rule_table().groups().len());
        }
    }
}
