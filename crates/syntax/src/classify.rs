//! Line classification.
//!
//! Each classifier looks at a trimmed line independently. They run in a fixed
//! order and all of them are applied, so one line can produce several matches:
//! `@include button` is both a mixin entry and a function node, and a property
//! line also starts a selector node because it begins with a word character.

use regex::Regex;
use std::sync::LazyLock;

static SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+|[&#*.\[>+])").expect("valid selector pattern"));

static MIXIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:@include|\+[a-z-])").expect("valid mixin pattern"));

static PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z-]+):\s+(.*)$").expect("valid property pattern"));

/// What a classifier recognized in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineMatch<'a> {
    /// Leading selector token or symbol
    Selector { fragment: &'a str },
    Mixin,
    /// At-rule text after `@`
    Function { name: &'a str },
    /// Placeholder name after `%`
    Placeholder { name: &'a str },
    Property { name: &'a str, value: &'a str },
}

type Classifier = for<'a> fn(&'a str) -> Option<LineMatch<'a>>;

/// Classifiers in priority order
const CLASSIFIERS: [Classifier; 5] = [selector, mixin, function, placeholder, property];

fn selector(text: &str) -> Option<LineMatch<'_>> {
    let captures = SELECTOR.captures(text)?;
    Some(LineMatch::Selector {
        fragment: captures.get(1)?.as_str(),
    })
}

fn mixin(text: &str) -> Option<LineMatch<'_>> {
    MIXIN.is_match(text).then_some(LineMatch::Mixin)
}

fn function(text: &str) -> Option<LineMatch<'_>> {
    text.strip_prefix('@')
        .map(|name| LineMatch::Function { name })
}

fn placeholder(text: &str) -> Option<LineMatch<'_>> {
    text.strip_prefix('%')
        .map(|name| LineMatch::Placeholder { name })
}

fn property(text: &str) -> Option<LineMatch<'_>> {
    let captures = PROPERTY.captures(text)?;
    Some(LineMatch::Property {
        name: captures.get(1)?.as_str(),
        value: captures.get(2)?.as_str(),
    })
}

/// Run every classifier over a trimmed line, in priority order
pub(crate) fn classify(text: &str) -> impl Iterator<Item = LineMatch<'_>> {
    CLASSIFIERS
        .into_iter()
        .filter_map(move |classifier| classifier(text))
}
