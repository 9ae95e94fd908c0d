//! Merge utility-class lists so that later classes override earlier
//! conflicting ones.
//!
//! ```
//! use tailwind_merge::tw_merge;
//!
//! assert_eq!(tw_merge("px-2 py-1 bg-red-500 p-3 bg-blue-500"), "p-3 bg-blue-500");
//! ```
//!
//! Conflicts are only considered between classes with the same variants
//! (`hover:`, `md:`, ...) and the same important marker. Which classes
//! conflict is decided by a [`Classifier`]: [`TailwindClassifier`] knows the
//! Tailwind CSS utilities, [`TableClassifier`] is a user-supplied lookup
//! table, and [`Layered`] combines two of them.

use std::collections::HashMap;

mod class_groups;
mod classifier;
mod table;
mod validators;


pub use class_groups::ClassGroup;
pub use classifier::{Classifier, GroupId, Layered, TailwindClassifier};
pub use table::TableClassifier;

/// A parsed class name
#[derive(Debug)]
struct ParsedClass<'a> {
    /// Sorted and joined modifiers for conflict detection
    modifiers: String,
    /// Whether the class has an important modifier (!)
    has_important: bool,
    /// Whether the group was found with a postfix modifier (`/7`) stripped
    has_postfix: bool,
    /// The class group this class belongs to
    group: GroupId<'a>,
}

/// Parse a single class name into its components.
/// Returns None if the classifier does not place the class in any group.
fn parse_class<'a, C>(class: &'a str, classifier: &'a C) -> Option<ParsedClass<'a>>
where
    C: Classifier + ?Sized,
{
    let mut modifiers: Vec<&str> = Vec::new();
    let mut bracket_depth: u32 = 0;
    let mut paren_depth: u32 = 0;
    let mut modifier_start = 0;
    let mut postfix_modifier_pos: Option<usize> = None;

    for (i, c) in class.bytes().enumerate() {
        if bracket_depth == 0 && paren_depth == 0 {
            if c == b':' {
                modifiers.push(&class[modifier_start..i]);
                modifier_start = i + 1;
                continue;
            }

            if c == b'/' {
                postfix_modifier_pos = Some(i);
                continue;
            }
        }

        match c {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.saturating_sub(1),
            b'(' => paren_depth += 1,
            b')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
    }

    // Base class is everything after the last modifier separator
    let base_with_important = &class[modifier_start..];

    // Important modifier (! at start or end)
    let (base_class, important_offset, has_important) =
        if let Some(stripped) = base_with_important.strip_suffix('!') {
            (stripped, 0, true)
        } else if let Some(stripped) = base_with_important.strip_prefix('!') {
            (stripped, 1, true)
        } else {
            (base_with_important, 0, false)
        };

    // Postfix modifier position relative to base_class
    let postfix_modifier_pos = postfix_modifier_pos
        .filter(|pos| *pos > modifier_start + important_offset)
        .map(|pos| pos - modifier_start - important_offset)
        .filter(|pos| *pos < base_class.len());

    let (group, has_postfix) = classify_base(base_class, postfix_modifier_pos, classifier)?;

    // Sort and join modifiers for conflict detection
    let modifiers = if modifiers.is_empty() {
        String::new()
    } else {
        sort_modifiers(&modifiers).join(":")
    };

    Some(ParsedClass {
        modifiers,
        has_important,
        has_postfix,
        group,
    })
}

/// Look up the group of a base class. With a postfix modifier the class is
/// first looked up without it (`w-1/2` as `w-1`), then as a whole.
fn classify_base<'a, C>(
    base_class: &'a str,
    postfix_modifier_pos: Option<usize>,
    classifier: &'a C,
) -> Option<(GroupId<'a>, bool)>
where
    C: Classifier + ?Sized,
{
    if let Some(property) = arbitrary_property(base_class) {
        return Some((GroupId::ArbitraryProperty(property), false));
    }

    if let Some(pos) = postfix_modifier_pos {
        if let Some(group) = classifier.classify(&base_class[..pos]) {
            return Some((group, true));
        }
    }

    classifier.classify(base_class).map(|group| (group, false))
}

/// `[paint-order:normal]` belongs to the `paint-order` group whatever the classifier.
fn arbitrary_property(class: &str) -> Option<&str> {
    let inner = class.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(property)
}

/// Sort modifiers to normalize for conflict detection
/// Order-sensitive modifiers (*, before, after, etc.) are NOT sorted - they create breaks
fn sort_modifiers<'a>(modifiers: &[&'a str]) -> Vec<&'a str> {
    // These modifiers affect elements where the order matters (pseudo-elements, etc.)
    static ORDER_SENSITIVE: &[&str] = &[
        "*",
        "**",
        "after",
        "backdrop",
        "before",
        "details-content",
        "file",
        "first-letter",
        "first-line",
        "marker",
        "placeholder",
        "selection",
    ];

    let mut result: Vec<&'a str> = Vec::new();
    let mut current_segment: Vec<&'a str> = Vec::new();

    for &modifier in modifiers {
        let is_arbitrary = modifier.starts_with('[');
        let is_order_sensitive = ORDER_SENSITIVE.contains(&modifier);

        if is_arbitrary || is_order_sensitive {
            current_segment.sort_unstable();
            result.append(&mut current_segment);
            result.push(modifier);
        } else {
            current_segment.push(modifier);
        }
    }

    current_segment.sort_unstable();
    result.append(&mut current_segment);

    result
}

/// A class removed by a merge together with the later class that overrode it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dropped<'a> {
    pub class: &'a str,
    pub overridden_by: &'a str,
}

/// Result of [`Merger::explain`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport<'a> {
    pub merged: String,
    /// Dropped classes in input order
    pub dropped: Vec<Dropped<'a>>,
}

/// Tracks which groups later classes have already claimed.
#[derive(Default)]
struct ConflictTracker<'a> {
    /// Maps (has_important, modifiers) to the groups claimed so far and the
    /// class that claimed each of them
    claimed: HashMap<(bool, String), HashMap<GroupId<'a>, &'a str>>,
}

impl<'a> ConflictTracker<'a> {
    /// Processes a class (in reverse input order). Returns the class that
    /// overrides it, or `None` when it should be kept.
    fn claim<C>(&mut self, class: &'a str, classifier: &'a C) -> Option<&'a str>
    where
        C: Classifier + ?Sized,
    {
        // Classes outside every group are always kept
        let parsed = parse_class(class, classifier)?;

        let key = (parsed.has_important, parsed.modifiers);
        let groups = self.claimed.entry(key).or_default();

        if let Some(winner) = groups.get(&parsed.group) {
            return Some(*winner);
        }

        groups.insert(parsed.group, class);
        for conflict in classifier.conflicts(&parsed.group) {
            groups.entry(conflict).or_insert(class);
        }
        if parsed.has_postfix {
            for conflict in classifier.postfix_conflicts(&parsed.group) {
                groups.entry(conflict).or_insert(class);
            }
        }

        None
    }
}

/// Merges class lists using a [`Classifier`].
#[derive(Clone, Debug, Default)]
pub struct Merger<C = TailwindClassifier> {
    classifier: C,
}

impl<C: Classifier> Merger<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Merge a whitespace-separated class list, removing conflicting classes.
    pub fn merge(&self, input: &str) -> String {
        self.explain(input).merged
    }

    /// Like [`Merger::merge`], also reporting every class that was dropped.
    pub fn explain<'a>(&'a self, input: &'a str) -> MergeReport<'a> {
        let mut tracker = ConflictTracker::default();
        let mut kept: Vec<&str> = Vec::new();
        let mut dropped: Vec<Dropped<'a>> = Vec::new();

        for class in input.split_whitespace().rev() {
            match tracker.claim(class, &self.classifier) {
                None => kept.push(class),
                Some(overridden_by) => dropped.push(Dropped {
                    class,
                    overridden_by,
                }),
            }
        }

        kept.reverse();
        dropped.reverse();
        MergeReport {
            merged: kept.join(" "),
            dropped,
        }
    }
}

/// Merge Tailwind CSS classes, removing conflicting classes
pub fn tw_merge(input: &str) -> String {
    Merger::<TailwindClassifier>::default().merge(input)
}
