//! Build class lists from conditional inputs and resolve conflicting utility
//! classes, keeping the last class of every conflict group.
//!
//! ```
//! use cn::cn;
//!
//! assert_eq!(cn!("c-1", "c-2"), "c-1 c-2");
//! assert_eq!(cn!("c-1", false, "c-3"), "c-1 c-3");
//! assert_eq!(cn!("p-4", "p-2"), "p-2");
//! assert_eq!(cn!("bg-red-500", "bg-blue-500"), "bg-blue-500");
//! ```

pub mod class_value;
pub mod cli;
pub mod config;
pub mod log;

pub use class_value::ClassValue;
pub use tailwind_merge::{
    ClassGroup, Classifier, Dropped, GroupId, Layered, MergeReport, Merger, TableClassifier,
    TailwindClassifier, tw_merge,
};

/// Concatenate class inputs in order, skipping falsy ones. No conflict
/// resolution happens here.
pub fn join<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    let values: Vec<ClassValue<'a>> = inputs.into_iter().map(Into::into).collect();
    let mut classes = Vec::new();
    for value in &values {
        value.collect_into(&mut classes);
    }
    classes.join(" ")
}

/// [`join`] the inputs, then drop every class overridden by a later
/// conflicting one using the Tailwind classifier.
pub fn cn<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    cn_with(&Merger::<TailwindClassifier>::default(), inputs)
}

/// Like [`cn`], with a custom merger.
pub fn cn_with<'a, C, I>(merger: &Merger<C>, inputs: I) -> String
where
    C: Classifier,
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    merger.merge(&join(inputs))
}

/// Variadic form of [`cn`]. Each argument may be anything that converts
/// into a [`ClassValue`].
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::cn([$(::core::convert::Into::<$crate::ClassValue<'_>>::into($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_class_names() {
        assert_eq!(cn!("c-1", "c-2"), "c-1 c-2");
    }

    #[test]
    fn skips_conditional_classes() {
        assert_eq!(cn!("c-1", false, "c-3"), "c-1 c-3");
        assert_eq!(cn!("c-1", false.then_some("c-2"), "c-3"), "c-1 c-3");
        assert_eq!(cn!("c-1", ("c-2", false), "c-3"), "c-1 c-3");
    }

    #[test]
    fn resolves_tailwind_conflicts() {
        assert_eq!(cn!("p-4", "p-2"), "p-2");
        assert_eq!(cn!("bg-red-500", "bg-blue-500"), "bg-blue-500");
    }

    #[test]
    fn empty_and_all_falsy_inputs() {
        assert_eq!(cn!(), "");
        assert_eq!(cn!(false, None::<&str>, ""), "");
        assert_eq!(cn(Vec::<&str>::new()), "");
        assert_eq!(join(["", " "]), "");
    }

    #[test]
    fn interleaved_conflicts_keep_the_last_member_in_place() {
        assert_eq!(cn!("p-1", "m-1", "p-2", "x", "p-3"), "m-1 x p-3");
        assert_eq!(cn!("p-1 text-sm", ["m-2", "p-2"], "text-lg"), "m-2 p-2 text-lg");
    }

    #[test]
    fn merging_twice_changes_nothing() {
        let once = cn!("px-2 card", "p-4", Some("hover:p-1"), "card bg-red-500/50 bg-blue-500");
        assert_eq!(once, "card p-4 hover:p-1 card bg-blue-500");
        assert_eq!(cn!(once.as_str()), once);
        assert_eq!(cn!(once.clone()), once);
    }

    #[test]
    fn join_keeps_conflicts() {
        assert_eq!(join(["p-4", "p-2"]), "p-4 p-2");
        assert_eq!(join(vec![Some(" a  b "), None, Some("c")]), "a b c");
    }

    #[test]
    fn custom_mergers() {
        let merger = Merger::new(
            TableClassifier::new().with_classes("tone", ["tone-warm", "tone-cool"]),
        );
        assert_eq!(cn_with(&merger, ["tone-warm", "p-4", "tone-cool", "p-2"]), "p-4 tone-cool p-2");
    }
}
