//! Inputs accepted by [`cn`](crate::cn) and [`join`](crate::join).
//!
//! Anything that can stand in for "a class name or nothing" converts into a
//! [`ClassValue`]: strings, `Option`s, booleans, `(class, condition)` pairs
//! and lists of any of these.
//!
//! ```
//! use cn::cn;
//!
//! let active = true;
//! let disabled = false;
//! assert_eq!(
//!     cn!("btn", ("btn-active", active), disabled.then_some("opacity-50"), ["px-2", "px-4"]),
//!     "btn btn-active px-4"
//! );
//! ```

use std::borrow::Cow;

/// A class name, a list of class values, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassValue<'a> {
    #[default]
    None,
    /// One or more whitespace-separated class names
    Class(Cow<'a, str>),
    List(Vec<ClassValue<'a>>),
}

impl<'a> ClassValue<'a> {
    pub fn is_none(&self) -> bool {
        match self {
            ClassValue::None => true,
            ClassValue::Class(class) => class.trim().is_empty(),
            ClassValue::List(values) => values.iter().all(ClassValue::is_none),
        }
    }

    /// Appends every class name, depth first and in order, to `out`.
    pub fn collect_into<'s>(&'s self, out: &mut Vec<&'s str>) {
        match self {
            ClassValue::None => {}
            ClassValue::Class(class) => out.extend(class.split_whitespace()),
            ClassValue::List(values) => {
                for value in values {
                    value.collect_into(out);
                }
            }
        }
    }
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(class: &'a str) -> Self {
        if class.trim().is_empty() {
            ClassValue::None
        } else {
            ClassValue::Class(Cow::Borrowed(class))
        }
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(class: &'a String) -> Self {
        <ClassValue<'a> as From<&'a str>>::from(class.as_str())
    }
}

impl From<String> for ClassValue<'_> {
    fn from(class: String) -> Self {
        if class.trim().is_empty() {
            ClassValue::None
        } else {
            ClassValue::Class(Cow::Owned(class))
        }
    }
}

impl<'a> From<Cow<'a, str>> for ClassValue<'a> {
    fn from(class: Cow<'a, str>) -> Self {
        match class {
            Cow::Borrowed(class) => <ClassValue<'a> as From<&'a str>>::from(class),
            Cow::Owned(class) => <ClassValue<'a> as From<String>>::from(class),
        }
    }
}

/// Booleans never name a class: `false` is the usual "no class" and a bare
/// `true` carries no name either.
impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        ClassValue::None
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Option<T>> for ClassValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// `(class, condition)` keeps `class` only when `condition` holds.
impl<'a, T: Into<ClassValue<'a>>> From<(T, bool)> for ClassValue<'a> {
    fn from((value, condition): (T, bool)) -> Self {
        if condition {
            value.into()
        } else {
            ClassValue::None
        }
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Vec<T>> for ClassValue<'a> {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<ClassValue<'a>>, const N: usize> From<[T; N]> for ClassValue<'a> {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T> From<&'a [T]> for ClassValue<'a>
where
    &'a T: Into<ClassValue<'a>>,
{
    fn from(values: &'a [T]) -> Self {
        ClassValue::List(values.iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(value: ClassValue<'_>) -> Vec<String> {
        let mut out = Vec::new();
        value.collect_into(&mut out);
        out.into_iter().map(String::from).collect()
    }

    #[test]
    fn falsy_values_are_none() {
        assert_eq!(Into::<ClassValue<'_>>::into(""), ClassValue::None);
        assert_eq!(Into::<ClassValue<'_>>::into("   "), ClassValue::None);
        assert_eq!(Into::<ClassValue<'_>>::into(false), ClassValue::None);
        assert_eq!(Into::<ClassValue<'_>>::into(true), ClassValue::None);
        assert_eq!(Into::<ClassValue<'_>>::into(None::<&str>), ClassValue::None);
        assert_eq!(Into::<ClassValue<'_>>::into(("p-2", false)), ClassValue::None);
        assert_eq!(Into::<ClassValue<'_>>::into(String::new()), ClassValue::None);
    }

    #[test]
    fn strings_and_options_become_classes() {
        assert_eq!(
            Into::<ClassValue<'_>>::into("p-2"),
            ClassValue::Class(Cow::Borrowed("p-2"))
        );
        assert_eq!(
            Into::<ClassValue<'_>>::into(Some(String::from("p-2"))),
            ClassValue::Class(Cow::Owned(String::from("p-2")))
        );
        assert_eq!(
            Into::<ClassValue<'_>>::into(("p-2", true)),
            ClassValue::Class(Cow::Borrowed("p-2"))
        );
    }

    #[test]
    fn lists_flatten_in_order() {
        let nested = Into::<ClassValue<'_>>::into(vec![
            Into::<ClassValue<'_>>::into("a b"),
            Into::<ClassValue<'_>>::into(["c", ""]),
            Into::<ClassValue<'_>>::into(vec![Some("d"), None]),
            Into::<ClassValue<'_>>::into(("e", true)),
        ]);
        assert_eq!(classes(nested), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn slices_borrow_their_elements() {
        let owned = vec![String::from("x-1"), String::new(), String::from("x-2")];
        assert_eq!(classes(Into::<ClassValue<'_>>::into(owned.as_slice())), ["x-1", "x-2"]);
    }

    #[test]
    fn is_none_looks_through_lists() {
        assert!(Into::<ClassValue<'_>>::into(vec![None::<&str>, Some("")]).is_none());
        assert!(!Into::<ClassValue<'_>>::into(vec![None, Some("a")]).is_none());
    }
}
