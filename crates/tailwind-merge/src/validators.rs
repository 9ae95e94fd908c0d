//! Value validators used by the built-in classifier.
//!
//! A Tailwind class is only recognized when its value passes the validator
//! of the group it claims to belong to, so `inline-1` or `p-foo` are treated
//! as plain, non-Tailwind classes.

const LENGTH_UNITS: &[&str] = &[
    "%", "px", "em", "rem", "vh", "vw", "vi", "vb", "vmin", "vmax", "svh", "svw", "lvh", "lvw",
    "dvh", "dvw", "pt", "pc", "in", "cm", "mm", "q", "cap", "ch", "ex", "lh", "rlh", "cqw", "cqh",
    "cqi", "cqb", "cqmin", "cqmax",
];

const LENGTH_FUNCTIONS: &[&str] = &["calc(", "min(", "max(", "clamp("];

const IMAGE_FUNCTIONS: &[&str] = &[
    "url(",
    "image(",
    "image-set(",
    "cross-fade(",
    "element(",
    "linear-gradient(",
    "radial-gradient(",
    "conic-gradient(",
    "repeating-linear-gradient(",
    "repeating-radial-gradient(",
    "repeating-conic-gradient(",
];

pub(crate) fn is_number(value: &str) -> bool {
    let mut has_digit = false;
    let mut dots = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => has_digit = true,
            '.' => dots += 1,
            _ => return false,
        }
    }
    has_digit && dots <= 1
}

pub(crate) fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(numerator, denominator)| is_integer(numerator) && is_integer(denominator))
}

pub(crate) fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

/// `xs`, `sm`, `md`, `lg`, `xl`, optionally preceded by a number (`2xl`, `3.5xl`).
pub(crate) fn is_tshirt_size(value: &str) -> bool {
    ["xs", "sm", "md", "lg", "xl"].iter().any(|size| {
        value
            .strip_suffix(size)
            .is_some_and(|multiplier| multiplier.is_empty() || is_number(multiplier))
    })
}

/// Content of a `[...]` value.
pub(crate) fn arbitrary_value(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

/// Content of a `(...)` CSS variable shorthand.
pub(crate) fn arbitrary_variable(value: &str) -> Option<&str> {
    value.strip_prefix('(')?.strip_suffix(')')
}

pub(crate) fn is_arbitrary(value: &str) -> bool {
    arbitrary_value(value).is_some() || arbitrary_variable(value).is_some()
}

/// Splits a type hint off arbitrary content: `length:var(--x)` becomes
/// `(Some("length"), "var(--x)")`.
pub(crate) fn split_label(content: &str) -> (Option<&str>, &str) {
    match content.split_once(':') {
        Some((label, rest))
            if !label.is_empty()
                && label.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') =>
        {
            (Some(label), rest)
        }
        _ => (None, content),
    }
}

fn arbitrary_matches(value: &str, labels: &[&str], unlabeled: impl Fn(&str) -> bool) -> bool {
    if let Some(content) = arbitrary_value(value) {
        return match split_label(content) {
            (Some(label), _) => labels.contains(&label),
            (None, content) => unlabeled(content),
        };
    }
    if let Some(content) = arbitrary_variable(value) {
        return matches!(split_label(content), (Some(label), _) if labels.contains(&label));
    }
    false
}

pub(crate) fn looks_like_length(content: &str) -> bool {
    if content == "0" || LENGTH_FUNCTIONS.iter().any(|f| content.starts_with(f)) {
        return true;
    }
    let unsigned = content.trim_start_matches(['-', '+']);
    let unit_start = unsigned
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(unsigned.len());
    let (number, unit) = unsigned.split_at(unit_start);
    is_number(number) && LENGTH_UNITS.contains(&unit)
}

/// `[10px]`, `[length:var(--x)]`, `(length:--x)`.
pub(crate) fn is_arbitrary_length(value: &str) -> bool {
    arbitrary_matches(value, &["length"], looks_like_length)
}

/// `[3]`, `[number:var(--x)]`, `(number:--x)`.
pub(crate) fn is_arbitrary_number(value: &str) -> bool {
    arbitrary_matches(value, &["number"], is_number)
}

pub(crate) fn is_arbitrary_weight(value: &str) -> bool {
    arbitrary_matches(value, &["number", "weight"], is_number)
}

pub(crate) fn is_arbitrary_image(value: &str) -> bool {
    arbitrary_matches(value, &["image", "url"], |content| {
        IMAGE_FUNCTIONS.iter().any(|f| content.starts_with(f))
    })
}

pub(crate) fn is_arbitrary_position(value: &str) -> bool {
    arbitrary_matches(value, &["position", "percentage"], |_| false)
}

pub(crate) fn is_arbitrary_size(value: &str) -> bool {
    arbitrary_matches(value, &["length", "size", "bg-size"], |_| false)
}

pub(crate) fn is_arbitrary_family_name(value: &str) -> bool {
    arbitrary_matches(value, &["family-name"], |_| false)
}

/// `[0_35px_60px_-15px_rgba(0,0,0,0.3)]`, `[shadow:var(--x)]`.
pub(crate) fn is_arbitrary_shadow(value: &str) -> bool {
    arbitrary_matches(value, &["shadow"], looks_like_shadow)
}

fn looks_like_shadow(content: &str) -> bool {
    let content = content.strip_prefix("inset_").unwrap_or(content);
    let mut parts = content.split('_');
    let is_offset = |part: Option<&str>| {
        part.is_some_and(|part| {
            let part = part.strip_prefix('-').unwrap_or(part);
            if part == "0" {
                return true;
            }
            let unit_start = part
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(part.len());
            let (number, unit) = part.split_at(unit_start);
            is_number(number) && !unit.is_empty() && unit.bytes().all(|b| b.is_ascii_lowercase())
        })
    };
    is_offset(parts.next()) && is_offset(parts.next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_integers() {
        assert!(is_number("4"));
        assert!(is_number("2.5"));
        assert!(!is_number("2.5.1"));
        assert!(!is_number("."));
        assert!(!is_number("inf"));
        assert!(is_integer("12"));
        assert!(!is_integer("1.5"));
        assert!(is_fraction("1/2"));
        assert!(!is_fraction("1/"));
        assert!(is_percent("10%"));
        assert!(!is_percent("%"));
    }

    #[test]
    fn tshirt_sizes() {
        for size in ["xs", "sm", "md", "lg", "xl", "2xl", "3.5xl", "2xs"] {
            assert!(is_tshirt_size(size), "{size} should be a size");
        }
        for size in ["base", "xxl", "x2l", ""] {
            assert!(!is_tshirt_size(size), "{size} should not be a size");
        }
    }

    #[test]
    fn arbitrary_lengths() {
        assert!(is_arbitrary_length("[10px]"));
        assert!(is_arbitrary_length("[0.5rem]"));
        assert!(is_arbitrary_length("[-2px]"));
        assert!(is_arbitrary_length("[0]"));
        assert!(is_arbitrary_length("[calc(100%-1rem)]"));
        assert!(is_arbitrary_length("[length:var(--c)]"));
        assert!(is_arbitrary_length("(length:--c)"));
        assert!(!is_arbitrary_length("(--c)"));
        assert!(!is_arbitrary_length("[color:0]"));
        assert!(!is_arbitrary_length("[#fff]"));
        assert!(!is_arbitrary_length("10px"));
    }

    #[test]
    fn labels_only_accept_lowercase_words() {
        assert_eq!(split_label("color:red"), (Some("color"), "red"));
        assert_eq!(split_label("url(http://x)"), (None, "url(http://x)"));
        assert_eq!(split_label("var(--x)"), (None, "var(--x)"));
    }

    #[test]
    fn arbitrary_shadows_and_images() {
        assert!(is_arbitrary_shadow("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(is_arbitrary_shadow("[inset_0_1px_0,inset_0_-1px_0]"));
        assert!(is_arbitrary_shadow("[shadow:foo]"));
        assert!(!is_arbitrary_shadow("[#123456]"));
        assert!(is_arbitrary_image("[url(/img.png)]"));
        assert!(is_arbitrary_image("[linear-gradient(red,blue)]"));
        assert!(!is_arbitrary_image("[red]"));
    }
}
