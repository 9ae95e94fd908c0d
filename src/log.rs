//! logfmt logging for the `cn` command line.
//!
//! Lines go to stderr so merged class lists on stdout stay clean. Available
//! macros: [`log_info!`], [`log_debug!`] and [`log_error!`].
//!
//! ```ignore
//! log_debug!("merge", dropped = "p-4", overridden_by = "p-2");
//! // Output: time=12:34:56.789 level=debug tag=merge dropped=p-4 overridden_by=p-2
//! ```

use colored::Colorize;
use std::time::SystemTime;

pub fn format_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs() % 86400;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    let millis = now.subsec_millis();
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Quotes values that would otherwise break logfmt parsing.
pub fn format_value(value: &str) -> String {
    if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"' || c == '=') {
        format!("{:?}", value)
    } else {
        value.to_string()
    }
}

pub fn format_logfmt(level: &str, tag: &str, fields: &[(&str, String)]) -> String {
    let mut parts = vec![
        format!("{}={}", "time".dimmed(), format_timestamp()),
        format!("{}={}", "level".dimmed(), level),
        format!("{}={}", "tag".dimmed(), tag),
    ];
    for (key, value) in fields {
        parts.push(format!("{}={}", key.dimmed(), format_value(value)));
    }
    parts.join(" ")
}

#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use ::colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"info".cyan().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use ::colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"debug".dimmed().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use ::colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"error".red().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}
