//! Joining values with a delimiter

use crate::common::Style;
use std::fmt::{Display, Write};

/// Concatenate the `Display` form of every item, placing `delimiter` according to `style`.
///
/// Unlike [`split`](crate::split), every style is valid here:
///
/// ```rust
/// use textseg_rs::{concat, Style};
///
/// assert_eq!(concat(["a", "b", "c"], "/", Style::Insert), "a/b/c");
/// assert_eq!(concat(["a", "b", "c"], "/", Style::Prepend), "/a/b/c");
/// assert_eq!(concat(["a", "b", "c"], "/", Style::Append), "a/b/c/");
/// ```
pub fn concat<I>(items: I, delimiter: &str, style: Style) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut output = String::new();

    for (i, item) in items.into_iter().enumerate() {
        match style {
            Style::Prepend => output.push_str(delimiter),
            Style::Insert if i > 0 => output.push_str(delimiter),
            _ => {}
        }
        write!(output, "{}", item).ok();
        if style == Style::Append {
            output.push_str(delimiter);
        }
    }

    output
}
