//! Delimiter-based string splitting

use crate::common::{cap, Style};
use crate::error::{Error, Result};
use std::str::MatchIndices;

/// Split configuration options
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Where the delimiter ends up in the segments (default: Ignore)
    pub style: Style,
    /// Strip leading/trailing whitespace from every segment (default: false)
    pub trim: bool,
    /// Maximum number of cuts; 0 returns the source whole, negative is unlimited (default: -1)
    pub limit: isize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            style: Style::Ignore,
            trim: false,
            limit: -1,
        }
    }
}

/// Split `source` at every occurrence of `delimiter`.
///
/// An empty delimiter cuts at every character boundary, including both ends
/// of the source. Fails with [`Error::InvalidArgument`] for [`Style::Insert`].
///
/// ```rust
/// use textseg_rs::{split, SplitOptions, Style};
///
/// let opts = SplitOptions { style: Style::Prepend, ..SplitOptions::default() };
/// assert_eq!(split("/abc//d", "/", &opts).unwrap(), vec!["", "/abc", "/", "/d"]);
/// ```
pub fn split<'a>(
    source: &'a str,
    delimiter: &'a str,
    options: &SplitOptions,
) -> Result<Vec<&'a str>> {
    Ok(split_iter(source, delimiter, options)?.collect())
}

/// Lazy version of [`split`]
pub fn split_iter<'a>(
    source: &'a str,
    delimiter: &'a str,
    options: &SplitOptions,
) -> Result<Segments<'a>> {
    if !options.style.supports_split() {
        return Err(Error::InvalidArgument(format!(
            "unsupported style for splitting: {}",
            options.style.name()
        )));
    }

    // An empty source never gets cut, not even by the empty delimiter.
    let remaining = if source.is_empty() {
        Some(0)
    } else {
        cap(options.limit)
    };

    Ok(Segments {
        source,
        style: options.style,
        // A zero limit hands back the source untouched
        trim: options.trim && options.limit != 0,
        remaining,
        cuts: source.match_indices(delimiter),
        start: 0,
        done: false,
    })
}

/// Iterator over the segments of a split, see [`split_iter`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    source: &'a str,
    style: Style,
    trim: bool,
    /// Cuts still allowed, None when unlimited
    remaining: Option<usize>,
    cuts: MatchIndices<'a, &'a str>,
    /// Byte offset where the next segment begins
    start: usize,
    done: bool,
}

impl<'a> Segments<'a> {
    fn next_cut(&mut self) -> Option<(usize, usize)> {
        if self.remaining == Some(0) {
            return None;
        }
        let (pos, matched) = self.cuts.next()?;
        if let Some(n) = self.remaining.as_mut() {
            *n -= 1;
        }
        Some((pos, pos + matched.len()))
    }

    fn finish(&self, segment: &'a str) -> &'a str {
        if self.trim {
            segment.trim()
        } else {
            segment
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        match self.next_cut() {
            Some((cut_start, cut_end)) => {
                let (segment, next_start) = match self.style {
                    Style::Prepend => (&self.source[self.start..cut_start], cut_start),
                    Style::Append => (&self.source[self.start..cut_end], cut_end),
                    _ => (&self.source[self.start..cut_start], cut_end),
                };
                self.start = next_start;
                Some(self.finish(segment))
            }
            None => {
                // Whatever is left, verbatim, is the final segment
                self.done = true;
                Some(self.finish(&self.source[self.start..]))
            }
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
