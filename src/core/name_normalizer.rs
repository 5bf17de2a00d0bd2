//! Display-name normalization for console alignment
//!
//! Logger names vary wildly in length. To keep console columns aligned every
//! logger's display name is rewritten to a shared target width: short names
//! are padded with spaces, long names are abbreviated segment by segment.
//! The target width only ever grows; when it does, the registry realigns
//! every logger it knows about.
//!
//! Widths are measured in `char`s.

/// Initial shared width
pub const DEFAULT_TARGET_WIDTH: usize = 7;

/// Names are never grown past this width; longer names get abbreviated
pub const DEFAULT_MAX_WIDTH: usize = 20;

/// Tried in order; the first one that splits a name is used
const SEPARATORS: [char; 3] = ['/', '.', '-'];

/// Characters kept from each segment when abbreviating
const SEGMENT_PREFIX: usize = 3;

/// Shared normalization state: the current target width and its ceiling.
///
/// # Example
///
/// ```
/// use rust_logger_registry::NameNormalizer;
///
/// let mut normalizer = NameNormalizer::with_widths(11, 20);
/// assert_eq!(normalizer.normalize("github.com/ivpusic/golog"), "git/ivp/gol");
/// assert_eq!(normalizer.normalize("app"), "app        ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameNormalizer {
    target_width: usize,
    max_width: usize,
}

impl NameNormalizer {
    pub fn new() -> Self {
        Self::with_widths(DEFAULT_TARGET_WIDTH, DEFAULT_MAX_WIDTH)
    }

    /// A target width above the ceiling is clamped to the ceiling.
    pub fn with_widths(target_width: usize, max_width: usize) -> Self {
        Self {
            target_width: target_width.min(max_width),
            max_width,
        }
    }

    #[inline]
    pub fn target_width(&self) -> usize {
        self.target_width
    }

    #[inline]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Rewrite `name` to the current target width.
    ///
    /// May grow the target width when an abbreviated name ends up at least as
    /// wide as the current target.
    pub fn normalize(&mut self, name: &str) -> String {
        let length = name.chars().count();

        if length == self.target_width || length == self.max_width {
            return name.to_string();
        }

        if length < self.target_width {
            return self.pad(name.to_string());
        }

        let normalized = match split_on_separator(name) {
            Some((separator, segments)) => {
                truncate(&abbreviate(separator, &segments), self.max_width)
            }
            None => truncate(name, self.max_width),
        };

        let length = normalized.chars().count();
        if length >= self.target_width {
            self.target_width = length;
            normalized
        } else {
            self.pad(normalized)
        }
    }

    fn pad(&self, mut name: String) -> String {
        let missing = self.target_width.saturating_sub(name.chars().count());
        name.extend(std::iter::repeat(' ').take(missing));
        name
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// First separator splitting `name` into at least two non-empty segments.
fn split_on_separator(name: &str) -> Option<(char, Vec<&str>)> {
    SEPARATORS.iter().find_map(|&separator| {
        let segments: Vec<&str> = name.split(separator).collect();
        let non_empty = segments.iter().filter(|s| !s.is_empty()).count();
        (non_empty >= 2).then_some((separator, segments))
    })
}

/// Join segment prefixes with `separator`.
///
/// Once an empty segment is seen no further separators are written.
fn abbreviate(separator: char, segments: &[&str]) -> String {
    let mut abbreviated = String::new();
    let mut append_separator = true;
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            append_separator = false;
        } else {
            abbreviated.extend(segment.chars().take(SEGMENT_PREFIX));
        }

        if append_separator && i != last {
            abbreviated.push(separator);
        }
    }

    abbreviated
}

fn truncate(name: &str, max_width: usize) -> String {
    name.chars().take(max_width).collect()
}
