//! Structural decomposition of a path into components.
//!
//! The split here is purely structural: empty segments produced by doubled
//! or trailing separators are kept, and `.`/`..` are returned as written.
//! Semantic collapsing is the job of [`Path::normalize`] and the append
//! operator.

use super::Path;

/// The home directory marker.
pub(crate) const HOME: &str = "~";
/// The current directory marker.
pub(crate) const CURRENT: &str = ".";
/// The parent directory marker.
pub(crate) const PARENT: &str = "..";

impl Path {
    /// Split the path into its components.
    ///
    /// A leading separator becomes a first component equal to
    /// [`Path::SEPARATOR`]; a leading `~` stays as its own component. The
    /// empty path has no components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("a/b/c.d").components(), ["a", "b", "c.d"]);
    /// assert_eq!(Path::new("/a/b/c.d").components(), ["/", "a", "b", "c.d"]);
    /// assert_eq!(Path::new("~/a/b/c.d").components(), ["~", "a", "b", "c.d"]);
    /// ```
    #[must_use]
    pub fn components(&self) -> Vec<String> {
        self.component_slices()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Borrowing form of [`Path::components`].
    pub(crate) fn component_slices(&self) -> Vec<&str> {
        split_components(self.as_str())
    }

    /// The final component, or `""` when there is none.
    ///
    /// `..` is returned as written, not resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("a/b/c.d").last_component(), "c.d");
    /// assert_eq!(Path::new("a/..").last_component(), "..");
    /// assert_eq!(Path::new("").last_component(), "");
    /// ```
    #[must_use]
    pub fn last_component(&self) -> &str {
        self.component_slices().last().copied().unwrap_or_default()
    }

    /// The final component with its extension removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("a/b/c.d").last_component_without_extension(), "c");
    /// assert_eq!(Path::new("a/..").last_component_without_extension(), ".");
    /// assert_eq!(Path::new(".profile").last_component_without_extension(), ".profile");
    /// ```
    #[must_use]
    pub fn last_component_without_extension(&self) -> &str {
        let last = self.last_component();
        match extension_dot(last) {
            Some(dot) => &last[..dot],
            None => last,
        }
    }

    /// The text after the last `.` of the final component.
    ///
    /// Returns `None` when the final component has no `.`, when its only
    /// `.` is the leading one, or when nothing follows the last `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("a/b/c.d").extension(), Some("d"));
    /// assert_eq!(Path::new("a/b.c.d").extension(), Some("d"));
    /// assert_eq!(Path::new("a/b").extension(), None);
    /// assert_eq!(Path::new(".gitignore").extension(), None);
    /// ```
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let last = self.last_component();
        let dot = extension_dot(last)?;
        let ext = &last[dot + 1..];
        (!ext.is_empty()).then_some(ext)
    }
}

/// Structural split of a raw path string.
pub(crate) fn split_components(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        return Vec::new();
    }

    match raw.strip_prefix(Path::SEPARATOR) {
        Some("") => vec![Path::SEPARATOR],
        Some(rest) => std::iter::once(Path::SEPARATOR)
            .chain(rest.split(Path::SEPARATOR))
            .collect(),
        None => raw.split(Path::SEPARATOR).collect(),
    }
}

/// Byte index of the dot that starts the extension, ignoring a leading dot.
fn extension_dot(component: &str) -> Option<usize> {
    component.rfind('.').filter(|&dot| dot > 0)
}
