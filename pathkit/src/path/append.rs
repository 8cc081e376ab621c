//! Path concatenation.
//!
//! Appending works on component sequences rather than raw strings:
//! `.` and empty segments vanish, `..` cancels a preceding ordinary
//! component, and an absolute right-hand side replaces the base.

use std::ops::Add;

use super::components::{split_components, CURRENT, HOME, PARENT};
use super::Path;

impl Path {
    /// Append `other` to this path.
    ///
    /// This is the named form of the `+` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("a/b/c").join("../d/e"), "a/b/d/e");
    /// assert_eq!(Path::new("/").join(".."), "/");
    /// assert_eq!(Path::new("a").join("/b"), "/b");
    /// assert_eq!(Path::new("a").join(".."), ".");
    /// ```
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> Path {
        append(self.as_str(), other.as_ref())
    }
}

fn is_anchored(raw: &str) -> bool {
    raw.starts_with(Path::SEPARATOR)
        || raw == HOME
        || raw
            .strip_prefix(HOME)
            .is_some_and(|rest| rest.starts_with(Path::SEPARATOR))
}

/// Components that carry meaning when appending: no empty or `.` segments.
fn significant(raw: &str) -> impl Iterator<Item = &str> {
    split_components(raw)
        .into_iter()
        .filter(|c| !c.is_empty() && *c != CURRENT)
}

fn append(lhs: &str, rhs: &str) -> Path {
    if is_anchored(rhs) {
        return Path::new(rhs);
    }
    if lhs.is_empty() && rhs.is_empty() {
        return Path::empty();
    }

    let mut result: Vec<&str> = significant(lhs).collect();
    for component in significant(rhs) {
        if component != PARENT {
            result.push(component);
            continue;
        }
        // Only a leading `~` is the home marker; later ones are plain names.
        match (result.last().copied(), result.len()) {
            (Some(last), _) if last == Path::SEPARATOR => {}
            (None | Some(PARENT), _) | (Some(HOME), 1) => result.push(PARENT),
            _ => {
                result.pop();
            }
        }
    }

    if result.is_empty() {
        Path::new(CURRENT)
    } else {
        Path::from_components(result)
    }
}

impl Add<&Path> for &Path {
    type Output = Path;

    fn add(self, rhs: &Path) -> Path {
        append(self.as_str(), rhs.as_str())
    }
}

impl Add<Path> for Path {
    type Output = Path;

    fn add(self, rhs: Path) -> Path {
        &self + &rhs
    }
}

impl Add<&Path> for Path {
    type Output = Path;

    fn add(self, rhs: &Path) -> Path {
        &self + rhs
    }
}

impl Add<Path> for &Path {
    type Output = Path;

    fn add(self, rhs: Path) -> Path {
        self + &rhs
    }
}

impl Add<&str> for &Path {
    type Output = Path;

    fn add(self, rhs: &str) -> Path {
        append(self.as_str(), rhs)
    }
}

impl Add<&str> for Path {
    type Output = Path;

    fn add(self, rhs: &str) -> Path {
        &self + rhs
    }
}

impl Add<String> for Path {
    type Output = Path;

    fn add(self, rhs: String) -> Path {
        &self + rhs.as_str()
    }
}

impl Add<&String> for &Path {
    type Output = Path;

    fn add(self, rhs: &String) -> Path {
        self + rhs.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: &str) -> Path {
        Path::new(raw)
    }

    #[test]
    fn test_append_trivial() {
        assert_eq!(p("a") + "b", p("a/b"));
        assert_eq!(p("a/") + "b", p("a/b"));
    }

    #[test]
    fn test_append_absolute() {
        assert_eq!(p("/") + "/", p("/"));
        assert_eq!(p("/") + "..", p("/"));
        assert_eq!(p("/") + "../a", p("/a"));
        assert_eq!(p("a") + "/b", p("/b"));
        assert_eq!(p("/usr") + "local/bin", p("/usr/local/bin"));
    }

    #[test]
    fn test_append_home_replaces_base() {
        assert_eq!(p("/usr") + "~", p("~"));
        assert_eq!(p("/usr") + "~/x", p("~/x"));
        assert_eq!(p("/usr") + "~x", p("/usr/~x"));
    }

    #[test]
    fn test_append_current_dir() {
        assert_eq!(p("a") + ".", p("a"));
        assert_eq!(p("a") + "./.", p("a"));
        assert_eq!(p(".") + "a", p("a"));
        assert_eq!(p("./.") + "a", p("a"));
        assert_eq!(p(".") + ".", p("."));
        assert_eq!(p("./.") + "./.", p("."));
    }

    #[test]
    fn test_append_parent_dir() {
        assert_eq!(p("a") + "..", p("."));
        assert_eq!(p("a/b") + "..", p("a"));
        assert_eq!(p("..") + "..", p("../.."));
        assert_eq!(p("a") + "../b", p("b"));
        assert_eq!(p("a/b") + "../c", p("a/c"));
        assert_eq!(p("a/b/c") + "../d/e", p("a/b/d/e"));
        assert_eq!(p("..") + "../a", p("../../a"));
    }

    #[test]
    fn test_append_parent_does_not_cancel_home() {
        assert_eq!(p("~") + "..", p("~/.."));
        assert_eq!(p("~/a") + "../..", p("~/.."));
        assert_eq!(p("a/~") + "..", p("a"));
        assert_eq!(p("a") + "~b/..", p("a"));
        assert_eq!(p("/") + "x/~/../y", p("/x/y"));
    }

    #[test]
    fn test_append_empty() {
        assert_eq!(p("") + "", Path::empty());
        assert_eq!(p("") + "b", p("b"));
        assert_eq!(p("a") + "", p("a"));
        assert_eq!(p("") + "..", p(".."));
    }

    #[test]
    fn test_append_collapses_redundant_separators() {
        assert_eq!(p("a//b") + "c", p("a/b/c"));
        assert_eq!(p("/a/") + "b/", p("/a/b"));
    }

    #[test]
    fn test_append_operator_forms() {
        let base = p("a");
        let child = p("b");
        assert_eq!(&base + &child, p("a/b"));
        assert_eq!(base.clone() + &child, p("a/b"));
        assert_eq!(&base + child.clone(), p("a/b"));
        assert_eq!(&base + "b", p("a/b"));
        assert_eq!(base.clone() + String::from("b"), p("a/b"));
        assert_eq!(&base + &String::from("b"), p("a/b"));
        assert_eq!(base.join("b"), p("a/b"));
        assert_eq!(base + child, p("a/b"));
    }
}
