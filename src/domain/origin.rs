use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static REMOTE_ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(git@|https://)[^\s]+\.git$").expect("remote origin pattern is valid")
});

/// Returns true when `value` looks like a clonable git URL.
///
/// The pattern is anchored on both ends, so any leading or trailing character
/// (whitespace included) rejects the value.
pub fn is_remote_origin(value: &str) -> bool {
    REMOTE_ORIGIN.is_match(value)
}

/// Where OpenAPI documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Local(PathBuf),
    Remote(String),
}

impl Origin {
    /// Classify a raw origin string. Anything that is not a remote URL is a local path.
    pub fn parse(value: &str) -> Self {
        if is_remote_origin(value) {
            Origin::Remote(value.to_string())
        } else {
            Origin::Local(PathBuf::from(value))
        }
    }

    /// Like [`Origin::parse`], but local paths are made absolute against `base`.
    pub fn resolve(value: &str, base: &Path) -> Self {
        match Self::parse(value) {
            Origin::Local(path) => {
                let joined = if path.is_absolute() { path } else { base.join(path) };
                Origin::Local(joined.canonicalize().unwrap_or(joined))
            }
            remote => remote,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Origin::Remote(_))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Local(path) => write!(f, "{}", path.display()),
            Origin::Remote(url) => f.write_str(url),
        }
    }
}
