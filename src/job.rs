use std::path::{Path, PathBuf};
use std::time::Duration;

pub const STATUS_URL: &str =
    "https://raw.githubusercontent.com/9477781/sports-reservation-app/main/public/data/status.json";

pub const STRICT_TIMEOUT: Duration = Duration::from_secs(30);

const PREVIEW_LEN: usize = 100;

/// How a run talks to the console and what it does when the fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Times out after 30 seconds and exits with status 1 on failure.
    Strict,
    /// No timeout; failures are printed and swallowed.
    Plain,
    /// Like `Plain`, but previews the body and checks the size on disk.
    Inspect,
}

impl Profile {
    pub fn default_path(self) -> PathBuf {
        match self {
            Profile::Strict => PathBuf::from("public/data/status_v3.json"),
            Profile::Plain => PathBuf::from("public/data/status.json"),
            Profile::Inspect => Path::new("public").join("data").join("status_py.json"),
        }
    }

    pub fn timeout(self) -> Option<Duration> {
        match self {
            Profile::Strict => Some(STRICT_TIMEOUT),
            Profile::Plain | Profile::Inspect => None,
        }
    }

    pub fn failure_exit_code(self) -> i32 {
        match self {
            Profile::Strict => 1,
            Profile::Plain | Profile::Inspect => 0,
        }
    }

    pub fn inspects(self) -> bool {
        matches!(self, Profile::Inspect)
    }

    pub fn announce_line(self, url: &str, path: &Path) -> Option<String> {
        match self {
            Profile::Strict => Some(format!("Downloading {} to {}...", url, path.display())),
            Profile::Plain => Some(format!("Downloading {}...", url)),
            Profile::Inspect => None,
        }
    }

    pub fn count_line(self, len: usize) -> String {
        match self {
            Profile::Strict => format!("Read {} bytes.", len),
            Profile::Plain => format!("Downloaded {} bytes.", len),
            Profile::Inspect => format!("Downloaded {} bytes", len),
        }
    }

    pub fn done_line(self) -> Option<&'static str> {
        match self {
            Profile::Strict | Profile::Plain => Some("Done."),
            Profile::Inspect => None,
        }
    }
}

/// Renders the head of a body as a byte literal, e.g. `b'{"a": 1}\n'`.
/// Printable ASCII is kept; the delimiter is `"` only when the head holds a
/// `'` and no `"`.
pub fn preview(bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(PREVIEW_LEN)];
    let quote = if head.contains(&b'\'') && !head.contains(&b'"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(head.len() + 3);
    out.push('b');
    out.push(quote);
    for &byte in head {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if byte as char == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out.push(quote);
    out
}

/// One fetch-and-save invocation.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub profile: Profile,
    pub url: String,
    pub path: PathBuf,
    pub timeout: Option<Duration>,
}

impl FetchJob {
    pub fn new(profile: Profile, url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            url: url.into(),
            path: path.into(),
            timeout: profile.timeout(),
        }
    }

    /// The job a profile's binary runs: the status URL into the profile's path.
    pub fn for_profile(profile: Profile) -> Self {
        Self::new(profile, STATUS_URL, profile.default_path())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
