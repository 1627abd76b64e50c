//! Host operating system, as far as the shell's behaviour depends on it.

use std::fmt;
use std::str::FromStr;

use super::errors::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Name used in the update feed query.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "win32",
            Platform::MacOs => "darwin",
            Platform::Linux => "linux",
        }
    }

    /// macOS apps keep running with no window open.
    pub fn quits_when_all_windows_closed(&self) -> bool {
        !matches!(self, Platform::MacOs)
    }

    /// Windows delivers deep links as process arguments.
    pub fn delivers_links_in_argv(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Only macOS has a native about panel to configure.
    pub fn has_about_panel(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win32" | "windows" => Ok(Platform::Windows),
            "darwin" | "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(ShellError::UnknownPlatform(other.to_string())),
        }
    }
}
