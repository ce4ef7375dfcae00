use std::fs;

/// Runtime platform capabilities relevant to this game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Platform {
    is_wsl: bool,
}

impl Platform {
    /// Detects platform details from the current runtime environment.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            is_wsl: detect_wsl(),
        }
    }

    /// Returns true when running under Windows Subsystem for Linux.
    #[must_use]
    pub fn is_wsl(self) -> bool {
        self.is_wsl
    }

    /// Returns true when the terminal can be trusted to render emoji food
    /// glyphs. Legacy WSL console fonts garble them, so those sessions get
    /// the single-width fallback set.
    #[must_use]
    pub fn supports_emoji_glyphs(self) -> bool {
        !self.is_wsl
    }
}

fn detect_wsl() -> bool {
    let Ok(version) = fs::read_to_string("/proc/version") else {
        return false;
    };

    version.to_ascii_lowercase().contains("microsoft")
}
