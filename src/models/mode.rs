//! Page modes and their hash routes.

/// Which section of the page is shown.
///
/// URL format: `#/` (file sharing), `#/paste`, `#/faq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Upload area, progress bar and file links (default)
    #[default]
    FileSharing,
    /// Text editor posting to the paste endpoint
    Pastebin,
    /// Static help content
    Faq,
}

impl Mode {
    /// All modes in nav bar order.
    pub const ALL: [Mode; 3] = [Mode::FileSharing, Mode::Pastebin, Mode::Faq];

    /// Label of the nav control.
    pub fn label(self) -> &'static str {
        match self {
            Self::FileSharing => "File Sharing",
            Self::Pastebin => "Pastebin",
            Self::Faq => "FAQ",
        }
    }

    /// Parse URL hash into a mode. Anything unrecognized is file sharing.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "paste" => Self::Pastebin,
            "faq" => Self::Faq,
            _ => Self::FileSharing,
        }
    }

    /// Convert mode to URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::FileSharing => "#/",
            Self::Pastebin => "#/paste",
            Self::Faq => "#/faq",
        }
    }

    /// Get current mode from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Update browser URL to match this mode (using pushState).
    pub fn push(self) {
        if Self::current() != self {
            crate::utils::dom::push_hash(self.to_hash());
        }
    }
}
