//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Mode;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleHelp as Faq, LuClipboard as Paste, LuCloudUpload as Upload, LuFile as File,
        LuImage as FileImage, LuLink as Link, LuTriangleAlert as Error, LuShare2 as Share,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCloudArrowUp as Upload, BsClipboard as Paste, BsExclamationTriangle as Error,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsLink45deg as Link,
        BsQuestionCircle as Faq, BsShare as Share,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD, Upload);
themed_icon!(SHARE, Share);
themed_icon!(PASTE, Paste);
themed_icon!(FAQ, Faq);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(LINK, Link);
themed_icon!(ERROR, Error);

/// Icon of the nav control for a mode.
pub fn mode_icon(mode: Mode) -> Icon {
    match mode {
        Mode::FileSharing => SHARE,
        Mode::Pastebin => PASTE,
        Mode::Faq => FAQ,
    }
}
