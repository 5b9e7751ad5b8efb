//! Supported share platforms.
//!
//! The table below is the single source of truth for labels, icons and share
//! endpoints. The preview renderer, the embed emitters and the generated
//! JavaScript rule tables are all derived from it.
//!
//! | id          | share endpoint                                   |
//! |-------------|--------------------------------------------------|
//! | `facebook`  | `https://www.facebook.com/sharer/sharer.php?u=`  |
//! | `x`         | `https://twitter.com/intent/tweet?url=`          |
//! | `linkedin`  | `https://www.linkedin.com/sharing/share-offsite/?url=` |
//! | `pinterest` | `https://pinterest.com/pin/create/button/?url=`  |
//! | `reddit`    | `https://www.reddit.com/submit?url=`             |
//! | `tiktok`    | `https://www.tiktok.com/share?url=`              |
//! | `instagram` | none (clipboard)                                 |
//! | `copy`      | none (clipboard)                                 |

pub mod share;

pub use share::{ShareError, ShareTarget, build_share_target};

use serde::Serialize;

use crate::widget::IconColor;

#[cfg(test)]
const ICON_BASE: &str = "https://ik.imagekit.io/dee7studio/Icons";

/// One supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon_color: &'static str,
    pub icon_mono: &'static str,
    /// Base URL accepting a concatenated, encoded page URL. `None` means the
    /// platform is handled through the clipboard.
    pub share_url: Option<&'static str>,
}

impl PlatformDescriptor {
    /// Icon asset for the given icon-color option.
    pub const fn icon(&self, color: IconColor) -> &'static str {
        match color {
            IconColor::Color => self.icon_color,
            IconColor::Mono => self.icon_mono,
        }
    }

    /// Accessible label used on buttons.
    pub fn aria_label(&self) -> String {
        format!("Share on {}", self.label)
    }
}

/// All platforms, in the order the configurator lists them.
pub static PLATFORMS: [PlatformDescriptor; 8] = [
    PlatformDescriptor {
        id: "facebook",
        label: "Facebook",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/Facebook.svg?updatedAt=1751101326689",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/Facebook_black.svg?updatedAt=1751101326631",
        share_url: Some("https://www.facebook.com/sharer/sharer.php?u="),
    },
    PlatformDescriptor {
        id: "x",
        label: "X",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/X.svg?updatedAt=1751101329412",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/X_black.svg?updatedAt=1751101329529",
        share_url: Some("https://twitter.com/intent/tweet?url="),
    },
    PlatformDescriptor {
        id: "linkedin",
        label: "LinkedIn",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/LinkedIn.svg?updatedAt=1751101326668",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/LinkedIn_Black.svg?updatedAt=1751101326659",
        share_url: Some("https://www.linkedin.com/sharing/share-offsite/?url="),
    },
    PlatformDescriptor {
        id: "pinterest",
        label: "Pinterest",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/Pinterest.svg?updatedAt=1751101326628",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/Pinterest_Black.svg?updatedAt=1751101326649",
        share_url: Some("https://pinterest.com/pin/create/button/?url="),
    },
    PlatformDescriptor {
        id: "reddit",
        label: "Reddit",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/Reddit.svg?updatedAt=1751102199116",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/Reddit_Black.svg?updatedAt=1751102199078",
        share_url: Some("https://www.reddit.com/submit?url="),
    },
    PlatformDescriptor {
        id: "tiktok",
        label: "TikTok",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/Tok%20Tok.svg?updatedAt=1751101326673",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/Tok%20Tok_Black.svg?updatedAt=1751101326653",
        share_url: Some("https://www.tiktok.com/share?url="),
    },
    PlatformDescriptor {
        id: "instagram",
        label: "Instagram",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/Instagram.svg?updatedAt=1751100484264",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/Instagram_black.svg?updatedAt=1751100510415",
        share_url: None,
    },
    PlatformDescriptor {
        id: "copy",
        label: "Copy Link",
        icon_color: "https://ik.imagekit.io/dee7studio/Icons/Copy%20Link.svg?updatedAt=1751101326655",
        icon_mono: "https://ik.imagekit.io/dee7studio/Icons/Copy%20Link_black.svg?updatedAt=1751101326620",
        share_url: None,
    },
];

/// Look up a platform by id.
pub fn lookup(id: &str) -> Option<&'static PlatformDescriptor> {
    PLATFORMS.iter().find(|p| p.id == id)
}

/// Comma-separated list of known ids, for diagnostics and hints.
pub fn known_ids() -> String {
    PLATFORMS.iter().map(|p| p.id).collect::<Vec<_>>().join(", ")
}
