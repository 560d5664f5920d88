//! Static demo catalogs and the enums that describe a design.
//!
//! The catalog entries feed the gallery thumbnails, the photo cards and
//! the slideshow; the designer starts from [`default_params`].

use crate::canvas::SizeClass;
use crate::color::Color;
use crate::ops::pattern::RenderParams;

/// Procedural background texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Waves,
    Dots,
    Grid,
}

impl PatternKind {
    pub fn key(&self) -> &'static str {
        match self {
            PatternKind::Waves => "waves",
            PatternKind::Dots => "dots",
            PatternKind::Grid => "grid",
        }
    }

    pub fn all() -> &'static [PatternKind] {
        &[PatternKind::Waves, PatternKind::Dots, PatternKind::Grid]
    }
}

/// Mockup overlay treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKind {
    Plain,
    Comic,
    Anime,
}

impl StyleKind {
    pub fn key(&self) -> &'static str {
        match self {
            StyleKind::Plain => "plain",
            StyleKind::Comic => "comic",
            StyleKind::Anime => "anime",
        }
    }

    /// Caption painted into the pattern of a staged mockup.
    pub fn caption(&self) -> &'static str {
        match self {
            StyleKind::Plain => "",
            StyleKind::Comic => "COMIC",
            StyleKind::Anime => "ANIME",
        }
    }

    pub fn all() -> &'static [StyleKind] {
        &[StyleKind::Plain, StyleKind::Comic, StyleKind::Anime]
    }
}

/// One read-only catalog entry, used for thumbnails, photo cards and the
/// slideshow.
#[derive(Clone, Copy, Debug)]
pub struct MockupItem {
    pub size: SizeClass,
    pub title: &'static str,
    pub style: StyleKind,
    pub background: Color,
    pub accent: Color,
    pub pattern: PatternKind,
}

impl MockupItem {
    /// Render parameters for this item's flat pattern (thumbnail view).
    pub fn thumb_params(&self) -> RenderParams {
        RenderParams {
            background: self.background,
            accent: self.accent,
            pattern: self.pattern,
            caption: "MouseCraft".to_string(),
            size: self.size,
        }
    }
}

/// Flat-pattern gallery entries (rendered as thumbnails).
pub fn gallery_items() -> &'static [MockupItem] {
    static ITEMS: [MockupItem; 4] = [
        MockupItem {
            size: SizeClass::Small,
            title: "Nebula Burst",
            style: StyleKind::Plain,
            background: Color::rgb(0x06, 0xb6, 0xd4),
            accent: Color::rgb(0xa5, 0xf3, 0xfc),
            pattern: PatternKind::Waves,
        },
        MockupItem {
            size: SizeClass::Large,
            title: "Midnight Grid",
            style: StyleKind::Plain,
            background: Color::rgb(0x4f, 0x46, 0xe5),
            accent: Color::rgb(0xc7, 0xd2, 0xfe),
            pattern: PatternKind::Grid,
        },
        MockupItem {
            size: SizeClass::Small,
            title: "Sunset Dots",
            style: StyleKind::Plain,
            background: Color::rgb(0xf5, 0x9e, 0x0b),
            accent: Color::rgb(0xfd, 0xe6, 0x8a),
            pattern: PatternKind::Dots,
        },
        MockupItem {
            size: SizeClass::Large,
            title: "Emerald Tide",
            style: StyleKind::Plain,
            background: Color::rgb(0x10, 0xb9, 0x81),
            accent: Color::rgb(0xa7, 0xf3, 0xd0),
            pattern: PatternKind::Waves,
        },
    ];
    &ITEMS
}

/// Staged-mockup entries (photo cards and the slideshow).
pub fn photo_items() -> &'static [MockupItem] {
    static ITEMS: [MockupItem; 4] = [
        MockupItem {
            size: SizeClass::Small,
            title: "Comic Pop",
            style: StyleKind::Comic,
            background: Color::rgb(0xef, 0x44, 0x44),
            accent: Color::rgb(0xfd, 0xe6, 0x8a),
            pattern: PatternKind::Dots,
        },
        MockupItem {
            size: SizeClass::Large,
            title: "Anime Neon",
            style: StyleKind::Anime,
            background: Color::rgb(0x06, 0xb6, 0xd4),
            accent: Color::rgb(0xa5, 0xf3, 0xfc),
            pattern: PatternKind::Waves,
        },
        MockupItem {
            size: SizeClass::Small,
            title: "Retro Grid",
            style: StyleKind::Plain,
            background: Color::rgb(0x22, 0xc5, 0x5e),
            accent: Color::rgb(0xbb, 0xf7, 0xd0),
            pattern: PatternKind::Grid,
        },
        MockupItem {
            size: SizeClass::Large,
            title: "Manga Sky",
            style: StyleKind::Anime,
            background: Color::rgb(0x8b, 0x5c, 0xf6),
            accent: Color::rgb(0xdd, 0xd6, 0xfe),
            pattern: PatternKind::Waves,
        },
    ];
    &ITEMS
}

/// The designer's initial state.
pub fn default_params() -> RenderParams {
    RenderParams {
        background: Color::rgb(0x06, 0xb6, 0xd4),
        accent: Color::rgb(0xa5, 0xf3, 0xfc),
        pattern: PatternKind::Waves,
        caption: "MouseCraft Studio".to_string(),
        size: SizeClass::Small,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_have_four_entries() {
        assert_eq!(gallery_items().len(), 4);
        assert_eq!(photo_items().len(), 4);
    }

    #[test]
    fn test_gallery_entries_are_plain() {
        assert!(gallery_items().iter().all(|it| it.style == StyleKind::Plain));
    }

    #[test]
    fn test_style_captions() {
        assert_eq!(StyleKind::Plain.caption(), "");
        assert_eq!(StyleKind::Comic.caption(), "COMIC");
        assert_eq!(StyleKind::Anime.caption(), "ANIME");
    }

    #[test]
    fn test_default_params_match_designer() {
        let p = default_params();
        assert_eq!(p.background.to_hex(), "#06b6d4");
        assert_eq!(p.accent.to_hex(), "#a5f3fc");
        assert_eq!(p.pattern, PatternKind::Waves);
        assert_eq!(p.size, SizeClass::Small);
        assert_eq!(p.caption, "MouseCraft Studio");
    }
}
