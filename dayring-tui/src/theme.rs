use ratatui::style::Color;

/// A named color palette for the rings and chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub hour_ring: Color,
    pub part_ring: Color,
    pub inner_ring: Color,
    pub ring_empty: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
}

pub const DEFAULT_THEME: &str = "blue";

pub const THEMES: [Theme; 5] = [
    Theme {
        name: "blue",
        hour_ring: Color::Blue,
        part_ring: Color::Cyan,
        inner_ring: Color::LightBlue,
        ring_empty: Color::DarkGray,
        accent: Color::Cyan,
        text: Color::White,
        muted: Color::DarkGray,
    },
    Theme {
        name: "green",
        hour_ring: Color::Green,
        part_ring: Color::LightGreen,
        inner_ring: Color::Cyan,
        ring_empty: Color::DarkGray,
        accent: Color::Green,
        text: Color::White,
        muted: Color::DarkGray,
    },
    Theme {
        name: "amber",
        hour_ring: Color::Yellow,
        part_ring: Color::LightYellow,
        inner_ring: Color::LightRed,
        ring_empty: Color::DarkGray,
        accent: Color::Yellow,
        text: Color::White,
        muted: Color::DarkGray,
    },
    Theme {
        name: "rose",
        hour_ring: Color::Magenta,
        part_ring: Color::LightMagenta,
        inner_ring: Color::Red,
        ring_empty: Color::DarkGray,
        accent: Color::Magenta,
        text: Color::White,
        muted: Color::DarkGray,
    },
    Theme {
        name: "mono",
        hour_ring: Color::White,
        part_ring: Color::Gray,
        inner_ring: Color::White,
        ring_empty: Color::DarkGray,
        accent: Color::White,
        text: Color::White,
        muted: Color::DarkGray,
    },
];

/// Look up a theme by its persisted name, falling back to the default for
/// unknown names.
pub fn by_name(name: &str) -> Theme {
    THEMES
        .iter()
        .find(|t| t.name == name)
        .copied()
        .unwrap_or(THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_blue() {
        assert_eq!(by_name("solarized").name, "blue");
        assert_eq!(by_name("").name, "blue");
    }

    #[test]
    fn every_bundled_theme_resolves_by_name() {
        for theme in THEMES {
            assert_eq!(by_name(theme.name).name, theme.name);
        }
    }
}
