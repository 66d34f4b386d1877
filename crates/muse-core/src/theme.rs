//! Theme for the parts of the screen the accent color does not own.
//!
//! The random accent paints the quote backdrop and the control; headers,
//! borders and hints use the Everforest palette below.

use crate::color::Color as Accent;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants supported by Muse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeVariant {
    /// Everforest Dark theme (default)
    #[default]
    EverforestDark,
    /// Everforest Light theme
    EverforestLight,
}

impl ThemeVariant {
    pub fn toggled(self) -> Self {
        match self {
            Self::EverforestDark => Self::EverforestLight,
            Self::EverforestLight => Self::EverforestDark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::EverforestDark => "dark",
            Self::EverforestLight => "light",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub border: Color,
    pub muted: Color,
    pub warning: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Text,
    Title,
    Border,
    /// Key hints and other low-emphasis text
    Muted,
    Warning,
    Background,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::EverforestDark => ColorPalette {
                background: Color::Rgb(45, 53, 59),    // #2d353b
                foreground: Color::Rgb(211, 198, 170), // #d3c6aa
                title: Color::Rgb(167, 192, 128),      // #a7c080
                border: Color::Rgb(116, 125, 135),     // #747d87
                muted: Color::Rgb(133, 146, 137),      // #859289
                warning: Color::Rgb(219, 188, 127),    // #dbbc7f
            },
            ThemeVariant::EverforestLight => ColorPalette {
                background: Color::Rgb(253, 246, 227), // #fdf6e3
                foreground: Color::Rgb(92, 106, 114),  // #5c6a72
                title: Color::Rgb(141, 161, 1),        // #8da101
                border: Color::Rgb(150, 160, 170),     // #96a0aa
                muted: Color::Rgb(147, 159, 145),      // #939f91
                warning: Color::Rgb(207, 131, 44),     // #cf832c
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    pub fn toggle(&mut self) {
        *self = Self::new(self.variant.toggled());
    }

    /// Get a ratatui Style for the specified UI element
    pub fn ratatui_style(&self, element: Element) -> Style {
        let base = Style::default().bg(self.colors.background);
        match element {
            Element::Text | Element::Background => base.fg(self.colors.foreground),
            Element::Title => base.fg(self.colors.title).add_modifier(Modifier::BOLD),
            Element::Border => base.fg(self.colors.border),
            Element::Muted => base.fg(self.colors.muted),
            Element::Warning => base.fg(self.colors.warning),
        }
    }

    /// Style for a surface painted with the accent color.
    pub fn accent_surface(&self, accent: Accent) -> Style {
        Style::default()
            .bg(accent.into())
            .fg(accent.contrasting_text().into())
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }
}
