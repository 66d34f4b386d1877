//! # Muse Core Library
//!
//! Everything Muse does that is independent of the terminal: the quote
//! catalog and its uniform picker, the accent color generator, the presenter
//! that combines them on every trigger, configuration and theming.
//!
//! ## Modules
//!
//! - `quote`: Quote catalog and random selection
//! - `color`: Random `#rrggbb` accent colors
//! - `presenter`: One trigger, one quote, one color, two surfaces
//! - `settings`: Application configuration management
//! - `theme`: UI theming system

pub mod color;
pub mod presenter;
pub mod quote;
pub mod settings;
pub mod theme;

use color::ColorGenerator;
use presenter::Presenter;
use quote::{CatalogError, QuoteSource};
use rand::{rngs::StdRng, SeedableRng};
use settings::Settings;

/// Build a presenter from settings.
///
/// With a seed, the quote and color generators get distinct deterministic
/// streams; without one they are seeded from the OS.
pub fn build_presenter(settings: &Settings) -> Result<Presenter, CatalogError> {
    let (quote_rng, color_rng) = match settings.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };
    let quotes = QuoteSource::new(settings.catalog(), quote_rng)?;
    let colors = ColorGenerator::new(color_rng);
    Ok(Presenter::new(quotes, colors).with_separator(settings.separator.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::presenter::View;

    #[derive(Default)]
    struct Sink {
        lines: Vec<String>,
    }

    impl View for Sink {
        fn show_quote(&mut self, text: &str, attribution: &str) {
            self.lines.push(format!("{text} {attribution}"));
        }

        fn paint_background(&mut self, _color: Color) {}

        fn paint_control(&mut self, _color: Color) {}
    }

    #[test]
    fn test_build_presenter_from_default_settings() {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        let mut presenter = build_presenter(&settings).expect("builtin catalog is valid");
        let mut sink = Sink::default();
        presenter.start(&mut sink, true);
        assert_eq!(sink.lines.len(), 1);
        assert!(sink.lines[0].contains(" — "));
    }

    #[test]
    fn test_seeded_presenters_agree() {
        let settings = Settings {
            seed: Some(99),
            ..Settings::default()
        };
        let mut a = build_presenter(&settings).unwrap();
        let mut b = build_presenter(&settings).unwrap();
        let (mut sa, mut sb) = (Sink::default(), Sink::default());
        for _ in 0..5 {
            assert_eq!(a.trigger(&mut sa), b.trigger(&mut sb));
        }
    }

    #[test]
    fn test_configured_empty_catalog_fails() {
        let settings = Settings {
            quotes: Some(Vec::new()),
            ..Settings::default()
        };
        assert!(matches!(
            build_presenter(&settings),
            Err(CatalogError::Empty)
        ));
    }
}
