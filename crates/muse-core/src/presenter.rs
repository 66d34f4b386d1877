//! Presenter: turns one trigger into one display update.
//!
//! The presenter owns the quote source and the color generator and writes
//! their results into a [`View`]. Every update draws exactly one color and
//! paints it on both the background and the control, so the two surfaces
//! never disagree.

use crate::color::{Color, ColorGenerator};
use crate::quote::{Quote, QuoteSource};
use rand::{rngs::StdRng, Rng};
use std::fmt;
use tracing::{debug, info, warn};

pub const DEFAULT_SEPARATOR: &str = "—";

/// The presentation surfaces a presenter writes into.
pub trait View {
    fn show_quote(&mut self, text: &str, attribution: &str);
    fn paint_background(&mut self, color: Color);
    fn paint_control(&mut self, color: Color);
}

/// Result of a single trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub quote: Quote,
    pub color: Color,
}

/// Diagnostic raised when no activation control exists at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingControlWarning;

impl fmt::Display for MissingControlWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no 'new quote' control is configured; running display-only")
    }
}

pub struct Presenter<R = StdRng> {
    quotes: QuoteSource<R>,
    colors: ColorGenerator<R>,
    separator: String,
    interactive: bool,
}

impl<R: Rng> Presenter<R> {
    pub fn new(quotes: QuoteSource<R>, colors: ColorGenerator<R>) -> Self {
        Self {
            quotes,
            colors,
            separator: DEFAULT_SEPARATOR.to_string(),
            interactive: true,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Run the startup sequence.
    ///
    /// A missing control is logged and leaves the presenter display-only;
    /// the initial update happens either way.
    pub fn start<V: View>(&mut self, view: &mut V, control_available: bool) -> Update {
        if control_available {
            info!(catalog = self.quotes.len(), "presenter started");
        } else {
            warn!("{}", MissingControlWarning);
            self.interactive = false;
        }
        self.trigger(view)
    }

    /// Whether user triggers should reach [`Presenter::trigger`].
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn trigger<V: View>(&mut self, view: &mut V) -> Update {
        let quote = self.quotes.pick_random().clone();
        let color = self.colors.random_color();

        view.show_quote(
            &format!("\"{}\"", quote.text),
            &format!("{} {}", self.separator, quote.attribution),
        );
        view.paint_background(color);
        view.paint_control(color);

        debug!(attribution = %quote.attribution, %color, "display updated");
        Update { quote, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::builtin_catalog;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingView {
        text: Option<String>,
        attribution: Option<String>,
        background: Option<Color>,
        control: Option<Color>,
        quote_writes: usize,
    }

    impl View for RecordingView {
        fn show_quote(&mut self, text: &str, attribution: &str) {
            self.text = Some(text.to_string());
            self.attribution = Some(attribution.to_string());
            self.quote_writes += 1;
        }

        fn paint_background(&mut self, color: Color) {
            self.background = Some(color);
        }

        fn paint_control(&mut self, color: Color) {
            self.control = Some(color);
        }
    }

    fn presenter(seed: u64) -> Presenter {
        let quotes =
            QuoteSource::new(builtin_catalog(), StdRng::seed_from_u64(seed)).unwrap();
        let colors = ColorGenerator::new(StdRng::seed_from_u64(seed.wrapping_add(1)));
        Presenter::new(quotes, colors)
    }

    #[test]
    fn test_three_triggers_end_to_end() {
        let catalog = builtin_catalog();
        let mut presenter = presenter(17);
        let mut view = RecordingView::default();

        for round in 1..=3 {
            let update = presenter.trigger(&mut view);
            assert_eq!(view.quote_writes, round);

            let entry = catalog
                .iter()
                .find(|q| view.text.as_deref() == Some(format!("\"{}\"", q.text).as_str()))
                .expect("displayed quote comes from the catalog");
            assert_eq!(
                view.attribution.as_deref(),
                Some(format!("— {}", entry.attribution).as_str())
            );
            assert_eq!(&update.quote, entry);

            assert_eq!(view.background, Some(update.color));
            assert_eq!(view.control, view.background);
        }
    }

    #[test]
    fn test_start_with_control_is_interactive() {
        let mut presenter = presenter(1);
        let mut view = RecordingView::default();
        presenter.start(&mut view, true);
        assert!(presenter.interactive());
        assert_eq!(view.quote_writes, 1);
    }

    #[test]
    fn test_missing_control_degrades_but_still_renders() {
        let mut presenter = presenter(2);
        let mut view = RecordingView::default();
        let update = presenter.start(&mut view, false);

        assert!(!presenter.interactive());
        assert_eq!(view.quote_writes, 1);
        assert_eq!(view.background, Some(update.color));
        assert_eq!(view.control, Some(update.color));
    }

    #[test]
    fn test_custom_separator() {
        let quotes = QuoteSource::new(
            vec![Quote::new("Less is more.", "Mies")],
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        let colors = ColorGenerator::new(StdRng::seed_from_u64(0));
        let mut presenter = Presenter::new(quotes, colors).with_separator("-");
        let mut view = RecordingView::default();

        presenter.trigger(&mut view);
        assert_eq!(view.text.as_deref(), Some("\"Less is more.\""));
        assert_eq!(view.attribution.as_deref(), Some("- Mies"));
        assert_eq!(presenter.separator(), "-");
    }

    #[test]
    fn test_missing_control_warning_message() {
        assert!(MissingControlWarning.to_string().contains("display-only"));
    }
}
