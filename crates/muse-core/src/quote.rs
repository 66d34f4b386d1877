//! Quote catalog and uniform random selection.

use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A single quote with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Quote {
    pub text: String,
    pub attribution: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribution: attribution.into(),
        }
    }
}

/// Reasons a catalog cannot back a [`QuoteSource`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("quote catalog is empty")]
    Empty,
    #[error("quote #{index} has no text")]
    BlankText { index: usize },
    #[error("quote #{index} has no attribution")]
    BlankAttribution { index: usize },
}

const BUILTIN: [(&str, &str); 10] = [
    (
        "The greatest glory in living lies not in never falling, but in rising every time we fall.",
        "Nelson Mandela",
    ),
    (
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    (
        "Your time is limited, so don't waste it living someone else's life. Don't be trapped by dogma — which is living with the results of other people's thinking.",
        "Steve Jobs",
    ),
    (
        "If life were predictable it would cease to be life, and be without flavor.",
        "Eleanor Roosevelt",
    ),
    (
        "If you look at what you have in life, you'll always have more. If you look at what you don't have in life, you'll never have enough.",
        "Oprah Winfrey",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    ("Whoever is happy will make others happy too.", "Anne Frank"),
    (
        "Spread love everywhere you go. Let no one ever come to you without leaving happier.",
        "Mother Teresa",
    ),
    (
        "The only thing we have to fear is fear itself.",
        "Franklin D. Roosevelt",
    ),
    (
        "In the end, it's not the years in your life that count. It's the life in your years.",
        "Abraham Lincoln",
    ),
];

/// The reference catalog shipped with Muse.
pub fn builtin_catalog() -> Vec<Quote> {
    BUILTIN
        .iter()
        .map(|(text, attribution)| Quote::new(*text, *attribution))
        .collect()
}

/// Owns a fixed, non-empty catalog and picks entries uniformly at random.
#[derive(Debug)]
pub struct QuoteSource<R = StdRng> {
    catalog: Vec<Quote>,
    rng: R,
}

impl<R: Rng> QuoteSource<R> {
    /// Build a source over `catalog`, drawing randomness from `rng`.
    ///
    /// Rejects empty catalogs and entries with blank text or attribution.
    pub fn new(catalog: Vec<Quote>, rng: R) -> Result<Self, CatalogError> {
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, quote) in catalog.iter().enumerate() {
            if quote.text.trim().is_empty() {
                return Err(CatalogError::BlankText { index });
            }
            if quote.attribution.trim().is_empty() {
                return Err(CatalogError::BlankAttribution { index });
            }
        }
        Ok(Self { catalog, rng })
    }

    /// Pick one quote with probability 1/N, independently of earlier picks.
    pub fn pick_random(&mut self) -> &Quote {
        let n = self.catalog.len();
        let draw: f64 = self.rng.gen();
        // floor(u * n) stays below n for u in [0, 1); the min guards float rounding
        let index = ((draw * n as f64).floor() as usize).min(n - 1);
        debug!(index, "picked quote");
        &self.catalog[index]
    }

    pub fn catalog(&self) -> &[Quote] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
