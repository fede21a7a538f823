//! Popularity classifier.
//!
//! Collapses the catalog's 0-100 popularity score into five labels a person
//! can read at a glance.

use std::fmt;

use serde::{Serialize, Serializer};

/// Ordinal popularity band, least popular first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Popularity {
    NotPopular,
    NotVeryPopular,
    SomewhatPopular,
    Popular,
    VeryPopular,
}

impl Popularity {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Popularity::NotPopular => "Not popular",
            Popularity::NotVeryPopular => "Not very popular",
            Popularity::SomewhatPopular => "Somewhat popular",
            Popularity::Popular => "Popular",
            Popularity::VeryPopular => "Very popular",
        }
    }
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Popularity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify a popularity score. Each band includes its upper bound.
///
/// `score` must be in 0..=100; the catalog adapter guarantees this.
pub fn classify(score: u8) -> Popularity {
    debug_assert!(score <= 100, "popularity score out of range: {}", score);

    match score {
        0..=20 => Popularity::NotPopular,
        21..=40 => Popularity::NotVeryPopular,
        41..=60 => Popularity::SomewhatPopular,
        61..=80 => Popularity::Popular,
        _ => Popularity::VeryPopular,
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const LABELS: [&str; 5] = [
        "Not popular",
        "Not very popular",
        "Somewhat popular",
        "Popular",
        "Very popular",
    ];

    proptest! {
        /// Every valid score maps to one of the five labels
        #[test]
        fn classify_is_total(score in 0u8..=100) {
            prop_assert!(LABELS.contains(&classify(score).label()));
        }

        /// A higher score never yields a less popular band
        #[test]
        fn classify_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(low) <= classify(high));
        }
    }
}
