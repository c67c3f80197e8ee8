//! The immutable fact catalog.

use super::FactNumber;

/// Number of facts the skill knows.
pub const FACT_COUNT: usize = 10;

/// The cat facts, in the order "yes" walks through them.
pub const CAT_FACTS: [&str; FACT_COUNT] = [
    "A cat usually has about 12 whiskers on each side of its face.",
    "On average, cats spend 2/3 of every day sleeping. That means a nine-year-old cat has been awake for only three years of its life.",
    "In the original Italian version of Cinderella, the benevolent fairy godmother figure was a cat.",
    "In the 1750s, Europeans introduced cats into the Americas to control pests.",
    "Cats spend nearly 1/3 of their waking hours cleaning themselves.",
    "A female cat is called a queen or a molly.",
    "Rome has more homeless cats per square mile than any other city in the world.",
    "Cats can drink seawater.",
    "Cats are extremely sensitive to vibrations. Cats are said to detect earthquake tremors 10 or 15 minutes before humans can.",
    "A cat's heart beats nearly twice as fast as a human heart, at 110 to 140 beats a minute.",
];

/// Read-only view over an ordered list of exactly [`FACT_COUNT`] facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactCatalog {
    facts: &'static [&'static str; FACT_COUNT],
}

impl FactCatalog {
    /// The built-in cat facts.
    pub const fn cat_facts() -> Self {
        Self { facts: &CAT_FACTS }
    }

    /// Returns the fact a user asked for by its one-based number.
    pub fn by_number(&self, number: FactNumber) -> &'static str {
        self.facts[number.position()]
    }
}

impl Default for FactCatalog {
    fn default() -> Self {
        Self::cat_facts()
    }
}
