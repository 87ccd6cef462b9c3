//! Fixture factories for generated stores.
//!
//! The generator does not invent content itself. It asks a [`NameSource`] for
//! fresh category and item names and an [`AttributeSource`] for item attribute
//! sets. [`SequenceFixtures`] is fully deterministic; [`RandomFixtures`] draws
//! from word lists with a seedable RNG.

use crate::attributes::Attributes;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Produces a fresh display name per call.
pub trait NameSource {
    fn category_name(&mut self) -> String;
    fn item_name(&mut self) -> String;
}

/// Produces a plausible attribute set for an item.
///
/// `overrides` win over generated values and may add keys of their own.
pub trait AttributeSource {
    fn item_attributes(&mut self, overrides: &Attributes) -> Attributes;
}

/// Both collaborators a generator needs.
pub trait Fixtures: NameSource + AttributeSource {}

impl<T: NameSource + AttributeSource + ?Sized> Fixtures for T {}

/// Deterministic sequences: "Category #1", "Item #1", ...
#[derive(Debug, Clone, Default)]
pub struct SequenceFixtures {
    categories: u64,
    items: u64,
    attribute_sets: u64,
}

impl SequenceFixtures {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameSource for SequenceFixtures {
    fn category_name(&mut self) -> String {
        self.categories += 1;
        format!("Category #{}", self.categories)
    }

    fn item_name(&mut self) -> String {
        self.items += 1;
        format!("Item #{}", self.items)
    }
}

impl AttributeSource for SequenceFixtures {
    fn item_attributes(&mut self, overrides: &Attributes) -> Attributes {
        self.attribute_sets += 1;
        let n = self.attribute_sets;
        Attributes::from([
            ("name".to_string(), format!("Item #{}", n)),
            ("brand".to_string(), format!("Brand #{}", n)),
            ("price".to_string(), format!("{}.{:02}", n, n % 100)),
            ("image".to_string(), format!("images/item-{}.jpg", n)),
            ("remark".to_string(), format!("Remark #{}", n)),
        ])
        .merge(overrides)
    }
}

const ADJECTIVES: &[&str] = &[
    "Fresh", "Organic", "Frozen", "Crunchy", "Smoked", "Spicy", "Sweet", "Dried", "Local", "Fine",
];

const NOUNS: &[&str] = &[
    "Apples", "Cheese", "Bread", "Coffee", "Pasta", "Salmon", "Yogurt", "Herbs", "Beans", "Honey",
];

const BRANDS: &[&str] = &["Acme", "Orchard", "Gourmet", "Daily", "Harvest", "Mill"];

/// Random names and attributes from small word lists.
///
/// Names start with a per-instance counter so they stay distinct within the
/// short-name bound.
#[derive(Debug, Clone)]
pub struct RandomFixtures {
    rng: SmallRng,
    counter: u64,
}

impl RandomFixtures {
    /// Reproducible fixtures for a given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            counter: 0,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            counter: 0,
        }
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or("")
    }

    fn next_name(&mut self) -> String {
        self.counter += 1;
        let adjective = self.pick(ADJECTIVES);
        let noun = self.pick(NOUNS);
        format!("{} {} {}", self.counter, adjective, noun)
    }
}

impl NameSource for RandomFixtures {
    fn category_name(&mut self) -> String {
        self.next_name()
    }

    fn item_name(&mut self) -> String {
        self.next_name()
    }
}

impl AttributeSource for RandomFixtures {
    fn item_attributes(&mut self, overrides: &Attributes) -> Attributes {
        let name = self.next_name();
        let brand = self.pick(BRANDS);
        let price = format!(
            "{}.{:02}",
            self.rng.gen_range(0..50),
            self.rng.gen_range(0..100)
        );
        let image = format!("images/{}.jpg", self.rng.gen::<u32>());
        let remark = format!("{} {}", self.pick(ADJECTIVES), self.pick(NOUNS)).to_lowercase();
        Attributes::from([
            ("name".to_string(), name),
            ("brand".to_string(), brand.to_string()),
            ("price".to_string(), price),
            ("image".to_string(), image),
            ("remark".to_string(), remark),
        ])
        .merge(overrides)
    }
}
