//! Fixed, read-only collections of canned content.
//!
//! A [`Catalog`] never changes after construction, so any number of requests
//! can read it concurrently. Randomness is injected through [`RandomSource`].

use rand::Rng;
use std::{
    fmt::Debug,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};
use thiserror::Error;

use crate::model::{ArtPiece, Quote};

/// Picks an index in `0..len`. `len` is always at least 1.
pub trait RandomSource: Send + Sync + Debug {
    fn index(&self, len: usize) -> usize;
}

/// Uniform selection from the calling thread's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic round-robin source, for tests.
#[derive(Debug, Default)]
pub struct Sequence {
    next: AtomicUsize,
}

impl Sequence {
    pub fn starting_at(start: usize) -> Self {
        Self { next: AtomicUsize::new(start) }
    }
}

impl RandomSource for Sequence {
    fn index(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}

#[derive(Debug, Error)]
#[error("catalog must contain at least one entry")]
pub struct EmptyCatalog;

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Arc<[T]>,
    random: Arc<dyn RandomSource>,
}

impl<T> Catalog<T> {
    pub fn new(items: Vec<T>, random: Arc<dyn RandomSource>) -> Result<Self, EmptyCatalog> {
        if items.is_empty() {
            return Err(EmptyCatalog);
        }
        Ok(Self { items: items.into(), random })
    }

    /// Uniformly random entry.
    pub fn pick_random(&self) -> &T {
        if self.items.len() == 1 {
            return &self.items[0];
        }
        let idx = self.random.index(self.items.len());
        // a misbehaving source must not panic the request
        &self.items[idx % self.items.len()]
    }

    /// The first (for single-entry catalogs, the only) entry.
    pub fn get(&self) -> &T {
        &self.items[0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

const QUOTES: &[(&str, &str)] = &[
    ("Life is what happens when you're busy making other plans.", "John Lennon"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("Your time is limited, so don't waste it living someone else's life.", "Steve Jobs"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("The purpose of our lives is to be happy.", "Dalai Lama"),
    ("Get busy living or get busy dying.", "Stephen King"),
    ("You only live once, but if you do it right, once is enough.", "Mae West"),
    (
        "Many of life's failures are people who did not realize how close they were to success when they gave up.",
        "Thomas A. Edison",
    ),
    ("The secret of success is to do the common thing uncommonly well.", "John D. Rockefeller Jr."),
    ("The best time to plant a tree was 20 years ago. The second best time is now.", "Chinese Proverb"),
];

const M_PATTERN: &str = "\
MM       MM
MMM     MMM
MMMM   MMMM
MM MM MM MM
MM  MMM  MM
MM   M   MM
MM       MM
MM       MM
";

/// The built-in quote catalog.
pub fn quotes(random: Arc<dyn RandomSource>) -> Result<Catalog<Quote>, EmptyCatalog> {
    let items = QUOTES
        .iter()
        .map(|(text, author)| Quote { text: (*text).to_string(), author: (*author).to_string() })
        .collect();
    Catalog::new(items, random)
}

/// The built-in art catalog.
pub fn art(random: Arc<dyn RandomSource>) -> Result<Catalog<ArtPiece>, EmptyCatalog> {
    let items =
        vec![ArtPiece { title: "M Pattern".to_string(), content: M_PATTERN.to_string() }];
    Catalog::new(items, random)
}
