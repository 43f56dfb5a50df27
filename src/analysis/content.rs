//! Randomized challenge and bonus lines
//!
//! The randomness source is owned by the provider so sessions can be seeded
//! for reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CHALLENGES: [&str; 5] = [
    "🧩 Trouvez un anagramme du mot le plus long !",
    "🔄 Inversez l'ordre des syllabes du mot le plus court.",
    "📝 Écrivez une phrase avec tous les mots commençant par la même lettre.",
    "🎭 Transformez votre texte en charade !",
    "🔠 Réécrivez votre phrase en utilisant uniquement des mots de 4 lettres.",
];

pub const BONUSES: [&str; 5] = [
    "🌈 Votre créativité linguistique est votre plus grand atout !",
    "🚀 Chaque mot est une aventure, chaque phrase un voyage !",
    "🧠 Le langage est un puzzle, et vous en êtes le maître !",
    "✨ Votre imagination transforme les mots en magie !",
    "🎨 La langue est votre terrain de jeu créatif !",
];

/// Which fixed pool to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPool {
    Challenges,
    Bonuses,
}

impl ContentPool {
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            ContentPool::Challenges => &CHALLENGES,
            ContentPool::Bonuses => &BONUSES,
        }
    }
}

/// Uniform picker over the content pools
#[derive(Debug, Clone)]
pub struct ContentProvider<R = StdRng> {
    rng: R,
}

impl<R: Rng> ContentProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick(&mut self, pool: ContentPool) -> &'static str {
        let entries = pool.entries();
        entries[self.rng.gen_range(0..entries.len())]
    }
}

impl ContentProvider<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
