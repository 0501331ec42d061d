//! Logical imagery names and the asset-provider seam.
//!
//! The simulation only ever names what an entity looks like; turning that
//! name into pixels, glyphs or anything else is the provider's business.

use std::collections::HashMap;

use crate::entities::{BombSize, Facing};
use crate::error::GameError;

pub const FACINGS: [Facing; 8] = [
    Facing::East,
    Facing::NorthEast,
    Facing::North,
    Facing::NorthWest,
    Facing::West,
    Facing::SouthWest,
    Facing::South,
    Facing::SouthEast,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Imagery {
    Fighter(Facing),
    Shield,
    Alien(u8),
    Boss,
    Bomb(BombSize),
    BossBomb(u8),
    Beam(Facing),
    /// Two-frame explosion, frame 0 or 1.
    Explosion(u8),
    Hazard { variant: u8, frame: u8 },
    PlainItem,
    ShieldItem,
    CureFlash,
}

impl Imagery {
    /// Every name the simulation can ask for.
    pub fn catalog() -> Vec<Imagery> {
        let mut all = Vec::new();
        all.extend(FACINGS.iter().map(|&f| Imagery::Fighter(f)));
        all.extend(FACINGS.iter().map(|&f| Imagery::Beam(f)));
        all.push(Imagery::Shield);
        all.extend((0..crate::constants::ENEMY_VARIANTS).map(Imagery::Alien));
        all.push(Imagery::Boss);
        all.extend([BombSize::Large, BombSize::Small, BombSize::Medium].map(Imagery::Bomb));
        all.extend((0..crate::constants::BOSS_BOMB_HUES).map(Imagery::BossBomb));
        all.extend((0..2).map(Imagery::Explosion));
        for variant in 0..crate::constants::HAZARD_VARIANTS {
            for frame in 0..2 {
                all.push(Imagery::Hazard { variant, frame });
            }
        }
        all.extend([Imagery::PlainItem, Imagery::ShieldItem, Imagery::CureFlash]);
        all
    }
}

pub trait AssetProvider {
    type Asset;

    fn fetch(&self, imagery: Imagery) -> Result<&Self::Asset, GameError>;
}

/// Table-backed provider; fill it at startup and hand it to the surface.
#[derive(Clone, Debug)]
pub struct AssetTable<A> {
    assets: HashMap<Imagery, A>,
}

impl<A> Default for AssetTable<A> {
    fn default() -> Self {
        Self { assets: HashMap::new() }
    }
}

impl<A> AssetTable<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table covering the whole catalog.
    pub fn from_fn(mut make: impl FnMut(Imagery) -> A) -> Self {
        let assets = Imagery::catalog().into_iter().map(|i| (i, make(i))).collect();
        Self { assets }
    }

    pub fn insert(&mut self, imagery: Imagery, asset: A) {
        self.assets.insert(imagery, asset);
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<A> AssetProvider for AssetTable<A> {
    type Asset = A;

    fn fetch(&self, imagery: Imagery) -> Result<&A, GameError> {
        self.assets.get(&imagery).ok_or_else(|| GameError::AssetMissing {
            name: format!("{imagery:?}"),
        })
    }
}
