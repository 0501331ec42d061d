//! Simulation core of a single-player arcade shooter: a fighter dodges
//! descending enemies, bombs and hazard balls, fires beams, picks up items
//! and takes on a boss.
//!
//! The core never touches a terminal, a window or the wall clock.  Those are
//! collaborators behind the traits in [`game`] and [`assets`].

pub mod assets;
pub mod combat;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod movement;
pub mod player;
pub mod spawn;
