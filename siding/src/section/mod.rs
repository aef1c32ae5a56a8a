//! Section simulation: trains, signals, diversion arcs and the
//! mutual-exclusion guard over the shared single track.

pub mod signals;
pub mod train;
pub mod diversion;
pub mod guard;
pub mod engine;
