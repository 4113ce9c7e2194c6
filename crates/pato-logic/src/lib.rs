//! Pure configuration logic for Pato Primordial.
//!
//! This crate contains the wizard's state and derivation rules, independent
//! of any UI framework, network client, or storage backend. Functions take
//! plain data and return results, making them unit-testable and portable
//! across the headless harness and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Static drone model table (serials, attributes, turbo stats) |
//! | [`duck`] | Primordial duck state: measurements, life state, mutation |
//! | [`location`] | Coordinates, landmark lookup sequencing (last-write-wins) |
//! | [`picker`] | Drone selection with catalogue-driven reading reconciliation |
//! | [`setup`] | One-shot assembly of the flat export snapshot |
//! | [`summary`] | Human-readable review projection of a snapshot |
//! | [`units`] | Length/mass conversion to canonical centimetres and grams |

pub mod catalog;
pub mod duck;
pub mod location;
pub mod picker;
pub mod setup;
pub mod summary;
pub mod units;
