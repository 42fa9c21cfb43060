//! Shared test utilities for the Leitstand UI workspace.
//!
//! This crate provides a standardised UI root fixture so crate test suites
//! do not each hand-roll directory layouts. It is a dev-dependency only and
//! never published.
//!
//! # Modules
//!
//! - [`ui`]: [`TestUi`] builder writing module descriptors, contributions,
//!   the main menu and settings into a temporary root

pub mod ui;

pub use ui::TestUi;
