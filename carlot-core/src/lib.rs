// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Carlot Core
//!
//! Core capabilities, models, and the factory client for Carlot.
//!
//! This crate provides the abstractions every brand family is written
//! against:
//!
//! - Capability traits for the two products and the factory that makes them
//! - Domain models (brands, prices)
//! - Error types
//! - The [`Client`], which only ever sees the capability traits
//!
//! ## Key Types
//!
//! ### Capabilities
//! - [`SportsCar`] - A product exposing a price
//! - [`FamilyCar`] - A product exposing a price and an upgrade quote
//! - [`CarFactory`] - Produces one matched pair of products
//!
//! ### Models
//! - [`Brand`] - Enum of all supported brand families
//! - [`Price`] - Exact monetary amount in cents
//!
//! ### Client
//! - [`Client`] - Runs against any factory
//! - [`ClientReport`] - What a client run observed

pub mod client;
pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{Brand, Price};

// Re-export traits
pub use traits::{upgrade_message, CarFactory, FamilyCar, SportsCar};

// Re-export the client
pub use client::{Client, ClientReport};
