//! Gearbox Core - Shared types library.
//!
//! This crate provides everything the Gearbox Auto Repair components share:
//! - `site` - Public marketing site (axum + askama)
//! - `cli` - Content checks and catalog export
//!
//! # Architecture
//!
//! The core crate contains only types, static data and pure logic - no I/O,
//! no HTTP, no filesystem access. Anything that needs the clock takes the
//! current date or elapsed time as an argument.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for emails, phone numbers and ratings
//! - [`catalog`] - Service, testimonial, hero slide and business records
//! - [`forms`] - Contact and appointment form validation
//! - [`carousel`] - Slide rotation state machine
//! - [`image`] - Primary/fallback/placeholder image state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod catalog;
pub mod forms;
pub mod image;
pub mod types;

pub use carousel::Carousel;
pub use catalog::{CategoryFilter, HeroSlide, Service, ServiceCategory, SiteProfile, Testimonial};
pub use image::{ImageFallback, ImageState};
pub use types::*;
