//! Core types for Gearbox.
//!
//! This module provides type-safe wrappers for values that arrive as
//! untrusted form input or that carry a range invariant.

pub mod email;
pub mod phone;
pub mod rating;

pub use email::{Email, EmailError};
pub use phone::{Phone, PhoneError};
pub use rating::{Rating, RatingError};
