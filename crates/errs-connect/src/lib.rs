//! Connect protocol errors for application errors
//!
//! Converts any error into a [`ConnectError`] whose code is derived from the
//! first [`errs_core::Error`] in the error's source chain. Unlike the gRPC
//! mapping, [`errs_core::Code::Conflict`] becomes [`Code::AlreadyExists`].

#![allow(clippy::must_use_candidate)]

mod code;
mod error;
#[cfg(feature = "axum")]
mod response;

pub use code::Code;
#[cfg(feature = "anyhow")]
pub use error::from_anyhow;
pub use error::{ConnectError, code_for, from_error};
