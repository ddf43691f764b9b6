//! Thermal fan controller library - testable modules for the fan firmware.
//!
//! This library contains the core control logic that can be tested on the
//! host machine. The binary (`main.rs`) uses this library and adds the
//! embedded-specific code (ADC, PWM, GPIO, and the character LCD driver).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Sensor conversion
pub mod convert;

// Band classification and actuator mapping
pub mod policy;

// Display line rendering
pub mod render;
