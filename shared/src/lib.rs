//! BMI Assistant Shared Library
//!
//! This crate contains the BMI calculation engine and the types shared
//! between the backend and the WASM bindings.

pub mod bmi;
pub mod theme;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use bmi::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;
