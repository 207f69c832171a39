pub mod advice;
pub mod calculator;
pub mod config;
pub mod error;
pub mod factors;
pub mod global;
pub mod goals;
pub mod history;
pub mod input;
pub mod rounding;

pub use calculator::{compute, compute_with, Breakdown, Category, FootprintResult};
pub use error::{FootprintError, Result};
pub use factors::{Diet, EmissionFactors};
pub use input::{FormInput, RawInput};
