//! Core billing types, pricing, and statement rendering.
//!
//! The pricing engine ([`PricingRules`]) has no dependencies; the statement
//! renderer ([`Statement`], [`render_statement`]) drives it once per
//! performance and accumulates the totals in the same pass.

mod builder;
pub mod currency;
mod error;
mod pricing;
mod statement;
mod types;
mod validation;

pub use builder::*;
pub use currency::format_usd;
pub use error::*;
pub use pricing::*;
pub use statement::*;
pub use types::*;
pub use validation::*;
