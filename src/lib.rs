//! # playbill
//!
//! Billing statements for theater invoices: each performance on an invoice
//! is priced by its play's genre, earns loyalty volume credits, and is
//! rendered as one line of a plain-text statement.
//!
//! All monetary values are integer cents (`u64`) — never floating point.
//! Cents are converted to dollars only when a statement is formatted.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use playbill::core::*;
//!
//! let mut plays = HashMap::new();
//! plays.insert("hamlet".to_string(), Play::new("Hamlet", "tragedy"));
//! plays.insert("as-like".to_string(), Play::new("As You Like It", "comedy"));
//!
//! let invoice = InvoiceBuilder::new("BigCo")
//!     .performance("hamlet", 55)
//!     .performance("as-like", 35)
//!     .build_unchecked()
//!     .unwrap();
//!
//! let text = render_statement(&invoice, &plays).unwrap();
//! assert!(text.starts_with("Statement for BigCo\n"));
//! assert!(text.contains("  Hamlet: $650.00 (55 seats)\n"));
//! assert!(text.contains("Amount owed is $1,230.00\n"));
//! assert!(text.ends_with("You earned 37 credits\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Domain types, pricing engine, statement rendering, validation |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
