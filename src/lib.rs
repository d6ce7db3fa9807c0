//! # billable
//!
//! Billing and project-tracking core for services companies: clients,
//! projects, and invoices, with invoice-number generation, tax-inclusive
//! totals, due-date scheduling, en-US display formatting, form-field
//! state, and reporting joins.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Persistence, authentication, realtime updates, printing, and email are
//! external collaborators; every function here is synchronous and pure.
//!
//! ## Quick Start
//!
//! ```rust
//! use billable::core::*;
//! use rust_decimal_macros::dec;
//!
//! // First invoice for a client: abbreviation + 9 random digits + "001".
//! let mut generator = InvoiceNumberGenerator::new();
//! let number = generator.generate("KMP", 0, "");
//! assert!(number.starts_with("KMP"));
//! assert_eq!(number.len(), "KMP".len() + 9 + 3);
//!
//! // Subsequent invoices reuse the 12-character prefix.
//! let next = generator.generate("KMP", 1, &number);
//! assert_eq!(&next[..12], &number[..12]);
//! assert!(next.ends_with("002"));
//!
//! // Tax is a breakdown of the invoiced amount, not an addition to it.
//! let breakdown = InvoiceBreakdown::compute(dec!(1000), dec!(0), dec!(10));
//! assert_eq!(breakdown.tax_amount, dec!(100));
//! assert_eq!(breakdown.subtotal, dec!(900));
//! assert_eq!(breakdown.grand_total, dec!(1000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Client/project/invoice types, builders, numbering, totals, scheduling, validation |
//! | `format` | en-US number, currency, and store-timestamp rendering |
//! | `forms` | Generic form-field state machine and input validators |
//! | `reports` | Session state, summary joins, overdue and lifetime-value reports |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "forms")]
pub mod forms;

#[cfg(feature = "reports")]
pub mod reports;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
