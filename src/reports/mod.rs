//! Session state and reporting joins.
//!
//! The console's reports are in-memory joins over the document
//! collections: projects and invoices matched on project id, scoped to
//! the selected company. Session state (signed-in user, selected
//! company, modal visibility) is an explicit value passed down to
//! whatever needs it — there is no ambient global.

mod session;
mod summary;

pub use session::Session;
pub use summary::{
    InvoiceSummary, client_lifetime_value, companies_for_user, invoice_summaries,
    overdue_invoices,
};
