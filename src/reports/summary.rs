use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{
    Company, Invoice, InvoiceStatus, Project, StoreTimestamp, UserRoles, schedule,
};

/// One row of the per-company invoice report: an invoice together with
/// the project it was issued under.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InvoiceSummary {
    pub project_id: String,
    pub project_name: String,
    pub client_id: String,
    pub client_name: String,
    pub budget: Decimal,
    /// Net-payment term of the project, in calendar days.
    pub net_payment: i64,
    pub invoice_id: String,
    pub invoice_name: String,
    pub number: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub send_on: Option<StoreTimestamp>,
    pub paid_on: Option<StoreTimestamp>,
    pub paid_amount: Option<Decimal>,
}

impl InvoiceSummary {
    /// Payment due date, `None` while unsent.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.send_on
            .map(|ts| schedule::due_date(ts.to_date(), self.net_payment))
    }
}

/// Companies the user may operate under.
pub fn companies_for_user(roles: &UserRoles, companies: &[Company]) -> Vec<Company> {
    companies
        .iter()
        .filter(|company| roles.companies.iter().any(|id| *id == company.id))
        .cloned()
        .collect()
}

/// Join a company's projects with their invoices on project id.
pub fn invoice_summaries(
    projects: &[Project],
    invoices: &[Invoice],
    company_id: &str,
) -> Vec<InvoiceSummary> {
    let mut rows = Vec::new();

    for project in projects
        .iter()
        .filter(|p| p.parent_company_id == company_id)
    {
        for invoice in invoices.iter().filter(|i| i.project_id == project.id) {
            rows.push(InvoiceSummary {
                project_id: project.id.clone(),
                project_name: project.project_name.clone(),
                client_id: project.client_id.clone(),
                client_name: project.client_name.clone(),
                budget: project.budget,
                net_payment: project.net_payment,
                invoice_id: invoice.id.clone(),
                invoice_name: invoice.name.clone(),
                number: invoice.number.clone(),
                amount: invoice.amount,
                status: invoice.status,
                send_on: invoice.send_on,
                paid_on: invoice.paid_on,
                paid_amount: invoice.paid_amount,
            });
        }
    }

    debug!(company_id, rows = rows.len(), "invoice summary computed");
    rows
}

/// Sent, unpaid invoices whose due date has passed.
pub fn overdue_invoices(summaries: &[InvoiceSummary], today: NaiveDate) -> Vec<InvoiceSummary> {
    summaries
        .iter()
        .filter(|row| row.status == InvoiceStatus::Sent)
        .filter(|row| {
            row.due_date()
                .is_some_and(|due| schedule::is_overdue(due, today))
        })
        .cloned()
        .collect()
}

/// Lifetime value of a client: everything paid across the client's
/// projects. Paid invoices missing a recorded payment amount count at
/// their invoiced amount.
pub fn client_lifetime_value(
    client_id: &str,
    projects: &[Project],
    invoices: &[Invoice],
) -> Decimal {
    let mut total = Decimal::ZERO;

    for project in projects.iter().filter(|p| p.client_id == client_id) {
        for invoice in invoices
            .iter()
            .filter(|i| i.project_id == project.id && i.status == InvoiceStatus::Paid)
        {
            total += invoice.paid_amount.unwrap_or(invoice.amount);
        }
    }

    total
}
