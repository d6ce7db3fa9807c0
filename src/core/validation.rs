use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::currencies::is_known_currency_code;
use super::error::ValidationError;
use super::types::*;

/// Validate a client record. Returns all validation errors found (not
/// just the first).
pub fn validate_client(client: &Client) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if client.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name must not be empty"));
    }

    if client.abbreviation.trim().is_empty() {
        errors.push(ValidationError::new(
            "abbreviation",
            "abbreviation must not be empty — it leads every invoice number",
        ));
    }

    if !is_well_formed_email(&client.invoice_email) {
        errors.push(ValidationError::new(
            "invoice_email",
            format!("'{}' is not a valid email address", client.invoice_email),
        ));
    }

    // cc is optional, but must be well-formed when present
    if !client.cc_email.is_empty() && !is_well_formed_email(&client.cc_email) {
        errors.push(ValidationError::new(
            "cc_email",
            format!("'{}' is not a valid email address", client.cc_email),
        ));
    }

    if client.net_payment < 0 {
        errors.push(ValidationError::new(
            "net_payment",
            "net payment term must not be negative",
        ));
    }

    validate_tax_rate(client.tax_rate, "tax_rate", &mut errors);

    if client.hour_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            "hour_rate",
            "hourly rate must not be negative",
        ));
    }

    validate_account_currency(&client.currency_account, "currency_account", &mut errors);

    errors
}

/// Validate a project record.
pub fn validate_project(project: &Project) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if project.project_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "project_name",
            "project name must not be empty",
        ));
    }

    if project.client_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "client_id",
            "project must reference a client",
        ));
    }

    if project.budget < Decimal::ZERO {
        errors.push(ValidationError::new(
            "budget",
            "budget must not be negative",
        ));
    }

    if project.net_payment < 0 {
        errors.push(ValidationError::new(
            "net_payment",
            "net payment term must not be negative",
        ));
    }

    validate_account_currency(&project.currency_account, "currency_account", &mut errors);

    errors
}

/// Validate an invoice record.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "invoice name must not be empty"));
    }

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "invoice number must not be empty",
        ));
    }

    if invoice.amount < Decimal::ZERO {
        errors.push(ValidationError::new(
            "amount",
            "amount must not be negative",
        ));
    }

    if invoice.discount < Decimal::ZERO {
        errors.push(ValidationError::new(
            "discount",
            "discount must not be negative",
        ));
    }

    validate_tax_rate(invoice.tax_rate, "tax_rate", &mut errors);

    if matches!(invoice.status, InvoiceStatus::Sent | InvoiceStatus::Paid)
        && invoice.send_on.is_none()
    {
        errors.push(ValidationError::new(
            "send_on",
            format!(
                "an invoice in status '{}' must have a send date",
                invoice.status.label()
            ),
        ));
    }

    if invoice.status == InvoiceStatus::Paid && invoice.paid_on.is_none() {
        errors.push(ValidationError::new(
            "paid_on",
            "a paid invoice must have a payment date",
        ));
    }

    errors
}

/// Structural email check matching the console's input validator:
/// local part of word characters and `.+-`, then a dotted domain.
pub fn is_well_formed_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
    {
        return false;
    }

    let Some((host, tail)) = domain.split_once('.') else {
        return false;
    };

    !host.is_empty()
        && !tail.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && tail
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
}

fn validate_tax_rate(rate: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if rate < Decimal::ZERO || rate > dec!(100) {
        errors.push(ValidationError::new(
            field,
            format!("tax rate {rate} must be between 0 and 100"),
        ));
    }
}

fn validate_account_currency(code: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !is_known_currency_code(code) {
        errors.push(ValidationError::new(
            field,
            format!("'{code}' is not a known ISO 4217 currency code"),
        ));
    }
}
