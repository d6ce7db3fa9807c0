use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakdown::InvoiceBreakdown;
use super::currencies::Currency;
use super::error::BillingError;
use super::schedule;

/// A client of the company — the party invoices are billed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Document identifier.
    pub id: String,
    /// Company this client belongs to.
    pub company_id: String,
    /// Owning company for list/report queries.
    pub parent_company_id: String,
    /// Display name.
    pub name: String,
    /// Registered legal name.
    pub legal_name: String,
    /// Short code used as the leading segment of invoice numbers.
    pub abbreviation: String,
    /// Contact person on the client side.
    pub representative_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub telephone: String,
    /// Address invoices are sent to.
    pub invoice_email: String,
    /// Optional carbon-copy address.
    pub cc_email: String,
    /// Billing currency.
    pub currency: Currency,
    /// Bank account currency (ISO 4217 code).
    pub currency_account: String,
    /// Hourly rate agreed with this client.
    pub hour_rate: Decimal,
    /// Default tax percentage applied to this client's invoices.
    pub tax_rate: Decimal,
    /// Calendar days after send date by which payment is due.
    pub net_payment: i64,
    /// Entity payments are made out to.
    pub payable_to: String,
    pub status: ClientStatus,
}

/// A project carried out for a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    /// Owning company for list/report queries.
    pub parent_company_id: String,
    pub project_name: String,
    pub budget: Decimal,
    pub currency: Currency,
    pub currency_account: String,
    pub status: ProjectStatus,
    pub start_date: String,
    pub delivery_date: String,
    pub estimation_url: String,
    pub po_number: String,
    /// Calendar days after send date by which payment is due.
    pub net_payment: i64,
    pub taxable: bool,
    pub payable_to: String,
}

/// An invoice issued under a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Document identifier.
    pub id: String,
    /// Project this invoice belongs to.
    pub project_id: String,
    /// Composite invoice number: client abbreviation + 9 random digits +
    /// sequence label. Assigned once at creation, never regenerated.
    pub number: String,
    /// Short invoice title shown in lists.
    pub name: String,
    /// Free-text description of the work invoiced.
    pub content: String,
    /// Internal notes.
    pub notes: String,
    /// Invoiced amount. Tax-inclusive: tax is broken out of it, not
    /// added on top.
    pub amount: Decimal,
    /// Discount applied, shown informationally on the document.
    pub discount: Decimal,
    /// Tax percentage backed out of the amount.
    pub tax_rate: Decimal,
    /// Whether this invoice covers a change request.
    pub change_request: bool,
    pub status: InvoiceStatus,
    /// When the invoice was sent to the client.
    pub send_on: Option<StoreTimestamp>,
    /// When payment was received.
    pub paid_on: Option<StoreTimestamp>,
    /// Amount actually received.
    pub paid_amount: Option<Decimal>,
}

impl Invoice {
    /// Financial breakdown of this invoice's own figures.
    pub fn breakdown(&self) -> InvoiceBreakdown {
        InvoiceBreakdown::compute(self.amount, self.discount, self.tax_rate)
    }

    /// Payment due date, `None` while the invoice is unsent.
    pub fn due_date(&self, net_payment_days: i64) -> Option<NaiveDate> {
        self.send_on
            .map(|ts| schedule::due_date(ts.to_date(), net_payment_days))
    }

    /// Mark the invoice as sent, recording the send timestamp.
    pub fn mark_sent(&mut self, at: StoreTimestamp) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Draft => {
                self.status = InvoiceStatus::Sent;
                self.send_on = Some(at);
                Ok(())
            }
            other => Err(BillingError::Status(format!(
                "cannot send an invoice in status '{}'",
                other.label()
            ))),
        }
    }

    /// Mark the invoice as paid, recording the payment timestamp and amount.
    pub fn mark_paid(&mut self, at: StoreTimestamp, amount: Decimal) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Sent => {
                self.status = InvoiceStatus::Paid;
                self.paid_on = Some(at);
                self.paid_amount = Some(amount);
                Ok(())
            }
            other => Err(BillingError::Status(format!(
                "cannot mark an invoice in status '{}' as paid",
                other.label()
            ))),
        }
    }
}

/// A company the signed-in user operates under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// Per-user company grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoles {
    pub user_id: String,
    /// Company ids the user may operate under.
    pub companies: Vec<String>,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    /// Sent to the client, awaiting payment.
    #[serde(rename = "Send")]
    Sent,
    Paid,
}

impl InvoiceStatus {
    /// Status label as stored by the console.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Send",
            Self::Paid => "Paid",
        }
    }

    /// Parse from a stored status label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Draft" => Some(Self::Draft),
            "Send" => Some(Self::Sent),
            "Paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// Client engagement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Project pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// In production.
    #[serde(rename = "Active - In Production")]
    Active,
    /// Still in the sales pipeline.
    #[serde(rename = "B - In Sale")]
    InSale,
    #[serde(rename = "C - Closed")]
    Closed,
    #[serde(rename = "D - Deleted or Lost")]
    Lost,
}

impl ProjectStatus {
    /// Status label as stored by the console.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active - In Production",
            Self::InSale => "B - In Sale",
            Self::Closed => "C - Closed",
            Self::Lost => "D - Deleted or Lost",
        }
    }

    /// Parse from a stored status label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active - In Production" => Some(Self::Active),
            "B - In Sale" => Some(Self::InSale),
            "C - Closed" => Some(Self::Closed),
            "D - Deleted or Lost" => Some(Self::Lost),
            _ => None,
        }
    }
}

/// Server timestamp as stored by the document store: whole seconds since
/// the Unix epoch plus a sub-second nanosecond component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreTimestamp {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl StoreTimestamp {
    pub fn new(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanoseconds: dt.timestamp_subsec_nanos(),
        }
    }

    /// Convert to a UTC datetime by composing milliseconds as
    /// `seconds * 1000 + nanoseconds / 1e6`. Out-of-range values saturate
    /// to the representable bounds.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        let millis = self
            .seconds
            .saturating_mul(1000)
            .saturating_add(i64::from(self.nanoseconds / 1_000_000));
        match Utc.timestamp_millis_opt(millis) {
            LocalResult::Single(dt) => dt,
            _ if millis < 0 => DateTime::<Utc>::MIN_UTC,
            _ => DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Calendar date of the timestamp.
    pub fn to_date(&self) -> NaiveDate {
        self.to_datetime().date_naive()
    }
}
