use rand::Rng;
use rust_decimal::Decimal;

use super::currencies::Currency;
use super::error::BillingError;
use super::numbering;
use super::types::*;
use super::validation;

/// Builder for client records.
///
/// ```
/// use billable::core::*;
/// use rust_decimal_macros::dec;
///
/// let client = ClientBuilder::new("Kamper Media", "KMP")
///     .legal_name("Kamper Media LLC")
///     .invoice_email("billing@kamper.media")
///     .currency(Currency::Usd)
///     .hour_rate(dec!(95))
///     .tax_rate(dec!(10))
///     .net_payment(30)
///     .build()
///     .unwrap();
///
/// assert_eq!(client.abbreviation, "KMP");
/// ```
pub struct ClientBuilder {
    id: String,
    company_id: String,
    parent_company_id: String,
    name: String,
    legal_name: String,
    abbreviation: String,
    representative_name: String,
    address: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
    telephone: String,
    invoice_email: String,
    cc_email: String,
    currency: Currency,
    currency_account: String,
    hour_rate: Decimal,
    tax_rate: Decimal,
    net_payment: i64,
    payable_to: String,
    status: ClientStatus,
}

impl ClientBuilder {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            company_id: String::new(),
            parent_company_id: String::new(),
            name: name.into(),
            legal_name: String::new(),
            abbreviation: abbreviation.into(),
            representative_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: String::new(),
            telephone: String::new(),
            invoice_email: String::new(),
            cc_email: String::new(),
            currency: Currency::Usd,
            currency_account: "USD".to_string(),
            hour_rate: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            net_payment: 30,
            payable_to: String::new(),
            status: ClientStatus::Active,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn company(mut self, company_id: impl Into<String>) -> Self {
        let company_id = company_id.into();
        self.parent_company_id = company_id.clone();
        self.company_id = company_id;
        self
    }

    pub fn legal_name(mut self, name: impl Into<String>) -> Self {
        self.legal_name = name.into();
        self
    }

    pub fn representative(mut self, name: impl Into<String>) -> Self {
        self.representative_name = name.into();
        self
    }

    pub fn address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.state = state.into();
        self.zip_code = zip_code.into();
        self.country = country.into();
        self
    }

    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    pub fn invoice_email(mut self, email: impl Into<String>) -> Self {
        self.invoice_email = email.into();
        self
    }

    pub fn cc_email(mut self, email: impl Into<String>) -> Self {
        self.cc_email = email.into();
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency_account(mut self, code: impl Into<String>) -> Self {
        self.currency_account = code.into();
        self
    }

    pub fn hour_rate(mut self, rate: Decimal) -> Self {
        self.hour_rate = rate;
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn net_payment(mut self, days: i64) -> Self {
        self.net_payment = days;
        self
    }

    pub fn payable_to(mut self, name: impl Into<String>) -> Self {
        self.payable_to = name.into();
        self
    }

    pub fn status(mut self, status: ClientStatus) -> Self {
        self.status = status;
        self
    }

    /// Build the client, running record validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Client, BillingError> {
        let client = self.assemble();
        collapse(validation::validate_client(&client))?;
        Ok(client)
    }

    /// Build without validation — useful for testing or importing
    /// external data.
    pub fn build_unchecked(self) -> Client {
        self.assemble()
    }

    fn assemble(self) -> Client {
        Client {
            id: self.id,
            company_id: self.company_id,
            parent_company_id: self.parent_company_id,
            name: self.name,
            legal_name: self.legal_name,
            abbreviation: self.abbreviation,
            representative_name: self.representative_name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            telephone: self.telephone,
            invoice_email: self.invoice_email,
            cc_email: self.cc_email,
            currency: self.currency,
            currency_account: self.currency_account,
            hour_rate: self.hour_rate,
            tax_rate: self.tax_rate,
            net_payment: self.net_payment,
            payable_to: self.payable_to,
            status: self.status,
        }
    }
}

/// Builder for project records.
pub struct ProjectBuilder {
    id: String,
    client_id: String,
    client_name: String,
    parent_company_id: String,
    project_name: String,
    budget: Decimal,
    currency: Currency,
    currency_account: String,
    status: ProjectStatus,
    start_date: String,
    delivery_date: String,
    estimation_url: String,
    po_number: String,
    net_payment: i64,
    taxable: bool,
    payable_to: String,
}

impl ProjectBuilder {
    pub fn new(project_name: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            client_id: client_id.into(),
            client_name: String::new(),
            parent_company_id: String::new(),
            project_name: project_name.into(),
            budget: Decimal::ZERO,
            currency: Currency::Usd,
            currency_account: "USD".to_string(),
            status: ProjectStatus::Active,
            start_date: String::new(),
            delivery_date: String::new(),
            estimation_url: String::new(),
            po_number: String::new(),
            net_payment: 30,
            taxable: true,
            payable_to: String::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    pub fn company(mut self, company_id: impl Into<String>) -> Self {
        self.parent_company_id = company_id.into();
        self
    }

    pub fn budget(mut self, budget: Decimal) -> Self {
        self.budget = budget;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency_account(mut self, code: impl Into<String>) -> Self {
        self.currency_account = code.into();
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = date.into();
        self
    }

    pub fn delivery_date(mut self, date: impl Into<String>) -> Self {
        self.delivery_date = date.into();
        self
    }

    pub fn estimation_url(mut self, url: impl Into<String>) -> Self {
        self.estimation_url = url.into();
        self
    }

    pub fn po_number(mut self, number: impl Into<String>) -> Self {
        self.po_number = number.into();
        self
    }

    pub fn net_payment(mut self, days: i64) -> Self {
        self.net_payment = days;
        self
    }

    pub fn taxable(mut self, taxable: bool) -> Self {
        self.taxable = taxable;
        self
    }

    pub fn payable_to(mut self, name: impl Into<String>) -> Self {
        self.payable_to = name.into();
        self
    }

    /// Build the project, running record validation.
    pub fn build(self) -> Result<Project, BillingError> {
        let project = self.assemble();
        collapse(validation::validate_project(&project))?;
        Ok(project)
    }

    pub fn build_unchecked(self) -> Project {
        self.assemble()
    }

    fn assemble(self) -> Project {
        Project {
            id: self.id,
            client_id: self.client_id,
            client_name: self.client_name,
            parent_company_id: self.parent_company_id,
            project_name: self.project_name,
            budget: self.budget,
            currency: self.currency,
            currency_account: self.currency_account,
            status: self.status,
            start_date: self.start_date,
            delivery_date: self.delivery_date,
            estimation_url: self.estimation_url,
            po_number: self.po_number,
            net_payment: self.net_payment,
            taxable: self.taxable,
            payable_to: self.payable_to,
        }
    }
}

/// Builder for invoice records.
///
/// The invoice number is assigned exactly once: either carried through
/// from an existing record with [`number`](Self::number) on update paths,
/// or generated at creation with [`numbered_with`](Self::numbered_with).
pub struct InvoiceBuilder {
    id: String,
    project_id: String,
    number: Option<String>,
    name: String,
    content: String,
    notes: String,
    amount: Decimal,
    discount: Decimal,
    tax_rate: Decimal,
    change_request: bool,
    status: InvoiceStatus,
    send_on: Option<StoreTimestamp>,
    paid_on: Option<StoreTimestamp>,
    paid_amount: Option<Decimal>,
}

impl InvoiceBuilder {
    pub fn new(name: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            project_id: project_id.into(),
            number: None,
            name: name.into(),
            content: String::new(),
            notes: String::new(),
            amount: Decimal::ZERO,
            discount: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            change_request: false,
            status: InvoiceStatus::Draft,
            send_on: None,
            paid_on: None,
            paid_amount: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Carry through an already-assigned invoice number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Generate the invoice number from the client abbreviation, the
    /// count of invoices already created for the client, and the latest
    /// existing number (whose prefix is reused from the second invoice
    /// on).
    pub fn numbered_with<R: Rng>(
        mut self,
        abbreviation: &str,
        count: u64,
        existing: &str,
        rng: &mut R,
    ) -> Self {
        self.number = Some(numbering::generate_invoice_number(
            abbreviation,
            count,
            existing,
            rng,
        ));
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn change_request(mut self, change_request: bool) -> Self {
        self.change_request = change_request;
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn send_on(mut self, at: StoreTimestamp) -> Self {
        self.send_on = Some(at);
        self
    }

    pub fn paid(mut self, at: StoreTimestamp, amount: Decimal) -> Self {
        self.paid_on = Some(at);
        self.paid_amount = Some(amount);
        self
    }

    /// Build the invoice, running record validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, BillingError> {
        if self.number.is_none() {
            return Err(BillingError::Builder(
                "invoice number is required — set it or generate one with numbered_with".into(),
            ));
        }

        let invoice = self.assemble();
        collapse(validation::validate_invoice(&invoice))?;
        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing
    /// external data.
    pub fn build_unchecked(self) -> Invoice {
        self.assemble()
    }

    fn assemble(self) -> Invoice {
        Invoice {
            id: self.id,
            project_id: self.project_id,
            number: self.number.unwrap_or_default(),
            name: self.name,
            content: self.content,
            notes: self.notes,
            amount: self.amount,
            discount: self.discount,
            tax_rate: self.tax_rate,
            change_request: self.change_request,
            status: self.status,
            send_on: self.send_on,
            paid_on: self.paid_on,
            paid_amount: self.paid_amount,
        }
    }
}

fn collapse(errors: Vec<super::error::ValidationError>) -> Result<(), BillingError> {
    if errors.is_empty() {
        return Ok(());
    }

    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(BillingError::Validation(msg))
}
