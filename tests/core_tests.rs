use billable::core::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;

fn client() -> Client {
    ClientBuilder::new("Kamper Media", "KMP")
        .id("cl-1")
        .company("ADAPTIS000000000")
        .legal_name("Kamper Media LLC")
        .representative("Dana Kamper")
        .address("12 Harbor St", "Portland", "OR", "97201", "US")
        .invoice_email("ap@kamper.media")
        .cc_email("dana@kamper.media")
        .currency(Currency::Usd)
        .hour_rate(dec!(95))
        .tax_rate(dec!(10))
        .net_payment(30)
        .payable_to("Adaptis GmbH")
        .build()
        .unwrap()
}

// --- Clients ---

#[test]
fn client_builder_full() {
    let client = client();
    assert_eq!(client.abbreviation, "KMP");
    assert_eq!(client.status, ClientStatus::Active);
    assert_eq!(client.parent_company_id, "ADAPTIS000000000");
    assert_eq!(client.net_payment, 30);
}

#[test]
fn client_builder_collects_all_errors() {
    let err = ClientBuilder::new("", "")
        .invoice_email("not-an-email")
        .net_payment(-1)
        .tax_rate(dec!(150))
        .currency_account("ZZZ")
        .build()
        .unwrap_err();

    let BillingError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("name"));
    assert!(msg.contains("abbreviation"));
    assert!(msg.contains("invoice_email"));
    assert!(msg.contains("net_payment"));
    assert!(msg.contains("tax_rate"));
    assert!(msg.contains("currency_account"));
}

#[test]
fn client_cc_email_is_optional() {
    assert!(
        ClientBuilder::new("Kamper Media", "KMP")
            .invoice_email("ap@kamper.media")
            .build()
            .is_ok()
    );
}

// --- Projects ---

#[test]
fn project_builder_full() {
    let project = ProjectBuilder::new("Website Relaunch", "cl-1")
        .id("prj-1")
        .client_name("Kamper Media")
        .company("ADAPTIS000000000")
        .budget(dec!(24000))
        .currency(Currency::Usd)
        .status(ProjectStatus::Active)
        .po_number("PO-2024-117")
        .net_payment(30)
        .build()
        .unwrap();

    assert_eq!(project.status.label(), "Active - In Production");
    assert!(project.taxable);
}

#[test]
fn project_requires_client_and_name() {
    let err = ProjectBuilder::new("", "")
        .budget(dec!(-5))
        .build()
        .unwrap_err();
    let BillingError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("project_name"));
    assert!(msg.contains("client_id"));
    assert!(msg.contains("budget"));
}

// --- Invoices ---

#[test]
fn invoice_creation_assigns_number_once() {
    let client = client();
    let mut rng = StdRng::seed_from_u64(11);

    let first = InvoiceBuilder::new("Sprint 12", "prj-1")
        .numbered_with(&client.abbreviation, 0, "", &mut rng)
        .amount(dec!(4500))
        .tax_rate(client.tax_rate)
        .build()
        .unwrap();

    assert!(first.number.starts_with("KMP"));
    assert!(first.number.ends_with("001"));

    // The second invoice reuses the prefix the first established.
    let second = InvoiceBuilder::new("Sprint 13", "prj-1")
        .numbered_with(&client.abbreviation, 1, &first.number, &mut rng)
        .amount(dec!(5200))
        .tax_rate(client.tax_rate)
        .build()
        .unwrap();

    assert_eq!(&second.number[..12], &first.number[..12]);
    assert!(second.number.ends_with("002"));

    // An update carries the stored number through unchanged.
    let updated = InvoiceBuilder::new("Sprint 13 (revised)", "prj-1")
        .number(&second.number)
        .amount(dec!(5600))
        .tax_rate(client.tax_rate)
        .build()
        .unwrap();
    assert_eq!(updated.number, second.number);
}

#[test]
fn invoice_without_number_is_a_builder_error() {
    let err = InvoiceBuilder::new("Sprint 12", "prj-1")
        .amount(dec!(4500))
        .build()
        .unwrap_err();
    assert!(matches!(err, BillingError::Builder(_)));
}

#[test]
fn invoice_breakdown_is_tax_inclusive() {
    let invoice = InvoiceBuilder::new("Sprint 12", "prj-1")
        .number("KMP674407360001")
        .amount(dec!(1000))
        .tax_rate(dec!(10))
        .build()
        .unwrap();

    let breakdown = invoice.breakdown();
    assert_eq!(breakdown.tax_amount, dec!(100));
    assert_eq!(breakdown.subtotal, dec!(900));
    assert_eq!(breakdown.grand_total, dec!(1000));
}

#[test]
fn invoice_lifecycle_and_due_date() {
    let mut invoice = InvoiceBuilder::new("Sprint 12", "prj-1")
        .number("KMP674407360001")
        .amount(dec!(4500))
        .build()
        .unwrap();

    // 2024-06-15T00:00:00Z
    invoice
        .mark_sent(StoreTimestamp::new(1_718_409_600, 0))
        .unwrap();
    let due = invoice.due_date(30).unwrap();
    assert_eq!(
        due,
        chrono::NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    );

    invoice
        .mark_paid(StoreTimestamp::new(1_721_088_000, 0), dec!(4500))
        .unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Paid);
}

#[test]
fn paid_invoice_requires_payment_date() {
    let err = InvoiceBuilder::new("Sprint 12", "prj-1")
        .number("KMP674407360001")
        .amount(dec!(4500))
        .status(InvoiceStatus::Paid)
        .send_on(StoreTimestamp::new(1_718_409_600, 0))
        .build()
        .unwrap_err();
    let BillingError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("paid_on"));
}

// --- Documents ---

#[test]
fn documents_round_trip_with_store_labels() {
    let client = client();
    let json = serde_json::to_value(&client).unwrap();
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["status"], "Active");

    let back: Client = serde_json::from_value(json).unwrap();
    assert_eq!(back.abbreviation, client.abbreviation);
    assert_eq!(back.currency, client.currency);

    let project = ProjectBuilder::new("Website Relaunch", "cl-1")
        .status(ProjectStatus::InSale)
        .build()
        .unwrap();
    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["status"], "B - In Sale");

    let mut invoice = InvoiceBuilder::new("Sprint 12", "prj-1")
        .number("KMP674407360001")
        .amount(dec!(4500))
        .build()
        .unwrap();
    invoice
        .mark_sent(StoreTimestamp::new(1_718_409_600, 0))
        .unwrap();
    let json = serde_json::to_value(&invoice).unwrap();
    assert_eq!(json["status"], "Send");
    assert_eq!(json["send_on"]["seconds"], 1_718_409_600i64);

    let back: Invoice = serde_json::from_value(json).unwrap();
    assert_eq!(back.status, InvoiceStatus::Sent);
    assert_eq!(back.amount, invoice.amount);
}
