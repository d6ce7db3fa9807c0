#![cfg(feature = "reports")]

use billable::core::*;
use billable::reports::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

const COMPANY: &str = "ADAPTIS000000000";

fn project(id: &str, client_id: &str, name: &str, net_payment: i64) -> Project {
    ProjectBuilder::new(name, client_id)
        .id(id)
        .client_name("Kamper Media")
        .company(COMPANY)
        .budget(dec!(24000))
        .net_payment(net_payment)
        .build()
        .unwrap()
}

fn invoice(id: &str, project_id: &str, amount: rust_decimal::Decimal) -> Invoice {
    InvoiceBuilder::new(id, project_id)
        .id(id)
        .number("KMP674407360001")
        .amount(amount)
        .build()
        .unwrap()
}

fn sent(mut invoice: Invoice, seconds: i64) -> Invoice {
    invoice.mark_sent(StoreTimestamp::new(seconds, 0)).unwrap();
    invoice
}

fn paid(invoice: Invoice, seconds: i64, amount: rust_decimal::Decimal) -> Invoice {
    let mut invoice = sent(invoice, seconds);
    invoice
        .mark_paid(StoreTimestamp::new(seconds + 86_400, 0), amount)
        .unwrap();
    invoice
}

// --- Company membership ---

#[test]
fn companies_follow_user_grants() {
    let companies = vec![
        Company {
            id: COMPANY.into(),
            name: "Adaptis GmbH".into(),
        },
        Company {
            id: "OTHER000000000".into(),
            name: "Other Co".into(),
        },
    ];
    let roles = UserRoles {
        user_id: "user-1".into(),
        companies: vec![COMPANY.into()],
    };

    let visible = companies_for_user(&roles, &companies);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Adaptis GmbH");
}

// --- Summary join ---

#[test]
fn summaries_join_projects_and_invoices() {
    let projects = vec![
        project("prj-1", "cl-1", "Website Relaunch", 30),
        project("prj-2", "cl-1", "Brand Refresh", 14),
    ];
    let invoices = vec![
        invoice("inv-1", "prj-1", dec!(4500)),
        invoice("inv-2", "prj-1", dec!(5200)),
        invoice("inv-3", "prj-2", dec!(1200)),
        invoice("inv-4", "prj-404", dec!(999)),
    ];

    let rows = invoice_summaries(&projects, &invoices, COMPANY);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.client_id == "cl-1"));
    assert!(rows.iter().any(|r| r.invoice_id == "inv-3"));
    // The orphaned invoice has no project row to join with.
    assert!(rows.iter().all(|r| r.invoice_id != "inv-4"));
}

#[test]
fn summaries_are_scoped_to_the_company() {
    let mut foreign = project("prj-9", "cl-9", "Foreign", 30);
    foreign.parent_company_id = "OTHER000000000".into();

    let projects = vec![project("prj-1", "cl-1", "Website Relaunch", 30), foreign];
    let invoices = vec![
        invoice("inv-1", "prj-1", dec!(4500)),
        invoice("inv-9", "prj-9", dec!(777)),
    ];

    let rows = invoice_summaries(&projects, &invoices, COMPANY);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].invoice_id, "inv-1");
}

// --- Overdue report ---

#[test]
fn overdue_needs_sent_unpaid_and_past_due() {
    let projects = vec![project("prj-1", "cl-1", "Website Relaunch", 30)];

    // 2024-06-15T00:00:00Z; net 30 puts the due date at 2024-07-15.
    let sent_at = 1_718_409_600;
    let invoices = vec![
        invoice("draft", "prj-1", dec!(100)),
        sent(invoice("open", "prj-1", dec!(200)), sent_at),
        paid(invoice("settled", "prj-1", dec!(300)), sent_at, dec!(300)),
    ];

    let rows = invoice_summaries(&projects, &invoices, COMPANY);

    let before_due = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
    assert!(overdue_invoices(&rows, before_due).is_empty());

    let after_due = NaiveDate::from_ymd_opt(2024, 7, 16).unwrap();
    let overdue = overdue_invoices(&rows, after_due);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].invoice_id, "open");
    assert_eq!(overdue[0].due_date(), Some(before_due));
}

// --- Client lifetime value ---

#[test]
fn lifetime_value_sums_paid_invoices_across_projects() {
    let projects = vec![
        project("prj-1", "cl-1", "Website Relaunch", 30),
        project("prj-2", "cl-1", "Brand Refresh", 14),
        project("prj-3", "cl-2", "Other Client Work", 30),
    ];
    let sent_at = 1_718_409_600;
    let invoices = vec![
        paid(invoice("inv-1", "prj-1", dec!(4500)), sent_at, dec!(4500)),
        paid(invoice("inv-2", "prj-2", dec!(1200)), sent_at, dec!(1000)),
        sent(invoice("inv-3", "prj-1", dec!(5200)), sent_at),
        paid(invoice("inv-4", "prj-3", dec!(9999)), sent_at, dec!(9999)),
    ];

    // Partial payments count at what was actually received.
    assert_eq!(
        client_lifetime_value("cl-1", &projects, &invoices),
        dec!(5500)
    );
    assert_eq!(
        client_lifetime_value("cl-2", &projects, &invoices),
        dec!(9999)
    );
    assert_eq!(
        client_lifetime_value("cl-404", &projects, &invoices),
        dec!(0)
    );
}

// --- Session ---

#[test]
fn session_is_explicit_state() {
    let mut session = Session::new();
    session.sign_in("user-1");
    session.select_company(COMPANY);

    // Report scope comes straight from the session value.
    let projects = vec![project("prj-1", "cl-1", "Website Relaunch", 30)];
    let invoices = vec![invoice("inv-1", "prj-1", dec!(4500))];
    let rows = invoice_summaries(&projects, &invoices, session.company_id().unwrap());
    assert_eq!(rows.len(), 1);

    session.sign_out();
    assert_eq!(session.company_id(), None);
}
