//! Per-report assembly: maps aggregation output into renderer-agnostic
//! document sections and flat spreadsheet rows.

use crate::formatting::{format_currency, format_date};
use crate::records::SchoolInfo;
use crate::render::{Document, DocumentHeader, Sheet, SheetRow, TableSection};
use crate::report::{
    ExpenseReport, FeeCollectionReport, IncomeStatement, OutstandingReport, ReceiptDetails,
    ReportFilters, StudentBalancesReport,
};

/// Builds the fixed header block shared by every document.
pub fn document_header(info: &SchoolInfo, generated_on: &str) -> DocumentHeader {
    DocumentHeader {
        school_name: info.school_name.clone(),
        address: info.address.clone(),
        phone_line: info.phone_line(),
        generated_on: format!("Generated on: {generated_on}"),
    }
}

/// `"Term 1, 2024"`, prefixed with the class level when one is filtered.
pub fn scope_label(filters: &ReportFilters) -> String {
    if filters.all_classes() {
        format!("Term {}, {}", filters.term, filters.year)
    } else {
        format!("{} - Term {}, {}", filters.class_level, filters.term, filters.year)
    }
}

/// `"<from> to <to>"` with absent bounds shown as `all`.
pub fn date_range_label(filters: &ReportFilters) -> String {
    format!(
        "{} to {}",
        filters.date_from.as_deref().unwrap_or("all"),
        filters.date_to.as_deref().unwrap_or("all")
    )
}

// ---------------------------------------------------------------------------
// Fee collection

pub fn fee_collection_document(
    report: &FeeCollectionReport,
    filters: &ReportFilters,
    info: &SchoolInfo,
    generated_on: &str,
) -> Document {
    let head = vec![
        "Date".into(),
        "Student".into(),
        "Class".into(),
        "Amount Due".into(),
        "Amount Paid".into(),
        "Status".into(),
        "Method".into(),
    ];
    let mut sections: Vec<TableSection> = report
        .groups
        .iter()
        .map(|group| TableSection {
            title: group.fee_type.clone(),
            head: head.clone(),
            body: group
                .rows
                .iter()
                .map(|row| {
                    vec![
                        format_date(&row.payment_date),
                        row.student_name.clone(),
                        row.class_level.clone(),
                        format_currency(row.due),
                        format_currency(row.paid),
                        row.status.clone(),
                        row.method.clone(),
                    ]
                })
                .collect(),
            subtotal: Some(vec![
                "SUBTOTAL".into(),
                String::new(),
                String::new(),
                format_currency(group.due),
                format_currency(group.paid),
                String::new(),
                String::new(),
            ]),
        })
        .collect();

    sections.push(totals_section(vec![
        ("TOTAL DUE", format_currency(report.total_due)),
        ("TOTAL PAID", format_currency(report.total_paid)),
        ("BALANCE", format_currency(report.total_balance())),
    ]));

    Document {
        title: format!("Fee Collection Report - {}", scope_label(filters)),
        header: document_header(info, generated_on),
        sections,
    }
}

pub fn fee_collection_sheets(report: &FeeCollectionReport) -> Vec<Sheet> {
    let rows = report
        .groups
        .iter()
        .flat_map(|group| {
            group.rows.iter().map(|row| {
                SheetRow::new()
                    .col("Fee Type", group.fee_type.clone())
                    .col("Date", row.payment_date.clone())
                    .col("Student", row.student_name.clone())
                    .col("Class", row.class_level.clone())
                    .col("Amount Due", row.due)
                    .col("Amount Paid", row.paid)
                    .col("Status", row.status.clone())
                    .col("Method", row.method.clone())
            })
        })
        .collect();
    vec![Sheet {
        name: "Fee Collection".into(),
        rows,
    }]
}

// ---------------------------------------------------------------------------
// Expense report

pub fn expense_document(
    report: &ExpenseReport,
    filters: &ReportFilters,
    info: &SchoolInfo,
    generated_on: &str,
) -> Document {
    let head = vec![
        "Date".into(),
        "Description".into(),
        "Vendor".into(),
        "Receipt #".into(),
        "Amount".into(),
    ];
    let mut sections: Vec<TableSection> = report
        .groups
        .iter()
        .map(|group| TableSection {
            title: group.category.clone(),
            head: head.clone(),
            body: group
                .rows
                .iter()
                .map(|row| {
                    vec![
                        format_date(&row.expense_date),
                        row.description.clone(),
                        row.vendor_name.clone(),
                        row.receipt_number.clone(),
                        format_currency(row.amount),
                    ]
                })
                .collect(),
            subtotal: Some(vec![
                "SUBTOTAL".into(),
                String::new(),
                String::new(),
                String::new(),
                format_currency(group.total),
            ]),
        })
        .collect();

    sections.push(totals_section(vec![(
        "GRAND TOTAL",
        format_currency(report.grand_total),
    )]));

    Document {
        title: format!("Expense Report - {}", date_range_label(filters)),
        header: document_header(info, generated_on),
        sections,
    }
}

pub fn expense_sheets(report: &ExpenseReport) -> Vec<Sheet> {
    let rows = report
        .groups
        .iter()
        .flat_map(|group| {
            group.rows.iter().map(|row| {
                SheetRow::new()
                    .col("Category", group.category.clone())
                    .col("Date", row.expense_date.clone())
                    .col("Description", row.description.clone())
                    .col("Vendor", row.vendor_name.clone())
                    .col("Receipt #", row.receipt_number.clone())
                    .col("Amount", row.amount)
            })
        })
        .collect();
    vec![Sheet {
        name: "Expenses".into(),
        rows,
    }]
}

// ---------------------------------------------------------------------------
// Income statement

pub fn income_statement_document(
    statement: &IncomeStatement,
    filters: &ReportFilters,
    info: &SchoolInfo,
    generated_on: &str,
) -> Document {
    let mut revenue_body: Vec<Vec<String>> = statement
        .revenue
        .iter()
        .map(|line| vec![line.label.clone(), format_currency(line.amount)])
        .collect();
    revenue_body.push(vec![
        "TOTAL REVENUE".into(),
        format_currency(statement.total_revenue),
    ]);

    let mut expense_body: Vec<Vec<String>> = statement
        .expenses
        .iter()
        .map(|line| vec![line.label.clone(), format_currency(line.amount)])
        .collect();
    expense_body.push(vec![
        "TOTAL EXPENSES".into(),
        format_currency(statement.total_expenses),
    ]);

    let net_label = if statement.is_surplus() {
        "Surplus"
    } else {
        "Deficit"
    };

    Document {
        title: format!("Income Statement - {}", scope_label(filters)),
        header: document_header(info, generated_on),
        sections: vec![
            TableSection {
                title: "Revenue".into(),
                head: vec!["Fee Type".into(), "Amount".into()],
                body: revenue_body,
                subtotal: None,
            },
            TableSection {
                title: "Expenses".into(),
                head: vec!["Category".into(), "Amount".into()],
                body: expense_body,
                subtotal: None,
            },
            TableSection {
                title: String::new(),
                head: vec![],
                body: vec![vec![
                    "NET INCOME".into(),
                    format_currency(statement.net_income()),
                    net_label.into(),
                ]],
                subtotal: None,
            },
        ],
    }
}

pub fn income_statement_sheets(statement: &IncomeStatement) -> Vec<Sheet> {
    let mut rows = Vec::new();
    for line in &statement.revenue {
        rows.push(income_row("Revenue", &line.label, line.amount));
    }
    rows.push(income_row(
        "Revenue",
        "TOTAL REVENUE",
        statement.total_revenue,
    ));
    for line in &statement.expenses {
        rows.push(income_row("Expenses", &line.label, line.amount));
    }
    rows.push(income_row(
        "Expenses",
        "TOTAL EXPENSES",
        statement.total_expenses,
    ));
    rows.push(income_row("Summary", "NET INCOME", statement.net_income()));
    vec![Sheet {
        name: "Income Statement".into(),
        rows,
    }]
}

fn income_row(section: &str, item: &str, amount: f64) -> SheetRow {
    SheetRow::new()
        .col("Section", section)
        .col("Item", item)
        .col("Amount", amount)
}

// ---------------------------------------------------------------------------
// Outstanding fees

pub fn outstanding_document(
    report: &OutstandingReport,
    filters: &ReportFilters,
    info: &SchoolInfo,
    generated_on: &str,
) -> Document {
    let body = report
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            vec![
                (position + 1).to_string(),
                row.name.clone(),
                row.class_level.clone(),
                format_currency(row.due),
                format_currency(row.paid),
                format_currency(row.balance),
            ]
        })
        .collect();

    Document {
        title: format!("Outstanding Fees Report - {}", scope_label(filters)),
        header: document_header(info, generated_on),
        sections: vec![
            TableSection {
                title: "Outstanding Balances".into(),
                head: vec![
                    "#".into(),
                    "Student".into(),
                    "Class".into(),
                    "Total Due".into(),
                    "Total Paid".into(),
                    "Balance".into(),
                ],
                body,
                subtotal: None,
            },
            totals_section(vec![
                (
                    "TOTAL OUTSTANDING",
                    format_currency(report.total_outstanding),
                ),
                ("STUDENTS WITH BALANCE", report.student_count.to_string()),
            ]),
        ],
    }
}

pub fn outstanding_sheets(report: &OutstandingReport) -> Vec<Sheet> {
    let rows = report
        .rows
        .iter()
        .map(|row| {
            SheetRow::new()
                .col("Student", row.name.clone())
                .col("Class", row.class_level.clone())
                .col("Total Due", row.due)
                .col("Total Paid", row.paid)
                .col("Balance", row.balance)
        })
        .collect();
    vec![Sheet {
        name: "Outstanding Fees".into(),
        rows,
    }]
}

// ---------------------------------------------------------------------------
// Student balances

pub fn student_balances_document(
    report: &StudentBalancesReport,
    filters: &ReportFilters,
    info: &SchoolInfo,
    generated_on: &str,
) -> Document {
    let body = report
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            vec![
                (position + 1).to_string(),
                row.name.clone(),
                row.class_level.clone(),
                format_currency(row.total_due),
                format_currency(row.total_paid),
                format_currency(row.balance()),
                row.breakdown_text("\n"),
            ]
        })
        .collect();

    Document {
        title: format!("Student Balances Report - {}", scope_label(filters)),
        header: document_header(info, generated_on),
        sections: vec![
            TableSection {
                title: "Student Balances".into(),
                head: vec![
                    "#".into(),
                    "Student".into(),
                    "Class".into(),
                    "Total Due".into(),
                    "Total Paid".into(),
                    "Balance".into(),
                    "Outstanding Fees".into(),
                ],
                body,
                subtotal: None,
            },
            totals_section(vec![
                ("TOTAL DUE", format_currency(report.total_due)),
                ("TOTAL PAID", format_currency(report.total_paid)),
                (
                    "TOTAL OUTSTANDING",
                    format_currency(report.total_outstanding),
                ),
                ("STUDENTS", report.student_count.to_string()),
            ]),
        ],
    }
}

/// The spreadsheet form is one row per student with the breakdown
/// flattened into a single semicolon-joined column; it deliberately does
/// not mirror the document form's newline-joined, numbered rows.
pub fn student_balances_sheets(report: &StudentBalancesReport) -> Vec<Sheet> {
    let rows = report
        .rows
        .iter()
        .map(|row| {
            SheetRow::new()
                .col("Student", row.name.clone())
                .col("Class", row.class_level.clone())
                .col("Total Due", row.total_due)
                .col("Total Paid", row.total_paid)
                .col("Balance", row.balance())
                .col("Outstanding Fees", row.breakdown_text("; "))
        })
        .collect();
    vec![Sheet {
        name: "Student Balances".into(),
        rows,
    }]
}

// ---------------------------------------------------------------------------
// Receipt

pub fn receipt_document(
    receipt: &ReceiptDetails,
    info: &SchoolInfo,
    generated_on: &str,
) -> Document {
    Document {
        title: "Payment Receipt".into(),
        header: document_header(info, generated_on),
        sections: vec![TableSection {
            title: String::new(),
            head: vec![],
            body: vec![
                vec!["Receipt No.".into(), receipt.receipt_number.clone()],
                vec!["Date".into(), format_date(&receipt.payment_date)],
                vec!["Student".into(), receipt.student_name.clone()],
                vec!["Class".into(), receipt.class_level.clone()],
                vec!["Fee Type".into(), receipt.fee_type.clone()],
                vec![
                    "Term".into(),
                    format!("Term {}, {}", receipt.term, receipt.year),
                ],
                vec!["Amount Due".into(), format_currency(receipt.amount_due)],
                vec!["Amount Paid".into(), format_currency(receipt.amount_paid)],
                vec!["Balance".into(), format_currency(receipt.balance())],
                vec!["Payment Method".into(), receipt.payment_method.clone()],
            ],
            subtotal: None,
        }],
    }
}

fn totals_section(rows: Vec<(&str, String)>) -> TableSection {
    TableSection {
        title: String::new(),
        head: vec![],
        body: rows
            .into_iter()
            .map(|(label, value)| vec![label.to_string(), value])
            .collect(),
        subtotal: None,
    }
}
