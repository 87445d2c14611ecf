//! Export orchestration: dispatch, file naming, skip semantics, error
//! propagation, and pagination through the renderer doubles.

mod common;

use common::{
    categories, expenses, payment, payments, school_info, students, FailingDocument,
    RecordingDocument, RecordingSpreadsheet,
};
use finance_report_core::errors::ReportError;
use finance_report_core::export::{export_report_at, ExportFormat, ExportOutcome, ReportData};
use finance_report_core::render::CellValue;
use finance_report_core::report::{ReportFilters, ReportType};

const GENERATED_ON: &str = "05 Mar 2024";

fn data<'a>(
    payments: &'a [finance_report_core::records::FeePayment],
    expenses: &'a [finance_report_core::records::Expense],
    categories: &'a [finance_report_core::records::ExpenseCategory],
    students: &'a [finance_report_core::records::Student],
) -> ReportData<'a> {
    ReportData {
        payments,
        expenses,
        categories,
        students,
    }
}

fn run(
    report_type: ReportType,
    format: ExportFormat,
    filters: &ReportFilters,
) -> (ExportOutcome, RecordingDocument, RecordingSpreadsheet) {
    let payments = payments();
    let expenses = expenses();
    let categories = categories();
    let students = students();
    let mut document = RecordingDocument::with_step(100.0);
    let mut spreadsheet = RecordingSpreadsheet::default();
    let outcome = export_report_at(
        report_type,
        format,
        &data(&payments, &expenses, &categories, &students),
        filters,
        &school_info(),
        GENERATED_ON,
        &mut document,
        &mut spreadsheet,
    )
    .expect("export succeeds");
    (outcome, document, spreadsheet)
}

#[test]
fn document_export_names_and_saves_the_artifact() {
    let filters = ReportFilters::term_year(1, 2024);
    let (outcome, document, _) = run(ReportType::FeeCollection, ExportFormat::Document, &filters);

    assert_eq!(
        outcome,
        ExportOutcome::Written {
            file_name: "Fee_Collection_Report_Term1_2024.pdf".into()
        }
    );
    assert_eq!(
        document.saved_as.as_deref(),
        Some("Fee_Collection_Report_Term1_2024.pdf")
    );
    assert!(document.events[0].starts_with("begin:Fee Collection Report - Term 1, 2024"));
}

#[test]
fn spreadsheet_export_writes_flat_sheets() {
    let filters = ReportFilters::term_year(1, 2024);
    let (outcome, _, spreadsheet) = run(
        ReportType::StudentBalances,
        ExportFormat::Spreadsheet,
        &filters,
    );

    assert_eq!(
        outcome,
        ExportOutcome::Written {
            file_name: "Student_Balances_Report_Term1_2024.xlsx".into()
        }
    );
    assert_eq!(spreadsheet.sheets.len(), 1);
    let sheet = &spreadsheet.sheets[0];
    assert_eq!(sheet.name, "Student Balances");
    assert_eq!(sheet.rows.len(), 4);
    let fully_paid = sheet
        .rows
        .iter()
        .find(|r| r.get("Student") == Some(&CellValue::Text("Okello James".into())))
        .expect("fully paid row");
    assert_eq!(
        fully_paid.get("Outstanding Fees"),
        Some(&CellValue::Text("Fully Paid".into()))
    );
}

#[test]
fn expense_export_uses_the_date_range_name() {
    let filters =
        ReportFilters::term_year(1, 2024).with_date_range(Some("2024-01-01"), Some("2024-02-28"));
    let (outcome, _, spreadsheet) = run(ReportType::Expense, ExportFormat::Spreadsheet, &filters);

    assert_eq!(
        outcome,
        ExportOutcome::Written {
            file_name: "Expense_2024-01-01_to_2024-02-28.xlsx".into()
        }
    );
    // Three 2024 expenses inside the range; the 2023 bill is out.
    assert_eq!(spreadsheet.sheets[0].rows.len(), 3);
}

#[test]
fn receipt_export_names_the_file_from_the_payment() {
    let filters = ReportFilters::term_year(1, 2024).for_payment(2);
    let (outcome, document, _) = run(ReportType::Receipt, ExportFormat::Document, &filters);

    assert_eq!(
        outcome,
        ExportOutcome::Written {
            file_name: "Receipt_Achieng_Mary_Tuition_Term1.pdf".into()
        }
    );
    assert!(document.events[0].starts_with("begin:Payment Receipt"));
}

#[test]
fn receipt_with_unknown_payment_is_skipped() {
    let filters = ReportFilters::term_year(1, 2024).for_payment(404);
    let (outcome, document, _) = run(ReportType::Receipt, ExportFormat::Document, &filters);
    assert_eq!(outcome, ExportOutcome::Skipped);
    assert!(document.events.is_empty());
}

#[test]
fn receipt_has_no_spreadsheet_form() {
    let filters = ReportFilters::term_year(1, 2024).for_payment(1);
    let (outcome, _, spreadsheet) = run(ReportType::Receipt, ExportFormat::Spreadsheet, &filters);
    assert_eq!(outcome, ExportOutcome::Skipped);
    assert!(spreadsheet.saved_as.is_none());
}

#[test]
fn renderer_failure_carries_the_report_type() {
    let payments = payments();
    let students = students();
    let mut document = FailingDocument;
    let mut spreadsheet = RecordingSpreadsheet::default();
    let err = export_report_at(
        ReportType::Outstanding,
        ExportFormat::Document,
        &data(&payments, &[], &[], &students),
        &ReportFilters::term_year(1, 2024),
        &school_info(),
        GENERATED_ON,
        &mut document,
        &mut spreadsheet,
    )
    .expect_err("renderer failure must propagate");

    match err {
        ReportError::Renderer { report, .. } => assert_eq!(report, ReportType::Outstanding),
    }
    assert!(err.to_string().contains("Outstanding Fees"));
}

#[test]
fn long_reports_break_pages_between_groups() {
    // Many distinct fee types make many sections; a large cursor step
    // pushes past the page limit after every section.
    let mut long_payments = Vec::new();
    for id in 0..12 {
        long_payments.push(payment(
            id,
            Some(1),
            &format!("Fee {id}"),
            10_000.0,
            0.0,
        ));
    }
    let students = students();
    let mut document = RecordingDocument::with_step(500.0);
    let mut spreadsheet = RecordingSpreadsheet::default();
    export_report_at(
        ReportType::FeeCollection,
        ExportFormat::Document,
        &data(&long_payments, &[], &[], &students),
        &ReportFilters::term_year(1, 2024),
        &school_info(),
        GENERATED_ON,
        &mut document,
        &mut spreadsheet,
    )
    .expect("export succeeds");

    let breaks = document.events.iter().filter(|e| *e == "page_break").count();
    assert!(breaks > 0, "expected page breaks, got {:?}", document.events);
}

#[test]
fn spreadsheet_output_reaches_disk_when_the_back_end_writes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let payments = payments();
    let students = students();
    let mut document = RecordingDocument::default();
    let mut spreadsheet = RecordingSpreadsheet {
        output_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    export_report_at(
        ReportType::Outstanding,
        ExportFormat::Spreadsheet,
        &data(&payments, &[], &[], &students),
        &ReportFilters::term_year(1, 2024),
        &school_info(),
        GENERATED_ON,
        &mut document,
        &mut spreadsheet,
    )
    .expect("export succeeds");

    let written = dir.path().join("Outstanding_Fees_Report_Term1_2024.xlsx");
    let contents = std::fs::read_to_string(written).expect("marker file");
    assert_eq!(contents, "Outstanding Fees:3");
}
