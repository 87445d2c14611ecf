//! Export orchestrator: dispatches a report type to its aggregation and
//! renderer pair, and owns the output file-naming convention.

use chrono::Local;
use tracing::{debug, info, warn};

use crate::errors::{ReportError, Result};
use crate::formatting::{format_naive_date, underscore};
use crate::records::{Expense, ExpenseCategory, FeePayment, SchoolInfo, Student};
use crate::render::{
    assembly, render_document, Document, DocumentRenderer, Sheet, SpreadsheetRenderer,
};
use crate::report::{
    expense, fee_collection, income_statement, outstanding, receipt, student_balances,
    ReportFilters, ReportType,
};

/// Output rendering requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Paginated document (PDF-equivalent).
    Document,
    /// Flat spreadsheet (Excel-equivalent).
    Spreadsheet,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Document => "pdf",
            ExportFormat::Spreadsheet => "xlsx",
        }
    }
}

/// What an export call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { file_name: String },
    /// Nothing to produce: a receipt with no matching payment, or a
    /// spreadsheet request for the receipt report (which has none).
    Skipped,
}

/// The already-fetched record collections an export reads.
#[derive(Debug, Clone, Copy)]
pub struct ReportData<'a> {
    pub payments: &'a [FeePayment],
    pub expenses: &'a [Expense],
    pub categories: &'a [ExpenseCategory],
    pub students: &'a [Student],
}

/// Runs one export end to end: narrow, aggregate, assemble, render, save.
///
/// Renderer failures surface as [`ReportError::Renderer`] with the report
/// type attached; there is no retry.
pub fn export_report(
    report_type: ReportType,
    format: ExportFormat,
    data: &ReportData<'_>,
    filters: &ReportFilters,
    info: &SchoolInfo,
    document_renderer: &mut dyn DocumentRenderer,
    spreadsheet_renderer: &mut dyn SpreadsheetRenderer,
) -> Result<ExportOutcome> {
    let generated_on = format_naive_date(Local::now().date_naive());
    export_report_at(
        report_type,
        format,
        data,
        filters,
        info,
        &generated_on,
        document_renderer,
        spreadsheet_renderer,
    )
}

/// [`export_report`] with an explicit generated-on stamp, which keeps the
/// whole pipeline deterministic for callers that need it.
#[allow(clippy::too_many_arguments)]
pub fn export_report_at(
    report_type: ReportType,
    format: ExportFormat,
    data: &ReportData<'_>,
    filters: &ReportFilters,
    info: &SchoolInfo,
    generated_on: &str,
    document_renderer: &mut dyn DocumentRenderer,
    spreadsheet_renderer: &mut dyn SpreadsheetRenderer,
) -> Result<ExportOutcome> {
    let (document, sheets, file_name) = match report_type {
        ReportType::FeeCollection => {
            let report = fee_collection::aggregate(data.payments, data.students, filters);
            debug!(groups = report.groups.len(), "fee collection aggregated");
            (
                assembly::fee_collection_document(&report, filters, info, generated_on),
                assembly::fee_collection_sheets(&report),
                term_scoped_file_name(report_type, filters, format),
            )
        }
        ReportType::Expense => {
            let report = expense::aggregate(data.expenses, data.categories, filters);
            debug!(groups = report.groups.len(), "expenses aggregated");
            (
                assembly::expense_document(&report, filters, info, generated_on),
                assembly::expense_sheets(&report),
                date_scoped_file_name(report_type, filters, format),
            )
        }
        ReportType::IncomeStatement => {
            let statement = income_statement::aggregate(
                data.payments,
                data.expenses,
                data.categories,
                data.students,
                filters,
            );
            (
                assembly::income_statement_document(&statement, filters, info, generated_on),
                assembly::income_statement_sheets(&statement),
                term_scoped_file_name(report_type, filters, format),
            )
        }
        ReportType::Outstanding => {
            let report = outstanding::aggregate(data.payments, data.students, filters);
            if report.rows.is_empty() {
                warn!(%report_type, "no outstanding balances in scope");
            }
            (
                assembly::outstanding_document(&report, filters, info, generated_on),
                assembly::outstanding_sheets(&report),
                term_scoped_file_name(report_type, filters, format),
            )
        }
        ReportType::StudentBalances => {
            let report = student_balances::aggregate(data.payments, data.students, filters);
            (
                assembly::student_balances_document(&report, filters, info, generated_on),
                assembly::student_balances_sheets(&report),
                term_scoped_file_name(report_type, filters, format),
            )
        }
        ReportType::Receipt => {
            // Receipts only exist as documents.
            if format == ExportFormat::Spreadsheet {
                return Ok(ExportOutcome::Skipped);
            }
            let Some(details) = receipt::build(data.payments, data.students, filters) else {
                debug!("no payment matched the receipt selection");
                return Ok(ExportOutcome::Skipped);
            };
            let file_name = receipt_file_name(&details);
            (
                assembly::receipt_document(&details, info, generated_on),
                Vec::new(),
                file_name,
            )
        }
    };

    match format {
        ExportFormat::Document => {
            write_document(report_type, document_renderer, &document, &file_name)?
        }
        ExportFormat::Spreadsheet => {
            write_sheets(report_type, spreadsheet_renderer, &sheets, &file_name)?
        }
    }

    info!(%report_type, %file_name, "report exported");
    Ok(ExportOutcome::Written { file_name })
}

fn write_document(
    report: ReportType,
    renderer: &mut dyn DocumentRenderer,
    document: &Document,
    file_name: &str,
) -> Result<()> {
    render_document(renderer, document, file_name)
        .map_err(|source| ReportError::Renderer { report, source })
}

fn write_sheets(
    report: ReportType,
    renderer: &mut dyn SpreadsheetRenderer,
    sheets: &[Sheet],
    file_name: &str,
) -> Result<()> {
    renderer
        .write(sheets, file_name)
        .map_err(|source| ReportError::Renderer { report, source })
}

/// `<ReportName>_Report_Term<term>_<year>.<ext>`, with the underscored
/// class level inserted when a concrete class filter is active.
pub fn term_scoped_file_name(
    report_type: ReportType,
    filters: &ReportFilters,
    format: ExportFormat,
) -> String {
    if filters.all_classes() {
        format!(
            "{}_Report_Term{}_{}.{}",
            report_type.file_stem(),
            filters.term,
            filters.year,
            format.extension()
        )
    } else {
        format!(
            "{}_Report_{}_Term{}_{}.{}",
            report_type.file_stem(),
            underscore(&filters.class_level),
            filters.term,
            filters.year,
            format.extension()
        )
    }
}

/// `<ReportName>_<dateFrom>_to_<dateTo>.<ext>`; absent bounds render
/// as `all`.
pub fn date_scoped_file_name(
    report_type: ReportType,
    filters: &ReportFilters,
    format: ExportFormat,
) -> String {
    format!(
        "{}_{}_to_{}.{}",
        report_type.file_stem(),
        filters.date_from.as_deref().unwrap_or("all"),
        filters.date_to.as_deref().unwrap_or("all"),
        format.extension()
    )
}

/// `Receipt_<studentNameUnderscored>_<feeType>_Term<term>.pdf`
pub fn receipt_file_name(details: &crate::report::ReceiptDetails) -> String {
    format!(
        "Receipt_{}_{}_Term{}.pdf",
        underscore(&details.student_name),
        details.fee_type,
        details.term
    )
}
