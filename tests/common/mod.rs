//! Shared fixtures and recording renderer doubles for the integration
//! suites.
#![allow(dead_code)]

use finance_report_core::records::{Expense, ExpenseCategory, FeePayment, SchoolInfo, Student};
use finance_report_core::render::{
    DocumentHeader, DocumentRenderer, RenderError, Sheet, SpreadsheetRenderer, TableSection,
};

pub fn school_info() -> SchoolInfo {
    let mut info = SchoolInfo::new("Hillside Primary School", "Plot 14, Kampala Road");
    info.phones = vec!["0700 000001".into(), "0700 000002".into()];
    info
}

pub fn students() -> Vec<Student> {
    vec![
        Student::new(1, "Okello James", "P5"),
        Student::new(2, "Achieng Mary", "P5"),
        Student::new(3, "Ssemwanga Brian", "P6"),
    ]
}

pub fn categories() -> Vec<ExpenseCategory> {
    vec![
        ExpenseCategory::new(1, "Utilities"),
        ExpenseCategory::new(2, "Salaries"),
    ]
}

pub fn payment(
    id: i64,
    student_id: Option<i64>,
    fee_type: &str,
    due: f64,
    paid: f64,
) -> FeePayment {
    let mut payment = FeePayment::new(id, student_id, fee_type, 1, 2024);
    payment.amount_due = Some(due);
    payment.amount_paid = Some(paid);
    payment.payment_date = "2024-02-10".into();
    payment.status = "completed".into();
    payment
}

/// A mixed term-1/2024 dataset touching every report's edge cases:
/// multiple fee types, a fully paid student, an unresolved student
/// reference, and an uncategorized expense.
pub fn payments() -> Vec<FeePayment> {
    vec![
        payment(1, Some(1), "Tuition", 500_000.0, 500_000.0),
        payment(2, Some(2), "Tuition", 300_000.0, 100_000.0),
        payment(3, Some(2), "Boarding", 200_000.0, 150_000.0),
        payment(4, Some(3), "Tuition", 400_000.0, 250_000.0),
        payment(5, Some(99), "Development", 50_000.0, 0.0),
    ]
}

pub fn expenses() -> Vec<Expense> {
    let mut electricity = Expense::new(1, Some(1), 120_000.0, "2024-01-15");
    electricity.description = "Electricity".into();
    electricity.vendor_name = "Umeme".into();
    electricity.receipt_number = "EXP-001".into();
    let mut wages = Expense::new(2, Some(2), 900_000.0, "2024-02-01");
    wages.description = "February wages".into();
    let mut sundry = Expense::new(3, None, 30_000.0, "2024-02-20");
    sundry.description = "Sundry".into();
    let mut last_year = Expense::new(4, Some(1), 999_000.0, "2023-11-01");
    last_year.description = "Old bill".into();
    vec![electricity, wages, sundry, last_year]
}

/// Document renderer double that records the call sequence and advances a
/// fixed cursor step per section.
#[derive(Default)]
pub struct RecordingDocument {
    pub cursor_step: f32,
    pub cursor: f32,
    pub events: Vec<String>,
    pub saved_as: Option<String>,
}

impl RecordingDocument {
    pub fn with_step(cursor_step: f32) -> Self {
        Self {
            cursor_step,
            ..Self::default()
        }
    }
}

impl DocumentRenderer for RecordingDocument {
    fn begin(&mut self, title: &str, header: &DocumentHeader) -> Result<(), RenderError> {
        self.events
            .push(format!("begin:{title}|{}", header.school_name));
        Ok(())
    }

    fn table_section(&mut self, section: &TableSection) -> Result<f32, RenderError> {
        self.cursor += self.cursor_step;
        self.events.push(format!("section:{}", section.title));
        Ok(self.cursor)
    }

    fn page_break(&mut self) -> Result<(), RenderError> {
        self.cursor = 0.0;
        self.events.push("page_break".into());
        Ok(())
    }

    fn save(&mut self, file_name: &str) -> Result<(), RenderError> {
        self.saved_as = Some(file_name.to_string());
        self.events.push(format!("save:{file_name}"));
        Ok(())
    }
}

/// Document renderer double that fails on the first section.
#[derive(Default)]
pub struct FailingDocument;

impl DocumentRenderer for FailingDocument {
    fn begin(&mut self, _title: &str, _header: &DocumentHeader) -> Result<(), RenderError> {
        Ok(())
    }

    fn table_section(&mut self, _section: &TableSection) -> Result<f32, RenderError> {
        Err(RenderError("malformed table reached the renderer".into()))
    }

    fn page_break(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn save(&mut self, _file_name: &str) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Spreadsheet renderer double that captures the sheets and optionally
/// writes a marker file so disk output can be asserted.
#[derive(Default)]
pub struct RecordingSpreadsheet {
    pub sheets: Vec<Sheet>,
    pub saved_as: Option<String>,
    pub output_dir: Option<std::path::PathBuf>,
}

impl SpreadsheetRenderer for RecordingSpreadsheet {
    fn write(&mut self, sheets: &[Sheet], file_name: &str) -> Result<(), RenderError> {
        self.sheets = sheets.to_vec();
        self.saved_as = Some(file_name.to_string());
        if let Some(dir) = &self.output_dir {
            let summary: Vec<String> = sheets
                .iter()
                .map(|s| format!("{}:{}", s.name, s.rows.len()))
                .collect();
            std::fs::write(dir.join(file_name), summary.join("\n"))
                .map_err(|err| RenderError(err.to_string()))?;
        }
        Ok(())
    }
}
