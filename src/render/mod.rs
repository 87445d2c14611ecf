//! Renderer-facing output model and the traits the external document and
//! spreadsheet composition back ends implement.

pub mod assembly;

use thiserror::Error;

/// Failure raised by a rendering back end. Wrapped with the report type
/// in [`crate::errors::ReportError::Renderer`] before reaching callers.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

/// Vertical cursor threshold after which the next table section starts on
/// a fresh page.
pub const PAGE_CONTENT_LIMIT: f32 = 720.0;

/// A single cell of a spreadsheet row. Amounts stay numeric so the back
/// end can emit real number cells.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One spreadsheet row: named columns in a fixed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    pub columns: Vec<(String, CellValue)>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.columns.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }
}

/// A named sheet of uniform rows.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

/// One table section of a paginated document: a titled group with a head
/// row, pre-formatted body rows, and at most one subtotal row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    pub title: String,
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub subtotal: Option<Vec<String>>,
}

/// The fixed header block printed at the top of every document.
#[derive(Debug, Clone)]
pub struct DocumentHeader {
    pub school_name: String,
    pub address: String,
    pub phone_line: String,
    pub generated_on: String,
}

/// A fully assembled document, ready for a [`DocumentRenderer`].
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub header: DocumentHeader,
    pub sections: Vec<TableSection>,
}

/// Paginated document back end (PDF-equivalent).
pub trait DocumentRenderer {
    /// Starts the document: title and header block.
    fn begin(&mut self, title: &str, header: &DocumentHeader) -> Result<(), RenderError>;

    /// Renders one table section and returns the vertical cursor after it.
    fn table_section(&mut self, section: &TableSection) -> Result<f32, RenderError>;

    /// Starts a new page.
    fn page_break(&mut self) -> Result<(), RenderError>;

    /// Writes the finished document to the named file.
    fn save(&mut self, file_name: &str) -> Result<(), RenderError>;
}

/// Flat spreadsheet back end (Excel-equivalent).
pub trait SpreadsheetRenderer {
    /// Writes the named sheets to the named file.
    fn write(&mut self, sheets: &[Sheet], file_name: &str) -> Result<(), RenderError>;
}

/// Drives a document through a renderer, requesting a page break whenever
/// the cursor reported after a section has passed [`PAGE_CONTENT_LIMIT`].
pub fn render_document(
    renderer: &mut dyn DocumentRenderer,
    document: &Document,
    file_name: &str,
) -> Result<(), RenderError> {
    renderer.begin(&document.title, &document.header)?;
    let mut cursor = 0.0_f32;
    for (position, section) in document.sections.iter().enumerate() {
        if position > 0 && cursor > PAGE_CONTENT_LIMIT {
            renderer.page_break()?;
        }
        cursor = renderer.table_section(section)?;
    }
    renderer.save(file_name)
}
