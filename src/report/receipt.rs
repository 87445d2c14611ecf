//! Payment receipt: a single-payment formatting step, no aggregation.

use crate::records::{FeePayment, Student, StudentDirectory};
use crate::report::filters::payment_by_id;
use crate::report::ReportFilters;

#[derive(Debug, Clone)]
pub struct ReceiptDetails {
    pub receipt_number: String,
    pub payment_date: String,
    pub student_name: String,
    pub class_level: String,
    pub fee_type: String,
    pub term: u8,
    pub year: i32,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub payment_method: String,
}

impl ReceiptDetails {
    pub fn balance(&self) -> f64 {
        self.amount_due - self.amount_paid
    }
}

/// Builds the receipt for the payment selected by `filters.payment_id`.
/// Returns `None` when no payment matches; that is not an error, the
/// engine simply has nothing to produce.
pub fn build(
    payments: &[FeePayment],
    students: &[Student],
    filters: &ReportFilters,
) -> Option<ReceiptDetails> {
    let payment = payment_by_id(payments, filters)?;
    let directory = StudentDirectory::new(students);
    Some(ReceiptDetails {
        receipt_number: payment.receipt_ref(),
        payment_date: payment.payment_date.clone(),
        student_name: directory.name_of(payment.student_id).to_string(),
        class_level: directory.class_of(payment.student_id).to_string(),
        fee_type: payment.fee_type.clone(),
        term: payment.term,
        year: payment.year,
        amount_due: payment.due(),
        amount_paid: payment.paid(),
        payment_method: payment.method_or_cash().to_string(),
    })
}
