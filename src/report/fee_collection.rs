//! Fee collection report: filtered payments grouped by fee type, one row
//! per payment, a subtotal per group, and reconciling grand totals.

use crate::records::{FeePayment, Student, StudentDirectory};
use crate::report::filters::term_scoped_payments;
use crate::report::grouping::OrderedGroups;
use crate::report::ReportFilters;

#[derive(Debug, Clone)]
pub struct FeeCollectionRow {
    pub payment_date: String,
    pub student_name: String,
    pub class_level: String,
    pub due: f64,
    pub paid: f64,
    pub status: String,
    pub method: String,
}

/// One fee-type group: its payment rows plus the group subtotal.
#[derive(Debug, Clone)]
pub struct FeeTypeGroup {
    pub fee_type: String,
    pub rows: Vec<FeeCollectionRow>,
    pub due: f64,
    pub paid: f64,
}

#[derive(Debug, Clone)]
pub struct FeeCollectionReport {
    /// Groups in first-seen fee-type order.
    pub groups: Vec<FeeTypeGroup>,
    pub total_due: f64,
    pub total_paid: f64,
}

impl FeeCollectionReport {
    pub fn total_balance(&self) -> f64 {
        self.total_due - self.total_paid
    }
}

#[derive(Default)]
struct GroupAcc {
    rows: Vec<FeeCollectionRow>,
    due: f64,
    paid: f64,
}

pub fn aggregate(
    payments: &[FeePayment],
    students: &[Student],
    filters: &ReportFilters,
) -> FeeCollectionReport {
    let directory = StudentDirectory::new(students);
    let mut groups: OrderedGroups<String, GroupAcc> = OrderedGroups::new();

    for payment in term_scoped_payments(payments, students, filters) {
        let group = groups.entry(payment.fee_type.clone());
        group.due += payment.due();
        group.paid += payment.paid();
        group.rows.push(FeeCollectionRow {
            payment_date: payment.payment_date.clone(),
            student_name: directory.name_of(payment.student_id).to_string(),
            class_level: directory.class_of(payment.student_id).to_string(),
            due: payment.due(),
            paid: payment.paid(),
            status: payment.status.clone(),
            method: payment.payment_method.clone().unwrap_or_default(),
        });
    }

    let mut total_due = 0.0;
    let mut total_paid = 0.0;
    let groups = groups
        .into_entries()
        .into_iter()
        .map(|(fee_type, acc)| {
            total_due += acc.due;
            total_paid += acc.paid;
            FeeTypeGroup {
                fee_type,
                rows: acc.rows,
                due: acc.due,
                paid: acc.paid,
            }
        })
        .collect();

    FeeCollectionReport {
        groups,
        total_due,
        total_paid,
    }
}
