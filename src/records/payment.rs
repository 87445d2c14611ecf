use serde::{Deserialize, Serialize};

/// A single fee payment record.
///
/// Amount fields are optional at the boundary; absent values resolve to
/// zero through the [`FeePayment::due`] and [`FeePayment::paid`] accessors
/// so arithmetic never sees a missing number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePayment {
    pub id: i64,
    #[serde(default)]
    pub student_id: Option<i64>,
    pub fee_type: String,
    pub term: u8,
    pub year: i32,
    #[serde(default)]
    pub amount_due: Option<f64>,
    #[serde(default)]
    pub amount_paid: Option<f64>,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
}

impl FeePayment {
    pub fn new(
        id: i64,
        student_id: Option<i64>,
        fee_type: impl Into<String>,
        term: u8,
        year: i32,
    ) -> Self {
        Self {
            id,
            student_id,
            fee_type: fee_type.into(),
            term,
            year,
            amount_due: None,
            amount_paid: None,
            payment_date: String::new(),
            status: String::new(),
            payment_method: None,
            receipt_number: None,
        }
    }

    pub fn due(&self) -> f64 {
        self.amount_due.unwrap_or(0.0)
    }

    pub fn paid(&self) -> f64 {
        self.amount_paid.unwrap_or(0.0)
    }

    /// Balance is always `due - paid`; overpayment yields a negative value
    /// and is never clamped.
    pub fn balance(&self) -> f64 {
        self.due() - self.paid()
    }

    /// The payment's own receipt number, or a synthesized `RCP-<id>`.
    pub fn receipt_ref(&self) -> String {
        self.receipt_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("RCP-{}", self.id))
    }

    /// Payment method with the `Cash` default used on receipts.
    pub fn method_or_cash(&self) -> &str {
        self.payment_method
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("Cash")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_amounts_resolve_to_zero() {
        let payment = FeePayment::new(1, Some(10), "Tuition", 1, 2024);
        assert_eq!(payment.due(), 0.0);
        assert_eq!(payment.paid(), 0.0);
        assert_eq!(payment.balance(), 0.0);
    }

    #[test]
    fn balance_may_go_negative_on_overpayment() {
        let mut payment = FeePayment::new(1, Some(10), "Tuition", 1, 2024);
        payment.amount_due = Some(100_000.0);
        payment.amount_paid = Some(120_000.0);
        assert_eq!(payment.balance(), -20_000.0);
    }

    #[test]
    fn receipt_ref_falls_back_to_synthesized_number() {
        let mut payment = FeePayment::new(7, Some(10), "Tuition", 1, 2024);
        assert_eq!(payment.receipt_ref(), "RCP-7");
        payment.receipt_number = Some("FIN-0042".into());
        assert_eq!(payment.receipt_ref(), "FIN-0042");
    }

    #[test]
    fn deserializes_with_missing_amount_fields() {
        let payment: FeePayment = serde_json::from_str(
            r#"{"id":3,"studentId":null,"feeType":"Boarding","term":2,"year":2024}"#,
        )
        .expect("payment json");
        assert_eq!(payment.due(), 0.0);
        assert_eq!(payment.paid(), 0.0);
        assert_eq!(payment.student_id, None);
        assert_eq!(payment.method_or_cash(), "Cash");
    }
}
