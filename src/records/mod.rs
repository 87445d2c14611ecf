//! Input data model: the transactional records the engine reads but never
//! mutates. All types deserialize from the camelCase JSON the surrounding
//! application fetches over its REST boundary.

pub mod expense;
pub mod payment;
pub mod school;
pub mod student;

pub use expense::{CategoryDirectory, Expense, ExpenseCategory, UNCATEGORIZED};
pub use payment::FeePayment;
pub use school::SchoolInfo;
pub use student::{Student, StudentDirectory, MISSING_CLASS, UNKNOWN_STUDENT};
