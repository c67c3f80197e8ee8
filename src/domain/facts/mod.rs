//! Facts module - the fixed catalog of cat facts and how users address it.

mod catalog;
mod fact_number;

pub use catalog::{FactCatalog, CAT_FACTS, FACT_COUNT};
pub use fact_number::FactNumber;
