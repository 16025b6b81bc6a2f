//! Excel ingestion for candidate uploads
//!
//! Expected layout: first sheet, header row followed by one data row with
//! the columns `Seniority`, `Years of experience` and `Availability`.

mod reader;
mod values;
mod writer;

pub use reader::TabularRecordParser;
pub use writer::write_template_excel;
