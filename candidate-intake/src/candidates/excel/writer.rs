//! Write an example upload workbook

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use super::reader::headers;

/// Sample row written under the header
mod sample {
    pub const SENIORITY: &str = "junior";
    pub const YEARS_OF_EXPERIENCE: f64 = 3.0;
    pub const AVAILABILITY: bool = true;
}

/// Build the template workbook in memory
pub fn template_excel_bytes() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Candidate")?;

    let bold = Format::new().set_bold();
    for (col, aliases) in headers::REQUIRED.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, aliases[0], &bold)?;
        worksheet.set_column_width(col as u16, 22)?;
    }

    worksheet.write_string(1, 0, sample::SENIORITY)?;
    worksheet.write_number(1, 1, sample::YEARS_OF_EXPERIENCE)?;
    worksheet.write_boolean(1, 2, sample::AVAILABILITY)?;

    workbook
        .save_to_buffer()
        .context("Failed to build template workbook")
}

/// Write the template workbook to `path`
pub fn write_template_excel(path: &str) -> Result<()> {
    let bytes = template_excel_bytes()?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to save Excel file: {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{Seniority, TabularRecordParser};

    #[test]
    fn test_template_parses_as_sample_candidate() {
        let bytes = template_excel_bytes().unwrap();
        let fields = TabularRecordParser::new().parse(&bytes).unwrap();

        assert_eq!(fields.seniority, Seniority::Junior);
        assert_eq!(fields.years_of_experience, 3);
        assert!(fields.availability);
    }
}
