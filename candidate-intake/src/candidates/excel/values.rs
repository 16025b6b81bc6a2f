//! Cell coercion for candidate fields

use calamine::Data;

use crate::candidates::{Seniority, ValidationError};

/// Whether a cell carries no usable value
///
/// Blank strings and error cells count as empty; `0` and `false` do not.
pub fn is_empty_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Render a cell as text (used for headers and textual fields)
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Seniority: trimmed, case-insensitive "junior" or "senior"
pub fn coerce_seniority(cell: Option<&Data>) -> Result<Seniority, ValidationError> {
    let cell = present(cell, "Seniority")?;
    let normalized = cell_to_string(cell).trim().to_lowercase();

    Seniority::from_normalized(&normalized)
        .ok_or_else(|| ValidationError::new("Seniority must be 'junior' or 'senior'"))
}

/// Years of experience: non-negative number rounded half away from zero
pub fn coerce_years(cell: Option<&Data>) -> Result<u32, ValidationError> {
    let cell = present(cell, "Years of experience")?;
    let invalid = || ValidationError::new("Years of experience must be a non-negative number");

    let number = match cell {
        Data::Int(i) => *i as f64,
        Data::Float(f) => *f,
        Data::DateTime(dt) => dt.as_f64(),
        Data::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    if !number.is_finite() || number < 0.0 {
        return Err(invalid());
    }

    let rounded = number.round();
    if rounded > u32::MAX as f64 {
        return Err(invalid());
    }

    Ok(rounded as u32)
}

/// Availability: booleans pass through, numbers are non-zero, and a fixed
/// set of words is recognised
pub fn coerce_availability(cell: Option<&Data>) -> Result<bool, ValidationError> {
    let cell = present(cell, "Availability")?;
    let invalid = || ValidationError::new("Availability must be a boolean value (true/false)");

    match cell {
        Data::Bool(b) => Ok(*b),
        Data::Int(i) => Ok(*i != 0),
        Data::Float(f) => Ok(*f != 0.0),
        Data::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "si" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

fn present<'a>(cell: Option<&'a Data>, column: &str) -> Result<&'a Data, ValidationError> {
    match cell {
        Some(c) if !is_empty_cell(c) => Ok(c),
        _ => Err(ValidationError::new(format!("{} is required", column))),
    }
}
