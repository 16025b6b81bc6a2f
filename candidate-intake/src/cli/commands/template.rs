use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::candidates::excel::write_template_excel;

pub fn handle_template_command(output: &Path) -> Result<()> {
    let path = output
        .to_str()
        .with_context(|| format!("Output path is not valid UTF-8: {}", output.display()))?;

    write_template_excel(path)?;
    println!("Template written to: {}", path.bright_green());
    Ok(())
}
