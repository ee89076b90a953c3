use std::error::Error;

use super::shared;
use crate::style::StyleConfig;

/// Renders the sample briefing with the default style to `report.docx`.
pub fn run() -> Result<(), Box<dyn Error>> {
    let builder = shared::build_sample_briefing(StyleConfig::professional())?;
    let docx = builder.render()?;
    std::fs::write("report.docx", &docx.bytes)?;
    println!("Generated report.docx ({} bytes)", docx.bytes.len());
    Ok(())
}
