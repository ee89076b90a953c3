use std::error::Error;
use std::fs;
use std::path::Path;

use super::shared;
use crate::style::StyleConfig;

const OUTPUT_DIR: &str = "target/run_all_samples";

/// Renders the sample briefing once per style preset into
/// `target/run_all_samples`.
pub fn run() -> Result<(), Box<dyn Error>> {
    let output_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(output_dir)?;

    let presets = [
        ("briefing_professional.docx", StyleConfig::professional()),
        ("briefing_fun.docx", StyleConfig::fun()),
        ("briefing_casual.docx", StyleConfig::casual()),
    ];

    for (file_name, style) in presets {
        let builder = shared::build_sample_briefing(style)?;
        let docx = builder.render()?;
        let output_path = output_dir.join(file_name);
        fs::write(&output_path, &docx.bytes)?;
        println!(
            "Generated {} ({} bytes)",
            output_path.display(),
            docx.bytes.len()
        );
    }

    println!("All renders completed successfully.");
    Ok(())
}
