use crate::builder::DocxBuilder;
use crate::error::Result;
use crate::style::StyleConfig;

/// Builds the sample project briefing used by the runner commands.
///
/// The content exercises every block kind: title, tagline, mixed label/value
/// lines, headings on both levels, both list kinds, a table, hyperlinks and
/// an explicit page break.
pub fn build_sample_briefing(style: StyleConfig) -> Result<DocxBuilder> {
    let builder = DocxBuilder::with_style(style)
        .with_header_text("Orbital Deployment Briefing")
        .title("Orbital Deployment Briefing")
        .blank()
        .paragraph_italic("Prepared by the launch readiness group")
        .blank()
        .blank()
        .paragraph(
            "This briefing summarizes the state of the deployment pipeline ahead of the \
             spring launch window, covering readiness criteria, open risks and the \
             supporting reference material.",
        )
        .blank()
        .heading1("Readiness Summary")
        .blank()
        .paragraph_mixed("Status: ", "go for launch, pending final weather review.")
        .paragraph_mixed("Review date: ", "first Monday of the window.")
        .blank()
        .heading2("Completed Checks")
        .blank()
        .bullet("Telemetry pipeline verified end to end")
        .bullet("Failover drills executed across both regions")
        .bullet("Runbooks reviewed and signed off")
        .blank()
        .heading2("Open Items")
        .blank()
        .numbered("Confirm downrange tracking availability")
        .numbered("Close out the final two supplier audits")
        .numbered("Publish the revised abort criteria")
        .blank()
        .table(
            vec![
                "Milestone".to_owned(),
                "Owner".to_owned(),
                "State".to_owned(),
            ],
            vec![
                vec![
                    "Static fire".to_owned(),
                    "Propulsion".to_owned(),
                    "Complete".to_owned(),
                ],
                vec![
                    "Wet dress rehearsal".to_owned(),
                    "Operations".to_owned(),
                    "Complete".to_owned(),
                ],
                vec![
                    "Range clearance".to_owned(),
                    "Safety".to_owned(),
                    "Scheduled".to_owned(),
                ],
            ],
        )?
        .blank()
        .hyperlink_inline(
            "The full checklist lives in ",
            "the readiness tracker",
            "https://example.com/readiness",
            ", updated daily.",
        )
        .hyperlink("Launch window calendar", "https://example.com/calendar")
        .page_break()
        .heading1("Appendix")
        .blank()
        .paragraph_bold("Distribution: launch council, range safety, mission assurance.")
        .paragraph(
            "Questions about this briefing should go to the launch readiness group rather \
             than individual subsystem leads.",
        );

    Ok(builder)
}
