use docx_helper::builder::DocxBuilder;
use docx_helper::style::StyleConfig;
use file_format::FileFormat;
use sha2::{Digest, Sha256};

fn render_sample_docx() -> Vec<u8> {
    DocxBuilder::new()
        .with_header_text("Sample")
        .title("Sample")
        .paragraph("Hello, DOCX!")
        .render()
        .expect("render sample docx")
        .bytes
}

#[test]
fn renders_non_empty_output() {
    let bytes = render_sample_docx();
    assert!(
        !bytes.is_empty(),
        "rendered DOCX should contain at least the container skeleton"
    );
}

#[test]
fn output_is_a_zip_container() {
    let bytes = render_sample_docx();
    assert_eq!(
        &bytes[..4],
        b"PK\x03\x04",
        "DOCX output must start with the ZIP local file header signature"
    );
}

#[test]
fn output_is_detected_as_office_open_xml() {
    let bytes = render_sample_docx();
    let format = FileFormat::from_bytes(&bytes);
    assert_eq!(
        format.extension(),
        "docx",
        "unexpected container format: {format:?}"
    );
}

#[test]
fn rendering_is_deterministic() {
    let bytes_a = render_sample_docx();
    let bytes_b = render_sample_docx();

    assert_eq!(bytes_a.len(), bytes_b.len(), "DOCX sizes should match");

    let hash_a: [u8; 32] = Sha256::digest(&bytes_a).into();
    let hash_b: [u8; 32] = Sha256::digest(&bytes_b).into();
    assert_eq!(hash_a, hash_b, "DOCX renders must be byte identical");
}

#[test]
fn styles_change_the_rendered_bytes() {
    let professional = DocxBuilder::with_style(StyleConfig::professional())
        .title("Styled")
        .paragraph("body")
        .render()
        .expect("render professional")
        .bytes;
    let fun = DocxBuilder::with_style(StyleConfig::fun())
        .title("Styled")
        .paragraph("body")
        .render()
        .expect("render fun")
        .bytes;

    assert_ne!(
        professional, fun,
        "different style presets must produce different documents"
    );
}

#[test]
fn save_writes_a_non_empty_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("briefing.docx");

    DocxBuilder::new()
        .title("Saved")
        .paragraph("On disk.")
        .save(&path)
        .expect("save docx");

    let metadata = std::fs::metadata(&path).expect("stat saved file");
    assert!(metadata.len() > 0, "saved file must not be empty");
}

#[test]
fn save_fails_on_missing_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_such_dir").join("briefing.docx");

    let result = DocxBuilder::new().paragraph("lost").save(&path);
    assert!(matches!(result, Err(docx_helper::Error::Io(_))));
}
