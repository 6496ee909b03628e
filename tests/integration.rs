//! Integration tests for the PDF protection library

use chrono::NaiveDate;
use lopdf::{dictionary, Document, Object, Stream};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pdf_protect::naming::resolve_output_path;
use pdf_protect::pdf::{encrypt_pdf, EncryptOptions, PermissionSet};
use pdf_protect::Error;

/// Build a minimal one-page PDF on disk to use as encryption input
fn write_test_pdf(path: &Path) {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier"
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_id)
        }
    });

    let content = b"BT\n/F1 12 Tf\n100 700 Td\n(Quarterly report) Tj\nET\n";
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
        "Resources" => Object::Reference(resources_id),
        "Contents" => Object::Reference(content_id)
    });

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => 1
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id)
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.save(path).expect("Failed to write test PDF");
}

fn options(input: &Path, output: &Path) -> EncryptOptions {
    EncryptOptions {
        input_path: input.to_path_buf(),
        output_path: output.to_path_buf(),
        user_password: "Abcdef1!".to_string(),
        owner_password: "Abcdef1!xxxx".to_string(),
        permissions: PermissionSet::default(),
    }
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 24).unwrap()
}

/// True if the haystack contains the needle anywhere
fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn test_encrypt_creates_dated_output() {
    let base = TempDir::new().expect("Failed to create temp directory");
    let input = base.path().join("report.pdf");
    write_test_pdf(&input);

    let output = resolve_output_path(&input, base.path(), test_date())
        .expect("Failed to resolve output path");

    assert_eq!(
        output,
        base.path().join("OUTPUT").join("report_20251024.pdf"),
        "First resolution of the day should carry no collision suffix"
    );

    encrypt_pdf(&options(&input, &output)).expect("Failed to encrypt PDF");

    assert!(output.exists(), "Encrypted PDF was not created");

    let bytes = fs::read(&output).expect("Failed to read encrypted PDF");
    assert!(bytes.starts_with(b"%PDF"), "Output should be a PDF file");
    assert!(
        contains_bytes(&bytes, b"/Encrypt"),
        "Output should carry an /Encrypt dictionary"
    );

    println!("✓ Encrypted copy written to {}", output.display());
}

#[test]
fn test_encrypt_leaves_original_unchanged() {
    let base = TempDir::new().expect("Failed to create temp directory");
    let input = base.path().join("report.pdf");
    write_test_pdf(&input);

    let before = fs::read(&input).expect("Failed to read input");

    let output = resolve_output_path(&input, base.path(), test_date())
        .expect("Failed to resolve output path");
    encrypt_pdf(&options(&input, &output)).expect("Failed to encrypt PDF");

    let after = fs::read(&input).expect("Failed to read input");
    assert_eq!(before, after, "Source PDF must not be modified");

    // The source stays readable in the clear
    assert!(
        !contains_bytes(&after, b"/Encrypt"),
        "Source PDF should not be encrypted"
    );
}

#[test]
fn test_same_day_runs_get_incrementing_suffixes() {
    let base = TempDir::new().expect("Failed to create temp directory");
    let input = base.path().join("report.pdf");
    write_test_pdf(&input);

    let mut outputs: Vec<PathBuf> = Vec::new();
    for _ in 0..3 {
        let output = resolve_output_path(&input, base.path(), test_date())
            .expect("Failed to resolve output path");
        encrypt_pdf(&options(&input, &output)).expect("Failed to encrypt PDF");
        outputs.push(output);
    }

    let names: Vec<_> = outputs
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "report_20251024.pdf",
            "report_20251024_1.pdf",
            "report_20251024_2.pdf",
        ]
    );

    for output in &outputs {
        assert!(output.exists(), "Missing encrypted copy: {}", output.display());
    }
}

#[test]
fn test_missing_input_creates_no_output() {
    let base = TempDir::new().expect("Failed to create temp directory");
    let input = base.path().join("nonexistent.pdf");

    let output = resolve_output_path(&input, base.path(), test_date())
        .expect("Failed to resolve output path");

    let result = encrypt_pdf(&options(&input, &output));
    assert!(
        matches!(result, Err(Error::InputNotFound(_))),
        "Expected InputNotFound, got {:?}",
        result
    );

    assert!(!output.exists(), "No output file should be created on failure");
}

#[test]
fn test_short_user_password_creates_no_output() {
    let base = TempDir::new().expect("Failed to create temp directory");
    let input = base.path().join("report.pdf");
    write_test_pdf(&input);

    let output = resolve_output_path(&input, base.path(), test_date())
        .expect("Failed to resolve output path");

    let mut opts = options(&input, &output);
    opts.user_password = "Ab1!".to_string();

    let result = encrypt_pdf(&opts);
    assert!(
        matches!(result, Err(Error::WeakPassword(_))),
        "Expected WeakPassword, got {:?}",
        result
    );

    assert!(!output.exists(), "No output file should be created on failure");
}
