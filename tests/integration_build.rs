//! Integration tests for the build pipeline

use std::fs;
use std::path::{Path, PathBuf};

use cvpress::profile::Profile;
use cvpress::{BuildConfig, Error};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

#[test]
fn test_html_pipeline_end_to_end() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("out/resume.html");

    let config = BuildConfig {
        input: fixture("minimal.json"),
        output: output.clone(),
        ..Default::default()
    };

    let path = cvpress::render_to_file(&config).expect("render pipeline failed");
    assert_eq!(path, output);

    let html = fs::read_to_string(&output).expect("read rendered output");
    assert!(!html.is_empty());
    assert!(html.contains("Ada Example"));
    assert!(html.contains("Mar 2020 – Present"));

    // All optional-section headings are absent for the minimal record
    for heading in ["Languages", "Publications", "Awards"] {
        assert!(
            !html.contains(&format!("<h2>{}</h2>", heading)),
            "unexpected {} heading",
            heading
        );
    }
}

#[test]
fn test_full_record_renders_every_section() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = BuildConfig {
        input: fixture("profile.json"),
        output: dir.path().join("resume.html"),
        ..Default::default()
    };

    let path = cvpress::render_to_file(&config).expect("render pipeline failed");
    let html = fs::read_to_string(path).unwrap();

    for heading in [
        "Technical Skills",
        "Professional Experience",
        "Education",
        "Publications",
        "Awards",
        "Languages",
    ] {
        assert!(
            html.contains(&format!("<h2>{}</h2>", heading)),
            "missing {} heading",
            heading
        );
    }

    // Closed date range from the second work entry
    assert!(html.contains("Jul 2015 – Feb 2020"));
    // Degree join for education
    assert!(html.contains("BSc in Computer Science"));
    // Fixture text containing markup-breaking characters arrives escaped
    assert!(html.contains("Designed the &lt;v2&gt; wire format &amp; migration"));
    assert!(html.contains("low-level tooling."));
}

#[test]
fn test_missing_input_is_a_parse_error() {
    let result = Profile::from_path(Path::new("tests/fixtures/absent.json"));
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_bad_date_aborts_before_any_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("resume.json");
    fs::write(
        &input,
        r#"{
            "basics": {"name": "A", "label": "B", "summary": "C"},
            "work": [{"position": "Engineer", "startDate": "not-a-date"}]
        }"#,
    )
    .unwrap();

    let output = dir.path().join("resume.html");
    let config = BuildConfig {
        input,
        output: output.clone(),
        ..Default::default()
    };

    let result = cvpress::render_to_file(&config);
    assert!(matches!(result, Err(Error::Render(_))));
    assert!(!output.exists(), "no partial output may be written");
}

#[test]
#[cfg(feature = "cdp")]
#[ignore] // Requires Chrome to be installed
fn test_pdf_export_end_to_end() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("resume/resume.pdf");

    let config = BuildConfig {
        input: fixture("minimal.json"),
        output: output.clone(),
        ..Default::default()
    };

    let path = cvpress::build(&config).expect("build failed");
    assert_eq!(path, output);

    let bytes = fs::read(&output).expect("read exported PDF");
    assert!(bytes.len() > 100, "PDF output seems too small");
    assert_eq!(&bytes[0..5], b"%PDF-");
}

#[test]
#[cfg(feature = "cdp")]
#[ignore] // Requires Chrome to be installed
fn test_exporter_is_released_on_failure() {
    use cvpress::{Exporter, PageSetup};

    // A zero timeout forces the content load to fail; close() must still
    // succeed afterwards.
    let page = PageSetup {
        timeout_ms: 0,
        ..Default::default()
    };
    let mut exporter = match cvpress::new_exporter(page) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Skipping release test because Chrome failed to launch: {}", e);
            return;
        }
    };

    let _ = exporter.export("<!DOCTYPE html><html><body>x</body></html>");
    exporter.close().expect("close must succeed after a failed export");
}
