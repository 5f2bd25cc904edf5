use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_writes_template_and_keys() -> Result<()> {
    let test = CliTest::with_file(
        "page.html",
        "<p>Hello</p>\n<div><a href=\"https://example.com\">Docs</a></div>\n",
    )?;

    let output = test
        .extract_command()
        .args(["page.html", "--strategy", "positional"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 3 keys from 1 file"));

    assert_eq!(
        test.read_file("page.template.html")?,
        "<p data-i18n=\"p0\">Hello</p>\n<div><a href=\"https://example.com\" data-i18n=\"div2_a0\">Docs</a></div>\n"
    );
    assert_eq!(
        test.read_file("page.keys.json")?,
        concat!(
            "{\n",
            "  \"div2_a0_href\": \"https://example.com\",\n",
            "  \"div2_a0_html\": \"Docs\",\n",
            "  \"p0_html\": \"Hello\"\n",
            "}\n"
        )
    );

    Ok(())
}

#[test]
fn test_extract_random_keys() -> Result<()> {
    let test = CliTest::with_file("page.html", "<h1>Title</h1><p>Body</p>")?;

    let output = test.extract_command().arg("page.html").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let keys: Value = serde_json::from_str(&test.read_file("page.keys.json")?)?;
    let keys = keys.as_object().unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.keys().all(|key| key.len() == 15 && key.ends_with("_html")));

    Ok(())
}

#[test]
fn test_extract_is_idempotent_on_templates() -> Result<()> {
    let test = CliTest::with_file("page.html", "<p>Hello</p>")?;
    test.extract_command().arg("page.html").output()?;

    let template = test.read_file("page.template.html")?;
    let keys = test.read_file("page.keys.json")?;

    let output = test.extract_command().arg("page.template.html").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("page.template.html")?, template);
    assert_eq!(test.read_file("page.keys.json")?, keys);

    Ok(())
}

#[test]
fn test_extract_scans_config_includes() -> Result<()> {
    let test = CliTest::with_file(
        ".htmlkeysrc.json",
        r#"{"includes": ["site"], "strategy": "positional", "parse": {"images": false}}"#,
    )?;
    test.write_file("site/index.html", "<p><img src=\"a.png\"></p>")?;
    test.write_file("site/about.html", "<p>About</p>")?;
    test.write_file("site/old.template.html", "<p data-i18n=\"x\">Old</p>")?;
    test.write_file("other/skip.html", "<p>Skipped</p>")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("from 2 files"));

    assert!(test.root().join("site/about.keys.json").exists());
    assert_eq!(test.read_file("site/index.keys.json")?, "{}\n");
    assert!(!test.root().join("site/old.keys.json").exists());
    assert!(!test.root().join("other/skip.keys.json").exists());

    Ok(())
}

#[test]
fn test_extract_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_file("page.html", "<h1>Title</h1><p>Body</p>")?;

    let output = test
        .extract_command()
        .args(["page.html", "--strategy", "positional", "-v"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("  page.html -> page.template.html (2 keys)\n"));

    Ok(())
}

#[test]
fn test_extract_rejects_inputs_sharing_outputs() -> Result<()> {
    let test = CliTest::with_file("page.html", "<p>From html</p>")?;
    test.write_file("page.htm", "<h1>From htm</h1>")?;

    let output = test
        .extract_command()
        .args([".", "--strategy", "positional"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr(&output);
    assert!(stderr.contains("page.html"), "stderr: {}", stderr);
    assert!(stderr.contains("already written for"), "stderr: {}", stderr);
    assert!(stdout(&output).contains("Extracted 1 key from 1 file"));
    assert!(stdout(&output).contains("1 file could not be processed"));

    // "page.htm" sorts first and owns the outputs.
    assert_eq!(
        test.read_file("page.keys.json")?,
        "{\n  \"h10_html\": \"From htm\"\n}\n"
    );
    assert_eq!(
        test.read_file("page.template.html")?,
        "<h1 data-i18n=\"h10\">From htm</h1>\n"
    );

    Ok(())
}

#[test]
fn test_extract_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("missing.html").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Path does not exist"));

    Ok(())
}

#[test]
fn test_extract_no_files() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: no HTML files found"));

    Ok(())
}
