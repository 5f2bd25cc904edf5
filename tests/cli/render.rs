use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(
        "page.template.html",
        "<p data-i18n=\"p0\">Hello</p><div><a href=\"https://example.com\" data-i18n=\"div1_a0\">Docs</a></div>",
    )?;
    test.write_file(
        "de.json",
        r#"{"p0_html": "Hallo", "div1_a0_html": "Doku", "div1_a0_href": "https://example.de"}"#,
    )
}

#[test]
fn test_render_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .render_command()
        .args(["page.template.html", "de.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "<p data-i18n=\"p0\">Hallo</p><div><a href=\"https://example.de\" data-i18n=\"div1_a0\">Doku</a></div>\n"
    );

    Ok(())
}

#[test]
fn test_render_to_file() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .render_command()
        .args(["page.template.html", "de.json", "-o", "out/de.html"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Rendered page.template.html into out/de.html"));
    assert!(test.read_file("out/de.html")?.contains("Hallo"));

    Ok(())
}

#[test]
fn test_render_invalid_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file("bad.json", r#"{"p0_html": 1}"#)?;

    let output = test
        .render_command()
        .args(["page.template.html", "bad.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse key file"));

    Ok(())
}
