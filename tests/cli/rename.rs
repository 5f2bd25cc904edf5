use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_rename_identifiers() -> Result<()> {
    let test = CliTest::with_file(
        "page.template.html",
        "<p data-i18n=\"a\">One</p><p data-i18n=\"b\">Two</p><p data-i18n=\"c\">Three</p>",
    )?;
    test.write_file("map.json", r#"{"a": "b", "b": "a", "c": ""}"#)?;

    let output = test
        .rename_command()
        .args(["page.template.html", "map.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "<p data-i18n=\"b\">One</p><p data-i18n=\"a\">Two</p><p data-i18n=\"c\">Three</p>\n"
    );

    Ok(())
}

#[test]
fn test_rename_in_place() -> Result<()> {
    let test = CliTest::with_file("page.template.html", "<p data-i18n=\"old\">Text</p>")?;
    test.write_file("map.json", r#"{"old": "intro"}"#)?;

    let output = test
        .rename_command()
        .args(["page.template.html", "map.json", "-o", "page.template.html"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Renamed 1 identifier"));
    assert_eq!(
        test.read_file("page.template.html")?,
        "<p data-i18n=\"intro\">Text</p>\n"
    );

    Ok(())
}
