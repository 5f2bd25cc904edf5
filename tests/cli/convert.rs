use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const TEMPLATE: &str = "<p data-i18n=\"Xk3\">Hello</p><img src=\"logo.png\" data-i18n=\"Qz9\">";
const KEYS: &str = r#"{"Xk3_html": "Hello", "Qz9_src": "logo.png"}"#;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file("page.template.html", TEMPLATE)?;
    test.write_file("page.keys.json", KEYS)
}

#[test]
fn test_convert_dry_run() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .convert_command()
        .args([
            "page.template.html",
            "page.keys.json",
            "--strategy",
            "positional",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("Xk3 -> p0"));
    assert!(stdout.contains("Qz9 -> img1"));
    assert!(stdout.contains("Would convert 2 identifiers."));

    assert_eq!(test.read_file("page.template.html")?, TEMPLATE);
    assert_eq!(test.read_file("page.keys.json")?, KEYS);

    Ok(())
}

#[test]
fn test_convert_apply_with_prefix_sequence() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .convert_command()
        .args([
            "page.template.html",
            "page.keys.json",
            "--strategy",
            "positional",
            "--prefix-sequence",
            "--apply",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Converted 2 identifiers"));

    assert_eq!(
        test.read_file("page.template.html")?,
        "<p data-i18n=\"0-p0\">Hello</p><img src=\"logo.png\" data-i18n=\"1-img1\">\n"
    );
    assert_eq!(
        test.read_file("page.keys.json")?,
        concat!(
            "{\n",
            "  \"0-p0_html\": \"Hello\",\n",
            "  \"1-img1_src\": \"logo.png\"\n",
            "}\n"
        )
    );

    Ok(())
}
