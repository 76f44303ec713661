use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

const GREETING_COMPONENT: &str = "
export function Greeting({ name, count }) {
  return (
    <div>
      <h1>{t('greeting', { name, count })}</h1>
      <Trans i18nKey=\"farewell\" values={vars} />
    </div>
  );
}
";

#[test]
fn test_extract_text() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", GREETING_COMPONENT)?;

    let output = run(test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    src/app.tsx
      5:14  function-call      greeting  [name, count]
      6:7   templated-element  farewell  ?

    ✓ Extracted 2 keys from 1 source file
    ");
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_extract_json() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", GREETING_COMPONENT)?;
    test.write_file("src/util.js", "export const noop = () => {};")?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let parsed: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        parsed,
        json!({
            "src/app.tsx": [
                {
                    "source": "function-call",
                    "i18nKey": "greeting",
                    "variables": { "status": "known", "names": ["name", "count"] },
                    "line": 5,
                    "col": 14
                },
                {
                    "source": "templated-element",
                    "i18nKey": "farewell",
                    "variables": { "status": "unknown" },
                    "line": 6,
                    "col": 7
                }
            ],
            "src/util.js": []
        })
    );

    Ok(())
}

#[test]
fn test_extract_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Extracted 0 keys from 0 source files\n");

    Ok(())
}

#[test]
fn test_extract_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_file("ok.js", "t('fine');")?;
    test.write_file("broken.js", "t('partial', {")?;

    let output = run(test.extract_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("ok.js"));
    assert!(
        output
            .stdout
            .contains("✘ Extracted 1 key from 1 source file (1 file could not be parsed)")
    );
    assert_eq!(
        output.stderr,
        "warning: 1 file(s) could not be parsed (use -v for details)\n"
    );

    Ok(())
}

#[test]
fn test_extract_lists_parse_errors_when_verbose() -> Result<()> {
    let test = CliTest::with_file("ok.js", "t('fine');")?;
    test.write_file("broken.js", "t('partial', {")?;

    let mut cmd = test.extract_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("warning: broken.js - "));
    assert!(!output.stderr.contains("use -v for details"));

    Ok(())
}

#[test]
fn test_extract_skips_node_modules_and_minified_files() -> Result<()> {
    let test = CliTest::with_file("app.js", "t('app.title');")?;
    test.write_file("node_modules/lib/index.js", "t('vendor.title');")?;
    test.write_file("dist/bundle.min.js", "t('bundle.title');")?;

    let output = run(test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("app.title"));
    assert!(!output.stdout.contains("vendor.title"));
    assert!(!output.stdout.contains("bundle.title"));

    Ok(())
}

#[test]
fn test_extract_with_config_includes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyscanrc.json", r#"{ "includes": ["core"] }"#)?;
    test.write_file("core/index.ts", "export const a = t('core.key');")?;
    test.write_file("scripts/build.js", "t('script.key');")?;

    let output = run(test.extract_command())?;

    assert!(output.stdout.contains("core.key"));
    assert!(!output.stdout.contains("script.key"));

    Ok(())
}

#[test]
fn test_extract_with_source_root() -> Result<()> {
    let test = CliTest::with_file("app/pages/home.jsx", "export default () => t('home');")?;
    test.write_file("other.js", "t('other');")?;

    let mut cmd = test.extract_command();
    cmd.args(["--source-root", "app"]);
    let output = run(cmd)?;

    assert!(output.stdout.contains("pages/home.jsx"));
    assert!(!output.stdout.contains("other"));

    Ok(())
}

#[test]
fn test_config_source_root_resolves_from_config_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyscanrc.json", r#"{ "sourceRoot": "src" }"#)?;
    test.write_file("src/app.js", "t('in.src');")?;
    test.write_file("scripts/build.js", "t('in.scripts');")?;

    let mut cmd = test.extract_command();
    cmd.current_dir(test.root().join("scripts"));
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("app.js\n"));
    assert!(output.stdout.contains("in.src"));
    assert!(!output.stdout.contains("in.scripts"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("app.js", "t('a');")?;
    test.write_file(".keyscanrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.extract_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("extract"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
