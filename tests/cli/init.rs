use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Created .keyscanrc.json\n");
    assert!(test.root().join(".keyscanrc.json").exists());

    let content = test.read_file(".keyscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["functionName"], "t");
    assert_eq!(parsed["componentName"], "Trans");
    assert!(parsed["ignores"].is_array());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyscanrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stderr, "Error: .keyscanrc.json already exists\n");
    assert_eq!(test.read_file(".keyscanrc.json")?, "{}");

    Ok(())
}
