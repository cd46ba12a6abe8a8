use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "\u{2713} Created .i18nmergerc.json\n");

    let content = test.read_file(".i18nmergerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceLocale"], "en-us");
    assert_eq!(parsed["outdir"], ".");
    assert_eq!(parsed["format"], "json");
    assert!(parsed["inputs"].as_array().is_some_and(|a| a.is_empty()));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nmergerc.json", "{}")?;

    let (output, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout, "\u{2718} .i18nmergerc.json already exists\n");
    assert_eq!(test.read_file(".i18nmergerc.json")?, "{}");

    Ok(())
}
