use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

const EN_US: &str = r#"[
  { "id": "greeting", "translation": "Hello" },
  {
    "id": "items",
    "translation": { "one": "{{.Count}} item", "other": "{{.Count}} items" }
  }
]"#;

#[test]
fn test_merge_fills_empty_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"[{ "id": "greeting", "translation": "Hello" }]"#)?;
    test.write_file("fr.json", "")?;

    let (output, stdout, stderr) = run(test
        .merge_command()
        .args(["--source-locale", "en", "--outdir", "out"])
        .args(["en.json", "fr.json"]))?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr);
    assert_snapshot!(stdout, @r"
    ✓ en (source)  1 key, 0 untranslated
    ✓ fr           1 key, 1 untranslated

    Merged 2 files into 2 locales (4 files written, 1 untranslated entry)
    ");

    assert_snapshot!(test.read_file("out/fr.all.json")?, @r#"
    [
      {
        "id": "greeting",
        "translation": ""
      }
    ]
    "#);
    assert_snapshot!(test.read_file("out/fr.untranslated.json")?, @r#"
    [
      {
        "id": "greeting",
        "translation": "Hello"
      }
    ]
    "#);
    assert_eq!(test.read_file("out/en.untranslated.json")?, "[]\n");
    Ok(())
}

#[test]
fn test_merge_plural_forms_follow_target_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en-us.all.json", EN_US)?;
    test.write_file(
        "ru-ru.all.json",
        r#"[
  { "id": "greeting", "translation": "Привет" },
  { "id": "items", "translation": { "one": "{{.Count}} предмет" } }
]"#,
    )?;
    test.write_file("ja-jp.all.json", "[]")?;

    let (output, _, stderr) = run(test
        .merge_command()
        .args(["en-us.all.json", "ru-ru.all.json", "ja-jp.all.json"]))?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr);
    assert_snapshot!(test.read_file("ru-ru.untranslated.json")?, @r#"
    [
      {
        "id": "items",
        "translation": {
          "one": "{{.Count}} предмет",
          "few": "{{.Count}} items",
          "many": "{{.Count}} items",
          "other": "{{.Count}} items"
        }
      }
    ]
    "#);
    assert_snapshot!(test.read_file("ja-jp.all.json")?, @r#"
    [
      {
        "id": "greeting",
        "translation": ""
      },
      {
        "id": "items",
        "translation": {
          "other": ""
        }
      }
    ]
    "#);
    assert_snapshot!(test.read_file("ja-jp.untranslated.json")?, @r#"
    [
      {
        "id": "greeting",
        "translation": "Hello"
      },
      {
        "id": "items",
        "translation": {
          "other": "{{.Count}} items"
        }
      }
    ]
    "#);
    assert_eq!(test.read_file("en-us.untranslated.json")?, "[]\n");
    Ok(())
}

#[test]
fn test_merge_replaces_mismatched_shape() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en-us.json", EN_US)?;
    test.write_file(
        "de-de.json",
        r#"{ "greeting": "Hallo", "items": "Artikel", "legacy": "Alt" }"#,
    )?;

    let (output, _, stderr) = run(test
        .merge_command()
        .args(["--outdir", "out", "en-us.json", "de-de.json"]))?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr);
    assert_snapshot!(test.read_file("out/de-de.all.json")?, @r#"
    [
      {
        "id": "greeting",
        "translation": "Hallo"
      },
      {
        "id": "items",
        "translation": {
          "one": "",
          "other": ""
        }
      },
      {
        "id": "legacy",
        "translation": "Alt"
      }
    ]
    "#);
    Ok(())
}

#[test]
fn test_merge_last_loaded_file_wins() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{ "title": "Home" }"#)?;
    test.write_file("de.json", r#"{ "title": "Loading" }"#)?;
    test.write_file("overrides.de.json", r#"{ "title": "Startseite" }"#)?;

    let (output, _, stderr) = run(test.merge_command().args([
        "--source-locale",
        "en",
        "--outdir",
        "out",
        "en.json",
        "de.json",
        "overrides.de.json",
    ]))?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr);
    assert_snapshot!(test.read_file("out/de.all.json")?, @r#"
    [
      {
        "id": "title",
        "translation": "Startseite"
      }
    ]
    "#);
    Ok(())
}

#[test]
fn test_merge_output_is_stable_across_input_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en-us.json", EN_US)?;
    test.write_file("pl.json", r#"{ "zebra": "Zebra", "greeting": "Cześć" }"#)?;
    test.write_file("es.json", r#"{ "items": { "other": "{{.Count}} artículos" } }"#)?;

    run(test
        .merge_command()
        .args(["--outdir", "forward", "en-us.json", "pl.json", "es.json"]))?;
    run(test
        .merge_command()
        .args(["--outdir", "backward", "es.json", "pl.json", "en-us.json"]))?;

    for locale in ["en-us", "pl", "es"] {
        for label in ["all", "untranslated"] {
            let name = format!("{}.{}.json", locale, label);
            assert_eq!(
                test.read_file(&format!("forward/{}", name))?,
                test.read_file(&format!("backward/{}", name))?,
                "{} differs",
                name
            );
        }
    }
    Ok(())
}

#[test]
fn test_merge_reads_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nmergerc.json",
        r#"{
            "inputs": ["locales/*.json"],
            "sourceLocale": "en",
            "outdir": "build"
        }"#,
    )?;
    test.write_file("locales/en.json", r#"{ "greeting": "Hello" }"#)?;
    test.write_file("locales/it.json", "{}")?;

    let (output, stdout, stderr) = run(&mut test.merge_command())?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr);
    assert!(stdout.contains("Merged 2 files into 2 locales"), "{}", stdout);
    assert_snapshot!(test.read_file("build/it.untranslated.json")?, @r#"
    [
      {
        "id": "greeting",
        "translation": "Hello"
      }
    ]
    "#);
    Ok(())
}

#[test]
fn test_merge_unsupported_format_reads_nothing() -> Result<()> {
    let test = CliTest::new()?;
    // Unparseable on purpose: loading it would fail with a different error.
    test.write_file("en.json", "{ not json")?;

    let (output, stdout, stderr) = run(test
        .merge_command()
        .args(["--format", "xml", "--outdir", "out", "en.json"]))?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout, "");
    assert_eq!(stderr, "Error: unsupported format: xml\n");
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_merge_requires_input_files() -> Result<()> {
    let test = CliTest::new()?;

    let (output, _, stderr) = run(&mut test.merge_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr, "Error: need at least one translation file to parse\n");
    Ok(())
}

#[test]
fn test_merge_rejects_invalid_source_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", "{}")?;

    let (output, _, stderr) = run(test
        .merge_command()
        .args(["--source-locale", "klingon", "en.json"]))?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr,
        "Error: invalid source locale \"klingon\": malformed locale identifier \"klingon\"\n"
    );
    Ok(())
}

#[test]
fn test_merge_load_error_names_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{ "greeting": "Hello" }"#)?;
    test.write_file("messages.json", "{}")?;

    let (output, _, stderr) = run(test
        .merge_command()
        .args(["--source-locale", "en", "--outdir", "out", "en.json", "messages.json"]))?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr,
        "Error: failed to load translation file messages.json: \
         no locale found in file name \"messages.json\"\n"
    );
    assert!(!test.root().join("out").exists());
    Ok(())
}
