use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const TRANSLATED_PO: &str = r#"msgid ""
msgstr ""
"Language: fr\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"

msgid "Save"
msgstr "Enregistrer"

msgid "Cancel"
msgstr "Annuler"
"#;

const PARTIAL_PO: &str = r#"msgid ""
msgstr ""
"Language: fr\n"

msgid "Save"
msgstr "Enregistrer"

msgid "Cancel"
msgstr ""

msgid "item"
msgid_plural "items"
msgstr[0] "article"
msgstr[1] ""
"#;

#[test]
fn test_stats_fully_translated() -> Result<()> {
    let test = CliTest::with_file("messages.po", TRANSLATED_PO)?;

    let output = test.stats_command().arg("messages.po").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("2 entries translated"));

    Ok(())
}

#[test]
fn test_stats_untranslated_entries_fail() -> Result<()> {
    let test = CliTest::with_file("messages.po", PARTIAL_PO)?;

    let output = test.stats_command().arg("messages.po").output()?;
    assert_eq!(output.status.code(), Some(1));
    // "Cancel" is empty; "item" has an empty plural form.
    assert!(stdout_of(&output).contains("2 of 3 entries untranslated"));

    Ok(())
}

#[test]
fn test_stats_verbose_lists_msgids() -> Result<()> {
    let test = CliTest::with_file("messages.po", PARTIAL_PO)?;

    let output = test.stats_command().args(["messages.po", "-v"]).output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Cancel"));
    assert!(stdout.contains("item"));
    assert!(!stdout.contains("Save\n"));

    Ok(())
}

#[test]
fn test_stats_missing_catalog_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.stats_command().arg("missing.po").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to load catalog"));

    Ok(())
}

#[test]
fn test_stats_malformed_catalog_is_an_error() -> Result<()> {
    let test = CliTest::with_file("messages.po", "msgid broken here\n")?;

    let output = test.stats_command().arg("messages.po").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("malformed PO text at line 1"));

    Ok(())
}
