use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_extract_writes_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "t`Hello ${name}`;\ngettext(\"Save changes\");\n",
    )?;

    let output = test
        .extract_command()
        .args(["-o", "messages.pot"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Extracted 2 entries from 1 source file"));

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("msgid \"Hello ${ name }\""));
    assert!(catalog.contains("msgid \"Save changes\""));
    assert!(catalog.contains("#: src/app.js:1"));
    assert!(catalog.contains("#: src/app.js:2"));

    Ok(())
}

#[test]
fn test_extract_writes_default_headers() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hi`;\n")?;

    test.extract_command()
        .args(["-o", "messages.pot"])
        .output()?;

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.starts_with("msgid \"\"\nmsgstr \"\"\n"));
    assert!(catalog.contains("\"Language: en\\n\""));
    assert!(catalog.contains("\"Content-Type: text/plain; charset=UTF-8\\n\""));
    assert!(catalog.contains("\"Plural-Forms: nplurals=2; plural=(n != 1);\\n\""));

    Ok(())
}

#[test]
fn test_extract_merges_duplicate_references() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "t`Hello`;\n")?;
    test.write_file("src/b.js", "const x = 1;\nt`Hello`;\n")?;

    let output = test
        .extract_command()
        .args(["-o", "messages.pot"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    // One entry, two reference lines, files in sorted order.
    assert!(stdout_of(&output).contains("Extracted 2 entries from 2 source files"));

    let catalog = test.read_file("messages.pot")?;
    assert_eq!(catalog.matches("msgid \"Hello\"").count(), 1);
    assert!(catalog.contains("#: src/a.js:1\n#: src/b.js:2\nmsgid \"Hello\""));

    Ok(())
}

#[test]
fn test_extract_plural_entry() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "const a = 2;\nngettext(msgid`${ a } banana`, `${ a } bananas`, a);\n",
    )?;

    test.extract_command()
        .args(["-o", "messages.pot"])
        .output()?;

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("msgid \"${ a } banana\""));
    assert!(catalog.contains("msgid_plural \"${ a } bananas\""));
    assert!(catalog.contains("msgstr[0] \"\""));
    assert!(catalog.contains("msgstr[1] \"\""));

    Ok(())
}

#[test]
fn test_extract_location_file_policy() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hi there`;\n")?;

    test.extract_command()
        .args(["-o", "messages.pot", "--location", "file"])
        .output()?;

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("#: src/app.js\n"));
    assert!(!catalog.contains("#: src/app.js:1"));

    Ok(())
}

#[test]
fn test_extract_location_never_policy() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hi there`;\n")?;

    test.extract_command()
        .args(["-o", "messages.pot", "--location", "never"])
        .output()?;

    let catalog = test.read_file("messages.pot")?;
    assert!(!catalog.contains("#:"));
    assert!(catalog.contains("msgid \"Hi there\""));

    Ok(())
}

#[test]
fn test_extract_skips_insignificant_strings() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "gettext(\"123\");\ngettext(\"!!!\");\nt`${x}`;\nt`real text`;\n",
    )?;

    let output = test
        .extract_command()
        .args(["-o", "messages.pot"])
        .output()?;
    assert!(stdout_of(&output).contains("Extracted 1 entry"));

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("msgid \"real text\""));
    assert!(!catalog.contains("msgid \"123\""));

    Ok(())
}

#[test]
fn test_extract_context_entries_merge_by_default() -> Result<()> {
    // Historical single-bucket behavior: same msgid under different
    // contexts collapses to the first occurrence.
    let test = CliTest::with_file(
        "src/app.js",
        "c(\"menu\").t`File`;\nc(\"verb\").t`File`;\n",
    )?;

    let output = test
        .extract_command()
        .args(["-o", "messages.pot"])
        .output()?;
    assert!(stdout_of(&output).contains("Extracted 2 entries"));

    let catalog = test.read_file("messages.pot")?;
    assert_eq!(catalog.matches("msgid \"File\"").count(), 1);
    assert!(catalog.contains("msgctxt \"menu\""));
    assert!(!catalog.contains("msgctxt \"verb\""));

    Ok(())
}

#[test]
fn test_extract_split_contexts() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "c(\"menu\").t`File`;\nc(\"verb\").t`File`;\n",
    )?;

    test.extract_command()
        .args(["-o", "messages.pot", "--split-contexts"])
        .output()?;

    let catalog = test.read_file("messages.pot")?;
    assert_eq!(catalog.matches("msgid \"File\"").count(), 2);
    assert!(catalog.contains("msgctxt \"menu\""));
    assert!(catalog.contains("msgctxt \"verb\""));

    Ok(())
}

#[test]
fn test_extract_with_explicit_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/page.js", "t`From app`;\n")?;
    test.write_file("src/other.js", "t`From src`;\n")?;

    test.extract_command()
        .args(["app", "-o", "messages.pot"])
        .output()?;

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("msgid \"From app\""));
    assert!(!catalog.contains("msgid \"From src\""));

    Ok(())
}

#[test]
fn test_extract_warns_on_unparsable_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/good.js", "t`fine`;\n")?;
    test.write_file("src/bad.js", "const = broken;\n")?;

    let output = test
        .extract_command()
        .args(["-o", "messages.pot"])
        .output()?;

    // Extraction still succeeds; the broken file is reported on stderr.
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("1 file(s) could not be parsed"));

    let catalog = test.read_file("messages.pot")?;
    assert!(catalog.contains("msgid \"fine\""));

    Ok(())
}

#[test]
fn test_extract_output_from_config() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`configured`;\n")?;
    test.write_file(".xpotrc.json", r#"{ "output": "./po/template.pot" }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let catalog = test.read_file("po/template.pot")?;
    assert!(catalog.contains("msgid \"configured\""));

    Ok(())
}

#[test]
fn test_extract_round_trips_through_stats() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hello ${name}`;\n")?;

    test.extract_command()
        .args(["-o", "messages.pot"])
        .output()?;

    // The freshly extracted catalog parses and reports as untranslated.
    let output = test.stats_command().arg("messages.pot").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("1 of 1 entry untranslated"));

    Ok(())
}
