use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const RUSSIAN_PO: &str = r#"msgid ""
msgstr ""
"Language: ru\n"
"Plural-Forms: nplurals=3; plural=n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2;\n"

msgid "Save"
msgstr "Сохранить"

msgid "${ n } file"
msgid_plural "${ n } files"
msgstr[0] "${ n } файл"
msgstr[1] "${ n } файла"
msgstr[2] "${ n } файлов"

msgid "${ n } item"
msgid_plural "${ n } items"
msgstr[0] ""
msgstr[1] ""
msgstr[2] ""

msgctxt "menu"
msgid "File"
msgstr "Файл"
"#;

#[test]
fn test_lookup_singular() -> Result<()> {
    let test = CliTest::with_file("ru.po", RUSSIAN_PO)?;

    let output = test.lookup_command().args(["ru.po", "Save"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "Сохранить");

    Ok(())
}

#[test]
fn test_lookup_selects_plural_forms() -> Result<()> {
    let test = CliTest::with_file("ru.po", RUSSIAN_PO)?;

    for (count, expected) in [
        ("1", "${ n } файл"),
        ("3", "${ n } файла"),
        ("5", "${ n } файлов"),
        ("21", "${ n } файл"),
        ("22", "${ n } файла"),
    ] {
        let output = test
            .lookup_command()
            .args(["ru.po", "${ n } file", "-n", count])
            .output()?;
        assert_eq!(
            stdout_of(&output).trim(),
            expected,
            "wrong form for count {count}"
        );
    }

    Ok(())
}

#[test]
fn test_lookup_untranslated_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("ru.po", RUSSIAN_PO)?;

    let output = test
        .lookup_command()
        .args(["ru.po", "${ n } item", "-n", "1"])
        .output()?;
    assert_eq!(stdout_of(&output).trim(), "${ n } item");

    let output = test
        .lookup_command()
        .args(["ru.po", "${ n } item", "-n", "5"])
        .output()?;
    assert_eq!(stdout_of(&output).trim(), "${ n } items");

    Ok(())
}

#[test]
fn test_lookup_with_context() -> Result<()> {
    let test = CliTest::with_file("ru.po", RUSSIAN_PO)?;

    let output = test
        .lookup_command()
        .args(["ru.po", "File", "-c", "menu"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output).trim(), "Файл");

    // The same msgid without the context is a different (absent) entry.
    let output = test.lookup_command().args(["ru.po", "File"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("No entry for \"File\""));

    Ok(())
}

#[test]
fn test_lookup_missing_entry_is_an_error() -> Result<()> {
    let test = CliTest::with_file("ru.po", RUSSIAN_PO)?;

    let output = test.lookup_command().args(["ru.po", "Nope"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("No entry for \"Nope\""));

    Ok(())
}

#[test]
fn test_lookup_bad_plural_header_is_an_error() -> Result<()> {
    let po = r#"msgid ""
msgstr ""
"Plural-Forms: total nonsense\n"

msgid "item"
msgid_plural "items"
msgstr[0] "article"
msgstr[1] "articles"
"#;
    let test = CliTest::with_file("bad.po", po)?;

    // Without a count the header is never consulted.
    let output = test.lookup_command().args(["bad.po", "item"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let output = test
        .lookup_command()
        .args(["bad.po", "item", "-n", "2"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Cannot select a plural form"));

    Ok(())
}
