//! End-to-end tests for the export direction and the import/export
//! round trip.

use std::fs;
use std::path::Path;

use android_i18n::export::{export, to_sheet, write_sheet};
use android_i18n::output::write_resources;
use android_i18n::{Error, import};
use indoc::indoc;
use tempfile::tempdir;

fn write_strings_xml(project_dir: &Path, dir_name: &str, content: &str) {
    let dir = project_dir.join("src/main/res").join(dir_name);
    fs::create_dir_all(&dir).expect("res directory created");
    fs::write(dir.join("strings.xml"), content).expect("strings.xml written");
}

#[test]
fn export_collects_all_locales() {
    let project = tempdir().expect("temporary directory");
    write_strings_xml(
        project.path(),
        "values",
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="greeting">hi</string>
            </resources>
        "#},
    );
    write_strings_xml(
        project.path(),
        "values-fr",
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="greeting">salut</string>
            </resources>
        "#},
    );

    let trees = export(project.path(), "en").expect("export succeeds");
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].locale, "en");
    assert!(trees[0].is_default_locale);
    assert_eq!(trees[1].locale, "fr");

    let sheet = to_sheet(&trees);
    assert_eq!(sheet.rows[0], vec!["key", "en", "fr"]);
    assert_eq!(sheet.rows[1], vec!["greeting", "hi", "salut"]);
}

#[test]
fn export_denormalizes_markers_and_quotes() {
    let project = tempdir().expect("temporary directory");
    write_strings_xml(
        project.path(),
        "values",
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="plane">l\'avion de %s</string>
                <plurals name="apples">
                    <item quantity="one">1 apple</item>
                    <item quantity="other">%1$s of %2$s apples</item>
                </plurals>
            </resources>
        "#},
    );

    let trees = export(project.path(), "en").expect("export succeeds");
    let sheet = to_sheet(&trees);

    let plane = sheet.rows.iter().find(|row| row[0] == "plane").unwrap();
    assert_eq!(plane[1], "l'avion de #");
    let other = sheet
        .rows
        .iter()
        .find(|row| row[0] == "apples:other")
        .unwrap();
    assert_eq!(other[1], "# of # apples");
}

#[test]
fn export_fails_without_res_directory() {
    let project = tempdir().expect("temporary directory");
    assert!(matches!(
        export(project.path(), "en"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn export_writes_a_csv_sheet() {
    let project = tempdir().expect("temporary directory");
    write_strings_xml(
        project.path(),
        "values",
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="greeting">hi</string>
            </resources>
        "#},
    );

    let trees = export(project.path(), "en").expect("export succeeds");
    let output = project.path().join("out/i18n.csv");
    write_sheet(&to_sheet(&trees), &output).expect("sheet written");

    let content = fs::read_to_string(&output).expect("csv content");
    assert_eq!(content, "key,en\ngreeting,hi\n");
}

#[test]
fn import_export_round_trip_restores_the_sheet() {
    let project = tempdir().expect("temporary directory");
    let source = project.path().join("i18n.csv");
    let original = "key,en,fr\n\
                    greeting,hi,salut\n\
                    plane,the plane,l'avion\n\
                    trip,from # to #,de # à #\n\
                    apples:one,1 apple,1 pomme\n\
                    apples:other,# apples,# pommes\n";
    fs::write(&source, original).expect("source written");

    let trees = import(&source, "en").expect("import succeeds");
    write_resources(&trees, project.path()).expect("resources written");

    let exported = export(project.path(), "en").expect("export succeeds");
    let sheet = to_sheet(&exported);
    let output = project.path().join("roundtrip.csv");
    write_sheet(&sheet, &output).expect("sheet written");

    let content = fs::read_to_string(&output).expect("csv content");
    assert_eq!(content.replace("\r\n", "\n"), original);
}
