use leitstand_fs::{ConfigStore, Error, NormalizedPath};
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct MenuDoc {
    menu: String,
    items: Vec<String>,
}

#[test]
fn test_load_yaml_descriptor() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("module.yaml");
    fs::write(&file_path, "menu: pods\nitems:\n  - pod\n  - pod-settings\n").unwrap();

    let doc: MenuDoc = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(doc.menu, "pods");
    assert_eq!(doc.items, vec!["pod", "pod-settings"]);
}

#[test]
fn test_load_yml_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("contrib.yml");
    fs::write(&file_path, "menu: images\nitems: []\n").unwrap();

    let doc: MenuDoc = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();
    assert_eq!(doc.menu, "images");
    assert!(doc.items.is_empty());
}

#[test]
fn test_load_toml_settings() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("leitstand.toml");
    fs::write(&file_path, "menu = \"pods\"\nitems = [\"pod\"]\n").unwrap();

    let doc: MenuDoc = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();
    assert_eq!(doc.items, vec!["pod"]);
}

#[test]
fn test_invalid_yaml_reports_format_and_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("broken.yaml");
    fs::write(&file_path, "menu: [unterminated\n").unwrap();

    let result: leitstand_fs::Result<MenuDoc> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    match result {
        Err(Error::ConfigParse { format, path, .. }) => {
            assert_eq!(format, "YAML");
            assert!(path.ends_with("broken.yaml"));
        }
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.yaml"));

    let err = ConfigStore::new().load::<MenuDoc>(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("module.xml");
    fs::write(&file_path, "<module/>").unwrap();

    let result: leitstand_fs::Result<MenuDoc> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_save_json_export() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("export").join("pods.json");
    let path = NormalizedPath::new(&file_path);

    let doc = MenuDoc {
        menu: "pods".into(),
        items: vec!["pod".into()],
    };
    ConfigStore::new().save(&path, &doc).unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert!(content.contains("\"menu\": \"pods\""));

    let loaded: MenuDoc = ConfigStore::new().load(&path).unwrap();
    assert_eq!(loaded, doc);
}
