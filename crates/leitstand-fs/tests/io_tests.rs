use leitstand_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("out/modules/pods.json"));

    io::write_atomic(&path, b"{}").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "{}");
}

#[test]
fn test_write_atomic_overwrites_and_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("pods.json");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_read_text_nonexistent_file() {
    let result = io::read_text(&NormalizedPath::new("/nonexistent/module.yaml"));
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_list_files_filters_and_sorts() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.yaml"), "").unwrap();
    fs::write(temp.path().join("a.yml"), "").unwrap();
    fs::write(temp.path().join("notes.txt"), "").unwrap();
    fs::create_dir(temp.path().join("c.yaml")).unwrap();

    let files = io::list_files(&NormalizedPath::new(temp.path()), &["yaml", "yml"]).unwrap();
    let names: Vec<_> = files.iter().filter_map(|f| f.file_name()).collect();
    assert_eq!(names, vec!["a.yml", "b.yaml"]);
}

#[test]
fn test_list_files_missing_dir_is_empty() {
    let files = io::list_files(&NormalizedPath::new("/nonexistent/contrib"), &["yaml"]).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_list_dirs_returns_module_names() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("pods")).unwrap();
    fs::create_dir(temp.path().join("images")).unwrap();
    fs::write(temp.path().join("main-menu.yaml"), "").unwrap();

    let dirs = io::list_dirs(&NormalizedPath::new(temp.path())).unwrap();
    assert_eq!(dirs, vec!["images", "pods"]);
}
