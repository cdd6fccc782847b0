use crate::{
    FileErrorKind,
    WriteMode,
    create_parent_dirs,
    exists,
    initialize_log_file,
    parent,
    read_bytes,
    read_string,
    remove_file,
    set_log_file_path,
    write_log,
    write_string,
};

fn tmp_path(name: &str) -> String {
    std::env::temp_dir().join(format!("pfp-fs-{}-{name}", std::process::id())).to_string_lossy().to_string()
}

#[test]
fn write_modes() {
    let path = tmp_path("write-modes.txt");

    write_string(&path, "abc", WriteMode::CreateOrTruncate).unwrap();
    write_string(&path, "def", WriteMode::AppendOrCreate).unwrap();
    assert_eq!(read_string(&path).unwrap(), "abcdef");

    write_string(&path, "가나다", WriteMode::CreateOrTruncate).unwrap();
    assert_eq!(read_string(&path).unwrap(), "가나다");

    remove_file(&path).unwrap();
    assert!(!exists(&path));
    assert_eq!(read_bytes(&path).unwrap_err().kind, FileErrorKind::FileNotFound);
    write_string(&path, "x", WriteMode::AppendOrCreate).unwrap();
    assert_eq!(read_string(&path).unwrap(), "x");
    remove_file(&path).unwrap();
}

#[test]
fn parent_dirs() {
    assert_eq!(parent("a/b/c.d").unwrap(), "a/b");
    assert_eq!(parent("c.d").unwrap(), "");
    assert!(parent("/").is_err());

    let dir = tmp_path("nested");
    let path = format!("{dir}/x/y.txt");
    create_parent_dirs(&path).unwrap();
    write_string(&path, "", WriteMode::CreateOrTruncate).unwrap();
    assert!(exists(&path));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn log_file() {
    let path = tmp_path("log.txt");
    initialize_log_file(&path, true).unwrap();

    set_log_file_path(Some(path.clone()));
    write_log("tests", "hello");
    write_log("tests", "world");
    set_log_file_path(None);
    write_log("tests", "this is not written");

    let log = read_string(&path).unwrap();
    let lines = log.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("| hello"));
    assert!(lines[1].ends_with("| world"));

    remove_file(&path).unwrap();
    let _ = remove_file(&format!("{path}-backup"));
}
