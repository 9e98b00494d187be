//! Integration tests for ttree


use harness::{TestDir, body_lines, run_ttree};

fn demo() -> TestDir {
    let dir = TestDir::new();
    dir.add_dir("demo/api/handlers");
    dir.add_dir("demo/api/models");
    for sub in ["a", "b", "c"] {
        dir.add_dir(&format!("demo/docs/{}", sub));
    }
    for file in ["a.py", "b.py", "c.py", "d.py", "e.sh"] {
        dir.add_file(&format!("demo/scripts/{}", file), "");
    }
    for sub in ["unit", "e2e", "fixtures", "integration", "load", "smoke"] {
        dir.add_dir(&format!("demo/tests/{}", sub));
    }
    dir
}

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::new();
    dir.add_file("main.rs", "fn main() {}");
    dir.add_file("lib.rs", "pub mod foo;");
    dir.add_file("src/foo.rs", "");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["-m", "5"]);
    assert!(success, "ttree should succeed");
    assert_eq!(
        stdout,
        ".\n\
         ├── lib.rs\n\
         ├── main.rs\n\
         └── src\n    \
             └── foo.rs\n"
    );
}

#[test]
fn test_demo_layout() {
    let dir = demo();

    let (stdout, _stderr, success) = run_ttree(&dir.path().join("demo"), &["-m", "2", "-d", "4"]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── api",
            "│   ├── handlers",
            "│   └── models",
            "├── docs",
            "│   ├── a",
            "│   ├── b",
            "│   └── c",
            "├── scripts",
            "│   └── 4 py, 1 sh files",
            "└── tests",
            "    └── 6 directories",
        ]
    );
}

#[test]
fn test_demo_collapses_at_root() {
    let dir = demo();

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["demo", "-m", "2", "-d", "3"]);
    assert!(success);
    assert_eq!(stdout, "demo\n└── 4 directories\n");
}

#[test]
fn test_default_thresholds() {
    let dir = TestDir::new();
    dir.add_file("a.py", "");
    dir.add_file("b.py", "");
    dir.add_file("notes.txt", "");
    dir.add_file("single/only.md", "");

    // Defaults: one file listed, twenty directories listed
    let (stdout, _stderr, success) = run_ttree(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec!["├── 2 py, 1 txt files", "└── single", "    └── only.md"]
    );
}

#[test]
fn test_files_precede_directories() {
    let dir = TestDir::new();
    dir.add_dir("alpha");
    dir.add_file("zeta.txt", "");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["-m", "5"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["├── zeta.txt", "└── alpha"]);
}

#[test]
fn test_zero_thresholds() {
    let dir = TestDir::new();
    dir.add_file("README", "");
    dir.add_dir("src");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["-m", "0", "-d", "0"]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec!["├── 1 no extension file", "└── 1 directory"]
    );
}

#[test]
fn test_unlimited_thresholds() {
    let dir = TestDir::new();
    dir.add_files("logs", "day", "log", 40);

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["-m", "unlimited"]);
    assert!(success);
    assert!(stdout.contains("day0.log"));
    assert!(stdout.contains("day39.log"));
    assert!(!stdout.contains("files"), "nothing should collapse: {}", stdout);
}

#[test]
fn test_show_all_flag() {
    let dir = TestDir::new();
    dir.add_file("main.rs", "");
    dir.add_file(".env", "SECRET=1");
    dir.add_dir(".cache/blobs");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["-m", "5"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["└── main.rs"]);

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["-m", "5", "-a"]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── .env",
            "├── main.rs",
            "└── .cache",
            "    └── blobs"
        ]
    );
}

#[test]
fn test_hidden_files_not_counted() {
    let dir = TestDir::new();
    dir.add_file("a.rs", "");
    dir.add_file("b.rs", "");
    dir.add_file(".hidden.rs", "");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &[]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["└── 2 rs files"]);

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["--all"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["└── 3 rs files"]);
}

#[test]
fn test_root_label() {
    let dir = TestDir::new();
    dir.add_file("sub/file.txt", "");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["sub/"]);
    assert!(success);
    assert_eq!(stdout.lines().next(), Some("sub"));
}

#[test]
fn test_output_is_repeatable() {
    let dir = demo();

    let (first, _, _) = run_ttree(dir.path(), &["-m", "2", "-d", "6"]);
    let (second, _, _) = run_ttree(dir.path(), &["-m", "2", "-d", "6"]);
    assert_eq!(first, second);
}

#[test]
fn test_json_output() {
    let dir = TestDir::new();
    dir.add_file("a.rs", "");
    dir.add_file("b.rs", "");

    let (stdout, _stderr, success) = run_ttree(dir.path(), &["--json"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["type"], "directory_node");
    assert_eq!(value["name"], ".");
    assert_eq!(value["children"][0]["type"], "file_summary");
    assert_eq!(value["children"][0]["total"], 2);
    assert_eq!(value["children"][0]["counts"][0]["extension"], "rs");
}

#[test]
fn test_missing_root() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_ttree(dir.path(), &["does-not-exist"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("path does not exist: does-not-exist"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_file_root() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "");

    let (stdout, stderr, success) = run_ttree(dir.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("not a directory: plain.txt"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_limit_rejected() {
    let dir = TestDir::new();

    let (_stdout, stderr, success) = run_ttree(dir.path(), &["-m", "-3"]);
    assert!(!success);
    assert!(!stderr.is_empty());

    let (_stdout, _stderr, success) = run_ttree(dir.path(), &["-d", "many"]);
    assert!(!success);
}
