//! Command dispatch against a temporary workspace file.

use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const WORKSPACE: &str = r#"{
  "spaces": [
    {"id": "personal", "name": "Personal"},
    {"id": "all", "name": "All", "expanded": true, "children": [
      {"id": "eng", "name": "Engineering", "children": [
        {"id": "backend", "name": "Backend"},
        {"id": "frontend", "name": "Frontend"}
      ]},
      {"id": "sales", "name": "Sales"}
    ]}
  ],
  "users": [
    {"id": "1", "full_name": "Admin", "role": "administrator"},
    {"id": "2", "full_name": "Viewer", "role": "commenter", "visible_space_ids": ["sales"]}
  ],
  "filters": [
    {"name": "Eng board", "is_public": true, "author": "1", "spaces": ["eng"]},
    {"name": "Scratch", "is_public": false, "author": "2"}
  ]
}"#;

fn workspace() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(WORKSPACE.as_bytes()).unwrap();
    file
}

fn run(file: &NamedTempFile, args: &[&str]) -> String {
    let path = file.path().to_str().unwrap();
    let head = ["scope", "--config", path];
    let argv = head.iter().chain(args).copied();
    let matches = scope_cli::command().try_get_matches_from(argv).unwrap();

    let mut out = Vec::new();
    scope_cli::execute(&matches, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn tree_for_restricted_user() {
    let file = workspace();
    assert_eq!(run(&file, &["tree", "--user", "2"]), "All (all)\n  Sales (sales)\n");
}

#[test]
fn prune_keeps_ancestor_chain() {
    let file = workspace();
    assert_eq!(
        run(&file, &["prune", "--visible", "backend"]),
        "All (all)\n  Engineering (eng)\n    Backend (backend)\n"
    );
}

#[test]
fn ancestors_as_json() {
    let file = workspace();
    let output = run(&file, &["ancestors", "backend", "--json"]);
    let ids: Vec<String> = serde_json::from_str(&output).unwrap();
    assert_eq!(ids, vec!["all", "eng"]);
}

#[test]
fn filters_visible_from_space() {
    let file = workspace();
    let output = run(&file, &["filters", "--space", "backend", "--user", "2"]);
    assert!(output.contains("Scratch"));
    assert!(output.contains("Eng board"));

    let output = run(&file, &["filters", "--space", "sales"]);
    assert!(!output.contains("Eng board"));
    assert!(!output.contains("Scratch"));
}

#[test]
fn picker_marks_partial_parents() {
    let file = workspace();
    let output = run(&file, &["picker", "--select", "eng,backend"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "[-] Entire organization (root)");
    assert_eq!(lines[1], "[-] All (all)");
    assert_eq!(lines[2], "[x]   Engineering (eng)");
    assert_eq!(lines[3], "[ ]     Backend (backend)");
    assert_eq!(lines.last().copied(), Some("selection: 2 spaces"));
    assert!(!output.contains("personal"));
}

#[test]
fn missing_config_is_an_error() {
    let matches = scope_cli::command()
        .try_get_matches_from(["scope", "tree"])
        .unwrap();
    let mut out = Vec::new();
    assert!(scope_cli::execute(&matches, &mut out).is_err());
}
