use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pyfix_fs::{NormalizedPath, find_project_root};
use rstest::rstest;
use std::path::Path;

fn canonical(path: &Path) -> NormalizedPath {
    NormalizedPath::new(dunce::canonicalize(path).unwrap())
}

#[rstest]
#[case::git_dir(".git")]
#[case::mercurial_dir(".hg")]
fn vcs_directory_marks_the_root(#[case] marker: &str) {
    let temp = TempDir::new().unwrap();
    temp.child(marker).create_dir_all().unwrap();
    let file = temp.child("pkg/sub/module.py");
    file.touch().unwrap();

    let root = find_project_root(Some(file.path()), Path::new("/"));
    assert_eq!(root, canonical(temp.path()));
}

#[test]
fn pyproject_marks_the_root() {
    let temp = TempDir::new().unwrap();
    temp.child("service/pyproject.toml").touch().unwrap();
    let file = temp.child("service/src/app.py");
    file.touch().unwrap();

    let root = find_project_root(Some(file.path()), Path::new("/"));
    assert_eq!(root, canonical(&temp.path().join("service")));
}

#[test]
fn nearest_marker_wins() {
    let temp = TempDir::new().unwrap();
    temp.child(".git").create_dir_all().unwrap();
    temp.child("nested/pyproject.toml").touch().unwrap();
    let file = temp.child("nested/app.py");
    file.touch().unwrap();

    let root = find_project_root(Some(file.path()), Path::new("/"));
    assert_eq!(root, canonical(&temp.path().join("nested")));
}

#[test]
fn setup_cfg_alone_does_not_mark_a_root() {
    let temp = TempDir::new().unwrap();
    temp.child(".git").create_dir_all().unwrap();
    temp.child("lib/setup.cfg").touch().unwrap();
    let file = temp.child("lib/mod.py");
    file.touch().unwrap();

    let root = find_project_root(Some(file.path()), Path::new("/"));
    assert_eq!(root, canonical(temp.path()));
}

#[test]
fn empty_path_starts_from_cwd() {
    let temp = TempDir::new().unwrap();
    temp.child("pyproject.toml").touch().unwrap();
    temp.child("src").create_dir_all().unwrap();

    let root = find_project_root(None, &temp.path().join("src"));
    assert_eq!(root, canonical(temp.path()));
}

#[test]
fn relative_path_is_resolved_against_cwd() {
    let temp = TempDir::new().unwrap();
    temp.child("proj/.git").create_dir_all().unwrap();
    temp.child("proj/a/b.py").touch().unwrap();

    let root = find_project_root(Some(Path::new("proj/a/b.py")), temp.path());
    assert_eq!(root, canonical(&temp.path().join("proj")));
}

#[test]
fn unsaved_file_in_missing_directory_still_resolves() {
    let temp = TempDir::new().unwrap();
    temp.child("pyproject.toml").touch().unwrap();
    let ghost = temp.path().join("not/yet/created.py");

    let root = find_project_root(Some(ghost.as_path()), Path::new("/"));
    assert_eq!(root, canonical(temp.path()));
}

#[test]
fn resolution_is_deterministic() {
    let temp = TempDir::new().unwrap();
    temp.child(".git").create_dir_all().unwrap();
    let file = temp.child("x/y/z.py");
    file.touch().unwrap();

    let first = find_project_root(Some(file.path()), Path::new("/"));
    let second = find_project_root(Some(file.path()), Path::new("/"));
    assert_eq!(first, second);
}

#[test]
fn resolution_creates_nothing() {
    let temp = TempDir::new().unwrap();
    temp.child("pyproject.toml").touch().unwrap();
    let ghost = temp.child("new/pkg/mod.py");

    find_project_root(Some(ghost.path()), Path::new("/"));

    temp.child("new").assert(predicate::path::missing());
    temp.child("pyproject.toml").assert(predicate::path::is_file());
}

#[cfg(unix)]
#[test]
fn backslash_in_directory_name_is_kept() {
    let temp = TempDir::new().unwrap();
    temp.child("we\\ird/.git").create_dir_all().unwrap();
    let file = temp.child("we\\ird/app.py");
    file.touch().unwrap();

    let root = find_project_root(Some(file.path()), Path::new("/"));
    let expected = dunce::canonicalize(temp.path().join("we\\ird")).unwrap();
    assert_eq!(root.to_native(), expected);
    assert!(root.join("app.py").is_file());
}
