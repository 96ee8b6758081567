use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

fn collect(tracker: &IgnoreTracker, visited: &mut VisitedSet, root: &std::path::Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut walker = Walker::new(tracker, visited);
    walker.walk(root, &mut |path| found.push(path));
    found
}

#[test]
fn walk_finds_zig_files_recursively() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("a.zig"), "").unwrap();
    fs::write(temp.path().join("sub/b.zig"), "").unwrap();
    fs::write(temp.path().join("README.md"), "").unwrap();

    let tracker = IgnoreTracker::new(temp.path().to_path_buf());
    let mut visited = VisitedSet::new();
    let found = collect(&tracker, &mut visited, temp.path());

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().unwrap() == "zig"));
}

#[test]
fn walk_skips_ignored_files() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("vendor")).unwrap();
    fs::write(temp.path().join("main.zig"), "").unwrap();
    fs::write(temp.path().join("vendor/lib.zig"), "").unwrap();

    let base = dunce::canonicalize(temp.path()).unwrap();
    let mut tracker = IgnoreTracker::new(base);
    tracker.add_exclude("vendor/**");

    let mut visited = VisitedSet::new();
    let found = collect(&tracker, &mut visited, temp.path());

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("main.zig"));
}

#[test]
fn include_rescues_file_in_excluded_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("vendor")).unwrap();
    fs::write(temp.path().join("vendor/keep.zig"), "").unwrap();
    fs::write(temp.path().join("vendor/skip.zig"), "").unwrap();

    let base = dunce::canonicalize(temp.path()).unwrap();
    let mut tracker = IgnoreTracker::new(base);
    tracker.add_exclude("vendor/**");
    tracker.add_include("vendor/keep.zig");

    let mut visited = VisitedSet::new();
    let found = collect(&tracker, &mut visited, temp.path());

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("keep.zig"));
}

#[test]
fn directly_named_file_bypasses_filters() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("notes.txt");
    fs::write(&file, "").unwrap();

    let tracker = IgnoreTracker::new(temp.path().to_path_buf());
    let mut visited = VisitedSet::new();
    let found = collect(&tracker, &mut visited, &file);

    assert_eq!(found.len(), 1);
}

#[test]
fn duplicate_arguments_are_walked_once() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.zig"), "").unwrap();

    let tracker = IgnoreTracker::new(temp.path().to_path_buf());
    let mut visited = VisitedSet::new();
    let first = collect(&tracker, &mut visited, temp.path());
    let second = collect(&tracker, &mut visited, temp.path());

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[cfg(unix)]
#[test]
fn symlink_cycle_terminates_and_visits_each_file_once() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    let b = a.join("b");
    fs::create_dir_all(&b).unwrap();
    fs::write(a.join("one.zig"), "").unwrap();
    fs::write(b.join("two.zig"), "").unwrap();
    // b/loop -> a completes the cycle a -> b -> a
    std::os::unix::fs::symlink(&a, b.join("loop")).unwrap();

    let base = dunce::canonicalize(temp.path()).unwrap();
    let tracker = IgnoreTracker::new(base);
    let mut visited = VisitedSet::new();
    let found = collect(&tracker, &mut visited, temp.path());

    assert_eq!(found.len(), 2);
}

#[test]
fn missing_path_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let tracker = IgnoreTracker::new(temp.path().to_path_buf());
    let mut visited = VisitedSet::new();

    let found = collect(&tracker, &mut visited, &temp.path().join("missing"));
    assert!(found.is_empty());
}
