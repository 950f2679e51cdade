//! Library Locator Integration Tests
//!
//! Exercises the on-disk search strategies against real directories:
//! the default first-hit scan and the Linux versioned-`.so` ranking.

use std::fs;
use std::path::PathBuf;

use natlib::{EnvironmentFacts, Platform};

/// Build a platform for the given raw identity strings.
fn platform_for(os_name: &str, cpu_name: &str) -> Platform {
    Platform::from_facts(&EnvironmentFacts {
        os_name: os_name.to_string(),
        cpu_name: cpu_name.to_string(),
        data_model: None,
        runtime_version: None,
    })
    .expect("platform should resolve")
}

/// Get a fresh scratch directory for one test.
fn scratch_dir(test: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("natlib_tests");
    path.push(test);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("failed to create scratch dir");
    path
}

/// Create an empty file standing in for a shared object.
fn touch(dir: &PathBuf, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"").expect("failed to create file");
    path
}

// ============================================================================
// Linux versioned-.so ranking
// ============================================================================

#[test]
fn linux_picks_highest_version() {
    let dir = scratch_dir("highest_version");
    touch(&dir, "libfoo.so.5");
    let expected = touch(&dir, "libfoo.so.6");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("foo", &[dir]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn linux_finds_exact_unversioned_so() {
    let dir = scratch_dir("exact_so");
    let expected = touch(&dir, "libfoo.so");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("foo", &[dir]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn linux_versioned_beats_unversioned() {
    let dir = scratch_dir("versioned_beats_exact");
    touch(&dir, "libfoo.so");
    let expected = touch(&dir, "libfoo.so.0");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("foo", &[dir]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn linux_pools_matches_across_directories() {
    let first = scratch_dir("pooled_first");
    let second = scratch_dir("pooled_second");
    touch(&first, "libbar.so.5");
    let expected = touch(&second, "libbar.so.6");

    // The higher version wins even though it sits in a later directory.
    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("bar", &[first, second]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn linux_equal_versions_resolve_to_first_directory() {
    let first = scratch_dir("tie_first");
    let second = scratch_dir("tie_second");
    let expected = touch(&first, "libbaz.so.2");
    touch(&second, "libbaz.so.2");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("baz", &[first, second]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn linux_ignores_non_matching_entries() {
    let dir = scratch_dir("non_matching");
    touch(&dir, "libfoo.so.x");
    touch(&dir, "libfoobar.so.1");
    touch(&dir, "foo.so");
    touch(&dir, "libfoo.dylib");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("foo", &[dir]);
    assert_eq!(located.resolved(), None);
    assert_eq!(located.into_name(), "libfoo.so");
}

#[test]
fn linux_numeric_suffix_is_compared_numerically() {
    let dir = scratch_dir("numeric_compare");
    touch(&dir, "libfoo.so.9");
    let expected = touch(&dir, "libfoo.so.10");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("foo", &[dir]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn linux_missing_directories_are_skipped() {
    let missing = std::env::temp_dir().join("natlib_tests/does_not_exist");
    let dir = scratch_dir("after_missing");
    let expected = touch(&dir, "libfoo.so.1");

    let p = platform_for("Linux", "x86_64");
    let located = p.locate_library("foo", &[missing, dir]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

// ============================================================================
// Default first-hit strategy
// ============================================================================

#[test]
fn default_returns_first_directory_containing_mapped_name() {
    let first = scratch_dir("default_first");
    let second = scratch_dir("default_second");
    let expected = touch(&second, "libssl.so");

    let p = platform_for("SunOS", "sparcv9");
    let located = p.locate_library("ssl", &[first, second]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn default_ignores_directories_masquerading_as_libraries() {
    let dir = scratch_dir("dir_decoy");
    fs::create_dir_all(dir.join("libssl.so")).expect("failed to create decoy dir");

    let p = platform_for("SunOS", "sparcv9");
    let located = p.locate_library("ssl", &[dir]);
    assert_eq!(located.resolved(), None);
}

#[test]
fn default_does_not_rank_versioned_objects() {
    // Only Linux pools versioned shared objects; the default strategy
    // checks the mapped name alone.
    let dir = scratch_dir("no_ranking");
    touch(&dir, "libssl.so.3");

    let p = platform_for("FreeBSD", "amd64");
    let located = p.locate_library("ssl", &[dir]);
    assert_eq!(located.resolved(), None);
    assert_eq!(located.into_name(), "libssl.so");
}

#[test]
fn windows_locates_dll() {
    let dir = scratch_dir("windows_dll");
    let expected = touch(&dir, "ssl.dll");

    let p = platform_for("Windows 10", "amd64");
    let located = p.locate_library("ssl", &[dir]);
    assert_eq!(located.resolved(), Some(expected.as_path()));
}

#[test]
fn fallback_matches_mapped_name() {
    let p = platform_for("Mac OS X", "x86_64");
    let located = p.locate_library("ssl", &[]);
    assert_eq!(located.resolved(), None);
    assert_eq!(located.to_string(), p.map_library_name("ssl"));
}
