//! On-disk library search strategies.
//!
//! Two strategies exist. The default maps the generic name once and returns
//! the first directory where that file exists. Linux replaces it with a
//! pool-and-rank scan for versioned shared objects, because minimal
//! installations commonly ship only `libc.so.6` with no unversioned
//! symlink, and the mapped name alone would never be found.
//!
//! Neither strategy can fail hard: a miss degrades to the mapped file name,
//! handed back for a system-level loader to resolve through its own search
//! paths.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;

use super::Platform;

/// The outcome of a library search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// An absolute path to a file that exists on disk.
    Resolved(PathBuf),
    /// Nothing matched in the search paths; the platform-mapped file name,
    /// for the system loader to try against its own search mechanism.
    Fallback(String),
}

impl Located {
    /// The resolved on-disk path, if the search found one.
    pub fn resolved(&self) -> Option<&Path> {
        match self {
            Located::Resolved(path) => Some(path),
            Located::Fallback(_) => None,
        }
    }

    /// The name to hand to a loader: the resolved path, or the mapped
    /// file-name fallback.
    pub fn into_name(self) -> String {
        match self {
            Located::Resolved(path) => path.to_string_lossy().into_owned(),
            Located::Fallback(name) => name,
        }
    }
}

impl fmt::Display for Located {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Located::Resolved(path) => write!(f, "{}", path.display()),
            Located::Fallback(name) => f.write_str(name),
        }
    }
}

/// Default strategy: first directory containing the mapped file name wins.
pub(super) fn locate_first_hit(
    platform: &Platform,
    name: &str,
    search_paths: &[PathBuf],
) -> Located {
    let mapped = platform.map_library_name(name);
    for dir in search_paths {
        let candidate = dir.join(&mapped);
        if candidate.is_file() {
            return Located::Resolved(absolute(candidate));
        }
    }
    Located::Fallback(mapped)
}

/// Linux strategy: pool `lib<name>.so` and `lib<name>.so.<digits>` matches
/// across all search directories, then rank.
///
/// Ranking: any digit-suffixed candidate beats the exact unversioned `.so`;
/// among digit-suffixed candidates the highest version wins. Ties resolve
/// to the first candidate encountered, with directories scanned in
/// search-path order and entries within a directory in sorted name order,
/// so the outcome never depends on directory-listing order.
pub(super) fn locate_versioned_so(
    platform: &Platform,
    name: &str,
    search_paths: &[PathBuf],
) -> Located {
    let exact = format!("lib{}.so", name);
    let versioned = Regex::new(&format!(r"^lib{}\.so\.([0-9]+)$", regex::escape(name)))
        .expect("escaped library name always forms a valid pattern");

    // (version, path); None marks the exact unversioned match.
    let mut candidates: Vec<(Option<u64>, PathBuf)> = Vec::new();
    for dir in search_paths {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        for file_name in names {
            if file_name == exact {
                candidates.push((None, dir.join(&file_name)));
            } else if let Some(caps) = versioned.captures(&file_name) {
                if let Ok(version) = caps[1].parse::<u64>() {
                    candidates.push((Some(version), dir.join(&file_name)));
                }
            }
        }
    }

    let mut best: Option<(Option<u64>, PathBuf)> = None;
    for (version, path) in candidates {
        let replace = match (&best, version) {
            (None, _) => true,
            // A versioned object always beats the unversioned symlink.
            (Some((None, _)), Some(_)) => true,
            (Some((Some(best_version), _)), Some(version)) => version > *best_version,
            (Some(_), None) => false,
        };
        if replace {
            best = Some((version, path));
        }
    }

    match best {
        Some((_, path)) => Located::Resolved(absolute(path)),
        None => Located::Fallback(platform.map_library_name(name)),
    }
}

/// Resolve a path against the current directory without touching symlinks.
fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}
