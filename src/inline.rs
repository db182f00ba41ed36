//! Recursive resolution of `@import` directives.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::util::Fallible;
use crate::CircularImportError;

/// Token that opens an import directive, at the start of the trimmed line.
const IMPORT_KEYWORD: &str = "@import";

/// Expands the given root stylesheet by replacing every resolvable import
/// directive with the expanded content of its target, recursively.
///
/// Directives that cannot be resolved (missing quotes, unreadable target,
/// circular reference) are kept verbatim and the expansion continues.
/// An unreadable root file is an error.
pub fn inline_imports<P: AsRef<Path>>(path: P) -> Fallible<String> {
    let root = normalize(path.as_ref());
    let mut in_progress = HashSet::new();

    expand(&root, &mut in_progress)
}

/// Expands a single file, line by line.
///
/// `in_progress` holds the files currently being expanded up the call stack.
/// A target found in it would recurse forever and is treated as unresolvable.
fn expand(path: &PathBuf, in_progress: &mut HashSet<PathBuf>) -> Fallible<String> {
    let content = fs::read_to_string(path)?;

    in_progress.insert(path.clone());

    let mut blocks = Vec::new();
    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with(IMPORT_KEYWORD) {
            match extract_import_path(trimmed) {
                Some(import) => {
                    let target = resolve_target(path, import);

                    let expanded: Fallible<String> = if in_progress.contains(&target) {
                        Err(Box::new(CircularImportError(target.clone())))
                    } else {
                        expand(&target, in_progress)
                    };

                    match expanded {
                        Ok(expanded) => {
                            blocks.push(format!("/* Inlined from {} */\n{}", import, expanded));
                        }
                        Err(err) => {
                            warn!(
                                "Could not inline \"{}\" into {}: {}",
                                import,
                                path.display(),
                                err
                            );
                            blocks.push(line.to_owned());
                        }
                    }
                }
                None => blocks.push(line.to_owned()),
            }
        } else {
            blocks.push(line.to_owned());
        }
    }

    in_progress.remove(path);

    Ok(blocks.join("\n"))
}

/// Extracts the quoted path argument from an import directive.
///
/// Returns the content of the first pair of single quotes, or of double
/// quotes if no single-quote pair closes. Quote characters cannot be escaped;
/// the first matching delimiter closes the path.
pub fn extract_import_path(line: &str) -> Option<&str> {
    for quote in &['\'', '"'] {
        if let Some(start) = line.find(*quote) {
            if let Some(end) = line[start + 1..].find(*quote) {
                return Some(&line[start + 1..start + 1 + end]);
            }
        }
    }

    None
}

/// Resolves an import path against the directory of the importing file.
fn resolve_target(from: &Path, import: &str) -> PathBuf {
    let path = from.parent().unwrap_or_else(|| Path::new(".")).join(import);

    normalize(&path)
}

fn normalize(path: &Path) -> PathBuf {
    PathBuf::from(path_clean::clean(
        &path.to_string_lossy().replace('\\', "/"),
    ))
}
