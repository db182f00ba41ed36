//! The build driver: expands the root stylesheet and writes the bundle.

use std::fs;

use log::info;

use crate::config::Config;
use crate::inline;
use crate::util::Fallible;

/// Runs one build: expands the configured root stylesheet and writes the
/// result to the configured output file, creating missing parent directories.
pub fn build(config: &Config) -> Fallible {
    let paths = &config.paths;

    info!("Building {}", paths.root.display());

    let css = inline::inline_imports(&paths.root)?;

    if let Some(dir) = paths.output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(&paths.output, &css)?;

    println!("Output: {}", paths.output.display());
    println!("Size: {} characters", css.chars().count());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::config::{Config, Paths};

    use super::*;

    #[test]
    fn build_writes_output() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("style.css");
        fs::write(&root, "a {color: red}\n@import 'b.css';\n").unwrap();
        fs::write(dir.path().join("b.css"), "b {color: green}\n").unwrap();

        let output = dir.path().join("dist").join("bundle.css");
        let config = Config {
            paths: Paths {
                root,
                output: output.clone(),
            },
        };

        build(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "a {color: red}\n/* Inlined from b.css */\nb {color: green}\n\n"
        );
    }

    #[test]
    fn build_creates_nested_output_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("style.css");
        fs::write(&root, "a {color: red}\n").unwrap();

        let output = dir.path().join("out").join("css").join("bundle.css");
        let config = Config {
            paths: Paths {
                root,
                output: output.clone(),
            },
        };

        build(&config).unwrap();

        assert!(output.is_file());
    }

    #[test]
    fn build_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("style.css");
        fs::write(&root, "a {color: red}\n").unwrap();

        let output = dir.path().join("bundle.css");
        fs::write(&output, "stale content").unwrap();

        let config = Config {
            paths: Paths {
                root,
                output: output.clone(),
            },
        };

        build(&config).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "a {color: red}\n");
    }

    #[test]
    fn build_fails_without_root_file() {
        let dir = tempdir().unwrap();
        let config = Config {
            paths: Paths {
                root: dir.path().join("missing.css"),
                output: dir.path().join("bundle.css"),
            },
        };

        assert!(build(&config).is_err());
    }
}
