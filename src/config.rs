//! Config objects, to be read from Cssroll.toml

use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use crate::util::Fallible;

/// Top-level config
#[derive(Deserialize, Default, Debug)]
pub struct Config {
    /// Config for paths
    #[serde(default)]
    pub paths: Paths,
}

impl Config {
    /// Reads the configuration from the given TOML file.
    pub fn read<P: AsRef<Path>>(path: P) -> Fallible<Self> {
        let buf = read_to_string(path)?;
        let val = toml::from_str::<Self>(&buf)?;

        Ok(val)
    }

    /// Check the validity of the configuration
    pub fn check(&self) -> Fallible {
        if self.paths.root == self.paths.output {
            return Err(format!(
                "Output file \"{}\" would overwrite the root stylesheet",
                self.paths.output.display()
            )
            .into());
        }

        Ok(())
    }
}

/// Config for paths
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Paths {
    /// The root stylesheet to bundle. Default: `src/style.css`.
    pub root: PathBuf,
    /// The file to write the bundled stylesheet to. Default: `dist/bundle.css`.
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            root: PathBuf::from("src/style.css"),
            output: PathBuf::from("dist/bundle.css"),
        }
    }
}
