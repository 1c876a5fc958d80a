//! Output path resolution.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

/// Resolved output target from the `-o` flag.
pub struct OutputConfig {
    target_dir: Option<PathBuf>,
    target_file: Option<PathBuf>,
}

impl OutputConfig {
    /// Create from the CLI flag. A file target is rejected up front when
    /// the batch has more than one input.
    pub fn new(output: Option<&str>, input_count: usize) -> anyhow::Result<Self> {
        let (target_dir, target_file) = match output {
            Some(o) => {
                let path = PathBuf::from(o);
                if o.ends_with('/') || o.ends_with('\\') || path.is_dir() {
                    (Some(path), None)
                } else {
                    (None, Some(path))
                }
            }
            None => (None, None),
        };

        if target_file.is_some() && input_count > 1 {
            bail!("-o with a file path only works for a single input file (got {input_count})");
        }

        Ok(Self {
            target_dir,
            target_file,
        })
    }

    /// Resolve the output path for one input file.
    ///
    /// Default is the input path as typed with `.kt` appended
    /// (`sprites/icon.png` -> `sprites/icon.png.kt`). With `-o dir/` the
    /// `.kt` file lands in that directory under the input's file name.
    pub fn resolve(&self, input: &Path) -> PathBuf {
        if let Some(ref target) = self.target_file {
            return target.clone();
        }

        if let Some(ref dir) = self.target_dir {
            let mut name = input
                .file_name()
                .unwrap_or_else(|| OsStr::new("output"))
                .to_os_string();
            name.push(".kt");
            return dir.join(name);
        }

        let mut path = input.as_os_str().to_os_string();
        path.push(".kt");
        PathBuf::from(path)
    }

    /// Create parent directories for the output path.
    pub fn ensure_parent(output: &Path) -> anyhow::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory: {}", parent.display()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_suffix_to_path_as_typed() {
        let config = OutputConfig::new(None, 1).unwrap();
        assert_eq!(
            config.resolve(Path::new("sprites/icon.png")),
            PathBuf::from("sprites/icon.png.kt")
        );
    }

    #[test]
    fn trailing_slash_means_directory() {
        let config = OutputConfig::new(Some("gen/"), 3).unwrap();
        assert_eq!(
            config.resolve(Path::new("sprites/icon.png")),
            PathBuf::from("gen/icon.png.kt")
        );
    }

    #[test]
    fn existing_directory_without_slash() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::new(Some(dir.path().to_str().unwrap()), 2).unwrap();
        assert_eq!(
            config.resolve(Path::new("icon.png")),
            dir.path().join("icon.png.kt")
        );
    }

    #[test]
    fn file_target_used_verbatim() {
        let config = OutputConfig::new(Some("out.kt"), 1).unwrap();
        assert_eq!(config.resolve(Path::new("icon.png")), PathBuf::from("out.kt"));
    }

    #[test]
    fn file_target_rejected_for_batches() {
        assert!(OutputConfig::new(Some("out.kt"), 2).is_err());
    }
}
