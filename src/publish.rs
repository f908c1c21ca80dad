//! Publishing generated artifacts to the output directory.
//!
//! Artifacts whose bytes match the published copy are left untouched, so
//! build systems watching the output see no change. Changed artifacts are
//! staged as temp files next to their destination and renamed into place
//! only after every one of them was written. If a rename fails, artifacts
//! already renamed in that run are restored to their previous contents so
//! the header and source never disagree.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::emit::{Artifact, Artifacts};
use crate::error::{BossError, Result};
use crate::output::{display_path, Printer};

/// What publishing did, or would do, to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Written because it was missing or different.
    Published,
    /// Already identical on disk.
    Unchanged,
}

/// Outcome for a single artifact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishEntry {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Result of a publish run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub entries: Vec<PublishEntry>,
}

impl PublishReport {
    pub fn published(&self) -> usize {
        self.count(Outcome::Published)
    }

    pub fn unchanged(&self) -> usize {
        self.count(Outcome::Unchanged)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Compare artifacts with the output directory without writing anything.
pub fn plan(artifacts: &Artifacts, dir: &Path) -> Result<PublishReport> {
    let mut report = PublishReport::default();
    for artifact in artifacts.iter() {
        let path = dir.join(&artifact.name);
        let outcome = if is_current(&path, artifact)? {
            Outcome::Unchanged
        } else {
            Outcome::Published
        };
        report.entries.push(PublishEntry { path, outcome });
    }
    Ok(report)
}

/// Write changed artifacts to `dir`, creating it when missing.
pub fn publish(artifacts: &Artifacts, dir: &Path, printer: &Printer) -> Result<PublishReport> {
    fs::create_dir_all(dir).map_err(|e| BossError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let report = plan(artifacts, dir)?;

    // Stage everything first; a failure here leaves the published files alone.
    let mut staged = Vec::new();
    for (artifact, entry) in artifacts.iter().zip(&report.entries) {
        if entry.outcome == Outcome::Published {
            staged.push((stage(artifact, dir)?, entry.path.clone()));
        }
    }
    persist_all(staged)?;

    for entry in &report.entries {
        let shown = display_path(&entry.path);
        match entry.outcome {
            Outcome::Published => printer.status("Publishing", &shown),
            Outcome::Unchanged => printer.info("Unchanged", &shown),
        }
    }

    Ok(report)
}

/// Rename staged files into place, undoing earlier renames on failure.
fn persist_all(staged: Vec<(NamedTempFile, PathBuf)>) -> Result<()> {
    let mut replaced: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();

    for (temp, path) in staged {
        let previous = fs::read(&path).ok();
        if let Err(e) = temp.persist(&path) {
            for (done, contents) in replaced.iter().rev() {
                // Best effort: the original error is the one reported.
                let _ = match contents {
                    Some(bytes) => fs::write(done, bytes),
                    None => fs::remove_file(done),
                };
            }
            return Err(BossError::Io {
                path,
                message: format!("Failed to replace artifact: {}", e.error),
            });
        }
        replaced.push((path, previous));
    }

    Ok(())
}

fn is_current(path: &Path, artifact: &Artifact) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == artifact.content.as_bytes()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BossError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read published artifact: {}", e),
        }),
    }
}

fn stage(artifact: &Artifact, dir: &Path) -> Result<NamedTempFile> {
    let io_err = |e: std::io::Error| BossError::Io {
        path: dir.join(&artifact.name),
        message: format!("Failed to stage artifact: {}", e),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp.write_all(artifact.content.as_bytes()).map_err(io_err)?;
    temp.flush().map_err(io_err)?;
    Ok(temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn artifacts(header: &str, source: &str) -> Artifacts {
        Artifacts {
            header: Artifact {
                name: "bossdata.h".to_string(),
                content: header.to_string(),
            },
            source: Artifact {
                name: "bossdata.cpp".to_string(),
                content: source.to_string(),
            },
        }
    }

    #[test]
    fn test_publish_writes_missing_artifacts() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");

        let report = publish(&artifacts("h", "c"), &out, &Printer::plain_text()).unwrap();

        assert_eq!(report.published(), 2);
        assert_eq!(fs::read_to_string(out.join("bossdata.h")).unwrap(), "h");
        assert_eq!(fs::read_to_string(out.join("bossdata.cpp")).unwrap(), "c");
    }

    #[test]
    fn test_second_publish_touches_nothing() {
        let dir = tempdir().unwrap();
        let printer = Printer::plain_text();
        publish(&artifacts("h", "c"), dir.path(), &printer).unwrap();
        let before = fs::metadata(dir.path().join("bossdata.h"))
            .unwrap()
            .modified()
            .unwrap();

        let report = publish(&artifacts("h", "c"), dir.path(), &printer).unwrap();

        assert_eq!(report.unchanged(), 2);
        let after = fs::metadata(dir.path().join("bossdata.h"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_only_changed_artifact_is_written() {
        let dir = tempdir().unwrap();
        let printer = Printer::plain_text();
        publish(&artifacts("h", "c"), dir.path(), &printer).unwrap();

        let report = publish(&artifacts("h", "c2"), dir.path(), &printer).unwrap();

        assert_eq!(report.entries[0].outcome, Outcome::Unchanged);
        assert_eq!(report.entries[1].outcome, Outcome::Published);
        assert_eq!(fs::read_to_string(dir.path().join("bossdata.cpp")).unwrap(), "c2");
    }

    #[test]
    fn test_plan_writes_nothing() {
        let dir = tempdir().unwrap();
        let report = plan(&artifacts("h", "c"), dir.path()).unwrap();

        assert_eq!(report.published(), 2);
        assert!(!dir.path().join("bossdata.h").exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        publish(&artifacts("h", "c"), dir.path(), &Printer::plain_text()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_failed_rename_restores_earlier_artifacts() {
        let dir = tempdir().unwrap();
        let header = dir.path().join("bossdata.h");
        let source = dir.path().join("bossdata.cpp");
        fs::write(&header, "old header").unwrap();
        // A non-empty directory cannot be replaced by a file.
        fs::create_dir(&source).unwrap();
        fs::write(source.join("keep"), "x").unwrap();

        let pair = artifacts("new header", "new source");
        let staged = vec![
            (stage(&pair.header, dir.path()).unwrap(), header.clone()),
            (stage(&pair.source, dir.path()).unwrap(), source.clone()),
        ];

        assert!(persist_all(staged).is_err());
        assert_eq!(fs::read_to_string(&header).unwrap(), "old header");
    }

    #[test]
    fn test_failed_rename_removes_new_artifacts() {
        let dir = tempdir().unwrap();
        let header = dir.path().join("bossdata.h");
        let source = dir.path().join("bossdata.cpp");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("keep"), "x").unwrap();

        let pair = artifacts("h", "c");
        let staged = vec![
            (stage(&pair.header, dir.path()).unwrap(), header.clone()),
            (stage(&pair.source, dir.path()).unwrap(), source.clone()),
        ];

        assert!(persist_all(staged).is_err());
        assert!(!header.exists());
    }
}
