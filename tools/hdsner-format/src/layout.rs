//! Input and output directory layout of an HDSNER dataset tree.
//!
//! ```text
//! input/CBMA/MULTICLASS/{train,val,test}.txt   ->  output/hdsner_CBMA/{train,dev,test}.{txt,json}
//! input/CBMA/PERS/, input/CBMA/LOC/            ->  single classes (meta.json)
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory inside each dataset holding the all-classes splits.
pub const MULTICLASS_DIR: &str = "MULTICLASS";

/// A dataset split and the file names it maps between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Source file name under `MULTICLASS/`.
    pub fn source_file(self) -> &'static str {
        match self {
            Split::Train => "train.txt",
            Split::Dev => "val.txt",
            Split::Test => "test.txt",
        }
    }

    /// Output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }
}

/// Naming of the per-dataset output directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputNaming {
    pub prefix: String,
    pub suffix: String,
}

impl OutputNaming {
    pub fn dir_name(&self, dataset: &str) -> String {
        format!("{}{}{}", self.prefix, dataset, self.suffix)
    }
}

/// One dataset directory of the input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub name: String,
    pub path: PathBuf,
}

impl Dataset {
    pub fn multiclass_dir(&self) -> PathBuf {
        self.path.join(MULTICLASS_DIR)
    }

    pub fn has_multiclass(&self) -> bool {
        self.multiclass_dir().is_dir()
    }

    pub fn source_path(&self, split: Split) -> PathBuf {
        self.multiclass_dir().join(split.source_file())
    }

    /// Names of the single-class subdirectories, sorted.
    pub fn single_classes(&self) -> io::Result<Vec<String>> {
        let mut classes: Vec<String> = subdirectories(&self.path)?
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| name != MULTICLASS_DIR)
            .collect();
        classes.sort();
        Ok(classes)
    }
}

/// Every subdirectory of `input_dir` is a dataset. Sorted by name.
pub fn discover_datasets(input_dir: &Path) -> io::Result<Vec<Dataset>> {
    let mut datasets: Vec<Dataset> = subdirectories(input_dir)?
        .into_iter()
        .map(|(name, path)| Dataset { name, path })
        .collect();
    datasets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(datasets)
}

fn subdirectories(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    Ok(dirs)
}
