//! # Dataset Metadata
//!
//! Builds the `meta.json` describing a dataset's entity classes and their
//! label indices. `PERS` and `LOC` always come first, in that order, followed
//! by any other classes alphabetically. Index 0 is reserved for `O`.

use std::fs;
use std::path::Path;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::{HdsnerError, Result};
use crate::json::to_indented_string;
use crate::tags::OUTSIDE;

/// Classes that lead the ordering when present.
const LEADING_CLASSES: &[&str] = &["PERS", "LOC"];

/// Entity classes of one dataset, in label-index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetMeta {
    classes: Vec<String>,
}

impl DatasetMeta {
    /// Order classes for labeling. Duplicates are dropped.
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut others: Vec<String> = classes.into_iter().map(Into::into).collect();
        others.sort();
        others.dedup();

        let mut ordered = Vec::with_capacity(others.len());
        for leading in LEADING_CLASSES {
            if let Some(pos) = others.iter().position(|c| c == leading) {
                ordered.push(others.remove(pos));
            }
        }
        ordered.extend(others);

        Self { classes: ordered }
    }

    /// Classes in index order, without `O`.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Label index of a class; `O` is 0.
    pub fn index_of(&self, class: &str) -> Option<usize> {
        if class == OUTSIDE {
            return Some(0);
        }
        self.classes.iter().position(|c| c == class).map(|i| i + 1)
    }

    /// Write JSON indented by four spaces to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = to_indented_string(self)?;
        fs::write(path, json).map_err(|e| HdsnerError::io(path, e))
    }
}

struct Entities<'a>(&'a [String]);

struct EntityNames<'a> {
    short: &'a str,
    verbose: &'a str,
}

struct TypeToIndex<'a>(&'a [String]);

impl Serialize for DatasetMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DatasetMeta", 2)?;
        state.serialize_field("entities", &Entities(&self.classes))?;
        state.serialize_field("type2idx", &TypeToIndex(&self.classes))?;
        state.end()
    }
}

impl Serialize for Entities<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for class in self.0 {
            map.serialize_entry(
                class,
                &EntityNames {
                    short: class,
                    verbose: class,
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for EntityNames<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EntityNames", 2)?;
        state.serialize_field("short", self.short)?;
        state.serialize_field("verbose", self.verbose)?;
        state.end()
    }
}

impl Serialize for TypeToIndex<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len() + 1))?;
        map.serialize_entry(OUTSIDE, &0usize)?;
        for (i, class) in self.0.iter().enumerate() {
            map.serialize_entry(class, &(i + 1))?;
        }
        map.end()
    }
}
