//! Report repository for JSON storage
//!
//! Each report is one `<name>.json` file holding three aligned columns:
//! `{"Date": [...], "Amount": [...], "Description": [...]}`. Entries are
//! row-oriented in memory; only this module knows about the column layout.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Entry, Money};

use super::file_io::{read_json_required, write_json_atomic};

const REPORT_EXTENSION: &str = "json";

/// On-disk report layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct ReportFile {
    #[serde(rename = "Date", default)]
    date: Column<String>,
    #[serde(rename = "Amount", default)]
    amount: Column<Money>,
    #[serde(rename = "Description", default)]
    description: Column<String>,
}

/// One column of cells, aligned by index with the other columns
///
/// Written as a list. Older files keyed cells by row index
/// (`{"0": .., "1": ..}`); those are read back in index order.
#[derive(Debug)]
struct Column<T>(Vec<T>);

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: Serialize> Serialize for Column<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Column<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawColumn<T> {
            List(Vec<T>),
            Keyed(BTreeMap<String, T>),
        }

        match RawColumn::deserialize(deserializer)? {
            RawColumn::List(cells) => Ok(Self(cells)),
            RawColumn::Keyed(cells) => {
                let mut indexed = cells
                    .into_iter()
                    .map(|(key, cell)| {
                        key.parse::<usize>()
                            .map(|index| (index, cell))
                            .map_err(|_| serde::de::Error::custom(format!("invalid row key '{}'", key)))
                    })
                    .collect::<Result<Vec<_>, D::Error>>()?;
                indexed.sort_by_key(|(index, _)| *index);
                Ok(Self(indexed.into_iter().map(|(_, cell)| cell).collect()))
            }
        }
    }
}

impl ReportFile {
    fn from_entries(entries: &[Entry]) -> Self {
        Self {
            date: Column(entries.iter().map(Entry::date_string).collect()),
            amount: Column(entries.iter().map(|e| e.amount).collect()),
            description: Column(entries.iter().map(|e| e.description.clone()).collect()),
        }
    }

    fn into_entries(self, path: &Path) -> ExpenseResult<Vec<Entry>> {
        let (dates, amounts, descriptions) = (self.date.0, self.amount.0, self.description.0);

        if dates.len() != amounts.len() || dates.len() != descriptions.len() {
            return Err(ExpenseError::Storage(format!(
                "Columns in {} have different lengths (Date: {}, Amount: {}, Description: {})",
                path.display(),
                dates.len(),
                amounts.len(),
                descriptions.len()
            )));
        }

        dates
            .into_iter()
            .zip(amounts)
            .zip(descriptions)
            .map(|((date, amount), description)| {
                let date = parse_date(&date).map_err(|e| {
                    ExpenseError::Storage(format!("Bad row in {}: {}", path.display(), e))
                })?;
                Ok(Entry::new(date, amount, description))
            })
            .collect()
    }
}

/// Load the entries stored at `path`
///
/// A missing file is `NotFound`; an existing report with no rows is an
/// empty list.
pub fn load_entries(path: &Path) -> ExpenseResult<Vec<Entry>> {
    let file: ReportFile = read_json_required(path)?;
    file.into_entries(path)
}

/// Overwrite `path` with `entries`
pub fn save_entries(entries: &[Entry], path: &Path) -> ExpenseResult<()> {
    write_json_atomic(path, &ReportFile::from_entries(entries))
}

/// Write an empty three-column report to `path`
pub fn create_empty(path: &Path) -> ExpenseResult<()> {
    write_json_atomic(path, &ReportFile::default())
}

/// Strip an optional `.json` extension from a report name
pub fn report_name(name: &str) -> &str {
    name.strip_suffix(".json").unwrap_or(name)
}

/// Repository of named reports inside one directory
#[derive(Debug, Clone)]
pub struct ReportRepository {
    dir: PathBuf,
}

impl ReportRepository {
    /// Create a repository rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the report files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing report `name`
    pub fn path_for(&self, name: &str) -> ExpenseResult<PathBuf> {
        let name = report_name(name);
        if name.is_empty()
            || name.starts_with('.')
            || name.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(ExpenseError::Validation(format!(
                "Invalid report name: '{}'",
                name
            )));
        }
        Ok(self.dir.join(format!("{}.{}", name, REPORT_EXTENSION)))
    }

    /// Check whether report `name` exists
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.exists()).unwrap_or(false)
    }

    /// Create a new, empty report
    pub fn create(&self, name: &str) -> ExpenseResult<PathBuf> {
        let path = self.path_for(name)?;
        if path.exists() {
            return Err(ExpenseError::report_exists(report_name(name)));
        }

        create_empty(&path)?;
        Ok(path)
    }

    /// Load the entries of report `name`, in stored order
    pub fn load(&self, name: &str) -> ExpenseResult<Vec<Entry>> {
        let path = self.path_for(name)?;
        load_entries(&path).map_err(|e| {
            if e.is_not_found() {
                ExpenseError::report_not_found(report_name(name))
            } else {
                e
            }
        })
    }

    /// Replace the stored entries of report `name`
    pub fn save(&self, name: &str, entries: &[Entry]) -> ExpenseResult<()> {
        save_entries(entries, &self.path_for(name)?)
    }

    /// Delete report `name`
    pub fn delete(&self, name: &str) -> ExpenseResult<()> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ExpenseError::report_not_found(report_name(name)))
            }
            Err(e) => Err(ExpenseError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Names of all stored reports, sorted
    ///
    /// An empty (or missing) reports directory is `NotFound` rather than an
    /// empty list.
    pub fn list(&self) -> ExpenseResult<Vec<String>> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExpenseError::report_not_found("any"));
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for dir_entry in read_dir {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(REPORT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        if names.is_empty() {
            return Err(ExpenseError::report_not_found("any"));
        }

        names.sort();
        Ok(names)
    }
}
