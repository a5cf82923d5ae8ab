use super::{
    error::MafError,
    reader::{count_comment_lines, open_maf_reader},
    schema::MafSchema,
    table::{MafRecord, MafTable},
};
use itertools::Itertools;
use std::{
    fs,
    io::BufRead,
    path::{Path, PathBuf},
};

/// Directory entries are picked up when their name contains this substring anywhere.
const MAF_NAME_PATTERN: &str = ".maf";

/// Reads MAF files into a [`MafTable`], assigning the schema columns by position.
#[derive(Debug, Clone, Default)]
pub struct MafLoader {
    schema: MafSchema,
}

impl MafLoader {
    pub fn new(schema: MafSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &MafSchema {
        &self.schema
    }

    /// Loads one file. The leading `#` block is counted on a first pass and skipped on a
    /// second; every following non-blank line, including a literal header row, becomes a record.
    pub fn load_file(&self, path: &Path) -> Result<MafTable, MafError> {
        let comment_lines = count_comment_lines(open_maf_reader(path)?, path)?;
        log::debug!(
            "Skipping {} comment lines in {}",
            comment_lines,
            path.display()
        );
        let table = self.parse_records(open_maf_reader(path)?, comment_lines, path)?;
        log::info!("Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Loads and concatenates every entry of `dir` whose file name contains `.maf`,
    /// in lexicographic order of file name. The first failing file aborts the load.
    pub fn load_dir(&self, dir: &Path) -> Result<MafTable, MafError> {
        let paths = find_maf_files(dir)?;
        log::info!("Found {} MAF files in {}", paths.len(), dir.display());

        let mut table = MafTable::new(self.schema.clone());
        for path in paths {
            table.append(self.load_file(&path)?);
        }
        Ok(table)
    }

    fn parse_records<R: BufRead>(
        &self,
        reader: R,
        skip: usize,
        path: &Path,
    ) -> Result<MafTable, MafError> {
        let width = self.schema.len();
        let mut records = Vec::new();
        for line in reader.lines().skip(skip) {
            let line = line.map_err(|e| MafError::io(path, e))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                continue;
            }
            records.push(MafRecord::from_line(line, width));
        }
        Ok(MafTable::with_records(self.schema.clone(), records))
    }
}

fn find_maf_files(dir: &Path) -> Result<Vec<PathBuf>, MafError> {
    let entries = fs::read_dir(dir).map_err(|e| MafError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MafError::io(dir, e))?;
        let path = entry.path();
        let name = entry.file_name();
        if !name.to_string_lossy().contains(MAF_NAME_PATTERN) || !path.is_file() {
            log::debug!("Ignoring directory entry {}", path.display());
            continue;
        }
        paths.push(path);
    }
    Ok(paths.into_iter().sorted().collect())
}
