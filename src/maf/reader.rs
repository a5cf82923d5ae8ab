use super::error::MafError;
use crate::utils::is_gzipped;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::Path;

pub fn open_maf_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>, MafError> {
    let file = File::open(path).map_err(|e| MafError::io(path, e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(MafError::parse(path, "invalid gzip header"))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Counts the run of leading lines starting with `#`.
///
/// Fails if the stream ends before a line without the `#` prefix is found, which covers
/// both empty input and input made only of comments.
pub fn count_comment_lines<R: BufRead>(reader: R, path: &Path) -> Result<usize, MafError> {
    let mut comment_lines = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| MafError::io(path, e))?;
        if !line.starts_with('#') {
            return Ok(comment_lines);
        }
        comment_lines += 1;
    }
    Err(MafError::parse(
        path,
        format!("no data line found after {} comment lines", comment_lines),
    ))
}
