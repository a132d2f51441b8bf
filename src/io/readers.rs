use crate::{error::SvdistError, utils::util::Result};
use flate2::read::MultiGzDecoder;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read as ioRead},
    path::Path,
};

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

/// Opens a plain or gzip-compressed text table. Missing files surface as `SvdistError::Io`
/// with `ErrorKind::NotFound` so callers can treat absence separately.
pub fn open_table_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(SvdistError::InvalidGzipHeader {
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Like `open_table_reader`, but an absent file yields `Ok(None)`.
pub fn open_optional_table_reader(path: &Path) -> Result<Option<BufReader<Box<dyn ioRead>>>> {
    match open_table_reader(path) {
        Ok(reader) => Ok(Some(reader)),
        Err(SvdistError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(SvdistError::Io(e)) => Err(crate::svdist_error!(
            "Failed to open file {}: {e}",
            path.display()
        )),
        Err(e) => Err(e),
    }
}

/// Iterates over `(1-based line number, line)` pairs, propagating read errors with the file path.
pub fn numbered_lines<'a, R: BufRead + 'a>(
    reader: R,
    path: &'a Path,
) -> impl Iterator<Item = Result<(usize, String)>> + 'a {
    reader.lines().enumerate().map(move |(idx, line)| {
        line.map(|line| (idx + 1, line)).map_err(|e| {
            crate::svdist_error!("Error reading line {} of {}: {e}", idx + 1, path.display())
        })
    })
}
