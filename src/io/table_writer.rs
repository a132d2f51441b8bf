use crate::{
    constants::{COLUMN_HEADER, REFERENCE_LABEL, SAMPLE_HEADER_PREFIX},
    core::call::RawCall,
    utils::util::Result,
};
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Appends one sample block to the shared per-sample table.
///
/// The table is a log: every writer opens the file in append mode and starts a new block
/// with the sample header and the column header before any rows.
pub struct TableWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    n_rows: usize,
}

impl TableWriter {
    pub fn append(path: &Path, sample: &str, reference: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                crate::svdist_error!("Failed to open table {} for appending: {e}", path.display())
            })?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", sample_header(sample, reference))?;
        writeln!(writer, "{COLUMN_HEADER}")?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            n_rows: 0,
        })
    }

    pub fn write_call(&mut self, call: &RawCall) -> Result<()> {
        writeln!(self.writer, "{}", call.to_table_line())?;
        self.n_rows += 1;
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| {
            crate::svdist_error!("Failed to flush table {}: {e}", self.path.display())
        })?;
        Ok(self.n_rows)
    }
}

pub fn sample_header(sample: &str, reference: &str) -> String {
    format!("{SAMPLE_HEADER_PREFIX}{sample}\t{REFERENCE_LABEL}{reference}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{call::CallSize, svtype::SvType, tool::Tool};
    use tempfile::tempdir;

    #[test]
    fn test_append_writes_block_per_invocation() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("S1.txt");

        let mut writer = TableWriter::append(&path, "S1", "hg19").unwrap();
        writer
            .write_call(&RawCall::new(
                SvType::DELETION,
                1000,
                CallSize::Known(200),
                Tool::Delly,
            ))
            .unwrap();
        assert_eq!(writer.finish().unwrap(), 1);

        let writer = TableWriter::append(&path, "S1", "hg19").unwrap();
        assert_eq!(writer.finish().unwrap(), 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "##Sample: S1\tReference: hg19\n\
             #SVType\tStartPos\tSize\tTool\n\
             DEL\t1000\t200\tDelly\n\
             ##Sample: S1\tReference: hg19\n\
             #SVType\tStartPos\tSize\tTool\n"
        );
    }
}
