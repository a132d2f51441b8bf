use super::readers::{numbered_lines, open_table_reader};
use crate::{
    constants::{SAMPLE_HEADER_PREFIX, TABLE_FIELD_COUNT},
    core::{
        event::{ClusterRule, Magnitude},
        svtype::SvType,
        tool::Tool,
    },
    error::SvdistError,
    utils::util::{parse_i64, Result},
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// A call from the shared table that matched one of the clustering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedCall {
    pub sample: usize,
    /// Index into the rule list the table was read with
    pub rule: usize,
    pub pos: i64,
    pub magnitude: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadStats {
    pub n_rows: usize,
    pub n_short: usize,
    pub n_filtered: usize,
}

/// Samples in first-seen order and their qualifying calls in input order.
#[derive(Debug, Default)]
pub struct CohortTable {
    pub samples: Vec<String>,
    pub calls: Vec<QualifiedCall>,
    pub stats: ReadStats,
    sample_index: HashMap<String, usize>,
    current_sample: Option<usize>,
}

impl CohortTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the given tables in order, as if they were concatenated.
    pub fn read(paths: &[PathBuf], rules: &[ClusterRule]) -> Result<Self> {
        let mut table = Self::new();
        for path in paths {
            table.read_file(path, rules)?;
        }
        Ok(table)
    }

    pub fn read_file(&mut self, path: &Path, rules: &[ClusterRule]) -> Result<()> {
        let reader = open_table_reader(path).map_err(|e| match e {
            SvdistError::Io(e) => {
                crate::svdist_error!("Failed to open table {}: {e}", path.display())
            }
            other => other,
        })?;
        for entry in numbered_lines(reader, path) {
            let (line_no, line) = entry?;
            self.push_line(&line, rules, path, line_no)?;
        }
        Ok(())
    }

    fn push_line(
        &mut self,
        line: &str,
        rules: &[ClusterRule],
        path: &Path,
        line_no: usize,
    ) -> Result<()> {
        if let Some(rest) = line.strip_prefix(SAMPLE_HEADER_PREFIX) {
            let name = rest.split('\t').next().unwrap_or_default().trim();
            self.current_sample = Some(self.register_sample(name));
            return Ok(());
        }
        if line.starts_with('#') {
            return Ok(());
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < TABLE_FIELD_COUNT {
            self.stats.n_short += 1;
            return Ok(());
        }
        self.stats.n_rows += 1;

        let sv_type = SvType::from_u8(fields[0].as_bytes());
        let tool = Tool::from_label(fields[3]);
        let Some(rule) = rules.iter().position(|r| r.matches(&sv_type, &tool)) else {
            self.stats.n_filtered += 1;
            return Ok(());
        };

        let sample = self
            .current_sample
            .ok_or_else(|| SvdistError::MissingSampleHeader {
                path: path.to_path_buf(),
                line: line_no,
            })?;
        let pos = parse_i64(fields[1], path, line_no)?;
        let magnitude = match rules[rule].magnitude {
            Magnitude::Size => parse_i64(fields[2], path, line_no)?,
            Magnitude::Presence => 1,
        };
        self.calls.push(QualifiedCall {
            sample,
            rule,
            pos,
            magnitude,
        });
        Ok(())
    }

    fn register_sample(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.sample_index.get(name) {
            return idx;
        }
        let idx = self.samples.len();
        self.samples.push(name.to_string());
        self.sample_index.insert(name.to_string(), idx);
        idx
    }
}
