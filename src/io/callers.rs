use super::{
    info::require_info_value,
    readers::{numbered_lines, open_optional_table_reader},
};
use crate::{
    constants::*,
    core::{
        call::{CallSize, RawCall},
        svtype::SvType,
        tool::Tool,
    },
    utils::util::{field, parse_i64, Result},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Native output of one upstream caller, as laid out under the collation directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerOutput {
    BreakDancer,
    Crest,
    Delly,
    /// Pindel calls converted to VCF, one file per Pindel event class
    PindelVcf,
    /// Pindel dispersed duplications, which are not converted to VCF
    PindelDispersedDup,
}

impl CallerOutput {
    pub const ALL: [CallerOutput; 5] = [
        CallerOutput::BreakDancer,
        CallerOutput::Crest,
        CallerOutput::Delly,
        CallerOutput::PindelVcf,
        CallerOutput::PindelDispersedDup,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CallerOutput::BreakDancer => "BreakDancer",
            CallerOutput::Crest => "Crest",
            CallerOutput::Delly => "Delly",
            CallerOutput::PindelVcf => "Pindel",
            CallerOutput::PindelDispersedDup => "Pindel dispersed duplications",
        }
    }

    /// Existing input files for `sample`. An absent file or directory gives an empty list.
    pub fn input_paths(&self, dir: &Path, sample: &str) -> Result<Vec<PathBuf>> {
        let candidate = match self {
            CallerOutput::BreakDancer => dir.join(BREAKDANCER_DIR).join(format!("{sample}.bd.out")),
            CallerOutput::Crest => dir.join(CREST_DIR).join(format!("{sample}.bam.predSV.txt")),
            CallerOutput::Delly => dir.join(DELLY_DIR).join(format!("{sample}.vcf")),
            CallerOutput::PindelVcf => {
                return pindel_vcf_paths(&dir.join(PINDEL_DIR).join(PINDEL_VCF_DIR), sample)
            }
            CallerOutput::PindelDispersedDup => dir
                .join(PINDEL_DIR)
                .join(format!("{sample}_Results"))
                .join(format!("{sample}.pd.q.out_DD")),
        };
        Ok(if candidate.is_file() {
            vec![candidate]
        } else {
            vec![]
        })
    }

    /// Reads all calls of this caller for `sample`.
    pub fn extract(&self, dir: &Path, sample: &str) -> Result<Vec<RawCall>> {
        let mut calls = Vec::new();
        for path in self.input_paths(dir, sample)? {
            let Some(reader) = open_optional_table_reader(&path)? else {
                log::debug!("{} output vanished before reading: {}", self.name(), path.display());
                continue;
            };
            let tool = self.tool_for(&path);
            let n_before = calls.len();
            for entry in numbered_lines(reader, &path) {
                let (line_no, line) = entry?;
                if line.is_empty() {
                    continue;
                }
                if let Some(call) = self.parse_line(&line, &tool, &path, line_no)? {
                    calls.push(call);
                }
            }
            log::debug!(
                "Read {} calls from {} output {}",
                calls.len() - n_before,
                self.name(),
                path.display()
            );
        }
        Ok(calls)
    }

    fn tool_for(&self, path: &Path) -> Tool {
        match self {
            CallerOutput::BreakDancer => Tool::BreakDancer,
            CallerOutput::Crest => Tool::Crest,
            CallerOutput::Delly => Tool::Delly,
            CallerOutput::PindelVcf => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if file_name.contains('q') {
                    Tool::PindelQ
                } else {
                    Tool::Pindel
                }
            }
            CallerOutput::PindelDispersedDup => Tool::PindelQ,
        }
    }

    fn parse_line(
        &self,
        line: &str,
        tool: &Tool,
        path: &Path,
        line_no: usize,
    ) -> Result<Option<RawCall>> {
        // Crest output has no header and is read as-is
        if line.starts_with('#') && *self != CallerOutput::Crest {
            return Ok(None);
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let get = |index: usize| field(&fields, index, path, line_no);
        let int = |index: usize| get(index).and_then(|value| parse_i64(value, path, line_no));

        let call = match self {
            CallerOutput::BreakDancer => RawCall::new(
                SvType::from_u8(get(6)?.as_bytes()),
                int(1)?,
                CallSize::Known(int(7)?),
                tool.clone(),
            ),
            CallerOutput::Crest => {
                let left_pos = int(1)?;
                let right_pos = int(5)?;
                RawCall::new(
                    SvType::from_u8(get(8)?.as_bytes()),
                    left_pos,
                    CallSize::Known(right_pos - left_pos),
                    tool.clone(),
                )
            }
            CallerOutput::Delly => {
                let start = int(1)?;
                let info = get(7)?;
                let sv_type = require_info_value(info, "SVTYPE", path, line_no)?;
                let end = parse_i64(require_info_value(info, "END", path, line_no)?, path, line_no)?;
                RawCall::new(
                    SvType::from_u8(sv_type.as_bytes()),
                    start,
                    CallSize::Known(end - start),
                    tool.clone(),
                )
            }
            CallerOutput::PindelVcf => {
                let start = int(1)?;
                let info = get(7)?;
                let sv_type = require_info_value(info, "SVTYPE", path, line_no)?;
                let svlen =
                    parse_i64(require_info_value(info, "SVLEN", path, line_no)?, path, line_no)?;
                RawCall::new(
                    SvType::from_u8(sv_type.as_bytes()),
                    start,
                    CallSize::Known(flip_pindel_svlen(svlen)),
                    tool.clone(),
                )
            }
            CallerOutput::PindelDispersedDup => {
                if get(1)? != PINDEL_DISPERSED_DUPLICATION_TAG {
                    return Ok(None);
                }
                RawCall::new(SvType::DDUP, int(4)?, CallSize::Unknown, tool.clone())
            }
        };
        Ok(Some(call))
    }
}

/// Pindel reports deletions with a negative SVLEN; the shared table uses the opposite sign.
pub fn flip_pindel_svlen(svlen: i64) -> i64 {
    svlen.saturating_neg()
}

/// Pindel VCFs for `sample` in file-name order, excluding short insertions.
fn pindel_vcf_paths(vcf_dir: &Path, sample: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(vcf_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => {
            return Err(crate::svdist_error!(
                "Failed to list Pindel VCF directory {}: {e}",
                vcf_dir.display()
            ))
        }
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with(sample)
            && !file_name.contains(PINDEL_SHORT_INSERTION_TAG)
            && entry.path().is_file()
        {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}
