use crate::{error::SvdistError, utils::util::Result};
use std::path::Path;

/// Looks up `key` in a VCF INFO column (`K=V;FLAG;K2=V2`). Flags carry no value and never match.
pub fn info_value<'a>(info: &'a str, key: &str) -> Option<&'a str> {
    info.split(';')
        .filter_map(|entry| entry.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

pub fn require_info_value<'a>(
    info: &'a str,
    key: &'static str,
    path: &Path,
    line: usize,
) -> Result<&'a str> {
    info_value(info, key).ok_or_else(|| SvdistError::MissingInfoField {
        path: path.to_path_buf(),
        line,
        key,
    })
}
