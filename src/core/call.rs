use crate::core::{svtype::SvType, tool::Tool};
use std::fmt;

/// Size column of the shared table. Dispersed duplications have no numeric size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSize {
    Known(i64),
    Unknown,
}

impl fmt::Display for CallSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallSize::Known(size) => write!(f, "{size}"),
            CallSize::Unknown => write!(f, "?"),
        }
    }
}

/// One data row of the shared per-sample table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCall {
    pub sv_type: SvType,
    pub start_pos: i64,
    pub size: CallSize,
    pub tool: Tool,
}

impl RawCall {
    pub fn new(sv_type: SvType, start_pos: i64, size: CallSize, tool: Tool) -> Self {
        Self {
            sv_type,
            start_pos,
            size,
            tool,
        }
    }

    /// Tab-separated `SVType StartPos Size Tool` row, without trailing newline.
    pub fn to_table_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.sv_type, self.start_pos, self.size, self.tool
        )
    }
}
