use crate::core::{
    event::{ClusterRule, Magnitude},
    matrix::DuplicatePolicy,
    svtype::SvType,
    tool::Tool,
};

/// Half-width of the positional window used to assign a call to an existing anchor
pub const DEFAULT_WINDOW: i64 = 50;
pub const DEFAULT_DUPLICATE_POLICY: DuplicatePolicy = DuplicatePolicy::Last;

pub const SAMPLE_HEADER_PREFIX: &str = "##Sample: ";
pub const REFERENCE_LABEL: &str = "Reference: ";
pub const COLUMN_HEADER: &str = "#SVType\tStartPos\tSize\tTool";
pub const TABLE_FIELD_COUNT: usize = 4;

pub const ALL_DATA_FILE: &str = "all_data.txt";
pub const DISTMAT_FILE: &str = "distmat.csv";

pub const BREAKDANCER_DIR: &str = "BreakDancer";
pub const CREST_DIR: &str = "Crest";
pub const DELLY_DIR: &str = "Delly";
pub const PINDEL_DIR: &str = "Pindel";
pub const PINDEL_VCF_DIR: &str = "vcf";
/// Pindel short insertions are not collated
pub const PINDEL_SHORT_INSERTION_TAG: &str = "SI";
pub const PINDEL_DISPERSED_DUPLICATION_TAG: &str = "DD";

/// Calls that become matrix events, in column-group order
pub const CLUSTER_RULES: [ClusterRule; 3] = [
    ClusterRule {
        sv_type: SvType::DELETION,
        tool: Tool::Delly,
        magnitude: Magnitude::Size,
    },
    ClusterRule {
        sv_type: SvType::DUPLICATION,
        tool: Tool::Delly,
        magnitude: Magnitude::Size,
    },
    ClusterRule {
        sv_type: SvType::INSERTION,
        tool: Tool::Pindel,
        magnitude: Magnitude::Presence,
    },
];
