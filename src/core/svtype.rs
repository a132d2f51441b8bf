use std::convert::Infallible;

/// Structural variant class as reported by the upstream callers.
///
/// The caller vocabulary is open, so unrecognized labels are kept verbatim in `Other`
/// and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SvType {
    DELETION,
    DUPLICATION,
    INSERTION,
    INVERSION,
    /// Intra-chromosomal translocation (BreakDancer `ITX`)
    ITX,
    /// Inter-chromosomal translocation (BreakDancer `CTX`)
    CTX,
    /// Pindel dispersed duplication
    DDUP,
    Other(String),
}

impl SvType {
    pub fn from_u8(bytes: &[u8]) -> Self {
        match bytes {
            b"DEL" => SvType::DELETION,
            b"DUP" => SvType::DUPLICATION,
            b"INS" => SvType::INSERTION,
            b"INV" => SvType::INVERSION,
            b"ITX" => SvType::ITX,
            b"CTX" => SvType::CTX,
            b"DDup" => SvType::DDUP,
            _ => SvType::Other(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

impl std::str::FromStr for SvType {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_u8(s.as_bytes()))
    }
}

impl std::fmt::Display for SvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvType::DELETION => write!(f, "DEL"),
            SvType::DUPLICATION => write!(f, "DUP"),
            SvType::INSERTION => write!(f, "INS"),
            SvType::INVERSION => write!(f, "INV"),
            SvType::ITX => write!(f, "ITX"),
            SvType::CTX => write!(f, "CTX"),
            SvType::DDUP => write!(f, "DDup"),
            SvType::Other(label) => write!(f, "{label}"),
        }
    }
}
