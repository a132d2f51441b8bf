use std::convert::Infallible;

/// Variant caller that produced a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tool {
    BreakDancer,
    Crest,
    Delly,
    Pindel,
    /// Pindel run in its `-q` (long insertion / dispersed duplication) mode
    PindelQ,
    Other(String),
}

impl Tool {
    pub fn from_label(label: &str) -> Self {
        match label {
            "BreakDancer-max" => Tool::BreakDancer,
            "Crest" => Tool::Crest,
            "Delly" => Tool::Delly,
            "Pindel" => Tool::Pindel,
            "Pindel-q" => Tool::PindelQ,
            other => Tool::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Tool::BreakDancer => "BreakDancer-max",
            Tool::Crest => "Crest",
            Tool::Delly => "Delly",
            Tool::Pindel => "Pindel",
            Tool::PindelQ => "Pindel-q",
            Tool::Other(label) => label,
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
