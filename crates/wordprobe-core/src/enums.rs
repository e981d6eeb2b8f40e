// Shared enums: probe strategy selection, correction-case tags.

use std::fmt;
use std::str::FromStr;

/// Collision-resolution strategy, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// Step one slot forward per probe.
    Linear,
    /// The i-th probe lands i squared slots past the home slot.
    Quadratic,
    /// A per-key step derived from a secondary hash.
    Double,
}

impl ProbeKind {
    /// The flag spelling understood by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeKind::Linear => "linear",
            ProbeKind::Quadratic => "quadratic",
            ProbeKind::Double => "double",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a strategy flag that is none of `linear`, `quadratic`, `double`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown probe strategy `{0}` (expected linear, quadratic, or double)")]
pub struct UnknownProbeKind(pub String);

impl FromStr for ProbeKind {
    type Err = UnknownProbeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ProbeKind::Linear),
            "quadratic" => Ok(ProbeKind::Quadratic),
            "double" => Ok(ProbeKind::Double),
            other => Err(UnknownProbeKind(other.to_string())),
        }
    }
}

/// Which single-edit family produced a correction candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionCase {
    /// One character inserted somewhere in the word.
    Insertion,
    /// One character deleted from the word.
    Deletion,
    /// Two adjacent characters swapped.
    Transposition,
}

impl CorrectionCase {
    /// Report label used by the spell-check output.
    pub fn label(self) -> &'static str {
        match self {
            CorrectionCase::Insertion => "case A",
            CorrectionCase::Deletion => "case B",
            CorrectionCase::Transposition => "case C",
        }
    }
}

impl fmt::Display for CorrectionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_flags() {
        assert_eq!("linear".parse::<ProbeKind>().unwrap(), ProbeKind::Linear);
        assert_eq!(
            "quadratic".parse::<ProbeKind>().unwrap(),
            ProbeKind::Quadratic
        );
        assert_eq!("double".parse::<ProbeKind>().unwrap(), ProbeKind::Double);
    }

    #[test]
    fn parse_rejects_unknown_flag() {
        let err = "cubic".parse::<ProbeKind>().unwrap_err();
        assert_eq!(err, UnknownProbeKind("cubic".to_string()));
        assert!(err.to_string().contains("cubic"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Linear".parse::<ProbeKind>().is_err());
    }

    #[test]
    fn case_labels() {
        assert_eq!(CorrectionCase::Insertion.label(), "case A");
        assert_eq!(CorrectionCase::Deletion.label(), "case B");
        assert_eq!(CorrectionCase::Transposition.to_string(), "case C");
    }
}
