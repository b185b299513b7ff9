use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Point-group label declared for a molecule.
///
/// The label is not derived from the geometry; it is curated data attached to
/// the molecule alongside its symmetry elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointGroup {
    #[default]
    C1,
    Cs,
    Ci,
    C2,
    C3,
    C2v,
    C3v,
    C4v,
    C2h,
    D2h,
    D3h,
    D4h,
    D6h,
    Td,
    Oh,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown point group: '{0}'")]
pub struct ParsePointGroupError(pub String);

impl PointGroup {
    pub const ALL: [PointGroup; 15] = [
        Self::C1,
        Self::Cs,
        Self::Ci,
        Self::C2,
        Self::C3,
        Self::C2v,
        Self::C3v,
        Self::C4v,
        Self::C2h,
        Self::D2h,
        Self::D3h,
        Self::D4h,
        Self::D6h,
        Self::Td,
        Self::Oh,
    ];

    /// Number of symmetry operations in the group (the group order `h`).
    pub fn order(&self) -> u32 {
        match self {
            Self::C1 => 1,
            Self::Cs | Self::Ci | Self::C2 => 2,
            Self::C3 => 3,
            Self::C2v | Self::C2h => 4,
            Self::C3v => 6,
            Self::C4v | Self::D2h => 8,
            Self::D3h => 12,
            Self::D4h => 16,
            Self::D6h | Self::Td => 24,
            Self::Oh => 48,
        }
    }

    /// `true` if the group contains the inversion operation.
    pub fn is_centrosymmetric(&self) -> bool {
        matches!(
            self,
            Self::Ci | Self::C2h | Self::D2h | Self::D4h | Self::D6h | Self::Oh
        )
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::Cs => "Cs",
            Self::Ci => "Ci",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C2v => "C2v",
            Self::C3v => "C3v",
            Self::C4v => "C4v",
            Self::C2h => "C2h",
            Self::D2h => "D2h",
            Self::D3h => "D3h",
            Self::D4h => "D4h",
            Self::D6h => "D6h",
            Self::Td => "Td",
            Self::Oh => "Oh",
        }
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointGroup {
    type Err = ParsePointGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .find(|pg| pg.as_str().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| ParsePointGroupError(s.to_string()))
    }
}
