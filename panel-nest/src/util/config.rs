use serde::{Deserialize, Serialize};

/// Configuration of the rectangle packer and the multi-bin orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Whether shapes may be placed rotated by 90°
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// How ties between candidates with an equal leftover area are broken
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Order in which the existing bins are tried for every shape
    #[serde(default)]
    pub bin_selection: BinSelection,
}

fn default_allow_rotation() -> bool {
    true
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            tie_break: TieBreak::default(),
            bin_selection: BinSelection::default(),
        }
    }
}

/// Secondary criterion used when two free rectangles leave the same area unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lowest `y`, then lowest `x` of the free rectangle
    #[default]
    BottomLeft,
    /// Smallest leftover along the shorter side, then bottom-left
    ShortSideFit,
}

/// Order in which the open bins are offered a shape before a new one is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinSelection {
    /// The most recently opened bin first, then all earlier bins in index order
    #[default]
    NewestFirst,
    /// All bins in index order
    FirstFit,
}

impl BinSelection {
    /// Indices of `n_bins` open bins in the order they should be tried.
    /// The iterator does not borrow `self`, so the caller may mutate the bins while iterating.
    pub fn order(&self, n_bins: usize) -> impl Iterator<Item = usize> + use<> {
        let (newest, rest) = match (self, n_bins) {
            (_, 0) => (None, 0..0),
            (BinSelection::NewestFirst, n) => (Some(n - 1), 0..n - 1),
            (BinSelection::FirstFit, n) => (None, 0..n),
        };
        newest.into_iter().chain(rest)
    }
}
