use crate::diff::is_committable;
use crate::{Stage, StagedEdit};
use serde::Serialize;

/// Staged vs committable counts for a stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub staged: usize,
    pub committable: usize,
}

impl StageSummary {
    /// Count staged and committable edits.
    pub fn from_edits(edits: &[StagedEdit]) -> Self {
        let committable = edits.iter().filter(|edit| is_committable(edit)).count();
        Self {
            staged: edits.len(),
            committable,
        }
    }

    /// An empty stage gets the "no staged strings" page instead of a summary.
    pub fn is_empty(&self) -> bool {
        self.staged == 0
    }

    pub fn has_committable(&self) -> bool {
        self.committable > 0
    }

    /// Staged edits that would not change anything if committed.
    ///
    /// Hand-built summaries may be inconsistent; those give zero.
    pub fn prunable(&self) -> usize {
        self.staged.saturating_sub(self.committable)
    }
}

/// Summarize a stage.
pub fn summarize(stage: &Stage) -> StageSummary {
    StageSummary::from_edits(&stage.edits)
}
