use crate::Stage;
use crate::summary::StageSummary;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A top-level action offered on a populated stage.
///
/// Variant order is the order the actions are presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Action {
    #[serde(rename = "commit")]
    Commit,
    #[serde(rename = "submit")]
    SubmitForReview,
    #[serde(rename = "edit")]
    Edit,
    #[serde(rename = "rebase")]
    Rebase,
    #[serde(rename = "prune")]
    Prune,
    #[serde(rename = "unstageall")]
    UnstageAll,
    #[serde(rename = "download")]
    Download,
    #[serde(rename = "stash")]
    SaveStash,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Commit,
        Action::SubmitForReview,
        Action::Edit,
        Action::Rebase,
        Action::Prune,
        Action::UnstageAll,
        Action::Download,
        Action::SaveStash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Commit => "commit",
            Action::SubmitForReview => "submit",
            Action::Edit => "edit",
            Action::Rebase => "rebase",
            Action::Prune => "prune",
            Action::UnstageAll => "unstageall",
            Action::Download => "download",
            Action::SaveStash => "stash",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller permissions the gate combines with the stage summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GateFlags {
    pub can_commit: bool,
    pub can_stash: bool,
    pub has_linked_contribution: bool,
}

impl GateFlags {
    pub fn from_stage(stage: &Stage) -> Self {
        Self {
            can_commit: stage.can_commit,
            can_stash: stage.can_stash,
            has_linked_contribution: stage.staged_contribution.is_some(),
        }
    }
}

/// The set of enabled actions, iterated in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionSet(BTreeSet<Action>);

impl ActionSet {
    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decide whether a single action is enabled.
///
/// Every rule is independent of the others. Nothing is enabled on an empty
/// stage because the empty stage page has no action area.
pub fn is_enabled(action: Action, summary: &StageSummary, flags: &GateFlags) -> bool {
    if summary.is_empty() {
        return false;
    }

    match action {
        Action::Commit => summary.has_committable() && flags.can_commit,
        // Submitting is offered only when nothing is left to commit locally.
        Action::SubmitForReview => flags.can_stash && !summary.has_committable(),
        Action::Prune => summary.has_committable(),
        Action::Edit | Action::Rebase | Action::UnstageAll | Action::Download => true,
        Action::SaveStash => flags.can_stash,
    }
}

/// Derive every enabled action for a summarized stage.
pub fn derive_actions(summary: &StageSummary, flags: &GateFlags) -> ActionSet {
    Action::ALL
        .into_iter()
        .filter(|action| is_enabled(*action, summary, flags))
        .collect()
}
