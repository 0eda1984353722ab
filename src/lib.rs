pub mod cli;
pub mod contrib;
pub mod credits;
pub mod diff;
pub mod gate;
pub mod snapshot;
pub mod stage;
pub mod stash;
pub mod summary;
pub mod text;

use serde::{Deserialize, Serialize};

/// Identifier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// A reference to a person as the display layer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: UserId,
    #[serde(default)]
    pub fullname: String,
}

/// One pending change to one translatable string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedEdit {
    pub component: String,
    pub language: String,
    pub string_id: String,
    /// Published value. `None` when the string has never been translated.
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub new: Option<String>,
    /// Compare values exactly instead of ignoring surrounding whitespace.
    #[serde(default)]
    pub no_cleaning: bool,
}

/// Filter the translator was using when the strings got staged.
///
/// Replayed by the "edit staged strings" link so the translator opens
/// on the same selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFilter {
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub components: Vec<String>,
}

/// An actor's in-progress set of staged edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default)]
    pub edits: Vec<StagedEdit>,
    #[serde(default)]
    pub can_commit: bool,
    #[serde(default)]
    pub can_stash: bool,
    #[serde(default)]
    pub can_import: bool,
    #[serde(default)]
    pub can_execute: bool,
    /// Contribution the staged strings were applied from, if any.
    #[serde(default)]
    pub staged_contribution: Option<u64>,
    #[serde(default)]
    pub preset_message: String,
    #[serde(default)]
    pub filter: StageFilter,
}

/// An action the stash store offers on a stash, such as apply or drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashAction {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

/// Saved snapshot of a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stash {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub autosave: bool,
    pub owner: Person,
    pub created_at: i64,
    #[serde(default)]
    pub modified_at: Option<i64>,
    #[serde(default)]
    pub strings: usize,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub components: Vec<String>,
    /// Actions the viewer may take on this stash, in display order.
    #[serde(default)]
    pub actions: Vec<StashAction>,
}

/// Review state of a contribution.
///
/// The set of states belongs to the review workflow; values outside the
/// known constants are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributionStatus(pub i64);

/// The review states this crate knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownStatus {
    New,
    InReview,
    Rejected,
    Accepted,
}

impl ContributionStatus {
    pub const NEW: Self = Self(0);
    pub const IN_REVIEW: Self = Self(10);
    pub const REJECTED: Self = Self(20);
    pub const ACCEPTED: Self = Self(30);

    pub fn known(self) -> Option<KnownStatus> {
        match self {
            Self::NEW => Some(KnownStatus::New),
            Self::IN_REVIEW => Some(KnownStatus::InReview),
            Self::REJECTED => Some(KnownStatus::Rejected),
            Self::ACCEPTED => Some(KnownStatus::Accepted),
            _ => None,
        }
    }
}

/// Header record of a contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionInfo {
    pub id: u64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    pub status: ContributionStatus,
    pub created_at: i64,
    #[serde(default)]
    pub modified_at: Option<i64>,
}

/// A submitted set of string edits awaiting review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub info: ContributionInfo,
    pub author: Person,
    #[serde(default)]
    pub assignee: Option<Person>,
    pub language: String,
    #[serde(default)]
    pub components: String,
    /// Strings in the contribution as submitted.
    pub strings: i64,
    /// Strings still applicable after rebasing onto the current values.
    pub strings_rebased: i64,
}

/// A contributor entry on the credits page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub editable: bool,
}

/// Credits data for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCredits {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub maintainers: Vec<Person>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

/// A problem detected while collecting credits data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsIssue {
    pub problem: String,
    pub user: UserId,
}

/// Which of a record's two timestamps is shown.
///
/// A zero modification time counts as never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "at", rename_all = "snake_case")]
pub enum TimeLine {
    Modified(i64),
    Created(i64),
}

impl TimeLine {
    pub fn pick(created_at: i64, modified_at: Option<i64>) -> Self {
        match modified_at {
            Some(ts) if ts != 0 => TimeLine::Modified(ts),
            _ => TimeLine::Created(created_at),
        }
    }

    pub fn timestamp(self) -> i64 {
        match self {
            TimeLine::Modified(ts) | TimeLine::Created(ts) => ts,
        }
    }
}
