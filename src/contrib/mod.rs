use crate::{Contribution, ContributionStatus, Person, TimeLine, UserId};
use serde::Serialize;
use std::collections::HashMap;

/// Who a contribution is assigned to, relative to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "person", rename_all = "snake_case")]
pub enum AssigneeLine {
    Viewer(Person),
    Other(Person),
    Unassigned,
}

impl AssigneeLine {
    pub fn classify(assignee: Option<&Person>, viewer: UserId) -> Self {
        match assignee {
            Some(person) if person.id == viewer => AssigneeLine::Viewer(person.clone()),
            Some(person) => AssigneeLine::Other(person.clone()),
            None => AssigneeLine::Unassigned,
        }
    }

    /// Style classifier of the assignment row.
    pub fn class(&self) -> &'static str {
        match self {
            AssigneeLine::Viewer(_) => "assignment self",
            AssigneeLine::Other(_) => "assignment",
            AssigneeLine::Unassigned => "assignment none",
        }
    }
}

/// String counts before and after rebasing.
///
/// `same` is `orig - new` and is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RebaseCounts {
    pub orig: i64,
    pub new: i64,
    pub same: i64,
}

/// What rebasing did to a contribution's strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "counts", rename_all = "snake_case")]
pub enum StringsLine {
    /// Nothing left to apply after rebasing.
    NoneUsable(RebaseCounts),
    /// Every string still applies.
    AllSurvived(RebaseCounts),
    SomeChanged(RebaseCounts),
}

impl StringsLine {
    pub fn classify(strings: i64, strings_rebased: i64) -> Self {
        let counts = RebaseCounts {
            orig: strings,
            new: strings_rebased,
            same: strings - strings_rebased,
        };

        if strings_rebased == 0 {
            StringsLine::NoneUsable(counts)
        } else if strings == strings_rebased {
            StringsLine::AllSurvived(counts)
        } else {
            StringsLine::SomeChanged(counts)
        }
    }

    pub fn counts(&self) -> RebaseCounts {
        match self {
            StringsLine::NoneUsable(c) | StringsLine::AllSurvived(c) | StringsLine::SomeChanged(c) => {
                *c
            }
        }
    }
}

/// What the viewer can do about a wrongly detected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageAffordance {
    Change,
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLine {
    pub code: String,
    pub name: String,
    pub affordance: LanguageAffordance,
}

/// The viewer looking at a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    pub can_change_language: bool,
}

/// Presentable summary of a contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionSummary {
    pub heading: String,
    pub author: Person,
    pub time: TimeLine,
    pub message: String,
    pub status: ContributionStatus,
    pub status_class: String,
    pub assignee: AssigneeLine,
    pub assignee_class: &'static str,
    pub language: LanguageLine,
    pub components: String,
    pub strings: StringsLine,
}

/// Describe a contribution for `viewer`.
///
/// `language_names` maps language codes to display names; codes missing from
/// it are shown as-is.
pub fn describe(
    contribution: &Contribution,
    viewer: &Viewer,
    language_names: &HashMap<String, String>,
) -> ContributionSummary {
    let info = &contribution.info;
    let assignee = AssigneeLine::classify(contribution.assignee.as_ref(), viewer.id);
    let assignee_class = assignee.class();

    let name = language_names
        .get(&contribution.language)
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| contribution.language.clone());
    let affordance = if viewer.can_change_language {
        LanguageAffordance::Change
    } else {
        LanguageAffordance::Report
    };

    ContributionSummary {
        heading: format!("#{} {}", info.id, info.subject),
        author: contribution.author.clone(),
        time: TimeLine::pick(info.created_at, info.modified_at),
        message: info.message.clone(),
        status: info.status,
        status_class: format!("status{}", info.status.0),
        assignee,
        assignee_class,
        language: LanguageLine {
            code: contribution.language.clone(),
            name,
            affordance,
        },
        components: contribution.components.clone(),
        strings: StringsLine::classify(contribution.strings, contribution.strings_rebased),
    }
}
