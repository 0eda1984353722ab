use crate::{CreditsIssue, LanguageCredits, Person};
use serde::{Deserialize, Serialize};

/// Whether the viewer is editing the credits page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// The viewer has no rights to edit the page.
    #[default]
    Denied,
    /// The viewer may edit but editing is switched off.
    Off,
    On,
}

impl EditMode {
    pub fn is_on(self) -> bool {
        self == EditMode::On
    }
}

/// Link to a language section at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub code: String,
    /// Display name with non-breaking spaces.
    pub name: String,
    pub current: bool,
}

/// A person shown in a language section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonCard {
    pub person: Person,
    pub contactable: bool,
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum Maintainers {
    /// Nobody maintains the language; show a warning instead of a list.
    Missing,
    Listed(Vec<PersonCard>),
}

/// One language section of the credits page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageGroup {
    pub code: String,
    pub name: String,
    pub maintainers: Maintainers,
    /// Empty means the contributors block is left out entirely.
    pub contributors: Vec<PersonCard>,
    pub can_add_maintainer: bool,
    pub can_add_contributor: bool,
}

impl LanguageGroup {
    pub fn has_maintainer_warning(&self) -> bool {
        self.maintainers == Maintainers::Missing
    }

    pub fn maintainer_cards(&self) -> &[PersonCard] {
        match &self.maintainers {
            Maintainers::Missing => &[],
            Maintainers::Listed(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditsView {
    pub quick_links: Vec<QuickLink>,
    pub groups: Vec<LanguageGroup>,
}

/// Group credits per language, keeping the input order.
pub fn build_view(
    languages: &[LanguageCredits],
    current_language: &str,
    mode: EditMode,
) -> CreditsView {
    let quick_links = languages
        .iter()
        .map(|lang| QuickLink {
            code: lang.code.clone(),
            name: lang.name.replace(' ', "\u{a0}"),
            current: lang.code == current_language,
        })
        .collect();

    let groups = languages
        .iter()
        .map(|lang| build_group(lang, mode))
        .collect();

    CreditsView {
        quick_links,
        groups,
    }
}

fn build_group(lang: &LanguageCredits, mode: EditMode) -> LanguageGroup {
    let editing = mode.is_on();

    let maintainers = if lang.maintainers.is_empty() {
        Maintainers::Missing
    } else {
        Maintainers::Listed(
            lang.maintainers
                .iter()
                .map(|person| PersonCard {
                    person: person.clone(),
                    contactable: true,
                    removable: editing,
                })
                .collect(),
        )
    };

    // Contributor removal depends on the individual record.
    let contributors = lang
        .contributors
        .iter()
        .map(|contributor| PersonCard {
            person: contributor.person.clone(),
            contactable: false,
            removable: editing && contributor.editable,
        })
        .collect();

    LanguageGroup {
        code: lang.code.clone(),
        name: lang.name.clone(),
        maintainers,
        contributors,
        can_add_maintainer: editing,
        can_add_contributor: editing,
    }
}

/// Lines reporting problems found in the credits data.
pub fn issue_lines(issues: &[CreditsIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| format!("{} (userid {})", issue.problem, issue.user.0))
        .collect()
}
