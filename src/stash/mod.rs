use crate::{Person, Stash, StashAction, TimeLine};
use serde::Serialize;

/// Separator between languages or components on a stash card.
pub const LIST_SEPARATOR: &str = ", ";

/// Title of a stash card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum StashTitle {
    Autosave,
    Named(String),
}

/// Presentable summary of a stash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StashSummary {
    pub title: StashTitle,
    pub autosave: bool,
    pub owner: Person,
    pub time: TimeLine,
    pub strings: usize,
    pub languages: String,
    pub components: String,
    /// `None` when there is nothing to offer, so the action area is left out.
    pub actions: Option<Vec<StashAction>>,
}

/// Describe a stash for display.
///
/// The autosave flag wins over any stored name.
pub fn describe(stash: &Stash) -> StashSummary {
    let title = if stash.autosave {
        StashTitle::Autosave
    } else {
        StashTitle::Named(stash.name.clone())
    };

    StashSummary {
        title,
        autosave: stash.autosave,
        owner: stash.owner.clone(),
        time: TimeLine::pick(stash.created_at, stash.modified_at),
        strings: stash.strings,
        languages: stash.languages.join(LIST_SEPARATOR),
        components: stash.components.join(LIST_SEPARATOR),
        actions: (!stash.actions.is_empty()).then(|| stash.actions.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    fn stash() -> Stash {
        Stash {
            name: "Forum strings".to_string(),
            autosave: false,
            owner: Person {
                id: UserId(7),
                fullname: "Ada Translator".to_string(),
            },
            created_at: 1_600_000_000,
            modified_at: None,
            strings: 12,
            languages: vec!["es".to_string(), "cs".to_string()],
            components: vec!["forum".to_string(), "moodle".to_string(), "admin".to_string()],
            actions: vec![],
        }
    }

    #[test]
    fn named_stash() {
        let summary = describe(&stash());
        assert_eq!(summary.title, StashTitle::Named("Forum strings".to_string()));
        assert!(!summary.autosave);
        assert_eq!(summary.strings, 12);
        assert_eq!(summary.owner.id, UserId(7));
    }

    #[test]
    fn autosave_hides_stored_name() {
        let summary = describe(&Stash {
            autosave: true,
            ..stash()
        });
        assert_eq!(summary.title, StashTitle::Autosave);
        assert!(summary.autosave);
    }

    #[test]
    fn shows_exactly_one_timestamp() {
        assert_eq!(describe(&stash()).time, TimeLine::Created(1_600_000_000));
        let modified = describe(&Stash {
            modified_at: Some(1_700_000_000),
            ..stash()
        });
        assert_eq!(modified.time, TimeLine::Modified(1_700_000_000));
    }

    #[test]
    fn lists_keep_insertion_order() {
        let summary = describe(&stash());
        assert_eq!(summary.languages, "es, cs");
        assert_eq!(summary.components, "forum, moodle, admin");
    }

    #[test]
    fn actions_pass_through_in_order() {
        assert_eq!(describe(&stash()).actions, None);

        let apply = StashAction {
            id: "apply".to_string(),
            label: "Apply".to_string(),
            url: "/stash.php?apply=3".to_string(),
        };
        let drop = StashAction {
            id: "drop".to_string(),
            label: "Drop".to_string(),
            url: "/stash.php?drop=3".to_string(),
        };
        let summary = describe(&Stash {
            actions: vec![apply.clone(), drop.clone()],
            ..stash()
        });
        assert_eq!(summary.actions, Some(vec![apply, drop]));
    }

    #[test]
    fn empty_lists_give_empty_lines() {
        let summary = describe(&Stash {
            languages: vec![],
            components: vec![],
            ..stash()
        });
        assert_eq!(summary.languages, "");
        assert_eq!(summary.components, "");
    }
}
