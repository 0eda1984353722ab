use stagegate::gate::{Action, GateFlags, derive_actions, is_enabled};
use stagegate::summary::{StageSummary, summarize};
use stagegate::{Stage, StagedEdit};

/// Helper to build an edit with the cleaning policy applied
fn edit(current: &str, new: &str) -> StagedEdit {
    StagedEdit {
        component: "core".to_string(),
        language: "es".to_string(),
        string_id: "savechanges".to_string(),
        current: Some(current.to_string()),
        new: Some(new.to_string()),
        no_cleaning: false,
    }
}

/// Every summary shape worth checking, for populated stages
fn populated_summaries() -> Vec<StageSummary> {
    let mut summaries = Vec::new();
    for staged in 1..5 {
        for committable in 0..=staged {
            summaries.push(StageSummary {
                staged,
                committable,
            });
        }
    }
    summaries
}

fn all_flags() -> Vec<GateFlags> {
    let mut flags = Vec::new();
    for can_commit in [false, true] {
        for can_stash in [false, true] {
            for has_linked_contribution in [false, true] {
                flags.push(GateFlags {
                    can_commit,
                    can_stash,
                    has_linked_contribution,
                });
            }
        }
    }
    flags
}

#[test]
fn end_to_end_mixed_stage() {
    let stage = Stage {
        edits: vec![
            edit("Save", "Save "),
            edit("Save", "Save "),
            edit("Save", "Cancel"),
        ],
        can_commit: true,
        can_stash: true,
        ..Stage::default()
    };

    let summary = summarize(&stage);
    assert_eq!(
        summary,
        StageSummary {
            staged: 3,
            committable: 1
        }
    );

    let actions = derive_actions(&summary, &GateFlags::from_stage(&stage));
    assert!(actions.contains(Action::Commit), "Commit should be enabled");
    assert!(
        !actions.contains(Action::SubmitForReview),
        "Submit should be hidden while something is committable"
    );
    assert!(actions.contains(Action::Prune), "Prune should be enabled");
}

#[test]
fn commit_rule_holds_for_all_inputs() {
    for summary in populated_summaries() {
        for flags in all_flags() {
            assert_eq!(
                is_enabled(Action::Commit, &summary, &flags),
                summary.committable > 0 && flags.can_commit,
                "{:?} {:?}",
                summary,
                flags
            );
        }
    }
}

#[test]
fn submit_rule_holds_for_all_inputs() {
    for summary in populated_summaries() {
        for flags in all_flags() {
            assert_eq!(
                is_enabled(Action::SubmitForReview, &summary, &flags),
                flags.can_stash && summary.committable == 0
            );
        }
    }
}

#[test]
fn maintenance_actions_independent_of_committable() {
    for summary in populated_summaries() {
        for flags in all_flags() {
            let actions = derive_actions(&summary, &flags);
            for action in [
                Action::Edit,
                Action::Rebase,
                Action::UnstageAll,
                Action::Download,
            ] {
                assert!(actions.contains(action));
            }
            assert_eq!(actions.contains(Action::Prune), summary.committable > 0);
            assert_eq!(actions.contains(Action::SaveStash), flags.can_stash);
        }
    }
}

#[test]
fn derive_actions_matches_is_enabled() {
    for summary in populated_summaries() {
        for flags in all_flags() {
            let actions = derive_actions(&summary, &flags);
            for action in Action::ALL {
                assert_eq!(actions.contains(action), is_enabled(action, &summary, &flags));
            }
        }
    }
}

#[test]
fn empty_stage_has_no_actions() {
    let stage = Stage {
        can_commit: true,
        can_stash: true,
        ..Stage::default()
    };
    let summary = summarize(&stage);
    assert!(summary.is_empty());
    assert!(derive_actions(&summary, &GateFlags::from_stage(&stage)).is_empty());
}

#[test]
fn no_cleaning_edits_count_whitespace() {
    let mut strict = edit("Save", "Save ");
    strict.no_cleaning = true;
    let stage = Stage {
        edits: vec![strict, edit("Save", "Save ")],
        can_stash: true,
        ..Stage::default()
    };

    let summary = summarize(&stage);
    assert_eq!(summary.committable, 1);

    let actions = derive_actions(&summary, &GateFlags::from_stage(&stage));
    assert!(!actions.contains(Action::Commit), "No commit permission");
    assert!(!actions.contains(Action::SubmitForReview));
    assert!(actions.contains(Action::SaveStash));
}
