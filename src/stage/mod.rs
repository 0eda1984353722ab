use crate::gate::{Action, ActionSet, GateFlags, derive_actions};
use crate::summary::{StageSummary, summarize};
use crate::{Stage, StageFilter};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Collapsible tool panels of the stage page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Import,
    Script,
    Commit,
    StageActions,
    StashActions,
}

impl PanelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelKind::Import => "import",
            PanelKind::Script => "script",
            PanelKind::Commit => "commit",
            PanelKind::StageActions => "stageactions",
            PanelKind::StashActions => "stashactions",
        }
    }
}

/// A collapsible tool panel and its initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolPanel {
    pub kind: PanelKind,
    pub expanded: bool,
    pub dom_id: String,
}

impl ToolPanel {
    fn new(kind: PanelKind, expanded: bool) -> Self {
        Self {
            kind,
            expanded,
            dom_id: panel_dom_id(kind),
        }
    }
}

/// Stable element id of a panel's collapsible body.
fn panel_dom_id(kind: PanelKind) -> String {
    let digest = Sha256::digest(kind.as_str().as_bytes());
    let hex: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();
    format!("collapse_{}", hex)
}

/// Heading shown above a populated stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageHeading {
    SomeCommittable,
    NothingToCommit,
}

/// Everything the stage page needs to know, decided up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum StagePage {
    /// Nothing staged. The open-translator link is always shown.
    Empty { panels: Vec<ToolPanel> },
    Populated {
        linked_contribution: Option<u64>,
        summary: StageSummary,
        heading: StageHeading,
        actions: ActionSet,
        panels: Vec<ToolPanel>,
        preset_message: String,
        edit_query: Vec<(String, String)>,
    },
}

impl StagePage {
    pub fn build(stage: &Stage) -> Self {
        let summary = summarize(stage);

        if summary.is_empty() {
            let mut panels = Vec::new();
            if stage.can_import {
                panels.push(ToolPanel::new(PanelKind::Import, false));
            }
            if stage.can_execute {
                panels.push(ToolPanel::new(PanelKind::Script, false));
            }
            return StagePage::Empty { panels };
        }

        let actions = derive_actions(&summary, &GateFlags::from_stage(stage));

        let heading = if summary.has_committable() {
            StageHeading::SomeCommittable
        } else {
            StageHeading::NothingToCommit
        };

        let mut panels = Vec::new();
        if actions.contains(Action::Commit) {
            panels.push(ToolPanel::new(PanelKind::Commit, true));
        }
        panels.push(ToolPanel::new(PanelKind::StageActions, false));
        if actions.contains(Action::SaveStash) {
            panels.push(ToolPanel::new(PanelKind::StashActions, false));
        }

        StagePage::Populated {
            linked_contribution: stage.staged_contribution,
            summary,
            heading,
            actions,
            panels,
            preset_message: stage.preset_message.clone(),
            edit_query: stage.filter.edit_query(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StagePage::Empty { .. })
    }

    pub fn panels(&self) -> &[ToolPanel] {
        match self {
            StagePage::Empty { panels } | StagePage::Populated { panels, .. } => panels,
        }
    }

    /// Buttons inside the stage actions panel, in display order.
    pub fn stage_action_buttons(&self) -> Vec<Action> {
        const PANEL_ACTIONS: [Action; 5] = [
            Action::Edit,
            Action::Rebase,
            Action::Prune,
            Action::UnstageAll,
            Action::Download,
        ];

        match self {
            StagePage::Empty { .. } => Vec::new(),
            StagePage::Populated { actions, .. } => PANEL_ACTIONS
                .into_iter()
                .filter(|action| actions.contains(*action))
                .collect(),
        }
    }
}

impl StageFilter {
    /// Query parameters that reopen the translator on the staged strings.
    pub fn edit_query(&self) -> Vec<(String, String)> {
        let mut query = vec![("flast".to_string(), u8::from(self.last).to_string())];
        for (i, language) in self.languages.iter().enumerate() {
            query.push((format!("flng[{}]", i), language.clone()));
        }
        for (i, component) in self.components.iter().enumerate() {
            query.push((format!("fcmp[{}]", i), component.clone()));
        }
        query.push(("fstg".to_string(), "1".to_string()));
        // Makes the translator apply the filter on load.
        query.push(("__lazyform_amosfilter".to_string(), "1".to_string()));
        query
    }
}
