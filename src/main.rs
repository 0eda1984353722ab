use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use stagegate::cli::{self, Commands, ContributionArgs, CreditsArgs};
use stagegate::contrib::{self, AssigneeLine, StringsLine, Viewer};
use stagegate::credits::{self, Maintainers};
use stagegate::snapshot;
use stagegate::stage::{StageHeading, StagePage};
use stagegate::stash::{self, StashTitle};
use stagegate::text::{add_breaks, commit_datetime};
use stagegate::{TimeLine, UserId};

fn main() -> Result<()> {
    let args = cli::parse_args();
    init_logging(args.verbose);

    match args.command {
        Commands::Stage(stage_args) => handle_stage(&stage_args.file, args.json)?,
        Commands::Stash(stash_args) => handle_stash(&stash_args.file, args.json)?,
        Commands::Contribution(contrib_args) => handle_contribution(&contrib_args, args.json)?,
        Commands::Credits(credits_args) => handle_credits(&credits_args, args.json)?,
        Commands::Timestamp { unix } => {
            let formatted = commit_datetime(unix).context("Failed to format timestamp")?;
            println!("{}", formatted);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for `--json`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn time_line(time: TimeLine) -> Result<String> {
    let formatted = commit_datetime(time.timestamp()).context("Invalid timestamp in snapshot")?;
    Ok(match time {
        TimeLine::Modified(_) => format!("modified {}", formatted),
        TimeLine::Created(_) => format!("created {}", formatted),
    })
}

/// Handle the stage command - print the stage summary and enabled actions.
fn handle_stage(path: &std::path::Path, json: bool) -> Result<()> {
    let stage = snapshot::load_stage(path).context("Failed to load stage")?;
    let page = StagePage::build(&stage);
    debug!(empty = page.is_empty(), "built stage page");

    if json {
        return print_json(&page);
    }

    match &page {
        StagePage::Empty { panels } => {
            println!("No staged strings");
            println!("  Tools: translator");
            for panel in panels {
                println!("         {}", panel.kind.as_str());
            }
        }
        StagePage::Populated {
            linked_contribution,
            summary,
            heading,
            actions,
            panels,
            ..
        } => {
            if let Some(id) = linked_contribution {
                println!("Strings staged from contribution #{}", id);
            }
            println!("Stage Summary");
            println!("─────────────────────────────────────");
            println!("  Staged:      {}", summary.staged);
            println!("  Committable: {}", summary.committable);
            match heading {
                StageHeading::SomeCommittable => {}
                StageHeading::NothingToCommit => println!("\n⚠ Nothing to commit"),
            }

            let listed: Vec<&str> = actions.iter().map(|a| a.as_str()).collect();
            println!("\nActions: {}", listed.join(", "));
            for panel in panels {
                let state = if panel.expanded { "expanded" } else { "collapsed" };
                println!("  [{}] {} ({})", state, panel.kind.as_str(), panel.dom_id);
            }
        }
    }

    Ok(())
}

/// Handle the stash command - describe each stash in the file.
fn handle_stash(path: &std::path::Path, json: bool) -> Result<()> {
    let stashes = snapshot::load_stashes(path).context("Failed to load stashes")?;
    let summaries: Vec<_> = stashes.iter().map(stash::describe).collect();
    info!(count = summaries.len(), "described stashes");

    if json {
        return print_json(&summaries);
    }

    for summary in &summaries {
        match &summary.title {
            StashTitle::Autosave => println!("Autosave"),
            StashTitle::Named(name) => println!("{}", name),
        }
        println!("  Owner:      {}", summary.owner.fullname);
        println!("  Time:       {}", time_line(summary.time)?);
        println!("  Strings:    {}", summary.strings);
        println!("  Languages:  {}", add_breaks(&summary.languages));
        println!("  Components: {}", add_breaks(&summary.components));
        if let Some(actions) = &summary.actions {
            let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
            println!("  Actions:    {}", ids.join(", "));
        }
    }

    Ok(())
}

/// Handle the contribution command - describe it from the viewer's side.
fn handle_contribution(args: &ContributionArgs, json: bool) -> Result<()> {
    let contribution =
        snapshot::load_contribution(&args.file).context("Failed to load contribution")?;
    let names = match &args.languages {
        Some(path) => snapshot::load_language_names(path).context("Failed to load language names")?,
        None => HashMap::new(),
    };
    let viewer = Viewer {
        id: UserId(args.viewer),
        can_change_language: args.can_change_language,
    };

    let summary = contrib::describe(&contribution, &viewer, &names);

    if json {
        return print_json(&summary);
    }

    println!("{}", summary.heading);
    println!("  Author:     {}", summary.author.fullname);
    println!("  Time:       {}", time_line(summary.time)?);
    println!("  Status:     {}", summary.status.0);
    let assignee = match &summary.assignee {
        AssigneeLine::Viewer(person) => format!("{} (you)", person.fullname),
        AssigneeLine::Other(person) => person.fullname.clone(),
        AssigneeLine::Unassigned => "nobody".to_string(),
    };
    println!("  Assignee:   {}", assignee);
    println!("  Language:   {}", summary.language.name);
    println!("  Components: {}", summary.components);
    let counts = summary.strings.counts();
    let strings = match summary.strings {
        StringsLine::NoneUsable(_) => format!("{} (none usable after rebase)", counts.orig),
        StringsLine::AllSurvived(_) => format!("{}", counts.orig),
        StringsLine::SomeChanged(_) => format!(
            "{} ({} still apply, {} already in place)",
            counts.orig, counts.new, counts.same
        ),
    };
    println!("  Strings:    {}", strings);

    Ok(())
}

/// Handle the credits command - print the per-language groups.
fn handle_credits(args: &CreditsArgs, json: bool) -> Result<()> {
    let data = snapshot::load_credits(&args.file).context("Failed to load credits")?;
    let view = credits::build_view(&data.languages, &args.current_lang, args.edit.into());
    let issues = credits::issue_lines(&data.issues);

    if json {
        #[derive(Serialize)]
        struct Output<'a> {
            #[serde(flatten)]
            view: &'a credits::CreditsView,
            issues: &'a [String],
        }
        return print_json(&Output {
            view: &view,
            issues: &issues,
        });
    }

    for issue in &issues {
        eprintln!("⚠ {}", issue);
    }

    for group in &view.groups {
        println!("{} [{}]", group.name, group.code);
        match &group.maintainers {
            Maintainers::Missing => println!("  ⚠ No maintainer"),
            Maintainers::Listed(cards) => {
                for card in cards {
                    let remove = if card.removable { " [remove]" } else { "" };
                    println!("  maintainer:  {}{}", card.person.fullname, remove);
                }
            }
        }
        for card in &group.contributors {
            let remove = if card.removable { " [remove]" } else { "" };
            println!("  contributor: {}{}", card.person.fullname, remove);
        }
        if group.can_add_maintainer {
            println!("  [add maintainer]");
        }
        if group.can_add_contributor {
            println!("  [add contributor]");
        }
    }

    Ok(())
}
