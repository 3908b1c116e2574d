//! Scope CLI
//!
//! Inspect a workspace file from the command line: the sidebar hierarchy,
//! visibility pruning, ancestor chains, saved-filter listings and the space
//! picker.
//!
//! ```text
//! scope --config workspace.toml tree
//! scope --config workspace.toml prune --visible backend,sales
//! scope --config workspace.toml ancestors backend
//! scope --config workspace.toml filters --space backend --user 2
//! scope --config workspace.toml picker --select eng --search end
//! ```

#![warn(missing_docs)]

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use scope_core::ScopeSession;
use scope_filter::{FilterListing, SavedFilter, UserId};
use scope_picker::{PickerEntry, ScopePicker, SelectionState};
use scope_tree::SpaceForest;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Command-line definition
#[must_use]
pub fn command() -> Command {
    let user = Arg::new("user")
        .long("user")
        .help("Act as this user id instead of the workspace's current user");

    Command::new("scope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Space hierarchy and saved-filter inspection")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Workspace file (.toml, .yaml, .yml or .json)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write log events as JSON lines"),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the sidebar hierarchy for a user")
                .arg(user.clone()),
        )
        .subcommand(
            Command::new("prune")
                .about("Print the hierarchy restricted to visible spaces")
                .arg(
                    Arg::new("visible")
                        .long("visible")
                        .value_delimiter(',')
                        .num_args(0..)
                        .help("Visible space ids (empty = unrestricted)"),
                ),
        )
        .subcommand(
            Command::new("ancestors")
                .about("Print the ancestor chain of a space, root-most first")
                .arg(Arg::new("id").required(true).help("Space id")),
        )
        .subcommand(
            Command::new("filters")
                .about("List saved filters offered in a space")
                .arg(
                    Arg::new("space")
                        .long("space")
                        .required(true)
                        .help("Current space id"),
                )
                .arg(user),
        )
        .subcommand(
            Command::new("picker")
                .about("Print the space picker listing with selection states")
                .arg(
                    Arg::new("select")
                        .long("select")
                        .value_delimiter(',')
                        .num_args(0..)
                        .help("Space ids to toggle, in order"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Only list spaces whose name contains this text"),
                ),
        )
}

/// Run the parsed command, writing results to `out`
///
/// # Errors
/// Workspace loading failures and output errors
pub fn execute(matches: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = matches
        .get_one::<PathBuf>("config")
        .context("--config is required")?;
    let json = matches.get_flag("json");
    let mut session = ScopeSession::load(path)
        .with_context(|| format!("loading workspace {}", path.display()))?;

    if let Some((name, _)) = matches.subcommand() {
        tracing::debug!(command = name, user = %session.current_user().id, "running command");
    }

    match matches.subcommand() {
        Some(("tree", args)) => {
            act_as(&mut session, args);
            write_forest(&session.sidebar(), json, out)
        }
        Some(("prune", args)) => {
            let visible = list_arg(args, "visible");
            write_forest(&session.forest().prune_visible(visible), json, out)
        }
        Some(("ancestors", args)) => {
            let id = args.get_one::<String>("id").context("missing space id")?;
            let ancestors = session.forest().ancestors_of(id);
            if json {
                write_json(&ancestors, out)
            } else {
                for ancestor in &ancestors {
                    writeln!(out, "{ancestor}")?;
                }
                Ok(())
            }
        }
        Some(("filters", args)) => {
            act_as(&mut session, args);
            let space = args.get_one::<String>("space").context("missing --space")?;
            let listing = session.filters_for(space);
            if json {
                write_json(&listing, out)
            } else {
                write_listing(&listing, out)
            }
        }
        Some(("picker", args)) => {
            let mut picker = session.open_picker();
            for id in list_arg(args, "select") {
                picker.toggle(&id);
            }
            let query = args.get_one::<String>("search").map_or("", String::as_str);
            write_picker(&picker, query, json, out)
        }
        _ => anyhow::bail!("no subcommand given"),
    }
}

fn act_as(session: &mut ScopeSession, args: &ArgMatches) {
    if let Some(user) = args.get_one::<String>("user") {
        session.users_mut().set_current(&UserId::from(user.as_str()));
    }
}

fn list_arg(args: &ArgMatches, name: &str) -> Vec<String> {
    args.get_many::<String>(name)
        .map(|values| {
            values
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_forest(forest: &SpaceForest, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    if json {
        return write_json(forest, out);
    }
    for entry in forest.iter() {
        writeln!(out, "{}{} ({})", "  ".repeat(entry.level), entry.name(), entry.id())?;
    }
    Ok(())
}

fn write_listing(listing: &FilterListing, out: &mut dyn Write) -> anyhow::Result<()> {
    fn section(title: &str, filters: &[SavedFilter], out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "{title}:")?;
        if filters.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for filter in filters {
            let spaces = filter
                .spaces
                .iter()
                .flatten()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            if spaces.is_empty() {
                writeln!(out, "  {} [{}]", filter.name, filter.id)?;
            } else {
                writeln!(out, "  {} [{}] in {}", filter.name, filter.id, spaces)?;
            }
        }
        Ok(())
    }

    section("personal", &listing.personal, out)?;
    section("public", &listing.public, out)
}

#[derive(Serialize)]
struct PickerRow<'a> {
    #[serde(flatten)]
    entry: &'a PickerEntry,
    state: SelectionState,
}

#[derive(Serialize)]
struct PickerView<'a> {
    label: String,
    entries: Vec<PickerRow<'a>>,
}

fn write_picker(
    picker: &ScopePicker,
    query: &str,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let view = PickerView {
        label: picker.label(),
        entries: picker
            .search(query)
            .into_iter()
            .map(|entry| PickerRow {
                entry,
                state: picker.state(entry.id().as_str()),
            })
            .collect(),
    };
    if json {
        return write_json(&view, out);
    }

    for row in &view.entries {
        let mark = match row.state {
            SelectionState::Selected => "[x]",
            SelectionState::Partial => "[-]",
            SelectionState::Unselected => "[ ]",
        };
        writeln!(
            out,
            "{mark} {}{} ({})",
            "  ".repeat(row.entry.level()),
            row.entry.name(),
            row.entry.id()
        )?;
    }
    writeln!(out, "selection: {}", view.label)?;
    Ok(())
}
