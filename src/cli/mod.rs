//! CLI command implementations

pub mod command;
pub mod definition;
pub mod help;

pub use command::{parse_invocation, CommandKind, Invocation};
pub use definition::Cli;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use tracing::debug;

use crate::error::TodoError;
use crate::store::{Config, Storage, TaskStore};

/// Settings that shape how a command runs, merged from config and flags.
#[derive(Debug, Clone)]
pub struct Options {
    pub default_category: String,
    pub lenient: bool,
    pub json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_category: crate::store::DEFAULT_CATEGORY.to_string(),
            lenient: false,
            json: false,
        }
    }
}

#[derive(Serialize)]
struct CategoryJson<'a> {
    category: &'a str,
    tasks: &'a [String],
}

fn parse_index(arg: &str) -> Result<usize, TodoError> {
    arg.trim()
        .parse()
        .map_err(|_| TodoError::InvalidNumber(arg.to_string()))
}

/// Positional argument `n`, or the command's minimum-arguments error.
fn arg(invocation: &Invocation, n: usize) -> Result<&str, TodoError> {
    invocation
        .args
        .get(n)
        .map(String::as_str)
        .ok_or(TodoError::InsufficientArguments {
            command: invocation.command.name(),
            required: invocation.command.min_args(),
        })
}

/// Arguments from `n` on, joined into one task text.
fn text_from(invocation: &Invocation, n: usize) -> Result<String, TodoError> {
    arg(invocation, n)?;
    Ok(invocation.args[n..].join(" "))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Run one parsed command against the store and return the text to print.
pub fn execute(store: &mut TaskStore, invocation: &Invocation, opts: &Options) -> Result<String> {
    let category = invocation
        .category
        .as_deref()
        .unwrap_or(&opts.default_category);
    let args = &invocation.args;
    debug!(
        "Running '{}' on category '{}'",
        invocation.command.name(),
        category
    );

    let output = match invocation.command {
        CommandKind::List => {
            let all = args.iter().any(|a| a == "-a" || a == "--all");
            if all {
                if opts.json {
                    to_json(&store.non_empty())?
                } else {
                    store.list_all()
                }
            } else if !store.contains(category) && opts.lenient {
                if opts.json {
                    to_json(&CategoryJson {
                        category,
                        tasks: &[],
                    })?
                } else {
                    format!("No tasks in '{}'.\n", category)
                }
            } else if opts.json {
                let tasks = store
                    .tasks(category)
                    .ok_or_else(|| TodoError::NoSuchCategory(category.to_string()))?;
                to_json(&CategoryJson { category, tasks })?
            } else {
                let mut out = String::new();
                store.list(category, &mut out)?;
                out
            }
        }
        CommandKind::Add => {
            let index = store.add(category, &text_from(invocation, 0)?)?;
            let text = store
                .tasks(category)
                .and_then(|tasks| tasks.get(index))
                .cloned()
                .unwrap_or_default();
            format!("✓ Added to {}: {}) {}\n", category, index, text)
        }
        CommandKind::Remove => {
            arg(invocation, 0)?;
            let ids = args
                .iter()
                .map(|a| parse_index(a))
                .collect::<Result<Vec<_>, _>>()?;
            let removed = store.remove(category, &ids)?;
            let mut out = String::new();
            for text in &removed {
                out.push_str(&format!("✓ Removed from {}: {}\n", category, text));
            }
            out
        }
        CommandKind::Exchange => {
            let i = parse_index(arg(invocation, 0)?)?;
            let j = parse_index(arg(invocation, 1)?)?;
            store.exchange(category, i, j)?;
            format!("✓ Exchanged {} and {} in {}\n", i, j, category)
        }
        CommandKind::Move => {
            let id = parse_index(arg(invocation, 0)?)?;
            let target = arg(invocation, 1)?;
            let text = store.move_task(category, id, target)?;
            let mut out = format!("✓ Moved '{}' from {} to {}\n", text, category, target);
            store.list(target, &mut out)?;
            out
        }
        CommandKind::Change => {
            let id = parse_index(arg(invocation, 0)?)?;
            let old = store.change(category, id, &text_from(invocation, 1)?)?;
            let new = store
                .tasks(category)
                .and_then(|tasks| tasks.get(id))
                .cloned()
                .unwrap_or_default();
            format!("✓ Changed {}) '{}' -> '{}'\n", id, old, new)
        }
        CommandKind::Up | CommandKind::Down => {
            let id = parse_index(arg(invocation, 0)?)?;
            let count = match args.get(1) {
                Some(count) => parse_index(count)?,
                None => 1,
            };
            let pos = if invocation.command == CommandKind::Up {
                store.move_up(category, id, count)?
            } else {
                store.move_down(category, id, count)?
            };
            let text = store
                .tasks(category)
                .and_then(|tasks| tasks.get(pos))
                .cloned()
                .unwrap_or_default();
            format!("✓ Moved to {}) {}\n", pos, text)
        }
        CommandKind::Categories => {
            let names = store.categories();
            if opts.json {
                to_json(&names)?
            } else {
                names.iter().map(|n| format!("{}\n", n)).collect()
            }
        }
        CommandKind::Clear => {
            let count = store.clear(category)?;
            format!("✓ Cleared {} ({} tasks)\n", category, count)
        }
        CommandKind::Top => {
            let top = store.top(category);
            if opts.json {
                format!("{}\n", serde_json::to_string(&top)?)
            } else {
                top.map(|t| format!("{}\n", t)).unwrap_or_default()
            }
        }
        CommandKind::Help => help::render(),
    };

    Ok(output)
}

/// Resolve configuration, load the store, run the command, and save if the
/// command mutates. Returns the text to print.
pub fn run(cli: Cli) -> Result<String> {
    if let Some(shell) = cli.completions {
        let mut buf = Vec::new();
        generate(shell, &mut Cli::command(), "todo", &mut buf);
        return Ok(String::from_utf8(buf)?);
    }

    let invocation = parse_invocation(&cli.args)?;
    if invocation.command == CommandKind::Help {
        return Ok(help::render());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let path = match cli.file {
        Some(path) => path,
        None => config.store_path()?,
    };
    let storage = Storage::new(path).with_backup(config.backup);
    let mut store = storage.load()?;

    let opts = Options {
        default_category: config.default_category.clone(),
        lenient: cli.lenient || config.lenient_list,
        json: cli.json,
    };

    let output = execute(&mut store, &invocation, &opts)?;
    if invocation.command.is_mutating() {
        storage.save(&mut store)?;
    }

    Ok(output)
}
