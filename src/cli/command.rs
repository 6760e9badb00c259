//! Command table and argv parsing for `todo [-category] [command [args...]]`

use crate::error::{Result, TodoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    List,
    Add,
    Remove,
    Exchange,
    Move,
    Change,
    Categories,
    Clear,
    Top,
    Up,
    Down,
    Help,
}

pub struct CommandSpec {
    pub kind: CommandKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub min_args: usize,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::List,
        name: "list",
        aliases: &["show", "ls"],
        min_args: 0,
        usage: "list [-a|--all]",
        summary: "Show the category's tasks, or every category with --all",
    },
    CommandSpec {
        kind: CommandKind::Add,
        name: "add",
        aliases: &["a"],
        min_args: 1,
        usage: "add <text...>",
        summary: "Append a task",
    },
    CommandSpec {
        kind: CommandKind::Remove,
        name: "remove",
        aliases: &["rm", "ok"],
        min_args: 1,
        usage: "remove <id...>",
        summary: "Remove tasks by position",
    },
    CommandSpec {
        kind: CommandKind::Exchange,
        name: "exchange",
        aliases: &["ex"],
        min_args: 2,
        usage: "exchange <id> <id>",
        summary: "Swap two tasks",
    },
    CommandSpec {
        kind: CommandKind::Move,
        name: "move",
        aliases: &["mv"],
        min_args: 2,
        usage: "move <id> <category>",
        summary: "Move a task to the end of another category",
    },
    CommandSpec {
        kind: CommandKind::Change,
        name: "change",
        aliases: &["ch"],
        min_args: 2,
        usage: "change <id> <text...>",
        summary: "Replace a task's text",
    },
    CommandSpec {
        kind: CommandKind::Categories,
        name: "categories",
        aliases: &["cat"],
        min_args: 0,
        usage: "categories",
        summary: "List category names",
    },
    CommandSpec {
        kind: CommandKind::Clear,
        name: "clear",
        aliases: &[],
        min_args: 0,
        usage: "clear",
        summary: "Delete every task in the category",
    },
    CommandSpec {
        kind: CommandKind::Top,
        name: "top",
        aliases: &[],
        min_args: 0,
        usage: "top",
        summary: "Show the first task",
    },
    CommandSpec {
        kind: CommandKind::Up,
        name: "up",
        aliases: &[],
        min_args: 1,
        usage: "up <id> [count]",
        summary: "Move a task towards the top",
    },
    CommandSpec {
        kind: CommandKind::Down,
        name: "down",
        aliases: &[],
        min_args: 1,
        usage: "down <id> [count]",
        summary: "Move a task towards the bottom",
    },
    CommandSpec {
        kind: CommandKind::Help,
        name: "help",
        aliases: &[],
        min_args: 0,
        usage: "help",
        summary: "Show this help",
    },
];

impl CommandKind {
    /// Look up a command by its name or one of its aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == name || spec.aliases.contains(&name))
            .map(|spec| spec.kind)
    }

    fn spec(self) -> &'static CommandSpec {
        COMMANDS
            .iter()
            .find(|spec| spec.kind == self)
            .unwrap_or(&COMMANDS[0])
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn min_args(self) -> usize {
        self.spec().min_args
    }

    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Remove
                | Self::Exchange
                | Self::Move
                | Self::Change
                | Self::Clear
                | Self::Up
                | Self::Down
        )
    }
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Category named by a leading `-category` token, if any
    pub category: Option<String>,
    pub command: CommandKind,
    pub args: Vec<String>,
}

pub fn parse_invocation(args: &[String]) -> Result<Invocation> {
    let mut rest = args;

    let mut category = None;
    if let Some(first) = rest.first() {
        if let Some(name) = first.strip_prefix('-') {
            if !name.is_empty() {
                category = Some(name.to_string());
            }
            rest = &rest[1..];
        }
    }

    let Some((name, rest)) = rest.split_first() else {
        return Ok(Invocation {
            category,
            command: CommandKind::List,
            args: Vec::new(),
        });
    };

    let command =
        CommandKind::from_name(name).ok_or_else(|| TodoError::UnknownCommand(name.clone()))?;
    if rest.len() < command.min_args() {
        return Err(TodoError::InsufficientArguments {
            command: command.name(),
            required: command.min_args(),
        });
    }

    Ok(Invocation {
        category,
        command,
        args: rest.to_vec(),
    })
}
