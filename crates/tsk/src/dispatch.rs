//! Routing from the parsed command word to a command implementation.
//!
//! The dispatcher owns the invocation plumbing every command shares:
//! loading the configuration, parsing the arguments, opening the
//! repository and merging the standing context. Commands receive the
//! finished pieces and never look at the raw argument list.

use std::process::ExitCode;

use tsk_core::vocab::{
    CMD_ADD, CMD_CONTEXT, CMD_DONE, CMD_EDIT, CMD_GIT, CMD_HELP, CMD_LOG, CMD_MODIFY, CMD_NEXT,
    CMD_NOTE, CMD_NOTES, CMD_REMOVE, CMD_RESOLVE, CMD_RM, CMD_SHOW_ACTIVE, CMD_SHOW_OPEN,
    CMD_SHOW_PAUSED, CMD_SHOW_PROJECTS, CMD_SHOW_RESOLVED, CMD_SHOW_TAGS, CMD_SHOW_UNORGANISED,
    CMD_START, CMD_STOP, CMD_SYNC, CMD_UNDO, CMD_VERSION,
};
use tsk_core::{parse_cmd_line, GitRepo, TaskStore};

use crate::commands::{self, CommandContext, Result};
use crate::config;

/// Commands whose query or created task absorbs the standing context.
///
/// Everything else either manages the context itself, drives git, or is
/// informational; merging would be meaningless there.
const CONTEXT_COMMANDS: &[&str] = &[
    CMD_NEXT,
    CMD_ADD,
    CMD_LOG,
    CMD_NOTE,
    CMD_NOTES,
    CMD_MODIFY,
    CMD_START,
    CMD_STOP,
    CMD_RESOLVE,
    CMD_DONE,
    CMD_REMOVE,
    CMD_RM,
    CMD_SHOW_OPEN,
    CMD_SHOW_ACTIVE,
    CMD_SHOW_PAUSED,
    CMD_SHOW_RESOLVED,
];

/// Runs one invocation end to end.
///
/// # Errors
///
/// Returns whatever the configuration, storage, git layer or the command
/// itself failed with; `main` maps the error to an exit code. A context
/// conflict surfaces here and deliberately aborts the whole invocation:
/// the user asked for two different things at once and must rephrase.
pub fn run(args: &[String]) -> Result<ExitCode> {
    let cfg = config::load_config()?;
    let ctx = CommandContext::from_config(&cfg);
    let mut cmd_line = parse_cmd_line(args);

    // An absent command word means the default listing.
    let cmd = cmd_line.cmd.clone().unwrap_or_else(|| CMD_NEXT.to_string());

    // Informational commands need no repository at all.
    match cmd.as_str() {
        CMD_HELP => {
            commands::help::print_help();
            return Ok(ExitCode::SUCCESS);
        }
        CMD_VERSION => {
            commands::help::print_version();
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let root = cfg.repo_root()?;
    let store = TaskStore::with_root(&root);
    let repo = GitRepo::new(&root);
    repo.ensure_repo()?;

    // Raw git commands bypass the query language entirely.
    if cmd == CMD_GIT {
        let code = repo.passthrough(&raw_git_args(args))?;
        return Ok(ExitCode::from(code.clamp(0, 255) as u8));
    }

    let state = store.load_state()?;
    if CONTEXT_COMMANDS.contains(&cmd.as_str()) && !cmd_line.ignore_context {
        cmd_line.merge_context(&state.context)?;
    }

    match cmd.as_str() {
        CMD_ADD => commands::add::execute(&ctx, &store, &repo, &cmd_line, false)?,
        CMD_LOG => commands::add::execute(&ctx, &store, &repo, &cmd_line, true)?,
        CMD_START => commands::start::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_STOP => commands::stop::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_NOTE | CMD_NOTES => commands::note::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_RESOLVE | CMD_DONE => commands::resolve::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_MODIFY => commands::modify::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_EDIT => commands::edit::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_REMOVE | CMD_RM => commands::remove::execute(&ctx, &store, &repo, &cmd_line)?,
        CMD_CONTEXT => commands::context::execute(&ctx, &store, &cmd_line, state)?,
        CMD_SYNC => commands::sync::execute(&ctx, &repo)?,
        CMD_UNDO => commands::undo::execute(&ctx, &repo)?,
        CMD_SHOW_OPEN | CMD_SHOW_ACTIVE | CMD_SHOW_PAUSED | CMD_SHOW_RESOLVED
        | CMD_SHOW_PROJECTS | CMD_SHOW_TAGS | CMD_SHOW_UNORGANISED => {
            commands::show::execute(&ctx, &store, &cmd, &cmd_line, &state.context)?
        }
        // CMD_NEXT, plus anything the parser left as free text.
        _ => commands::next::execute(&ctx, &store, &cmd_line, &state.context)?,
    }

    Ok(ExitCode::SUCCESS)
}

/// The argument tail after the `git` command word, exactly as given.
///
/// The classified [`CmdLine`](tsk_core::CmdLine) is useless here; git
/// needs its own tokens untouched, sigils and all.
fn raw_git_args(args: &[String]) -> Vec<String> {
    args.iter()
        .skip_while(|arg| !arg.eq_ignore_ascii_case(CMD_GIT))
        .skip(1)
        .cloned()
        .collect()
}
