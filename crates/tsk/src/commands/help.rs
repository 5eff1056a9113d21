//! Help and version output.

/// The usage text for `tsk help`.
const HELP: &str = "\
tsk - a git-backed personal task tracker

Usage: tsk [id...] [command] [attributes...] [free text...] [/ note text...]

Tokens are classified by shape, in any order: leading integers select
tasks by ID, +tag requires a tag, -tag excludes one, project:name sets
the project, -project:name excludes one, P0..P3 set the priority, `--`
ignores the standing context and everything else is free text.

Commands:
  next (default)     list open tasks matching the query
  add                create a pending task from the attributes and text
  log                create an already-resolved task
  start, stop        mark tasks active / paused
  note, notes        append to a task's notes, or print them
  resolve, done      resolve tasks
  modify             apply tag/project/priority edits to tasks
  edit               open a task's file in $EDITOR
  remove, rm         delete tasks outright
  context            show, set (`tsk context +work`) or clear
                     (`tsk context none`) the standing filter
  sync               commit, pull and push the task repository
  undo               revert the last recorded change
  git ...            run a raw git command in the repository
  show-open          every non-resolved task, unlimited
  show-active        tasks being worked on
  show-paused        tasks set aside
  show-resolved      the done pile
  show-projects      per-project open/resolved tallies
  show-tags          every tag in use
  show-unorganised   open tasks with no project and no tags
  help, version      this text / the version";

/// Prints the usage text.
pub fn print_help() {
    println!("{HELP}");
}

/// Prints the version line.
pub fn print_version() {
    println!("tsk {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use tsk_core::vocab::ALL_CMDS;

    #[test]
    fn test_help_mentions_every_command() {
        for cmd in ALL_CMDS {
            assert!(super::HELP.contains(cmd), "help does not mention {cmd}");
        }
    }
}
