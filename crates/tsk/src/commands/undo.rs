//! Undo command implementation.
//!
//! Reverts the most recent commit with a new commit, so the history
//! keeps both the mistake and its correction. Repeating `undo` undoes
//! the undo.

use tsk_core::GitRepo;

use super::{CommandContext, Result};

/// Executes the undo command.
///
/// # Errors
///
/// Returns the git error when there is nothing to revert or the revert
/// does not apply cleanly.
pub fn execute(ctx: &CommandContext, repo: &GitRepo) -> Result<()> {
    repo.undo()?;
    if ctx.verbose {
        eprintln!("reverted HEAD in {}", repo.dir().display());
    }
    println!("Reverted the last change.");
    Ok(())
}
