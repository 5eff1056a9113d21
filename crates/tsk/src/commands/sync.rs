//! Sync command implementation.
//!
//! Commits anything loose in the working tree, then pulls from and
//! pushes to the configured remote. The per-task file layout keeps
//! merges conflict-free unless two machines edited the same task.

use tsk_core::GitRepo;

use super::{CommandContext, Result};

/// Executes the sync command.
///
/// # Errors
///
/// Returns the git error of the failing step, for instance when no
/// remote is configured.
pub fn execute(ctx: &CommandContext, repo: &GitRepo) -> Result<()> {
    if repo.commit_all("sync")? && ctx.verbose {
        eprintln!("committed loose changes before syncing");
    }
    repo.sync()?;
    println!("Synced.");
    Ok(())
}
