//! Repair and cleanup operations

use anyhow::Result;

use wardbook_core::Registry;

use crate::commands::confirm;

/// Remove properties whose street no longer exists.
pub fn prune(registry: &dyn Registry) -> Result<()> {
    let removed = registry.prune_orphan_properties()?;
    if removed == 0 {
        println!("No orphaned properties found");
    } else {
        println!("Removed {removed} orphaned propert(ies)");
    }
    Ok(())
}

/// Wipe all three collections.
pub fn clear(registry: &dyn Registry, yes: bool) -> Result<()> {
    let go = yes || confirm("Remove ALL CDAs, streets, and properties? This cannot be undone.")?;
    if !go {
        println!("Aborted");
        return Ok(());
    }

    registry.clear_all()?;
    println!("Registry cleared");
    Ok(())
}
