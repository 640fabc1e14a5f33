//! `reset`: restart the processor via the injected reset hook.

use crate::console::Console;
use crate::error::ConsoleError;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    console.println("Resetting...");
    // Diverges when a hook is attached; otherwise reports the missing
    // capability like any other handler error.
    console.system_reset()
}
