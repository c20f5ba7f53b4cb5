//! Hook message command implementation

use std::io::Read;

use log::debug;
use prompt_kit::error::{self, Result};
use prompt_kit::hook::HookEvent;

/// Read a hook payload from stdin and print the message to announce
pub fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| error::fs::io_error(format!("Failed to read hook input: {e}")))?;

    let event = HookEvent::from_json(&input)?;
    debug!("Hook event: {event:?}");
    println!("{}", event.message());
    Ok(())
}
