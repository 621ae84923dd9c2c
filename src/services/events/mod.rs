// Event list loading
// Reads the externally owned event markers from a JSON file

use crate::models::event_list::EventList;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a JSON object of `"D/M/YYYY": marker` pairs.
pub fn load_event_list(path: &Path) -> Result<EventList> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event list from {}", path.display()))?;
    let events = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse event list in {}", path.display()))?;
    Ok(events)
}

/// The configured event list, or an empty one when none is configured or it
/// cannot be read.
pub fn load_event_list_or_empty(path: Option<&Path>) -> EventList {
    let Some(path) = path else {
        return EventList::new();
    };

    match load_event_list(path) {
        Ok(events) => {
            log::info!("Loaded {} event markers from {}", events.len(), path.display());
            events
        }
        Err(e) => {
            log::warn!("Failed to load event list: {:#}", e);
            EventList::new()
        }
    }
}
