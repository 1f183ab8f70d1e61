use crate::constants::SENTINEL_CODES;
use crate::types::Registry;
use tracing::debug;

/// Drops the "all offices" aggregate and the header-label pseudo entry.
///
/// Returns how many entries were removed; a second call removes nothing.
pub fn remove_sentinels(registry: &mut Registry) -> usize {
    let mut removed = 0;
    for code in SENTINEL_CODES {
        if let Some(name) = registry.remove(code) {
            debug!("Removed sentinel entry {} ({})", code, name);
            removed += 1;
        }
    }
    removed
}
