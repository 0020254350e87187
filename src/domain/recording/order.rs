//! Recording list ordering

use super::entry::Recording;

/// Sort recordings newest first.
///
/// File names are timestamp-derived, so descending order of the location
/// string puts the most recent recording at index 0.
pub fn sort_newest_first(recordings: &mut [Recording]) {
    recordings.sort_by_key(|r| std::cmp::Reverse(r.location_key()));
}
