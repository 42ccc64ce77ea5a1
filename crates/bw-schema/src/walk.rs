//! Directory walker for schema discovery.
//!
//! Uses the `ignore` crate's walker with every standard filter disabled:
//! `.gitignore` rules and hidden files do not hide schema fragments. Entries
//! are sorted by file name within each directory so traversal order, and with
//! it the aggregated document, is stable across runs and platforms.

use std::path::Path;

use ignore::WalkBuilder;

/// Build a depth-first, name-sorted walker over `root`.
///
/// `root` may also be a single file, in which case the walk yields just that
/// file. Symlinked directories are not followed.
pub fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}
