//! Homepage patcher
//!
//! Copies the homepage line by line and inserts the card right after the
//! first line holding the heading marker. The result always goes to a
//! separate review copy; it replaces the homepage only on request.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Copy `reader` to `writer`, inserting `fragment` after the first line containing `marker`
///
/// Trailing whitespace is trimmed from every copied line. Returns whether
/// the fragment was inserted.
pub fn insert_after_marker<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    fragment: &str,
    marker: &str,
) -> io::Result<bool> {
    let mut inserted = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        writeln!(writer, "{}", line)?;

        if !inserted && line.contains(marker) {
            writeln!(writer)?;
            writeln!(writer, "{}", fragment)?;
            inserted = true;
        }
    }

    Ok(inserted)
}

/// Write the patched homepage to `review`, leaving `index` untouched
///
/// The output is staged in a temporary file next to `review` and only
/// persisted once the marker was found, so a failed patch leaves nothing
/// behind.
pub fn patch_file(index: &Path, review: &Path, fragment: &str, marker: &str) -> Result<()> {
    let dir = match review.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    let inserted = {
        let reader = BufReader::new(File::open(index)?);
        let mut writer = BufWriter::new(staged.as_file_mut());
        let inserted = insert_after_marker(reader, &mut writer, fragment, marker)?;
        writer.flush()?;
        inserted
    };

    if !inserted {
        // Dropping the staged file deletes it
        return Err(Error::AnchorNotFound {
            path: index.to_path_buf(),
            marker: marker.to_string(),
        });
    }

    // Keep the homepage's mode instead of the temp file's private one
    let permissions = fs::metadata(index)?.permissions();
    staged.as_file().set_permissions(permissions)?;

    staged.persist(review).map_err(|e| e.error)?;
    tracing::info!("Wrote {:?}", review);
    Ok(())
}

/// Replace the homepage with the reviewed copy
pub fn commit(review: &Path, index: &Path) -> Result<()> {
    fs::rename(review, index)?;
    tracing::info!("Replaced {:?} with {:?}", index, review);
    Ok(())
}
