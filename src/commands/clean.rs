//! Remove the review copy of the homepage

use std::fs;

use crate::error::Result;
use crate::HomeCard;

/// Delete a review copy left over from an earlier run
pub fn run(hc: &HomeCard) -> Result<()> {
    if hc.review_path.exists() {
        fs::remove_file(&hc.review_path)?;
        tracing::info!("Deleted: {:?}", hc.review_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_review_copy() {
        let dir = tempfile::tempdir().unwrap();
        let hc = HomeCard::new(dir.path()).unwrap();
        fs::write(&hc.review_path, "draft").unwrap();

        run(&hc).unwrap();
        assert!(!hc.review_path.exists());

        // Nothing to delete is fine
        run(&hc).unwrap();
    }
}
