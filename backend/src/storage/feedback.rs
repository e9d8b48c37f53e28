use shared::{FeedbackOutcome, Label};

use super::s3_service::{S3Service, S3ServiceError};

/// Bucket prefix holding consented misclassified images, one folder per
/// asserted true label.
const CORRECTIONS_PREFIX: &str = "corrections/";

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Storage error: {0}")]
    Storage(#[from] S3ServiceError),
}

/// Content-addressed dedup over the corrections bucket: one stored object
/// per distinct image, keyed by the hash of its bytes.
pub struct FeedbackStore {
    s3_service: S3Service,
}

impl FeedbackStore {
    pub fn new(s3_service: S3Service) -> Self {
        Self { s3_service }
    }

    /// Stores a consented misclassified image under its asserted true
    /// label, unless identical bytes were already uploaded under any label.
    pub async fn store_correction(
        &self,
        image_data: &[u8],
        true_label: Label,
        mime_type: &str,
    ) -> Result<FeedbackOutcome, FeedbackError> {
        let image_hash = S3Service::calculate_image_hash(image_data);
        let file_extension = S3Service::extract_file_extension(mime_type)?;

        let existing = self.s3_service.list_keys(CORRECTIONS_PREFIX).await?;
        if is_duplicate(&existing, &image_hash) {
            return Ok(FeedbackOutcome::Duplicate);
        }

        let s3_key = correction_key(true_label, &image_hash, file_extension);
        self.s3_service
            .upload_image(image_data, &s3_key, mime_type)
            .await?;
        Ok(FeedbackOutcome::Stored)
    }
}

pub fn correction_key(true_label: Label, image_hash: &str, file_extension: &str) -> String {
    format!(
        "{}{}/{}.{}",
        CORRECTIONS_PREFIX,
        true_label.folder(),
        image_hash,
        file_extension
    )
}

/// Compares stored object names (not full keys) by content hash, so the
/// same bytes under a different label or extension still count as stored.
pub fn is_duplicate(existing_keys: &[String], image_hash: &str) -> bool {
    existing_keys.iter().any(|key| {
        key.rsplit('/')
            .next()
            .is_some_and(|name| name.starts_with(image_hash))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_keys_are_label_scoped_and_hash_named() {
        let key = correction_key(Label::BrownGlass, "abc123", "jpg");
        assert_eq!(key, "corrections/brown-glass/abc123.jpg");
    }

    #[test]
    fn second_identical_upload_is_flagged_as_duplicate() {
        let bytes = b"fake image bytes";
        let hash = S3Service::calculate_image_hash(bytes);
        let first_key = correction_key(Label::Cardboard, &hash, "jpg");

        // After the first upload the listing contains its key; identical
        // bytes must then be flagged no matter which label is asserted.
        assert!(is_duplicate(std::slice::from_ref(&first_key), &hash));
        assert!(is_duplicate(
            std::slice::from_ref(&first_key),
            &S3Service::calculate_image_hash(b"fake image bytes")
        ));
    }

    #[test]
    fn different_bytes_are_not_duplicates() {
        let stored = vec![correction_key(
            Label::Metal,
            &S3Service::calculate_image_hash(b"one image"),
            "png",
        )];
        let other_hash = S3Service::calculate_image_hash(b"another image");
        assert!(!is_duplicate(&stored, &other_hash));
    }

    #[test]
    fn duplicate_check_ignores_the_stored_extension() {
        let hash = S3Service::calculate_image_hash(b"same bytes");
        let stored = vec![correction_key(Label::Shoes, &hash, "png")];
        assert!(is_duplicate(&stored, &hash));
    }
}
