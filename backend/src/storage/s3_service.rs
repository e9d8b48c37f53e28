use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use sha2::{Digest, Sha256};

#[derive(Clone)]
pub struct S3Service {
    client: Client,
    bucket_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum S3ServiceError {
    #[error("S3 error: {0}")]
    S3(String),
    #[error("Invalid file format")]
    InvalidFormat,
    #[error("File too large")]
    FileTooLarge,
}

impl S3Service {
    pub fn new(client: Client, bucket_name: String) -> Self {
        Self {
            client,
            bucket_name,
        }
    }

    pub fn calculate_image_hash(image_data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(image_data);
        hex::encode(hasher.finalize())
    }

    pub fn extract_file_extension(mime_type: &str) -> Result<&str, S3ServiceError> {
        match mime_type {
            "image/jpeg" => Ok("jpg"),
            "image/png" => Ok("png"),
            "image/webp" => Ok("webp"),
            "image/gif" => Ok("gif"),
            _ => Err(S3ServiceError::InvalidFormat),
        }
    }

    pub fn validate_image_size(image_data: &[u8]) -> Result<(), S3ServiceError> {
        const MAX_SIZE: usize = 50 * 1024 * 1024;
        if image_data.len() > MAX_SIZE {
            return Err(S3ServiceError::FileTooLarge);
        }
        Ok(())
    }

    pub async fn upload_image(
        &self,
        image_data: &[u8],
        s3_key: &str,
        mime_type: &str,
    ) -> Result<(), S3ServiceError> {
        S3Service::validate_image_size(image_data)?;

        let body = ByteStream::from(image_data.to_vec());

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(s3_key)
            .body(body)
            .content_type(mime_type)
            .send()
            .await
            .map_err(|e| S3ServiceError::S3(e.to_string()))?;

        Ok(())
    }

    /// Lists every object key under the prefix, following continuation
    /// tokens so the duplicate check sees the whole corrections tree.
    pub async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, S3ServiceError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket_name)
                .prefix(prefix);
            if let Some(token) = continuation_token {
                request = request.continuation_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| S3ServiceError::S3(e.to_string()))?;

            keys.extend(
                response
                    .contents()
                    .iter()
                    .filter_map(|object| object.key().map(str::to_string)),
            );

            match response.next_continuation_token() {
                Some(token) => continuation_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_hash_is_a_stable_sha256_hex_digest() {
        let hash = S3Service::calculate_image_hash(b"hello");
        assert_eq!(
            hash,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(hash, S3Service::calculate_image_hash(b"hello"));
    }

    #[test]
    fn known_image_mime_types_map_to_extensions() {
        assert_eq!(
            S3Service::extract_file_extension("image/jpeg").unwrap(),
            "jpg"
        );
        assert_eq!(
            S3Service::extract_file_extension("image/png").unwrap(),
            "png"
        );
        assert!(matches!(
            S3Service::extract_file_extension("application/pdf"),
            Err(S3ServiceError::InvalidFormat)
        ));
    }

    #[test]
    fn oversized_uploads_are_rejected() {
        let oversized = vec![0u8; 50 * 1024 * 1024 + 1];
        assert!(matches!(
            S3Service::validate_image_size(&oversized),
            Err(S3ServiceError::FileTooLarge)
        ));
        assert!(S3Service::validate_image_size(&[0u8; 16]).is_ok());
    }
}
