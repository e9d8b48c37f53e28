pub mod feedback;
pub mod s3_service;
