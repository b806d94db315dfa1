//! Attachment URLs.
//!
//! The store never talks to blob storage itself. It only asks an
//! [`AttachmentLinker`] where the attachment of a given todo lives.

use crate::{config, error::ConfigError};

use std::env;

/// Bucket name variable read by [`S3AttachmentLinker::from_env`].
pub const ATTACHMENT_S3_BUCKET: &str = "ATTACHMENT_S3_BUCKET";

/// Derives the URL of a todo's attachment from its id.
///
/// Any `Fn(&str) -> String` is a linker:
///
/// ```rust
/// use todos_access::attachment::AttachmentLinker;
///
/// let linker = |todo_id: &str| format!("https://files.example.com/{todo_id}");
/// assert_eq!(linker.url_for("t1"), "https://files.example.com/t1");
/// ```
pub trait AttachmentLinker: Send + Sync {
    /// Stable URL of the attachment object for `todo_id`.
    fn url_for(&self, todo_id: &str) -> String;
}

impl<F> AttachmentLinker for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn url_for(&self, todo_id: &str) -> String {
        self(todo_id)
    }
}

/// Links attachments stored in an S3 bucket under the todo id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct S3AttachmentLinker {
    bucket_name: String,
}

impl S3AttachmentLinker {
    /// Linker for objects in `bucket_name`.
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
        }
    }

    /// Linker for the bucket named by `ATTACHMENT_S3_BUCKET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |variable: &str| env::var(variable).ok();
        config::require(&lookup, ATTACHMENT_S3_BUCKET).map(Self::new)
    }
}

impl AttachmentLinker for S3AttachmentLinker {
    fn url_for(&self, todo_id: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{todo_id}", self.bucket_name)
    }
}
