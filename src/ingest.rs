// ingest.rs - Content Ingestion and Validation
// Turns the inline text of a command plus any message attachments into one text blob,
// or into a single specific rejection.
//
// Key Features:
// - Rejects image/video attachments and anything over the 500kb ceiling
// - Reads attachments strictly in order and stops at the first bad one
// - Never hands back partially combined text
// - First-attachment selection for the OCR path
//
// Used by: commands/paste.rs, commands/ocr.rs

use async_trait::async_trait;
use log::{debug, warn};
use serenity::model::channel::Attachment;

use crate::error::{MetaError, MAX_ATTACHMENT_BYTES};

/// Marker placed between the inline text and the attachment contents
pub const ATTACHMENT_SEPARATOR: &str = "\n\nATTACHMENTS\n\n";

/// A message attachment as ingestion sees it
#[async_trait]
pub trait AttachmentSource: Send + Sync {
    fn filename(&self) -> &str;

    /// Size reported by Discord, known before any download
    fn byte_size(&self) -> u64;

    /// True when the attachment carries image/video dimensions
    fn is_media(&self) -> bool;

    async fn read(&self) -> Result<Vec<u8>, MetaError>;
}

#[async_trait]
impl AttachmentSource for Attachment {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn byte_size(&self) -> u64 {
        self.size
    }

    fn is_media(&self) -> bool {
        self.height.is_some() || self.width.is_some()
    }

    async fn read(&self) -> Result<Vec<u8>, MetaError> {
        self.download().await.map_err(|e| MetaError::AttachmentRead {
            filename: self.filename.clone(),
            reason: e.to_string(),
        })
    }
}

/// Check one attachment against the type and size rules without reading it
fn validate_attachment<A: AttachmentSource + ?Sized>(attachment: &A) -> Result<(), MetaError> {
    if attachment.is_media() {
        return Err(MetaError::UnsupportedAttachmentType {
            filename: attachment.filename().to_string(),
        });
    }
    if attachment.byte_size() > MAX_ATTACHMENT_BYTES {
        return Err(MetaError::AttachmentTooLarge {
            filename: attachment.filename().to_string(),
            size: attachment.byte_size(),
        });
    }
    Ok(())
}

/// Combine inline text and text attachments into one blob.
///
/// The separator is only emitted when at least one attachment is present. Empty
/// inline text counts as no inline text. On any failure nothing is returned but the
/// error, and attachments after the failing one are never read.
pub async fn ingest_text<A: AttachmentSource>(
    inline_text: Option<&str>,
    attachments: &[A],
) -> Result<String, MetaError> {
    let mut combined = String::new();

    if let Some(text) = inline_text.filter(|t| !t.is_empty()) {
        combined.push_str(text);
    }

    if attachments.is_empty() {
        return Ok(combined);
    }

    combined.push_str(ATTACHMENT_SEPARATOR);
    for attachment in attachments {
        if let Err(e) = validate_attachment(attachment) {
            warn!("[INGEST] Rejected attachment '{}': {}", attachment.filename(), e);
            return Err(e);
        }

        let bytes = attachment.read().await?;
        debug!("[INGEST] Read {} bytes from '{}'", bytes.len(), attachment.filename());

        let text = String::from_utf8(bytes).map_err(|_| MetaError::InvalidEncoding {
            filename: attachment.filename().to_string(),
        })?;
        combined.push_str(&text);
    }

    Ok(combined)
}

/// Pick the attachment the OCR command works on. Only the first one is used.
pub fn first_attachment<A: AttachmentSource>(attachments: &[A]) -> Result<&A, MetaError> {
    let first = attachments.first().ok_or(MetaError::NoAttachmentProvided)?;
    if attachments.len() > 1 {
        debug!(
            "[INGEST] {} attachments provided, only '{}' will be used",
            attachments.len(),
            first.filename()
        );
    }
    Ok(first)
}
