// error.rs - Error Types for the Meta Command Module
// Every failure a meta command can hit is a MetaError variant. The Display text of
// the user-facing variants is exactly what gets sent back to the channel.
//
// Used by: ingest.rs, pagination/, services/, commands/

use thiserror::Error;

/// Attachments larger than this are refused by text ingestion (500kb)
pub const MAX_ATTACHMENT_BYTES: u64 = 500_000;

#[derive(Debug, Error)]
pub enum MetaError {
    // ------------------------------------------------------------------
    // Ingestion
    // ------------------------------------------------------------------
    #[error("Only text files can be used.")]
    UnsupportedAttachmentType { filename: String },

    #[error("File is too large (>500kb).")]
    AttachmentTooLarge { filename: String, size: u64 },

    #[error("`{filename}` is not valid UTF-8 text.")]
    InvalidEncoding { filename: String },

    #[error("No attachment provided.")]
    NoAttachmentProvided,

    #[error("Please provide some text or a text file to paste.")]
    NothingToPaste,

    #[error("Failed to read attachment `{filename}`: {reason}")]
    AttachmentRead { filename: String, reason: String },

    // ------------------------------------------------------------------
    // External services
    // ------------------------------------------------------------------
    #[error("{service} is unavailable right now (HTTP {status}).")]
    ServiceUnavailable { service: String, status: u16 },

    #[error("Couldn't find a comic with that number.")]
    NotFound,

    #[error("Sorry pal, we couldn't find definitions for the word you were looking for.")]
    WordNotFound { word: String },

    #[error("Server error.")]
    ServerError { status: u16 },

    #[error("Unexpected response from {service}: {reason}")]
    MalformedResponse { service: String, reason: String },

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Couldn't decode that image.")]
    ImageDecode(#[from] image::ImageError),

    #[error("Text art rendering failed: {0}")]
    TextArt(String),

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------
    #[error("This menu has already been closed.")]
    StaleSessionEvent,

    #[error("This menu isn't yours.")]
    NotSessionOwner,

    #[error("Page {requested} is out of range (1-{count}).")]
    PageOutOfRange { requested: usize, count: usize },

    #[error("Nothing to show.")]
    EmptyPages,

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetaError {
    /// Whether the Display text is safe and meaningful to send to the invoking user.
    /// Anything else gets logged and replaced with a generic message.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            MetaError::Http(_)
                | MetaError::Discord(_)
                | MetaError::Io(_)
                | MetaError::AttachmentRead { .. }
                | MetaError::MalformedResponse { .. }
                | MetaError::Recognition(_)
                | MetaError::TextArt(_)
        )
    }

    /// Text to send back to the channel for this error
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            "Something went wrong while running that command.".to_string()
        }
    }
}

/// Map an HTTP status from a lookup API onto the error kind the command reports.
/// Returns None for success codes.
pub fn classify_status(status: reqwest::StatusCode) -> Option<MetaError> {
    let code = status.as_u16();
    match code {
        400..=499 => Some(MetaError::NotFound),
        500.. => Some(MetaError::ServerError { status: code }),
        _ => None,
    }
}
