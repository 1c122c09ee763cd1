// paste.rs - Paste Commands
// Implements ^mystbin and ^hastebin: paste the command text and/or text file
// attachments to a paste host and reply with a link.
//
// Supports:
//   - ^mystbin <text>
//   - ^hastebin <text>           (text optional when text files are attached)

use log::info;
use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use super::{meta_services, reply_error};
use crate::error::MetaError;
use crate::ingest::{ingest_text, AttachmentSource};
use crate::services::paste::PasteService;

/// Ingest text and attachments, then upload the result. Returns the paste link.
pub async fn paste_text<A: AttachmentSource>(
    paste: &dyn PasteService,
    inline_text: Option<&str>,
    attachments: &[A],
) -> Result<String, MetaError> {
    let combined = ingest_text(inline_text, attachments).await?;
    if combined.trim().is_empty() {
        return Err(MetaError::NothingToPaste);
    }
    paste.upload(&combined).await
}

async fn run_paste(ctx: &Context, msg: &Message, args: Args, paste: &dyn PasteService, colour: u32) -> CommandResult {
    let _typing = ctx.http.start_typing(msg.channel_id.0)?;
    let text = args.message().trim();

    let url = match paste_text(paste, Some(text), &msg.attachments).await {
        Ok(url) => url,
        Err(e) => return reply_error(ctx, msg, &e).await,
    };

    info!("[PASTE] {} pasted to {} via {}", msg.author.name, url, paste.name());
    msg.channel_id
        .send_message(&ctx.http, |m| {
            m.embed(|e| {
                e.title("Paste Successful!")
                    .description(format!("[Click here to view]({})", url))
                    .colour(colour)
                    .timestamp(msg.timestamp)
            })
        })
        .await?;
    Ok(())
}

#[command]
#[description = "Paste text or a text file to https://mystb.in."]
#[usage = "[text]"]
pub async fn mystbin(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let services = meta_services(ctx).await?;
    run_paste(ctx, msg, args, services.mystbin.as_ref(), services.embed_colour).await
}

#[command]
#[description = "Paste text or a text file to https://hastebin.com."]
#[usage = "[text]"]
pub async fn hastebin(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let services = meta_services(ctx).await?;
    run_paste(ctx, msg, args, services.hastebin.as_ref(), services.embed_colour).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::tests::FakeAttachment;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingPaste {
        uploads: Mutex<Vec<String>>,
        fail_with: Option<u16>,
    }

    #[async_trait]
    impl PasteService for RecordingPaste {
        fn name(&self) -> &str {
            "recording"
        }

        async fn upload(&self, text: &str) -> Result<String, MetaError> {
            if let Some(status) = self.fail_with {
                return Err(MetaError::ServiceUnavailable { service: "recording".into(), status });
            }
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push(text.to_string());
            Ok(format!("https://paste.example/{}", uploads.len()))
        }
    }

    #[tokio::test]
    async fn test_paste_uploads_combined_text() {
        let paste = RecordingPaste::default();
        let reads = Arc::new(AtomicUsize::new(0));
        let attachments = vec![FakeAttachment::text("notes.txt", "file body", &reads)];

        let url = paste_text(&paste, Some("look"), &attachments).await.unwrap();
        assert_eq!(url, "https://paste.example/1");
        assert_eq!(
            paste.uploads.lock().unwrap().as_slice(),
            ["look\n\nATTACHMENTS\n\nfile body".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejected_attachment_uploads_nothing() {
        let paste = RecordingPaste::default();
        let reads = Arc::new(AtomicUsize::new(0));
        let attachments = vec![FakeAttachment::image("cat.png", vec![1, 2, 3], &reads)];

        let err = paste_text(&paste, Some("look"), &attachments).await.unwrap_err();
        assert_eq!(err.user_message(), "Only text files can be used.");
        assert!(paste.uploads.lock().unwrap().is_empty());
        assert_eq!(reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_paste_is_refused() {
        let paste = RecordingPaste::default();
        let none: Vec<FakeAttachment> = Vec::new();
        let err = paste_text(&paste, Some("   "), &none).await.unwrap_err();
        assert!(matches!(err, MetaError::NothingToPaste));
        assert!(paste.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paste_host_failure_is_reported() {
        let paste = RecordingPaste { fail_with: Some(503), ..Default::default() };
        let none: Vec<FakeAttachment> = Vec::new();
        let err = paste_text(&paste, Some("text"), &none).await.unwrap_err();
        assert!(matches!(err, MetaError::ServiceUnavailable { status: 503, .. }));
        assert!(err.is_user_facing());
    }
}
