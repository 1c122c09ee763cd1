// ocr.rs - OCR Command
// Reads the text in the first attached image. Extra attachments are ignored.
// NOTE: tesseract can be *very* inaccurate.
//
// Supports:
//   - ^ocr   (with an image attached)

use log::info;
use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use super::{meta_services, reply_error, truncate_chars, MAX_MESSAGE_CHARS};
use crate::error::MetaError;
use crate::ingest::{first_attachment, AttachmentSource};
use crate::services::ocr::ImageTextRecognizer;
use crate::services::owo::escape_mentions;

/// Download the first attachment and run it through the recognizer
pub async fn recognize_attachment<A: AttachmentSource>(
    recognizer: &dyn ImageTextRecognizer,
    attachments: &[A],
) -> Result<String, MetaError> {
    let attachment = first_attachment(attachments)?;
    let bytes = attachment.read().await?;
    info!("[OCR] Recognising '{}' ({} bytes)", attachment.filename(), bytes.len());
    recognizer.recognize(bytes).await
}

/// Reply text, with mentions in the recognised text escaped and the result cut to fit
/// in one message
pub fn format_ocr_reply(author: &str, text: &str) -> String {
    let header = format!("Text to image result for **{}**```", author);
    let budget = MAX_MESSAGE_CHARS - header.chars().count() - 3;
    format!("{}{}```", header, truncate_chars(&escape_mentions(text), budget))
}

#[command]
#[description = "Read the contents of an attachment using tesseract. This can be *very* inaccurate at times."]
pub async fn ocr(ctx: &Context, msg: &Message, _args: Args) -> CommandResult {
    let services = meta_services(ctx).await?;
    let _typing = ctx.http.start_typing(msg.channel_id.0)?;

    match recognize_attachment(services.recognizer.as_ref(), &msg.attachments).await {
        Ok(text) => {
            msg.channel_id
                .say(&ctx.http, format_ocr_reply(&msg.author.tag(), &text))
                .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, msg, &e).await,
    }
}
