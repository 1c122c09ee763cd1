// commands/mod.rs - Meta Command Registry
// Declares the meta command modules and the META group the framework dispatches to,
// plus the small helpers every handler shares.

pub mod ascii;        // Figlet text art, paginated
pub mod define;       // Dictionary definitions, paginated
pub mod help;         // Command list
pub mod ocr;          // Text recognition on an image attachment
pub mod owoify;       // Owo text mangling
pub mod paste;        // mystbin / hastebin uploads
pub mod xkcd;         // xkcd comics

use std::sync::Arc;

use log::error;
use serenity::{
    client::Context,
    framework::standard::{macros::group, CommandError, CommandResult},
    model::channel::Message,
};

use crate::error::MetaError;
use crate::services::MetaServices;

use ascii::ASCII_COMMAND;
use define::DEFINE_COMMAND;
use help::HELP_COMMAND;
use ocr::OCR_COMMAND;
use owoify::OWOIFY_COMMAND;
use paste::{HASTEBIN_COMMAND, MYSTBIN_COMMAND};
use xkcd::XKCD_COMMAND;

/// Commands that don't belong to any specific category
#[group]
#[commands(mystbin, hastebin, xkcd, ocr, ascii, define, owoify, help)]
pub struct Meta;

/// Discord's message content limit
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Discord's embed field value limit
pub const MAX_FIELD_CHARS: usize = 1024;

/// Fetch the shared collaborators main.rs stored in the TypeMap
pub async fn meta_services(ctx: &Context) -> Result<Arc<MetaServices>, CommandError> {
    let data = ctx.data.read().await;
    data.get::<MetaServices>()
        .cloned()
        .ok_or_else(|| "meta services were not registered in the client data".into())
}

/// Send the plain-text explanation for a failed command. Internal failures are
/// logged and replaced with a generic message.
pub async fn reply_error(ctx: &Context, msg: &Message, err: &MetaError) -> CommandResult {
    if !err.is_user_facing() {
        error!("[META] Command from {} failed: {}", msg.author.name, err);
    }
    msg.channel_id.say(&ctx.http, err.user_message()).await?;
    Ok(())
}

/// Cut `text` down to at most `max` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
