// owoify.rs - Owoify Command
// Owo-style text mangling. Mentions in the output are escaped and the reply is cut to
// fit in one message, since owoifying can more than double the length.
//
// Supports:
//   - ^owoify <text>

use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use super::{truncate_chars, MAX_MESSAGE_CHARS};
use crate::services::owo::{escape_mentions, owoify as owoify_text};

/// Owoified, mention-safe reply text no longer than one message
pub fn owoify_reply(text: &str) -> String {
    truncate_chars(&escape_mentions(&owoify_text(text)), MAX_MESSAGE_CHARS)
}

#[command]
#[description = "Owoifies text. Mentions are escaped."]
#[usage = "<text>"]
pub async fn owoify(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = args.message().trim();
    if text.is_empty() {
        msg.channel_id.say(&ctx.http, "Please provide text to owoify!").await?;
        return Ok(());
    }

    msg.channel_id.say(&ctx.http, owoify_reply(text)).await?;
    Ok(())
}
