// ascii.rs - ASCII Art Command
// Renders text with figlet, 25 characters per page. Might look messed up on mobile.
//
// Supports:
//   - ^ascii <text>

use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use super::{meta_services, reply_error};
use crate::error::MetaError;
use crate::pagination::{paginate, run_menu, Page};
use crate::services::ascii::{split_on_num, TextArtRenderer, ASCII_CHUNK_CHARS};

/// One code-block page per 25-character chunk of `text`
pub fn ascii_pages(renderer: &dyn TextArtRenderer, text: &str) -> Result<Vec<Page>, MetaError> {
    let chunks = split_on_num(text, ASCII_CHUNK_CHARS);
    paginate(&chunks, 1, |group, info| {
        let art: Vec<String> = group.iter().map(|chunk| renderer.render(chunk)).collect();
        Page::Text(format!("```\n{}\n```\n{}", art.join("\n"), info.label()))
    })
}

#[command]
#[description = "Convert text to ascii characters. Might look messed up on mobile."]
#[usage = "<text>"]
pub async fn ascii(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = args.message().trim();
    if text.is_empty() {
        msg.channel_id.say(&ctx.http, "Please provide some text to convert!").await?;
        return Ok(());
    }

    let services = meta_services(ctx).await?;
    let pages = match ascii_pages(services.text_art.as_ref(), text) {
        Ok(pages) => pages,
        Err(e) => return reply_error(ctx, msg, &e).await,
    };

    let options = services.menu.clone().delete_message_after();
    run_menu(ctx, msg, pages, &options).await?;
    Ok(())
}
