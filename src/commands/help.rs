// help.rs - Help Command Module
// Lists the meta commands with the configured prefix

use serenity::{
    client::Context,
    framework::standard::{macros::command, CommandResult},
    model::channel::Message,
};

use super::meta_services;

pub fn help_text(prefix: &str) -> String {
    format!(
        "**📋 Meta Commands**\n\
        Commands that don't belong to any specific category.\n\n\
        **📝 Paste:**\n\
        • `{0}mystbin [text]` - Paste text or text files to mystb.in\n\
        • `{0}hastebin [text]` - Paste text or text files to hastebin.com\n\
        • Attach `.txt`-style files (max 500kb each), images are refused\n\n\
        **🖼️ Images & Comics:**\n\
        • `{0}ocr` - Read the text in an attached image (can be *very* inaccurate)\n\
        • `{0}xkcd [number]` - A specific or random xkcd comic\n\n\
        **🔤 Text:**\n\
        • `{0}ascii <text>` - Big ascii letters, 25 characters per page\n\
        • `{0}define <word>` - Dictionary definitions, one part of speech per page\n\
        • `{0}owoify <text>` - Owoify text, mentions are escaped\n\n\
        **Menus:** use ⏮ ◀ ▶ ⏭ to flip pages and ⏹ to close.",
        prefix
    )
}

#[command]
#[aliases("h", "commands")]
/// Display help information for the meta commands
pub async fn help(ctx: &Context, msg: &Message) -> CommandResult {
    let services = meta_services(ctx).await?;
    msg.reply(ctx, help_text(&services.prefix)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_uses_prefix() {
        let text = help_text("!");
        for command in ["!mystbin", "!hastebin", "!ocr", "!xkcd", "!ascii", "!define", "!owoify"] {
            assert!(text.contains(command), "help is missing {}", command);
        }
        assert!(!text.contains('^'));
    }
}
