// xkcd.rs - xkcd Command
// Supports:
//   - ^xkcd            (random comic)
//   - ^xkcd <number>

use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use super::{meta_services, reply_error};
use crate::services::xkcd::Comic;

pub fn comic_title(comic: &Comic) -> String {
    format!("{} (Comic Number `{}`)", comic.title, comic.number)
}

#[command]
#[description = "Get a specific or random comic from https://xkcd.com."]
#[usage = "[comic_number]"]
pub async fn xkcd(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let number = if args.is_empty() {
        None
    } else {
        match args.single::<u32>() {
            Ok(number) => Some(number),
            Err(_) => {
                msg.channel_id.say(&ctx.http, "Please provide a valid comic number.").await?;
                return Ok(());
            }
        }
    };

    let services = meta_services(ctx).await?;
    let _typing = ctx.http.start_typing(msg.channel_id.0)?;

    let comic = match services.comics.fetch(number).await {
        Ok(comic) => comic,
        Err(e) => return reply_error(ctx, msg, &e).await,
    };

    msg.channel_id
        .send_message(&ctx.http, |m| {
            m.embed(|e| {
                e.title(comic_title(&comic))
                    .description(&comic.alt_text)
                    .image(&comic.image_url)
                    .timestamp(comic.published)
                    .colour(services.embed_colour)
                    .footer(|f| f.text("Created:"))
            })
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_comic_title() {
        let comic = Comic {
            number: 1,
            title: "Barrel - Part 1".into(),
            alt_text: String::new(),
            image_url: String::new(),
            published: Utc.with_ymd_and_hms(2006, 1, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(comic_title(&comic), "Barrel - Part 1 (Comic Number `1`)");
    }
}
