// define.rs - Dictionary Command
// Looks up a word on https://dictionaryapi.dev/ and pages through its meanings,
// one part of speech per page.
//
// Supports:
//   - ^define <word>

use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use super::{meta_services, reply_error, truncate_chars, MAX_FIELD_CHARS};
use crate::error::MetaError;
use crate::pagination::{paginate, run_menu, EmbedPage, Page};
use crate::services::dictionary::{DictionaryEntry, Meaning};

fn format_meaning(meaning: &Meaning) -> String {
    let defs: Vec<String> = meaning
        .definitions
        .iter()
        .map(|d| {
            format!(
                "**Definition:** {}\n**Example:** {}",
                d.definition,
                d.example.as_deref().unwrap_or("None")
            )
        })
        .collect();
    truncate_chars(&defs.join("\n\n"), MAX_FIELD_CHARS)
}

fn phonetic_line(entry: &DictionaryEntry) -> String {
    let Some(phonetic) = entry.phonetics.first() else {
        return String::new();
    };
    let text = phonetic.text.as_deref().unwrap_or_default();
    match phonetic.audio.as_deref().filter(|a| !a.is_empty()) {
        Some(audio) => format!("{}\n[audio]({})", text, audio),
        None => text.to_string(),
    }
}

/// One embed page per meaning of the entry
pub fn define_pages(entry: &DictionaryEntry, colour: u32) -> Result<Vec<Page>, MetaError> {
    let description = phonetic_line(entry);
    paginate(&entry.meanings, 1, |group, info| {
        Page::Embed(EmbedPage {
            title: format!("Definitions for word `{}`", entry.word),
            description: description.clone(),
            fields: group
                .iter()
                .map(|m| (m.part_of_speech.clone(), format_meaning(m)))
                .collect(),
            colour,
            footer: Some(info.label()),
        })
    })
}

#[command]
#[description = "Search up the definition of a word. Source: https://dictionaryapi.dev/"]
#[usage = "<word>"]
pub async fn define(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let word = args.message().trim();
    if word.is_empty() {
        msg.channel_id.say(&ctx.http, "Please provide a word to define!").await?;
        return Ok(());
    }

    let services = meta_services(ctx).await?;
    let entry = {
        let _typing = ctx.http.start_typing(msg.channel_id.0)?;
        services.dictionary.fetch(word).await
    };

    let pages = match entry.and_then(|entry| define_pages(&entry, services.embed_colour)) {
        Ok(pages) => pages,
        Err(e) => return reply_error(ctx, msg, &e).await,
    };

    run_menu(ctx, msg, pages, &services.menu).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dictionary::{Definition, Phonetic};

    fn entry() -> DictionaryEntry {
        DictionaryEntry {
            word: "run".into(),
            phonetics: vec![Phonetic {
                text: Some("/rʌn/".into()),
                audio: Some("https://example.com/run.mp3".into()),
            }],
            meanings: vec![
                Meaning {
                    part_of_speech: "verb".into(),
                    definitions: vec![
                        Definition {
                            definition: "move at speed".into(),
                            example: Some("he ran off".into()),
                        },
                        Definition {
                            definition: "be in charge of".into(),
                            example: None,
                        },
                    ],
                },
                Meaning {
                    part_of_speech: "noun".into(),
                    definitions: vec![Definition {
                        definition: "an act of running".into(),
                        example: None,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_one_page_per_meaning() {
        let pages = define_pages(&entry(), 0x123456).unwrap();
        assert_eq!(pages.len(), 2);

        let Page::Embed(first) = &pages[0] else {
            panic!("define pages are embeds");
        };
        assert_eq!(first.title, "Definitions for word `run`");
        assert_eq!(first.description, "/rʌn/\n[audio](https://example.com/run.mp3)");
        assert_eq!(first.colour, 0x123456);
        assert_eq!(first.footer.as_deref(), Some("Page 1/2"));
        assert_eq!(first.fields.len(), 1);
        assert_eq!(first.fields[0].0, "verb");
        assert_eq!(
            first.fields[0].1,
            "**Definition:** move at speed\n**Example:** he ran off\n\n\
             **Definition:** be in charge of\n**Example:** None"
        );
    }

    #[test]
    fn test_entry_without_phonetics() {
        let mut entry = entry();
        entry.phonetics.clear();
        let pages = define_pages(&entry, 0).unwrap();
        let Page::Embed(first) = &pages[0] else {
            panic!("define pages are embeds");
        };
        assert!(first.description.is_empty());
    }

    #[test]
    fn test_long_meanings_fit_in_a_field() {
        let mut entry = entry();
        entry.meanings[0].definitions = (0..200)
            .map(|i| Definition {
                definition: format!("definition number {}", i),
                example: None,
            })
            .collect();
        let pages = define_pages(&entry, 0).unwrap();
        let Page::Embed(first) = &pages[0] else {
            panic!("define pages are embeds");
        };
        assert!(first.fields[0].1.chars().count() <= MAX_FIELD_CHARS);
    }
}
