// services/mod.rs - External Collaborators
// Every outside dependency a meta command talks to sits behind a narrow trait here.
// main.rs builds one MetaServices and stores it in the client's TypeMap; command
// handlers pull it out and pass the pieces they need down to the handler cores.

pub mod ascii;
pub mod dictionary;
pub mod ocr;
pub mod owo;
pub mod paste;
pub mod xkcd;

use std::sync::Arc;

use serenity::prelude::TypeMapKey;

use crate::config::BotConfig;
use crate::error::MetaError;
use crate::pagination::MenuOptions;

use ascii::{FigletRenderer, TextArtRenderer};
use dictionary::{DictionaryClient, DictionaryLookup};
use ocr::{ImageTextRecognizer, TesseractRecognizer};
use paste::{HasteClient, PasteService};
use xkcd::{ComicLookup, XkcdClient};

pub struct MetaServices {
    pub mystbin: Arc<dyn PasteService>,
    pub hastebin: Arc<dyn PasteService>,
    pub comics: Arc<dyn ComicLookup>,
    pub dictionary: Arc<dyn DictionaryLookup>,
    pub recognizer: Arc<dyn ImageTextRecognizer>,
    pub text_art: Arc<dyn TextArtRenderer>,
    pub embed_colour: u32,
    pub prefix: String,
    pub menu: MenuOptions,
}

impl TypeMapKey for MetaServices {
    type Value = Arc<MetaServices>;
}

impl MetaServices {
    /// Build the production collaborators. One HTTP client is shared by all of them.
    pub fn from_config(config: &BotConfig) -> Result<Self, MetaError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            mystbin: Arc::new(HasteClient::new(http.clone(), "mystbin", &config.mystbin_url)),
            hastebin: Arc::new(HasteClient::new(http.clone(), "hastebin", &config.hastebin_url)),
            comics: Arc::new(XkcdClient::new(http.clone(), &config.xkcd_url)),
            dictionary: Arc::new(DictionaryClient::new(http, &config.dictionary_url)),
            recognizer: Arc::new(TesseractRecognizer::new(&config.tesseract_path)),
            text_art: Arc::new(FigletRenderer::standard()?),
            embed_colour: config.embed_colour,
            prefix: config.prefix.clone(),
            menu: MenuOptions {
                idle_timeout: config.menu_timeout,
                allow_any_user: config.menu_any_user,
                delete_message_after: false,
            },
        })
    }
}
