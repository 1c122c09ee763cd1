// ascii.rs - Text Art Rendering

use figlet_rs::FIGfont;
use log::debug;

use crate::error::MetaError;

/// Characters of input rendered per page
pub const ASCII_CHUNK_CHARS: usize = 25;

pub trait TextArtRenderer: Send + Sync {
    fn render(&self, chunk: &str) -> String;
}

/// Figlet renderer using the bundled "standard" font
pub struct FigletRenderer {
    font: FIGfont,
}

impl FigletRenderer {
    pub fn standard() -> Result<Self, MetaError> {
        let font = FIGfont::standard().map_err(MetaError::TextArt)?;
        Ok(Self { font })
    }
}

impl TextArtRenderer for FigletRenderer {
    fn render(&self, chunk: &str) -> String {
        match self.font.convert(chunk) {
            Some(figure) => figure.to_string(),
            None => {
                // characters the font has no glyph for
                debug!("[ASCII] Font could not render {:?}, sending it as is", chunk);
                chunk.to_string()
            }
        }
    }
}

/// Split text into consecutive chunks of at most `size` characters
pub fn split_on_num(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size.max(1)).map(|chunk| chunk.iter().collect()).collect()
}
