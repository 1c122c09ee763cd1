// owo.rs - Text Mangling and Mention Escaping

use once_cell::sync::Lazy;
use regex::Regex;

static N_VOWEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"([nN])([aeiouAEIOU])").expect("Invalid n-vowel regex pattern"));
static OVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ove").expect("Invalid ove regex pattern"));
static EXCLAMATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"!+").expect("Invalid exclamation regex pattern"));
static MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(everyone|here|[!&]?[0-9]{17,20})").expect("Invalid mention regex pattern")
});

const FACES: [&str; 4] = ["owo", "UwU", ">w<", "^w^"];

/// Owoify text: r/l become w, n before a vowel gains a y, "ove" becomes "uv" and
/// runs of exclamation marks turn into faces (cycled, so output is deterministic).
pub fn owoify(text: &str) -> String {
    let text = OVE.replace_all(text, "uv");
    let text: String = text
        .chars()
        .map(|c| match c {
            'r' | 'l' => 'w',
            'R' | 'L' => 'W',
            other => other,
        })
        .collect();
    let text = N_VOWEL.replace_all(&text, |caps: &regex::Captures| {
        let y = if caps[2].chars().all(char::is_uppercase) { "Y" } else { "y" };
        format!("{}{}{}", &caps[1], y, &caps[2])
    });

    let mut face = 0;
    EXCLAMATION
        .replace_all(&text, |_: &regex::Captures| {
            let replacement = format!(" {}", FACES[face % FACES.len()]);
            face += 1;
            replacement
        })
        .into_owned()
}

/// Break @everyone, @here and user/role mentions with a zero-width space so the
/// reply cannot ping anyone.
pub fn escape_mentions(text: &str) -> String {
    MENTION.replace_all(text, "@\u{200b}${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owoify_basic() {
        assert_eq!(owoify("hello"), "hewwo");
        assert_eq!(owoify("I love rain"), "I wuv wain");
        assert_eq!(owoify("nope"), "nyope");
        assert_eq!(owoify("NO"), "NYO");
    }

    #[test]
    fn test_owoify_faces_cycle() {
        assert_eq!(owoify("hi! yes!!"), "hi owo yes UwU");
    }

    #[test]
    fn test_escape_mentions() {
        let escaped = escape_mentions("@everyone hi <@123456789012345678> and <@&123456789012345678> @here");
        assert_eq!(
            escaped,
            "@\u{200b}everyone hi <@\u{200b}123456789012345678> and <@\u{200b}&123456789012345678> @\u{200b}here"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_mentions("mail me @ home"), "mail me @ home");
    }

    #[test]
    fn test_owoified_mentions_are_escaped() {
        let out = escape_mentions(&owoify("hey <@123456789012345678>!"));
        assert_eq!(out, "hey <@\u{200b}123456789012345678> owo");
    }
}
