// xkcd.rs - Comic Lookup
// Fetches a specific or random comic from the xkcd JSON API.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;
use rand::Rng;
use serde::Deserialize;

use crate::error::{classify_status, MetaError};

const SERVICE: &str = "xkcd";

#[derive(Debug, Clone, PartialEq)]
pub struct Comic {
    pub number: u32,
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub published: DateTime<Utc>,
}

#[async_trait]
pub trait ComicLookup: Send + Sync {
    /// `None` picks a random comic
    async fn fetch(&self, number: Option<u32>) -> Result<Comic, MetaError>;
}

/// Raw `info.0.json` payload. Dates come as strings.
#[derive(Debug, Deserialize)]
struct ComicInfo {
    num: u32,
    safe_title: String,
    alt: String,
    img: String,
    year: String,
    month: String,
    day: String,
}

impl TryFrom<ComicInfo> for Comic {
    type Error = MetaError;

    fn try_from(info: ComicInfo) -> Result<Self, Self::Error> {
        let malformed = |reason: String| MetaError::MalformedResponse {
            service: SERVICE.to_string(),
            reason,
        };

        let year = info.year.parse::<i32>().map_err(|e| malformed(format!("year: {}", e)))?;
        let month = info.month.parse::<u32>().map_err(|e| malformed(format!("month: {}", e)))?;
        let day = info.day.parse::<u32>().map_err(|e| malformed(format!("day: {}", e)))?;
        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| malformed(format!("invalid date {}-{}-{}", year, month, day)))?;

        Ok(Comic {
            number: info.num,
            title: info.safe_title,
            alt_text: info.alt,
            image_url: info.img,
            published: Utc.from_utc_datetime(&midnight),
        })
    }
}

/// Uniform pick in `1..=latest`
fn random_comic_number(latest: u32) -> u32 {
    rand::thread_rng().gen_range(1..=latest.max(1))
}

pub struct XkcdClient {
    http: reqwest::Client,
    base_url: String,
}

impl XkcdClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_info(&self, url: &str) -> Result<ComicInfo, MetaError> {
        let response = self.http.get(url).send().await?;
        if let Some(err) = classify_status(response.status()) {
            debug!("[XKCD] {} answered HTTP {}", url, response.status());
            return Err(err);
        }
        response.json::<ComicInfo>().await.map_err(|e| MetaError::MalformedResponse {
            service: SERVICE.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ComicLookup for XkcdClient {
    async fn fetch(&self, number: Option<u32>) -> Result<Comic, MetaError> {
        let number = match number {
            Some(n) if n > 0 => n,
            _ => {
                let latest = self.get_info(&format!("{}/info.0.json", self.base_url)).await?.num;
                random_comic_number(latest)
            }
        };

        debug!("[XKCD] Fetching comic {}", number);
        let info = self
            .get_info(&format!("{}/{}/info.0.json", self.base_url, number))
            .await?;
        Comic::try_from(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "month": "3", "num": 353, "link": "", "year": "2007", "news": "",
        "safe_title": "Python", "transcript": "",
        "alt": "I wrote 20 short programs in Python yesterday.",
        "img": "https://imgs.xkcd.com/comics/python.png", "title": "Python", "day": "5"
    }"#;

    #[test]
    fn test_comic_from_api_payload() {
        let info: ComicInfo = serde_json::from_str(SAMPLE).unwrap();
        let comic = Comic::try_from(info).unwrap();
        assert_eq!(comic.number, 353);
        assert_eq!(comic.title, "Python");
        assert_eq!(comic.image_url, "https://imgs.xkcd.com/comics/python.png");
        assert_eq!(comic.published.to_rfc3339(), "2007-03-05T00:00:00+00:00");
    }

    #[test]
    fn test_random_comic_number_in_range() {
        for _ in 0..100 {
            let n = random_comic_number(5);
            assert!((1..=5).contains(&n));
        }
        assert_eq!(random_comic_number(0), 1);
    }

    #[test]
    fn test_comic_with_bad_date_is_malformed() {
        let info = ComicInfo {
            num: 1,
            safe_title: "t".into(),
            alt: "a".into(),
            img: "i".into(),
            year: "2007".into(),
            month: "13".into(),
            day: "1".into(),
        };
        assert!(matches!(Comic::try_from(info), Err(MetaError::MalformedResponse { .. })));
    }
}
