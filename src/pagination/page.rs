// page.rs - Pages and Page Grouping

use crate::error::MetaError;

/// Position of a page within its source, handed to formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based index
    pub index: usize,
    pub count: usize,
}

impl PageInfo {
    /// "Page 2/5" style label, 1-indexed
    pub fn label(&self) -> String {
        format!("Page {}/{}", self.index + 1, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedPage {
    pub title: String,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub colour: u32,
    pub footer: Option<String>,
}

/// One unit of pre-rendered content shown at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Text(String),
    Embed(EmbedPage),
}

/// Group `entries` into pages of `per_page` and format each group.
///
/// The last page may hold fewer entries. An empty entry list or a zero page size
/// cannot start a session and is rejected here.
pub fn paginate<T, F>(entries: &[T], per_page: usize, mut format: F) -> Result<Vec<Page>, MetaError>
where
    F: FnMut(&[T], PageInfo) -> Page,
{
    if per_page == 0 {
        return Err(MetaError::InvalidPageSize(per_page));
    }
    if entries.is_empty() {
        return Err(MetaError::EmptyPages);
    }

    let count = (entries.len() + per_page - 1) / per_page;
    let pages = entries
        .chunks(per_page)
        .enumerate()
        .map(|(index, group)| format(group, PageInfo { index, count }))
        .collect();
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(group: &[&str], info: PageInfo) -> Page {
        Page::Text(format!("{} {}", group.join(","), info.label()))
    }

    #[test]
    fn test_paginate_groups_with_short_last_page() {
        let entries = ["a", "b", "c", "d", "e"];
        let pages = paginate(&entries, 2, join).unwrap();
        assert_eq!(
            pages,
            vec![
                Page::Text("a,b Page 1/3".into()),
                Page::Text("c,d Page 2/3".into()),
                Page::Text("e Page 3/3".into()),
            ]
        );
    }

    #[test]
    fn test_paginate_one_per_page() {
        let entries = ["x", "y"];
        let pages = paginate(&entries, 1, join).unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_paginate_rejects_empty_and_zero() {
        let empty: [&str; 0] = [];
        assert!(matches!(paginate(&empty, 1, join), Err(MetaError::EmptyPages)));
        assert!(matches!(paginate(&["a"], 0, join), Err(MetaError::InvalidPageSize(0))));
    }
}
