//! Composing chapters from pasted text.
//!
//! Raw content is split into topics at markdown `## ` headers (or blank
//! lines when no headers exist), and each topic is seeded with starter
//! hotspots placed on a grid, one per extracted keyword.

use crate::overlay::{Hotspot, HotspotIcon, PaletteColor};
use crate::topic::{Chapter, Topic};

const MAX_KEYWORDS: usize = 10;
const MAX_SEEDED_HOTSPOTS: usize = 6;
/// Seeds rotate through the first entries of [`HotspotIcon::all`] only;
/// legacy documents were written against this ten-icon list.
const SEED_ICON_COUNT: usize = 10;

/// Phrases excluded from keyword extraction.
const COMMON_WORDS: &[&str] = &[
    "The", "This", "That", "These", "Those", "When", "Where", "What", "How", "Why",
];

/// Color rotation for seeded hotspots. Names outside the palette fall
/// back to the default, which keeps legacy rotations loadable.
const SEED_COLORS: &[&str] = &["primary", "secondary", "accent", "warning", "success"];

/// Build a chapter from a pasted block of educational text.
pub fn compose_chapter(
    title: impl Into<String>,
    subject: impl Into<String>,
    description: Option<String>,
    content: &str,
) -> Chapter {
    let mut chapter = Chapter::new(title, subject);
    chapter.description = description;
    chapter.topics = parse_topics(content);
    chapter
}

/// Split raw content into seeded topics.
///
/// Content with no usable sections yields a single introduction topic
/// so the editor always has a page to open.
pub fn parse_topics(content: &str) -> Vec<Topic> {
    let sections: Vec<&str> = if content.contains("\n## ") {
        content.split("\n## ").collect()
    } else {
        content.split("\n\n").collect()
    };

    let mut topics = Vec::new();
    for (idx, section) in sections.iter().enumerate() {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }
        let mut lines = section.lines();
        let first = lines.next().unwrap_or_default();
        let heading: String = first.chars().filter(|c| *c != '#').collect();
        let heading = heading.trim();
        let title = if heading.is_empty() {
            format!("Topic {}", idx + 1)
        } else {
            heading.to_string()
        };
        let body = lines.collect::<Vec<_>>().join("\n");
        let body = body.trim();
        let content_text = if body.is_empty() { section } else { body };

        let mut topic = Topic::new(title, content_text);
        topic.subtitle = Some("Interactive Learning Content".to_string());
        topic.hotspots = seed_hotspots(content_text);
        topics.push(topic);
    }

    if topics.is_empty() {
        let mut intro = Topic::new("Introduction", content);
        intro.subtitle = Some("Getting Started".to_string());
        topics.push(intro);
    }
    topics
}

/// Place starter hotspots on a 3-column grid, one per keyword.
fn seed_hotspots(content_text: &str) -> Vec<Hotspot> {
    let icons = HotspotIcon::all();
    extract_keywords(content_text)
        .into_iter()
        .take(MAX_SEEDED_HOTSPOTS)
        .enumerate()
        .map(|(i, keyword)| {
            let mut h = Hotspot::new(
                kurbo::Point::new(
                    15.0 + (i % 3) as f64 * 30.0,
                    20.0 + (i / 3) as f64 * 35.0,
                ),
                keyword.clone(),
                keyword.clone(),
            );
            h.icon = icons[keyword.chars().count() % SEED_ICON_COUNT];
            h.color = PaletteColor::parse(SEED_COLORS[i % SEED_COLORS.len()]);
            h.description = format!(
                "Learn more about {} and its role in this topic.",
                keyword.to_lowercase()
            );
            h
        })
        .collect()
}

/// Extract capitalized phrases as candidate key terms.
///
/// A phrase is one or more whitespace-separated words, each an
/// uppercase ASCII letter followed by lowercase letters, taken at word
/// boundaries. Order of first appearance is kept, duplicates dropped.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut keywords: Vec<String> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let at_boundary = i == 0 || !chars[i - 1].is_alphanumeric();
        if at_boundary {
            if let Some(end) = match_phrase(&chars, i) {
                let phrase: String = chars[i..end].iter().collect();
                if !COMMON_WORDS.contains(&phrase.as_str()) && !keywords.contains(&phrase) {
                    keywords.push(phrase);
                }
                i = end;
                continue;
            }
        }
        i += 1;
    }
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Match a capitalized phrase starting at `start`, returning its end.
fn match_phrase(chars: &[char], start: usize) -> Option<usize> {
    let mut end = match_word(chars, start)?;
    loop {
        let mut j = end;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j == end {
            break;
        }
        match match_word(chars, j) {
            Some(next) => end = next,
            None => break,
        }
    }
    Some(end)
}

/// Match one `[A-Z][a-z]+` word ending at a word boundary.
fn match_word(chars: &[char], start: usize) -> Option<usize> {
    if start >= chars.len() || !chars[start].is_ascii_uppercase() {
        return None;
    }
    let mut j = start + 1;
    while j < chars.len() && chars[j].is_ascii_lowercase() {
        j += 1;
    }
    if j == start + 1 {
        return None;
    }
    if j < chars.len() && chars[j].is_alphanumeric() {
        return None;
    }
    Some(j)
}
