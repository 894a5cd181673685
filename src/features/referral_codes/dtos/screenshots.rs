use serde::Deserialize;

/// Screenshot URLs as clients send them. Older dashboards posted a
/// newline-separated string, `{ "url": ... }` objects or JSON-encoded
/// strings; all of them normalize to a plain ordered list of URLs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScreenshotsInput {
    Text(String),
    List(Vec<ScreenshotEntry>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScreenshotEntry {
    Url(String),
    Object { url: String },
}

impl Default for ScreenshotsInput {
    fn default() -> Self {
        ScreenshotsInput::List(Vec::new())
    }
}

impl ScreenshotsInput {
    /// Flatten into trimmed, non-empty URLs, keeping order and dropping repeats
    pub fn normalize(self) -> Vec<String> {
        let mut urls = Vec::new();
        match self {
            ScreenshotsInput::Text(text) => collect_text(&text, &mut urls),
            ScreenshotsInput::List(entries) => {
                for entry in entries {
                    match entry {
                        ScreenshotEntry::Url(text) => collect_text(&text, &mut urls),
                        ScreenshotEntry::Object { url } => push_url(url.trim(), &mut urls),
                    }
                }
            }
        }
        urls
    }
}

fn collect_text(text: &str, urls: &mut Vec<String>) {
    let trimmed = text.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('"') {
        if let Ok(nested) = serde_json::from_str::<ScreenshotsInput>(trimmed) {
            for url in nested.normalize() {
                push_url(&url, urls);
            }
            return;
        }
    }
    for line in trimmed.lines() {
        push_url(line.trim(), urls);
    }
}

fn push_url(url: &str, urls: &mut Vec<String>) {
    if !url.is_empty() && !urls.iter().any(|u| u == url) {
        urls.push(url.to_string());
    }
}
