use anyhow::Result;
use libkeyset_emoji::Emoji;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmojiReport {
    pub emoji: Emoji,
    pub identifier: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl EmojiReport {
    pub fn new(emoji: Emoji) -> Self {
        let (identifier, name) = emoji.resolve();
        let region = emoji.region_code();
        Self {
            emoji,
            identifier,
            name,
            region,
        }
    }
}

/// Resolve every emoji found in `texts`.
pub fn reports(texts: &[String]) -> Vec<EmojiReport> {
    texts
        .iter()
        .flat_map(|t| Emoji::all_in(t))
        .map(EmojiReport::new)
        .collect()
}

pub fn run(texts: &[String], json: bool) -> Result<()> {
    let reports = reports(texts);
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for r in &reports {
        println!("{}\t{}\t{}", r.emoji, r.name, r.identifier);
    }
    Ok(())
}
