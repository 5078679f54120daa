//! Storyline prompt construction.

use tracing::info;
use wikicomic_core::{Article, ChatRequest, ComicOptions, Message};

/// Character ceiling applied to article content before prompting.
pub const MAX_ARTICLE_CHARS: usize = 15_000;

/// Sampling temperature for both chat calls.
pub(crate) const CHAT_TEMPERATURE: f32 = 0.7;
/// Token cap for both chat calls.
pub(crate) const CHAT_MAX_TOKENS: u32 = 4000;
/// Nucleus sampling cutoff for both chat calls.
pub(crate) const CHAT_TOP_P: f32 = 0.9;

const STORYLINE_SYSTEM_PROMPT: &str = "You are an expert comic book writer and historian who creates engaging, accurate, and visually compelling storylines based on real information.";

/// Truncate article content to at most `max_chars` characters, marking
/// the cut with an ellipsis.
pub fn truncate_article(content: &str, max_chars: usize) -> String {
    let total = content.chars().count();
    if total <= max_chars {
        return content.to_string();
    }

    info!(
        chars = total,
        max_chars = max_chars,
        "Article content too long, truncating"
    );

    let truncated: String = content.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

/// Build the storyline-writing prompt for an article.
pub fn storyline_prompt(title: &str, content: &str, options: &ComicOptions) -> String {
    let word_count = options.length().word_count();
    let content = truncate_article(content, MAX_ARTICLE_CHARS);

    format!(
        r#"Create an engaging and detailed comic book storyline based on the following Wikipedia article about "{title}".

The storyline should:
1. Be approximately {word_count} words
2. Capture the most important facts and details from the article
3. Have a clear beginning, middle, and end
4. Include vivid descriptions of key scenes suitable for comic panels
5. Feature compelling characters based on real figures from the topic
6. Include dialogue suggestions for major moments
7. Be organized into distinct scenes or chapters
8. Balance educational content with entertainment value

Here is the Wikipedia content to base your storyline on:

{content}

FORMAT YOUR RESPONSE AS:
# {title}: Comic Storyline

## Overview
[Brief overview of the storyline]

## Main Characters
[List of main characters with short descriptions]

## Act 1: [Title]
[Detailed storyline for Act 1 with scene descriptions and key dialogue]

## Act 2: [Title]
[Detailed storyline for Act 2 with scene descriptions and key dialogue]

## Act 3: [Title]
[Detailed storyline for Act 3 with scene descriptions and key dialogue]

## Key Visuals
[Suggestions for important visual elements to include in the comic]"#
    )
}

/// Build the full chat request for the storyline call.
pub fn storyline_request(article: &Article, options: &ComicOptions) -> ChatRequest {
    ChatRequest {
        messages: vec![
            Message::system(STORYLINE_SYSTEM_PROMPT),
            Message::user(storyline_prompt(&article.title, &article.content, options)),
        ],
        max_tokens: Some(CHAT_MAX_TOKENS),
        temperature: Some(CHAT_TEMPERATURE),
        top_p: Some(CHAT_TOP_P),
        model: None,
    }
}
