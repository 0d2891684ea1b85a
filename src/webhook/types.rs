//! Discord webhook payload types.
//!
//! Serialized exactly as the webhook endpoint expects; absent fields are omitted.

use serde::Serialize;

/// Image reference inside an embed (`{"url": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

/// Embed footer (`{"text": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// A rich embed: the message content becomes the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    /// Link attached to the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

impl Embed {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(EmbedImage { url: url.into() });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }

    /// Builds an embed from optional parts, skipping the ones that are `None`.
    pub fn from_parts(
        description: impl Into<String>,
        title: Option<String>,
        title_url: Option<String>,
        thumbnail: Option<String>,
        footer: Option<String>,
    ) -> Self {
        Self {
            title,
            description: description.into(),
            url: title_url,
            thumbnail: thumbnail.map(|url| EmbedImage { url }),
            footer: footer.map(|text| EmbedFooter { text }),
        }
    }
}

/// Body of a webhook execution: either plain content or embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl WebhookMessage {
    /// A plain-text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: Vec::new(),
        }
    }

    /// A message made of a single embed.
    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embeds: vec![embed],
        }
    }

    pub fn is_embed(&self) -> bool {
        !self.embeds.is_empty()
    }
}
