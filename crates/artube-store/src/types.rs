//! Persisted entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator of the content payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Channel,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Channel => "channel",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    pub title: String,
    pub description: String,
    pub likes: u64,
    pub poster_tx_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelContent {
    pub name: String,
    pub description: String,
    pub avatar_tx_id: String,
}

/// Typed payload. Serialized as `{"type": ..., "data": {...}}` with the tag
/// first, so readers dispatch on it and reject unknown tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Content {
    Video(VideoContent),
    Channel(ChannelContent),
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Video(_) => ContentType::Video,
            Content::Channel(_) => ContentType::Channel,
        }
    }

    /// Text fields keywords are drawn from: title or name first, then the
    /// description
    pub fn text_fields(&self) -> [&str; 2] {
        match self {
            Content::Video(v) => [v.title.as_str(), v.description.as_str()],
            Content::Channel(c) => [c.name.as_str(), c.description.as_str()],
        }
    }
}

impl From<VideoContent> for Content {
    fn from(video: VideoContent) -> Self {
        Content::Video(video)
    }
}

impl From<ChannelContent> for Content {
    fn from(channel: ChannelContent) -> Self {
        Content::Channel(channel)
    }
}

/// One indexed item, replaced wholesale on every re-index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub keywords: Vec<String>,
    pub last_indexed: DateTime<Utc>,
    pub content: Content,
}

impl Entry {
    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }
}
