//! Static content and asset references the screen is built from.
//!
//! Everything here is configuration: the core reads it, never changes it.
//! The built-in defaults are the shipped greeting; a JSON file can
//! override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::nickname::NicknameRoster;

/// Placeholder replaced by the active nickname's label in letter paragraphs.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Opaque reference to a playable or renderable asset (path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(String);

impl AssetHandle {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three media assets on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaAssets {
    /// Looping background track.
    pub audio: AssetHandle,
    /// Hero photo.
    pub image: AssetHandle,
    /// Alt text for the hero photo.
    pub image_alt: String,
    /// Silent looping video in the memory section.
    pub video: AssetHandle,
}

impl Default for MediaAssets {
    fn default() -> Self {
        Self {
            audio: AssetHandle::new("assets/zina.mp3"),
            image: AssetHandle::new("assets/love.png"),
            image_alt: "Salwa & Oussema \u{2014} love moment".to_string(),
            video: AssetHandle::new("assets/salwa.mp4"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterContent {
    pub title: String,
    /// Paragraphs; `{name}` is replaced by the active nickname.
    pub paragraphs: Vec<String>,
}

impl Default for LetterContent {
    fn default() -> Self {
        Self {
            title: "A Love Letter".to_string(),
            paragraphs: vec![
                "The world is noisy, but your smile is my quiet place. When I call you {name}, \
                 I feel lucky twice\u{2014}once for the name, and once for the soul that answers it. \
                 Every day, I choose you again."
                    .to_string(),
                "If love had a dashboard, all the metrics would point to you: 100% care, infinite \
                 patience, and an uptime of forever. Thank you for being my favourite project and \
                 my constant home."
                    .to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryContent {
    pub title: String,
    pub body: String,
}

impl Default for MemoryContent {
    fn default() -> Self {
        Self {
            title: "Tiny Memory".to_string(),
            body: "Remember this moment: you opened this page, and I was smiling, thinking of you. \
                   Let this be our little routine\u{2014}whenever we miss each other, we meet here."
                .to_string(),
        }
    }
}

/// All content the greeting screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingContent {
    pub roster: NicknameRoster,
    pub tagline: String,
    pub heading_prefix: String,
    pub intro: String,
    pub letter: LetterContent,
    pub memory: MemoryContent,
    pub author: String,
    pub assets: MediaAssets,
}

impl Default for GreetingContent {
    fn default() -> Self {
        Self {
            roster: NicknameRoster::default(),
            tagline: "Surprise for my love".to_string(),
            heading_prefix: "I love you".to_string(),
            intro: "Every heartbeat writes your name in my sky. Today I built you this little \
                    world\u{2014}just for us."
                .to_string(),
            letter: LetterContent::default(),
            memory: MemoryContent::default(),
            author: "oussema bouchahwa".to_string(),
            assets: MediaAssets::default(),
        }
    }
}

impl GreetingContent {
    /// Parses content JSON. Missing fields keep their built-in values.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads content from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json_str(&json).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded greeting content");
        Ok(content)
    }
}
