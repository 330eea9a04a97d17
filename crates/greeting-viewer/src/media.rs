//! Webview implementations of the core's host traits.

use async_trait::async_trait;
use dioxus::prelude::*;
use serde::Deserialize;

use greeting_core::{AssetHandle, PlaybackError, PlaybackHost, ThemeMode, ThemeTarget};

/// DOM id of the hidden background `<audio>` element.
pub const BACKGROUND_AUDIO_ID: &str = "background-audio";

/// Reply posted back by the playback script.
#[derive(Debug, Deserialize)]
struct PlayReply {
    ok: bool,
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// Starts playback of an `<audio>` element through the webview.
#[derive(Debug, Clone, Copy)]
pub struct WebviewPlayback {
    element_id: &'static str,
}

impl WebviewPlayback {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }
}

#[async_trait(?Send)]
impl PlaybackHost for WebviewPlayback {
    async fn play(&self, source: &AssetHandle) -> Result<(), PlaybackError> {
        tracing::debug!(element = self.element_id, %source, "Calling play() in webview");
        let js = format!(
            r#"
            const el = document.getElementById("{id}");
            if (!el) {{
                dioxus.send({{ ok: false, name: "MissingElement" }});
            }} else {{
                el.play()
                    .then(() => dioxus.send({{ ok: true }}))
                    .catch((e) => dioxus.send({{ ok: false, name: e.name || "Error", message: e.message || "" }}));
            }}
            "#,
            id = self.element_id
        );

        let mut eval = document::eval(&js);
        let reply: PlayReply = eval
            .recv()
            .await
            .map_err(|e| PlaybackError::Host(e.to_string()))?;

        reply.into_result(self.element_id)
    }
}

impl PlayReply {
    fn into_result(self, element_id: &str) -> Result<(), PlaybackError> {
        match self {
            PlayReply { ok: true, .. } => Ok(()),
            PlayReply { name, .. } if name == "MissingElement" => {
                Err(PlaybackError::MissingElement(element_id.to_string()))
            }
            PlayReply { name, message, .. } => Err(PlaybackError::from_dom_name(&name, &message)),
        }
    }
}

/// Marks `<html>` with the active theme, like a class-based dark mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn mark(&self, mode: ThemeMode) {
        let dark = mode == ThemeMode::Dark;
        document::eval(&format!(
            "document.documentElement.classList.toggle('dark', {dark}); \
             document.documentElement.dataset.theme = '{}';",
            mode.css_value()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<(), PlaybackError> {
        let reply: PlayReply = serde_json::from_str(json).unwrap();
        reply.into_result(BACKGROUND_AUDIO_ID)
    }

    #[test]
    fn test_reply_success() {
        assert_eq!(parse(r#"{"ok":true}"#), Ok(()));
    }

    #[test]
    fn test_reply_autoplay_denied() {
        let json = r#"{"ok":false,"name":"NotAllowedError","message":"play() failed"}"#;
        assert_eq!(parse(json), Err(PlaybackError::NotAllowed));
    }

    #[test]
    fn test_reply_missing_element() {
        assert_eq!(
            parse(r#"{"ok":false,"name":"MissingElement"}"#),
            Err(PlaybackError::MissingElement(BACKGROUND_AUDIO_ID.to_string()))
        );
    }
}
