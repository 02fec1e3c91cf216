//! Uploaded media handed to the audio and image skills.

/// An uploaded file: its display name, raw bytes, and declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub name: String,
    /// MIME type as declared by the uploader, if known.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl MediaAsset {
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    /// An asset with no bytes counts as "no file given".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Guess a content type from a file extension.
    ///
    /// Covers the audio and image formats the hosted models accept; anything
    /// else is sent without a content type.
    #[must_use]
    pub fn content_type_for(name: &str) -> Option<&'static str> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        let mime = match ext.as_str() {
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            "flac" => "audio/flac",
            "ogg" | "oga" => "audio/ogg",
            "m4a" => "audio/mp4",
            "webm" => "audio/webm",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            _ => return None,
        };
        Some(mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bytes_is_empty() {
        let asset = MediaAsset::new("a.wav", None, Vec::new());
        assert!(asset.is_empty());
    }

    #[test]
    fn content_type_from_extension() {
        assert_eq!(MediaAsset::content_type_for("talk.MP3"), Some("audio/mpeg"));
        assert_eq!(MediaAsset::content_type_for("cat.jpeg"), Some("image/jpeg"));
        assert_eq!(MediaAsset::content_type_for("notes.txt"), None);
        assert_eq!(MediaAsset::content_type_for("no-extension"), None);
    }
}
