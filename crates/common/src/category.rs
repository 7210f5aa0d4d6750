//! Message categories and their wire-visible ciphertext prefixes.
//!
//! Every sealed envelope string starts with a 3-byte ASCII prefix naming the
//! category it was sealed under. The prefix is purely informational — it is
//! not a cryptographic parameter and does not change how bytes are encrypted.

use serde::{Deserialize, Serialize};

/// Length in bytes of the category prefix on a tagged ciphertext string.
pub const PREFIX_LEN: usize = 3;

/// The category a message was sealed under.
///
/// Serialised as lowercase strings (`"image"`, `"dns"`, `"stream"`) in JSON
/// bodies; as `"IMG"`, `"DNS"`, `"STR"` prefixes on ciphertext strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Dns,
    Stream,
}

impl Category {
    /// The 3-byte prefix this category contributes to a tagged ciphertext.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Image => "IMG",
            Category::Dns => "DNS",
            Category::Stream => "STR",
        }
    }

    /// Split a tagged ciphertext string into its category and base64 payload.
    ///
    /// A string carrying none of the three known prefixes is classified as
    /// [`Category::Stream`] with nothing stripped — the whole input is
    /// treated as payload. This mirrors the historical behaviour of untagged
    /// ciphertext and is deliberate (see DESIGN.md).
    pub fn split_tagged(tagged: &str) -> (Self, &str) {
        for category in [Category::Image, Category::Dns, Category::Stream] {
            if let Some(rest) = tagged.strip_prefix(category.prefix()) {
                return (category, rest);
            }
        }
        (Category::Stream, tagged)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Image => "image",
            Category::Dns => "dns",
            Category::Stream => "stream",
        };
        f.write_str(name)
    }
}
