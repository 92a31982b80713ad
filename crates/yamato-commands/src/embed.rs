//! A transport-neutral embed model.
//!
//! Handlers build an [`Embed`]; the Discord session converts it into a
//! serenity `CreateEmbed` at send time. Text is clipped to Discord's limits
//! as it is added and fields past the maximum are dropped.

use poise::serenity_prelude as serenity;

/// Maximum title length in characters.
pub const TITLE_LIMIT: usize = 256;
/// Maximum field name length in characters.
pub const FIELD_NAME_LIMIT: usize = 256;
/// Maximum field value length in characters.
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Maximum number of fields.
pub const FIELD_COUNT_LIMIT: usize = 25;

/// A single name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

/// A rich message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    /// Title line.
    pub title: Option<String>,
    /// Large image URL.
    pub image: Option<String>,
    /// Side bar colour as `0xRRGGBB`.
    pub color: Option<u32>,
    /// Fields in display order.
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// An empty embed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl AsRef<str>) -> Self {
        self.title = Some(clip(title.as_ref(), TITLE_LIMIT));
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Sets the colour.
    #[must_use]
    pub const fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a non-inline field.
    #[must_use]
    pub fn field(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if self.fields.len() < FIELD_COUNT_LIMIT {
            self.fields.push(EmbedField {
                name: clip(name.as_ref(), FIELD_NAME_LIMIT),
                value: clip(value.as_ref(), FIELD_VALUE_LIMIT),
                inline: false,
            });
        }
        self
    }

    /// Marks every field added so far as inline.
    #[must_use]
    pub fn inline_all_fields(mut self) -> Self {
        for field in &mut self.fields {
            field.inline = true;
        }
        self
    }
}

fn clip(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

impl From<&Embed> for serenity::CreateEmbed {
    fn from(embed: &Embed) -> Self {
        let mut builder = Self::new();
        if let Some(title) = &embed.title {
            builder = builder.title(title);
        }
        if let Some(image) = &embed.image {
            builder = builder.image(image);
        }
        if let Some(color) = embed.color {
            builder = builder.colour(color);
        }
        builder.fields(
            embed
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
        )
    }
}
