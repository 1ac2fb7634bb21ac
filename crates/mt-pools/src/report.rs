//! Structured results handed to the presentation layer.
//!
//! A [`Report`] is a title, an optional description and thumbnail, and an
//! ordered list of labelled values. Frontends decide how to draw it.

use serde::Serialize;

use mt_mechanics::dice::format_faces;
use mt_mechanics::{CustomRoll, EffectRoll, GameSystem, SuccessRoll};

/// One labelled value in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    /// Label.
    pub name: String,
    /// Rendered value.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

/// A titled list of labelled values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Heading.
    pub title: String,
    /// Optional text under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Optional accent colour (24-bit RGB).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Values, in display order.
    pub fields: Vec<ReportField>,
}

impl Report {
    /// An empty report with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Set the accent colour.
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a full-width field.
    pub fn field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push(ReportField {
            name: name.into(),
            value: value.to_string(),
            inline: false,
        });
        self
    }

    /// Append an inline field.
    pub fn inline_field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push(ReportField {
            name: name.into(),
            value: value.to_string(),
            inline: true,
        });
        self
    }

    /// The value of the first field labelled `name`.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Shown when a dice command arrives before a game was chosen.
    pub fn game_not_set() -> Self {
        Self::new("Game not set!").with_description(
            "Please use !game to see the possible options then use !game [GAME] to set the game.",
        )
    }

    /// Present a d6 roll.
    pub fn effect_roll(user: &str, system: &GameSystem, roll: &EffectRoll) -> Self {
        Self::new(user)
            .with_description("d6 Roll Result")
            .with_thumbnail(&system.images.d6)
            .inline_field("Raw Result", format_faces(&roll.raw))
            .inline_field("Total Damage", roll.damage)
            .inline_field("Total Effects Triggered", roll.effects)
    }

    /// Present a d20 roll.
    pub fn success_roll(user: &str, system: &GameSystem, roll: &SuccessRoll) -> Self {
        Self::new(user)
            .with_description("d20 Roll Result")
            .with_thumbnail(&system.images.d20)
            .inline_field("Target", roll.params.target)
            .inline_field("Critical Range", roll.params.critical_range)
            .inline_field("Complication Range", roll.params.complication_range)
            .inline_field("Raw Result", format_faces(&roll.raw))
            .inline_field("Success(es)", roll.successes)
            .inline_field("Complication(s)", roll.complications)
    }

    /// Present a custom table draw.
    pub fn custom_roll(user: &str, system: &GameSystem, roll: &CustomRoll) -> Self {
        Self::new(user)
            .with_thumbnail(&system.images.d20)
            .field(&roll.label, &roll.value)
    }

    /// Shown for a command that is neither built in nor a custom table.
    pub fn unknown_custom_command(command: &str, system: &GameSystem) -> Self {
        let mut valid = vec!["d20", "d6"];
        valid.extend(system.table_names());
        Self::new(format!("'{command}' is not a game specific command!"))
            .with_description(format!("{} are valid commands.", valid.join(", ")))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(description) = &self.description {
            write!(f, "\n{description}")?;
        }
        for field in &self.fields {
            write!(f, "\n{}: {}", field.name, field.value)?;
        }
        Ok(())
    }
}
