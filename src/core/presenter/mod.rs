//! Presenter Module
//!
//! Turns engine [`Report`]s into the text a person reads at the console, or
//! into one JSON document per line for scripted use.

pub mod emoji_formatter;

pub use emoji_formatter::{EmojiFormatter, Theme};

use crate::core::engine::{GalaxyTree, Report};
use crate::core::error::Result;
use crate::core::models::BodyKind;
use crate::core::store::CatalogStats;
use serde::Deserialize;

/// Command summary shown by `help`
pub const HELP_TEXT: &str = "\
add galaxy [<name>] <elliptical|lenticular|spiral|irregular> <age><M|B>
add star   [<galaxy>] [<name>] <mass> <diameter> <temperature> <luminosity>
add planet [<star>] [<name>] <kind> <yes|no>
add moon   [<planet>] [<name>]
list <galaxies|stars|planets|moons>
stats
print [<galaxy>]
help
exit

Planet kinds: terrestrial, giant planet, ice giant, mesoplanet, mini-neptune,
planetar, super-earth, super-jupiter, sub-earth";

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// One JSON document per report
    Json,
}

// =============================================================================
// Presenter
// =============================================================================

/// Renders reports for display.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    formatter: EmojiFormatter,
    format: OutputFormat,
}

impl Presenter {
    /// Create a presenter with the default theme and text output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific theme for text output.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.formatter = self.formatter.with_theme(theme);
        self
    }

    /// Use a specific output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Render a report, or `None` when there is nothing to show.
    pub fn render(&self, report: &Report) -> Result<Option<String>> {
        if matches!(report, Report::Nothing) {
            return Ok(None);
        }
        match self.format {
            OutputFormat::Json => Ok(Some(serde_json::to_string(report)?)),
            OutputFormat::Text => Ok(Some(self.render_text(report))),
        }
    }

    fn render_text(&self, report: &Report) -> String {
        let f = &self.formatter;
        match report {
            Report::Nothing => String::new(),
            Report::Error(message) => f.decorate(f.error(), &format!("Error: {}", message)),
            Report::Notice(message) => f.decorate(f.warning(), message),
            Report::Added { kind, name } => {
                f.decorate(f.success(), &format!("Added {} {}", kind.noun(), name))
            }
            Report::Listing { label, names } => self.render_listing(label, names),
            Report::Stats(stats) => self.render_stats(stats),
            Report::Tree(tree) => self.render_tree(tree),
            Report::Help => format!("{}\n{}", f.decorate(f.hint_emoji(), "Commands:"), HELP_TEXT),
            Report::Farewell => "Goodbye.".to_string(),
        }
    }

    fn render_listing(&self, label: &str, names: &[String]) -> String {
        if names.is_empty() {
            return format!("{}: (none)", label);
        }
        let bullet = self.formatter.bullet();
        let mut output = format!("{}:", label);
        for name in names {
            output.push_str("\n  ");
            output.push_str(&self.formatter.decorate(bullet, name));
        }
        output
    }

    fn render_stats(&self, stats: &CatalogStats) -> String {
        let f = &self.formatter;
        let mut lines = vec![f.decorate(f.stats_emoji(), "Catalog statistics")];
        for (kind, count) in [
            (BodyKind::Galaxy, stats.galaxies),
            (BodyKind::Star, stats.stars),
            (BodyKind::Planet, stats.planets),
            (BodyKind::Moon, stats.moons),
        ] {
            lines.push(format!("  {}: {}", capitalize(kind.plural()), count));
        }
        lines.join("\n")
    }

    fn render_tree(&self, tree: &GalaxyTree) -> String {
        let f = &self.formatter;
        let galaxy = &tree.galaxy;
        let mut lines = vec![f.decorate(
            f.body_emoji(BodyKind::Galaxy),
            &format!(
                "Galaxy {} ({}, {} {} years)",
                galaxy.name, galaxy.kind, galaxy.age, galaxy.age_unit
            ),
        )];

        for star_tree in &tree.stars {
            let star = &star_tree.star;
            lines.push(format!(
                "  {}",
                f.decorate(
                    f.body_emoji(BodyKind::Star),
                    &format!(
                        "Star {} (class {}) mass={} diameter={} temperature={}K luminosity={}",
                        star.name,
                        star.spectral_class,
                        star.mass,
                        star.diameter,
                        star.temperature,
                        star.luminosity
                    ),
                )
            ));

            for planet_tree in &star_tree.planets {
                let planet = &planet_tree.planet;
                let life = if planet.supports_life {
                    "supports life"
                } else {
                    "no life"
                };
                lines.push(format!(
                    "    {}",
                    f.decorate(
                        f.body_emoji(BodyKind::Planet),
                        &format!("Planet {} ({}, {})", planet.name, planet.kind, life),
                    )
                ));

                for moon in &planet_tree.moons {
                    lines.push(format!(
                        "      {}",
                        f.decorate(f.body_emoji(BodyKind::Moon), &format!("Moon {}", moon.name))
                    ));
                }
            }
        }

        lines.join("\n")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
