//! Command parser
//!
//! Turns one console line into a [`Command`]. The grammar has two token
//! shapes: bare words (runs of non-whitespace) and bracketed names
//! (`[Milky Way]`, which may contain spaces but not `]`).
//!
//! Every helper takes the unconsumed input and hands back the token plus
//! whatever follows it. Parsing never backtracks: once the first word picks a
//! branch, the first token that does not fit produces that branch's error.
//! Leftover input is only reported after the whole command parsed cleanly.
//!
//! ```text
//! add galaxy [<name>] <elliptical|lenticular|spiral|irregular> <float><M|B>
//! add star   [<galaxy>] [<name>] <mass> <diameter> <temperature> <luminosity>
//! add planet [<star>] [<name>] <kind> <yes|no>
//! add moon   [<planet>] [<name>]
//! list <galaxies|stars|planets|moons>
//! stats
//! print [<galaxy>]
//! help
//! exit
//! ```

use crate::core::command::Command;
use crate::core::error::{Result, StarField, StarlogError};
use crate::core::models::{AgeUnit, BodyKind, Galaxy, GalaxyKind, Moon, Planet, PlanetKind, Star};
use crate::core::store::{Catalog, Handle};
use tracing::debug;

/// A parsed value together with the input that follows it
type Parsed<'a, T> = Result<(T, &'a str)>;

/// Parse one line, consulting `catalog` to resolve parent names
pub fn parse(line: &str, catalog: &Catalog) -> Result<Command> {
    let Some((word, rest)) = next_word(line) else {
        return Ok(Command::NoOp);
    };

    let (command, rest) = match word {
        "add" => parse_add(rest, catalog)?,
        "list" => parse_list(rest)?,
        "stats" => (Command::Stats, rest),
        "print" => parse_print(rest, catalog)?,
        "help" => (Command::Help, rest),
        "exit" => (Command::Exit, rest),
        other => {
            return Err(StarlogError::UnknownCommand {
                word: other.to_string(),
            })
        }
    };

    finish(command, rest)
}

/// Parse one line, turning any rejection into [`Command::ShowError`]
pub fn interpret(line: &str, catalog: &Catalog) -> Command {
    match parse(line, catalog) {
        Ok(command) => {
            debug!(%command, "parsed");
            command
        }
        Err(err) => {
            debug!(error = %err, line, "rejected");
            err.into()
        }
    }
}

// =============================================================================
// Token helpers
// =============================================================================

/// Split off the next whitespace-delimited word
fn next_word(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    Some((&trimmed[..end], &trimmed[end..]))
}

/// Split off the next `[...]` name, returning its contents verbatim
fn next_name(input: &str, field: BodyKind) -> Parsed<'_, &str> {
    let inner = input
        .trim_start()
        .strip_prefix('[')
        .ok_or(StarlogError::ExpectedName { field })?;
    let close = inner
        .find(']')
        .ok_or(StarlogError::UnterminatedName { field })?;

    let name = &inner[..close];
    if name.is_empty() {
        return Err(StarlogError::EmptyName { field });
    }
    Ok((name, &inner[close + 1..]))
}

fn next_float(input: &str, field: StarField) -> Parsed<'_, f64> {
    let (word, rest) = next_word(input).ok_or_else(|| StarlogError::expected(field))?;
    let value = word
        .parse::<f64>()
        .map_err(|_| StarlogError::expected(field))?;
    Ok((value, rest))
}

fn next_integer(input: &str, field: StarField) -> Parsed<'_, i64> {
    let (word, rest) = next_word(input).ok_or_else(|| StarlogError::expected(field))?;
    let value = word
        .parse::<i64>()
        .map_err(|_| StarlogError::expected(field))?;
    Ok((value, rest))
}

/// Accept `command` only if nothing but whitespace follows it
fn finish(command: Command, rest: &str) -> Result<Command> {
    let leftover = rest.trim();
    if leftover.is_empty() {
        Ok(command)
    } else {
        Err(StarlogError::ExtraInput {
            rest: leftover.to_string(),
        })
    }
}

fn resolve(catalog: &Catalog, kind: BodyKind, name: &str) -> Result<Handle> {
    catalog
        .find(kind, name)
        .ok_or_else(|| StarlogError::not_found(kind, name))
}

/// A parent named on the command line, looked up only once its child's own
/// fields have been validated
struct ParentRef<'a> {
    catalog: &'a Catalog,
    kind: BodyKind,
    name: &'a str,
}

impl ParentRef<'_> {
    fn resolve(&self) -> Result<Handle> {
        resolve(self.catalog, self.kind, self.name)
    }
}

// =============================================================================
// add
// =============================================================================

fn parse_add<'a>(input: &'a str, catalog: &'a Catalog) -> Parsed<'a, Command> {
    let (word, rest) = next_word(input).ok_or(StarlogError::BodyTypeExpected)?;
    let kind = BodyKind::from_singular(word).ok_or_else(|| StarlogError::UnknownBodyType {
        word: word.to_string(),
    })?;

    // Galaxies are roots; every other kind names its parent first
    let Some(parent_kind) = kind.parent_kind() else {
        return parse_add_galaxy(rest);
    };
    let (parent_name, rest) = next_name(rest, parent_kind)?;
    let (name, rest) = next_name(rest, kind)?;
    let parent = ParentRef {
        catalog,
        kind: parent_kind,
        name: parent_name,
    };

    match kind {
        BodyKind::Star => parse_add_star(name, rest, parent),
        BodyKind::Planet => parse_add_planet(name, rest, parent),
        BodyKind::Moon => parse_add_moon(name, rest, parent),
        // Unreachable: galaxies returned above
        BodyKind::Galaxy => parse_add_galaxy(rest),
    }
}

fn parse_add_galaxy(input: &str) -> Parsed<'_, Command> {
    let (name, rest) = next_name(input, BodyKind::Galaxy)?;

    let (kind_word, rest) = next_word(rest).unwrap_or(("", rest));
    let kind = GalaxyKind::parse(kind_word).ok_or_else(|| StarlogError::InvalidGalaxyType {
        word: kind_word.to_string(),
    })?;

    let (age_word, rest) = next_word(rest).ok_or(StarlogError::AgeExpected)?;
    let (age, age_unit) = parse_age(age_word)?;

    let body = Galaxy::new(name, kind, age, age_unit).into();
    Ok((Command::AddBody { body, parent: None }, rest))
}

/// Split an age token such as `13.6B` into magnitude and unit
fn parse_age(token: &str) -> Result<(f64, AgeUnit)> {
    let suffix = token.chars().last().ok_or(StarlogError::AgeExpected)?;
    let unit = AgeUnit::from_suffix(suffix).ok_or(StarlogError::AgeUnit)?;
    let magnitude = token[..token.len() - suffix.len_utf8()]
        .parse::<f64>()
        .map_err(|_| StarlogError::AgeNotNumber)?;

    // Only an exact zero is rejected here; negative magnitudes are accepted.
    if magnitude == 0.0 {
        return Err(StarlogError::AgeNegative);
    }
    Ok((magnitude, unit))
}

fn parse_add_star<'a>(name: &str, rest: &'a str, galaxy: ParentRef<'_>) -> Parsed<'a, Command> {
    let (mass, rest) = next_float(rest, StarField::Mass)?;
    let (diameter, rest) = next_float(rest, StarField::Diameter)?;
    if diameter < 0.0 {
        return Err(StarlogError::StarFieldNegative {
            field: StarField::Diameter,
        });
    }
    let (temperature, rest) = next_integer(rest, StarField::Temperature)?;
    let temperature = u64::try_from(temperature).map_err(|_| StarlogError::StarFieldNegative {
        field: StarField::Temperature,
    })?;
    let (luminosity, rest) = next_float(rest, StarField::Luminosity)?;

    let galaxy = galaxy.resolve()?;
    let star = Star::new(name, mass, diameter, temperature, luminosity)
        .ok_or(StarlogError::InvalidStar)?;

    Ok((
        Command::AddBody {
            body: star.into(),
            parent: Some(galaxy),
        },
        rest,
    ))
}

/// Read a planet kind, joining `giant`/`ice` with the word after it
fn next_planet_kind(input: &str) -> Parsed<'_, String> {
    let (first, rest) = next_word(input).ok_or(StarlogError::PlanetTypeExpected)?;
    if PlanetKind::is_two_word_prefix(first) {
        if let Some((second, rest)) = next_word(rest) {
            return Ok((format!("{} {}", first, second), rest));
        }
    }
    Ok((first.to_string(), rest))
}

fn parse_add_planet<'a>(name: &str, rest: &'a str, star: ParentRef<'_>) -> Parsed<'a, Command> {
    let (raw_kind, rest) = next_planet_kind(rest)?;
    let kind = PlanetKind::parse(&raw_kind)
        .ok_or_else(|| StarlogError::UnknownPlanetType {
            value: raw_kind.clone(),
        })?;

    let (life_word, rest) = next_word(rest).ok_or(StarlogError::LifeSupportExpected)?;
    let supports_life = match life_word {
        "yes" => true,
        "no" => false,
        _ => return Err(StarlogError::LifeSupportExpected),
    };

    let star = star.resolve()?;
    Ok((
        Command::AddBody {
            body: Planet::new(name, kind, supports_life).into(),
            parent: Some(star),
        },
        rest,
    ))
}

fn parse_add_moon<'a>(name: &str, rest: &'a str, planet: ParentRef<'_>) -> Parsed<'a, Command> {
    let planet = planet.resolve()?;
    Ok((
        Command::AddBody {
            body: Moon::new(name).into(),
            parent: Some(planet),
        },
        rest,
    ))
}

// =============================================================================
// list / print
// =============================================================================

fn parse_list(input: &str) -> Parsed<'_, Command> {
    let (word, rest) = next_word(input).ok_or(StarlogError::BodyTypeExpected)?;
    let kind = BodyKind::from_plural(word).ok_or_else(|| StarlogError::UnknownBodyType {
        word: word.to_string(),
    })?;
    Ok((
        Command::ListKind {
            kind,
            label: word.to_string(),
        },
        rest,
    ))
}

fn parse_print<'a>(input: &'a str, catalog: &Catalog) -> Parsed<'a, Command> {
    let (name, rest) = next_name(input, BodyKind::Galaxy)?;
    let galaxy = resolve(catalog, BodyKind::Galaxy, name)?;
    Ok((Command::PrintGalaxy(galaxy), rest))
}
