//! Session Tests for the catalog console
//!
//! These tests drive a whole console session through the library API and
//! verify:
//! - Hierarchy building through the command language
//! - Rejected commands leave the catalog untouched
//! - Listings, statistics and the printed galaxy tree

use starlog::core::{
    BodyKind, Console, ConsoleConfig, GalaxyKind, Outcome, PlanetKind, Report,
    SpectralClass,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn console() -> Console {
    Console::new(ConsoleConfig::quiet())
}

/// A console holding the Solar System inside the Milky Way
fn solar_system() -> Console {
    let mut console = console();
    for line in [
        "add galaxy [Milky Way] spiral 13.6B",
        "add star [Milky Way] [Sol] 1.0 1.39 5778 1.0",
        "add planet [Sol] [Earth] terrestrial yes",
        "add planet [Sol] [Jupiter] giant planet no",
        "add planet [Sol] [Neptune] ice giant no",
        "add moon [Earth] [Luna]",
        "add moon [Jupiter] [Io]",
        "add moon [Jupiter] [Europa]",
    ] {
        let outcome = console.handle_line(line);
        assert!(
            matches!(outcome.report, Report::Added { .. }),
            "{} -> {:?}",
            line,
            outcome.report
        );
    }
    console
}

fn error_text(outcome: Outcome) -> String {
    match outcome.report {
        Report::Error(message) => message,
        other => panic!("expected an error, got {:?}", other),
    }
}

// =============================================================================
// Building the hierarchy
// =============================================================================

#[test]
fn test_solar_system_counts() {
    let mut console = solar_system();
    match console.handle_line("stats").report {
        Report::Stats(stats) => {
            assert_eq!(stats.galaxies, 1);
            assert_eq!(stats.stars, 1);
            assert_eq!(stats.planets, 3);
            assert_eq!(stats.moons, 3);
        }
        other => panic!("unexpected report: {:?}", other),
    }
}

#[test]
fn test_stored_star_has_derived_class() {
    let console = solar_system();
    let catalog = console.catalog();
    let sol = catalog.find(BodyKind::Star, "Sol").unwrap();
    let star = catalog.get(sol).unwrap().as_star().unwrap();
    assert_eq!(star.spectral_class, SpectralClass::G);
    assert_eq!(star.temperature, 5778);
}

#[test]
fn test_planet_kinds_and_life_flags() {
    let console = solar_system();
    let catalog = console.catalog();
    let jupiter = catalog.find(BodyKind::Planet, "Jupiter").unwrap();
    let planet = catalog.get(jupiter).unwrap().as_planet().unwrap();
    assert_eq!(planet.kind, PlanetKind::GiantPlanet);
    assert!(!planet.supports_life);

    let earth = catalog.find(BodyKind::Planet, "Earth").unwrap();
    assert!(catalog.get(earth).unwrap().as_planet().unwrap().supports_life);
}

#[test]
fn test_children_follow_insertion_order() {
    let console = solar_system();
    let catalog = console.catalog();
    let sol = catalog.find(BodyKind::Star, "Sol").unwrap();
    let names: Vec<&str> = catalog
        .children_of(sol)
        .unwrap()
        .iter()
        .map(|&h| catalog.get(h).unwrap().name())
        .collect();
    assert_eq!(names, vec!["Earth", "Jupiter", "Neptune"]);

    let neptune = catalog.find(BodyKind::Planet, "Neptune").unwrap();
    assert!(catalog.children_of(neptune).is_none());
}

// =============================================================================
// Rejections leave no trace
// =============================================================================

#[test]
fn test_invalid_star_is_not_stored() {
    let mut console = solar_system();
    let before = console.catalog().len();

    for (line, message) in [
        (
            "add star [Milky Way] [Cold] 1.0 1.0 -5 1.0",
            "Star temperature cannot be negative",
        ),
        (
            "add star [Milky Way] [Thin] 1.0 -1.0 5000 1.0",
            "Star diameter cannot be negative",
        ),
        (
            "add star [Milky Way] [Dim] 0.05 1.0 3000 0.01",
            "Invalid combination of star characteristics.",
        ),
        (
            "add star [Andromeda] [Far] 1.0 1.39 5778 1.0",
            "Galaxy Andromeda not found",
        ),
    ] {
        assert_eq!(error_text(console.handle_line(line)), message, "{}", line);
    }

    assert_eq!(console.catalog().len(), before);
    assert_eq!(console.catalog().list_names(BodyKind::Star), vec!["Sol"]);
}

#[test]
fn test_duplicate_name_keeps_first_record() {
    let mut console = solar_system();
    let outcome = console.handle_line("add galaxy [Milky Way] elliptical 1B");
    assert_eq!(
        outcome.report,
        Report::Notice("Galaxy Milky Way already exists".to_string())
    );

    let catalog = console.catalog();
    let handle = catalog.find(BodyKind::Galaxy, "Milky Way").unwrap();
    let galaxy = catalog.get(handle).unwrap().as_galaxy().unwrap();
    assert_eq!(galaxy.kind, GalaxyKind::Spiral);
    assert_eq!(catalog.list_names(BodyKind::Galaxy), vec!["Milky Way"]);
}

#[test]
fn test_duplicate_moon_under_other_planet_is_rejected() {
    let mut console = solar_system();
    let outcome = console.handle_line("add moon [Earth] [Io]");
    assert_eq!(outcome.report, Report::Notice("Moon Io already exists".to_string()));

    let catalog = console.catalog();
    let earth = catalog.find(BodyKind::Planet, "Earth").unwrap();
    assert_eq!(catalog.children_of(earth).unwrap().len(), 1);
}

#[test]
fn test_same_name_in_different_kinds() {
    let mut console = solar_system();
    let outcome = console.handle_line("add star [Milky Way] [Milky Way] 1.0 1.39 5778 1.0");
    assert!(matches!(outcome.report, Report::Added { kind: BodyKind::Star, .. }));
    assert!(console.catalog().find(BodyKind::Galaxy, "Milky Way").is_some());
    assert!(console.catalog().find(BodyKind::Star, "Milky Way").is_some());
}

#[test]
fn test_parent_of_wrong_kind_is_not_found() {
    let mut console = solar_system();
    assert_eq!(
        error_text(console.handle_line("add moon [Sol] [Charon]")),
        "Planet Sol not found"
    );
    assert_eq!(
        error_text(console.handle_line("add planet [Earth] [X] terrestrial no")),
        "Star Earth not found"
    );
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_list_is_sorted_and_labelled() {
    let mut console = console();
    for name in ["Zed", "Alpha", "Mu"] {
        console.handle_line(&format!("add galaxy [{}] irregular 1B", name));
    }
    assert_eq!(
        console.handle_line("list galaxies").report,
        Report::Listing {
            label: "galaxies".to_string(),
            names: vec!["Alpha".to_string(), "Mu".to_string(), "Zed".to_string()],
        }
    );
}

#[test]
fn test_print_galaxy_tree() {
    let mut console = solar_system();
    match console.handle_line("print [Milky Way]").report {
        Report::Tree(tree) => {
            assert_eq!(tree.galaxy.name, "Milky Way");
            let sol = &tree.stars[0];
            let planets: Vec<&str> = sol.planets.iter().map(|p| p.planet.name.as_str()).collect();
            assert_eq!(planets, vec!["Earth", "Jupiter", "Neptune"]);
            let jupiter_moons: Vec<&str> =
                sol.planets[1].moons.iter().map(|m| m.name.as_str()).collect();
            assert_eq!(jupiter_moons, vec!["Io", "Europa"]);
            assert_eq!(tree.body_count(), 8);
        }
        other => panic!("unexpected report: {:?}", other),
    }
}

#[test]
fn test_print_empty_galaxy() {
    let mut console = solar_system();
    console.handle_line("add galaxy [Void] irregular 400M");
    match console.handle_line("print [Void]").report {
        Report::Tree(tree) => assert!(tree.stars.is_empty()),
        other => panic!("unexpected report: {:?}", other),
    }
}

#[test]
fn test_exit_is_the_only_terminal_command() {
    let mut console = solar_system();
    for line in ["", "stats", "help", "list moons", "print [Nowhere]", "bogus"] {
        assert!(!console.handle_line(line).is_exit(), "{}", line);
    }
    assert!(console.handle_line("exit").is_exit());
}
