use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use domain::{Catalog, Color, Gear, Product, Size, Unit, perform_mission};
use navigation::{Leg, Method, Route, Traveler};
use pipeline::specs::{
    All, Any, ColorSpecification, HasSupplies, MinHealth, NameContainsSpecification,
    SizeSpecification,
};
use pipeline::{Filter, ItemFilter, Specification, SpecificationExt};
use std::path::{Path, PathBuf};
use tracing::info;

/// solid-demo - composable filters and swappable strategies
#[derive(Parser)]
#[command(name = "solid-demo")]
#[command(about = "Filter a product catalog with composed specifications and swap navigation strategies", long_about = None)]
struct Cli {
    /// Catalog file with one `name::color::size` per line (built-in sample when omitted)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog
    Filter {
        /// Keep products of this color (repeat to allow several)
        #[arg(long)]
        color: Vec<Color>,

        /// Keep products of this size (repeat to allow several)
        #[arg(long)]
        size: Vec<Size>,

        /// Keep products whose name contains this text (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Match if any criterion holds instead of all of them
        #[arg(long)]
        any: bool,

        /// Keep the products that do NOT match
        #[arg(long)]
        invert: bool,

        /// Evaluate on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Navigate one leg, swapping strategies in the given order
    Navigate {
        #[arg(long, default_value = "Argentina")]
        from: String,

        #[arg(long, default_value = "US")]
        to: String,

        /// Strategy to use: compass, map or gps (repeat to swap; all three when omitted)
        #[arg(long)]
        via: Vec<Method>,

        /// Refuse a strategy that fails on the leg instead of installing it
        #[arg(long)]
        verify: bool,
    },

    /// Run the squad through a mission
    Mission {
        /// Meters each unit moves per round
        #[arg(long, default_value = "50")]
        distance: u32,

        /// Number of rounds
        #[arg(long, default_value = "1")]
        rounds: u32,

        /// Only count units with at least this much health as ready
        #[arg(long, default_value = "0")]
        min_health: u32,
    },

    /// Show what each piece of gear can do
    Gear,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            color,
            size,
            name,
            any,
            invert,
            parallel,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let criteria = Criteria {
                colors: color,
                sizes: size,
                name,
                any,
                invert,
            };
            handle_filter(&catalog, criteria, parallel, cli.json)?
        }
        Commands::Navigate {
            from,
            to,
            via,
            verify,
        } => handle_navigate(&from, &to, via, verify, cli.json)?,
        Commands::Mission {
            distance,
            rounds,
            min_health,
        } => handle_mission(distance, rounds, min_health, cli.json)?,
        Commands::Gear => handle_gear(cli.json)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => {
            info!("No catalog given, using the built-in sample");
            Ok(Catalog::sample())
        }
    }
}

struct Criteria {
    colors: Vec<Color>,
    sizes: Vec<Size>,
    name: Option<String>,
    any: bool,
    invert: bool,
}

/// Turn command line criteria into one specification.
///
/// Values of the same attribute are OR-ed; attributes are AND-ed, or
/// OR-ed with `--any`. No criteria at all keeps every product (and
/// `--any` with no criteria keeps none).
fn build_specification(criteria: Criteria) -> Box<dyn Specification<Product>> {
    let mut parts: Vec<Box<dyn Specification<Product>>> = Vec::new();

    if !criteria.colors.is_empty() {
        let colors: Any<Product> = criteria
            .colors
            .iter()
            .map(|c| ColorSpecification::new(*c).boxed())
            .collect();
        parts.push(colors.boxed());
    }
    if !criteria.sizes.is_empty() {
        let sizes: Any<Product> = criteria
            .sizes
            .iter()
            .map(|s| SizeSpecification::new(*s).boxed())
            .collect();
        parts.push(sizes.boxed());
    }
    if let Some(name) = &criteria.name {
        parts.push(NameContainsSpecification::new(name).boxed());
    }

    let combined = if criteria.any {
        parts.into_iter().collect::<Any<Product>>().boxed()
    } else {
        parts.into_iter().collect::<All<Product>>().boxed()
    };

    if criteria.invert {
        combined.not().boxed()
    } else {
        combined
    }
}

/// Handle the 'filter' command
fn handle_filter(catalog: &Catalog, criteria: Criteria, parallel: bool, json: bool) -> Result<()> {
    let spec = build_specification(criteria);
    info!("Filtering {} products with {}", catalog.len(), spec.describe());

    let matches = if parallel {
        ItemFilter.par_filter(catalog.products(), &spec)
    } else {
        ItemFilter.filter(catalog, &spec)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!("{}", format!("Products matching {}:", spec.describe()).bold().blue());
    if matches.is_empty() {
        println!("  (none)");
    }
    for product in &matches {
        println!("{}{}", "• ".green(), product);
    }
    Ok(())
}

/// Handle the 'navigate' command
fn handle_navigate(from: &str, to: &str, via: Vec<Method>, verify: bool, json: bool) -> Result<()> {
    let order = if via.is_empty() {
        Method::ALL.to_vec()
    } else {
        via
    };
    let leg = Leg::new(from, to);
    leg.validate()?;

    let (first, rest) = order
        .split_first()
        .ok_or_else(|| anyhow!("No navigation method given"))?;
    let mut traveler = Traveler::with_boxed(first.strategy());

    let mut routes: Vec<Route> = Vec::with_capacity(order.len());
    routes.push(traveler.travel(from, to)?);
    for method in rest {
        if verify {
            traveler
                .set_strategy_verified(method.strategy(), std::slice::from_ref(&leg))
                .with_context(|| format!("Refusing to switch to {method}"))?;
        } else {
            traveler.set_boxed_strategy(method.strategy());
        }
        routes.push(traveler.travel(from, to)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    for route in &routes {
        println!("{} {}", format!("[{}]", route.method).cyan(), route);
    }
    Ok(())
}

fn default_squad() -> Vec<Unit> {
    vec![
        Unit::marine("John Doe", 100, 30),
        Unit::medic("Jane Smith", 80, 5),
        Unit::engineer("Bob Builder", 90, 10),
    ]
}

/// Handle the 'mission' command
fn handle_mission(distance: u32, rounds: u32, min_health: u32, json: bool) -> Result<()> {
    let mut squad = default_squad();
    let mut reports = Vec::new();
    for _ in 0..rounds {
        reports.extend(perform_mission(&mut squad, distance));
    }
    let ready: Vec<&str> = ready_units(&squad, min_health)
        .into_iter()
        .map(|unit| unit.name())
        .collect();

    if json {
        let out = serde_json::json!({ "reports": reports, "ready": ready });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "Mission start:".bold().blue());
    for report in &reports {
        println!("  {report}");
    }
    println!("{}", "Squad status:".bold().blue());
    for unit in &squad {
        let marker = if ready.contains(&unit.name()) {
            "• ".green()
        } else {
            "• ".red()
        };
        println!("{}{}", marker, unit_status(unit));
    }
    Ok(())
}

/// Units that still have supplies and enough health to keep going.
fn ready_units(squad: &[Unit], min_health: u32) -> Vec<&Unit> {
    let spec = HasSupplies.and(MinHealth::new(min_health));
    ItemFilter.filter(squad, &spec)
}

fn unit_status(unit: &Unit) -> String {
    format!(
        "{} ({}, {} hp): {} {} left",
        unit.name(),
        unit.role(),
        unit.health(),
        unit.supplies().remaining(),
        unit.supplies().resource()
    )
}

/// Handle the 'gear' command
fn handle_gear(json: bool) -> Result<()> {
    let kit = Gear::kit();

    if json {
        let out: Vec<_> = kit
            .iter()
            .map(|gear| {
                serde_json::json!({
                    "gear": gear.name(),
                    "capabilities": gear.capabilities(),
                    "uses": gear.field_test(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for gear in &kit {
        println!("{}", format!("Using {}:", gear.name()).bold().blue());
        for line in gear.field_test() {
            println!("  {line}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(spec: &dyn Specification<Product>) -> Vec<String> {
        let catalog = Catalog::sample();
        ItemFilter
            .filter(&catalog, spec)
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    }

    fn criteria() -> Criteria {
        Criteria {
            colors: Vec::new(),
            sizes: Vec::new(),
            name: None,
            any: false,
            invert: false,
        }
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let spec = build_specification(criteria());
        assert_eq!(names(spec.as_ref()), ["Apple", "Tree", "House"]);
    }

    #[test]
    fn test_any_with_no_criteria_keeps_nothing() {
        let spec = build_specification(Criteria {
            any: true,
            ..criteria()
        });
        assert!(names(spec.as_ref()).is_empty());
    }

    #[test]
    fn test_attributes_are_and_values_are_or() {
        let spec = build_specification(Criteria {
            colors: vec![Color::Green, Color::Blue],
            sizes: vec![Size::Large],
            ..criteria()
        });
        assert_eq!(names(spec.as_ref()), ["Tree", "House"]);
    }

    #[test]
    fn test_invert() {
        let spec = build_specification(Criteria {
            colors: vec![Color::Green],
            invert: true,
            ..criteria()
        });
        assert_eq!(names(spec.as_ref()), ["House"]);
    }

    #[test]
    fn test_cli_parses_repeated_values() {
        let cli = Cli::try_parse_from([
            "solid-demo", "filter", "--color", "green", "--color", "blue", "--size", "large",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Filter { color, size, .. } => {
                assert_eq!(color, [Color::Green, Color::Blue]);
                assert_eq!(size, [Size::Large]);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_ready_units_respect_min_health() {
        let squad = default_squad();

        let all: Vec<&str> = ready_units(&squad, 0).iter().map(|u| u.name()).collect();
        assert_eq!(all, ["John Doe", "Jane Smith", "Bob Builder"]);

        let fit: Vec<&str> = ready_units(&squad, 90).iter().map(|u| u.name()).collect();
        assert_eq!(fit, ["John Doe", "Bob Builder"]);
    }

    #[test]
    fn test_unit_status_shows_health_and_supplies() {
        let unit = Unit::medic("Jane Smith", 80, 5);
        assert_eq!(unit_status(&unit), "Jane Smith (medic, 80 hp): 5 medkit left");
    }

    #[test]
    fn test_cli_rejects_unknown_method() {
        assert!(Cli::try_parse_from(["solid-demo", "navigate", "--via", "sextant"]).is_err());
    }
}
