use crate::{
    catalog::{Catalog, TripSelection},
    schemas::{parse_trip_request, PlannerDocument, Validator},
    ItineraryResult, Planner, PlannerRates, TripRequest,
};
use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use tracing::{error, info};

/// CLI entry point for the heritage-planner tool
pub fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    // Itineraries go to stdout, so logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();

    match matches.subcommand() {
        Some(("plan", sub)) => plan(sub),
        Some(("catalog", sub)) => plan_from_catalog(sub),
        Some(("schema", sub)) => print_schema(sub),
        _ => Err(anyhow!("a subcommand is required")),
    }
}

pub fn command() -> Command {
    Command::new("heritage-planner")
        .version("0.1.0")
        .about("Plan a heritage trip: day-by-day schedule, cost breakdown and travel advice")
        .subcommand_required(true)
        .subcommand(
            Command::new("plan")
                .about("Compute an itinerary from a trip request document")
                .arg(
                    Arg::new("input")
                        .help("Path to the request JSON, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Check the request against its JSON Schema first"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("catalog")
                .about("Compute an itinerary from names picked out of a catalog")
                .arg(
                    Arg::new("catalog")
                        .help("Path to the catalog JSON")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("STATE")
                        .help("Origin state"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("STATE")
                        .help("Destination state")
                        .required(true),
                )
                .arg(
                    Arg::new("site")
                        .short('s')
                        .long("site")
                        .value_name("NAME")
                        .help("Site to visit; repeat in the order of preference")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("month")
                        .short('m')
                        .long("month")
                        .value_name("MONTH")
                        .required(true),
                )
                .arg(
                    Arg::new("days")
                        .short('d')
                        .long("days")
                        .value_name("COUNT")
                        .help("Days available for the trip")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(
                    Arg::new("transport")
                        .short('t')
                        .long("transport")
                        .value_name("MODE")
                        .required(true),
                )
                .arg(
                    Arg::new("stay")
                        .long("stay")
                        .value_name("TIER")
                        .help("Accommodation tier")
                        .required(true),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("schema")
                .about("Print the JSON Schema of a document")
                .arg(
                    Arg::new("document")
                        .required(true)
                        .index(1)
                        .value_parser([TripRequest::NAME, ItineraryResult::NAME, Catalog::NAME]),
                ),
        )
}

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .value_parser(["json", "text"])
        .default_value("json")
}

fn planner() -> anyhow::Result<Planner> {
    let rates = PlannerRates::from_env().context("invalid planner rate override")?;
    Ok(Planner::new().with_rates(rates))
}

fn plan(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = required(matches, "input")?;
    let validator = Validator::strict(matches.get_flag("strict"));

    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read request from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?
    };

    info!("Planning trip from {}", input);
    let request = parse_trip_request(&text, validator)?;
    compute_and_emit(&request, matches)
}

fn plan_from_catalog(matches: &ArgMatches) -> anyhow::Result<()> {
    let catalog_path = required(matches, "catalog")?;
    let catalog = Catalog::from_path(catalog_path)?;
    let selection = selection_from(matches)?;

    info!(
        "Planning {} days in {} from catalog {}",
        selection.total_days, selection.destination_state, catalog_path
    );
    let request = catalog.resolve(&selection)?;
    compute_and_emit(&request, matches)
}

fn print_schema(matches: &ArgMatches) -> anyhow::Result<()> {
    let handle = match required(matches, "document")? {
        name if name == TripRequest::NAME => TripRequest::schema()?,
        name if name == ItineraryResult::NAME => ItineraryResult::schema()?,
        _ => Catalog::schema()?,
    };
    println!("{}", handle.to_pretty_string()?);
    Ok(())
}

fn compute_and_emit(request: &TripRequest, matches: &ArgMatches) -> anyhow::Result<()> {
    let result = match planner()?.plan(request) {
        Ok(result) => result,
        Err(e) => {
            error!("Itinerary computation failed: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Computed {} day itinerary, total cost {:.2}",
        result.total_duration, result.total_cost
    );

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("text") => println!("{}", result.summary()),
        _ => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

pub(crate) fn selection_from(matches: &ArgMatches) -> anyhow::Result<TripSelection> {
    Ok(TripSelection {
        source_state: matches
            .get_one::<String>("from")
            .cloned()
            .unwrap_or_default(),
        destination_state: required(matches, "to")?.to_string(),
        sites: matches
            .get_many::<String>("site")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        month: required(matches, "month")?.to_string(),
        total_days: *matches
            .get_one::<i64>("days")
            .ok_or_else(|| anyhow!("--days is required"))?,
        transport: required(matches, "transport")?.to_string(),
        accommodation: required(matches, "stay")?.to_string(),
    })
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument `{}`", id))
}
