//! trophic-cascade: print a five-tier energy transfer cascade as a table or as
//! a diagram graph (JSON) for an external layout engine.

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, Level};

use trophic_cascade::config::CascadeConfig;
use trophic_cascade::diagram::LabelStyle;
use trophic_cascade::error::CascadeError;
use trophic_cascade::params::{FixedParameters, ParameterProvider, RandomParameters};
use trophic_cascade::report::render_report;
use trophic_cascade::session::Session;
use trophic_cascade::ChainRounding;

fn cli() -> Command {
    Command::new("trophic-cascade")
        .about("Energy transfer through five trophic tiers, Sun to Apex Predator")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("JSON config file; missing fields use defaults"),
        )
        .arg(
            Arg::new("root-energy")
                .long("root-energy")
                .value_name("ENERGY")
                .value_parser(clap::value_parser!(f64))
                .help("Energy delivered by the Sun (static mode)"),
        )
        .arg(
            Arg::new("efficiencies")
                .long("efficiencies")
                .value_name("PERCENT")
                .value_delimiter(',')
                .value_parser(clap::value_parser!(f64))
                .help("Four transfer efficiencies in percent, e.g. 20,20,20,12.5"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .action(ArgAction::SetTrue)
                .help("Draw root energy and efficiencies at random"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .help("Seed for reproducible random cascades (implies --random)"),
        )
        .arg(
            Arg::new("rounding")
                .long("rounding")
                .value_parser(["exact", "per-level"])
                .help("Carry fractional energy forward (exact) or round at every level"),
        )
        .arg(
            Arg::new("unit")
                .long("unit")
                .value_name("UNIT")
                .help("Energy unit shown on labels"),
        )
        .arg(
            Arg::new("reveal")
                .long("reveal")
                .action(ArgAction::SetTrue)
                .help("Show transfer efficiencies"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the diagram graph as JSON instead of a table"),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .action(ArgAction::SetTrue)
                .help("Read actions from stdin: r = regenerate, v = reveal, q = quit"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Debug logging"),
        )
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn build_config(matches: &ArgMatches) -> Result<CascadeConfig, CascadeError> {
    let mut config = CascadeConfig::load_or_default(matches.get_one::<String>("config").map(Path::new))?;

    if let Some(root) = matches.get_one::<f64>("root-energy") {
        config.root_energy = *root;
    }
    if let Some(values) = matches.get_many::<f64>("efficiencies") {
        let values: Vec<f64> = values.copied().collect();
        if values.len() != config.efficiencies_percent.len() {
            return Err(CascadeError::invalid("efficiencies", values.len() as f64, "expected four values"));
        }
        config.efficiencies_percent.copy_from_slice(&values);
    }
    if let Some(rounding) = matches.get_one::<String>("rounding") {
        config.rounding = match rounding.as_str() {
            "per-level" => ChainRounding::PerLevel,
            _ => ChainRounding::Exact,
        };
    }
    if let Some(unit) = matches.get_one::<String>("unit") {
        config.energy_unit = unit.clone();
    }
    Ok(config)
}

fn build_provider(matches: &ArgMatches, config: &CascadeConfig) -> Result<Box<dyn ParameterProvider>, CascadeError> {
    let wants_random = matches.get_flag("random")
        || matches.get_flag("interactive")
        || matches.get_one::<u64>("seed").is_some();
    if !wants_random {
        return Ok(Box::new(FixedParameters::new(config.static_params()).with_rounding(config.rounding)));
    }

    let provider = match matches.get_one::<u64>("seed") {
        Some(seed) => RandomParameters::from_seed(*seed, config.random)?,
        None => RandomParameters::from_os_rng(config.random)?,
    };
    Ok(Box::new(provider.with_rounding(config.rounding)))
}

fn show(session: &Session, config: &CascadeConfig, json: bool) {
    if json {
        let diagram = session.diagram(&LabelStyle::with_unit(config.energy_unit.clone()));
        match diagram.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("trophic-cascade: failed to encode diagram: {}", e),
        }
    } else {
        print!("{}", render_report(session.cascade(), session.is_revealed(), &config.energy_unit));
    }
}

fn run_interactive(
    mut session: Session,
    provider: &mut dyn ParameterProvider,
    config: &CascadeConfig,
    json: bool,
) -> Result<(), CascadeError> {
    show(&session, config, json);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("[r]egenerate, re[v]eal, [q]uit > ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("trophic-cascade: failed to read input: {}", e);
                break;
            }
        }

        match line.trim() {
            "r" | "regenerate" => session = session.regenerate(provider)?,
            "v" | "reveal" => session = session.reveal(),
            "q" | "quit" => break,
            "" => continue,
            other => {
                eprintln!("unknown action '{}'", other);
                continue;
            }
        }
        show(&session, config, json);
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), CascadeError> {
    let config = build_config(matches)?;
    debug!(?config, "resolved config");

    let mut provider = build_provider(matches, &config)?;
    let mut session = Session::start(provider.as_mut())?;
    if matches.get_flag("reveal") {
        session = session.reveal();
    }

    let json = matches.get_flag("json");
    if matches.get_flag("interactive") {
        run_interactive(session, provider.as_mut(), &config, json)
    } else {
        show(&session, &config, json);
        Ok(())
    }
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("trophic-cascade: {}", e);
        std::process::exit(2);
    }
}
