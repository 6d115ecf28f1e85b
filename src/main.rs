use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use medsearch::wizard::pars::{validate_par_step, ParFlow, ParStep};
use medsearch::wizard::script::{replay, WizardAction};
use medsearch::{
    combine_step_data, page_count, pagination_window, FormRecord, QueryBuilder, QueryConfig,
    SearchConfig, SearchFilters, SearchRequest, Step, ValidationError,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{}", display::format_rejection(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise `-v` steps from warn to debug to trace.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "medsearch=debug",
        _ => "medsearch=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            text,
            fuzziness,
            boost,
            style,
        } => {
            let config = QueryConfig {
                fuzziness,
                exactness_boost: boost,
                style: style.into(),
            };
            println!("{}", QueryBuilder::new(config).build(&text));
        }

        Commands::Pages {
            count,
            page_size,
            page,
        } => {
            let page = page.clamp(1, page_count(count, page_size));
            let groups = pagination_window(count, page_size, page);
            println!("{}", display::format_pagination(&groups, page));
        }

        Commands::Url {
            text,
            page,
            config,
            doc_types,
            territories,
            substance,
            product,
            sort,
        } => {
            let config = match config {
                Some(path) => SearchConfig::from_file(&path)?,
                None => SearchConfig::from_env().context("no --config given")?,
            };
            let filters = SearchFilters {
                doc_types: doc_types.into_iter().collect(),
                territory_types: territories.into_iter().collect(),
                substance_name: substance,
                product_name: product,
                sort_order: sort,
            };
            let url = SearchRequest::new(text)
                .with_page(page)
                .with_filters(filters)
                .url(&config)?;
            println!("{}", url);
        }

        Commands::Wizard {
            script,
            flow,
            no_validate,
        } => run_wizard(&script, flow.into(), no_validate)?,
    }
    Ok(())
}

fn run_wizard(script: &str, flow: ParFlow, no_validate: bool) -> Result<()> {
    let text = fs::read_to_string(script).with_context(|| format!("failed to read {}", script))?;
    let actions: Vec<WizardAction<ParStep>> =
        serde_json::from_str(&text).with_context(|| format!("failed to parse {}", script))?;

    let validate = |steps: &[Step<ParStep>], index: usize, data: &FormRecord| {
        if no_validate {
            Ok::<(), ValidationError>(())
        } else {
            validate_par_step(steps, index, data)
        }
    };
    let result = replay(flow.steps(), actions, validate);

    for (i, outcome) in result.outcomes.iter().enumerate() {
        let line = match outcome {
            Ok(navigation) => display::format_navigation(navigation),
            Err(err) => display::format_rejection(&err.to_string()),
        };
        println!("{:>3}  {}", i, line);
    }
    println!();

    match result.completed {
        Some(steps) => {
            display::print_steps("SUBMITTED STEPS", &steps);
            let combined = combine_step_data(&steps);
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
        None => {
            display::print_steps("STEPS (INCOMPLETE)", &result.steps);
        }
    }
    Ok(())
}
