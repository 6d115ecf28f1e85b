// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the medsearch command-line interface.
//!
//! Four subcommands, one per engine: `query` prints the fuzzy query a search
//! box would send, `pages` renders a pagination control, `url` builds the
//! full search index request, and `wizard` replays a JSON script of form
//! actions through the PARs upload flow and prints the combined upload.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use medsearch::wizard::pars::ParFlow;
use medsearch::{DocType, FuzzyStyle, SortOrder, TerritoryType};

#[derive(Parser)]
#[command(
    name = "medsearch",
    about = "Form wizard and fuzzy search query tooling for medicines information portals",
    version
)]
pub struct Cli {
    /// Log verbosity (overridden by RUST_LOG)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize search text into a fuzzy index query
    Query {
        /// Search text as typed by the user
        text: String,

        /// Maximum edit distance per word
        #[arg(short, long, default_value = "1")]
        fuzziness: u8,

        /// Score multiplier for exact matches
        #[arg(short, long, default_value = "4")]
        boost: f64,

        /// How fuzzy and exact terms are combined
        #[arg(long, value_enum, default_value = "adjacent")]
        style: StyleArg,
    },

    /// Show the page numbers a pagination control renders
    Pages {
        /// Total number of results
        #[arg(short, long)]
        count: usize,

        /// Results per page
        #[arg(short = 's', long, default_value = "10")]
        page_size: usize,

        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Build the search index request URL
    Url {
        /// Search text as typed by the user
        text: String,

        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// JSON config file (defaults to AZURE_SEARCH_* environment variables)
        #[arg(long)]
        config: Option<String>,

        /// Restrict to document types (repeatable: spc, pil, par)
        #[arg(long = "doc-type", value_parser = parse_doc_type)]
        doc_types: Vec<DocType>,

        /// Restrict to territories (repeatable: UK, GB, NI)
        #[arg(long = "territory", value_parser = parse_territory)]
        territories: Vec<TerritoryType>,

        /// Exact substance name
        #[arg(long)]
        substance: Option<String>,

        /// Exact product name
        #[arg(long)]
        product: Option<String>,

        /// Result ordering: relevance, a-z, z-a
        #[arg(long, default_value = "relevance", value_parser = parse_sort)]
        sort: SortOrder,
    },

    /// Replay a JSON script of wizard actions through the PARs upload flow
    Wizard {
        /// Path to a JSON array of actions
        script: String,

        /// Which upload flow to start
        #[arg(long, value_enum, default_value = "new")]
        flow: FlowArg,

        /// Skip step validation
        #[arg(long)]
        no_validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Adjacent,
    Disjunction,
}

impl From<StyleArg> for FuzzyStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Adjacent => FuzzyStyle::Adjacent,
            StyleArg::Disjunction => FuzzyStyle::Disjunction,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FlowArg {
    New,
    Update,
}

impl From<FlowArg> for ParFlow {
    fn from(arg: FlowArg) -> Self {
        match arg {
            FlowArg::New => ParFlow::New,
            FlowArg::Update => ParFlow::Update,
        }
    }
}

fn parse_doc_type(s: &str) -> Result<DocType, String> {
    s.parse()
}

fn parse_territory(s: &str) -> Result<TerritoryType, String> {
    s.parse()
}

fn parse_sort(s: &str) -> Result<SortOrder, String> {
    s.parse()
}
