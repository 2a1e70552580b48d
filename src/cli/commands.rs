use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uac-portal", about = "University cooperation agreements browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List agreements matching the given filters
    List {
        /// Free-text search on title, country and domain
        #[arg(long, short)]
        query: Option<String>,
        /// Agreement type (Accord cadre, Convention, Coopération); repeatable
        #[arg(long = "type")]
        types: Vec<String>,
        /// Domain; repeatable
        #[arg(long = "domain")]
        domains: Vec<String>,
        /// Country; repeatable
        #[arg(long = "country")]
        countries: Vec<String>,
        /// Status (En cours, Expiré, Reconduction tacite); repeatable
        #[arg(long)]
        status: Vec<String>,
    },
    /// Show one agreement with its documents
    Show {
        /// Agreement ID
        id: String,
    },
    /// Show aggregate statistics
    Stats,
    /// List partners, optionally for one region, with region totals
    Partners {
        /// Region (europe, amerique, asie)
        #[arg(long)]
        region: Option<String>,
    },
    /// List the values each filter can take
    Facets,
}
