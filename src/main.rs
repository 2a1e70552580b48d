use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use uac_portal::application::session::FilterSession;
use uac_portal::cli::commands::{Cli, Commands};
use uac_portal::domain::values::agreement_status::AgreementStatus;
use uac_portal::domain::values::agreement_type::AgreementType;
use uac_portal::domain::values::filter_category::FilterCategory;
use uac_portal::domain::values::region::Region;
use uac_portal::infrastructure::logging;
use uac_portal::UacPortal;

fn main() {
    let cli = Cli::parse();
    logging::init(std::env::var("UAC_LOG").ok().as_deref());
    let seed_path = std::env::var("UAC_SEED").ok().map(PathBuf::from);

    let portal = match UacPortal::new(seed_path.as_deref()) {
        Ok(portal) => portal,
        Err(e) => {
            eprintln!("Error initializing portal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&portal, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(portal: &UacPortal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::List {
            query,
            types,
            domains,
            countries,
            status,
        } => {
            let mut session = portal.session();
            if let Some(q) = query {
                session.set_query(q);
            }
            for t in &types {
                let t: AgreementType = t.parse()?;
                select(&mut session, FilterCategory::Types, t.label());
            }
            for d in &domains {
                select(&mut session, FilterCategory::Domains, d);
            }
            for c in &countries {
                select(&mut session, FilterCategory::Countries, c);
            }
            for s in &status {
                let s: AgreementStatus = s.parse()?;
                select(&mut session, FilterCategory::Status, s.label());
            }
            print_json(session.filtered())?;
        }
        Commands::Show { id } => {
            let agreement = portal.find_by_id(&id)?;
            print_json(&agreement)?;
        }
        Commands::Stats => {
            print_json(&portal.report())?;
        }
        Commands::Partners { region } => {
            let region: Option<Region> = region.map(|r| r.parse()).transpose()?;
            print_json(&portal.partners().overview(region))?;
        }
        Commands::Facets => {
            print_json(&portal.facets(&Default::default()))?;
        }
    }
    Ok(())
}

/// Repeated flags select a value once rather than toggling it back off.
fn select(session: &mut FilterSession, category: FilterCategory, value: &str) {
    if !session.selection().is_selected(category, value) {
        session.toggle_filter_value(category, value);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
