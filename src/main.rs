use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cut_planner_rs::cli::{Cli, Command, ExportArgs, ExportFormat, PlanArgs};
use cut_planner_rs::config::PlannerConfig;
use cut_planner_rs::error::Result;
use cut_planner_rs::interface::{
    collect_plan_request, display_plan_record, export_grocery_csv, export_plan_json,
};
use cut_planner_rs::models::Catalog;
use cut_planner_rs::planner::generate_week_plan;
use cut_planner_rs::state::{load_catalog, load_store, save_store};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PlannerConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(cli.catalog.as_deref(), &cli.store, &args, &config),
        Command::Show { plan } => cmd_show(&cli.store, plan.as_deref(), &config),
        Command::Export { format } => cmd_export(&cli.store, &format, &config),
    }
}

/// Compute, store and display a new plan.
fn cmd_plan(
    catalog_path: Option<&Path>,
    store_path: &Path,
    args: &PlanArgs,
    config: &PlannerConfig,
) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        ready_to_eat = catalog.ready_to_eat.len(),
        recipes = catalog.recipes.len(),
        "loaded catalog"
    );

    let request = if args.interactive {
        collect_plan_request(&args.to_request()?)?
    } else {
        args.to_request()?
    };

    let outcome = generate_week_plan(&catalog, &request, config)?;

    let mut store = load_store(store_path, config.store_capacity)?;
    let id = store.insert(request, outcome);
    save_store(store_path, &store)?;

    if let Some(record) = store.get(&id) {
        display_plan_record(record);
    }
    println!("Saved plan {}", id);
    Ok(())
}

/// Display a stored plan.
fn cmd_show(store_path: &Path, plan: Option<&str>, config: &PlannerConfig) -> Result<()> {
    let store = load_store(store_path, config.store_capacity)?;
    display_plan_record(store.resolve(plan)?);
    Ok(())
}

/// Export a stored plan as CSV or JSON.
fn cmd_export(store_path: &Path, format: &ExportFormat, config: &PlannerConfig) -> Result<()> {
    let store = load_store(store_path, config.store_capacity)?;
    let (args, as_csv) = match format {
        ExportFormat::Csv(args) => (args, true),
        ExportFormat::Json(args) => (args, false),
    };
    let ExportArgs { plan, out } = args;
    let record = store.resolve(plan.as_deref())?;

    if as_csv {
        export_grocery_csv(record, out.as_deref())?;
    } else {
        export_plan_json(record, out.as_deref())?;
    }

    if let Some(path) = out {
        info!(path = %path.display(), "exported plan {}", record.id);
    }
    Ok(())
}
