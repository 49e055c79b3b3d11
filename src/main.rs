mod cli;
mod config;
mod error;
mod loader;
mod model;
mod report;
mod ui;
mod validate;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use cli::{Cli, Command};
use config::RemedianConfig;
use model::{Remediation, RemediationAction, RemediationStage};
use report::PlanReport;
use ui::PlanPrinter;
use validate::RemediationValidator;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = RemedianConfig::load()?;
    if cli.strict {
        config.strict = true;
    }
    let printer = PlanPrinter::new();

    match cli.command {
        Command::Validate { file } => {
            validate_document(Path::new(&file), &config, &printer, cli.verbose)
        }
        Command::Show { file, json } => show_document(Path::new(&file), &printer, json),
        Command::Demo => run_demo(&config, &printer, cli.verbose),
    }
}

/// Strict path: parse the document, run the validator, print a verdict.
/// Exits non-zero on an invalid plan so scripts can gate on the result.
fn validate_document(
    path: &Path,
    config: &RemedianConfig,
    printer: &PlanPrinter,
    verbose: bool,
) -> Result<()> {
    let doc = loader::load_document(path)?;
    let plan = match Remediation::parse(&doc) {
        Ok(plan) => plan,
        Err(err) => {
            printer.print_invalid(&err);
            std::process::exit(1);
        }
    };

    if let Err(err) = RemediationValidator::from_config(config).validate(&plan) {
        printer.print_invalid(&err);
        std::process::exit(1);
    }

    printer.print_valid(&plan.sequence.name);
    if verbose {
        printer.print_report(&PlanReport::from_plan(&plan));
    }
    Ok(())
}

/// Lenient path: reconstruct whatever shape the document has and summarize it.
fn show_document(path: &Path, printer: &PlanPrinter, as_json: bool) -> Result<()> {
    let doc = loader::load_document(path)?;
    let plan = Remediation::from_json(&doc);
    let report = PlanReport::from_plan(&plan);
    if as_json {
        printer.print_report_json(&report);
    } else {
        printer.print_report(&report);
    }
    Ok(())
}

/// Build the built-in sample plan, validate it, and print its report.
fn run_demo(config: &RemedianConfig, printer: &PlanPrinter, verbose: bool) -> Result<()> {
    let mut plan = Remediation::new("remediation-carts", "sockshop", "carts");
    plan.stages.push(
        RemediationStage::new("production").with_actions(vec![
            RemediationAction::new("scaling", "scale up")
                .with_description("Add one replica to the carts deployment")
                .with_value(json!("1")),
            RemediationAction::new("featuretoggle", "disable promotion")
                .with_value(json!({"EnablePromotion": "off"})),
        ]),
    );

    RemediationValidator::from_config(config)
        .validate(&plan)
        .map_err(error::RemedianError::Validation)?;
    printer.print_valid(&plan.sequence.name);
    printer.print_report(&PlanReport::from_plan(&plan));

    if verbose {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}
