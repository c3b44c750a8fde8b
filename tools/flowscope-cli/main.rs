use clap::Parser;
use flowscope::prelude::*;
use std::process::ExitCode;

/// Explore a test-inventory dump: print metadata summaries and connectivity
/// reports for each test component.
#[derive(Parser)]
#[command(name = "flowscope-cli", version, about)]
struct Cli {
    /// Path to the inventory JSON dump exported by the test framework
    inventory: String,

    /// Restrict exploration to the named test component
    #[arg(short, long)]
    test: Option<String>,

    /// Print a provenance report for every component, not only the roots
    #[arg(short, long)]
    all: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let inventory = match TestInventory::from_file(&cli.inventory) {
        Ok(inventory) => inventory,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for component in inventory.tests {
        if let Some(filter) = &cli.test {
            if &component.name != filter {
                continue;
            }
        }

        let definition = match component.into_component() {
            Ok(definition) => definition,
            Err(err) => {
                eprintln!("Error: {err}");
                failed = true;
                continue;
            }
        };

        println!("{}", SummaryFormatter::render_summary(&definition));

        let tree = Resolver::new().build_and_resolve(&definition);
        if cli.all {
            for (_, record) in tree.iter_pre_order() {
                println!("[{}]", record.name);
                println!("{}", ReportFormatter::render_report(record));
            }
        } else {
            println!("{}", ReportFormatter::render_report(tree.root()));
        }

        if !tree.root().errors.is_empty() {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
