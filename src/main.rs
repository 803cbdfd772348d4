mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use clipforge::{catalog, pipeline, report::RunReport};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults from the verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "clipforge=debug,clipforge_av=debug".to_string()
        } else {
            "clipforge=info,clipforge_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::List => list_items(cli.config.as_deref()),
        Commands::Run { item, keep_scratch } => run_item(
            &item,
            cli.config.as_deref(),
            &cli.output_root,
            keep_scratch,
        ),
        Commands::RunAll => run_all(cli.config.as_deref(), &cli.output_root),
        Commands::CheckTools => check_tools(),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_catalog(path.as_deref())
        }
    }
}

fn list_items(config_path: Option<&Path>) -> Result<()> {
    let catalog = catalog::load_catalog_or_builtin(config_path)?;

    println!("Catalogued items: {}", catalog.items.len());
    for item in &catalog.items {
        let source = match &item.source {
            catalog::Source::Archive { url, .. } => format!("archive {url}"),
            catalog::Source::Hosted { url, .. } => format!("hosted {url}"),
        };
        println!(
            "  {:<12} {:<50} -> {}",
            item.name,
            source,
            item.final_path(Path::new(".")).display()
        );
    }

    Ok(())
}

fn run_item(
    name: &str,
    config_path: Option<&Path>,
    output_root: &Path,
    keep_scratch: bool,
) -> Result<()> {
    let catalog = catalog::load_catalog_or_builtin(config_path)?;

    let Some(item) = catalog.find(name) else {
        let known: Vec<_> = catalog.items.iter().map(|i| i.name.as_str()).collect();
        anyhow::bail!("unknown item '{}'; known items: {}", name, known.join(", "));
    };

    println!("Running item: {}", item.name);
    let final_path = pipeline::ItemPipeline::new(item, output_root)
        .keep_scratch(keep_scratch)
        .run()?;

    println!("Done! Final asset: {}", final_path.display());
    Ok(())
}

fn run_all(config_path: Option<&Path>, output_root: &Path) -> Result<()> {
    let catalog = catalog::load_catalog_or_builtin(config_path)?;

    println!("Running all {} catalogued items...", catalog.items.len());
    let mut report = RunReport::new();

    for item in &catalog.items {
        println!("\n{}", "=".repeat(60));
        println!("Running item: {}", item.name);
        println!("{}", "=".repeat(60));

        match pipeline::ItemPipeline::new(item, output_root).run() {
            Ok(path) => {
                println!("✓ {} complete: {}", item.name, path.display());
                report.record_success(&item.name);
            }
            Err(e) => {
                eprintln!("✗ {} failed: {e:#}", item.name);
                report.record_failure(&item.name, format!("{e:#}"));
            }
        }
    }

    println!("\n{report}");

    if report.all_ok() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = clipforge_av::check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version.lines().next().unwrap_or(""));
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them to enable all pipelines.");
    }

    Ok(())
}

fn validate_catalog(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating catalog: {:?}", p);
            let catalog = catalog::load_catalog(p)?;
            println!("✓ Catalog is valid");
            println!("  Items: {}", catalog.items.len());
        }
        None => {
            println!("No catalog file specified, using the built-in table");
            let catalog = catalog::builtin();
            println!("  Items: {}", catalog.items.len());
        }
    }

    Ok(())
}
