use clap::Parser;
use listatron::{cli, config, error, export, forms, sorting};
use cli::{Cli, Commands};
use config::Config;
use error::{ListatronError, Result};
use std::path::{Path, PathBuf};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_target(false)
        .init();
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(ListatronError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sort { input, output } => {
            println!("🚀 LISTATRON 505 - ordenar\n");

            println!("[1/2] Leyendo {}...", input.display());
            let bytes = read_input(&input)?;
            let report = sorting::sort_export(&bytes)?;
            println!("✔ Total pares: {}\n", report.total_qty);

            for summary in report.tables.summaries() {
                println!(
                    "  {:<6} {:>8} pares  {:>4} refes",
                    summary.category, summary.total, summary.rows
                );
            }
            if report.dropped_rows > 0 {
                println!("  ({} filas sin cantidad numérica)", report.dropped_rows);
            }

            println!("\n[2/2] Guardando...");
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let path = export::export_sorted(&report, &output)?;
            println!("✔ {}", path.display());
        }

        Commands::Forms { clients, template, output, no_zip, no_files } => {
            println!("📝 LISTATRON 505 - formularios\n");

            println!("[1/2] Llenando formularios...");
            let clients_bytes = read_input(&clients)?;
            let template_bytes = read_input(&template)?;
            let config = Config::load()?;
            let documents = forms::fill_forms(&clients_bytes, &template_bytes, &config)?;

            if documents.is_empty() {
                println!("La lista no tiene clientes, no hay nada que llenar");
                return Ok(());
            }
            println!("✔ {} página(s)\n", documents.len());

            println!("[2/2] Guardando...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let options = export::FormsOutput {
                files: !no_files,
                archive: !no_zip,
            };
            for path in export::export_forms(&documents, &output_dir, options)? {
                println!("✔ {}", path.display());
            }
        }

        Commands::Config { show, template_sheet, client_sheet } => {
            let mut config = Config::load_or_default();
            let changed = template_sheet.is_some() || client_sheet.is_some();

            if let Some(sheet) = template_sheet {
                config.template_sheet = sheet;
            }
            if let Some(sheet) = client_sheet {
                config.client_sheet = Some(sheet);
            }
            if changed {
                config.form_layout()?;
                config.save()?;
                println!("✔ Configuración guardada");
            }

            if show || !changed {
                println!("Configuración: {}", Config::config_path()?.display());
                println!("  Hoja de plantilla: {}", config.template_sheet);
                println!(
                    "  Hoja de clientes: {}",
                    config.client_sheet.as_deref().unwrap_or("(primera)")
                );
                println!(
                    "  Posiciones: {}",
                    if config.slot_layout.is_some() { "personalizadas" } else { "por defecto" }
                );
            }
        }
    }

    Ok(())
}
