// ABOUTME: Main entry point for the artifact-showcase program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the slideshow on a local HTTP server
    Serve(ServeArgs),

    /// Export the slideshow as static HTML pages, one per slide
    Export(ExportArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Inline local CSS/JS into the page
    Embed,
    /// Reference CSS/JS by path
    Link,
}

#[derive(Args)]
struct AssetArgs {
    /// CSS files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    css: Option<Vec<String>>,

    /// JavaScript files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    js: Option<Vec<String>>,

    /// Mode for CSS/JS: 'embed' to embed content or 'link' to reference
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

impl AssetArgs {
    fn embed_resources(&self) -> Option<bool> {
        self.mode.map(|mode| matches!(mode, Mode::Embed))
    }
}

#[derive(Args)]
struct ServeArgs {
    /// Path or URL of the content descriptor
    #[arg(short, long)]
    content: Option<String>,

    /// Port for the local web server
    #[arg(short, long)]
    port: Option<u16>,

    /// Reload the content file when it changes
    #[arg(short, long)]
    watch: bool,

    #[command(flatten)]
    assets: AssetArgs,
}

#[derive(Args)]
struct ExportArgs {
    /// Path or URL of the content descriptor
    #[arg(short, long)]
    content: Option<String>,

    /// Output directory for the generated pages
    #[arg(short, long)]
    output: PathBuf,

    /// Base name for the per-slide pages
    #[arg(long)]
    base_name: Option<String>,

    #[command(flatten)]
    assets: AssetArgs,
}

fn run(command: Commands) -> anyhow::Result<()> {
    let config = showcase::Config::from_env().context("Invalid configuration")?;

    match command {
        Commands::Serve(args) => {
            let embed = args.assets.embed_resources();
            let serve_config = config.get_serve_config(
                args.content,
                args.port,
                args.watch,
                args.assets.css,
                args.assets.js,
                embed,
            )?;
            showcase::serve(serve_config)?;
        }
        Commands::Export(args) => {
            let embed = args.assets.embed_resources();
            let export_config = config.get_export_config(
                args.content,
                args.output,
                args.base_name,
                args.assets.css,
                args.assets.js,
                embed,
            )?;
            let files = showcase::export_slides(&export_config)?;
            println!(
                "Exported {} pages to {:?}",
                files.len(),
                export_config.output_dir
            );
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("No command specified. Use --help for usage information.");
        return;
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
