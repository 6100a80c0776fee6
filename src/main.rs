//! icon-uri CLI
//!
//! Usage:
//!   icon-uri --manifest <FILE> [--config <FILE>] <COMMAND>
//!
//! Commands:
//!   list      List icon names, optionally filtered by folder
//!   resolve   Print an icon's data URI (`--url`/`--bare` override the config)
//!   style     Print a background rule for an icon
//!
//! Warnings are logged to stderr; set `RUST_LOG` to change verbosity.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use icon_uri::{
    ColorValue, IconConfig, IconRegistry, IconRequest, IconResolver, IconWarning, StyleOptions,
};

#[derive(Parser)]
#[command(name = "icon-uri")]
#[command(about = "Inline SVG icons as CSS background images")]
struct Cli {
    /// Icon manifest (JSON) produced by the SVG compile step
    #[arg(short, long)]
    manifest: PathBuf,

    /// Resolver configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List icon names in registry order
    List {
        /// Folder to list; root icons when omitted
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Print an icon's data URI
    Resolve {
        #[command(flatten)]
        icon: IconArgs,

        /// Wrap the data string in url(...), overriding the config
        #[arg(long, conflicts_with = "bare")]
        url: bool,

        /// Print the bare data string, overriding the config
        #[arg(long)]
        bare: bool,
    },

    /// Print a background rule for an icon
    Style {
        #[command(flatten)]
        icon: IconArgs,

        /// background-position value
        #[arg(long)]
        position: Option<String>,

        /// background-size value
        #[arg(long)]
        size: Option<String>,

        /// background-repeat value
        #[arg(long)]
        repeat: Option<String>,

        /// Rule selector; defaults to `.icon-<name>`
        #[arg(long)]
        selector: Option<String>,
    },
}

#[derive(Args)]
struct IconArgs {
    /// Icon name
    name: String,

    /// Color for fill and stroke (`none` keeps embedded colors)
    #[arg(long)]
    color: Option<String>,

    /// Fill color override
    #[arg(long)]
    fill: Option<String>,

    /// Stroke color override
    #[arg(long)]
    stroke: Option<String>,
}

impl IconArgs {
    fn to_request(&self) -> IconRequest {
        IconRequest {
            icon: self.name.clone(),
            color: self.color.as_deref().map(ColorValue::parse),
            fill_color: self.fill.as_deref().map(ColorValue::parse),
            stroke_color: self.stroke.as_deref().map(ColorValue::parse),
            emit_url: None,
        }
    }
}

/// `--url` / `--bare` when given, otherwise the config decides.
fn url_override(url: bool, bare: bool) -> Option<bool> {
    match (url, bare) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = fs::read_to_string(&cli.manifest)
        .map_err(|e| format!("reading manifest '{}': {e}", cli.manifest.display()))?;
    let registry = IconRegistry::from_manifest_json(&manifest)?;

    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("reading config '{}': {e}", path.display()))?;
            IconConfig::from_json(&json)?
        }
        None => IconConfig::default(),
    };

    let resolver = IconResolver::new(&registry, config);
    println!("{}", execute(&cli.command, &resolver)?);
    Ok(())
}

/// Runs one command and returns its output.
fn execute(command: &Command, resolver: &IconResolver<'_>) -> Result<String, IconWarning> {
    match command {
        Command::List { folder } => Ok(resolver.list_icons(folder.as_deref()).join("\n")),
        Command::Resolve { icon, url, bare } => {
            let request = IconRequest {
                emit_url: url_override(*url, *bare),
                ..icon.to_request()
            };
            Ok(resolver.resolve(&request)?.value)
        }
        Command::Style {
            icon,
            position,
            size,
            repeat,
            selector,
        } => {
            let mut options = StyleOptions::new();
            options.position = position.as_deref().map(Into::into);
            options.size = size.as_deref().map(Into::into);
            options.repeat = repeat.as_deref().map(Into::into);

            let style = resolver.compose_style(&icon.to_request(), &options)?;
            let selector = selector
                .clone()
                .unwrap_or_else(|| format!(".icon-{}", icon.name));
            Ok(style.to_rule(&selector))
        }
    }
}
