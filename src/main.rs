//! # Linebar CLI
//!
//! Command-line interface for linear barcode encoding.
//!
//! ## Usage
//!
//! ```bash
//! # List supported symbologies
//! linebar list
//!
//! # Print the module pattern and display text
//! linebar encode --symbology ean13 590123412345
//!
//! # JSON output, failing on unsupported characters
//! linebar encode --strict --json "HELLO-39" -s code39
//!
//! # Save as PNG
//! linebar encode --png barcode.png --module-width 3 "Hello"
//!
//! # Start the HTTP API
//! linebar serve --listen 0.0.0.0:8080
//! ```
//!
//! Set `RUST_LOG=linebar=debug` for encoder diagnostics.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use linebar::{
    CharsetPolicy, LinebarError, Symbology, encode_with_policy,
    render::{self, RenderConfig, TextSize},
    server::{self, ServerConfig},
};

/// Linebar - Linear barcode encoder
#[derive(Parser, Debug)]
#[command(name = "linebar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text as a barcode
    Encode {
        /// Text or digits to encode
        text: String,

        /// Symbology: code128, ean13, upca, code39
        #[arg(short, long, default_value = "code128")]
        symbology: Symbology,

        /// Fail on unsupported characters instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also render the barcode to a PNG file
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// Pixels per module (PNG only)
        #[arg(long, default_value = "2")]
        module_width: u32,

        /// Bar height in pixels (PNG only)
        #[arg(long, default_value = "100")]
        height: u32,

        /// Quiet zone in pixels (PNG only)
        #[arg(long, default_value = "10")]
        margin: u32,

        /// Omit the display text beneath the bars (PNG only)
        #[arg(long)]
        no_text: bool,

        /// Use the large font for the display text (PNG only)
        #[arg(long)]
        large_text: bool,

        /// Bar color (PNG only)
        #[arg(long, default_value = "#000000")]
        fg: String,

        /// Background color (PNG only)
        #[arg(long, default_value = "#ffffff")]
        bg: String,
    },

    /// List supported symbologies
    List,

    /// Start the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linebar=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LinebarError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            text,
            symbology,
            strict,
            json,
            png,
            module_width,
            height,
            margin,
            no_text,
            large_text,
            fg,
            bg,
        } => {
            let policy = if strict {
                CharsetPolicy::Reject
            } else {
                CharsetPolicy::Skip
            };
            let result = encode_with_policy(&text, symbology, policy)?;

            if json {
                let out = serde_json::to_string_pretty(&result)
                    .map_err(|e| LinebarError::Config(format!("JSON output failed: {}", e)))?;
                println!("{}", out);
            } else {
                println!("{}", result.pattern);
                println!("{}", result.display_text);
            }

            if let Some(png_path) = png {
                let config = RenderConfig {
                    module_width,
                    bar_height: height,
                    margin,
                    show_text: !no_text,
                    text_size: if large_text { TextSize::Large } else { TextSize::Small },
                    foreground: render::parse_color(&fg)?,
                    background: render::parse_color(&bg)?,
                };
                let png_bytes = render::render_png(&result, &config)?;
                std::fs::write(&png_path, png_bytes)?;
                eprintln!("Saved to {}", png_path.display());
            }
        }

        Commands::List => {
            println!("Available symbologies:");
            for symbology in Symbology::ALL {
                println!("  {:<8} {}", symbology.name(), symbology.label());
            }
        }

        Commands::Serve { listen } => {
            let config = ServerConfig {
                listen_addr: listen,
                ..ServerConfig::default()
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
