use std::path::PathBuf;
use std::process;

use clap::Parser;

use cvpress::{BuildConfig, Result};

/// Build a print-ready resume PDF from the profile record.
#[derive(Parser, Debug)]
#[command(name = "cvpress", version, about)]
struct Cli {
    /// Path to the profile record
    #[arg(long, default_value = "resume.json")]
    input: PathBuf,

    /// Destination for the exported document
    #[arg(long, default_value = "resume/resume.pdf")]
    output: PathBuf,

    /// Write the rendered HTML instead of exporting a PDF
    #[arg(long)]
    html_only: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = BuildConfig {
        input: cli.input,
        output: cli.output,
        ..Default::default()
    };

    let result = if cli.html_only {
        cvpress::render_to_file(&config)
            .map(|path| format!("Resume HTML written to {}", path.display()))
    } else {
        build_pdf(&config)
    };

    match result {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(feature = "cdp")]
fn build_pdf(config: &BuildConfig) -> Result<String> {
    let path = cvpress::build(config)?;
    Ok(format!("Resume PDF built successfully at {}", path.display()))
}

#[cfg(not(feature = "cdp"))]
fn build_pdf(_config: &BuildConfig) -> Result<String> {
    Err(cvpress::Error::Export(
        "this build has no PDF backend; rerun with --html-only or enable the cdp feature".into(),
    ))
}
