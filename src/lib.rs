//! cvpress
//!
//! Builds a print-ready resume PDF from a structured profile record. The
//! pipeline is strictly sequential: load the record from JSON, render it to
//! a styled HTML document, and export that document through a headless
//! Chrome instance.
//!
//! # Features
//!
//! - **CDP Backend** (default): prints the document via Chrome DevTools
//!   Protocol using headless Chrome
//! - **Content-driven layout**: optional sections disappear when their
//!   backing lists are empty
//! - **Central escaping**: every interpolated text field is HTML-escaped in
//!   one place
//!
//! # Example
//!
//! ```no_run
//! use cvpress::BuildConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BuildConfig::default();
//! let path = cvpress::build(&config)?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub mod error;
pub use error::{Error, Result};

pub mod profile;
pub mod render;

#[cfg(feature = "cdp")]
pub mod cdp;

/// Physical page geometry and export behavior handed to the exporter
///
/// The defaults reproduce the site's fixed build configuration: A4 paper,
/// 20mm margins on all sides, and background painting enabled since the
/// stylesheet relies on it.
#[derive(Debug, Clone)]
pub struct PageSetup {
    /// Paper width in inches
    pub paper_width_in: f64,
    /// Paper height in inches
    pub paper_height_in: f64,
    /// Margin in inches, applied to all four sides
    pub margin_in: f64,
    /// Whether the engine paints background colors and graphics
    pub print_background: bool,
    /// How long to let layout settle after navigation, in milliseconds
    pub settle_ms: u64,
    /// Timeout for content loads in milliseconds
    pub timeout_ms: u64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            // A4
            paper_width_in: 8.27,
            paper_height_in: 11.69,
            // 20mm
            margin_in: 20.0 / 25.4,
            print_background: true,
            settle_ms: 500,
            timeout_ms: 30_000,
        }
    }
}

/// Configuration for one build invocation
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Path to the profile record
    pub input: PathBuf,
    /// Destination for the exported document
    pub output: PathBuf,
    /// Page geometry for the export
    pub page: PageSetup,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("resume.json"),
            output: PathBuf::from("resume/resume.pdf"),
            page: PageSetup::default(),
        }
    }
}

/// Core trait for document exporter implementations
pub trait Exporter {
    /// Acquire a rendering engine instance configured for the given page setup
    fn new(page: PageSetup) -> Result<Self>
    where
        Self: Sized;

    /// Load the rendered document, wait for it to settle, and produce the
    /// paginated output bytes
    fn export(&mut self, document: &str) -> Result<Vec<u8>>;

    /// Release the engine instance and clean up resources
    fn close(self) -> Result<()>;
}

/// Create an exporter with the default backend
#[cfg(feature = "cdp")]
pub fn new_exporter(page: PageSetup) -> Result<impl Exporter> {
    cdp::CdpExporter::new(page)
}

/// Run the full pipeline: load, render, export, write.
///
/// The engine instance is released unconditionally after the export attempt;
/// only then does an export failure propagate. Nothing is retried and no
/// partial output is written.
#[cfg(feature = "cdp")]
pub fn build(config: &BuildConfig) -> Result<PathBuf> {
    let record = profile::Profile::from_path(&config.input)?;
    info!("loaded profile record for {}", record.basics.name);

    let document = render::render(&record)?;
    debug!("rendered {} bytes of markup", document.len());

    let mut exporter = cdp::CdpExporter::new(config.page.clone())?;
    let exported = exporter.export(&document);
    // Release the engine before surfacing any export failure
    let closed = exporter.close();
    let pdf = exported?;
    closed?;

    write_output(&config.output, &pdf)?;
    info!("wrote {} bytes to {}", pdf.len(), config.output.display());
    Ok(config.output.clone())
}

/// Render the profile to markup and write it to the configured output path
/// instead of exporting a PDF. Available without the `cdp` feature; useful
/// for inspecting the intermediate document and for Chrome-free tests.
pub fn render_to_file(config: &BuildConfig) -> Result<PathBuf> {
    let record = profile::Profile::from_path(&config.input)?;
    let document = render::render(&record)?;
    debug!("rendered {} bytes of markup", document.len());
    write_output(&config.output, document.as_bytes())?;
    info!("wrote markup to {}", config.output.display());
    Ok(config.output.clone())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Export(format!("{}: {}", parent.display(), e)))?;
        }
    }
    fs::write(path, bytes).map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))
}
