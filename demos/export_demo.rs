//! Basic demo: render the bundled sample profile and export it to PDF

use cvpress::BuildConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cvpress - Export Demo\n");

    let config = BuildConfig {
        output: "resume/demo.pdf".into(),
        ..Default::default()
    };

    println!("Building with config:");
    println!("  Input:  {}", config.input.display());
    println!("  Output: {}", config.output.display());
    println!(
        "  Paper:  {:.2}in x {:.2}in, margin {:.2}in\n",
        config.page.paper_width_in, config.page.paper_height_in, config.page.margin_in
    );

    let path = cvpress::build(&config)?;
    println!("PDF written to: {}", path.display());

    Ok(())
}
