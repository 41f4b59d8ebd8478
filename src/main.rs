use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use prot2svg::{
    parse_color_table, parse_feature_table, render_with_palette, Error, Palette, RenderOptions,
    Theme,
};

#[derive(Parser)]
#[command(name = "prot2svg")]
#[command(about = "Render protein domain annotation tables as SVG diagrams", long_about = None)]
struct Args {
    /// Feature table CSV with columns protein_id, domain, start, stop.
    #[arg(short = 'f', long = "features", value_name = "FILE")]
    features: PathBuf,

    /// Color table CSV with columns domain, color.
    #[arg(short = 'c', long = "colors", value_name = "FILE")]
    colors: PathBuf,

    /// Write the SVG to this FILE instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Scale bar length in amino acids.
    #[arg(long = "scalebar", value_name = "N", default_value_t = 500.0)]
    scalebar: f64,

    /// Diagram title, drawn at the top left.
    #[arg(short = 't', long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Draw a standalone legend instead of the domain diagram.
    #[arg(long = "legend")]
    legend: bool,

    /// Built-in palette to draw with (light or dark).
    #[arg(long = "theme", value_name = "NAME", default_value = "light")]
    theme: String,

    /// Load the palette from a JSON file (overrides --theme).
    #[arg(long = "palette", value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let features = parse_feature_table(&fs::read_to_string(&args.features)?)?;
    let colors = parse_color_table(&fs::read_to_string(&args.colors)?)?;
    info!(
        "{} feature records, {} proteins, {} color assignments",
        features.records.len(),
        features.protein_ids().len(),
        colors.assignments.len()
    );

    let palette = match &args.palette {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => {
            let theme = Theme::from_name(&args.theme)
                .ok_or_else(|| Error::UnknownTheme(args.theme.clone()))?;
            Palette::from_theme(theme)
        }
    };

    let options = RenderOptions {
        scalebar: args.scalebar,
        title: args.title.clone(),
        legend: args.legend,
    };

    let rendered = render_with_palette(&features, &colors, &options, &palette)?;
    for warning in &rendered.warnings {
        warn!("{}", warning);
    }

    match &args.out {
        Some(path) => fs::write(path, &rendered.svg)?,
        None => println!("{}", rendered.svg),
    }
    Ok(())
}
