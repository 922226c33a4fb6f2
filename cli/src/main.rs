use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    process,
};

use anyhow::Context;
use argh::FromArgs;
use img6502::{emit, pixmap, EmitConfig, OutputMode, MAX_DIMENSION};
use log::warn;

#[derive(FromArgs)]
#[argh(description = "Convert a small image into Easy6502 screen bytes.")]
struct Args {
    #[argh(positional, description = "image to convert")]
    input: PathBuf,
    #[argh(positional, description = "file the generated text is written to")]
    output: PathBuf,
    #[argh(
        positional,
        default = "String::new()",
        description = "character flags: v (verbose), a (output assembly code)"
    )]
    options: String,
}

fn main() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("(c) {}", env!("CARGO_PKG_AUTHORS"));

    let args: Args = argh::from_env();

    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = EmitConfig {
        mode: if args.options.contains('a') {
            OutputMode::Assembly
        } else {
            OutputMode::DataTable
        },
        verbose: args.options.contains('v'),
    };

    let grid = pixmap::load(&args.input)?;

    if grid.oversize() {
        warn!(
            "maximum image size is {MAX_DIMENSION}x{MAX_DIMENSION}, but this image is {}x{}",
            grid.width(),
            grid.height()
        );
    }

    if config.verbose {
        println!("image file: {}", args.input.display());
        println!("output file: {}", args.output.display());
        println!("image width: {}, image height: {}", grid.width(), grid.height());
    }

    let file = File::create(&args.output)
        .with_context(|| format!("file open error: {}", args.output.display()))?;
    let mut out = io::BufWriter::new(file);

    emit(&grid, &config, &mut out, &mut io::stdout())
        .with_context(|| format!("write error: {}", args.output.display()))?;
    out.flush()
        .with_context(|| format!("write error: {}", args.output.display()))?;

    Ok(())
}
