use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "polycycle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an indexed image JSON into a graph-state document.
    Convert(ConvertArgs),
    /// Print conversion diagnostics without emitting a document.
    Stats(StatsArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Conversion preset.
    #[arg(long, value_enum, default_value_t = polycycle::TemplateKind::Standard)]
    template: polycycle::TemplateKind,

    /// Override the per-expression vertex cap.
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Input image JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Conversion preset.
    #[arg(long, value_enum, default_value_t = polycycle::TemplateKind::Standard)]
    template: polycycle::TemplateKind,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn read_image_json(path: &Path) -> anyhow::Result<polycycle::IndexedImage> {
    let f = File::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    let r = BufReader::new(f);
    let image = polycycle::IndexedImage::from_json_reader(r)
        .with_context(|| format!("read image '{}'", path.display()))?;
    Ok(image)
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let image = read_image_json(&args.in_path)?;

    let mut options = args.template.options();
    if let Some(cap) = args.max_vertices {
        options.max_vertices = cap;
    }

    let state = polycycle::convert(&image, &options)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write graph state '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let image = read_image_json(&args.in_path)?;
    let stats = polycycle::stats(&image, &args.template.options())?;

    eprintln!("dimensions:   {}x{}", stats.width, stats.height);
    eprintln!("polygons:     {}", stats.polygon_count);
    eprintln!("vertices:     {}", stats.vertex_count);
    eprintln!("batches:      {}", stats.batch_count);
    eprintln!(
        "unused slots: {}",
        if stats.unused_slots.is_empty() {
            "none".to_string()
        } else {
            stats
                .unused_slots
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    );

    Ok(())
}
