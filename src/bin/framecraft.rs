use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use framecraft::{
    build_assembly, core::Size, project_2d, resolve_layout, ArtworkConfiguration, Catalog,
};

#[derive(Parser, Debug)]
#[command(name = "framecraft", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved canonical measurements as JSON.
    Layout(LayoutArgs),
    /// Print the 2D preview rectangles for a render box as JSON.
    Preview(PreviewArgs),
    /// Print the 3D assembly (solids and transforms) as JSON.
    Assembly(AssemblyArgs),
    /// List catalog frames that fit a print size.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input artwork configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input artwork configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Render box width in display units.
    #[arg(long)]
    width: f64,

    /// Render box height in display units.
    #[arg(long)]
    height: f64,
}

#[derive(Parser, Debug)]
struct AssemblyArgs {
    /// Input artwork configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Print width in inches.
    #[arg(long)]
    width: f64,

    /// Print height in inches.
    #[arg(long)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Assembly(args) => cmd_assembly(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<ArtworkConfiguration> {
    let f = File::open(path).with_context(|| format!("open artwork '{}'", path.display()))?;
    let config: ArtworkConfiguration = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse artwork '{}'", path.display()))?;
    Ok(config)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let layout = resolve_layout(&config, &Catalog::builtin());
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let layout = resolve_layout(&config, &Catalog::builtin());
    let projection = project_2d(&layout, Size::new(args.width, args.height));
    println!("{}", serde_json::to_string_pretty(&projection)?);
    Ok(())
}

fn cmd_assembly(args: AssemblyArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let layout = resolve_layout(&config, &Catalog::builtin());
    let assembly = build_assembly(&config, &layout);
    println!("{}", serde_json::to_string_pretty(&assembly)?);
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    for frame in catalog.frames_fitting(args.width, args.height) {
        println!("{}", frame.description());
    }
    Ok(())
}
