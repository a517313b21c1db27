use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mipchain", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the mip chain of an image and write every level as a PNG.
    Generate(GenerateArgs),
    /// Print the extent of every level for a given base size.
    Levels(LevelsArgs),
    /// Write one of the built-in test patterns as a mip chain.
    Pattern(PatternArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for level PNGs and `manifest.json`.
    #[arg(long)]
    out_dir: PathBuf,

    /// JSON options file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Edge handling for bilinear taps.
    #[arg(long, value_enum)]
    edge: Option<EdgeChoice>,

    /// Fill rows of each level in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel mode.
    #[arg(long)]
    threads: Option<usize>,

    /// Mirror the input vertically before generating.
    #[arg(long)]
    flip_y: bool,
}

#[derive(Parser, Debug)]
struct LevelsArgs {
    /// Base width in texels.
    #[arg(long)]
    width: u32,

    /// Base height in texels.
    #[arg(long)]
    height: u32,
}

#[derive(Parser, Debug)]
struct PatternArgs {
    /// Pattern to write.
    #[arg(long, value_enum)]
    kind: PatternChoice,

    /// Output directory for level PNGs and `manifest.json`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EdgeChoice {
    Clamp,
    Strict,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PatternChoice {
    /// Hand-authored 64x64 chain with a distinct colour per level.
    Checker,
    /// 16x16 six-colour image run through the generator.
    Blended,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Levels(args) => cmd_levels(args),
        Command::Pattern(args) => cmd_pattern(args),
    }
}

fn resolve_options(args: &GenerateArgs) -> anyhow::Result<mipchain::MipOptions> {
    let mut opts = match &args.config {
        Some(path) => mipchain::MipOptions::from_json_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => mipchain::MipOptions::default(),
    };
    if let Some(edge) = args.edge {
        opts.edge = match edge {
            EdgeChoice::Clamp => mipchain::EdgePolicy::Clamp,
            EdgeChoice::Strict => mipchain::EdgePolicy::Strict,
        };
    }
    if args.parallel {
        opts.parallel = true;
    }
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    Ok(opts)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let opts = resolve_options(&args)?;
    let source = mipchain::load_image(&args.in_path, args.flip_y)
        .with_context(|| format!("load image '{}'", args.in_path.display()))?;
    tracing::info!(extent = %source.extent(), "loaded {}", args.in_path.display());

    let generator = mipchain::MipChainGenerator::new(opts)?;
    let chain = generator.generate(&source)?;
    write_chain(&chain, &args.out_dir)
}

fn cmd_levels(args: LevelsArgs) -> anyhow::Result<()> {
    let extent = mipchain::Extent::new(args.width, args.height)?;
    for (i, e) in extent.chain_extents().iter().enumerate() {
        println!("{i} {e}");
    }
    Ok(())
}

fn cmd_pattern(args: PatternArgs) -> anyhow::Result<()> {
    let chain = match args.kind {
        PatternChoice::Checker => mipchain::checker_mips()?,
        PatternChoice::Blended => mipchain::generate_mips(&mipchain::blended_pattern()?)?,
    };
    write_chain(&chain, &args.out_dir)
}

fn write_chain(chain: &mipchain::MipChain, out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    for (i, level) in chain.iter().enumerate() {
        let path = out_dir.join(level_file_name(i, level.extent()));
        mipchain::save_png(level, &path)?;
    }

    let manifest = mipchain::ChainManifest::from_chain(chain);
    let manifest_path = out_dir.join("manifest.json");
    std::fs::write(&manifest_path, manifest.to_json_pretty()?)
        .with_context(|| format!("write manifest '{}'", manifest_path.display()))?;

    tracing::info!(levels = chain.len(), "wrote {}", out_dir.display());
    Ok(())
}

fn level_file_name(level: usize, extent: mipchain::Extent) -> String {
    format!("level_{level:02}_{}x{}.png", extent.width, extent.height)
}
