use std::{
    fs::File,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "uiscale", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rescale a UI tree and print (or write) the result as JSON.
    Scale(ScaleArgs),
    /// Print node counts for a UI tree.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    /// Input UI tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Uniform scale ratio (e.g. 0.5 to halve every dimension).
    #[arg(long, allow_negative_numbers = true)]
    ratio: f64,

    /// Traversal strategy.
    #[arg(long, value_enum, default_value_t = StrategyChoice::Direct)]
    strategy: StrategyChoice,

    /// Size policy used by the relative strategy.
    #[arg(long, value_enum, default_value_t = SizePolicyChoice::Relative)]
    size_policy: SizePolicyChoice,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input UI tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    Direct,
    Relative,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizePolicyChoice {
    Relative,
    Direct,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Scale(args) => cmd_scale(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_tree(path: &Path) -> anyhow::Result<uiscale::UiTree> {
    uiscale::UiTree::from_path(path).with_context(|| format!("load UI tree '{}'", path.display()))
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    let mut tree = read_tree(&args.in_path)?;

    let opts = uiscale::ScalerOpts {
        strategy: match args.strategy {
            StrategyChoice::Direct => uiscale::ScaleStrategy::Direct,
            StrategyChoice::Relative => uiscale::ScaleStrategy::Relative,
        },
        size_policy: match args.size_policy {
            SizePolicyChoice::Relative => uiscale::SizePolicy::Relative,
            SizePolicyChoice::Direct => uiscale::SizePolicy::Direct,
        },
    };
    let stats = uiscale::TreeScaler::with_opts(args.ratio, opts).scale(&mut tree);

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out)
                .with_context(|| format!("create output '{}'", out.display()))?;
            tree.to_writer(f, !args.compact)
                .with_context(|| format!("write UI tree '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let s = tree.to_json_string(!args.compact)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{s}").context("write UI tree to stdout")?;
        }
    }

    eprintln!(
        "scaled {} of {} renderable nodes ({} visited)",
        stats.scaled, stats.renderable, stats.visited
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let tree = read_tree(&args.in_path)?;
    let s = tree.summary();
    println!("nodes:      {}", s.nodes);
    println!("renderable: {}", s.renderable);
    println!("text nodes: {}", s.text_nodes);
    println!("max depth:  {}", s.max_depth);
    Ok(())
}
