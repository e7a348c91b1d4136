use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flexlay", version)]
struct Cli {
    /// Log filter (e.g. `info`, `flexlay=trace`). Falls back to `RUST_LOG`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out tree descriptions and print the layout map as JSON.
    Layout(LayoutArgs),
    /// Draw a tree's layout as an SVG document.
    Svg(SvgArgs),
    /// Draw a tree's layout as a PNG image.
    Png(PngArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input tree description JSON. Repeat for a parallel batch.
    #[arg(long = "in", required = true, num_args = 1..)]
    in_paths: Vec<PathBuf>,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input tree description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Heading drawn above the layout.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Input tree description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per layout unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Heading drawn above the layout.
    #[arg(long)]
    title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn init_tracing(filter: Option<&str>) -> anyhow::Result<()> {
    let filter = match filter {
        Some(f) => EnvFilter::try_new(f).with_context(|| format!("parse log filter '{f}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_root(path: &Path) -> anyhow::Result<flexlay::RootFlexBox> {
    let spec = flexlay::TreeSpec::from_path(path)
        .with_context(|| format!("read tree description '{}'", path.display()))?;
    let root = spec
        .into_root()
        .with_context(|| format!("build layout tree from '{}'", path.display()))?;
    Ok(root)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let value = if let [path] = args.in_paths.as_slice() {
        let mut root = load_root(path)?;
        serde_json::to_value(root.get_layout()).context("serialize layout")?
    } else {
        let mut roots = args
            .in_paths
            .iter()
            .map(|p| load_root(p))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let layouts = flexlay::layout_all(&mut roots);

        let mut by_path = serde_json::Map::new();
        for (path, layout) in args.in_paths.iter().zip(layouts) {
            let v = serde_json::to_value(layout).context("serialize layout")?;
            by_path.insert(path.display().to_string(), v);
        }
        serde_json::Value::Object(by_path)
    };

    let mut text = if args.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .context("serialize layout")?;
    text.push('\n');

    match &args.out {
        Some(out) => {
            write_output(out, text.as_bytes())?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn render_svg(in_path: &Path, title: Option<String>) -> anyhow::Result<String> {
    let mut root = load_root(in_path)?;
    let layout = root.get_layout();
    let size = root.size();

    let mut opts = flexlay::SvgOptions::new().frame(size.width, size.height);
    opts.title = title;
    Ok(flexlay::layout_to_svg(&layout, &opts))
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let svg = render_svg(&args.in_path, args.title)?;
    write_output(&args.out, svg.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let svg = render_svg(&args.in_path, args.title)?;
    let img = flexlay::render_png(&svg, args.scale)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
