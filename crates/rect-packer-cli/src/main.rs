use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use rect_packer_core::{Layout, PackOptions, Placed, Rectangle, pack_layout};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "rect-packer",
    about = "Pack rectangles into fixed-size bins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a JSON array of rectangles and write the placements as JSON
    Pack(PackArgs),
    /// Pack and print statistics only
    Stats(PackArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Input JSON file (array of objects with `width` and `height`); `-` reads stdin
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    output: Option<PathBuf>,
    /// YAML config file path (overrides bin/padding options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Bin width
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    bin_width: u32,
    /// Bin height
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    bin_height: u32,
    /// Spacing along every bin edge
    #[arg(long, default_value_t = 0, help_heading = "Layout")]
    border_padding: u32,
    /// Spacing between neighbouring rectangles
    #[arg(long, default_value_t = 0, help_heading = "Layout")]
    rectangle_padding: u32,

    // Export
    /// Output shape: nested (array of bins) | records (flat, with `page`)
    #[arg(long, default_value = "nested", value_parser = ["nested", "records"], help_heading = "Export")]
    format: String,
    /// Pretty-print JSON output
    #[arg(long, default_value_t = false, help_heading = "Export")]
    pretty: bool,
    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

/// One input rectangle; every field besides the size is carried through untouched.
#[derive(Debug, Clone, Deserialize)]
struct InputRect {
    width: u32,
    height: u32,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Rectangle for InputRect {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug, Clone, Serialize)]
struct RunConfig {
    bin_width: u32,
    bin_height: u32,
    #[serde(flatten)]
    options: PackOptions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args, false),
        Commands::Stats(args) => run_pack(args, true),
    }
}

fn run_pack(args: &PackArgs, stats_only: bool) -> anyhow::Result<()> {
    let cfg = RunConfig {
        bin_width: args.bin_width,
        bin_height: args.bin_height,
        options: PackOptions {
            border_padding: args.border_padding,
            rectangle_padding: args.rectangle_padding,
        },
    };
    let cfg = match &args.config {
        Some(path) => {
            let file = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            let y: YamlConfig = serde_yaml::from_str(&file)
                .with_context(|| format!("parse config {}", path.display()))?;
            y.into_run_config(cfg)
        }
        None => cfg,
    };

    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let inputs = load_inputs(&args.input)?;
    info!(count = inputs.len(), "loaded input rectangles");

    let layout = pack_layout(inputs, cfg.bin_width, cfg.bin_height, &cfg.options)
        .context("packing failed")?;
    let stats = layout.stats();
    info!(
        bins = stats.num_bins,
        placed = stats.num_placed,
        occupancy = stats.occupancy,
        "packed"
    );

    if let Some(stats_path) = &args.export_stats {
        let s = serde_json::to_string_pretty(&stats)?;
        fs::write(stats_path, s)
            .with_context(|| format!("write stats {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }

    if stats_only {
        println!("{}", stats.summary());
        return Ok(());
    }

    let value = match args.format.as_str() {
        "records" => to_records(&layout),
        _ => to_nested(&layout),
    };
    let text = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    match &args.output {
        Some(out) => {
            fs::write(out, text).with_context(|| format!("write {}", out.display()))?;
            info!(?out, "placements written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn load_inputs(path: &Path) -> anyhow::Result<Vec<InputRect>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?
    };
    let inputs: Vec<InputRect> = serde_json::from_str(&text)
        .with_context(|| format!("parse input {}", path.display()))?;
    debug!(bytes = text.len(), "decoded input");
    Ok(inputs)
}

/// Caller fields first, then geometry; geometry wins on name clashes.
fn placement_record(p: &Placed<InputRect>) -> Map<String, Value> {
    let mut rec = p.item.extra.clone();
    rec.insert("width".into(), p.width.into());
    rec.insert("height".into(), p.height.into());
    rec.insert("x".into(), p.x.into());
    rec.insert("y".into(), p.y.into());
    rec.insert("rotated".into(), p.rotated.into());
    rec
}

fn to_nested(layout: &Layout<InputRect>) -> Value {
    Value::Array(
        layout
            .bins
            .iter()
            .map(|b| {
                Value::Array(
                    b.placements
                        .iter()
                        .map(|p| Value::Object(placement_record(p)))
                        .collect(),
                )
            })
            .collect(),
    )
}

fn to_records(layout: &Layout<InputRect>) -> Value {
    Value::Array(
        layout
            .records()
            .map(|(page, p)| {
                let mut rec = placement_record(p);
                rec.insert("page".into(), page.into());
                Value::Object(rec)
            })
            .collect(),
    )
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    bin_width: Option<u32>,
    bin_height: Option<u32>,
    border_padding: Option<u32>,
    rectangle_padding: Option<u32>,
}

impl YamlConfig {
    fn into_run_config(self, mut cfg: RunConfig) -> RunConfig {
        if let Some(v) = self.bin_width {
            cfg.bin_width = v;
        }
        if let Some(v) = self.bin_height {
            cfg.bin_height = v;
        }
        if let Some(v) = self.border_padding {
            cfg.options.border_padding = v;
        }
        if let Some(v) = self.rectangle_padding {
            cfg.options.rectangle_padding = v;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<InputRect> {
        serde_json::from_str(json).expect("valid input")
    }

    #[test]
    fn extra_fields_pass_through_and_geometry_wins() {
        let inputs = parse(r#"[{"width": 5, "height": 5, "color": "green", "x": 99}]"#);
        let layout = pack_layout(inputs, 10, 10, &PackOptions::default()).expect("pack");
        let out = to_nested(&layout);
        let rec = &out[0][0];
        assert_eq!(rec["color"], "green");
        assert_eq!(rec["x"], 0);
        assert_eq!(rec["y"], 0);
        assert_eq!(rec["width"], 5);
        assert_eq!(rec["rotated"], false);
    }

    #[test]
    fn records_carry_page_index() {
        let inputs = parse(
            r#"[{"width":5,"height":10,"id":"a"},{"width":5,"height":10,"id":"b"},{"width":5,"height":10,"id":"c"}]"#,
        );
        let layout = pack_layout(inputs, 10, 10, &PackOptions::default()).expect("pack");
        let out = to_records(&layout);
        let pages: Vec<u64> = out
            .as_array()
            .expect("array")
            .iter()
            .map(|r| r["page"].as_u64().expect("page"))
            .collect();
        assert_eq!(pages, vec![0, 0, 1]);
        assert_eq!(out[2]["id"], "c");
    }

    #[test]
    fn negative_sizes_are_rejected_at_decode() {
        let res: Result<Vec<InputRect>, _> =
            serde_json::from_str(r#"[{"width": -5, "height": 5}]"#);
        assert!(res.is_err());
    }

    #[test]
    fn yaml_overrides_flags() {
        let y: YamlConfig =
            serde_yaml::from_str("bin_width: 64\nborder_padding: 2\n").expect("yaml");
        let cfg = y.into_run_config(RunConfig {
            bin_width: 1024,
            bin_height: 512,
            options: PackOptions::default(),
        });
        assert_eq!(cfg.bin_width, 64);
        assert_eq!(cfg.bin_height, 512);
        assert_eq!(cfg.options.border_padding, 2);
        assert_eq!(cfg.options.rectangle_padding, 0);
    }
}
