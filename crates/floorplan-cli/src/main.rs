//! Floor plan generator command line.
//!
//! Usage:
//!   floorplan generate --type 3+1 --area 120 --facing 2 --project "Ev Planı"
//!   floorplan generate --config plan.json --out build/ --json
//!   floorplan check -v
//!   floorplan route GET /style.css https://example.com/api/plans

mod harness;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use floorplan_logic::offline_cache;
use floorplan_logic::request::{validate_plan_config, PlanConfig, PlanConfigError};
use floorplan_logic::{generate_plan, FloorPlan};
use floorplan_render::details::format_room_list;
use floorplan_render::export::{print_file_name, svg_file_name};
use floorplan_render::{print_document, render_svg, room_details, PlanHeader, SceneStyle};

#[derive(Parser)]
#[command(name = "floorplan", version, about = "Generate apartment floor plans")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG still wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan and write its SVG, print page and PNG.
    Generate {
        /// Apartment type label, e.g. "2+1".
        #[arg(long = "type")]
        apartment_type: Option<String>,
        /// Total area in m².
        #[arg(long)]
        area: Option<u32>,
        /// Number of street-facing sides.
        #[arg(long)]
        facing: Option<u32>,
        /// Project name; also the output file stem.
        #[arg(long)]
        project: Option<String>,
        /// JSON plan configuration. Flags override its fields.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory.
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Print the plan as JSON instead of the summary.
        #[arg(long)]
        json: bool,
        /// Highlight one room by index in the SVG output.
        #[arg(long)]
        hover: Option<usize>,
    },
    /// Run the headless sweep over every apartment type and both orientations.
    /// `-v` also lists passing checks.
    Check,
    /// Show which caching strategy the offline worker uses for each URL.
    Route {
        /// HTTP method.
        method: String,
        /// URLs or paths to classify.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);

    let outcome = match cli.command {
        Commands::Generate {
            apartment_type,
            area,
            facing,
            project,
            config,
            out,
            json,
            hover,
        } => load_config(config.as_deref()).and_then(|mut cfg| {
            if let Some(t) = apartment_type {
                cfg.apartment_type = t;
            }
            if let Some(a) = area {
                cfg.total_area = a;
            }
            if let Some(f) = facing {
                cfg.street_facing = f;
            }
            if let Some(p) = project {
                cfg.project_name = p;
            }
            run_generate(&cfg, &out, json, SceneStyle { hovered: hover })
        }),
        Commands::Check => {
            if !harness::run(verbose > 0) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Route { method, urls } => {
            for url in &urls {
                let strategy = offline_cache::classify_request(&method, url);
                println!("{:<14} {}", format!("{:?}", strategy), url);
            }
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", default))
        .format_timestamp(None)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<PlanConfig> {
    let Some(path) = path else {
        return Ok(PlanConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: PlanConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::info!("loaded plan config from {}", path.display());
    Ok(config)
}

fn run_generate(config: &PlanConfig, out: &Path, json: bool, style: SceneStyle) -> Result<()> {
    for problem in validate_plan_config(config) {
        match problem {
            // A blank name only affects the file stem.
            PlanConfigError::EmptyProjectName => log::debug!("{}", problem),
            _ => log::warn!("{}", problem),
        }
    }

    let request = config.to_request();
    let plan = generate_plan(&request);
    let timestamp = chrono::Local::now().format("%d.%m.%Y %H:%M").to_string();
    let header = PlanHeader::new(&config.project_name, &request, timestamp);

    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    let svg_path = out.join(svg_file_name(&config.project_name));
    write_file(&svg_path, render_svg(&plan, &style).as_bytes())?;
    let html_path = out.join(print_file_name(&config.project_name));
    write_file(&html_path, print_document(&plan, &header).as_bytes())?;
    write_png(&plan, &header, out, &config.project_name)?;

    if json {
        let text = serde_json::to_string_pretty(&plan).context("serializing plan")?;
        println!("{}", text);
    } else {
        print_summary(&plan, &header);
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(plan: &FloorPlan, header: &PlanHeader, out: &Path, project_name: &str) -> Result<()> {
    let bytes = floorplan_render::png::render_png(plan, header).map_err(anyhow::Error::msg)?;
    let path = out.join(floorplan_render::export::png_file_name(project_name));
    write_file(&path, &bytes)
}

#[cfg(not(feature = "png"))]
fn write_png(_plan: &FloorPlan, _header: &PlanHeader, _out: &Path, _project_name: &str) -> Result<()> {
    log::debug!("built without the png feature, skipping raster export");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn print_summary(plan: &FloorPlan, header: &PlanHeader) {
    let summary = plan.summary();
    println!("{}", header.title);
    println!("{}", header.specs);
    println!();
    print!("{}", format_room_list(&room_details(plan)));
    println!();
    println!("Toplam Alan:       {} m²", summary.total_area);
    println!("Oda Sayısı:        {}", summary.room_count);
    println!("Yaşanabilir Alan:  {} m²", summary.livable_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_render::export::export_stem;

    #[test]
    fn test_missing_config_uses_defaults() {
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.apartment_type, "2+1");
        assert_eq!(cfg.total_area, 75);
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("floorplan-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("plan.json");
        fs::write(&path, r#"{ "project_name": "Ev", "total_area": 140 }"#).unwrap();

        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.project_name, "Ev");
        assert_eq!(cfg.total_area, 140);
        assert_eq!(cfg.street_facing, 1);

        run_generate(&cfg, &dir, true, SceneStyle::default()).unwrap();
        assert!(dir.join("Ev.svg").exists());
        assert!(dir.join("Ev.html").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_project_name_stays_inside_output_dir() {
        let dir = std::env::temp_dir().join(format!("floorplan-cli-names-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let mut cfg = PlanConfig {
            project_name: "Blok A/Daire 3".into(),
            ..PlanConfig::default()
        };
        run_generate(&cfg, &dir, true, SceneStyle::default()).unwrap();
        assert!(dir.join("Blok-A-Daire-3.svg").exists());
        assert!(dir.join("Blok-A-Daire-3.html").exists());

        let escape = format!("/tmp/floorplan-escape-{}", std::process::id());
        cfg.project_name = escape.clone();
        run_generate(&cfg, &dir, true, SceneStyle::default()).unwrap();
        assert!(!Path::new(&format!("{}.svg", escape)).exists());
        assert!(dir.join(format!("{}.svg", export_stem(&escape))).exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bad_config_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/plan.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("reading config"));
    }

    #[test]
    fn test_cli_parses_generate_flags() {
        let cli = Cli::parse_from(["floorplan", "-v", "generate", "--type", "3+1", "--area", "120"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Generate {
                apartment_type, area, ..
            } => {
                assert_eq!(apartment_type.as_deref(), Some("3+1"));
                assert_eq!(area, Some(120));
            }
            _ => panic!("expected generate"),
        }
    }
}
