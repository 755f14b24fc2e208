#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("viewcal_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use viewcal_engine::display::{DISPLAY_PRESETS, Display};
    use viewcal_engine::geom::{Orientation, Vec3};
    use viewcal_engine::layout::shared_edge_gap;
    use viewcal_engine::parse::{CalibrationConfig, parse_str};
    use viewcal_engine::projection::{
        DEFAULT_NEAR_DISTANCE, EdgeDistanceMode, ProjectionEngine, ProjectionOptions,
        near_plane_frustum, projection_corners,
    };
    use viewcal_engine::report::{format_frustum, format_projection};

    const USAGE: &str = r#"viewcal_cli (viewcal-engine)

USAGE:
  viewcal_cli list-presets
  viewcal_cli report <config.json> [options]
  viewcal_cli frustum <config.json> [--near <m>]
  viewcal_cli gaps <config.json>
  viewcal_cli new-config [--preset <inches>] [--distance <m>] [--out <path>] [--overwrite]

OPTIONS:
  --mode <stable|precise>  Edge distance algorithm (default: stable)
  --near <m>               Near-clip distance in meters (default: 0.1)
  --json                   Print the projection as JSON instead of text
  --preset <inches>        Panel size for new-config (default: 65)
  --distance <m>           Eye distance for new-config (default: 1.16)
  --out <path>             Write new-config output to a file instead of stdout
  --overwrite              Overwrite an existing --out file
  -h, --help               Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "list-presets" => {
                print_presets();
                Ok(())
            }
            "report" => cmd_report(&mut args),
            "frustum" => cmd_frustum(&mut args),
            "gaps" => cmd_gaps(&mut args),
            "new-config" => cmd_new_config(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn print_presets() {
        for preset in &DISPLAY_PRESETS {
            println!(
                "{:>3}\"  {:.3}m x {:.3}m",
                preset.diagonal_inches, preset.width, preset.height
            );
        }
    }

    fn cmd_report(args: &mut Args) -> Result<(), String> {
        let path = PathBuf::from(args.next().ok_or("missing config path")?);

        let mut options = ProjectionOptions::default();
        let mut json = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let mode: EdgeDistanceMode =
                        args.value("--mode")?.parse().map_err(|e| format!("{e}"))?;
                    options = options.with_edge_mode(mode);
                }
                "--near" => options = options.with_near_distance(args.number("--near")?),
                "--json" => json = true,
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let config = load_config(&path)?;
        let engine = ProjectionEngine::new(options);
        for (index, result) in engine.project_all(&config.displays).enumerate() {
            let display = &config.displays[index];
            let projection =
                result.map_err(|e| format!("{}: {e}", display_label(index, display)))?;
            if json {
                let text = serde_json::to_string_pretty(&projection)
                    .map_err(|e| format!("serialize projection: {e}"))?;
                println!("{text}");
            } else {
                println!("== {} ==", display_label(index, display));
                println!("{}", format_projection(&projection));
            }
        }
        Ok(())
    }

    fn cmd_frustum(args: &mut Args) -> Result<(), String> {
        let path = PathBuf::from(args.next().ok_or("missing config path")?);

        let mut near = DEFAULT_NEAR_DISTANCE;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--near" => near = args.number("--near")?,
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let config = load_config(&path)?;
        for (index, display) in config.displays.iter().enumerate() {
            let frustum = near_plane_frustum(display, near)
                .map_err(|e| format!("{}: {e}", display_label(index, display)))?;
            println!("== {} ==", display_label(index, display));
            println!("{}", format_frustum(&frustum));
        }
        Ok(())
    }

    /// Corner gaps between each display and the next one in the file.
    fn cmd_gaps(args: &mut Args) -> Result<(), String> {
        let path = PathBuf::from(args.next().ok_or("missing config path")?);
        if let Some(extra) = args.next() {
            return Err(format!("unexpected argument `{extra}`\n\n{USAGE}"));
        }

        let config = load_config(&path)?;
        for (index, pair) in config.displays.windows(2).enumerate() {
            let gap = shared_edge_gap(&projection_corners(&pair[0]), &projection_corners(&pair[1]));
            println!(
                "{} -> {}: top {:.6}m, bottom {:.6}m",
                display_label(index, &pair[0]),
                display_label(index + 1, &pair[1]),
                gap.top,
                gap.bottom
            );
        }
        Ok(())
    }

    fn cmd_new_config(args: &mut Args) -> Result<(), String> {
        let mut diagonal = 65;
        let mut distance = 1.16;
        let mut out: Option<PathBuf> = None;
        let mut overwrite = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--preset" => {
                    diagonal = args
                        .value("--preset")?
                        .parse()
                        .map_err(|e| format!("invalid --preset: {e}"))?;
                }
                "--distance" => distance = args.number("--distance")?,
                "--out" => out = Some(PathBuf::from(args.value("--out")?)),
                "--overwrite" => overwrite = true,
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let display = Display::from_preset(
            diagonal,
            Vec3::new(0.0, 0.0, distance),
            Orientation::IDENTITY,
        )
        .ok_or_else(|| format!("no preset for {diagonal}\" (see list-presets)"))?
        .with_name("Center");
        display.validate().map_err(|e| e.to_string())?;

        let text = CalibrationConfig::new(vec![display])
            .to_json_pretty()
            .map_err(|e| e.to_string())?;

        match out {
            Some(path) => write_text_file(&path, &text, overwrite),
            None => {
                println!("{text}");
                Ok(())
            }
        }
    }

    fn load_config(path: &Path) -> Result<CalibrationConfig, String> {
        let text = fs::read_to_string(path).map_err(|e| format!("read {}: {e}", path.display()))?;
        let config = parse_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
        config
            .validate_displays()
            .map_err(|e| format!("{}: {e}", path.display()))?;
        Ok(config)
    }

    fn display_label(index: usize, display: &Display) -> String {
        match display.style.name.as_deref() {
            Some(name) => format!("Display {} ({name})", index + 1),
            None => format!("Display {}", index + 1),
        }
    }

    fn write_text_file(path: &Path, text: &str, overwrite: bool) -> Result<(), String> {
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }
        fs::write(path, text).map_err(|e| format!("write {}: {e}", path.display()))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }

        fn number(&mut self, flag: &str) -> Result<f64, String> {
            let raw = self.value(flag)?;
            raw.parse()
                .map_err(|e| format!("invalid number for {flag} `{raw}`: {e}"))
        }
    }
}
