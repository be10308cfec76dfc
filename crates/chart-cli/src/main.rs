use anyhow::{Context, Result, bail};
use chart_core::constants::STORAGE_KEY;
use chart_core::generators::{
    DEFAULT_BOTTOM_WORD, DEFAULT_TOP_WORD, LITERAL_CHARTS, find_literal_chart, is_supported_glyph,
};
use chart_core::presets::{FileStore, PresetStore};
use chart_core::{
    ChartError, ChartPattern, EditorConfig, GridLayout, LayoutSnapshot, Orientation,
};
use chart_export::{ExportOptions, ResvgRenderer, build_print_document, page_layouts};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "vtchart", about = "Vision training chart tools", version)]
struct Cli {
    /// Directory holding config.json and the preset file
    /// (defaults to the platform config directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a layout file from a pattern
    Generate {
        #[arg(value_enum)]
        pattern: PatternArg,

        /// Output layout file (JSON)
        #[arg(short, long, default_value = "layout.json")]
        output: PathBuf,

        /// Page orientation (defaults to the configured one)
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// Grid rows
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns
        #[arg(long)]
        cols: Option<usize>,

        /// Upper word of the word pattern
        #[arg(long, default_value = DEFAULT_TOP_WORD)]
        top: String,

        /// Lower word of the word pattern
        #[arg(long, default_value = DEFAULT_BOTTOM_WORD)]
        bottom: String,

        /// Name of the literal chart variant
        #[arg(long)]
        name: Option<String>,

        /// Seed for random letters
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Assign fresh random characters to a layout
    Regenerate {
        /// Input layout file
        #[arg(short, long)]
        input: PathBuf,

        /// Output layout file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        chars: CharArgs,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render a layout to a multi-page PDF
    Export {
        /// Input layout file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory the PDF is written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of pages, 1-30
        #[arg(long)]
        copies: Option<usize>,

        /// Draw the fixation ring at the page centre
        #[arg(long)]
        fixation: bool,

        /// Extra font file used for glyphs
        #[arg(long)]
        font: Option<PathBuf>,

        #[command(flatten)]
        chars: CharArgs,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a print-ready HTML document
    Print {
        /// Input layout file
        #[arg(short, long)]
        input: PathBuf,

        /// Output HTML file
        #[arg(short, long, default_value = "print.html")]
        output: PathBuf,

        /// Number of sheets, 1-30
        #[arg(long)]
        copies: Option<usize>,

        /// Draw the fixation ring at the page centre
        #[arg(long)]
        fixation: bool,

        #[command(flatten)]
        chars: CharArgs,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Convert a CSV (char,x,y,fontSize) into a layout file
    ImportCsv {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "layout.json")]
        output: PathBuf,

        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,
    },

    /// Write a layout's letters as CSV
    ExportCsv {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Manage saved presets
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List built-in and custom presets
    List,
    /// Save a layout file as a custom preset
    Save {
        name: String,
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Delete a custom preset
    Delete { name: String },
    /// Print a preset, or write it as a layout file
    Show {
        name: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args)]
struct CharArgs {
    /// Include digits 0-9 in the character pool
    #[arg(long)]
    digits: bool,

    /// Never repeat a character on a page
    #[arg(long)]
    no_duplicates: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PatternArg {
    Grid,
    Radial,
    Word,
    Literal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Landscape,
    Portrait,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Landscape => Self::Landscape,
            OrientationArg::Portrait => Self::Portrait,
        }
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn data_dir(cli_dir: &Option<PathBuf>) -> Result<PathBuf> {
    match cli_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(EditorConfig::config_dir()?),
    }
}

async fn load_config(dir: &Path) -> Result<EditorConfig> {
    let path = dir.join(chart_core::constants::CONFIG_FILE_NAME);
    EditorConfig::load_from(&path)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))
}

fn export_options(config: &EditorConfig, copies: Option<usize>, fixation: bool, chars: &CharArgs) -> ExportOptions {
    ExportOptions {
        copies: copies.unwrap_or(config.copies),
        show_fixation: fixation || config.show_fixation,
        include_digits: chars.digits || config.include_digits,
        allow_duplicates: config.allow_duplicates && !chars.no_duplicates,
        ..ExportOptions::from(config)
    }
}

fn insufficient_pool_hint(err: ChartError) -> anyhow::Error {
    match err {
        ChartError::InsufficientPool { required, available } => anyhow::anyhow!(
            "Cannot generate {} unique characters. Pool only has {} characters. \
             Allow duplicates or pass --digits.",
            required,
            available
        ),
        other => other.into(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dir = data_dir(&cli.data_dir)?;

    match cli.command {
        Commands::Generate {
            pattern,
            output,
            orientation,
            rows,
            cols,
            top,
            bottom,
            name,
            seed,
        } => {
            let config = load_config(&dir).await?;
            let orientation = orientation.map(Orientation::from).unwrap_or(config.orientation);

            let (pattern, grid_layout) = match pattern {
                PatternArg::Grid => {
                    let grid = GridLayout {
                        rows: rows.unwrap_or(config.grid_rows),
                        cols: cols.unwrap_or(config.grid_cols),
                    };
                    let check = EditorConfig {
                        grid_rows: grid.rows,
                        grid_cols: grid.cols,
                        ..config.clone()
                    };
                    check.validate()?;
                    (ChartPattern::Grid { rows: grid.rows, cols: grid.cols }, Some(grid))
                }
                PatternArg::Radial => (ChartPattern::Radial, None),
                PatternArg::Word => {
                    for c in top.chars().chain(bottom.chars()).filter(|c| !is_supported_glyph(*c)) {
                        log::warn!("No bitmap for '{}', drawing it blank", c);
                    }
                    (ChartPattern::Word { top, bottom }, None)
                }
                PatternArg::Literal => {
                    let name = name.unwrap_or_else(|| LITERAL_CHARTS[0].name.to_string());
                    let Some(chart) = find_literal_chart(&name) else {
                        let known: Vec<&str> = LITERAL_CHARTS.iter().map(|c| c.name).collect();
                        bail!("Unknown literal chart '{}'. Known charts: {}", name, known.join(", "));
                    };
                    (ChartPattern::Literal(chart), None)
                }
            };

            let letters = pattern.generate(orientation, &mut rng_from(seed));
            let mut snapshot = LayoutSnapshot::new(letters, config.page_settings, orientation);
            snapshot.grid_layout = grid_layout;
            snapshot.save(&output).await?;
            println!(
                "Generated {} letters ({}) → {}",
                snapshot.letters.len(),
                orientation.name(),
                output.display()
            );
        }

        Commands::Regenerate {
            input,
            output,
            chars,
            seed,
        } => {
            let config = load_config(&dir).await?;
            let mut snapshot = LayoutSnapshot::load(&input).await?;
            let include_digits = chars.digits || config.include_digits;
            let allow_duplicates = config.allow_duplicates && !chars.no_duplicates;

            snapshot.letters = chart_core::regenerate(
                &snapshot.letters,
                include_digits,
                allow_duplicates,
                &mut rng_from(seed),
            )
            .map_err(insufficient_pool_hint)?;

            let output = output.unwrap_or(input);
            snapshot.save(&output).await?;
            println!("Regenerated {} letters → {}", snapshot.letters.len(), output.display());
        }

        Commands::Export {
            input,
            output_dir,
            copies,
            fixation,
            font,
            chars,
            seed,
        } => {
            let config = load_config(&dir).await?;
            let snapshot = LayoutSnapshot::load(&input).await?;
            let options = ExportOptions {
                page_settings: snapshot.page_settings,
                orientation: snapshot.orientation,
                ..export_options(&config, copies, fixation, &chars)
            };

            let renderer = match font {
                Some(path) => {
                    let data = tokio::fs::read(&path)
                        .await
                        .with_context(|| format!("Failed to read font {}", path.display()))?;
                    ResvgRenderer::with_font_data(data)
                }
                None => ResvgRenderer::with_system_fonts(),
            };

            let document = chart_export::export_document(
                &snapshot.letters,
                &options,
                Arc::new(renderer),
                &mut rng_from(seed),
                |current, total| eprintln!("  page {}/{}", current, total),
            )
            .await?;

            let output_dir = output_dir
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            let path = chart_export::save_document(&document, &output_dir).await?;
            println!("Exported {} pages → {}", document.page_count, path.display());
        }

        Commands::Print {
            input,
            output,
            copies,
            fixation,
            chars,
            seed,
        } => {
            let config = load_config(&dir).await?;
            let snapshot = LayoutSnapshot::load(&input).await?;
            let options = ExportOptions {
                page_settings: snapshot.page_settings,
                orientation: snapshot.orientation,
                ..export_options(&config, copies, fixation, &chars)
            };
            options.validate()?;

            let pages = page_layouts(&snapshot.letters, &options, &mut rng_from(seed));
            let html = build_print_document(
                &pages,
                &options.page_settings,
                options.orientation,
                options.show_fixation,
            );
            tokio::fs::write(&output, html).await?;
            println!("Wrote {} sheets → {}", pages.len(), output.display());
        }

        Commands::ImportCsv {
            input,
            output,
            orientation,
        } => {
            let config = load_config(&dir).await?;
            let letters = chart_core::load_layout_csv(&input).await?;
            let orientation = orientation.map(Orientation::from).unwrap_or(config.orientation);
            let snapshot = LayoutSnapshot::new(letters, config.page_settings, orientation);
            snapshot.save(&output).await?;
            println!("Imported {} letters → {}", snapshot.letters.len(), output.display());
        }

        Commands::ExportCsv { input, output } => {
            let snapshot = LayoutSnapshot::load(&input).await?;
            chart_core::save_layout_csv(&snapshot.letters, &output).await?;
            println!("Wrote {} letters → {}", snapshot.letters.len(), output.display());
        }

        Commands::Presets { action } => {
            let mut store = PresetStore::initialize(FileStore::new(&dir));

            match action {
                PresetAction::List => {
                    for preset in store.presets() {
                        let kind = if preset.is_built_in { "built-in" } else { "custom" };
                        println!(
                            "{:<24} {:<9} {:>3} letters  {}",
                            preset.name,
                            kind,
                            preset.letters.len(),
                            preset.orientation.name()
                        );
                    }
                }
                PresetAction::Save { name, input } => {
                    let snapshot = LayoutSnapshot::load(&input).await?;
                    let preset = store.save(
                        &name,
                        &snapshot.letters,
                        snapshot.page_settings,
                        snapshot.orientation,
                        snapshot.grid_layout,
                    )?;
                    println!("Saved preset '{}'", preset.name);
                }
                PresetAction::Delete { name } => {
                    store.delete(&name)?;
                    println!("Deleted preset '{}'", name.trim());
                }
                PresetAction::Show { name, output } => {
                    let loaded = store.load(&name)?;
                    let snapshot = LayoutSnapshot {
                        letters: loaded.letters,
                        page_settings: loaded.page_settings,
                        orientation: loaded.orientation,
                        grid_layout: loaded.grid_layout,
                    };
                    match output {
                        Some(path) => {
                            snapshot.save(&path).await?;
                            println!("Wrote preset '{}' → {}", name.trim(), path.display());
                        }
                        None => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                    }
                }
            }
            log::debug!("Presets stored in {}", store.backend().path_for(STORAGE_KEY).display());
        }

        Commands::Config { action } => {
            let path = dir.join(chart_core::constants::CONFIG_FILE_NAME);
            match action {
                ConfigAction::Show => {
                    let config = load_config(&dir).await?;
                    println!("# {}", path.display());
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                ConfigAction::Init { force } => {
                    if path.exists() && !force {
                        bail!("{} already exists (use --force to overwrite)", path.display());
                    }
                    EditorConfig::default().save_to(&path).await?;
                    println!("Wrote default configuration → {}", path.display());
                }
            }
        }
    }

    Ok(())
}
