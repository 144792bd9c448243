use clap::{Parser, Subcommand, ValueEnum};
use kcal_core::controls::{CHART_DATASET_LABEL, CHART_X_TITLE, CHART_Y_TITLE};
use kcal_core::met::validate_met_table;
use kcal_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kcal")]
#[command(about = "Calorie burn estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate kcal per minute and cumulative kcal (default)
    Estimate(EstimateArgs),

    /// List exercises and their reference rates
    Exercises,

    /// Show the treadmill MET table
    Met,

    /// Print the effective configuration
    Config,
}

#[derive(clap::Args, Default)]
struct EstimateArgs {
    /// Profile (jeremy, kevin, custom)
    #[arg(long)]
    profile: Option<String>,

    /// Exercise id (see `kcal exercises`)
    #[arg(long)]
    exercise: Option<String>,

    /// Body weight in kg (custom profile and treadmill)
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<String>,

    /// Duration in minutes
    #[arg(long, allow_hyphen_values = true)]
    duration: Option<String>,

    /// Treadmill speed in km/h
    #[arg(long, allow_hyphen_values = true)]
    speed: Option<String>,

    /// Treadmill incline in percent
    #[arg(long, allow_hyphen_values = true)]
    incline: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    kcal_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Estimate(args)) => cmd_estimate(args, &config),
        Some(Commands::Exercises) => cmd_exercises(&config),
        Some(Commands::Met) => cmd_met(),
        Some(Commands::Config) => cmd_config(&config),
        None => {
            // Default to "estimate" with config controls
            cmd_estimate(EstimateArgs::default(), &config)
        }
    }
}

/// Built-in table plus config exercises, validated
fn load_table(config: &Config) -> Result<ExerciseTable> {
    let table = get_default_table().with_custom(&config.exercises.custom);

    let mut errors = table.validate();
    errors.extend(validate_met_table(&TREADMILL_MET_TABLE));
    if !errors.is_empty() {
        eprintln!("Exercise table validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid exercise table".into()));
    }

    Ok(table)
}

fn cmd_estimate(args: EstimateArgs, config: &Config) -> Result<()> {
    let table = load_table(config)?;

    // Flags override the configured initial controls
    let mut controls = config.controls.clone();
    let overrides = [
        (&mut controls.profile, args.profile),
        (&mut controls.exercise, args.exercise),
        (&mut controls.weight, args.weight),
        (&mut controls.duration, args.duration),
        (&mut controls.speed, args.speed),
        (&mut controls.incline, args.incline),
    ];
    for (slot, value) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }

    let readout = controls.recalculate(&table);
    tracing::info!(
        "Estimated {} for {} over {}",
        readout.rate_label,
        controls.exercise,
        readout.duration_label
    );

    let stdout = io::stdout();
    match args.format {
        OutputFormat::Text => {
            display_readout(&controls, &readout, &table);
            TextTableSink::new(stdout.lock()).write_series(&readout.series)
        }
        OutputFormat::Csv => CsvSeriesSink::new(stdout.lock()).write_series(&readout.series),
        OutputFormat::Json => JsonSeriesSink::new(stdout.lock()).write_series(&readout.series),
    }
}

fn display_readout(controls: &ControlState, readout: &Readout, table: &ExerciseTable) {
    let exercise_id = controls.exercise.trim();
    let exercise_name = if readout.treadmill_controls_visible {
        "Treadmill"
    } else {
        table.get(exercise_id).map_or(exercise_id, |e| e.name.as_str())
    };
    let profile = Profile::from_control(&controls.profile);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} · {}", exercise_name, profile.as_str());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Per minute: {}", readout.rate_label);
    println!("  Total:      {} over {}", readout.total_label, readout.duration_label);

    if readout.treadmill_controls_visible {
        println!("  Speed:      {}", readout.speed_label);
        println!("  Incline:    {}", readout.incline_label);
    }

    println!();
}

/// Plain-text minute/kcal table
struct TextTableSink<W: Write> {
    writer: W,
}

impl<W: Write> TextTableSink<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SeriesSink for TextTableSink<W> {
    fn write_series(&mut self, series: &ProjectionSeries) -> Result<()> {
        writeln!(self.writer, "  {}", CHART_DATASET_LABEL)?;
        writeln!(self.writer, "  {:>14}  {:>15}", CHART_X_TITLE, CHART_Y_TITLE)?;
        for point in &series.points {
            writeln!(
                self.writer,
                "  {:>14}  {:>15.1}",
                point.minute, point.cumulative_kcal
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn cmd_exercises(config: &Config) -> Result<()> {
    let table = load_table(config)?;

    println!("{:<18} {:<22} {:>8} {:>8} {:>8}", "ID", "NAME", "JEREMY", "KEVIN", "REF KG");
    println!("{:<18} {:<22} {:>8}", TREADMILL_ID, "Treadmill", "(MET)");

    for id in table.ids() {
        let Some(entry) = table.get(id) else {
            continue;
        };
        println!(
            "{:<18} {:<22} {:>8} {:>8} {:>8}",
            entry.id,
            entry.name,
            format_rate(entry.rate_for(Individual::Jeremy)),
            format_rate(entry.rate_for(Individual::Kevin)),
            entry.reference_weight_kg
        );
    }

    Ok(())
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{:.2}", r))
}

fn cmd_met() -> Result<()> {
    println!("{:>10} {:>6}", "KM/H", "MET");
    for sample in &TREADMILL_MET_TABLE {
        println!("{:>10.1} {:>6.1}", sample.speed_kmh, sample.metabolic_equivalent);
    }
    println!();
    println!("Nearest speed wins (no interpolation); +0.5 MET per % incline.");
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
