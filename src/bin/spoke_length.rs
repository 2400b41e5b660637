use clap::{Parser, ValueEnum};
use spokecalc::utils::logger;
use spokecalc::{compute, SpokeError, SpokeLengths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "spoke-length")]
#[command(about = "Compute spoke lengths for one wheel without prompting")]
struct Args {
    /// Left hub flange pitch circle diameter, mm
    #[arg(long, default_value_t = 58.0)]
    left_hub_diameter: f64,

    /// Right hub flange pitch circle diameter, mm (default: the same as left)
    #[arg(long)]
    right_hub_diameter: Option<f64>,

    /// Effective rim diameter, mm
    #[arg(long, default_value_t = 608.0)]
    rim_diameter: f64,

    /// Hub hole diameter, mm
    #[arg(long, default_value_t = 2.7)]
    hole_diameter: f64,

    /// Total spoke count, split evenly between both sides
    #[arg(long, conflicts_with_all = ["spokes_left", "spokes_right"])]
    spokes: Option<u32>,

    #[arg(long, default_value_t = 18)]
    spokes_left: u32,

    #[arg(long, default_value_t = 18)]
    spokes_right: u32,

    #[arg(long, default_value_t = 3)]
    crosses_left: u32,

    /// Default: the same as left
    #[arg(long)]
    crosses_right: Option<u32>,

    /// Left flange-to-center distance, mm
    #[arg(long, default_value_t = 25.0)]
    left_dist: f64,

    /// Right flange-to-center distance, mm (default: the same as left)
    #[arg(long)]
    right_dist: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn spoke_counts(&self) -> Result<(u32, u32), SpokeError> {
        match self.spokes {
            Some(total) if total % 2 != 0 => Err(SpokeError::InvalidInput {
                field: "spokes".to_string(),
                value: total.to_string(),
                reason: "an odd total cannot be split evenly between both sides".to_string(),
            }),
            Some(total) => Ok((total / 2, total / 2)),
            None => Ok((self.spokes_left, self.spokes_right)),
        }
    }

    fn run(&self) -> Result<String, SpokeError> {
        let (spokes_left, spokes_right) = self.spoke_counts()?;

        let lengths = compute(
            self.left_hub_diameter,
            self.right_hub_diameter.unwrap_or(self.left_hub_diameter),
            self.rim_diameter,
            self.hole_diameter,
            spokes_left,
            spokes_right,
            self.crosses_left,
            self.crosses_right.unwrap_or(self.crosses_left),
            self.left_dist,
            self.right_dist.unwrap_or(self.left_dist),
        )?;

        render(&lengths, self.format)
    }
}

fn render(lengths: &SpokeLengths, format: OutputFormat) -> Result<String, SpokeError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Left spokes length: {}\nRight spokes length: {}",
            lengths.left, lengths.right
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(lengths)?),
    }
}

fn main() {
    let args = Args::parse();

    match args.format {
        OutputFormat::Text => logger::init_cli_logger(args.verbose),
        OutputFormat::Json => logger::init_json_logger(args.verbose),
    }
    tracing::debug!("Arguments: {:?}", args);

    match args.run() {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}
