use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use factorial_forge::digits::DigitHistogram;
use factorial_forge::factorials::{Function, Precision, Value, evaluate, worker};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Function selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FunctionArg {
    Factorial,
    OddFactorial,
    EvenFactorial,
    PrimeFactorial,
    Subfactorial,
    DoubleFactorial,
    RisingFactorial,
    FallingFactorial,
    MultiFactorial,
    Superfactorial,
    Hyperfactorial,
    Superduperfactorial,
}

impl FunctionArg {
    pub fn to_function(self) -> Function {
        match self {
            FunctionArg::Factorial => Function::Factorial,
            FunctionArg::OddFactorial => Function::OddFactorial,
            FunctionArg::EvenFactorial => Function::EvenFactorial,
            FunctionArg::PrimeFactorial => Function::PrimeFactorial,
            FunctionArg::Subfactorial => Function::Subfactorial,
            FunctionArg::DoubleFactorial => Function::DoubleFactorial,
            FunctionArg::RisingFactorial => Function::RisingFactorial,
            FunctionArg::FallingFactorial => Function::FallingFactorial,
            FunctionArg::MultiFactorial => Function::MultiFactorial,
            FunctionArg::Superfactorial => Function::Superfactorial,
            FunctionArg::Hyperfactorial => Function::Hyperfactorial,
            FunctionArg::Superduperfactorial => Function::Superduperfactorial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrecisionArg {
    /// 64-bit signed, wraps silently on overflow
    Bounded,
    /// Exact, limited only by memory
    Arbitrary,
}

impl PrecisionArg {
    pub fn to_precision(self) -> Precision {
        match self {
            PrecisionArg::Bounded => Precision::Bounded,
            PrecisionArg::Arbitrary => Precision::Arbitrary,
        }
    }
}

/// Factorial Forge - exact factorial-family functions and their digit statistics
#[derive(Parser, Debug)]
#[command(name = "factorial-forge")]
#[command(about = "Compute factorial-like functions exactly and report digit frequencies")]
#[command(version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Function to evaluate
    #[arg(value_enum)]
    pub function: FunctionArg,

    /// `n`, or `x n` for rising-factorial, falling-factorial and multi-factorial
    #[arg(required = true, num_args = 1..=2)]
    pub arguments: Vec<i64>,

    /// Numeric representation to compute in
    #[arg(short, long, value_enum, default_value = "arbitrary")]
    pub precision: PrecisionArg,

    /// Print the digit frequency histogram of the result
    #[arg(short, long)]
    pub stats: bool,

    /// Refuse arguments whose absolute value exceeds this
    #[arg(long, default_value_t = 100_000)]
    pub max_argument: u64,

    /// Give up waiting for the result after this many seconds
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
#[derive(Debug)]
pub struct CliConfig {
    pub function: Function,
    pub arguments: Vec<i64>,
    pub precision: Precision,
    pub stats: bool,
    pub timeout: Option<Duration>,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let function = args.function.to_function();

        if args.arguments.len() != function.arity() {
            bail!(
                "{} takes {} argument(s), got {}",
                function,
                function.arity(),
                args.arguments.len()
            );
        }

        if let Some(value) = args
            .arguments
            .iter()
            .find(|v| v.unsigned_abs() > args.max_argument)
        {
            bail!(
                "Argument {} exceeds the ceiling of {} (raise it with --max-argument)",
                value,
                args.max_argument
            );
        }

        Ok(CliConfig {
            function,
            arguments: args.arguments,
            precision: args.precision.to_precision(),
            stats: args.stats,
            timeout: args.timeout_secs.map(Duration::from_secs),
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    CliConfig::try_from(args).context("Invalid arguments")
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn compute(config: &CliConfig) -> Result<Value> {
    let context = || format!("Failed to compute {}{:?}", config.function, config.arguments);

    match config.timeout {
        Some(timeout) => {
            let pending =
                worker::spawn(config.function, config.arguments.clone(), config.precision);
            pending.wait_timeout(timeout).with_context(context)
        }
        None => {
            evaluate(config.function, &config.arguments, config.precision).with_context(context)
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!(
        "Computing {}{:?} with {:?} precision",
        config.function, config.arguments, config.precision
    );

    let value = compute(&config)?;
    let rendered = value.to_string();
    println!("{}", rendered);

    if config.stats {
        let histogram = DigitHistogram::analyze(&rendered);
        info!("Result has {} digits", histogram.total());
        println!();
        println!("{}", histogram);
    }

    Ok(())
}
