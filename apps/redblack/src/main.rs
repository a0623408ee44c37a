use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redblack_config::{RunConfig, load_config};
use redblack_logging::{LogCollector, LogFormat, LogLevel, LoggingConfig};
use redblack_tree::{RedBlackTree, TraversalOrder};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "redblack")]
#[command(about = "Build red-black trees from key lists and print their shape.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Diagnostic format: plain, json or compact.
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

impl LogArgs {
    /// Command-line flags override the file's logging section.
    fn apply(&self, mut config: LoggingConfig) -> LoggingConfig {
        if self.verbose > 0 {
            config.level = LogLevel::from_verbosity(self.verbose);
        }
        if let Some(format) = self.log_format {
            config.format = format;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert keys in order and print the resulting tree.
    Build {
        /// Keys to insert, in order. Commas also separate keys.
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Key file inserted after the positional keys.
        #[arg(long)]
        keys_file: Option<PathBuf>,
        /// Traversal to print; repeatable.
        #[arg(long = "order", value_name = "ORDER", default_value = "prefix")]
        orders: Vec<TraversalOrder>,
        /// Key to look up; repeatable.
        #[arg(long = "contains", value_name = "KEY", allow_negative_numbers = true)]
        probes: Vec<i64>,
        /// Print the smallest and largest key.
        #[arg(long)]
        bounds: bool,
        /// Skip the invariant check on the finished tree.
        #[arg(long)]
        no_validate: bool,
        /// Print fixup statistics.
        #[arg(long)]
        stats: bool,
    },

    /// Run a job described by a JSON or YAML config file.
    Run {
        #[arg(long)]
        config: PathBuf,
    },

    /// Insert random keys, validating after every insert.
    Stress {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// RNG seed. Random when omitted; the seed used is printed.
        #[arg(long)]
        seed: Option<u64>,
        /// Smallest key to draw.
        #[arg(long, default_value_t = -1_000_000, allow_negative_numbers = true)]
        min: i64,
        /// Largest key to draw.
        #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
        max: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = LoggingConfig::new().with_level(LogLevel::Warn);

    match cli.cmd {
        Command::Build {
            keys,
            keys_file,
            orders,
            probes,
            bounds,
            no_validate,
            stats,
        } => {
            let config = RunConfig {
                keys,
                keys_file,
                orders,
                probes,
                bounds,
                validate: !no_validate,
                stats,
                logging: cli.log.apply(quiet),
            };
            let mut log = LogCollector::with_config(config.logging.clone());
            let result = build_from_config(&config, &mut io::stdout().lock(), &mut log);
            flush_log(&log)?;
            result
        }
        Command::Run { config: path } => {
            let config = load_config(&path)?;
            let mut log = LogCollector::with_config(cli.log.apply(config.logging.clone()));
            log.info("config", format!("loaded {}", path.display()));

            let result = build_from_config(&config, &mut io::stdout().lock(), &mut log);
            flush_log(&log)?;
            result
        }
        Command::Stress {
            count,
            seed,
            min,
            max,
        } => {
            let mut log = LogCollector::with_config(cli.log.apply(quiet));
            let result = stress(count, seed, min, max, &mut io::stdout().lock(), &mut log);
            flush_log(&log)?;
            result
        }
    }
}

fn flush_log(log: &LogCollector) -> Result<()> {
    log.write_to(io::stderr().lock())
        .context("Failed to write diagnostics")
}

/// Build the tree a config describes and report on it.
fn build_from_config(config: &RunConfig, out: &mut impl Write, log: &mut LogCollector) -> Result<()> {
    let keys = config.all_keys()?;
    if let Some(path) = &config.keys_file {
        log.info("config", format!("read keys from {}", path.display()));
    }
    log.info("cli", format!("inserting {} keys", keys.len()));

    let mut tree = RedBlackTree::new();
    for key in keys {
        tree.insert(key);
        log.debug("tree", format!("inserted {}", key));
    }
    log.info(
        "tree",
        format!("built tree: size {}, height {}", tree.size(), tree.height()),
    );

    report(config, &tree, out, log)
}

fn report(
    config: &RunConfig,
    tree: &RedBlackTree<i64>,
    out: &mut impl Write,
    log: &mut LogCollector,
) -> Result<()> {
    for &order in &config.orders {
        writeln!(out, "{}:{}", order, tree.to_order_string(order))?;
    }
    for probe in &config.probes {
        writeln!(out, "contains {}: {}", probe, tree.contains(probe))?;
    }
    if config.bounds {
        match (tree.min(), tree.max()) {
            (Ok(min), Ok(max)) => {
                writeln!(out, "min: {}", min)?;
                writeln!(out, "max: {}", max)?;
            }
            (Err(err), _) | (_, Err(err)) => {
                log.warn("tree", format!("bounds unavailable: {}", err));
                writeln!(out, "min: empty tree")?;
                writeln!(out, "max: empty tree")?;
            }
        }
    }
    writeln!(out, "size: {}", tree.size())?;

    if config.stats {
        let stats = tree.fixup_stats();
        writeln!(
            out,
            "fixups: recolor={} left_left={} right_right={} left_right={} right_left={} rotations={}",
            stats.recolorings,
            stats.left_left,
            stats.right_right,
            stats.left_right,
            stats.right_left,
            stats.rotations()
        )?;
        log.debug("tree", format!("{} restructurings", stats.restructurings()));
    }

    if config.validate {
        let black_height = match tree.validate() {
            Ok(black_height) => black_height,
            Err(err) => {
                log.error("tree", err.to_string());
                return Err(err).context("tree failed validation");
            }
        };
        log.info("tree", format!("valid, black height {}", black_height));
        writeln!(out, "black-height: {}", black_height)?;
    }
    Ok(())
}

fn stress(
    count: usize,
    seed: Option<u64>,
    min: i64,
    max: i64,
    out: &mut impl Write,
    log: &mut LogCollector,
) -> Result<()> {
    if min > max {
        bail!("--min {} is greater than --max {}", min, max);
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    log.info("cli", format!("stress: {} keys in {}..={}, seed {}", count, min, max, seed));

    let mut tree = RedBlackTree::new();
    for step in 0..count {
        let key = rng.random_range(min..=max);
        tree.insert(key);
        tree.validate()
            .with_context(|| format!("insert #{} ({}) broke the tree (seed {})", step, key, seed))?;
    }

    let black_height = tree.validate()?;
    let stats = tree.fixup_stats();
    log.info(
        "tree",
        format!(
            "{} recolorings, {} restructurings",
            stats.recolorings,
            stats.restructurings()
        ),
    );

    writeln!(out, "seed: {}", seed)?;
    writeln!(out, "size: {}", tree.size())?;
    writeln!(out, "height: {}", tree.height())?;
    writeln!(out, "black-height: {}", black_height)?;
    writeln!(out, "rotations: {}", stats.rotations())?;
    Ok(())
}
