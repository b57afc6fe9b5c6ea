//! Command line interface for evaluating and simplifying circuits stored as
//! JSON circuit dictionaries.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use gates::generation::random_term;
use gates::language::{Circuit, Term, TruthTable};
use gates::report::{CsvFormatter, PrettyFormatter, SimplificationRow, truth_table};
use gates::rewriting::{RuleCatalog, Simplifier, SimplifyConfig, random::random_rewrite};
use gates::utils::json::load_json;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simplify boolean circuits with the laws of boolean algebra", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a circuit under an assignment
    Eval {
        /// Circuit dictionary (JSON)
        circuit: PathBuf,

        /// Variable values, e.g. `--set a=1 --set b=0`
        #[arg(short, long = "set", value_parser = parse_binding)]
        bindings: Vec<(String, bool)>,
    },
    /// Print the truth table of a circuit
    Table {
        circuit: PathBuf,

        #[arg(long)]
        csv: bool,
    },
    /// Simplify a circuit
    Simplify {
        circuit: PathBuf,

        #[command(flatten)]
        search: SearchArgs,

        #[arg(long)]
        csv: bool,
    },
    /// Simplify random terms and report the outcomes
    Bench {
        /// Number of terms
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Maximum term depth
        #[arg(short, long, default_value_t = 4)]
        depth: usize,

        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Variable names to draw from
        #[arg(long, value_delimiter = ',', default_value = "a,b,c,d")]
        variables: Vec<String>,

        /// Random rewrites applied to each term before simplifying
        #[arg(long, default_value_t = 0)]
        scramble: usize,

        #[command(flatten)]
        search: SearchArgs,

        #[arg(long)]
        csv: bool,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Simplifier settings (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exploration budget per search pass, overrides the config file
    #[arg(short, long)]
    max_explored: Option<usize>,
}

impl SearchArgs {
    fn load(&self) -> Result<SimplifyConfig> {
        let mut config = match &self.config {
            Some(path) => load_json(path)?,
            None => SimplifyConfig::default(),
        };
        if let Some(max_explored) = self.max_explored {
            config.max_explored = max_explored;
        }
        Ok(config)
    }
}

fn parse_binding(binding: &str) -> Result<(String, bool)> {
    let (name, value) = binding
        .split_once('=')
        .ok_or_else(|| anyhow!("expected `name=value`, got `{binding}`"))?;
    let value = match value {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => return Err(anyhow!("`{value}` is not a boolean, use 0 or 1")),
    };
    Ok((name.to_string(), value))
}

fn load_term(path: &Path) -> Result<Term> {
    let circuit: Circuit = load_json(path)?;
    let term = Term::try_from(&circuit)
        .with_context(|| format!("invalid circuit in {}", path.display()))?;
    info!("loaded {term} from {}", path.display());
    Ok(term)
}

fn print_rows(rows: &[SimplificationRow], csv: bool) -> Result<()> {
    if csv {
        CsvFormatter::write(rows, io::stdout())?;
    } else {
        println!("{}", PrettyFormatter::format(rows));
    }
    Ok(())
}

fn summary(rows: &[SimplificationRow]) -> String {
    let before: usize = rows.iter().map(|row| row.start_cost).sum();
    let after: usize = rows.iter().map(|row| row.best_cost).sum();
    let broken = rows.iter().filter(|row| !row.equivalent).count();

    let costs = format!("total cost {before} -> {after}");
    if broken == 0 {
        format!("{} ({})", costs.bold(), "all equivalent".green())
    } else {
        format!("{} ({})", costs.bold(), format!("{broken} NOT equivalent").red())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    match cli.command {
        Command::Eval { circuit, bindings } => {
            let term = load_term(&circuit)?;
            let bindings: BTreeMap<String, bool> = bindings.into_iter().collect();
            let value = term.evaluate(&bindings)?;
            println!("{}", u8::from(value));
        }
        Command::Table { circuit, csv } => {
            let term = load_term(&circuit)?;
            let table = TruthTable::of(&term);
            if csv {
                truth_table::write_csv(&table, io::stdout())?;
            } else {
                println!("{term}");
                println!("{}", truth_table::pretty(&table));
            }
        }
        Command::Simplify {
            circuit,
            search,
            csv,
        } => {
            let term = load_term(&circuit)?;
            let simplifier = Simplifier::new(RuleCatalog::standard()).with_config(search.load()?);
            let rows = [SimplificationRow::from(&simplifier.run(&term))];
            print_rows(&rows, csv)?;
            if !csv {
                println!("{}", summary(&rows));
            }
        }
        Command::Bench {
            count,
            depth,
            seed,
            variables,
            scramble,
            search,
            csv,
        } => {
            let simplifier = Simplifier::new(RuleCatalog::standard()).with_config(search.load()?);
            let variables: Vec<&str> = variables.iter().map(String::as_str).collect();
            let mut rng = StdRng::seed_from_u64(seed);

            let rows: Vec<SimplificationRow> = (0..count)
                .map(|_| {
                    let term = random_term(&variables, depth, &mut rng);
                    let term = random_rewrite(&term, RuleCatalog::standard(), scramble, &mut rng);
                    SimplificationRow::from(&simplifier.run(&term))
                })
                .collect();

            print_rows(&rows, csv)?;
            if !csv {
                println!("{}", summary(&rows));
            }
        }
    }

    Ok(())
}
