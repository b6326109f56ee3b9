use chrono::Local;
use clap::Parser;
use diarist::application::{ConfigService, InitService, InsightsService, SearchQuery};
use diarist::cli::{output, Cli, Commands};
use diarist::error::Result;
use diarist::infrastructure::FileSystemRepository;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; DIARIST_LOG overrides the level picked by --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "diarist=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("DIARIST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Some(Commands::Init { path }) => InitService::execute(&path),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                if json {
                    return print_json(&config);
                }
                println!("data_file = {}", config.data_file);
                println!("window_days = {}", config.window_days);
                println!("recent_count = {}", config.recent_count);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: diarist config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, window_days, recent_count, created");
                Ok(())
            }
        }
        Some(Commands::Search {
            keyword,
            from,
            to,
            highlight,
        }) => {
            let query = SearchQuery::from_args(keyword.as_deref(), from.as_deref(), to.as_deref())?;
            let insights = load_insights()?;
            let results = query.run(insights.entries());

            if json {
                return print_json(&results);
            }
            print!(
                "{}",
                output::format_search_results(&results, &query.keyword, highlight)
            );
            Ok(())
        }
        Some(Commands::Moods) => {
            let stats = load_insights()?.moods();
            if json {
                return print_json(&stats);
            }
            println!("{}", output::format_mood_stats(&stats).trim_end());
            Ok(())
        }
        Some(Commands::Frequency { days }) => {
            let stats = load_insights()?.frequency(days, today());
            if json {
                return print_json(&stats);
            }
            print!("{}", output::format_frequency(&stats));
            Ok(())
        }
        Some(Commands::Trend) => {
            let stats = load_insights()?.trend();
            if json {
                return print_json(&stats);
            }
            println!("{}", output::format_trend(&stats).trim_end());
            Ok(())
        }
        Some(Commands::Streak) => {
            let stats = load_insights()?.streak(today());
            if json {
                return print_json(&stats);
            }
            print!("{}", output::format_streak(&stats));
            Ok(())
        }
        Some(Commands::Stats) => {
            let summary = load_insights()?.summary(today());
            if json {
                return print_json(&summary);
            }
            print!("{}", output::format_summary(&summary));
            Ok(())
        }
        None => {
            println!("diarist - Insights for a local journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn load_insights() -> Result<InsightsService> {
    let repo = FileSystemRepository::discover()?;
    InsightsService::load(&repo)
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}
