use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use docket_config::{Config, Granularity};
use docket_engine::{Buffer, ChartLayout, Document, TextBuffer, WordBuffer, read_document};
use docket_tickets::{ContainerKind, WorkSession, read_tickets};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

/// Edit plain-text documents, chart their words and work trouble tickets
#[derive(Debug, Parser)]
#[command(name = "docket", version, about)]
struct Cli {
    /// Config file to use instead of ~/.config/docket/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a word frequency chart for FILE (or stdin)
    Stats(StatsArgs),
    /// Load FILE (or stdin) and write its content back out
    Dump(DumpArgs),
    /// Read `<priority> <description>` lines and work them in container order
    Tickets(TicketsArgs),
    /// Write a config file holding the default settings
    Init(InitArgs),
}

#[derive(Debug, Args)]
struct StatsArgs {
    file: Option<PathBuf>,

    /// Words longer than this are truncated
    #[arg(long)]
    key_width: Option<usize>,

    /// Width of the longest bar
    #[arg(long)]
    histogram_width: Option<usize>,
}

#[derive(Debug, Args)]
struct DumpArgs {
    file: Option<PathBuf>,

    /// Treat the document as whitespace-separated words, one per output line
    #[arg(long)]
    words: bool,
}

#[derive(Debug, Args)]
struct TicketsArgs {
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = OrderArg::Fifo)]
    order: OrderArg,
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Replace an existing config file
    #[arg(long)]
    force: bool,
}

/// Order in which tickets are worked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    /// Oldest ticket first
    #[default]
    Fifo,
    /// Newest ticket first
    Lifo,
    /// Highest priority first
    Priority,
}

impl From<OrderArg> for ContainerKind {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Fifo => Self::Fifo,
            OrderArg::Lifo => Self::Lifo,
            OrderArg::Priority => Self::Priority,
        }
    }
}

impl std::fmt::Display for OrderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "fifo"),
            Self::Lifo => write!(f, "lifo"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Settings from `--config`, else the default config file, else built-in defaults
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    let config = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?;
    if config.is_none() {
        log::debug!("no config at {}, using defaults", config_path.display());
    }
    Ok(config.unwrap_or_default())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Stats(args) => run_stats(args, &load_config(config_path)?, out),
        Command::Dump(args) => run_dump(args, &load_config(config_path)?, out),
        Command::Tickets(args) => run_tickets(args, out),
        Command::Init(args) => run_init(args, config_path, out),
    }
}

fn run_init<W: Write>(args: InitArgs, path: Option<&Path>, out: &mut W) -> Result<()> {
    let target = path.map_or_else(Config::config_path, Path::to_path_buf);
    if target.exists() && !args.force {
        anyhow::bail!(
            "Config file '{}' already exists, use --force to replace it",
            target.display()
        );
    }

    let config = Config::default();
    match path {
        Some(path) => config.save_to_path(path),
        None => config.save(),
    }
    .with_context(|| format!("Failed to write config file '{}'", target.display()))?;
    writeln!(out, "Wrote default config to {}", target.display())?;
    Ok(())
}

fn run_stats<W: Write>(args: StatsArgs, config: &Config, out: &mut W) -> Result<()> {
    let layout = ChartLayout {
        key_width: args.key_width.unwrap_or(config.chart.key_width),
        histogram_width: args.histogram_width.unwrap_or(config.chart.histogram_width),
    };
    let input = input_path(args.file, config);

    // Word counts do not depend on granularity
    let doc: Document<TextBuffer> = open_document(input.as_deref())?;
    doc.render_statistics_chart(out, layout)
        .context("Failed to write statistics")?;
    Ok(())
}

fn run_dump<W: Write>(args: DumpArgs, config: &Config, out: &mut W) -> Result<()> {
    let input = input_path(args.file, config);
    let granularity = if args.words {
        Granularity::Words
    } else {
        config.granularity
    };

    match granularity {
        Granularity::Text => dump::<TextBuffer, W>(input.as_deref(), out),
        Granularity::Words => dump::<WordBuffer, W>(input.as_deref(), out),
    }
}

fn dump<B: Buffer, W: Write>(input: Option<&Path>, out: &mut W) -> Result<()> {
    let doc: Document<B> = open_document(input)?;
    doc.write_to(out).context("Failed to write document")?;
    Ok(())
}

fn run_tickets<W: Write>(args: TicketsArgs, out: &mut W) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open tickets file '{}'", args.file.display()))?;
    let tickets = read_tickets(BufReader::new(file))
        .with_context(|| format!("Failed to read tickets from '{}'", args.file.display()))?;

    let mut session = WorkSession::new(ContainerKind::from(args.order).build());
    for ticket in tickets {
        session.submit(ticket);
    }
    log::info!("working {} tickets in {} order", session.pending(), args.order);

    while let Some(ticket) = session.work() {
        writeln!(out, "{ticket}")?;
    }
    Ok(())
}

/// FILE from the command line, else the configured default input, else stdin
fn input_path(file: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    file.or_else(|| config.default_input.clone())
}

fn open_document<B: Buffer>(path: Option<&Path>) -> Result<Document<B>> {
    match path {
        Some(path) => read_document(path)
            .with_context(|| format!("Failed to read document '{}'", path.display())),
        None => Document::from_reader(io::stdin().lock()).context("Failed to read stdin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run `docket --config <dir>/config.toml <args>` with `config` saved there
    fn run_with_config(dir: &TempDir, config: &Config, args: &[&str]) -> Result<String> {
        let config_path = dir.path().join("config.toml");
        config.save_to_path(&config_path).unwrap();

        let mut argv = vec!["docket", "--config", config_path.to_str().unwrap()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn run_to_string(dir: &TempDir, args: &[&str]) -> String {
        run_with_config(dir, &Config::default(), args).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_options() {
        let cli =
            Cli::try_parse_from(["docket", "stats", "draft.txt", "--key-width", "8"]).unwrap();

        match cli.command {
            Command::Stats(args) => {
                assert_eq!(args.file, Some(PathBuf::from("draft.txt")));
                assert_eq!(args.key_width, Some(8));
                assert_eq!(args.histogram_width, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_tickets_requires_file() {
        assert!(Cli::try_parse_from(["docket", "tickets"]).is_err());
    }

    #[test]
    fn test_parse_unknown_order() {
        assert!(Cli::try_parse_from(["docket", "tickets", "t.txt", "--order", "random"]).is_err());
    }

    #[test]
    fn test_stats_uses_command_line_widths() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "draft.txt", "Cat cat dog");
        let path = path.to_str().unwrap();

        let chart = run_to_string(
            &dir,
            &["stats", path, "--key-width", "6", "--histogram-width", "10"],
        );

        assert_eq!(
            chart,
            concat!(
                " Word  | Count   (* is rounded to nearest 1 occurrences)\n",
                "--------------------------\n",
                "   cat |     2   **\n",
                "   dog |     1   *\n",
            )
        );
    }

    #[test]
    fn test_stats_falls_back_to_config() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "draft.txt", "Cat cat dog");
        let mut config = Config::default();
        config.default_input = Some(path);
        config.chart.key_width = 6;
        config.chart.histogram_width = 10;

        let chart = run_with_config(&dir, &config, &["stats"]).unwrap();

        assert!(chart.starts_with(" Word  | Count"));
        assert_eq!(chart.lines().nth(1).map(str::len), Some(26));
    }

    #[test]
    fn test_stats_on_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.txt", "");

        let chart = run_to_string(&dir, &["stats", path.to_str().unwrap()]);

        assert_eq!(chart, "Document is empty, no stats generated\n");
    }

    #[test]
    fn test_dump_words_one_per_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "draft.txt", "the cat\n  sat ");

        let dumped = run_to_string(&dir, &["dump", path.to_str().unwrap(), "--words"]);

        assert_eq!(dumped, "the\ncat\nsat\n");
    }

    #[test]
    fn test_dump_text_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "draft.txt", "the cat\n  sat ");

        let dumped = run_to_string(&dir, &["dump", path.to_str().unwrap()]);

        assert_eq!(dumped, "the cat\n  sat ");
    }

    #[test]
    fn test_dump_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let err = run_with_config(&dir, &Config::default(), &["dump", path.to_str().unwrap()])
            .unwrap_err();

        assert!(format!("{err:#}").contains("missing.txt"));
    }

    #[test]
    fn test_tickets_in_priority_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "tickets.txt",
            "low Squeaky chair\ncritical Server down\nnormal Paper jam\n",
        );

        let output = run_to_string(
            &dir,
            &["tickets", path.to_str().unwrap(), "--order", "priority"],
        );
        let descriptions: Vec<_> = output
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with("ID=") && *line != "Description:")
            .collect();

        assert_eq!(descriptions, ["Server down", "Paper jam", "Squeaky chair"]);
        assert!(output.contains("Priority=Critical, Status=New"));
    }

    #[test]
    fn test_tickets_bad_priority_names_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "tickets.txt", "low Fine\nsoon Broken\n");
        let err = run_with_config(&dir, &Config::default(), &["tickets", path.to_str().unwrap()])
            .unwrap_err();

        assert!(format!("{err:#}").contains("Line 2"));
    }

    #[test]
    fn test_load_config_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();

        let config = load_config(Some(&dir.path().join("none.toml"))).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_dump_uses_configured_granularity() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "draft.txt", "the cat\n  sat ");
        let config = Config {
            granularity: Granularity::Words,
            ..Config::default()
        };

        let dumped = run_with_config(&dir, &config, &["dump", path.to_str().unwrap()]).unwrap();

        assert_eq!(dumped, "the\ncat\nsat\n");
    }

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");
        let cli = Cli::try_parse_from(["docket", "init", "--config", config_path.to_str().unwrap()])
            .unwrap();

        let mut out = Vec::new();
        run(cli, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("Wrote default config to "));
        assert_eq!(load_config(Some(&config_path)).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_replace_without_force() {
        let dir = TempDir::new().unwrap();
        let config_path = write_file(&dir, "config.toml", "granularity = \"words\"\n");
        let config_arg = config_path.to_str().unwrap();

        let cli = Cli::try_parse_from(["docket", "--config", config_arg, "init"]).unwrap();
        let err = run(cli, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            load_config(Some(&config_path)).unwrap().granularity,
            Granularity::Words
        );

        let cli = Cli::try_parse_from(["docket", "--config", config_arg, "init", "--force"]).unwrap();
        run(cli, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(load_config(Some(&config_path)).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_file(&dir, "config.toml", "granularity = \"sentences\"\n");
        let draft = write_file(&dir, "draft.txt", "text");
        let cli = Cli::try_parse_from([
            "docket",
            "--config",
            config_path.to_str().unwrap(),
            "dump",
            draft.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(cli, &mut Vec::<u8>::new()).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to load config file"));
    }
}
