use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use sql_vocab_catalog::Catalog;
use sql_vocab_core::{FragmentCategory, Statement, Vocabulary, build_delete};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI-side category names with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliCategory {
    Keyword,
    Operator,
    Suffix,
    Table,
    Column,
}

impl From<CliCategory> for FragmentCategory {
    fn from(category: CliCategory) -> Self {
        match category {
            CliCategory::Keyword => Self::Keyword,
            CliCategory::Operator => Self::Operator,
            CliCategory::Suffix => Self::Suffix,
            CliCategory::Table => Self::TableName,
            CliCategory::Column => Self::ColumnName,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sql-vocab")]
#[command(about = "Print SQL vocabulary fragments and generated statements")]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value of a named fragment.
    Fragment(FragmentArgs),
    /// List registered fragments as tab-separated lines.
    List(ListArgs),
    /// Print CREATE TABLE statements for a catalog.
    Create(CreateArgs),
    /// Print DROP TABLE statements for a catalog, in reverse order.
    Drop(CatalogArgs),
    /// Print a SELECT statement.
    Select(SelectArgs),
    /// Print a DELETE statement.
    Delete(DeleteArgs),
    /// Validate a catalog file.
    Check(CatalogArgs),
}

#[derive(Debug, Args)]
struct FragmentArgs {
    /// Fragment name (e.g. where, equal_param, TTTMisc).
    name: String,
    /// Restrict the lookup to one category.
    #[arg(long)]
    category: Option<CliCategory>,
    /// Catalog whose table and column names are added to the vocabulary.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Only list one category.
    #[arg(long)]
    category: Option<CliCategory>,
    /// Catalog whose table and column names are added to the vocabulary.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Catalog file (YAML, or JSON with a .json extension).
    #[arg(long)]
    catalog: PathBuf,
}

#[derive(Debug, Args)]
struct CreateArgs {
    /// Catalog file (YAML, or JSON with a .json extension).
    #[arg(long)]
    catalog: PathBuf,
    /// Only print the statement for this table.
    #[arg(long)]
    table: Option<String>,
}

#[derive(Debug, Args)]
struct SelectArgs {
    /// Table to select from.
    #[arg(long)]
    table: String,
    /// Comma-separated columns (default: *).
    #[arg(long)]
    columns: Option<String>,
    /// WHERE clause text, inserted verbatim.
    #[arg(long = "where")]
    where_clause: Option<String>,
    /// Column to order by.
    #[arg(long)]
    order_by: Option<String>,
    /// Sort descending (requires --order-by).
    #[arg(long, requires = "order_by")]
    desc: bool,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Table to delete from.
    #[arg(long)]
    table: String,
    /// WHERE clause text, inserted verbatim.
    #[arg(long = "where")]
    where_clause: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Fragment(args) => run_fragment(args),
        Command::List(args) => run_list(args),
        Command::Create(args) => run_create(args),
        Command::Drop(args) => run_drop(args),
        Command::Select(args) => run_select(args),
        Command::Delete(args) => run_delete(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_fragment(args: FragmentArgs) -> Result<(), String> {
    let vocab = load_vocabulary(args.catalog.as_deref())?;
    let value = match args.category {
        Some(category) => vocab.fragment_in(category.into(), &args.name),
        None => vocab.fragment(&args.name),
    }
    .map_err(|err| err.to_string())?;
    println!("{value}");
    Ok(())
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let vocab = load_vocabulary(args.catalog.as_deref())?;
    let wanted: Option<FragmentCategory> = args.category.map(Into::into);
    for fragment in vocab
        .iter()
        .filter(|fragment| wanted.is_none_or(|category| fragment.category == category))
    {
        println!("{}\t{}\t{}", fragment.category, fragment.name, fragment.value);
    }
    Ok(())
}

fn run_create(args: CreateArgs) -> Result<(), String> {
    let catalog = load_catalog(&args.catalog)?;
    let statements = match args.table {
        Some(name) => {
            let table = catalog.table(&name).map_err(|err| err.to_string())?;
            vec![table.create_sql().map_err(|err| err.to_string())?]
        }
        None => catalog.create_script().map_err(|err| err.to_string())?,
    };
    print_statements(&statements);
    Ok(())
}

fn run_drop(args: CatalogArgs) -> Result<(), String> {
    let catalog = load_catalog(&args.catalog)?;
    catalog.validate().map_err(|err| err.to_string())?;
    print_statements(&catalog.drop_script());
    Ok(())
}

fn run_select(args: SelectArgs) -> Result<(), String> {
    let columns = parse_csv_list(args.columns);
    let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();

    let mut statement = Statement::select(&column_refs, args.table);
    if let Some(clause) = args.where_clause {
        statement = statement.filter(clause);
    }
    if let Some(column) = args.order_by {
        statement = statement.order_by(column);
        if args.desc {
            statement = statement.descending();
        }
    }
    debug!(pieces = statement.pieces().len(), "rendered select");
    println!("{statement}");
    Ok(())
}

fn run_delete(args: DeleteArgs) -> Result<(), String> {
    println!(
        "{}",
        build_delete(&args.table, args.where_clause.as_deref())
    );
    Ok(())
}

fn run_check(args: CatalogArgs) -> Result<(), String> {
    let catalog = load_catalog(&args.catalog)?;
    catalog.validate().map_err(|err| err.to_string())?;
    let columns: usize = catalog.tables.iter().map(|table| table.columns.len()).sum();
    println!(
        "ok: {} tables, {} columns (catalog version {})",
        catalog.tables.len(),
        columns,
        catalog.version
    );
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog, String> {
    Catalog::load(path)
        .map_err(|err| format!("Failed to load catalog '{}': {err}", path.display()))
}

fn load_vocabulary(catalog: Option<&Path>) -> Result<Vocabulary, String> {
    match catalog {
        Some(path) => {
            let vocab = load_catalog(path)?
                .vocabulary()
                .map_err(|err| err.to_string())?;
            info!(fragments = vocab.len(), "vocabulary extended from catalog");
            Ok(vocab)
        }
        None => Ok(Vocabulary::builtin()),
    }
}

fn print_statements(statements: &[String]) {
    for statement in statements {
        println!("{statement};");
    }
}

fn parse_csv_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}
