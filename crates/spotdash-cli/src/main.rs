mod report;

use clap::{Parser, Subcommand};
use spotdash_engine::{aggregate, RankingProfile};
use spotdash_export::{write_comparison, BrandReport, ExportFormat};
use sqlx::PgPool;

#[derive(Debug, Parser)]
#[command(name = "spotdash-cli")]
#[command(about = "Spot analytics command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate the whole table, or an inclusive date range.
    Dashboard {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Aggregate every spot whose brand contains the given name.
    Brand { name: String },
    /// Export a side-by-side comparison of 2 to 5 brands.
    Compare {
        /// Brand names, one argument each.
        #[arg(required = true)]
        brands: Vec<String>,
        /// Output format: xlsx or pdf.
        #[arg(long, default_value = "xlsx")]
        format: String,
        /// Output file; defaults to comparacion.<ext> in the working dir.
        #[arg(long)]
        out: Option<String>,
    },
    /// List the distinct spot dates for the configured year.
    Dates,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = spotdash_core::load_app_config()?;
    let pool_config = spotdash_db::PoolConfig::from_app_config(&config);
    let pool = spotdash_db::connect_pool(&config.database_url, pool_config).await?;

    match cli.command {
        Commands::Dashboard {
            start_date,
            end_date,
        } => run_dashboard(&pool, start_date, end_date).await?,
        Commands::Brand { name } => run_brand(&pool, &name).await?,
        Commands::Compare {
            brands,
            format,
            out,
        } => run_compare(&pool, brands, &format, out).await?,
        Commands::Dates => run_dates(&pool, &config.date_year_prefix).await?,
    }

    Ok(())
}

async fn run_dashboard(
    pool: &PgPool,
    start_date: Option<String>,
    end_date: Option<String>,
) -> anyhow::Result<()> {
    let rows = match (start_date, end_date) {
        (Some(start), Some(end)) => spotdash_db::fetch_by_date_range(pool, &start, &end).await?,
        _ => spotdash_db::fetch_all(pool).await?,
    };
    let result = aggregate(&rows, RankingProfile::DASHBOARD);
    print!("{}", report::render("dashboard", rows.len(), &result));
    Ok(())
}

async fn run_brand(pool: &PgPool, name: &str) -> anyhow::Result<()> {
    let rows = spotdash_db::fetch_by_brand_substring(pool, name).await?;
    anyhow::ensure!(!rows.is_empty(), "no spots found for brand '{name}'");
    let result = aggregate(&rows, RankingProfile::BRAND_DETAIL);
    print!("{}", report::render(name, rows.len(), &result));
    Ok(())
}

async fn run_compare(
    pool: &PgPool,
    brands: Vec<String>,
    format: &str,
    out: Option<String>,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        (2..=5).contains(&brands.len()),
        "compare takes between 2 and 5 brand names"
    );
    let format: ExportFormat = format
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}; expected 'xlsx' or 'pdf'"))?;

    let fetches = brands
        .iter()
        .map(|brand| spotdash_db::fetch_by_brand_substring(pool, brand));
    let row_sets = futures::future::try_join_all(fetches).await?;

    let reports: Vec<BrandReport> = brands
        .into_iter()
        .zip(row_sets)
        .map(|(brand, rows)| BrandReport {
            brand,
            result: aggregate(&rows, RankingProfile::BRAND_DETAIL),
        })
        .collect();

    let bytes = write_comparison(&reports, format)?;
    let path = out.unwrap_or_else(|| format!("comparacion.{}", format.extension()));
    std::fs::write(&path, bytes)?;
    println!("wrote {path}");
    Ok(())
}

async fn run_dates(pool: &PgPool, year_prefix: &str) -> anyhow::Result<()> {
    let dates = spotdash_db::fetch_distinct_dates(pool, year_prefix).await?;
    for date in dates {
        println!("{date}");
    }
    Ok(())
}
