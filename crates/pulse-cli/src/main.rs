mod report;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "pulse-cli")]
#[command(about = "Pulse analytics command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed a demo user with randomized posts and daily metrics.
    Seed {
        /// User to seed; defaults to the fixed demo user.
        #[arg(long)]
        user: Option<Uuid>,
        /// How many trailing days of daily metrics to generate.
        #[arg(long, default_value_t = 60)]
        days: i64,
        /// How many posts to generate.
        #[arg(long, default_value_t = 120)]
        posts: usize,
    },
    /// Print the analytics summary and recent daily series for a user.
    Report {
        /// User to report on; defaults to the fixed demo user.
        #[arg(long)]
        user: Option<Uuid>,
        /// Length of the daily series to print.
        #[arg(long, default_value_t = 14)]
        days: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pool = pulse_db::connect_pool_from_env().await?;
    pulse_db::run_migrations(&pool).await?;

    match cli.command {
        Commands::Seed { user, days, posts } => {
            let user_id = user.unwrap_or(pulse_db::DEMO_USER_ID);
            let summary = pulse_db::seed_demo_data(&pool, user_id, days, posts).await?;
            println!(
                "seeded user {user_id}: {} posts, {} metric days",
                summary.posts, summary.metric_days
            );
        }
        Commands::Report { user, days } => {
            let user_id = user.unwrap_or(pulse_db::DEMO_USER_ID);
            report::print_report(&pool, user_id, days).await?;
        }
    }

    Ok(())
}
