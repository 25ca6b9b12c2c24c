//! OpenAlex command-line client - Entry Point

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use openalex_client::{
    AnyEntity, EntityType, OpenAlexClient,
    config::{Config, api},
    formatters,
    id::EntityId,
    models::Entity,
};

#[derive(Parser, Debug)]
#[command(name = "openalex")]
#[command(about = "Query the OpenAlex scholarly metadata API")]
#[command(version)]
struct Cli {
    /// Contact email for the polite pool
    #[arg(long, env = "OPENALEX_EMAIL")]
    email: Option<String>,

    /// API base URL
    #[arg(long, env = "OPENALEX_BASE_URL", default_value = api::BASE_URL)]
    base_url: String,

    /// Entities per request (1-200)
    #[arg(long, env = "OPENALEX_PAGE_LIMIT", default_value_t = api::DEFAULT_PAGE_LIMIT)]
    page_limit: usize,

    /// Output format
    #[arg(long, default_value = "json")]
    format: Format,

    /// Print complete records instead of compact summaries (JSON only)
    #[arg(long)]
    full: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Markdown list
    Markdown,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get one entity by OpenAlex id, or a work by `doi:` / `pmid:` id
    Get { id: String },

    /// Get several entities of the same type
    Batch {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Full-text search over one entity type
    Search {
        /// work, author, institution, venue or concept
        entity_type: EntityType,
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Works citing a work
    CitedBy {
        work_id: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Works of an author, institution, venue or concept
    Associated {
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Works related to a work
    Related { work_id: String },

    /// Works a work cites
    References { work_id: String },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so stdout stays parseable.
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "Starting");

    let mut config = Config::new(cli.email).with_page_limit(cli.page_limit)?;
    config.base_url = cli.base_url;
    let client = OpenAlexClient::new(config)?;

    let entities = run(&client, cli.command).await?;

    let rendered = match cli.format {
        Format::Json if cli.full => serde_json::to_string_pretty(&entities)?,
        Format::Json => serde_json::to_string_pretty(&formatters::compact_entities(&entities))?,
        Format::Markdown => formatters::format_entities_markdown(&entities),
    };
    println!("{rendered}");

    Ok(())
}

async fn run(client: &OpenAlexClient, command: Command) -> anyhow::Result<Vec<AnyEntity>> {
    let entities = match command {
        Command::Get { id } => {
            let entity = if EntityId::parse(&id)?.is_namespaced() {
                client.get_work(&id).await?.map(Entity::into_any)
            } else {
                client.get_entity(&id).await?
            };
            entity.into_iter().collect()
        }
        Command::Batch { ids } => client.get_entities(&ids).await?,
        Command::Search { entity_type, query, limit } => {
            client.search(&query, entity_type, limit).await?
        }
        Command::CitedBy { work_id, limit } => {
            let work = require_work(client, &work_id).await?;
            into_any(client.cited_by_works(&work, limit).await?)
        }
        Command::Associated { id, limit } => into_any(client.associated_works(id.as_str(), limit).await?),
        Command::Related { work_id } => {
            let work = require_work(client, &work_id).await?;
            into_any(client.related_works(&work).await?)
        }
        Command::References { work_id } => {
            let work = require_work(client, &work_id).await?;
            into_any(client.referenced_works(&work).await?)
        }
    };
    Ok(entities)
}

async fn require_work(client: &OpenAlexClient, id: &str) -> anyhow::Result<openalex_client::models::Work> {
    client.get_work(id).await?.with_context(|| format!("work {id} not found"))
}

fn into_any<T: Entity>(entities: Vec<T>) -> Vec<AnyEntity> {
    entities.into_iter().map(Entity::into_any).collect()
}
