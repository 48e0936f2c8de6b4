use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use youtube::{
    params::{Order, PlaylistItemPart, ResourceType, SafeSearch, VideoDuration},
    Aggregated, PlaylistItemsParams, SearchParams, Target, YouTube,
};

mod config;
mod history;
mod util;

use config::Config;
use history::History;

fn init_logger() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    Ok(pretty_env_logger::try_init()?)
}

/// Search YouTube and pick videos to download.
#[derive(Parser)]
#[command(name = "finder", version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, short, env = "FINDER_CONFIG", default_value = "Config.toml")]
    config: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search videos, channels and playlists
    Search(SearchArgs),
    /// List the items of a playlist
    Playlist(PlaylistArgs),
    /// Show recently submitted values
    History {
        /// Only show this field
        field: Option<String>,
    },
}

#[derive(Args)]
struct SearchArgs {
    query: String,
    /// Number of results to fetch; 0 or less fetches everything
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    count: Option<i64>,
    #[arg(long)]
    channel: Option<String>,
    #[arg(long)]
    order: Option<Order>,
    #[arg(long = "type")]
    resource_type: Option<ResourceType>,
    /// RFC 3339 timestamp
    #[arg(long)]
    published_after: Option<String>,
    /// RFC 3339 timestamp
    #[arg(long)]
    published_before: Option<String>,
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    safe_search: Option<SafeSearch>,
    #[arg(long)]
    duration: Option<VideoDuration>,
    #[arg(long)]
    page_token: Option<String>,
}

#[derive(Args)]
struct PlaylistArgs {
    #[arg(long)]
    playlist: Option<String>,
    /// Comma separated playlist item ids
    #[arg(long)]
    id: Option<String>,
    /// Only items containing this video
    #[arg(long)]
    video: Option<String>,
    /// Number of items to fetch; 0 or less fetches everything
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    count: Option<i64>,
    /// Resource part to return
    #[arg(long, default_value_t = PlaylistItemPart::Snippet)]
    part: PlaylistItemPart,
    #[arg(long)]
    page_token: Option<String>,
}

impl SearchArgs {
    fn record(&self, history: &mut History) {
        history.record("query", &self.query);
        if let Some(channel) = &self.channel {
            history.record("channel", channel);
        }
    }

    fn params(self) -> SearchParams {
        SearchParams {
            channel_id: self.channel,
            order: self.order,
            resource_type: self.resource_type,
            published_after: self.published_after,
            published_before: self.published_before,
            region_code: self.region,
            safe_search: self.safe_search,
            video_duration: self.duration,
            page_token: self.page_token,
            ..SearchParams::query(self.query)
        }
    }
}

impl PlaylistArgs {
    fn record(&self, history: &mut History) {
        if let Some(playlist) = &self.playlist {
            history.record("playlist", playlist);
        }
    }

    fn params(self) -> PlaylistItemsParams {
        PlaylistItemsParams {
            part: self.part,
            id: self.id,
            playlist_id: self.playlist,
            video_id: self.video,
            page_token: self.page_token,
        }
    }
}

/// Builds the client, and only then records the submitted values, so a
/// request that can't be sent leaves the history untouched.
fn submit<F>(config: &Config, history: &mut History, record: F) -> Result<YouTube>
where
    F: FnOnce(&mut History),
{
    let youtube = YouTube::with_api_key(config.api_key()?.to_owned()).page_delay(config.page_delay());
    record(history);
    history.save(&config.history_path)?;
    Ok(youtube)
}

fn report(result: &Aggregated) -> Result<()> {
    print!("{}", util::render(result)?);
    if !result.is_success() {
        anyhow::bail!("The request finished with status {}", result.status);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }
    init_logger()?;

    let cli = Cli::parse();
    let config = Config::init(&cli.config).with_env_key(std::env::var("YOUTUBE_API").ok());
    let mut history = History::load(&config.history_path, config.history_limit)?;

    match cli.command {
        Command::Search(args) => {
            let youtube = submit(&config, &mut history, |h| args.record(h))?;
            let target = Target::from_count(args.count.unwrap_or(config.default_count));
            let result = youtube.search(&args.params(), target).await?;
            report(&result)
        }
        Command::Playlist(args) => {
            let youtube = submit(&config, &mut history, |h| args.record(h))?;
            let target = Target::from_count(args.count.unwrap_or(config.default_count));
            let result = youtube.playlist_items(&args.params(), target).await?;
            report(&result)
        }
        Command::History { field } => {
            let fields = match field {
                Some(field) => vec![field],
                None => history.fields().map(String::from).collect(),
            };
            for field in fields {
                println!("{}:", field);
                for value in history.recent(&field) {
                    println!("  {}", value);
                }
            }
            Ok(())
        }
    }
}
