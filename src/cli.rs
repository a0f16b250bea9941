use std::path::PathBuf;

mod terminal;

use bkm::domain::{BookmarkTag, BookmarkTitle, BookmarkUrl};
use bkm::opener::BrowserOpener;
use bkm::selector::{ConfirmedSelector, FuzzySelector};
use bkm::storage::JsonStorage;
use bkm::usecase::{
    AddBookmark, AddBookmarkInput, DeleteBookmark, DeleteBookmarkInput, OpenBookmark,
    OpenBookmarkInput, SearchBookmark, SearchBookmarkInput,
};
use clap::ArgAction;
use terminal::Colorize;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Override the path of the bookmarks file
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let storage = match self.file {
            Some(path) => JsonStorage::open(path)?,
            None => JsonStorage::open_default()?,
        };

        self.command.run(&storage)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Add a new bookmark
    ///
    /// Details can be given as flags, or interactively when no flag is set.
    Add(Add),

    /// Search bookmarks and open the selection in the browser
    Search(Search),

    /// Delete a bookmark
    ///
    /// The selection must be confirmed before anything is deleted.
    Delete(Delete),
}

impl Command {
    fn run(self, storage: &JsonStorage) -> anyhow::Result<()> {
        match self {
            Self::Add(command) => command.run(storage),
            Self::Search(command) => command.run(storage),
            Self::Delete(command) => command.run(storage),
        }
    }
}

#[derive(Debug, clap::Parser)]
struct Add {
    /// URL of the bookmark
    #[arg(short, long)]
    url: Option<String>,

    /// Title of the bookmark
    #[arg(short, long)]
    title: Option<String>,

    /// Description of the bookmark
    #[arg(short, long)]
    description: Option<String>,

    /// Tags (comma-separated)
    #[arg(short = 'T', long, value_delimiter = ',')]
    tags: Vec<String>,
}

impl Add {
    #[instrument(skip(storage))]
    fn run(self, storage: &JsonStorage) -> anyhow::Result<()> {
        let input = if self.any_flag_given() {
            AddBookmarkInput {
                url: self.url.unwrap_or_default(),
                title: self.title.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                tags: self.tags,
            }
        } else {
            prompt_for_bookmark()?
        };

        let bookmark = AddBookmark::new(storage).execute(input)?;

        println!("{}", "✅ Bookmark added".success());
        println!();
        println!("  URL:         {}", bookmark.url());
        println!("  Title:       {}", bookmark.title());
        if !bookmark.description().is_empty() {
            println!("  Description: {}", bookmark.description());
        }
        if !bookmark.tags().is_empty() {
            let tags: Vec<&str> = bookmark.tags().iter().map(BookmarkTag::as_str).collect();
            println!("  Tags:        {}", tags.join(", "));
        }
        Ok(())
    }

    fn any_flag_given(&self) -> bool {
        self.url.is_some()
            || self.title.is_some()
            || self.description.is_some()
            || !self.tags.is_empty()
    }
}

/// Interactive fallback for `add` when no flag was given.
///
/// Each prompt validates through the same domain constructors the use case
/// applies, so the user gets immediate feedback instead of a late error.
fn prompt_for_bookmark() -> anyhow::Result<AddBookmarkInput> {
    let url: String = dialoguer::Input::new()
        .with_prompt("URL")
        .validate_with(|input: &String| {
            BookmarkUrl::new(input.as_str())
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;

    let title: String = dialoguer::Input::new()
        .with_prompt("Title")
        .validate_with(|input: &String| {
            BookmarkTitle::new(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;

    let description: String = dialoguer::Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let tags: String = dialoguer::Input::new()
        .with_prompt("Tags (comma-separated)")
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                return Ok(());
            }
            for (index, raw) in input.split(',').enumerate() {
                if let Err(err) = BookmarkTag::new(raw) {
                    return Err(format!("invalid tag at position {}: {err}", index + 1));
                }
            }
            Ok(())
        })
        .interact_text()?;

    Ok(AddBookmarkInput {
        url,
        title,
        description,
        tags: split_tags(&tags),
    })
}

fn split_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(ToOwned::to_owned).collect()
    }
}

#[derive(Debug, clap::Parser)]
struct Search {
    /// Filter by tags (comma-separated)
    #[arg(short = 'T', long, value_delimiter = ',')]
    tags: Vec<String>,
}

impl Search {
    #[instrument(skip(storage))]
    fn run(self, storage: &JsonStorage) -> anyhow::Result<()> {
        let selector = FuzzySelector::new();
        let selected = SearchBookmark::new(storage, &selector)
            .execute(SearchBookmarkInput { tags: self.tags })?;

        let Some(bookmark) = selected else {
            println!("{}", "Cancelled.".dim());
            return Ok(());
        };

        let opener = BrowserOpener::new();
        OpenBookmark::new(&opener).execute(OpenBookmarkInput { bookmark })?;
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Delete {
    /// Filter by tags (comma-separated)
    #[arg(short = 'T', long, value_delimiter = ',')]
    tags: Vec<String>,
}

impl Delete {
    #[instrument(skip(storage))]
    fn run(self, storage: &JsonStorage) -> anyhow::Result<()> {
        let selector = ConfirmedSelector::new(FuzzySelector::new(), "Delete this bookmark?");
        let deleted = DeleteBookmark::new(storage, &selector)
            .execute(DeleteBookmarkInput { tags: self.tags })?;

        match deleted {
            Some(bookmark) => {
                println!("{}", format!("✅ Deleted '{}'", bookmark.title()).success());
            }
            None => println!("{}", "Cancelled.".dim()),
        }
        Ok(())
    }
}
