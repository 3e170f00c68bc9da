use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use libris::api::LibraryApi;
use libris::commands::{BookCard, BookDetail, CmdMessage, MessageLevel};
use libris::config::LibrisConfig;
use libris::error::Result;
use libris::fetch::FileFetcher;
use libris::paginate::PageView;
use libris::provider::{DemoShelf, JsonShelf};
use libris::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LibraryApi<FileStore>,
    data_dir: PathBuf,
    shelf_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List { search, genre }) => handle_list(&mut ctx, search, genre),
        Some(Commands::Favorites) => handle_favorites(&mut ctx),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Read { id, page }) => handle_read(&mut ctx, id, page),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, id),
        Some(Commands::Mark { id, page }) => handle_mark(&mut ctx, id, page),
        Some(Commands::Unmark { id }) => handle_unmark(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn data_dir() -> PathBuf {
    // LIBRIS_HOME overrides the platform data dir (used by the test suite)
    if let Ok(home) = std::env::var("LIBRIS_HOME") {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "libris", "libris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".libris"))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir();
    let config = LibrisConfig::load(&data_dir).unwrap_or_default();
    let shelf_dir = config.shelf_dir(&data_dir);

    let mut api = LibraryApi::new(FileStore::new(data_dir.clone()));

    let shelf = JsonShelf::new(shelf_dir.clone());
    let result = if shelf.exists() {
        api.load(&shelf)
    } else {
        api.load(&DemoShelf)
    };
    print_messages(&result.messages);

    Ok(AppContext {
        api,
        data_dir,
        shelf_dir,
    })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, genre: Option<String>) -> Result<()> {
    if let Some(query) = search {
        ctx.api.set_query(query);
    }
    if let Some(tag) = genre {
        ctx.api.set_genre(&tag);
    }

    let result = ctx.api.browse()?;
    print_cards(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.library()?;
    print_cards(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.open_book(&id)?;
    if let Some(detail) = &result.detail {
        print_detail(detail);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_read(ctx: &mut AppContext, id: String, page: Option<usize>) -> Result<()> {
    let fetcher = FileFetcher::new(ctx.shelf_dir.clone());
    let result = ctx.api.read(&fetcher, &id, page)?;
    if let Some(view) = &result.page {
        print_page(ctx, &id, view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.toggle_favorite(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark(ctx: &mut AppContext, id: String, page: Option<u32>) -> Result<()> {
    let result = match page {
        // An explicit page always (re)saves the bookmark
        Some(p) => ctx.api.add_bookmark(&id, Some(p))?,
        None => ctx.api.toggle_bookmark(&id)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_unmark(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.remove_bookmark(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = LibrisConfig::load(&ctx.data_dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("shelf-dir"), None) => {
            println!("shelf-dir = {}", config.shelf_dir(&ctx.data_dir).display());
        }
        (Some("shelf-dir"), Some(v)) => {
            config.shelf_dir = Some(PathBuf::from(&v));
            config.save(&ctx.data_dir)?;
            println!("{}", format!("shelf-dir set to {}", v).green());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const MARKER_WIDTH: usize = 6;
const FAVORITE_MARKER: &str = "♥";
const BOOKMARK_MARKER: &str = "⌖";

fn print_cards(cards: &[BookCard]) {
    for card in cards {
        let id_str = format!("{}. ", card.book.id);

        let mut markers = String::new();
        if card.is_favorite {
            markers.push_str(FAVORITE_MARKER);
            markers.push(' ');
        }
        if card.has_bookmark {
            markers.push_str(BOOKMARK_MARKER);
        }

        let label = match &card.book.genre {
            Some(genre) => format!("{} — {} ({})", card.book.title, card.book.author, genre),
            None => format!("{} — {}", card.book.title, card.book.author),
        };

        let available = LINE_WIDTH.saturating_sub(id_str.width() + MARKER_WIDTH);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "  {}{}{} {}",
            id_str.yellow(),
            label_display,
            " ".repeat(padding),
            markers.red()
        );
    }
}

fn print_detail(detail: &BookDetail) {
    println!("{}", detail.book.title.bold());
    println!("{}", detail.book.author);
    println!(
        "genre: {}",
        detail.book.genre.as_deref().unwrap_or("not set").dimmed()
    );
    println!();
    println!(
        "{}",
        detail
            .book
            .description
            .as_deref()
            .unwrap_or("No description.")
    );
    println!();

    if detail.is_favorite {
        println!("{} in favorites", FAVORITE_MARKER.red());
    }
    match &detail.bookmark {
        Some(bm) => println!(
            "{} bookmark at page {}, saved {}",
            BOOKMARK_MARKER.red(),
            bm.page,
            format_time_ago(bm.saved_at).dimmed()
        ),
        None => println!("{}", "no bookmark".dimmed()),
    }
}

fn print_page(ctx: &AppContext, id: &str, view: &PageView) {
    if let Some(book) = ctx.api.collection().iter().find(|b| b.id == id) {
        println!("{}", book.title.bold());
        println!("{}", book.author);
        println!("{}", "-".repeat(32));
    }
    println!("{}", view.text);
    println!();
    println!(
        "{}",
        format!("Page {} of {}", view.shown_page, view.total_pages).dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
