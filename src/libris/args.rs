use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Catalog browser for a personal digital book library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Search term matched against title and author
        #[arg(short, long)]
        search: Option<String>,

        /// Genre tag ("all" disables the genre filter)
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// List favorite books (from the annotation store)
    Favorites,

    /// Show the detail page for a book
    Show {
        /// Book id
        id: String,
    },

    /// Read a book in the paginated viewer
    Read {
        /// Book id
        id: String,

        /// Page to open (defaults to the saved bookmark, else 1)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Toggle the favorite mark for a book
    Fav {
        /// Book id
        id: String,
    },

    /// Toggle the bookmark for a book, or save it at an explicit page
    Mark {
        /// Book id
        id: String,

        /// Save the bookmark at this page instead of toggling
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Remove the bookmark for a book
    Unmark {
        /// Book id
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., shelf-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
