//! Command-line front end for the Folio portfolio core.
//!
//! # Responsibility
//! - Browse the bundled catalog with the same filters the listing pages use.
//! - Drive the contact inbox and theme preference against the configured
//!   database.

use clap::{Parser, Subcommand};
use folio_core::db::open_db;
use folio_core::{
    all_skills, bundled_posts, bundled_projects, bundled_skills, core_version, init_logging,
    listing, post_facets, post_outline, project_facets, ContactMessage, ContactService,
    ContactSubmission, FilterState, FolioConfig, MessageId, SqliteMessageRepository,
    SqlitePreferenceRepository, Theme, ThemeService,
};
use log::error;
use rusqlite::Connection;
use std::error::Error;
use std::process::ExitCode;

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio catalog, contact inbox and theme preference")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List projects, optionally filtered
    Projects {
        /// Case-insensitive text matched against title and description
        #[arg(short, long, default_value = "")]
        query: String,
        /// Exact category
        #[arg(short, long)]
        category: Option<String>,
        /// Technology badge; repeat to match any of several
        #[arg(short, long = "tech")]
        tech: Vec<String>,
    },

    /// List blog posts, optionally filtered
    Posts {
        /// Case-insensitive text matched against title and excerpt
        #[arg(short, long, default_value = "")]
        query: String,
        /// Tag; repeat to match any of several
        #[arg(short, long = "tag")]
        tag: Vec<String>,
    },

    /// Show one project
    Project { slug: String },

    /// Show one post with its outline and neighbours
    Post { slug: String },

    /// List skills by group
    Skills,

    /// Submit a contact message
    Contact {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        message: String,
    },

    /// Manage received contact messages
    #[command(subcommand)]
    Messages(MessageCommands),

    /// Show or change the theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Print the core version
    Version,
}

#[derive(Debug, Subcommand)]
enum MessageCommands {
    /// List messages, newest first
    List {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// List unread messages, newest first
    Unread {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show one message
    Show { id: MessageId },
    /// Mark one message as read
    Read { id: MessageId },
    /// Delete one message
    Delete { id: MessageId },
    /// Print inbox counters
    Stats,
}

#[derive(Debug, Subcommand)]
enum ThemeCommands {
    /// Print the active theme
    Show {
        /// Theme used when nothing is stored
        #[arg(long, default_value = "light")]
        system: Theme,
    },
    /// Flip between light and dark
    Toggle {
        #[arg(long, default_value = "light")]
        system: Theme,
    },
    /// Store an explicit theme
    Set { theme: Theme },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let config = FolioConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    match cli.command {
        Commands::Projects {
            query,
            category,
            tech,
        } => {
            let mut state = FilterState::new();
            state.set_query(&query);
            if let Some(category) = category {
                state.select_category(&category);
            }
            for value in &tech {
                state.toggle_tag(value);
            }
            list_projects(&state)
        }
        Commands::Posts { query, tag } => {
            let mut state = FilterState::new();
            state.set_query(&query);
            for value in &tag {
                state.toggle_tag(value);
            }
            list_posts(&state)
        }
        Commands::Project { slug } => show_project(&slug),
        Commands::Post { slug } => show_post(&slug),
        Commands::Skills => {
            for group in bundled_skills()? {
                println!("{}: {}", group.name, group.skills.join(", "));
            }
            println!("{} skills total", all_skills()?.len());
            Ok(())
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let conn = open_db(&config.db_path)?;
            let service = ContactService::new(SqliteMessageRepository::try_new(&conn)?);
            let stored = service.submit(&ContactSubmission::new(name, email, message))?;
            println!("Thanks {}, your message was received ({})", stored.name, stored.id);
            Ok(())
        }
        Commands::Messages(command) => {
            let conn = open_db(&config.db_path)?;
            run_messages(&conn, command)
        }
        Commands::Theme(command) => {
            let conn = open_db(&config.db_path)?;
            run_theme(&conn, command)
        }
        Commands::Version => {
            println!("folio_core version={}", core_version());
            Ok(())
        }
    }
}

fn list_projects(state: &FilterState) -> CliResult {
    let projects = bundled_projects()?;
    let facets = project_facets(projects);
    println!("Categories: {}", facets.categories.join(", "));
    println!("Technologies: {}", facets.tags.join(", "));

    let view = listing(projects, state);
    println!("{}", view.summary("projects"));
    for project in &view.items {
        println!(
            "  {} [{}] {} ({})",
            project.slug,
            project.category,
            project.title,
            project.technologies.join(", ")
        );
    }
    if view.items.is_empty() {
        println!("  no projects match the current filters");
    }
    Ok(())
}

fn list_posts(state: &FilterState) -> CliResult {
    let posts = bundled_posts()?;
    println!("Tags: {}", post_facets(posts).tags.join(", "));

    let view = listing(posts, state);
    println!("{}", view.summary("posts"));
    for post in &view.items {
        println!(
            "  {} {} {} ({} min read)",
            post.date, post.slug, post.title, post.read_time
        );
    }
    if view.items.is_empty() {
        println!("  no posts match the current filters");
    }
    Ok(())
}

fn show_project(slug: &str) -> CliResult {
    let Some(project) = bundled_projects()?.get_by_slug(slug) else {
        println!("Project not found: {slug}");
        return Ok(());
    };

    println!("{} ({}, {})", project.title, project.category, project.date);
    println!("Role: {}", project.role);
    println!("{}", project.description);
    println!("Technologies: {}", project.technologies.join(", "));
    for feature in &project.key_features {
        println!("  - {feature}");
    }
    if let Some(github) = &project.github {
        println!("Source: {github}");
    }
    if let Some(live) = &project.live {
        println!("Live: {live}");
    }
    Ok(())
}

fn show_post(slug: &str) -> CliResult {
    let posts = bundled_posts()?;
    let Some(post) = posts.get_by_slug(slug) else {
        println!("Post not found: {slug}");
        return Ok(());
    };

    println!("{} ({}, {} min read)", post.title, post.date, post.read_time);
    println!("Tags: {}", post.tags.join(", "));
    for entry in post_outline(&post.content) {
        let indent = if entry.level > 2 { "    " } else { "  " };
        println!("{indent}{} #{}", entry.text, entry.anchor);
    }

    let adjacent = posts.items_adjacent_to(slug);
    if let Some(previous) = adjacent.previous {
        println!("Previous: {} ({})", previous.title, previous.slug);
    }
    if let Some(next) = adjacent.next {
        println!("Next: {} ({})", next.title, next.slug);
    }
    Ok(())
}

fn run_messages(conn: &Connection, command: MessageCommands) -> CliResult {
    let service = ContactService::new(SqliteMessageRepository::try_new(conn)?);
    match command {
        MessageCommands::List { limit } => print_messages(&service.list_messages(limit)?),
        MessageCommands::Unread { limit } => print_messages(&service.unread_messages(limit)?),
        MessageCommands::Show { id } => {
            let message = service.message(id)?;
            print_messages(std::slice::from_ref(&message));
            println!("{}", message.message);
        }
        MessageCommands::Read { id } => {
            if service.mark_as_read(id)? {
                println!("Marked {id} as read");
            } else {
                println!("{id} was already read");
            }
        }
        MessageCommands::Delete { id } => {
            service.delete_message(id)?;
            println!("Deleted {id}");
        }
        MessageCommands::Stats => {
            let stats = service.stats()?;
            println!(
                "total={} unread={} read={}",
                stats.total, stats.unread, stats.read
            );
        }
    }
    Ok(())
}

fn print_messages(messages: &[ContactMessage]) {
    for message in messages {
        let marker = if message.is_read { ' ' } else { '*' };
        println!(
            "{marker} {} {} <{}> at {}",
            message.id, message.name, message.email, message.created_at
        );
    }
}

fn run_theme(conn: &Connection, command: ThemeCommands) -> CliResult {
    let service = ThemeService::new(SqlitePreferenceRepository::try_new(conn)?);
    let theme = match command {
        ThemeCommands::Show { system } => service.current(system)?,
        ThemeCommands::Toggle { system } => service.toggle(system)?,
        ThemeCommands::Set { theme } => service.set(theme)?,
    };
    println!("theme={theme}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, MessageCommands, ThemeCommands};
    use clap::Parser;
    use folio_core::Theme;

    #[test]
    fn repeated_tech_flags_collect() {
        let cli = Cli::parse_from([
            "folio", "projects", "--tech", "Python", "--tech", "Flask", "-c", "Web App",
        ]);
        match cli.command {
            Commands::Projects {
                query,
                category,
                tech,
            } => {
                assert!(query.is_empty());
                assert_eq!(category.as_deref(), Some("Web App"));
                assert_eq!(tech, vec!["Python", "Flask"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn theme_and_message_ids_parse() {
        let cli = Cli::parse_from(["folio", "theme", "set", "dark"]);
        assert!(matches!(
            cli.command,
            Commands::Theme(ThemeCommands::Set { theme: Theme::Dark })
        ));

        assert!(Cli::try_parse_from(["folio", "messages", "read", "not-a-uuid"]).is_err());
        let cli = Cli::parse_from([
            "folio",
            "messages",
            "read",
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
        ]);
        assert!(matches!(
            cli.command,
            Commands::Messages(MessageCommands::Read { .. })
        ));
    }
}
