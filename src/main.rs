use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pocket_stories::config::Config;
use pocket_stories::navigation::{NavStack, Navigator, ScreenId, SystemBrowser};
use pocket_stories::state::{Category, HomeAction, HomeState, HomeStore, Store};
use pocket_stories::{DefaultStoriesController, SelectionPolicy, StoriesController};

/// Get the config directory path (~/.config/pocket-stories/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("pocket-stories"))
}

#[derive(Parser, Debug)]
#[command(
    name = "pocket-stories",
    about = "Replay topic picker interactions against a stories state snapshot"
)]
struct Args {
    /// Config file (defaults to ~/.config/pocket-stories/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON state snapshot to start from (defaults to an empty state)
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Click category chips in order and print the dispatched actions
    Click {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },
    /// Handle an external link click
    Open {
        url: String,
        /// Pretend the search dialog is the current screen
        #[arg(long)]
        from_search: bool,
        /// Log instead of launching the browser
        #[arg(long)]
        dry_run: bool,
    },
}

/// Prints every action before passing it to the wrapped store.
struct EchoStore<S> {
    inner: S,
}

impl<S: Store> Store for EchoStore<S> {
    fn state(&self) -> HomeState {
        self.inner.state()
    }

    fn dispatch(&self, action: HomeAction) {
        match &action {
            HomeAction::SelectCategory(name) => println!("select   {}", name),
            HomeAction::DeselectCategory(name) => println!("deselect {}", name),
            HomeAction::StoriesShown(stories) => println!("shown    {} stories", stories.len()),
            HomeAction::CategoriesChanged(categories) => {
                println!("catalog  {} categories", categories.len())
            }
        }
        self.inner.dispatch(action);
    }
}

fn load_state(path: &Path) -> Result<HomeState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid state JSON in {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;

    let initial = match &args.state {
        Some(path) => load_state(path)?,
        None => HomeState::default(),
    };

    let store = EchoStore {
        inner: HomeStore::new(initial),
    };

    match args.command {
        Command::Click { names } => {
            let nav = NavStack::new(vec![ScreenId::Home]);
            let controller =
                DefaultStoriesController::new(SystemBrowser::dry_run(true), &store, &nav)
                    .with_policy(SelectionPolicy::new(config.max_selected_categories));

            for name in &names {
                let state = store.state();
                let category = match state.categories.iter().find(|c| &c.name == name) {
                    Some(category) => category.clone(),
                    None => {
                        tracing::warn!(category = %name, "Category not in catalog");
                        Category::new(name, Vec::new())
                    }
                };
                controller.handle_category_click(&category);
            }

            let selections = store.state().categories_selections;
            println!(
                "{}",
                serde_json::to_string_pretty(&*selections)
                    .context("Failed to serialize selections")?
            );
        }
        Command::Open {
            url,
            from_search,
            dry_run,
        } => {
            let mut screens = vec![ScreenId::Home];
            if from_search {
                screens.push(ScreenId::SearchDialog);
            }
            let nav = NavStack::new(screens);
            let browser = if dry_run {
                SystemBrowser::dry_run(config.validate_links)
            } else {
                SystemBrowser::new(config.validate_links)
            };
            let controller = DefaultStoriesController::new(browser, &store, &nav);

            controller.handle_external_link_click(&url);

            if let Some(screen) = nav.current_screen() {
                println!("current screen: {}", screen);
            }
        }
    }

    Ok(())
}
