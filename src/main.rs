use clap::{Parser, Subcommand};

use habits::config::Config;
use habits::{
    hlog, hlog_error, DailySelection, FileStore, Frequency, FrequencyFilter, Result, TaskForm,
    Tracker,
};

/// Habits - a daily habit picker with a self-managed task pool
#[derive(Parser, Debug)]
#[command(name = "habits")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    HABITS_DEBUG=1  Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.habits/habits.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Directory holding the pool and selection records
    #[arg(long)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show today's tasks (the default)
    Today,

    /// Mark a task done, or not done again
    Toggle {
        /// Task id or a unique prefix of it
        id: String,
    },

    /// Draw a new set of tasks for today
    Refresh,

    /// Print today's completion percentage
    Progress,

    /// Manage the task pool
    #[command(subcommand)]
    Pool(PoolCommand),

    /// Show the configuration, or change where records are kept
    Config {
        /// Save a new default data directory
        #[arg(long)]
        set_data_dir: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PoolCommand {
    /// List templates in the pool
    List {
        /// Only show one frequency (daily, weekly, monthly)
        #[arg(short, long)]
        frequency: Option<Frequency>,
    },

    /// Add a template
    Add {
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(short, long, default_value = "daily")]
        frequency: Frequency,
    },

    /// Edit a template; unspecified fields keep their value
    Edit {
        /// Template id or a unique prefix of it
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        frequency: Option<Frequency>,
    },

    /// Remove a template
    Delete {
        /// Template id or a unique prefix of it
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    habits::log::init_with_debug(cli.debug);
    if habits::log::is_debug() {
        hlog!("habits starting (debug mode enabled)");
    }

    let result = run(cli);
    if let Err(e) = &result {
        hlog_error!("Command failed: {}", e);
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let command = cli.command.unwrap_or(Command::Today);
    hlog!("Command: {:?}", command);

    if let Command::Config { set_data_dir } = command {
        if let Some(dir) = set_data_dir {
            config.data_dir = Some(dir);
            config.save()?;
        }
        println!("Config file: {}", Config::config_path()?.display());
        println!("Data directory: {}", config.effective_data_dir()?.display());
        return Ok(());
    }

    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir;
    }
    let store = FileStore::new(&config.effective_data_dir()?);
    let mut tracker = Tracker::open(store)?;

    match command {
        Command::Today => {
            tracker.load_today()?;
            print_selection(tracker.selection());
        }
        Command::Toggle { id } => {
            tracker.load_today()?;
            let id = tracker.resolve_task_id(&id)?;
            tracker.toggle_completion(&id)?;
            print_selection(tracker.selection());
        }
        Command::Refresh => {
            tracker.refresh()?;
            print_selection(tracker.selection());
        }
        Command::Progress => {
            tracker.load_today()?;
            println!("{}%", tracker.progress_percent());
        }
        Command::Pool(cmd) => run_pool(&mut tracker, cmd)?,
        Command::Config { .. } => {}
    }

    Ok(())
}

fn run_pool(tracker: &mut Tracker<FileStore>, cmd: PoolCommand) -> Result<()> {
    match cmd {
        PoolCommand::List { frequency } => {
            let filter = FrequencyFilter::from(frequency);
            let templates = tracker.filter_pool(filter);
            println!(
                "Task pool: {} task{} (daily {}, weekly {}, monthly {})",
                templates.len(),
                if templates.len() == 1 { "" } else { "s" },
                tracker.count_pool(FrequencyFilter::Only(Frequency::Daily)),
                tracker.count_pool(FrequencyFilter::Only(Frequency::Weekly)),
                tracker.count_pool(FrequencyFilter::Only(Frequency::Monthly)),
            );
            for t in templates {
                match &t.description {
                    Some(d) => println!(
                        "  {}  [{:<7}] {} - {}",
                        t.id.short(),
                        t.frequency,
                        t.name,
                        d
                    ),
                    None => println!("  {}  [{:<7}] {}", t.id.short(), t.frequency, t.name),
                }
            }
        }
        PoolCommand::Add {
            name,
            description,
            frequency,
        } => {
            let id = tracker.add_task(&TaskForm::new(&name, &description, frequency))?;
            println!("Added {} ({})", name.trim(), id.short());
        }
        PoolCommand::Edit {
            id,
            name,
            description,
            frequency,
        } => {
            let id = tracker.resolve_template_id(&id)?;
            let Some(current) = tracker.pool().iter().find(|t| t.id == id).cloned() else {
                return Ok(());
            };
            let form = TaskForm {
                name: name.unwrap_or(current.name),
                description: description.or(current.description).unwrap_or_default(),
                frequency: frequency.unwrap_or(current.frequency),
            };
            tracker.edit_task(&id, &form)?;
            println!("Updated {}", id.short());
        }
        PoolCommand::Delete { id } => {
            let id = tracker.resolve_template_id(&id)?;
            if tracker.delete_task(&id)? {
                println!("Deleted {}", id.short());
            }
        }
    }
    Ok(())
}

fn print_selection(selection: Option<&DailySelection>) {
    let Some(selection) = selection else {
        println!("No tasks available");
        println!("Add some tasks with `habits pool add` to get started");
        return;
    };

    println!(
        "Today ({}): {} of {} completed",
        selection.date(),
        selection.completed_count(),
        selection.len()
    );
    println!("Progress: {}%", selection.progress().round());
    println!();

    if selection.all_completed() {
        println!("All done for today! Run `habits refresh` for a new set.");
        println!();
    }

    for task in selection.tasks() {
        let mark = if task.completed { "x" } else { " " };
        match &task.description {
            Some(d) => println!(
                "  [{}] {}  {} ({}) - {}",
                mark,
                task.id.short(),
                task.name,
                task.frequency,
                d
            ),
            None => println!(
                "  [{}] {}  {} ({})",
                mark,
                task.id.short(),
                task.name,
                task.frequency
            ),
        }
    }

    if !selection.all_completed() {
        println!();
        println!("{} remaining", selection.remaining_count());
    }
}
