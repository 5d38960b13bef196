use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};
use gitlet::artifacts::core::pager::PagedOutput;
use gitlet::{Config, GitletError, Repository};
use is_terminal::IsTerminal;
use minus::Pager;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A miniature version-control system",
    long_about = "Gitlet tracks snapshots of a working directory in a content-addressed store. \
    It supports staging, commits, branches and three-way merges, \
    with a command set modelled on a small subset of git.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "rm", about = "Unstage a file or stop tracking it")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "checkout -- <file> restores a file from the head commit, \
        checkout <commit> -- <file> restores it from another commit, \
        and checkout <branch> switches to a branch."
    )]
    Checkout {
        #[arg(index = 1)]
        target: Option<String>,
        #[arg(index = 2, last = true)]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the head commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
    #[command(name = "reset", about = "Check out a commit and move the current branch to it")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge another branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return report_parse_error(error),
    };

    let Some(command) = cli.command else {
        println!("Please enter a command.");
        return Ok(());
    };

    match run(command).await {
        Ok(()) => Ok(()),
        Err(error) if error.is_user_facing() => {
            println!("{error}");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn report_parse_error(error: clap::Error) -> anyhow::Result<()> {
    match error.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => error.print()?,
        ClapErrorKind::InvalidSubcommand => println!("No command with that name exists."),
        ClapErrorKind::MissingSubcommand
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            println!("Please enter a command.")
        }
        _ => println!("{}", GitletError::IncorrectOperands),
    }

    Ok(())
}

async fn run(command: Commands) -> gitlet::Result<()> {
    let mut config = Config::from_env()?;
    let interactive = std::io::stdout().is_terminal();
    config.color = interactive;

    let pwd = std::env::current_dir()?;

    match command {
        Commands::Log | Commands::GlobalLog if config.pager && interactive => {
            let pager = Pager::new();
            let repository = Repository::new(
                &pwd,
                Box::new(PagedOutput::new(pager.clone())),
                config,
            )?;

            match command {
                Commands::Log => repository.log()?,
                _ => repository.global_log()?,
            }

            minus::page_all(pager).map_err(anyhow::Error::from)?;
        }
        command => {
            let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;

            match command {
                Commands::Init => repository.init().await?,
                Commands::Add { file } => repository.add(&file).await?,
                Commands::Commit { message } => {
                    repository
                        .commit(&message.unwrap_or_default())
                        .await
                        .map(|_| ())?
                }
                Commands::Rm { file } => repository.rm(&file).await?,
                Commands::Log => repository.log()?,
                Commands::GlobalLog => repository.global_log()?,
                Commands::Find { message } => repository.find(&message).map(|_| ())?,
                Commands::Checkout { target, file } => match (target, file) {
                    (None, Some(file)) => repository.checkout_file(&file).await?,
                    (Some(commit), Some(file)) => {
                        repository.checkout_file_from_commit(&commit, &file).await?
                    }
                    (Some(branch), None) => repository.checkout_branch(&branch).await?,
                    (None, None) => return Err(GitletError::IncorrectOperands),
                },
                Commands::Branch { name } => repository.branch(&name)?,
                Commands::RmBranch { name } => repository.rm_branch(&name)?,
                Commands::Status => repository.status().await.map(|_| ())?,
                Commands::Reset { commit } => repository.reset(&commit).await?,
                Commands::Merge { branch } => repository.merge(&branch).await.map(|_| ())?,
            }
        }
    }

    Ok(())
}
