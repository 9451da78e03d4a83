use std::process;

use clap::{Arg, Command};

use github_projects_cli::commands::{handle_auth, handle_fields, handle_items};
use github_projects_cli::logging;

fn project_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("owner")
                .value_name("OWNER")
                .help("Organization or user login that owns the project")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("number")
                .value_name("NUMBER")
                .help("Project number")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .help("Treat the owner as a user instead of an organization")
                .action(clap::ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() {
    let _ = logging::init_logging();

    let app = Command::new("ghp")
        .about("GitHub Projects CLI - query project items as tabular data")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Authenticate with GitHub")
                .arg(
                    Arg::new("api-token")
                        .long("api-token")
                        .value_name("TOKEN")
                        .help("Set your GitHub API token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current API token")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            project_args(Command::new("items").about("List project items as a table"))
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .value_name("CLAUSE")
                        .help("Filter clause like 'Status=Done' or 'due<=2024-06-01' (repeatable)")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    Arg::new("conjunction")
                        .long("conjunction")
                        .value_name("and|or")
                        .help("How multiple filters combine (default: and)"),
                )
                .arg(
                    Arg::new("max-pages")
                        .long("max-pages")
                        .value_name("NUMBER")
                        .help("Safety cap on pagination requests"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format: table, json")
                        .default_value("table"),
                ),
        )
        .subcommand(project_args(
            Command::new("fields").about("Show the columns a project would produce"),
        ));

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("items", sub_matches)) => handle_items(sub_matches).await,
        Some(("fields", sub_matches)) => handle_fields(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'ghp --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        logging::log_error(&format!("{}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
