//! Kisaan terminal frontend.
//!
//! Drives the shell runtime from a readline loop: splash, login gate,
//! then panel navigation over the live telemetry feed.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use kisaan_core::analyzer::{grade_sample, SavedAnalysis};
use kisaan_core::marketplace::{seeded_catalog, MarketItem};
use kisaan_core::session::Session;
use kisaan_core::shell::ShellPhase;
use kisaan_core::view::ViewSelector;
use kisaan_infrastructure::TomlSessionStore;
use kisaan_shell::panels::render_panel;
use kisaan_shell::{Shell, ShellConfig};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let mut commands = vec![
            "login".to_string(),
            "logout".to_string(),
            "menu".to_string(),
            "show".to_string(),
            "analyze ".to_string(),
            "help".to_string(),
            "quit".to_string(),
        ];
        for view in ViewSelector::iter() {
            commands.push(format!("go {}", view));
        }
        Self { commands }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line) && !line.is_empty())
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with("go ") {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn print_help() {
    println!("{}", "Commands:".bold());
    for view in ViewSelector::iter() {
        println!("  go {:<12} open the {} panel", view.to_string(), view.label());
    }
    println!("  show            re-render the current panel");
    println!("  menu            toggle the navigation menu");
    println!("  analyze <image> grade a crop image against current readings");
    println!("  login / logout  manage the session");
    println!("  quit            exit");
}

fn print_menu(shell: &Shell) {
    if !shell.state().router().is_sidebar_open() {
        return;
    }
    println!("{}", "Navigation".bold());
    for view in ViewSelector::iter() {
        let marker = if view == shell.state().router().active() {
            ">"
        } else {
            " "
        };
        println!("  {} {}", marker, view.label());
    }
}

/// Renders the active panel, or a sign-in hint outside the
/// authenticated phase.
fn render_current(shell: &Shell, analyses: &[SavedAnalysis], catalog: &[MarketItem]) -> String {
    match shell.state().session() {
        Some(session) => {
            let snapshot = shell.telemetry();
            render_panel(
                shell.state().router().active(),
                &snapshot,
                session,
                analyses,
                catalog,
            )
        }
        None => format!("{}\n", "Not signed in. Use `login` to continue.".yellow()),
    }
}

/// Collects credentials from the login collaborator (the prompt) and
/// builds the candidate session.
fn prompt_login(
    rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>,
) -> Result<Session> {
    let name = rl.readline("  Name: ")?;
    let email = rl.readline("  Email: ")?;
    let farm_name = rl.readline("  Farm name: ")?;
    Ok(Session::new(
        name.trim(),
        email.trim(),
        farm_name.trim(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "=== Kisaan Care ===".bright_green().bold());
    println!("{}", "Modernizing Indian agriculture".bright_black());
    println!();

    let store = Arc::new(TomlSessionStore::new());
    let mut shell = Shell::mount(store, ShellConfig::default()).await;

    let catalog = seeded_catalog();
    let mut analyses: Vec<SavedAnalysis> = Vec::new();

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    match shell.state().session() {
        Some(session) => println!("Welcome back, {}!", session.name.bold()),
        None => println!("Use `login` to sign in."),
    }
    print!("{}", render_current(&shell, &analyses, &catalog));

    loop {
        let readline = rl.readline("kisaan> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let (command, arg) = match trimmed.split_once(' ') {
                    Some((cmd, rest)) => (cmd, rest.trim()),
                    None => (trimmed, ""),
                };

                match command {
                    "quit" | "exit" => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    "help" => print_help(),
                    "login" => {
                        if shell.state().phase() != ShellPhase::Unauthenticated {
                            println!("{}", "Already signed in.".yellow());
                            continue;
                        }
                        let session = prompt_login(&mut rl)?;
                        match shell.login(session).await {
                            Ok(()) => {
                                print!("{}", render_current(&shell, &analyses, &catalog));
                            }
                            Err(e) => eprintln!("{}", format!("Login failed: {}", e).red()),
                        }
                    }
                    "logout" => match shell.logout().await {
                        Ok(()) => println!("Signed out. Use `login` to sign in again."),
                        Err(e) => eprintln!("{}", format!("Logout failed: {}", e).red()),
                    },
                    "go" => match ViewSelector::from_str(arg) {
                        Ok(view) => {
                            shell.navigate(view);
                            print!("{}", render_current(&shell, &analyses, &catalog));
                        }
                        Err(_) => {
                            println!(
                                "{}",
                                format!("Unknown view '{}'. Try `help`.", arg).yellow()
                            );
                        }
                    },
                    "menu" => {
                        shell.toggle_sidebar();
                        print_menu(&shell);
                    }
                    "show" => print!("{}", render_current(&shell, &analyses, &catalog)),
                    "analyze" => {
                        if shell.state().phase() != ShellPhase::Authenticated {
                            println!("{}", "Sign in before analyzing samples.".yellow());
                            continue;
                        }
                        let image = if arg.is_empty() { "sample.jpg" } else { arg };
                        let result = grade_sample(shell.telemetry().soil_humidity);
                        analyses.push(SavedAnalysis::from_result(image, result));
                        shell.navigate(ViewSelector::Analyzer);
                        print!("{}", render_current(&shell, &analyses, &catalog));
                    }
                    _ => println!("{}", "Unknown command. Try `help`.".bright_black()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    shell.shutdown().await;
    Ok(())
}
