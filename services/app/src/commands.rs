//! Executes CLI commands by driving the screen controllers
//!
//! Each command plays the part of a user on one screen: it submits the form,
//! prints whatever toast the screen raised, and follows the resulting
//! transition. Landing on Home renders the freshly loaded list.

use anyhow::{Context, Result};
use auth::{LoginRequest, OAuthProvider, RegisterRequest};
use entries::{Entry, EntryForm};
use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing::debug;

use crate::{
    cli::Command,
    navigation::{Navigator, Route, Transition},
    screens::{AddScreen, EditScreen, HomeScreen, LoginScreen, RegisterScreen},
    state::AppState,
    toast::Toast,
};

/// Run one command to completion
pub async fn run(command: Command, state: &AppState) -> Result<ExitCode> {
    match command {
        Command::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt("Password: ")?,
            };
            login(state, LoginRequest::new(email, password)).await
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let password = match password {
                Some(password) => password,
                None => prompt("Password (min 6 chars): ")?,
            };
            register(state, RegisterRequest::new(username, email, password)).await
        }
        Command::Logout => logout(state).await,
        Command::Status => status(state).await,
        Command::List => list(state).await,
        Command::Add {
            title,
            media_type,
            rating,
        } => add(state, EntryForm::new(title, media_type, rating)).await,
        Command::Edit {
            id,
            title,
            media_type,
            rating,
        } => edit(state, &id, title, media_type, rating).await,
        Command::Delete { id, yes } => delete(state, &id, yes).await,
        Command::SocialLogin { provider } => social_login(state, provider),
        Command::CompleteLogin { url } => complete_login(state, &url).await,
    }
}

async fn login(state: &AppState, form: LoginRequest) -> Result<ExitCode> {
    let screen = LoginScreen::new(state);
    let mut nav = Navigator::new(Route::Login);

    let transition = screen.submit(&form).await;
    report(screen.toast());
    settle(state, &mut nav, transition).await
}

async fn register(state: &AppState, form: RegisterRequest) -> Result<ExitCode> {
    let mut nav = Navigator::new(Route::Login);
    nav.apply(LoginScreen::new(state).open_register());
    let screen = RegisterScreen::new(state);

    let transition = screen.submit(&form).await;
    report(screen.toast());
    if transition == Transition::Replace(Route::Login) {
        println!("Log in with `medialogger login` to continue.");
        return Ok(ExitCode::SUCCESS);
    }
    settle(state, &mut nav, transition).await
}

async fn logout(state: &AppState) -> Result<ExitCode> {
    let screen = HomeScreen::new(state);
    let transition = screen.logout().await;
    report(screen.toast());

    if transition == Transition::Stay {
        return Ok(ExitCode::FAILURE);
    }
    println!("Signed out");
    Ok(ExitCode::SUCCESS)
}

async fn status(state: &AppState) -> Result<ExitCode> {
    let signed_in = state
        .session()
        .is_signed_in()
        .await
        .context("failed to read session store")?;

    if signed_in {
        println!("Signed in");
    } else {
        println!("Signed out");
    }
    Ok(ExitCode::SUCCESS)
}

async fn list(state: &AppState) -> Result<ExitCode> {
    let screen = HomeScreen::new(state);
    let entries = screen.load().await;
    let failed = screen.toast().current().is_some();
    report(screen.toast());
    print_entries(&entries);

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn add(state: &AppState, form: EntryForm) -> Result<ExitCode> {
    let mut nav = Navigator::new(Route::Home);
    nav.apply(HomeScreen::new(state).open_add());
    let screen = AddScreen::new(state);

    let transition = screen.submit(&form).await;
    report(screen.toast());
    settle(state, &mut nav, transition).await
}

async fn edit(
    state: &AppState,
    id: &str,
    title: Option<String>,
    media_type: Option<String>,
    rating: Option<String>,
) -> Result<ExitCode> {
    let Some(entry) = find_entry(state, id).await else {
        return Ok(ExitCode::FAILURE);
    };

    let screen = EditScreen::new(state, &entry);
    let current = screen.form();
    let form = EntryForm {
        title: title.unwrap_or_else(|| current.title.clone()),
        media_type: media_type.unwrap_or_else(|| current.media_type.clone()),
        rating: rating.unwrap_or_else(|| current.rating.clone()),
    };

    let mut nav = Navigator::new(Route::Home);
    nav.apply(HomeScreen::new(state).open(&entry));
    debug!("Editing entry {}", screen.id());

    let transition = screen.submit(&form).await;
    report(screen.toast());
    settle(state, &mut nav, transition).await
}

async fn delete(state: &AppState, id: &str, yes: bool) -> Result<ExitCode> {
    let confirmed = yes || confirm("Delete this item?")?;
    if !confirmed {
        println!("Cancelled");
        return Ok(ExitCode::SUCCESS);
    }

    let screen = HomeScreen::new(state);
    let deleted = screen.delete(id, true).await;
    report(screen.toast());
    print_entries(&screen.entries());

    Ok(if deleted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn social_login(state: &AppState, provider: OAuthProvider) -> Result<ExitCode> {
    let screen = LoginScreen::new(state);
    println!("{}", screen.social_login_url(provider));
    println!(
        "Open the page above, then pass the final redirect URL to `medialogger complete-login`."
    );
    Ok(ExitCode::SUCCESS)
}

async fn complete_login(state: &AppState, url: &str) -> Result<ExitCode> {
    let screen = LoginScreen::new(state);
    let mut nav = Navigator::new(Route::Login);

    let transition = screen.handle_redirect(url).await;
    report(screen.toast());
    if transition == Transition::Stay && screen.toast().current().is_none() {
        eprintln!("That URL does not carry a session token");
    }
    settle(state, &mut nav, transition).await
}

/// Follow a transition; a screen that stayed put means the action failed
async fn settle(state: &AppState, nav: &mut Navigator, transition: Transition) -> Result<ExitCode> {
    if transition == Transition::Stay {
        return Ok(ExitCode::FAILURE);
    }

    let route = nav.apply(transition).clone();
    debug!("Command finished on {:?}", route);

    if route == Route::Home {
        let home = HomeScreen::new(state);
        let entries = home.load().await;
        report(home.toast());
        print_entries(&entries);
    }
    Ok(ExitCode::SUCCESS)
}

async fn find_entry(state: &AppState, id: &str) -> Option<Entry> {
    let home = HomeScreen::new(state);
    let entry = home.load().await.into_iter().find(|entry| entry.id == id);
    report(home.toast());

    if entry.is_none() {
        eprintln!("No entry with id {id}");
    }
    entry
}

fn report(toast: &Toast) {
    if let Some(message) = toast.current() {
        eprintln!("{message}");
    }
}

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries yet");
        return;
    }

    let title_width = entries
        .iter()
        .map(|entry| entry.title.chars().count())
        .max()
        .unwrap_or(0);

    for entry in entries {
        println!(
            "{}  {:<title_width$}  {:<5}  {}/5",
            entry.id,
            entry.title,
            entry.media_type.as_str(),
            entry.rating
        );
    }
}

fn prompt(label: &str) -> Result<String> {
    eprint!("{label}");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{question} [y/N] "))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
