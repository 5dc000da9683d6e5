//! Headless login: the same validate, submit and settle flow the terminal UI
//! drives, with the outcome printed instead of rendered.

use anyhow::{Context, Result};
use portico_core::config::Config;
use portico_core::{SessionSnapshot, validate};

pub async fn run(username: &str, password: &str, json: bool, config: &Config) -> Result<()> {
    validate(username, password)?;

    let mut session = portico_core::start_mock_session(config);
    session.submit_login(username, password);
    session.settle().await;
    let snapshot = session.shutdown();

    print_snapshot(&snapshot, json)?;

    if !snapshot.is_authenticated {
        anyhow::bail!("Invalid username or password");
    }
    Ok(())
}

fn print_snapshot(snapshot: &SessionSnapshot, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(snapshot).context("serialize session")?;
        println!("{out}");
    } else if let Some(token) = &snapshot.session_token {
        println!("Logged in");
        println!("Session token: {token}");
    }
    Ok(())
}
