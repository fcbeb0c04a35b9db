//! # Account-auth-state
//! Application replays an action script against one bank account and prints account state
//! after every action.
//!
//! ## Input format
//! csv with columns `action`, `argument`
//!
//! ```csv
//! action,argument
//! login,pass123
//! withdraw,2000
//! logout,
//! ```
//!
//! Without a script file the built-in walkthrough is replayed.
//!
//! ## Bad rows
//! A row naming an unknown action is a malformed script: reading stops, rows applied so far
//! are still printed and the application exits with an error. A known action with a missing
//! argument or a bad amount is logged and skipped, its step number is not reused.

#![deny(missing_docs)]

use account_auth_state::{
    account::{Account, Action, BankAccount},
    amount::Amount,
    csv::{self, RawAction, StepStatus},
    WALKTHROUGH,
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::{
    io::{stdout, AsyncRead, BufReader},
    spawn,
    sync::mpsc::{channel, Receiver, Sender},
};
use tokio_stream::wrappers::ReceiverStream;
use tracing_subscriber::EnvFilter;

/// Replay login/logout/unlock/withdraw actions against one bank account
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// csv action script, built-in walkthrough when missing
    script: Option<PathBuf>,
    /// opening cash balance
    #[arg(long, default_value = "5000")]
    balance: Amount,
    /// account password
    #[arg(long, default_value = "pass123")]
    password: String,
    /// code that lifts suspension
    #[arg(long, default_value = "reset456")]
    reset_code: String,
}

async fn read_actions(script: Option<PathBuf>, sender: Sender<RawAction>) -> anyhow::Result<()> {
    let input: Box<dyn AsyncRead + Unpin + Send> = match script {
        Some(path) => {
            let f = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("access script file {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(WALKTHROUGH.as_bytes()),
    };

    csv::deserialize_actions_from_csv_reader(input, sender)
        .await
        .context("improper content of script")
}

/// single owner of the account, actions are applied in script order
async fn apply_actions(
    mut account: BankAccount,
    mut input: Receiver<RawAction>,
    output: Sender<StepStatus>,
) -> anyhow::Result<BankAccount> {
    let mut step = 0;
    while let Some(raw) = input.recv().await {
        step += 1;
        let action_type = raw.action;
        let action = match Action::try_from(raw) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(step, "skipping action: {e}");
                continue;
            }
        };

        let result = account.apply(action);
        tracing::debug!(step, state = %account.state(), %result, "action applied");
        if output
            .send(StepStatus::new(step, action_type, result, &account))
            .await
            .is_err()
        {
            anyhow::bail!("status output closed");
        }
    }
    Ok(account)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let account = BankAccount::new(cli.balance, cli.password, cli.reset_code);
    tracing::info!(
        state = %account.state(),
        balance = %account.balance(),
        retries = account.password_retries(),
        "account opened"
    );

    // read actions from script
    let (tx_raw_action, rx_raw_action) = channel(64);
    let task_read = spawn(read_actions(cli.script, tx_raw_action));

    // apply them one by one to the account
    let (tx_status, rx_status) = channel(64);
    let task_apply = spawn(apply_actions(account, rx_raw_action, tx_status));

    // write status of every step to stdout
    let task_output = spawn(csv::summarize_steps(
        ReceiverStream::new(rx_status),
        stdout(),
    ));

    // await every task before reporting read error, so applied rows reach stdout
    let read_result = task_read.await?;
    let account = task_apply.await??;
    task_output.await?.context("failed to save output")?;
    read_result?;

    tracing::info!(
        state = %account.state(),
        balance = %account.balance(),
        retries = account.password_retries(),
        suspended = account.is_suspended(),
        "script finished"
    );
    Ok(())
}
