mod headless;

use anyhow::{Context, bail};
use cg_gate_core::{Credential, GateConfig, GateController, GateState};
use cg_http::ReqwestTransport;
use clap::Parser;
use std::time::Duration;
use tracing::info;

use crate::headless::HeadlessPage;

/// Run the call gate headlessly against the real endpoints.
///
/// Endpoints and widget settings come from `CALLGATE_*` variables. Note that
/// `--start` consumes the credential on services that enforce one-time use.
#[derive(Debug, Parser)]
#[command(name = "gate-probe", version)]
struct Args {
    /// Page link containing the credential, or the bare credential.
    target: String,

    /// Trigger call start after the gate unlocks.
    #[arg(long)]
    start: bool,

    /// Base URL for relative endpoint paths (overrides CALLGATE_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = GateConfig::from_lookup(|key| std::env::var(key).ok())
        .context("failed to load CALLGATE_* configuration")?;

    let credential = credential_from_target(&args.target, &config.token_param);
    let transport = ReqwestTransport::new(args.base_url.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let page = HeadlessPage::default();
    let gate = GateController::new(config, transport, &page, &page, &page, false);

    let state = gate.run_with_credential(credential).await;
    info!(?state, "gate after validation");
    if state != GateState::Unlocked {
        bail!("gate did not unlock: {state:?} ({})", describe(&page));
    }
    if !args.start {
        return Ok(());
    }

    let state = gate.on_start_requested().await;
    info!(?state, widget = ?page.widget(), "gate after call start");
    if state != GateState::Active {
        bail!("call did not start: {state:?} ({})", describe(&page));
    }
    Ok(())
}

/// A full link is searched for the token parameter; anything else is the credential itself.
fn credential_from_target(target: &str, param: &str) -> Option<Credential> {
    let target = target.trim();
    if target.starts_with("http://") || target.starts_with("https://") {
        Credential::from_page_url(target, param)
    } else if target.starts_with('?') {
        Credential::from_query(target, param)
    } else {
        Credential::new(target)
    }
}

fn describe(page: &HeadlessPage) -> String {
    let status = page
        .last_status()
        .map(|message| message.text)
        .unwrap_or_else(|| "no status".to_owned());
    format!("status: {status}; control: {:?}", page.trigger())
}
