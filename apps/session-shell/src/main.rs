//! # SkillMap Session Shell
//!
//! Console walkthrough of the session lifecycle: sign-up, skill entry,
//! sign-out, and sign-in again, with session transitions logged the way a UI
//! shell would re-render on them.

mod config;
mod state;
mod telemetry;

use anyhow::Result;

use skillmap_core::domain::{SignInData, SignUpData};

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(config.json_logs);

    tracing::info!("Starting SkillMap session shell");

    let state = AppState::new(&config);

    // Watch session transitions the way a UI shell would.
    let watch = state.store.subscribe(|session| {
        tracing::info!(
            authenticated = session.authenticated,
            loading = session.loading,
            user = session
                .user
                .as_ref()
                .map(|u| u.email.as_str())
                .unwrap_or("-"),
            "session changed"
        );
    });

    // Sign up a fresh account.
    let signed_up = state
        .facade
        .sign_up(SignUpData {
            email: "ada@skillmap.app".to_string(),
            password: "Passw0rd!".to_string(),
            full_name: "Ada Lovelace".to_string(),
        })
        .await;

    match (&signed_up.data, signed_up.error_message()) {
        (Some(payload), _) => tracing::info!(
            email = %payload.user.email,
            expires_in = payload.expires_in,
            "signed up"
        ),
        (None, error) => {
            tracing::error!(error = error.unwrap_or("unknown"), "sign-up failed");
            return Ok(());
        }
    }

    // Record some skills against the signed-in user.
    let session = state.facade.update_skills(
        ["rust", "sql", "technical writing"]
            .into_iter()
            .map(String::from),
    );
    tracing::info!(
        skills = session.user.as_ref().map(|u| u.skills.len()).unwrap_or(0),
        "skills recorded"
    );

    // Sign out, then come back.
    state.facade.sign_out();

    let signed_in = state
        .facade
        .sign_in(SignInData {
            email: "ada@skillmap.app".to_string(),
            password: "Passw0rd!".to_string(),
            remember_me: Some(true),
        })
        .await;

    if !signed_in.success {
        tracing::error!(
            error = signed_in.error_message().unwrap_or("unknown"),
            "sign-in failed"
        );
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&state.facade.session())?
    );

    watch.unsubscribe();
    Ok(())
}
