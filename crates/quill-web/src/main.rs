//! quill-web server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), connects to
//! MongoDB, and serves the blog over HTTP.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `auth.password_hash` in
//! config.toml:
//!
//! ```
//! cargo run -p quill-web --bin server -- --hash-password
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use clap::Parser;
use quill_store_mongo::MongoStore;
use quill_web::{
  AppState, ServerConfig,
  notify::{ContactNotifier, Mailer},
  templates::Templates,
};
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Quill blog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the argon2 hash for a password entered on stdin and exit.
  #[arg(long)]
  hash_password: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Helper mode: hash a password and exit.
  if cli.hash_password {
    let password = read_password_from_stdin()?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?
      .to_string();
    println!("{hash}");
    return Ok(());
  }

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("QUILL"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Connect the store. The driver pools connections internally.
  let store = MongoStore::connect(&server_cfg.mongo_uri, &server_cfg.mongo_db)
    .await
    .with_context(|| {
      format!("failed to open store for database {:?}", server_cfg.mongo_db)
    })?;

  // Build the mailer; contact notification is disabled unless configured.
  let mailer = Mailer::from_config(&server_cfg.mail)
    .context("failed to configure mail notification")?
    .map(|m| Arc::new(m) as Arc<dyn ContactNotifier>);
  if mailer.is_none() {
    tracing::info!("mail notification disabled");
  }

  // Build application state.
  let state = AppState {
    store:     Arc::new(store),
    auth:      Arc::new(server_cfg.auth.clone()),
    templates: Arc::new(Templates::new()),
    mailer,
    config:    Arc::new(server_cfg.clone()),
  };

  let app = quill_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Read a password from stdin.
fn read_password_from_stdin() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}
