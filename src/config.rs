use std::path::PathBuf;

use clap::Parser;

/// Server configuration, populated from CLI flags or environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "repodock")]
#[command(about = "Local web server for listing and cloning GitHub/GitLab repositories")]
#[command(version)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "REPODOCK_PORT", default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, env = "REPODOCK_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Directory the front-end assets are served from
    #[arg(long, env = "REPODOCK_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Directory repositories are cloned into
    #[arg(long, env = "REPODOCK_CLONE_ROOT", default_value = "./repos")]
    pub clone_root: PathBuf,

    /// Override the GitHub API base URL (defaults to api.github.com)
    #[arg(long, env = "REPODOCK_GITHUB_API")]
    pub github_api_base: Option<String>,

    /// GitLab host the v4 API is reached on
    #[arg(long, env = "REPODOCK_GITLAB_API", default_value = "https://gitlab.com")]
    pub gitlab_api_base: String,

    /// Deadline in seconds for a single list or clone call
    #[arg(long, env = "REPODOCK_TIMEOUT", default_value = "300")]
    pub request_timeout_secs: u64,

    /// Don't open the browser at startup
    #[arg(long, env = "REPODOCK_NO_BROWSER")]
    pub no_browser: bool,
}

impl Config {
    pub fn ui_url(&self) -> String {
        // The bind address is not necessarily routable from a browser.
        let host = match self.bind.as_str() {
            "0.0.0.0" | "::" => "localhost",
            other => other,
        };

        format!("http://{}:{}/", host, self.port)
    }
}
