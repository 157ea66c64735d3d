use tokio::process::Command;

/// Open the user's default browser at the given URL.
///
/// A platform without a known launcher, or a failed spawn, is logged and
/// otherwise ignored; the server keeps running either way.
pub fn open(url: &str) {
    let spawned = match std::env::consts::OS {
        "linux" => Command::new("xdg-open").arg(url).spawn(),
        "macos" => Command::new("open").arg(url).spawn(),
        "windows" => Command::new("rundll32")
            .args(["url.dll,FileProtocolHandler", url])
            .spawn(),
        os => {
            tracing::warn!("No browser launcher known for platform {os}");
            return;
        }
    };

    if let Err(e) = spawned {
        tracing::warn!("Could not open browser at {url}: {e}");
    }
}
