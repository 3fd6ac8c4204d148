use clap::Parser;

// Fallback secret when the FLAG env var is not set
pub const DEFAULT_FLAG: &str = "CSBC{3L3V3N_51GN4L_574710N_D3M0}";

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "signal-station")]
#[command(about = "Eleven signal station relay challenge")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Failed sends allowed inside the window before a lockout
    #[arg(long, default_value_t = 5)]
    pub fail_limit: usize,

    // Sliding window for counting failures, in seconds
    #[arg(long, default_value_t = 60)]
    pub fail_window: u64,

    // Lockout duration in seconds
    #[arg(long, default_value_t = 30)]
    pub lock_duration: u64,

    // Directory holding index.html and client.js
    #[arg(long, default_value = "static")]
    pub static_dir: String,
}
