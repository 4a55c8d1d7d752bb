//! Command Line Interface (CLI) arguments.

use clap::Parser;

/// Revenist command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the server should listen
    #[arg(long, default_value = "0.0.0.0", env = "REVENIST_HOST")]
    pub host: String,
    /// The port to which the server should bind
    #[arg(long, default_value_t = 8080, env = "REVENIST_PORT")]
    pub port: u16,
    /// Path to the directory holding the record store
    #[arg(long, default_value = "revenist-data", env = "REVENIST_DATA_DIR")]
    pub data_dir: String,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "REVENIST_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/revenist/certs/cert.pem",
        env = "REVENIST_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/revenist/certs/key.pem",
        env = "REVENIST_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for operations to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "REVENIST_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
