//! hd-signer CLI
//!
//! Derives the signer from a config file or from `--mnemonic`/`--path`
//! (environment fallbacks `HD_SIGNER_MNEMONIC`, `HD_SIGNER_PATH`), then
//! validates, prints the public key, or signs a 32-byte digest.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hd_signer::{HdSigner, HdSignerConfig, SignerConfig, DIGEST_LEN};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(name = "hd-signer")]
#[command(version)]
#[command(about = "Deterministic secp256k1 signer from a BIP-39 mnemonic and BIP-44 path", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// The logging level (trace|debug|info|warn|error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print machine-readable JSON
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(flatten)]
    key: KeySource,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeySource {
    /// JSON file with `mnemonic` and `path` (takes precedence over the flags below)
    #[arg(long)]
    config: Option<PathBuf>,

    /// BIP-39 mnemonic phrase
    #[arg(long, env = "HD_SIGNER_MNEMONIC", hide_env_values = true)]
    mnemonic: Option<String>,

    /// Derivation path, e.g. m/44'/60'/0'/0/0
    #[arg(long, env = "HD_SIGNER_PATH")]
    path: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the mnemonic and path derive a key
    Validate,

    /// Print the compressed public key and EVM address
    PublicKey,

    /// Sign a 32-byte digest given as hex (with or without 0x)
    Sign {
        /// Digest to sign, exactly 32 bytes
        digest: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(cli.key)?;
    debug!(?config, "loaded signer config");

    match cli.command {
        Commands::Validate => {
            config.validate().context("invalid mnemonic and/or path for HD wallet")?;
            if cli.json {
                println!("{}", json!({ "valid": true, "path": &config.path }));
            } else {
                println!("ok: {}", config.path);
            }
        }
        Commands::PublicKey => {
            let signer = config.build()?;
            print_public_key(&signer, cli.json);
        }
        Commands::Sign { digest } => {
            let digest = parse_digest(&digest)?;
            let signer = config.build()?;
            let signature = signer.sign_digest(&digest)?;
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "signature": signature.to_string(),
                        "r": format!("0x{}", hex::encode(signature.r())),
                        "s": format!("0x{}", hex::encode(signature.s())),
                        "v": signature.v(),
                    })
                );
            } else {
                println!("{}", signature);
            }
        }
    }

    Ok(())
}

fn load_config(key: KeySource) -> Result<HdSignerConfig> {
    if let Some(file) = key.config {
        let raw = Zeroizing::new(
            std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?,
        );
        return HdSignerConfig::from_json(&raw)
            .with_context(|| format!("failed to parse {}", file.display()));
    }

    match (key.mnemonic, key.path) {
        (Some(mnemonic), Some(path)) => Ok(HdSignerConfig::new(mnemonic, path)),
        (None, _) => bail!("missing mnemonic: pass --config, --mnemonic or set HD_SIGNER_MNEMONIC"),
        (_, None) => bail!("missing path: pass --config, --path or set HD_SIGNER_PATH"),
    }
}

fn parse_digest(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let digest = hex::decode(hex_str).context("digest is not valid hex")?;
    if digest.len() != DIGEST_LEN {
        bail!("digest must be {} bytes, got {}", DIGEST_LEN, digest.len());
    }
    Ok(digest)
}

fn print_public_key(signer: &HdSigner, as_json: bool) {
    let public_key = format!("0x{}", hex::encode(signer.public_key()));
    let address = signer.address().to_checksum(None);
    if as_json {
        println!("{}", json!({ "public_key": public_key, "address": address }));
    } else {
        println!("public key: {}", public_key);
        println!("address:    {}", address);
    }
}

fn init_tracing(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
