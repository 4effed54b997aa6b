//! ec2wire inspector - decode EC2-compatible responses and encode interface
//! lists without talking to a server.
//!
//! # Usage
//!
//! ```text
//! ec2wire-inspect decode DescribePublicIpv4Pools response.xml
//! ec2wire-inspect encode LaunchSpecification interfaces.json
//! ec2wire-inspect encode - interfaces.json
//! ```
//!
//! `decode` prints the typed response as JSON. `encode` reads a JSON array of
//! network interface specifications and prints the flattened parameters; a
//! prefix of `-` encodes without one.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//! | `EC2WIRE_XML_TRIM_TEXT` | `true` | Trim element text while decoding |
//! | `EC2WIRE_XML_MAX_DEPTH` | *(unbounded)* | Reject documents nested deeper than this |

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use ec2wire_model::input::NetworkInterfaceCollection;
use ec2wire_model::{Ec2Action, Ec2Response};
use ec2wire_xml::DecoderConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: ec2wire-inspect decode <Action> <response.xml>\n       \
                     ec2wire-inspect encode <prefix|-> <interfaces.json>";

/// Settings read once at startup.
#[derive(Debug, Clone)]
struct InspectConfig {
    log_level: String,
    decoder: DecoderConfig,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            decoder: DecoderConfig::default(),
        }
    }
}

impl InspectConfig {
    fn from_env() -> Self {
        let mut config = Self {
            decoder: DecoderConfig::from_env(),
            ..Self::default()
        };
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Decode { action: Ec2Action, path: PathBuf },
    Encode { prefix: Option<String>, path: PathBuf },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        match args {
            [cmd, action, path] if cmd == "decode" => {
                let Some(action) = Ec2Action::from_name(action) else {
                    bail!("unknown action: {action}");
                };
                Ok(Self::Decode {
                    action,
                    path: PathBuf::from(path),
                })
            }
            [cmd, prefix, path] if cmd == "encode" => {
                let prefix = match prefix.as_str() {
                    "" | "-" => None,
                    p => Some(p.to_owned()),
                };
                Ok(Self::Encode {
                    prefix,
                    path: PathBuf::from(path),
                })
            }
            _ => bail!("{USAGE}"),
        }
    }

    fn run(&self, config: &InspectConfig) -> Result<String> {
        match self {
            Self::Decode { action, path } => {
                let xml = fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                debug!(%action, bytes = xml.len(), "decoding response");
                let response = Ec2Response::decode_with(*action, &xml, &config.decoder)
                    .with_context(|| format!("failed to decode {action} response"))?;
                Ok(serde_json::to_string_pretty(&response)?)
            }
            Self::Encode { prefix, path } => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let interfaces: NetworkInterfaceCollection = serde_json::from_str(&raw)
                    .with_context(|| format!("invalid interface list in {}", path.display()))?;
                debug!(count = interfaces.len(), "encoding network interfaces");
                let params = interfaces
                    .build_list_params(prefix.as_deref())
                    .context("failed to encode network interfaces")?;
                Ok(serde_json::to_string_pretty(&params)?)
            }
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Output goes to stderr so stdout stays machine readable.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = InspectConfig::from_env();

    init_tracing(&config.log_level)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    info!(?command, "running");

    let output = command.run(&config)?;
    println!("{output}");
    Ok(())
}
