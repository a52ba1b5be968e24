use chrono::Local;
use clap::{Parser, Subcommand};
use crypto_toolkit::{
    algorithms::symmetric_cipher, AsymmetricCipher, RSAWrapper, SymmetricCipher, ToolkitConfig,
};
use env_logger::fmt::Color;
use env_logger::{Builder, Env};
use log::error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "crypto-toolkit", about = "DES / RC4 / RSA text encryption")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// DES-ECB with PKCS#7 padding, 8-byte key
    Des {
        #[command(subcommand)]
        action: SymmetricAction,
    },
    /// RC4 with any non-empty key
    Rc4 {
        #[command(subcommand)]
        action: SymmetricAction,
    },
    /// RSA with PKCS#1 v1.5 padding
    Rsa {
        #[command(subcommand)]
        action: RsaAction,
    },
}

#[derive(Subcommand)]
enum SymmetricAction {
    Encrypt {
        #[arg(long)]
        key: String,
        text: String,
    },
    Decrypt {
        #[arg(long)]
        key: String,
        text: String,
    },
}

#[derive(Subcommand)]
enum RsaAction {
    Keygen {
        /// Modulus size; defaults to CRYPTO_TOOLKIT_RSA_BITS or 2048
        #[arg(long)]
        bits: Option<usize>,

        /// Print the pair as a JSON object
        #[arg(long)]
        json: bool,
    },
    Encrypt {
        #[arg(long)]
        public_key: PathBuf,
        text: String,
    },
    Decrypt {
        #[arg(long)]
        private_key: PathBuf,
        text: String,
    },
}

fn setup_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    builder
        .format(|buf, record| {
            let mut timestamp_style = buf.style();
            let mut level_style = buf.style();
            let mut target_style = buf.style();

            let level_color = match record.level() {
                log::Level::Error => Color::Red,
                log::Level::Warn => Color::Yellow,
                log::Level::Info => Color::Green,
                log::Level::Debug => Color::Cyan,
                log::Level::Trace => Color::White,
            };

            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            writeln!(
                buf,
                "{} {} [{}] {}",
                timestamp_style.set_color(Color::Rgb(100, 100, 100)).value(timestamp),
                level_style.set_color(level_color).value(record.level()),
                target_style.set_color(Color::Blue).value(record.target()),
                record.args()
            )
        })
        .init();
}

fn run_symmetric(name: &str, action: SymmetricAction) -> Result<String, String> {
    let cipher = symmetric_cipher(name).ok_or_else(|| format!("unknown cipher {}", name))?;
    let result = match action {
        SymmetricAction::Encrypt { key, text } => cipher.encrypt(&text, &key),
        SymmetricAction::Decrypt { key, text } => cipher.decrypt(&text, &key),
    };
    result.map_err(|e| e.to_string())
}

fn read_pem(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))
}

fn run_rsa(action: RsaAction) -> Result<String, String> {
    let config = ToolkitConfig::load().map_err(|e| e.to_string())?;
    let rsa = RSAWrapper::new(config);

    match action {
        RsaAction::Keygen { bits, json } => {
            let pair = match bits {
                Some(bits) => rsa.generate_key_pair(bits),
                None => rsa.generate_default_key_pair(),
            }
            .map_err(|e| e.to_string())?;

            if json {
                serde_json::to_string_pretty(&pair).map_err(|e| e.to_string())
            } else {
                Ok(format!("{}{}", pair.public_key, pair.private_key))
            }
        }
        RsaAction::Encrypt { public_key, text } => {
            let pem = read_pem(&public_key)?;
            rsa.encrypt(&text, &pem).map_err(|e| e.to_string())
        }
        RsaAction::Decrypt { private_key, text } => {
            let pem = read_pem(&private_key)?;
            rsa.decrypt(&text, &pem).map_err(|e| e.to_string())
        }
    }
}

// Output is written verbatim; decrypted text may end in significant whitespace.
fn write_output<W: Write>(out: &mut W, output: &str) -> std::io::Result<()> {
    writeln!(out, "{}", output)
}

fn main() -> ExitCode {
    setup_logger();
    let args = Args::parse();

    let outcome = match args.command {
        Command::Des { action } => run_symmetric("des", action),
        Command::Rc4 { action } => run_symmetric("rc4", action),
        Command::Rsa { action } => run_rsa(action),
    };

    match outcome {
        Ok(output) => match write_output(&mut std::io::stdout().lock(), &output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("cannot write output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
