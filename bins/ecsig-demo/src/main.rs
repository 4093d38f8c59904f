//! ecsig demonstration
//!
//! Alice signs a digest with her private key; Bob verifies it with his copy of
//! her public key. The binary plays the collaborators the engine leaves out:
//! it hashes the message when asked to, picks the nonce strategy and logs.

use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ecsig::algorithms::hash::{HashFunction, Sha256};
use ecsig::prelude::{
    Digest, EcdsaP256, EcdsaP256PublicKey, EcdsaP256SecretKey, EcdsaP256Signature, NonceSource,
};
use ecsig::rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

type BoxError = Box<dyn Error + Send + Sync>;

const DEFAULT_PRIVATE_KEY: &str = "1111111111111111111111111111111111111111111111111111111111111111";

const DEFAULT_PUBLIC_KEY: &str = "040217e617f0b6443928278f96999e69a23a4f2c152bdf6d6cdf66e5b80282d4ed\
                                  194a7debcb97712d2dda3ca85aa8765a56f45fc758599652f2897c65306e5794";

/// SHA-256("Hello Bob!")
const DEFAULT_DIGEST: &str = "42ba8354db263a6a5a9f74d6b7ceb4c962a3d8fd58a41969e521eb0222455415";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NonceMode {
    /// RFC 6979
    Deterministic,
    /// Rejection sampling from the OS-seeded ChaCha20 generator
    Random,
    /// RFC 6979 with fresh randomness mixed in
    Hedged,
}

/// Sign a digest as Alice, verify it as Bob.
#[derive(Parser, Debug)]
#[command(name = "ecsig-demo", version)]
struct Cli {
    /// Alice's 32-byte private key, hex
    #[arg(long, default_value = DEFAULT_PRIVATE_KEY)]
    private_key: String,

    /// Bob's copy of Alice's public key, hex (65-byte 04||X||Y or 64-byte X||Y)
    #[arg(long, default_value = DEFAULT_PUBLIC_KEY)]
    public_key: String,

    /// 32-byte digest to sign, hex
    #[arg(long, default_value = DEFAULT_DIGEST, conflicts_with = "message")]
    digest: String,

    /// Sign SHA-256 of this text instead of --digest
    #[arg(long)]
    message: Option<String>,

    /// Nonce strategy
    #[arg(long, value_enum, default_value_t = NonceMode::Deterministic)]
    nonce: NonceMode,

    /// Flip one bit of the signature before Bob verifies it
    #[arg(long)]
    tamper: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("ECDSA P-256 demonstration started");

    match run(&cli) {
        Ok(true) => {
            log::info!("Demonstration finished successfully");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool, BoxError> {
    let digest = match &cli.message {
        Some(text) => {
            let hash = Sha256::digest(text.as_bytes())?;
            log::debug!("hashed {} message bytes", text.len());
            Digest::new(hash)
        }
        None => Digest::from_slice(&decode_hex("--digest", &cli.digest)?)?,
    };
    print_hex("Digest", digest.as_bytes());

    let signature = match cli.nonce {
        NonceMode::Deterministic => alice_sign(EcdsaP256::deterministic(), cli, &digest)?,
        NonceMode::Random => alice_sign(EcdsaP256::with_rng(os_seeded()), cli, &digest)?,
        NonceMode::Hedged => alice_sign(EcdsaP256::hedged(os_seeded()), cli, &digest)?,
    };

    let mut wire = signature.to_bytes();
    if cli.tamper {
        wire[0] ^= 0x01;
        log::warn!("Signature tampered in transit");
    }

    bob_verify(cli, &digest, &wire)
}

fn alice_sign<N: NonceSource>(
    mut engine: EcdsaP256<N>,
    cli: &Cli,
    digest: &Digest,
) -> Result<EcdsaP256Signature, BoxError> {
    log::info!("Alice's signature generation");

    let mut secret = EcdsaP256SecretKey::import(&decode_hex("--private-key", &cli.private_key)?)?;
    let (signature, drawn) = engine.sign_with_nonce_count(digest, &secret)?;
    secret.dispose();

    log::debug!("{} nonce candidate(s) drawn", drawn);
    print_hex("Signature", &signature.to_bytes());
    Ok(signature)
}

fn bob_verify(cli: &Cli, digest: &Digest, wire: &[u8]) -> Result<bool, BoxError> {
    log::info!("Bob's message verification");

    let key_bytes = decode_hex("--public-key", &cli.public_key)?;
    let public = if key_bytes.len() == 64 {
        EcdsaP256PublicKey::from_raw_xy(&key_bytes)?
    } else {
        EcdsaP256PublicKey::import(&key_bytes)?
    };
    print_hex("Alice's public key", &public.export());

    let signature = EcdsaP256Signature::from_bytes(wire)?;
    let engine = EcdsaP256::deterministic();
    if engine.verify(digest, &public, &signature)? {
        log::info!("Signature is valid. Message is authentic.");
        Ok(true)
    } else {
        log::warn!("Signature is invalid. Message is not authentic.");
        Ok(false)
    }
}

fn os_seeded() -> ChaCha20Rng {
    ChaCha20Rng::from_entropy()
}

fn decode_hex(flag: &str, value: &str) -> Result<Vec<u8>, BoxError> {
    let trimmed = value.trim().trim_start_matches("0x");
    hex::decode(trimmed).map_err(|e| format!("{}: invalid hex: {}", flag, e).into())
}

fn print_hex(label: &str, bytes: &[u8]) {
    log::info!("{}:\n    {}", label, hex::encode(bytes));
}
