use std::io;

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use crossterm::tty::IsTty;
use log::warn;

use trackball::XorCipher;

#[derive(Parser, Debug)]
#[command(version, about = "XOR standard input with a repeating key and write the result to standard output")]
struct Args {
    /// Key bytes, repeated over the whole input
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    key: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    if stdout.is_tty() {
        warn!("writing binary output to a terminal");
    }

    let mut cipher = XorCipher::new(args.key).context("key must not be empty")?;
    cipher
        .transform(&mut io::stdin().lock(), &mut stdout.lock())
        .context("failed to transform standard input")?;
    Ok(())
}
