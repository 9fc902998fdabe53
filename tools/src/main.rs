mod emoji;
mod rows;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use libkeyset_core::{AlphabeticLayout, DeviceClass, InputSetKind};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "keyset", about = "Inspect keyboard input sets and emoji names")]
struct Args {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rows of an input set
    Rows {
        #[arg(value_enum)]
        kind: Kind,

        /// Alphabetic layout (defaults to the config value)
        #[arg(long, value_enum)]
        layout: Option<Layout>,

        /// Device class (defaults to the config value)
        #[arg(long, value_enum)]
        device: Option<Device>,

        /// Currency for numeric and symbolic keyboards
        #[arg(long)]
        currency: Option<String>,

        /// Print uppercased keys
        #[arg(long)]
        uppercase: bool,

        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Print the Unicode identifier and display name of each emoji
    Emoji {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Alphabetic,
    Numeric,
    Symbolic,
}

impl From<Kind> for InputSetKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Alphabetic => InputSetKind::Alphabetic,
            Kind::Numeric => InputSetKind::Numeric,
            Kind::Symbolic => InputSetKind::Symbolic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Qwerty,
    Qwertz,
    Azerty,
}

impl From<Layout> for AlphabeticLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Qwerty => AlphabeticLayout::Qwerty,
            Layout::Qwertz => AlphabeticLayout::Qwertz,
            Layout::Azerty => AlphabeticLayout::Azerty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Device {
    Phone,
    Pad,
}

impl From<Device> for DeviceClass {
    fn from(device: Device) -> Self {
        match device {
            Device::Phone => DeviceClass::Phone,
            Device::Pad => DeviceClass::Pad,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Rows {
            kind,
            layout,
            device,
            currency,
            uppercase,
            config,
            json,
        } => rows::run(rows::RowsOptions {
            kind: kind.into(),
            layout: layout.map(Into::into),
            device: device.map(Into::into),
            currency,
            uppercase,
            config,
            json,
        }),
        Command::Emoji { text, json } => emoji::run(&text, json),
    }
}
