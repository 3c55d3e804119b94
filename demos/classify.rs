// ABOUTME: Demo application classifying sender, recipients and message body the way a submit_sm would need them
// ABOUTME: Accepts an optional JSON addressing configuration and logs the classification with tracing

use argh::FromArgs;
use smpp_addressing::{AddressingConfig, PhoneNumber, SmsEnvelope};
use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Show the TON/NPI and data coding chosen for an outgoing SMS
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// addressing configuration as JSON (default: sender and recipient profiles)
    #[argh(option, short = 'c')]
    config: Option<String>,

    /// the message to classify
    #[argh(option, short = 'm')]
    message: String,

    /// the recipient telephone number (may be repeated)
    #[argh(option, short = 't')]
    to: Vec<String>,

    /// the telephone number or sender id that the message will be from
    #[argh(option, short = 'f')]
    from: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli_args.config {
        Some(json) => AddressingConfig::from_json(json)?,
        None => AddressingConfig::default(),
    };

    let from = PhoneNumber::new(cli_args.from);
    let to: Vec<PhoneNumber> = cli_args.to.into_iter().map(PhoneNumber::new).collect();

    let envelope = SmsEnvelope::address(&config, Some(&from), &to, &cli_args.message)?;

    println!("source:      {}", envelope.source());
    for destination in envelope.destinations() {
        println!("destination: {destination}");
    }
    println!(
        "encoding:    {} (data_coding 0x{:02X}, {} bytes, single segment: {})",
        envelope.encoding(),
        envelope.data_coding(),
        envelope.payload().len(),
        envelope.fits_single_segment()
    );

    Ok(())
}
