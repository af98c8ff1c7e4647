use ::std::path::PathBuf;

use ::kedo_common::{
    clap::{self, Parser, Subcommand},
    config::load_config,
    error::{DriverError, Result},
    serde_json,
    tokio,
    tracing::info,
    tracing_subscriber,
    types::{ClusterInfo, DriverOptions},
};
use ::kedo_driver::{
    config::DriverConfig,
    driver::{ClusterDriver, DigitalOceanDriver},
    provider::DigitalOceanProvider,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line arguments of the DigitalOcean driver.
struct Args {
    /// path to the config file
    #[arg(long)]
    config_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the options accepted when creating a cluster
    CreateOptions,
    /// Create a cluster and print the resulting cluster info
    Create {
        /// path to the JSON file of driver options
        #[arg(long)]
        options_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // setup tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config: DriverConfig = match &args.config_path {
        Some(path) => load_config(path)?,
        None => DriverConfig::default(),
    };
    info!("Using DigitalOcean API at {}", config.api_base_url);

    let provider = DigitalOceanProvider::new(config.api_base_url.clone(), config.request_timeout());
    let driver = DigitalOceanDriver::new(provider);

    let output = match args.command {
        Command::CreateOptions => {
            serde_json::to_string_pretty(&driver.get_driver_create_options().await?)
        }
        Command::Create { options_path } => {
            let options: DriverOptions = load_config(&options_path)?;
            let info = driver.create(&options, &ClusterInfo::default()).await?;
            serde_json::to_string_pretty(&info)
        }
    }
    .map_err(DriverError::fail_to_serialize_state)?;
    println!("{}", output);
    Ok(())
}
