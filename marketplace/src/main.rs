//! `kryptobirdz` command-line marketplace.
use clap::Parser;
use eyre::WrapErr;
use kryptobirdz_marketplace::{
    detect_provider, Cli, Command, ContractArtifact, Marketplace,
    MarketplaceContext, StderrAlert,
};
use tracing::info;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let artifact = ContractArtifact::load(&cli.artifact).wrap_err_with(|| {
        format!("failed to load contract artifact {}", cli.artifact.display())
    })?;
    let wallet = detect_provider(&cli.wallet)?;

    let mut marketplace =
        Marketplace::new(MarketplaceContext::new(wallet, artifact), StderrAlert);
    marketplace.load().await?;

    if let Command::Mint { uri } = cli.command {
        let receipt = marketplace.mint(uri).await?;
        info!(tx = %receipt.transaction_hash, "mint confirmed");
    }

    print!("{}", marketplace.view());
    Ok(())
}
