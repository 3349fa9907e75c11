//! VXLAN Controller Server Entry Point

use clap::Parser;
use vxlan_controller::cli::{Cli, Commands};
use vxlan_controller::{logging, server, AppState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let args = match cli.into_command() {
        Commands::CheckConfig(args) => {
            match vxlan_controller::cli::check_config::execute(&args) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }
        Commands::Serve(args) => args,
    };

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // ファイル出力のガードはプロセス終了まで保持する
    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        bucket_count = config.store.bucket_count,
        require_existing_network = config.store.require_existing_network,
        "Starting VXLAN controller"
    );

    let bind_addr = config.bind_addr();
    let state = AppState::new(config);
    if let Err(e) = server::run(state, &bind_addr).await {
        tracing::error!(error = %e, addr = %bind_addr, "Server error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
