use std::process::ExitCode;
use tokio::io::BufReader;
use log::{debug, info, error};

use simple_aider::session::pacer_for;
use simple_aider::{AiderConfig, InteractiveSession, ResponseProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = AiderConfig::from_env();
    debug!("Starting with {:?}", config);

    let provider = ResponseProvider::new(&config);
    let mut session = InteractiveSession::new(
      provider
    , tokio::io::stdout()
    , pacer_for(&config)
    , config.display_model.clone()
    );

    let interrupt = async {
      if let Err(e) = tokio::signal::ctrl_c().await
      {   error!("Failed to listen for interrupt: {}", e);
          std::future::pending::<()>().await;
      }
    };

    match session
      .run(BufReader::new(tokio::io::stdin()), interrupt)
      .await
    {   Ok(end) => {
          info!("Session ended: {:?}", end);
          ExitCode::SUCCESS
        }
      , Err(e) => {
          error!("Fatal error: {}", e);
          ExitCode::FAILURE
        }
    }
}
