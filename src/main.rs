use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::Parser;

use tripplanner::models::{Accommodation, Budget, Transportation, TripType};
use tripplanner::{
    ItineraryClient, ItineraryService, TripPlannerConfig, TripRequest, TripWizard, VertexModel,
    logging, prompt, web,
};

mod cli;

use cli::{Cli, Command};

fn load_request(path: &Path) -> Result<TripRequest> {
    TripRequest::from_json_file(path).map_err(|e| {
        tracing::debug!("Loading {} failed: {}", path.display(), e);
        anyhow!("{}: {}", path.display(), e.user_message())
    })
}

fn labels<T>(all: &[T], label: fn(&T) -> &'static str) -> String {
    all.iter().map(label).collect::<Vec<_>>().join(", ")
}

fn print_options() {
    println!("Budget:         {}", labels(&Budget::ALL, Budget::label));
    println!("Trip type:      {}", labels(&TripType::ALL, TripType::label));
    println!(
        "Accommodation:  {}",
        labels(&Accommodation::ALL, Accommodation::label)
    );
    println!(
        "Transportation: {}",
        labels(&Transportation::ALL, Transportation::label)
    );
    println!("Interests:      {}", TripWizard::interest_options().join(", "));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = TripPlannerConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.log_level.as_deref())?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let model = VertexModel::new(&config.model)?;
            tracing::info!("Using model endpoint {}", model.endpoint());
            let service = ItineraryService::new(Arc::new(model));
            web::run(&config.server, service).await?;
        }
        Command::Plan { request, backend } => {
            let trip = load_request(&request)?;
            let backend = backend.unwrap_or(config.client.backend_url);
            let client = ItineraryClient::new(&backend)?;
            println!("{trip}");
            let itinerary = client.request(&trip).await;
            println!("{itinerary}");
        }
        Command::Prompt { request } => {
            let trip = load_request(&request)?;
            println!("{}", prompt::build_prompt(&trip));
        }
        Command::Options => print_options(),
    }
    Ok(())
}
