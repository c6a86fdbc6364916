use smile_store::service::catalog::{approved_testimonials, pending_testimonials, specialties};
use smile_store::{Config, init_tracing, open_repository};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level, config.logging.json_format);

    let repository = match open_repository(&config) {
        Ok(repository) => repository,
        Err(e) => {
            error!(error = ?e, "failed to open local repository");
            return ExitCode::FAILURE;
        }
    };

    info!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        specialties = ?specialties(repository.doctors()),
        published_testimonials = approved_testimonials(repository.testimonials()).len(),
        pending_testimonials = pending_testimonials(repository.testimonials()).len(),
        session = repository.current_user().map(|u| u.email.as_str()).unwrap_or("none"),
        "smile store ready"
    );

    ExitCode::SUCCESS
}
