use anyhow::{bail, Result};
use coding_club_site::config::Config;
use coding_club_site::content::load_content_dir;
use coding_club_site::i18n::{TranslationMetrics, TranslationTables, TranslationValidator};
use coding_club_site::navigation::check_labels;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coding_club_site=info".parse()?)
                .add_directive("content_check=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Checking site content in {} ({:?})",
        config.content_dir.display(),
        config.environment
    );

    // Step 1: Translation tables
    let report = TranslationValidator::validate_tables();
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for problem in &report.errors {
        error!("{}", problem);
    }

    // Step 2: Every navigation label must resolve in every language
    let metrics = TranslationMetrics::new();
    for (lang, key) in check_labels(TranslationTables::get(), &metrics) {
        warn!("Navigation label \"{}\" is missing for language: {}", key, lang);
    }
    let lookups = metrics.report();
    if lookups.missing > 0 {
        warn!(
            "{} navigation label(s) fell back to their key ({:.1}% resolved)",
            lookups.missing, lookups.hit_rate
        );
    }

    // Step 3: Content collections
    let content = load_content_dir(&config.content_dir)?;
    let mut invalid = 0;
    for (path, failure) in content.invalid() {
        invalid += 1;
        error!("{}: {}", path.display(), failure);
    }
    info!(
        "Validated {} record(s): {} valid, {} invalid",
        content.records.len(),
        content.valid().count(),
        invalid
    );

    let table_problems = report.has_errors() && config.environment.is_production();
    if invalid > 0 || table_problems {
        bail!("Content check failed");
    }

    info!("✓ Content check passed");
    Ok(())
}
