use home_price_estimator::config::Settings;
use home_price_estimator::core::{ConsoleView, PageController};
use home_price_estimator::models::{FormData, FormField};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Collect `name=value` arguments into form data
///
/// Names may be the page input names (`numRooms`, `landarea`, ...) or the
/// request field names (`rooms`, `landsize`, ...).
fn parse_form_args(args: impl IntoIterator<Item = String>) -> Result<FormData, String> {
    let mut form = FormData::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected name=value, got '{}'", arg))?;
        let field = FormField::from_input_name(name)
            .or_else(|| field_from_request_name(name))
            .ok_or_else(|| format!("Unknown form field '{}'", name))?;
        form.insert(field.input_name(), value);
    }
    Ok(form)
}

fn field_from_request_name(name: &str) -> Option<FormField> {
    match name {
        "rooms" => Some(FormField::Rooms),
        "bedroom" => Some(FormField::Bedroom),
        "bathroom" => Some(FormField::Bathroom),
        "carpark" => Some(FormField::Carpark),
        "landsize" => Some(FormField::Landsize),
        "buildingarea" => Some(FormField::BuildingArea),
        _ => None,
    }
}

fn init_logging(settings: &Settings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);

    let form = match parse_form_args(std::env::args().skip(1)) {
        Ok(form) => form,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let controller = match PageController::from_settings(&settings) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Using estimator API at {}", controller.api().base_url());

    match controller.api().health_check().await {
        Ok(health) if health.is_ok() => info!("Backend healthy"),
        Ok(health) => warn!(
            "Backend reports {}: {}",
            health.status,
            health.message.as_deref().unwrap_or("no details")
        ),
        Err(e) => warn!("Health check failed: {}", e),
    }

    let mut view = ConsoleView;
    let loaded = controller.load(&mut view).await;
    info!("Page loaded: {} suburbs, {} types", loaded.suburbs, loaded.types);

    if form.is_empty() {
        return ExitCode::SUCCESS;
    }

    match controller.submit(&form, &mut view).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_args() {
        let args = ["rooms=3", "numBedooms=2", "building area=200", "type=House"]
            .into_iter()
            .map(String::from);
        let form = parse_form_args(args).unwrap();

        assert_eq!(form.get(FormField::Rooms), Some("3"));
        assert_eq!(form.get(FormField::Bedroom), Some("2"));
        assert_eq!(form.get(FormField::BuildingArea), Some("200"));
        assert_eq!(form.get(FormField::Type), Some("House"));
    }

    #[test]
    fn test_parse_form_args_rejects_unknown() {
        assert!(parse_form_args(["garden=yes".to_string()]).is_err());
        assert!(parse_form_args(["rooms".to_string()]).is_err());
    }
}
