use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sharebite::sdk::{
    api::{ApiError, LoginRequest, ShareBiteClient, SignupRequest},
    config::{AppConfig, OrsConfig},
    geo::{distance_between, format_distance_km, Coordinate},
    listings::{filter_listings, NearbyQuery, NewFood},
    map::MapFrame,
    routing::{OrsDirectionsProvider, RouteRequest, RouteResolver, RouteResult},
    session::{FileSessionStore, Session, SessionStore, UserRole},
    util::{log::init_logging, rate_limit::directions_limiter},
};

/// Find surplus food nearby and get directions to it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Straight-line distance and map framing between two points
    Distance {
        /// Start point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,
        /// End point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,
    },
    /// Driving route, falling back to a direct line when unavailable
    Route {
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,
        /// Print the route as JSON for a map consumer
        #[arg(long)]
        json: bool,
    },
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "Individual")]
        user_type: String,
    },
    /// Forget the saved session
    Logout,
    /// List food shared near a point
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        at: Coordinate,
        #[arg(long, default_value_t = 10.0)]
        radius_km: f64,
        /// Only show listings whose name or poster contains this text
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Share a food item at a location
    AddFood {
        #[arg(long)]
        name: String,
        #[arg(long)]
        servings: u32,
        /// Hours until it should be collected
        #[arg(long)]
        best_before_hours: u32,
        #[arg(long, allow_hyphen_values = true)]
        at: Coordinate,
    },
}

fn parse_role(raw: &str) -> Result<UserRole, String> {
    match raw.to_ascii_lowercase().as_str() {
        "sender" | "seller" => Ok(UserRole::Sender),
        "receiver" | "buyer" => Ok(UserRole::Receiver),
        other => Err(format!("unknown role \"{other}\", expected sender or receiver")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Distance { from, to } => {
            let frame = MapFrame::new(from, to);
            println!("Distance: {}", format_distance_km(distance_between(from, to)));
            println!("Center:   {}", frame.center);
            println!("Zoom:     {}", frame.zoom);
        }
        Command::Route { from, to, json } => {
            let config = AppConfig::from_env()?;
            let provider = match config.ors {
                OrsConfig::Remote { api_key, base_url } => OrsDirectionsProvider::remote(
                    base_url,
                    api_key,
                    directions_limiter(config.directions_per_minute),
                )?,
                OrsConfig::Local { base_url } => OrsDirectionsProvider::local(base_url)?,
            };
            let resolver = RouteResolver::new(provider, config.route_timeout);
            let request = RouteRequest::new(from, to);
            let result = resolver.resolve(&request).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_route(&result, &MapFrame::new(from, to));
            }
        }
        Command::Login {
            email,
            password,
            role,
        } => {
            let config = AppConfig::from_env()?;
            let client = ShareBiteClient::new(&config.api_base_url)?;
            let session = client
                .login(&LoginRequest {
                    email,
                    password,
                    role,
                })
                .await
                .context("Login failed")?;
            FileSessionStore::new(&config.session_file).save(&session)?;
            log::info!("Logged in as {}", session.email);
        }
        Command::Signup {
            email,
            password,
            name,
            phone,
            user_type,
        } => {
            let config = AppConfig::from_env()?;
            let client = ShareBiteClient::new(&config.api_base_url)?;
            client
                .signup(&SignupRequest {
                    email,
                    password,
                    name,
                    phone_number: phone,
                    user_type,
                })
                .await
                .context("Signup failed")?;
            log::info!("Account created, log in to continue");
        }
        Command::Logout => {
            let config = AppConfig::from_env()?;
            FileSessionStore::new(&config.session_file).clear()?;
        }
        Command::Nearby {
            at,
            radius_km,
            search,
        } => {
            if !(radius_km.is_finite() && radius_km > 0.0) {
                bail!("--radius-km must be a positive number");
            }
            let config = AppConfig::from_env()?;
            let session = require_session(&config)?;
            let client = ShareBiteClient::new(&config.api_base_url)?;
            let listings = client
                .nearby_foods(&session, &NearbyQuery::new(at, radius_km))
                .await?;
            let shown = filter_listings(&listings, &search);
            log::info!(
                "{} of {} listings within {} km",
                shown.len(),
                listings.len(),
                radius_km
            );
            for listing in shown {
                println!(
                    "{:<28} by {:<20} {:>3} servings  {:>8}  {}",
                    listing.food_name,
                    listing.posted_by,
                    listing.servings,
                    listing.distance_label(at),
                    if listing.available { "Available" } else { "Not Available" }
                );
            }
        }
        Command::AddFood {
            name,
            servings,
            best_before_hours,
            at,
        } => {
            let config = AppConfig::from_env()?;
            let session = require_session(&config)?;
            let client = ShareBiteClient::new(&config.api_base_url)?;
            let reply = client
                .add_food(&session, &NewFood::new(name, servings, best_before_hours, at))
                .await?;
            log::info!("Food added: {}", reply);
        }
    }

    Ok(())
}

fn require_session(config: &AppConfig) -> Result<Session> {
    FileSessionStore::new(&config.session_file)
        .load()?
        .ok_or_else(|| ApiError::NotLoggedIn.into())
}

fn print_route(result: &RouteResult, frame: &MapFrame) {
    if let Some(notice) = result.notice() {
        println!("{notice}");
        if let Some(label) = result.distance_label() {
            println!("Straight distance: {label}");
        }
    } else {
        if let Some(label) = result.distance_label() {
            println!("Distance: {label}");
        }
        if let Some(label) = result.duration_label() {
            println!("Duration: {label}");
        }
    }

    if result.steps.is_empty() {
        println!("Turn-by-turn directions not available, follow the route shown on the map");
    } else {
        for (index, step) in result.steps.iter().enumerate() {
            println!("{:>3}. {} ({})", index + 1, step.instruction, step.distance_label());
        }
    }

    println!("Map: center {} zoom {}", frame.center, frame.zoom);
    println!("Open in Google Maps: {}", frame.directions_url());
}
