use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routeplan_cli::{init_tracing, load_points_file, parse_point};
use routeplan_core::{
    great_circle_distance_km, initial_bearing_degrees, Coordinate, ExportError, ExportKind,
    GeoBounds, PlanOutcome, RouteSession,
};
use routeplan_sdk::{
    Config, ExportSink, FileSink, Geocoder, HttpRoutePlanner, NominatimGeocoder, SharedSession,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route through the given points and export it
    Plan {
        /// Waypoint as LAT,LNG (repeat in travel order)
        #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Coordinate>,

        /// JSON file with [{"lat": .., "lng": ..}, ...]; replaces --point
        #[arg(long)]
        points_file: Option<PathBuf>,

        /// Route planner URL (overrides ROUTEPLAN_PLANNER_URL)
        #[arg(long)]
        url: Option<String>,

        /// Allowed area as SOUTH,WEST,NORTH,EAST (overrides ROUTEPLAN_BOUNDS)
        #[arg(long, allow_hyphen_values = true)]
        bounds: Option<String>,

        /// Accept planner routes with a different point count than requested
        #[arg(long)]
        allow_resampled: bool,

        /// Export format: coordinates, vectors or map
        #[arg(long, default_value = "coordinates")]
        format: ExportKind,

        /// Directory to save the export in; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Distance and initial bearing between two points
    Measure {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: Coordinate,
    },
    /// Resolve a place name or LAT,LNG query to a coordinate
    Geocode { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("routeplan=info")?;
    let args = Args::parse();
    let config = Config::from_env();

    match args.command {
        Command::Plan {
            points,
            points_file,
            url,
            bounds,
            allow_resampled,
            format,
            out,
        } => {
            let mut config = config;
            if let Some(url) = url {
                config.planner_url = url;
            }
            if let Some(bounds) = bounds {
                config.bounds = GeoBounds::parse(&bounds).with_context(|| {
                    format!("Invalid bounds {bounds:?}, expected SOUTH,WEST,NORTH,EAST")
                })?;
            }
            if allow_resampled {
                config.strict_point_count = false;
            }
            let source = match points_file {
                Some(path) => PointSource::File(load_points_file(&path)?),
                None => PointSource::Args(points),
            };
            plan(config, source, format, out).await
        }
        Command::Measure { from, to } => {
            println!("Distance: {:.2}km", great_circle_distance_km(from, to));
            println!("Bearing: {:.1}°", initial_bearing_degrees(from, to));
            Ok(())
        }
        Command::Geocode { query } => {
            let geocoder = NominatimGeocoder::new(&config.geocoder_url, &config.country_codes)
                .context("Failed to build geocoder client")?;
            let coordinate = geocoder.geocode(&query).await?;
            println!("{coordinate}");
            Ok(())
        }
    }
}

enum PointSource {
    /// Points typed one by one; bad ones are skipped.
    Args(Vec<Coordinate>),
    /// A loaded point set; one bad point rejects the file.
    File(Vec<Coordinate>),
}

async fn plan(
    config: Config,
    source: PointSource,
    format: ExportKind,
    out: Option<PathBuf>,
) -> Result<()> {
    let session = SharedSession::new(RouteSession::with_policy(
        config.bounds,
        config.response_policy(),
    ));

    match source {
        PointSource::Args(points) => {
            for point in points {
                if let Err(e) = session.add_point(point).await {
                    eprintln!("Skipping point: {e}");
                }
            }
        }
        PointSource::File(points) => session
            .replace_all(points)
            .await
            .context("Point file rejected")?,
    }
    tracing::info!(
        waypoints = session.waypoints().await.len(),
        planner = %config.planner_url,
        "Planning route"
    );

    let planner = HttpRoutePlanner::with_timeout(&config.planner_url, config.timeout)
        .context("Failed to build planner client")?;

    match session.plan(&planner).await {
        PlanOutcome::Applied(route) => {
            let summary = route.summary();
            eprintln!(
                "Planned {} points, {:.2}km reported, {:.2}km along path",
                summary.point_count, summary.reported_length_km, summary.path_length_km
            );
        }
        PlanOutcome::Skipped => {
            eprintln!("Need at least two points inside the allowed area to plan a route.");
            return Ok(());
        }
        PlanOutcome::Failed(e) => anyhow::bail!("Route planning failed: {e}"),
        PlanOutcome::Stale | PlanOutcome::Cancelled => {
            anyhow::bail!("Route plan was superseded before it completed")
        }
    }

    let export = match session.export(format).await {
        Ok(export) => export,
        Err(e @ ExportError::Unsupported(_)) => {
            eprintln!("{e}: map export would render a PNG/PDF of the current map view");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match out {
        Some(dir) => {
            let path = FileSink::new(dir).save_export(&export)?;
            eprintln!("Saved {}", path.display());
        }
        None => println!("{}", export.content),
    }
    Ok(())
}
