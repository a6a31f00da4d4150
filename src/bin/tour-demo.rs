use std::error::Error;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tour_route::demo::turkey_courier_locations;
use tour_route::models::SolverConfig;
use tour_route::TourSolver;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let locations = turkey_courier_locations();
    let solver = TourSolver::new(SolverConfig::default())?;
    let result = solver.solve(locations.clone())?;

    info!(
        time_limit = ?solver.config().time_limit,
        km = result.total_km,
        liters = result.fuel_liters,
        cost = result.fuel_cost,
        "solved reference instance"
    );

    for (step, leg) in result.legs.iter().enumerate() {
        let from = &locations[leg.from];
        let to = &locations[leg.to];
        println!(
            "{:2}. {:<24} -> {:<24} {:>7.1} km",
            step + 1,
            from.city().unwrap_or(from.name()),
            to.city().unwrap_or(to.name()),
            leg.km
        );
    }
    println!(
        "total {:.1} km, {:.1} L, {:.0} fuel cost",
        result.total_km, result.fuel_liters, result.fuel_cost
    );
    Ok(())
}
