use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use rdsim::{integrate, summarise_metrics, total_energy, Scenario, ScenarioConfig, Trajectory};

#[derive(Parser, Debug)]
#[command(about = "2D star-planet-moon orbital simulation")]
struct Args {
    /// Scenario YAML file under scenarios/
    #[arg(short, default_value = "red_dwarf.yaml")]
    file_name: String,

    /// Override the total integration time
    #[arg(long)]
    duration: Option<f64>,

    /// Override the step size
    #[arg(long)]
    dt: Option<f64>,

    /// Override the integration method ("leapfrog", "verlet" or "rk4")
    #[arg(long)]
    method: Option<String>,

    /// Skip writing metrics.json / trajectories.json
    #[arg(long)]
    no_save: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn write_trajectories(scenario: &Scenario, trajectory: &Trajectory) -> Result<()> {
    let mut bodies = serde_json::Map::new();
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let series: Vec<[f64; 2]> = trajectory
            .body_positions(i)
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        bodies.insert(body.name.clone(), serde_json::to_value(series)?);
    }

    let doc = json!({
        "times": trajectory.times,
        "bodies": bodies,
    });
    let file = BufWriter::new(File::create("trajectories.json")?);
    serde_json::to_writer(file, &doc)?;
    info!("trajectories.json written");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg)?;

    if let Some(duration) = args.duration {
        scenario.parameters.t_end = duration;
    }
    if let Some(dt) = args.dt {
        scenario.parameters.h0 = dt;
    }
    if let Some(method) = args.method {
        scenario.method = method;
    }

    let params = scenario.parameters.clone();
    info!(
        method = %scenario.method,
        t_end = params.t_end,
        h0 = params.h0,
        bodies = scenario.system.bodies.len(),
        "starting integration"
    );

    let trajectory = integrate(
        &scenario.system,
        params.t_end,
        params.h0,
        &scenario.method,
        &scenario.forces,
    )?;
    info!(snapshots = trajectory.len(), "integration finished");

    // Energy drift between the first and last snapshot. Leapfrog should stay
    // well under a percent; rk4 drifts secularly on long runs.
    let masses = scenario.system.masses();
    let (k0, p0) = total_energy(&trajectory.positions[0], &trajectory.velocities[0], &masses, params.g);
    let last = trajectory.len() - 1;
    let (k1, p1) = total_energy(
        &trajectory.positions[last],
        &trajectory.velocities[last],
        &masses,
        params.g,
    );
    let initial_energy = k0 + p0;
    let drift = ((k1 + p1) - initial_energy).abs() / initial_energy.abs();
    info!(relative_energy_drift = drift, "energy diagnostic");

    let star = scenario.system.index_of("Star");
    let planet = scenario.system.index_of("Planet");
    let moon = scenario.system.index_of("Moon");
    if let (Some(star), Some(planet), Some(moon)) = (star, planet, moon) {
        let metrics = summarise_metrics(
            &trajectory.times,
            &trajectory.body_positions(star),
            &trajectory.body_positions(planet),
            &trajectory.body_positions(moon),
            params.alignment_threshold,
        );
        info!(
            pericentres = metrics.moon_orbit_count,
            alignments = metrics.alignment_times.len(),
            mean_orbits_between_alignments = ?metrics.mean_orbits_between_alignments,
            "orbital metrics"
        );

        if !args.no_save {
            let doc = json!({
                "metrics": metrics,
                "run": {
                    "method": scenario.method,
                    "t_end": params.t_end,
                    "h0": params.h0,
                    "relative_energy_drift": drift,
                },
            });
            let file = BufWriter::new(File::create("metrics.json")?);
            serde_json::to_writer_pretty(file, &doc)?;
            info!("metrics.json written");
        }
    } else {
        warn!("scenario has no Star/Planet/Moon bodies, skipping orbital metrics");
    }

    if !args.no_save {
        write_trajectories(&scenario, &trajectory)?;
    }

    Ok(())
}
