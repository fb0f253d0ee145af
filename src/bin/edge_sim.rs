//! Edge/cloud scheduling simulator CLI.
//!
//! Reads tasks from a JSON file (or interactively when no file is given), runs
//! the two-phase simulation and prints the resulting schedule.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;

use edge_cloud_scheduler::builders::SimulationBuilder;
use edge_cloud_scheduler::config::SimulationConfig;
use edge_cloud_scheduler::core::AppResult;
use edge_cloud_scheduler::runtime::{prompt_tasks, read_tasks_json};
use edge_cloud_scheduler::util::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "edge-sim")]
#[command(about = "Simulate edge/cloud task placement and load balancing", long_about = None)]
struct Args {
    /// JSON task list; prompts on stdin when omitted
    #[arg(short, long)]
    tasks: Option<PathBuf>,

    /// JSON configuration file; defaults come from EDGE_SIM_* variables otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of datacenters (datacenter 0 is the cloud)
    #[arg(short, long)]
    datacenters: Option<usize>,

    /// Override the number of virtual machines per datacenter
    #[arg(short, long)]
    resources: Option<usize>,

    /// Write the full report (schedule and load series) as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(args: &Args) -> AppResult<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimulationConfig::from_json_str(&raw).map_err(|e| anyhow!(e))?
        }
        None => SimulationConfig::from_env().map_err(|e| anyhow!(e))?,
    };
    if let Some(datacenters) = args.datacenters {
        config.num_datacenters = datacenters;
    }
    if let Some(resources) = args.resources {
        config.resources_per_datacenter = resources;
    }
    config.validate().map_err(|e| anyhow!(e))?;
    Ok(config)
}

fn main() -> AppResult<()> {
    init_tracing("warn");
    let args = Args::parse();
    let config = load_config(&args)?;

    let tasks = match &args.tasks {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening tasks {}", path.display()))?;
            read_tasks_json(BufReader::new(file))?
        }
        None => prompt_tasks(io::stdin().lock(), io::stdout())?,
    };
    let edge_datacenters = config.edge_datacenters();
    info!(
        tasks = tasks.len(),
        datacenters = config.num_datacenters,
        edge_datacenters,
        "starting simulation"
    );

    let report = SimulationBuilder::new(config).build()?.run(tasks)?;

    print!("{}", report.render_schedule_table());
    let summary = report.summary();
    println!();
    println!("Tasks: {}", summary.tasks);
    println!("Edge datacenters: {edge_datacenters}");
    println!("Makespan: {}", summary.makespan);
    println!("Mean turnaround: {:.2}", summary.mean_turnaround);
    println!("Max turnaround: {}", summary.max_turnaround);
    for (id, degree) in report.datacenter_ids.iter().zip(&summary.final_degrees) {
        println!("{id} final load balance degree: {degree}");
    }

    if let Some(path) = args.output {
        fs::write(&path, report.to_json()?)
            .with_context(|| format!("writing report {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}
