use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cpu_schedule::config::SimulationConfig;
use cpu_schedule::models::Process;
use cpu_schedule::parse::parse_processes;
use cpu_schedule::report::{gantt_chart, metrics_table};
use cpu_schedule::scheduler::{Admission, Policy, TieBreak};
use cpu_schedule::simulate;
use cpu_schedule::validation::validate_processes;
use cpu_schedule::workload::WorkloadGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Sjf,
    Srtf,
    Rr,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Arrival,
    Input,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AdmissionArg {
    Batch,
    Arrival,
}

/// Simulate single-CPU process scheduling.
///
/// Reads one process per line as PID,Arrival,Burst and prints the
/// resulting Gantt chart with waiting and turnaround times.
#[derive(Debug, Parser)]
struct Opts {
    /// Process list file. Reads stdin when omitted.
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// Scheduling policy.
    #[clap(short = 'p', long, value_enum, default_value = "fcfs")]
    policy: PolicyArg,

    /// Round Robin time quantum.
    #[clap(short = 'q', long)]
    quantum: Option<i64>,

    /// Tie-breaking rule for SJF and SRTF.
    #[clap(long, value_enum, default_value = "arrival")]
    tie_break: TieBreakArg,

    /// Round Robin admission model. "batch" queues every process at t=0
    /// in input order; "arrival" admits processes as they arrive.
    #[clap(long, value_enum, default_value = "batch")]
    admission: AdmissionArg,

    /// JSON simulation config. Overrides --policy, --quantum, --tie-break
    /// and --admission.
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Generate this many random processes instead of reading input.
    #[clap(long, conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for --random.
    #[clap(long, default_value = "0")]
    seed: u64,

    /// Largest arrival time for --random.
    #[clap(long, default_value = "10")]
    max_arrival: i64,

    /// Largest burst time for --random.
    #[clap(long, default_value = "10")]
    max_burst: i64,

    /// Merge back-to-back slices of the same process in the output.
    #[clap(long)]
    coalesce: bool,

    /// Print the schedule and metrics as JSON.
    #[clap(long)]
    json: bool,

    /// Enable verbose output. Specify multiple times to increase verbosity.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Opts {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        if let Some(path) = &self.config {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            return SimulationConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()));
        }

        let policy = match self.policy {
            PolicyArg::Fcfs => Policy::Fcfs,
            PolicyArg::Sjf => Policy::Sjf,
            PolicyArg::Srtf => Policy::Srtf,
            PolicyArg::Rr => match self.quantum {
                Some(quantum) => Policy::RoundRobin { quantum },
                None => bail!("--quantum is required for the rr policy"),
            },
        };
        let tie_break = match self.tie_break {
            TieBreakArg::Arrival => TieBreak::ArrivalThenPid,
            TieBreakArg::Input => TieBreak::InputOrder,
        };
        let admission = match self.admission {
            AdmissionArg::Batch => Admission::Batch,
            AdmissionArg::Arrival => Admission::ArrivalAware,
        };
        Ok(SimulationConfig::new(policy)
            .with_tie_break(tie_break)
            .with_admission(admission))
    }

    fn processes(&self) -> Result<Vec<Process>> {
        if let Some(count) = self.random {
            let mut rng = StdRng::seed_from_u64(self.seed);
            return Ok(WorkloadGenerator::new(count)
                .with_max_arrival(self.max_arrival)
                .with_max_burst(self.max_burst)
                .generate(&mut rng));
        }

        let text = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
        };
        Ok(parse_processes(&text)?)
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let llv = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = opts.simulation_config()?;
    let processes = opts.processes()?;
    if let Err(errors) = validate_processes(&processes) {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Invalid input: {}", messages.join("; "));
    }

    info!("Simulating {} processes with {}", processes.len(), config.policy);
    let mut result = simulate(&processes, &config)?;
    if opts.coalesce {
        result.schedule = result.schedule.coalesced();
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}\n", gantt_chart(&result.schedule));
        println!("{}", metrics_table(&result.metrics));
    }
    Ok(())
}
