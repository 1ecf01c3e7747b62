use clap::Parser;
use colored::Colorize;
use cpusched::{Config, ScheduleReport, Simulator};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

#[derive(Parser, Debug)]
#[command(author, version, about = "CPU Scheduling Calculator", long_about = None)]
struct Args {
    /// Path to the TOML (or .json) workload file
    #[arg(short, long, default_value = "workload.toml")]
    config: PathBuf,

    /// Override the configured algorithm (fcfs, sjf, priority, rr)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Override the round robin time quantum
    #[arg(long)]
    quantum: Option<f64>,

    /// Run all four algorithms and compare their averages
    #[arg(long)]
    compare: bool,

    /// Minimal output (averages only)
    #[arg(short, long)]
    quiet: bool,

    /// Also print the execution timeline
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Save report(s) to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write Gantt charts into this directory
    #[arg(long)]
    plots: Option<PathBuf>,
}

#[derive(Tabled)]
struct ProcessRow {
    #[tabled(rename = "Process")]
    process: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Burst")]
    burst: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Waiting")]
    waiting: String,
    #[tabled(rename = "Turnaround")]
    turnaround: String,
    #[tabled(rename = "Completion")]
    completion: String,
}

#[derive(Tabled)]
struct SliceRow {
    #[tabled(rename = "Round")]
    round: usize,
    #[tabled(rename = "Process")]
    process: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "Run")]
    run: String,
    #[tabled(rename = "Remaining Before")]
    remaining_before: String,
    #[tabled(rename = "Remaining After")]
    remaining_after: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Algorithm")]
    algorithm: String,
    #[tabled(rename = "Avg Waiting")]
    avg_waiting: String,
    #[tabled(rename = "Avg Turnaround")]
    avg_turnaround: String,
    #[tabled(rename = "Max Waiting")]
    max_waiting: String,
    #[tabled(rename = "Makespan")]
    makespan: String,
    #[tabled(rename = "CPU Util")]
    utilization: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let use_color = !args.no_color;
    if !use_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.quiet {
        println!("{}", "CPU Scheduling Calculator".bright_cyan().bold());
        println!("Loading workload from: {:?}\n", args.config);
    }

    let mut config = Config::from_file(&args.config)?;
    if let Some(algorithm) = &args.algorithm {
        config.scheduler.algorithm = algorithm.clone();
    }
    if let Some(quantum) = args.quantum {
        config.scheduler.quantum = Some(quantum);
    }

    let processes = config.workload.processes();
    if !args.quiet {
        println!("  Processes: {}", processes.len());
        println!("  Quantum:   {}\n", config.scheduler.quantum());
    }

    let reports = if args.compare {
        Simulator::compare(&processes, config.scheduler.quantum())?
    } else {
        vec![Simulator::new(config.scheduler.clone())?.run(&processes)?]
    };

    for report in &reports {
        print_report(report, args);
    }

    if args.compare {
        print_comparison(&reports);
    }

    if let Some(output_path) = &args.output {
        save_reports_json(&reports, output_path)?;
        if !args.quiet {
            println!("\nReport saved to: {:?}", output_path);
        }
    }

    if let Some(dir) = &args.plots {
        let written = cpusched::visualization::generate_plots(&reports, dir)?;
        if !args.quiet {
            println!("\nGenerated plots in {:?}:", dir);
            for path in written {
                println!("  - {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_report(report: &ScheduleReport, args: &Args) {
    let heading = match report.quantum {
        Some(q) => format!("{} (quantum {})", report.algorithm, q),
        None => report.algorithm.to_string(),
    };

    if args.quiet {
        println!(
            "{}: avg waiting {:.2}, avg turnaround {:.2}",
            report.algorithm.tag(),
            report.avg_waiting_time(),
            report.avg_turnaround_time()
        );
        return;
    }

    println!("{}", heading.yellow().bold());
    println!("{}", "━".repeat(60).bright_black());

    let rows: Vec<ProcessRow> = report
        .processes
        .iter()
        .zip(report.completion_times())
        .map(|(p, completion)| ProcessRow {
            process: format!("P{}", p.id),
            arrival: fmt_ticks(p.arrival_time),
            burst: fmt_ticks(p.burst_time),
            priority: p.priority.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
            waiting: fmt_ticks(p.waiting_time),
            turnaround: fmt_ticks(p.turnaround_time),
            completion: completion.map(fmt_ticks).unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()).to_string());

    if args.verbose {
        println!("\n{}", "EXECUTION TIMELINE".green().bold());
        let slices: Vec<SliceRow> = report
            .timeline
            .slices()
            .iter()
            .enumerate()
            .map(|(i, s)| SliceRow {
                round: i + 1,
                process: format!("P{}", s.id),
                start: fmt_ticks(s.start),
                run: fmt_ticks(s.run),
                remaining_before: fmt_ticks(s.remaining_before),
                remaining_after: fmt_ticks(s.remaining_after),
            })
            .collect();
        println!("{}", Table::new(&slices).with(Style::rounded()).to_string());
    }

    println!(
        "  • Average waiting time:    {}",
        format!("{:.2}", report.avg_waiting_time()).bright_green()
    );
    println!(
        "  • Average turnaround time: {}",
        format!("{:.2}", report.avg_turnaround_time()).bright_green()
    );
    println!(
        "  • Makespan: {} ticks, CPU utilization {:.1}%\n",
        fmt_ticks(report.timeline.makespan()),
        report.cpu_utilization() * 100.0
    );
}

fn print_comparison(reports: &[ScheduleReport]) {
    println!("{}", "COMPARISON".yellow().bold());
    let rows: Vec<ComparisonRow> = reports
        .iter()
        .map(|r| ComparisonRow {
            algorithm: r.algorithm.to_string(),
            avg_waiting: format!("{:.2}", r.avg_waiting_time()),
            avg_turnaround: format!("{:.2}", r.avg_turnaround_time()),
            max_waiting: fmt_ticks(r.summary.max_waiting_time),
            makespan: fmt_ticks(r.timeline.makespan()),
            utilization: format!("{:.1}%", r.cpu_utilization() * 100.0),
        })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()).to_string());

    let best = reports.iter().min_by(|a, b| {
        a.avg_waiting_time()
            .partial_cmp(&b.avg_waiting_time())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(best) = best {
        println!(
            "  • Lowest average waiting time: {}",
            best.algorithm.to_string().bright_green()
        );
    }
}

/// Whole ticks print without a fractional part
fn fmt_ticks(t: f64) -> String {
    if t.fract() == 0.0 {
        format!("{}", t as i64)
    } else {
        format!("{:.2}", t)
    }
}

fn save_reports_json(
    reports: &[ScheduleReport],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(reports)?,
    };
    std::fs::write(path, json)?;
    Ok(())
}
