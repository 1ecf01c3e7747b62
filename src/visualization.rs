use crate::process::ProcessId;
use crate::simulation::ScheduleReport;
use crate::scheduler::Timeline;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Write one Gantt chart per report into `output_dir`, returning the files written
pub fn generate_plots(
    reports: &[ScheduleReport],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let path = output_dir.join(format!("gantt_{}.png", report.algorithm.tag()));
        let title = match report.quantum {
            Some(q) => format!("{} (quantum {})", report.algorithm, q),
            None => report.algorithm.to_string(),
        };
        plot_gantt(&report.timeline, &title, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// One row per process, one bar per slice
pub fn plot_gantt(timeline: &Timeline, title: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let rows = process_rows(timeline);
    let num_rows = rows.len().max(1);
    let height = 160 + 40 * num_rows as u32;

    let root = BitMapBackend::new(path, (1024, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_time = timeline.makespan().max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(10)
        .build_cartesian_2d(0.0..max_time, 0.0..num_rows as f64)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_desc("Time (ticks)")
        .draw()?;

    let row_of = |id: ProcessId| rows.iter().position(|&r| r == id).unwrap_or(0);

    chart.draw_series(timeline.slices().iter().map(|s| {
        let row = row_of(s.id);
        let y = (num_rows - 1 - row) as f64;
        Rectangle::new(
            [(s.start, y + 0.15), (s.end(), y + 0.85)],
            Palette99::pick(row).mix(0.8).filled(),
        )
    }))?;

    chart.draw_series(timeline.slices().iter().map(|s| {
        let row = row_of(s.id);
        let y = (num_rows - 1 - row) as f64;
        Rectangle::new([(s.start, y + 0.15), (s.end(), y + 0.85)], &BLACK)
    }))?;

    chart.draw_series(timeline.slices().iter().map(|s| {
        let row = row_of(s.id);
        let y = (num_rows - 1 - row) as f64;
        Text::new(
            format!("P{}", s.id),
            (s.start + s.run * 0.1, y + 0.6),
            ("sans-serif", 14).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Process ids that appear on the timeline, ascending
fn process_rows(timeline: &Timeline) -> Vec<ProcessId> {
    let mut ids: Vec<ProcessId> = timeline.slices().iter().map(|s| s.id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Slice;

    #[test]
    fn test_process_rows() {
        let mut timeline = Timeline::new();
        timeline.push(Slice::full(3, 0.0, 1.0));
        timeline.push(Slice::full(1, 1.0, 1.0));
        timeline.push(Slice::full(3, 2.0, 1.0));

        assert_eq!(process_rows(&timeline), vec![1, 3]);
        assert!(process_rows(&Timeline::new()).is_empty());
    }
}
