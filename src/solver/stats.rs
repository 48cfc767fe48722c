use prettytable::{Cell, Row, Table};

use crate::solver::{
    propagators::Propagator,
    search::{PerPropagatorStats, SearchStats},
};

/// Renders per-propagator work counters as a text table.
pub fn render_stats_table(stats: &SearchStats, propagators: &[Box<dyn Propagator>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Propagator"),
        Cell::new("Description"),
        Cell::new("Passes"),
        Cell::new("Prunings"),
        Cell::new("Time / Pass (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&usize, &PerPropagatorStats)> =
        stats.propagator_stats.iter().collect();
    sorted_stats.sort_by_key(|entry| entry.1.time_spent_micros);

    for (propagator_id, propagator_stats) in sorted_stats {
        let descriptor = propagators[*propagator_id].descriptor();
        let avg_time = if propagator_stats.passes > 0 {
            propagator_stats.time_spent_micros as f64 / propagator_stats.passes as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&descriptor.description),
            Cell::new(&propagator_stats.passes.to_string()),
            Cell::new(&propagator_stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                propagator_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::render_stats_table;
    use crate::solver::{
        propagators::{assigned_values::AssignedValuesPropagator, Propagator},
        search::{PerPropagatorStats, SearchStats},
    };

    #[test]
    fn table_lists_each_propagator_with_counters() {
        let mut stats = SearchStats::default();
        stats.propagator_stats.insert(
            0,
            PerPropagatorStats {
                passes: 4,
                prunings: 2,
                time_spent_micros: 1500,
            },
        );
        let propagators: Vec<Box<dyn Propagator>> = vec![Box::new(AssignedValuesPropagator)];

        let rendered = render_stats_table(&stats, &propagators);
        assert!(rendered.contains("AssignedValues"));
        assert!(rendered.contains('4'));
        assert!(rendered.contains("1.50"));
    }
}
