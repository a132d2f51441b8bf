use crate::{
    cli::{validate_cluster_inputs, ClusterArgs, ClusterOptions},
    constants::CLUSTER_RULES,
    core::{
        event::{ClusterRule, EventSet},
        matrix::DistanceMatrix,
    },
    io::{matrix_writer::write_matrix_file, table_reader::CohortTable},
    utils::util::{format_number_with_commas, Result},
};

/// Clusters the qualifying calls of `table` into one event set per rule, in rule order.
pub fn build_event_sets(
    table: &CohortTable,
    rules: &[ClusterRule],
    options: &ClusterOptions,
) -> Vec<EventSet> {
    let mut event_sets: Vec<EventSet> = rules
        .iter()
        .map(|rule| EventSet::new(rule.sv_type.clone(), options.window))
        .collect();
    for call in &table.calls {
        event_sets[call.rule].add(call.sample, call.pos, call.magnitude);
    }
    event_sets
}

/// Builds the normalized matrix for an already-read table.
pub fn cluster_table(table: &CohortTable, options: &ClusterOptions) -> DistanceMatrix {
    let event_sets = build_event_sets(table, &CLUSTER_RULES, options);
    for set in &event_sets {
        log::info!(
            "{}: {} events",
            set.sv_type,
            format_number_with_commas(set.len())
        );
    }

    let mut matrix =
        DistanceMatrix::from_events(table.samples.clone(), &event_sets, options.duplicate_policy);
    for col in matrix.normalize_columns() {
        log::warn!(
            "Event {} has magnitudes summing to 0, leaving its column as zeros",
            matrix.columns[col]
        );
    }
    matrix
}

pub fn cluster(args: ClusterArgs) -> Result<()> {
    validate_cluster_inputs(&args)?;
    let tables = args.table_paths();
    for path in &tables {
        log::info!("Reading {}", path.display());
    }

    let table = CohortTable::read(&tables, &CLUSTER_RULES)?;
    log::info!(
        "Read {} samples, {} rows, {} clustered calls",
        table.samples.len(),
        format_number_with_commas(table.stats.n_rows),
        format_number_with_commas(table.calls.len())
    );
    log::debug!(
        "Skipped {} short rows, filtered {} rows outside the clustering rules",
        table.stats.n_short,
        table.stats.n_filtered
    );

    let matrix = cluster_table(&table, &args.options);
    let output = args.output_path();
    write_matrix_file(&matrix, &output)?;
    log::info!(
        "Wrote {} x {} matrix to {}",
        matrix.n_rows(),
        matrix.n_cols(),
        output.display()
    );
    Ok(())
}
