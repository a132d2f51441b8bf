use crate::{
    cli::CollateArgs,
    io::{callers::CallerOutput, table_writer::TableWriter},
    utils::util::{format_number_with_commas, Result},
};
use std::path::Path;

/// Appends one block for `sample` to `output`, reading every caller output present under `dir`.
/// Returns the number of call rows written per caller, in `CallerOutput::ALL` order.
pub fn collate_sample(
    dir: &Path,
    sample: &str,
    reference: &str,
    output: &Path,
) -> Result<Vec<(CallerOutput, usize)>> {
    let mut writer = TableWriter::append(output, sample, reference)?;
    let mut counts = Vec::with_capacity(CallerOutput::ALL.len());

    for caller in CallerOutput::ALL {
        let paths = caller.input_paths(dir, sample)?;
        if paths.is_empty() {
            log::debug!("No {} output for sample {}", caller.name(), sample);
            counts.push((caller, 0));
            continue;
        }
        let before = writer.n_rows();
        for call in caller.extract(dir, sample)? {
            writer.write_call(&call)?;
        }
        counts.push((caller, writer.n_rows() - before));
    }

    writer.finish()?;
    Ok(counts)
}

pub fn collate(args: CollateArgs) -> Result<()> {
    let output = args.output_path();
    log::info!(
        "Collating calls for sample {} (reference {}) into {}",
        args.sample,
        args.reference,
        output.display()
    );

    let counts = collate_sample(&args.dir, &args.sample, &args.reference, &output)?;
    let mut total = 0;
    for (caller, n) in counts {
        log::info!("{:<30} {:>10} calls", caller.name(), format_number_with_commas(n));
        total += n;
    }
    log::info!("Wrote {} calls", format_number_with_commas(total));
    Ok(())
}
