use crate::analyzers::TableAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{BuilderConfig, DatasetBuilder};
use crate::readers::DlyReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Process {
            input_file,
            output_dir,
            station_id,
            last,
            use_mmap,
            quiet,
        } => {
            if !quiet {
                println!("Processing station records...");
                println!("Input file: {}", input_file.display());
                println!("Output directory: {}", output_dir.display());
                println!("Station: {}", station_id);
            }

            let progress = ProgressReporter::new_spinner("Reading records...", quiet);

            let reader = DlyReader::with_mmap(use_mmap);
            let mut lines = reader.read_lines(&input_file)?;

            // Keep only the tail of the file when requested
            if let Some(last) = last {
                if lines.len() > last {
                    lines.drain(..lines.len() - last);
                }
            }

            progress.set_message("Building dataset...");
            let builder = DatasetBuilder::new(BuilderConfig { station_id });
            let dataset = builder.build(&lines)?;

            progress.finish_with_message(&format!(
                "Parsed {} records into {} observations",
                lines.len(),
                dataset.len()
            ));

            let writer = CsvWriter::new();
            let paths = writer.write_dataset(&dataset, &output_dir)?;

            if !quiet {
                println!("\nWrote {} tables:", paths.len());
                for (path, (variable, records)) in paths.iter().zip(dataset.groups()) {
                    println!(
                        "  {} ({} rows, {})",
                        path.display(),
                        records.len(),
                        variable.tag()
                    );
                }
                println!("Processing complete!");
            }
        }

        Commands::Info {
            file,
            sample,
            analysis_limit,
        } => {
            println!("Analyzing table: {}", file.display());

            let analyzer = TableAnalyzer::new();
            let stats = analyzer.analyze_csv_with_limit(&file, analysis_limit)?;
            println!("\n{}", stats.summary());

            if sample > 0 {
                println!("\nSample rows (showing up to {}):", sample);
                let rows = CsvWriter::new().read_rows(&file)?;
                for (i, row) in rows.iter().take(sample).enumerate() {
                    println!(
                        "{}. {} {}: value={}, color={}",
                        i + 1,
                        row.variable,
                        row.datetime,
                        row.value,
                        if row.color.is_empty() { "-" } else { &row.color }
                    );
                }
            }
        }
    }

    Ok(())
}
