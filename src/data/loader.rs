//! CSV Data Loader Module
//! Loads tweet CSV files with Polars and extracts the text column as a dataset.

use crate::config::{LoadOptions, SourceConfig};
use crate::data::{DataError, Dataset};
use polars::prelude::*;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Column '{column}' not found in {source_name}")]
    MissingColumn { column: String, source_name: String },
    #[error("{source_name} has {found} columns but {expected} names were given")]
    ColumnCountMismatch {
        source_name: String,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Loads CSV sources and keeps the resulting datasets in load order.
pub struct DataLoader {
    options: LoadOptions,
    datasets: Vec<Dataset>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

impl DataLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            datasets: Vec::new(),
        }
    }

    /// Load one source and append it.
    pub fn load_source(&mut self, source: &SourceConfig) -> Result<&Dataset, LoaderError> {
        let dataset = read_source(source, &self.options)?;
        self.datasets.push(dataset);
        Ok(&self.datasets[self.datasets.len() - 1])
    }

    /// Load several sources in parallel. Successful datasets are appended in
    /// source order; failures are returned alongside the source name.
    pub fn load_all(&mut self, sources: &[SourceConfig]) -> Vec<(String, LoaderError)> {
        let mut failures = Vec::new();
        for (source, result) in sources.iter().zip(read_sources(sources, &self.options)) {
            match result {
                Ok(dataset) => self.datasets.push(dataset),
                Err(e) => failures.push((source.name(), e)),
            }
        }
        failures
    }

    pub fn get_datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn take_datasets(&mut self) -> Vec<Dataset> {
        std::mem::take(&mut self.datasets)
    }

    /// Total number of records over all loaded datasets.
    pub fn get_row_count(&self) -> usize {
        self.datasets.iter().map(Dataset::len).sum()
    }
}

/// Read each source on the rayon pool, preserving source order in the output.
pub fn read_sources(
    sources: &[SourceConfig],
    options: &LoadOptions,
) -> Vec<Result<Dataset, LoaderError>> {
    sources
        .par_iter()
        .map(|source| read_source(source, options))
        .collect()
}

/// Read a single CSV source into a dataset of unlabeled records.
pub fn read_source(source: &SourceConfig, options: &LoadOptions) -> Result<Dataset, LoaderError> {
    let name = source.name();
    let df = read_frame(source, options)?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let text = df
        .column(&source.text_column)
        .map_err(|_| LoaderError::MissingColumn {
            column: source.text_column.clone(),
            source_name: name.clone(),
        })?
        .cast(&DataType::String)?;
    let text_ca = text.as_materialized_series().str()?;
    let cells: Vec<Option<String>> = text_ca
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect();

    let dataset = Dataset::from_cells(name, columns, cells, options.skip_malformed)?;
    log::info!(
        "Loaded {} records from {}",
        dataset.len(),
        source.path.display()
    );
    Ok(dataset)
}

fn read_frame(source: &SourceConfig, options: &LoadOptions) -> Result<DataFrame, LoaderError> {
    let names = source.column_names();

    // Tweet exports are often not valid UTF-8, so decode lossily.
    let mut df = LazyCsvReader::new(&source.path)
        .with_has_header(names.is_none())
        .with_n_rows(options.max_rows)
        .with_encoding(CsvEncoding::LossyUtf8)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    if let Some(names) = names {
        if names.len() != df.width() {
            return Err(LoaderError::ColumnCountMismatch {
                source_name: source.name(),
                expected: names.len(),
                found: df.width(),
            });
        }
        df.set_column_names(names.iter().map(String::as_str))?;
    }

    Ok(df)
}
