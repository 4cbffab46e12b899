// ============================================================
// Layer 4: Delimited Text Loader
// ============================================================
// Reads `f1,f2,...,fN,label` lines and builds the encoded dataset
// in a single pass:
//
//   for each line:
//     blank?            → skip (does not consume a row)
//     wrong field count → FieldCount error
//     bad number        → Parse error
//     past capacity     → Capacity error
//     otherwise         → push features, encode label, push id
//
// Any error aborts the whole load; nothing partial is returned.
//
// Field splitting, trimming and quoting are left to the csv
// crate, so a quoted label such as "Iris, setosa" survives intact.
// Line numbers in errors come from the reader's record positions.

use std::{fs::File, io::Read, path::PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::data::preprocessor::BlankRecordFilter;
use crate::domain::{
    dataset::{EncodedDataset, FeatureMatrix, LabelVector},
    label_dictionary::LabelDictionary,
    record::Record,
    traits::DatasetSource,
};
use crate::error::{ConvertError, ConvertResult};

/// Number of records in the Iris dataset
pub const DEFAULT_CAPACITY: usize = 150;

/// Number of numeric columns in the Iris dataset
pub const DEFAULT_NUM_FEATURES: usize = 4;

const FIELD_SEPARATOR: u8 = b',';

/// Upper bound on rows reserved up front; larger datasets grow as needed
const MAX_PREALLOCATED_ROWS: usize = 4096;

/// Loads a comma-separated file from disk.
/// Implements the DatasetSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    path: PathBuf,
    num_features: usize,
    /// Maximum number of records; `None` lets the matrix grow freely
    capacity: Option<usize>,
}

impl CsvDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            num_features: DEFAULT_NUM_FEATURES,
            capacity: Some(DEFAULT_CAPACITY),
        }
    }

    pub fn with_num_features(mut self, num_features: usize) -> Self {
        self.num_features = num_features;
        self
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Parse from any reader. `load()` is this plus opening the
    /// file; tests call it directly with in-memory input.
    pub fn load_from_reader<R: Read>(&self, input: R) -> ConvertResult<EncodedDataset> {
        if self.num_features.checked_add(1).is_none() {
            return Err(ConvertError::FeatureCount(self.num_features));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(FIELD_SEPARATOR)
            .from_reader(input);

        let blank = BlankRecordFilter::new();
        let initial_rows = self.capacity.unwrap_or(0).min(MAX_PREALLOCATED_ROWS);

        let mut features = FeatureMatrix::with_capacity(self.num_features, initial_rows);
        let mut labels = LabelVector::with_capacity(initial_rows);
        let mut dictionary = LabelDictionary::new();
        let mut fields = StringRecord::new();

        while reader
            .read_record(&mut fields)
            .map_err(|e| ConvertError::csv(&self.path, e))?
        {
            let line_no = fields.position().map_or(0, |p| p.line() as usize);

            if blank.is_blank(&fields) {
                tracing::trace!("Skipping blank line {}", line_no);
                continue;
            }

            let record = split_record(&fields, self.num_features, line_no)?;

            if let Some(capacity) = self.capacity {
                if labels.len() >= capacity {
                    return Err(ConvertError::Capacity { line: line_no, capacity });
                }
            }

            features.push_row(&record.features);
            labels.push(dictionary.encode(&record.label));
        }

        tracing::debug!(
            "Parsed {} records with {} distinct labels from '{}'",
            labels.len(),
            dictionary.len(),
            self.path.display()
        );

        Ok(EncodedDataset {
            features,
            labels,
            classes: dictionary.into_names(),
        })
    }
}

impl DatasetSource for CsvDatasetLoader {
    fn load(&self) -> ConvertResult<EncodedDataset> {
        let file = File::open(&self.path).map_err(|e| ConvertError::io(&self.path, e))?;
        self.load_from_reader(file)
    }
}

/// Turn one non-blank csv record into a Record.
///
/// The record must hold exactly `num_features + 1` fields, already
/// trimmed by the reader. The last field is the label.
pub fn split_record(
    fields: &StringRecord,
    num_features: usize,
    line_no: usize,
) -> ConvertResult<Record> {
    let expected = num_features
        .checked_add(1)
        .ok_or(ConvertError::FeatureCount(num_features))?;

    if fields.len() != expected {
        return Err(ConvertError::FieldCount {
            line: line_no,
            expected,
            found: fields.len(),
        });
    }

    let features = fields
        .iter()
        .take(num_features)
        .enumerate()
        .map(|(column, text)| {
            text.parse::<f64>().map_err(|_| ConvertError::Parse {
                line: line_no,
                column: column + 1,
                text: text.to_string(),
            })
        })
        .collect::<ConvertResult<Vec<f64>>>()?;

    Ok(Record::new(features, &fields[num_features]))
}
