use super::component::ComponentRecord;

/// Everything the analysis needs from one Figma file, fetched once per run
#[derive(Debug, Clone, PartialEq)]
pub struct LibrarySnapshot {
    pub file_name: String,
    pub is_library_file: bool,
    pub records: Vec<ComponentRecord>,
}

impl LibrarySnapshot {
    pub fn new(file_name: String, is_library_file: bool, records: Vec<ComponentRecord>) -> Self {
        Self {
            file_name,
            is_library_file,
            records,
        }
    }

    /// Applies the library-file policy to the snapshot and every record.
    ///
    /// Used when the caller knows the file is a published library even though
    /// the publish metadata was unavailable (offline input, missing scope).
    pub fn into_library(mut self) -> Self {
        self.is_library_file = true;
        for record in &mut self.records {
            record.is_library_file = true;
        }
        self
    }
}
