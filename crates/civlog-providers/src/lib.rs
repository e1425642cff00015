// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Export formats
pub mod delimited;
pub mod markup;

// Field-level conversions
pub mod extract;
pub mod timecode;

// Source decoding and row filtering
pub mod decode;
pub mod filter;

// Positional row -> named row -> canonical record
pub mod normalize;
pub mod row;

// Whole-file entry point
pub mod loader;

// Format registry
pub mod registry;

// Traits
pub use traits::{ExportParser, ProbeResult};

// Field conversions
pub use extract::extract_crew_id;
pub use timecode::decode_time_code;

// Normalization
pub use normalize::normalize_row;
pub use row::SourceRow;

// Loader
pub use loader::{
    LoadedExport, RejectedRow, load_export, load_export_file, load_export_file_with,
    load_export_with,
};

// Registry
pub use registry::{create_all_parsers, detect_parser_from_path};

// Error types
pub use error::{Error, Result};
