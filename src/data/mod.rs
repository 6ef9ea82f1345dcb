/// Data layer: the parsed sample table and the CSV loader.
///
/// Architecture:
/// ```text
///   run1.CSV
///      │
///      ▼
///  ┌────────┐
///  │ loader │  parse CSV, drop column 0, coerce cells → i16
///  └────────┘
///      │
///      ▼
///  ┌─────────────┐
///  │ SampleTable │  flat row-major Vec<i16>
///  └─────────────┘
/// ```
pub mod loader;
pub mod model;
