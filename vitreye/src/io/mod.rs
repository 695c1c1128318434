/// Conversion of internal representations to external ones
pub mod export;

/// External (serializable) representations of items and layouts
pub mod ext_repr;

/// Conversion of external representations to internal ones
pub mod import;

/// Rendering of layouts to SVG documents
pub mod svg;
