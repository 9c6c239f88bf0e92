use super::types::{LayoutOptions, RowKind};

/// Un nom contenant `:` et `-` est une plage horaire, pas une case à remplir.
pub fn is_time_range(name: &str) -> bool {
    name.contains(':') && name.contains('-')
}

pub fn classify_role(name: &str, opts: &LayoutOptions) -> RowKind {
    if is_time_range(name) {
        RowKind::Annotation
    } else if !opts.standalone_marker.is_empty() && name.contains(opts.standalone_marker.as_str()) {
        RowKind::Standalone
    } else {
        RowKind::Crew
    }
}
