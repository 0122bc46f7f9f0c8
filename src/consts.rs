/// Text rendered for columns that were never set.
pub const DEFAULT_PLACEHOLDER: &str = "NA";
