use thiserror::Error;

/// Inconsistencies in the footer link table.
///
/// Rendering never fails on these; they are reported when the server starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FooterConfigError {
    #[error("Footer section {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Duplicate footer section title: {0}")]
    DuplicateTitle(String),

    #[error("Footer section {section} has a link with an empty label")]
    EmptyLabel { section: String },

    #[error("Duplicate label {label} in footer section {section}")]
    DuplicateLabel { section: String, label: String },

    #[error("Link {label} in footer section {section} has an empty href")]
    EmptyHref { section: String, label: String },
}
