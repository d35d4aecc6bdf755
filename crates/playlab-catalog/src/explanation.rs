use serde::{Deserialize, Serialize};

/// One highlighted property of the demonstrated library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub description: String,
}

/// A labelled source snippet rendered on the lab's code tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    /// Short label, e.g. `"basic"` or `"store"`.
    pub label: String,
    /// The snippet itself.
    pub source: String,
}

/// Educational content for one lab.
///
/// A fixed schema: every lab's notes carry the same record shape rather than
/// a loosely-typed content mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub subtitle: String,
    /// A few sentences on what the library is and when it fits.
    pub overview: String,
    /// Highlighted properties, in display order.
    pub key_points: Vec<KeyPoint>,
    /// Source snippets for the code tab.
    pub code_examples: Vec<CodeExample>,
    /// Arguments for the library.
    pub pros: Vec<String>,
    /// Arguments against it.
    pub cons: Vec<String>,
    /// Typical situations it is the right tool for.
    pub use_cases: Vec<String>,
}
