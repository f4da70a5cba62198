//! Assembles submission documents and enforces the global element cap.

use log::{debug, info};
use serde_json::{Value, json};

use crate::{
    config::SubmissionConfig,
    error::EaselError,
    structure::{DataStructure, SubmissionToken},
};

/// Maximum number of visual elements allowed in a single submission.
///
/// The cap applies to the whole structure across all nesting, not to
/// any single container; oversized structures are rejected here before
/// any payload is built.
pub const MAX_ELEMENTS_ALLOWED: usize = 5000;

/// Builds the JSON document an external transport submits to the
/// visualization backend.
///
/// This is the only component that can invoke
/// [`DataStructure::representation`]; it holds the crate-private
/// [`SubmissionToken`] mint.
#[derive(Debug, Default)]
pub struct Submission {
    config: SubmissionConfig,
}

impl Submission {
    /// Creates a submission layer with the given metadata configuration.
    pub fn new(config: SubmissionConfig) -> Self {
        Self { config }
    }

    /// Assembles the submission payload for a structure.
    ///
    /// Checks the structure against [`MAX_ELEMENTS_ALLOWED`], asks it
    /// for its (nodes, links) representation, and wraps both in the
    /// document envelope together with the structure's type tag and the
    /// configured metadata. The payload is compact JSON with no
    /// whitespace.
    pub fn payload<S: DataStructure + ?Sized>(&self, structure: &S) -> Result<String, EaselError> {
        let count = structure.element_count();
        if count > MAX_ELEMENTS_ALLOWED {
            return Err(EaselError::TooManyElements {
                count,
                limit: MAX_ELEMENTS_ALLOWED,
            });
        }
        debug!("assembling {} payload with {count} elements", structure.dtype());

        let repr = structure.representation(&SubmissionToken::new());
        let nodes: Value = serde_json::from_str(repr.nodes())?;
        let links: Value = serde_json::from_str(repr.links())?;

        let document = json!({
            "visual": structure.dtype(),
            "title": self.config.title(),
            "description": self.config.description(),
            "nodes": nodes,
            "links": links,
        });
        let payload = document.to_string();
        info!(
            "assembled {} submission payload ({} bytes)",
            structure.dtype(),
            payload.len()
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use easel_core::symbol::Circle;

    use crate::SymbolCollection;

    use super::*;

    #[test]
    fn payload_wraps_nodes_and_links_in_the_envelope() {
        let mut collection = SymbolCollection::new();
        collection.add_symbol(Box::new(Circle::new(1, 2.0)));

        let submission = Submission::new(SubmissionConfig::new("demo", "a circle"));
        let payload = submission.payload(&collection).unwrap();

        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["visual"], "symbol_collection");
        assert_eq!(parsed["title"], "demo");
        assert_eq!(parsed["nodes"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["links"], json!([]));
    }

    #[test]
    fn payload_contains_no_whitespace() {
        let submission = Submission::default();
        let payload = submission.payload(&SymbolCollection::new()).unwrap();

        assert!(!payload.contains(' '));
        assert!(!payload.contains('\n'));
    }

    #[test]
    fn oversized_structures_are_rejected() {
        let mut collection = SymbolCollection::new();
        for id in 0..(MAX_ELEMENTS_ALLOWED as i32 + 1) {
            collection.add_symbol(Box::new(Circle::new(id, 1.0)));
        }

        let err = Submission::default().payload(&collection).unwrap_err();

        match err {
            EaselError::TooManyElements { count, limit } => {
                assert_eq!(count, MAX_ELEMENTS_ALLOWED + 1);
                assert_eq!(limit, MAX_ELEMENTS_ALLOWED);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cap_counts_elements_at_the_structure_level() {
        // Exactly at the cap is accepted; the cap is global, not
        // per-container.
        let mut collection = SymbolCollection::new();
        for id in 0..MAX_ELEMENTS_ALLOWED as i32 {
            collection.add_symbol(Box::new(Circle::new(id, 1.0)));
        }

        assert!(Submission::default().payload(&collection).is_ok());
    }
}
