//! The contract every top-level visualizable structure satisfies.

/// The two-part JSON payload a structure produces for submission:
/// node data and link data, each already serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Representation {
    nodes: String,
    links: String,
}

impl Representation {
    /// Creates a representation from serialized node and link data.
    pub fn new(nodes: impl Into<String>, links: impl Into<String>) -> Self {
        Self {
            nodes: nodes.into(),
            links: links.into(),
        }
    }

    /// Serialized node data.
    pub fn nodes(&self) -> &str {
        &self.nodes
    }

    /// Serialized link data.
    pub fn links(&self) -> &str {
        &self.links
    }
}

/// Capability required to ask a structure for its internal
/// representation.
///
/// Only the submission layer in this crate can mint one, so general
/// client code cannot trigger serialization directly even though
/// [`DataStructure::representation`] is nominally public. Implementers
/// of the trait receive the token and ignore it.
#[derive(Debug)]
pub struct SubmissionToken(());

impl SubmissionToken {
    pub(crate) fn new() -> Self {
        SubmissionToken(())
    }
}

/// A structure that can be submitted for visualization.
///
/// Implemented by [`SymbolCollection`](crate::SymbolCollection) in this
/// crate; external crates can implement it for their own structures.
pub trait DataStructure: std::fmt::Debug {
    /// Fixed tag naming the structure kind. Must not vary between calls
    /// on the same concrete type.
    fn dtype(&self) -> &'static str;

    /// Total number of visual elements in this structure, counted
    /// across all nesting. The submission layer checks this against
    /// [`MAX_ELEMENTS_ALLOWED`](crate::MAX_ELEMENTS_ALLOWED).
    fn element_count(&self) -> usize;

    /// Builds the (nodes, links) JSON pair consumed by the submission
    /// layer. Computed fresh on every call; nothing is cached.
    fn representation(&self, token: &SubmissionToken) -> Representation;

    /// Consumes the structure, releasing every substructure it owns.
    ///
    /// Ownership makes a second call, or a call on a structure someone
    /// else still owns, a compile error rather than undefined behavior.
    /// The default body is empty: dropping the box releases the whole
    /// owned tree.
    fn cleanup(self: Box<Self>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe;

    impl DataStructure for Probe {
        fn dtype(&self) -> &'static str {
            "probe"
        }

        fn element_count(&self) -> usize {
            0
        }

        fn representation(&self, _token: &SubmissionToken) -> Representation {
            Representation::new("[]", "[]")
        }
    }

    #[test]
    fn cleanup_consumes_the_structure() {
        let probe: Box<dyn DataStructure> = Box::new(Probe);
        probe.cleanup();
        // `probe` is moved; a second cleanup would not compile.
    }

    #[test]
    fn representation_keeps_both_parts() {
        let repr = Representation::new("[1]", "[]");
        assert_eq!(repr.nodes(), "[1]");
        assert_eq!(repr.links(), "[]");
    }
}
