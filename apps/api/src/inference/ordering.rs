//! Tag Orderer — fixed presentation order for validated results.

use crate::inference::parser::InferredResult;

/// Stable sort by each tag's position in `order`. Tags not in `order` go last,
/// keeping their relative input order. Evidence text is ignored.
pub fn order_results(mut results: Vec<InferredResult>, order: &[&str]) -> Vec<InferredResult> {
    results.sort_by_key(|result| {
        order
            .iter()
            .position(|tag| *tag == result.tag)
            .unwrap_or(order.len())
    });
    results
}
