use crate::index::InvertedIndex;
use crate::query::Query;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
}

/// Score every document matching a plus word by summed TF-IDF, then drop any
/// document that contains a minus word. Results come back in ascending id order.
pub fn rank(query: &Query, index: &InvertedIndex) -> Vec<Document> {
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();
    for term in &query.plus {
        let (Some(postings), Some(idf)) = (index.postings_for(term), index.idf(term)) else { continue };
        for (&doc_id, &tf) in postings {
            *scores.entry(doc_id).or_insert(0.0) += idf * tf;
        }
    }
    for term in &query.minus {
        if let Some(postings) = index.postings_for(term) {
            for doc_id in postings.keys() {
                scores.remove(doc_id);
            }
        }
    }
    scores.into_iter().map(|(id, relevance)| Document { id, relevance }).collect()
}

/// Sort by descending relevance, ascending id on ties, and keep the first `k`.
pub fn top_k(mut docs: Vec<Document>, k: usize) -> Vec<Document> {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then_with(|| a.id.cmp(&b.id)));
    docs.truncate(k);
    docs
}
