use std::cmp::Ordering;
use std::time::Instant;

use perceptual::Fingerprint;
use rayon::prelude::*;
use tracing::{info, warn, Level};

use crate::compare::compare;
use crate::types::{CorpusEntry, CorpusHit, MatchConfig, MatchError};


/// Compare `candidate` against every corpus entry and return the hits sorted
/// most similar first (lowest score, then lowest distance, then id),
/// truncated to `cfg.max_results`.
///
/// A single incomparable entry fails the whole call; entries are never
/// skipped.
pub fn rank_against(
    candidate: &Fingerprint,
    corpus: &[CorpusEntry],
    cfg: &MatchConfig,
) -> Result<Vec<CorpusHit>, MatchError> {
    cfg.validate()?;
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "matcher.rank_against",
        kind = %candidate.kind(),
        corpus_size = corpus.len(),
        parallel = cfg.use_parallel
    );
    let _guard = span.enter();

    let mut hits = match score_all(candidate, corpus, cfg.use_parallel) {
        Ok(hits) => hits,
        Err(err) => {
            warn!(error = %err, elapsed_micros = start.elapsed().as_micros(), "rank_failure");
            return Err(err);
        }
    };
    hits.sort_by(by_similarity);
    hits.truncate(cfg.max_results);

    info!(
        hits = hits.len(),
        best_score = ?hits.first().map(|h| h.score.as_f64()),
        elapsed_micros = start.elapsed().as_micros(),
        "rank_success"
    );
    Ok(hits)
}

/// The single most similar corpus entry, or `None` for an empty corpus.
pub fn closest(
    candidate: &Fingerprint,
    corpus: &[CorpusEntry],
) -> Result<Option<CorpusHit>, MatchError> {
    let hits = score_all(candidate, corpus, false)?;
    Ok(hits.into_iter().min_by(by_similarity))
}

fn score_all(
    candidate: &Fingerprint,
    corpus: &[CorpusEntry],
    parallel: bool,
) -> Result<Vec<CorpusHit>, MatchError> {
    if parallel {
        corpus
            .par_iter()
            .map(|entry| score_entry(candidate, entry))
            .collect()
    } else {
        corpus
            .iter()
            .map(|entry| score_entry(candidate, entry))
            .collect()
    }
}

fn score_entry(candidate: &Fingerprint, entry: &CorpusEntry) -> Result<CorpusHit, MatchError> {
    let comparison = compare(candidate, &entry.fingerprint)?;
    Ok(CorpusHit {
        id: entry.id.clone(),
        distance: comparison.distance,
        score: comparison.score,
    })
}

fn by_similarity(a: &CorpusHit, b: &CorpusHit) -> Ordering {
    a.score
        .cmp(&b.score)
        .then(a.distance.value.cmp(&b.distance.value))
        .then_with(|| a.id.cmp(&b.id))
}
