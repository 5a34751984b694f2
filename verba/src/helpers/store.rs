use std::sync::Arc;
use tokio::sync::RwLock;
use verba_error::Error;
use verba_stats::collector::WordsStatistics;

/// Records a word into the shared collector.
///
/// All mutations go through the write half of the lock, so concurrent
/// callers are serialized against the single collector instance.
pub async fn add(
    collector: Arc<RwLock<WordsStatistics>>,
    word: Option<&str>,
) -> Result<(), Error> {
    collector.write().await.add_word(word)
}

/// Ranks the collector contents, trimming the reply to `limit` entries.
///
/// The full ranking is always computed first; `limit` is 0 for everything.
pub async fn snapshot(
    collector: Arc<RwLock<WordsStatistics>>,
    limit: usize,
) -> Vec<(usize, String)> {
    let mut ranking = collector.read().await.statistics();

    if limit > 0 {
        ranking.truncate(limit);
    }

    ranking
}
