//! Folding a log file into per-user net deltas.
//!
//! The fold is a commutative signed sum, so the resulting balances are
//! independent of line order.

use std::collections::BTreeMap;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use revstream_core::{Event, UserId};

/// Counters for one fold pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FoldStats {
    /// Valid events folded in.
    pub events: u64,
    /// Malformed lines logged and skipped.
    pub skipped: u64,
}

/// Fold every well-formed line of `reader` into per-user net deltas.
///
/// Malformed lines are logged and skipped; a bad line never aborts the fold.
/// A final unterminated line is treated as a complete line.
///
/// # Errors
///
/// Returns an error only if reading from `reader` itself fails.
pub async fn fold_reader<R>(reader: R) -> std::io::Result<(BTreeMap<UserId, i64>, FoldStats)>
where
    R: AsyncBufRead + Unpin,
{
    let mut deltas: BTreeMap<UserId, i64> = BTreeMap::new();
    let mut stats = FoldStats::default();

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        match Event::parse(&line) {
            Ok(event) => {
                *deltas.entry(event.user_id.clone()).or_insert(0) += event.signed_delta();
                stats.events += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, line = %line, "Skipping invalid event");
                stats.skipped += 1;
            }
        }
    }

    Ok((deltas, stats))
}

/// Fold the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn fold_file(path: &Path) -> std::io::Result<(BTreeMap<UserId, i64>, FoldStats)> {
    let file = File::open(path).await?;
    fold_reader(BufReader::new(file)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(s: &str) -> UserId {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn folds_signed_sums_per_user() {
        let log = b"{\"userId\":\"u1\",\"name\":\"add_revenue\",\"value\":100}\n\
                    {\"userId\":\"u1\",\"name\":\"subtract_revenue\",\"value\":30}\n\
                    {bad json\n\
                    {\"userId\":\"u2\",\"name\":\"add_revenue\",\"value\":5}\n";

        let (deltas, stats) = fold_reader(&log[..]).await.unwrap();

        assert_eq!(deltas.get(&uid("u1")), Some(&70));
        assert_eq!(deltas.get(&uid("u2")), Some(&5));
        assert_eq!(stats.events, 3);
        assert_eq!(stats.skipped, 1);
    }

    #[tokio::test]
    async fn fold_is_order_independent() {
        let forward = b"{\"userId\":\"u1\",\"name\":\"add_revenue\",\"value\":10}\n\
                       {\"userId\":\"u1\",\"name\":\"subtract_revenue\",\"value\":4}\n\
                       {\"userId\":\"u1\",\"name\":\"add_revenue\",\"value\":1}\n";
        let reversed = b"{\"userId\":\"u1\",\"name\":\"add_revenue\",\"value\":1}\n\
                        {\"userId\":\"u1\",\"name\":\"subtract_revenue\",\"value\":4}\n\
                        {\"userId\":\"u1\",\"name\":\"add_revenue\",\"value\":10}\n";

        let (a, _) = fold_reader(&forward[..]).await.unwrap();
        let (b, _) = fold_reader(&reversed[..]).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.get(&uid("u1")), Some(&7));
    }

    #[tokio::test]
    async fn final_unterminated_line_counts() {
        let log = b"{\"userId\":\"u1\",\"name\":\"add_revenue\",\"value\":3}";
        let (deltas, stats) = fold_reader(&log[..]).await.unwrap();
        assert_eq!(deltas.get(&uid("u1")), Some(&3));
        assert_eq!(stats.events, 1);
    }

    #[tokio::test]
    async fn empty_input_folds_to_nothing() {
        let (deltas, stats) = fold_reader(&b""[..]).await.unwrap();
        assert!(deltas.is_empty());
        assert_eq!(stats, FoldStats::default());
    }
}
