use crate::core::{BatchPolicy, BatchReport, BatchWriter, WriteItem, DYNAMODB_BATCH_LIMIT};
use crate::utils::error::Result;

/// Splits `items` into ordered groups of at most `size`, clamped to DynamoDB's batch limit.
pub fn chunk_items<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let size = size.clamp(1, DYNAMODB_BATCH_LIMIT);
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));
    let mut current = Vec::with_capacity(size);

    for item in items {
        current.push(item);
        if current.len() == size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Writes `items` to `table` one chunk at a time, pausing between chunks.
///
/// Items the service hands back as unprocessed get one more pass after the last chunk;
/// anything still left over is returned in the report.
pub async fn write_in_batches<W>(
    writer: &W,
    table: &str,
    items: Vec<WriteItem>,
    policy: &BatchPolicy,
) -> Result<BatchReport>
where
    W: BatchWriter + ?Sized,
{
    let total = items.len();
    let mut report = BatchReport::default();

    // First pass over every chunk
    let leftover = send_chunks(writer, table, items, policy, &mut report).await?;
    let unprocessed = if leftover.is_empty() {
        leftover
    } else {
        tracing::warn!(table, count = leftover.len(), "retrying unprocessed items");
        tokio::time::sleep(policy.pause).await;
        send_chunks(writer, table, leftover, policy, &mut report).await?
    };

    report.written = total - unprocessed.len();
    report.unprocessed = unprocessed;
    tracing::info!(
        table,
        chunks = report.chunks,
        written = report.written,
        unprocessed = report.unprocessed.len(),
        "batch write finished"
    );
    Ok(report)
}

async fn send_chunks<W>(
    writer: &W,
    table: &str,
    items: Vec<WriteItem>,
    policy: &BatchPolicy,
    report: &mut BatchReport,
) -> Result<Vec<WriteItem>>
where
    W: BatchWriter + ?Sized,
{
    let chunks = chunk_items(items, policy.chunk_size);
    let last = chunks.len().saturating_sub(1);
    let mut unprocessed = Vec::new();

    for (index, chunk) in chunks.into_iter().enumerate() {
        tracing::debug!(table, chunk = index + 1, size = chunk.len(), "writing chunk");
        unprocessed.extend(writer.write_batch(table, chunk).await?);
        report.chunks += 1;
        if index < last {
            tokio::time::sleep(policy.pause).await;
        }
    }
    Ok(unprocessed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_items_preserves_order() {
        let items: Vec<u32> = (0..60).collect();
        let chunks = chunk_items(items.clone(), 25);
        let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![25, 25, 10]);
        assert_eq!(chunks.concat(), items);
    }

    #[test]
    fn test_chunk_size_is_clamped() {
        let chunks = chunk_items((0..30).collect::<Vec<u32>>(), 100);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), DYNAMODB_BATCH_LIMIT);

        let chunks = chunk_items(vec![1, 2, 3], 0);
        assert_eq!(chunks, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_empty_input_has_no_chunks() {
        assert!(chunk_items(Vec::<u32>::new(), 25).is_empty());
    }
}
