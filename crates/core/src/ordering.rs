//! Listing order for resource collections.

use crate::store::Record;

/// Sort records newest first.
///
/// The sort is stable: records sharing a `createdAt` keep their insertion order,
/// which matters because timestamps only have millisecond granularity.
pub fn order_for_listing<T: Record>(mut records: Vec<T>) -> Vec<T> {
    records.sort_by(|a, b| b.created_at().cmp(a.created_at()));
    records
}
