use crate::error::{GenError, Result};
use mailfixture_core::rules::ClusterPolicy;
use mailfixture_core::{Identity, RawRecord};
use rand::Rng;
use std::iter;
use tracing::debug;

/// Rolls once per record; a hit remembers that record's sender between
/// `min_copies` and `max_copies` times.
pub fn select_identities<R: Rng + ?Sized>(
    records: &[RawRecord],
    policy: &ClusterPolicy,
    rng: &mut R,
) -> Result<Vec<Identity>> {
    policy.validate().map_err(GenError::Policy)?;

    let mut identities = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if !rng.gen_bool(policy.probability) {
            continue;
        }
        let copies = rng.gen_range(policy.min_copies..=policy.max_copies);
        let identity = Identity::from_record(record)
            .map_err(|source| GenError::InvalidRecord { index, source })?;
        debug!(index, copies, email = %identity.email, "cluster seeded");
        identities.extend(iter::repeat(identity).take(copies as usize));
    }
    Ok(identities)
}

/// Pairs the i-th record with the i-th identity. Pairing stops at the
/// shorter list, so surplus identities never produce a record.
pub fn clustered_records(records: &[RawRecord], identities: &[Identity]) -> Vec<RawRecord> {
    records
        .iter()
        .zip(identities)
        .map(|(record, identity)| identity.apply_to(record))
        .collect()
}
