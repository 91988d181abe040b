use crate::models::{MatchResult, Mismatch, Side, Transaction};

pub struct ReconcileOutcome {
    pub matches: Vec<MatchResult>,
    pub mismatches: Vec<Mismatch>,
}

/// Two-pass greedy matching between two ordered ledgers.
///
/// Pass 1 walks the reference ledger in input order and pairs each entry
/// with the first unconsumed other-side entry of exactly equal amount whose
/// date is within `date_tolerance_days`. Pass 2 reports every other-side
/// entry pass 1 left unconsumed, unless it still has an eligible counterpart
/// among the unmatched reference entries (suppressed, never a new pair).
///
/// Ties break to the earliest-appearing candidate, so results are
/// deterministic and depend on input ordering; that is a contract, not an
/// artifact. Greedy, not optimal assignment. O(n·m), which is fine for
/// monthly-statement-sized inputs.
pub fn reconcile(
    reference: &[Transaction],
    other: &[Transaction],
    date_tolerance_days: u32,
) -> ReconcileOutcome {
    let tolerance = i64::from(date_tolerance_days);
    let mut matches = Vec::new();
    let mut mismatches = Vec::new();

    // Consumption flags are indexed by original position and live only for
    // this call.
    let mut ref_consumed = vec![false; reference.len()];
    let mut other_consumed = vec![false; other.len()];

    for (ref_idx, ref_txn) in reference.iter().enumerate() {
        let candidate = other.iter().enumerate().find(|(other_idx, other_txn)| {
            !other_consumed[*other_idx] && is_match(ref_txn, other_txn, tolerance)
        });
        match candidate {
            Some((other_idx, other_txn)) => {
                ref_consumed[ref_idx] = true;
                other_consumed[other_idx] = true;
                matches.push(MatchResult {
                    reference: ref_txn.clone(),
                    other: other_txn.clone(),
                });
            }
            None => mismatches.push(Mismatch {
                transaction: ref_txn.clone(),
                side: Side::Reference,
            }),
        }
    }

    // Pass 2: a leftover other-side entry is only a mismatch if no unmatched
    // reference entry could still cover it. A hit claims the reference entry
    // and suppresses the report without recording a new pair. Pass 1's scan
    // already took every eligible counterpart, so this search stays empty;
    // it is kept because it is the defined contract and costs nothing.
    let mut claimed = vec![false; reference.len()];
    for (other_idx, other_txn) in other.iter().enumerate() {
        if other_consumed[other_idx] {
            continue;
        }
        let counterpart = reference.iter().enumerate().find(|(ref_idx, ref_txn)| {
            !ref_consumed[*ref_idx] && !claimed[*ref_idx] && is_match(ref_txn, other_txn, tolerance)
        });
        match counterpart {
            Some((ref_idx, _)) => claimed[ref_idx] = true,
            None => mismatches.push(Mismatch {
                transaction: other_txn.clone(),
                side: Side::Other,
            }),
        }
    }

    ReconcileOutcome {
        matches,
        mismatches,
    }
}

fn is_match(a: &Transaction, b: &Transaction, tolerance_days: i64) -> bool {
    a.amount == b.amount && (a.date - b.date).num_days().abs() <= tolerance_days
}
