//! # BPE Trainer

use dary_heap::OctonaryHeap;

use crate::errors::{BpeError, BpeResult};
use crate::training::byte_span_buf::ByteSpanBuf;
use crate::training::options::TrainerOptions;
use crate::training::pretoken_counter::PreTokenCounts;
use crate::types::{CommonHashMap, CommonHashSet, Pair, TokenId};
use crate::vocab::{MergeList, SpecialTokenMap, Vocabulary};

/// One entry on the trainer's candidate-merge heap.
///
/// `bytes_a`/`bytes_b` are snapshotted at push time: vocab entries are
/// immutable once allocated, so the tie-break comparison never needs to
/// borrow the vocabulary while the heap is being ordered.
#[derive(Debug, Clone, Eq, PartialEq)]
struct MergeJob {
    count: i64,
    pair: Pair,
    bytes_a: Vec<u8>,
    bytes_b: Vec<u8>,
}

impl Ord for MergeJob {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Max-heap: the greatest job pops first. Primary key is count;
        // among ties, the lexicographically larger byte-string pair wins,
        // not the ascending token-id order a plain `(a, b)` comparison
        // would give.
        self.count.cmp(&other.count).then_with(|| {
            (self.bytes_a.as_slice(), self.bytes_b.as_slice())
                .cmp(&(other.bytes_a.as_slice(), other.bytes_b.as_slice()))
        })
    }
}

impl PartialOrd for MergeJob {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The vocabulary, ordered merge list, and special-token map produced by a
/// training run.
#[derive(Debug, Clone)]
pub struct TrainResult {
    pub vocab: Vocabulary,
    pub merges: MergeList,
    pub special_token_map: SpecialTokenMap,
}

/// Learns an ordered merge list and vocabulary from a pre-token frequency
/// table.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    options: TrainerOptions,
}

impl BpeTrainer {
    pub fn new(options: TrainerOptions) -> Self {
        Self { options }
    }

    /// Train on a pre-tokenized frequency table.
    ///
    /// `counts` is consumed; the trainer's auxiliary indices are private to
    /// this call and discarded on return.
    pub fn train(&self, counts: &PreTokenCounts) -> BpeResult<TrainResult> {
        let specials = self.options.specials();
        let floor = 256 + specials.len();
        if self.options.vocab_size() < floor {
            return Err(BpeError::VocabSizeTooSmall {
                size: self.options.vocab_size(),
                floor,
                specials: specials.len(),
            });
        }
        let merges_to_learn = self.options.vocab_size() - floor;

        let special_token_map = SpecialTokenMap::from_literals(specials, 256)?;
        let mut vocab = Vocabulary::seeded(specials);
        let mut merges = MergeList::new();

        log::info!(
            "training: {} pre-token types, target {merges_to_learn} merges",
            counts.len()
        );

        let mut spans: Vec<ByteSpanBuf> = Vec::with_capacity(counts.len());
        let mut freqs: Vec<u64> = Vec::with_capacity(counts.len());
        for (word, freq) in counts.iter() {
            spans.push(ByteSpanBuf::from_bytes(word.as_bytes()));
            freqs.push(freq);
        }

        let mut pair_counts: CommonHashMap<Pair, i64> = CommonHashMap::default();
        let mut pair_to_tokens: CommonHashMap<Pair, CommonHashSet<usize>> =
            CommonHashMap::default();
        for (idx, span) in spans.iter().enumerate() {
            for pair in span.pairs() {
                *pair_counts.entry(pair).or_insert(0) += freqs[idx] as i64;
                pair_to_tokens.entry(pair).or_default().insert(idx);
            }
        }

        let mut heap: OctonaryHeap<MergeJob> = OctonaryHeap::new();
        for (&pair, &count) in pair_counts.iter() {
            if count > 0 {
                heap.push(Self::job_for(pair, count, &vocab));
            }
        }

        let mut learned = 0usize;
        let log_every = (merges_to_learn / 20).max(1);

        while learned < merges_to_learn {
            let job = match Self::pop_live(&mut heap, &pair_counts, &vocab) {
                Some(job) if job.count > 0 => job,
                _ => break,
            };

            let (a, b) = job.pair;
            let mut combined = job.bytes_a.clone();
            combined.extend_from_slice(&job.bytes_b);
            let c = vocab.push(combined);
            merges.insert((a, b), c);

            let affected: Vec<usize> = pair_to_tokens
                .remove(&(a, b))
                .map(|set| set.into_iter().collect())
                .unwrap_or_default();

            let mut touched: CommonHashSet<Pair> = CommonHashSet::default();

            for idx in affected {
                let freq = freqs[idx] as i64;
                let span = &mut spans[idx];
                let old_pairs: CommonHashSet<Pair> = span.pairs().collect();

                span.merge_pair_cb((a, b), c, |p, delta| {
                    touched.insert(p);
                    if delta == 0 {
                        return;
                    }
                    let entry = pair_counts.entry(p).or_insert(0);
                    *entry += delta * freq;
                    if *entry <= 0 {
                        pair_counts.remove(&p);
                    }
                });

                let new_pairs: CommonHashSet<Pair> = span.pairs().collect();
                for p in old_pairs.difference(&new_pairs) {
                    touched.insert(*p);
                    if let Some(set) = pair_to_tokens.get_mut(p) {
                        set.remove(&idx);
                        if set.is_empty() {
                            pair_to_tokens.remove(p);
                        }
                    }
                }
                for p in new_pairs.difference(&old_pairs) {
                    touched.insert(*p);
                    pair_to_tokens.entry(*p).or_default().insert(idx);
                }
            }

            for p in touched {
                if let Some(&count) = pair_counts.get(&p) {
                    if count > 0 {
                        heap.push(Self::job_for(p, count, &vocab));
                    }
                }
            }

            learned += 1;
            if learned % log_every == 0 {
                log::info!(
                    "training: {:.0}% ({learned}/{merges_to_learn} merges)",
                    100.0 * learned as f64 / merges_to_learn as f64
                );
            }
        }

        log::info!(
            "training complete: {learned} merges learned, vocab size {}",
            vocab.len()
        );

        Ok(TrainResult {
            vocab,
            merges,
            special_token_map,
        })
    }

    fn job_for(pair: Pair, count: i64, vocab: &Vocabulary) -> MergeJob {
        let bytes_a = vocab
            .get(pair.0)
            .expect("heap entries only reference live vocab ids")
            .to_vec();
        let bytes_b = vocab
            .get(pair.1)
            .expect("heap entries only reference live vocab ids")
            .to_vec();
        MergeJob {
            count,
            pair,
            bytes_a,
            bytes_b,
        }
    }

    /// Pop the highest-priority job whose cached count still matches the
    /// live `pair_counts` entry, refreshing and re-pushing stale entries
    /// along the way (lazy deletion).
    fn pop_live(
        heap: &mut OctonaryHeap<MergeJob>,
        pair_counts: &CommonHashMap<Pair, i64>,
        vocab: &Vocabulary,
    ) -> Option<MergeJob> {
        while let Some(job) = heap.pop() {
            let live = pair_counts.get(&job.pair).copied().unwrap_or(0);
            if live != job.count {
                if live > 0 {
                    heap.push(Self::job_for(job.pair, live, vocab));
                }
                continue;
            }
            if live <= 0 {
                continue;
            }
            return Some(job);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train_str(text: &str, vocab_size: usize) -> TrainResult {
        let splitter = crate::pretokenize::TextSplitter::new();
        let mut counts = PreTokenCounts::new();
        counts.add_text(&splitter, text).unwrap();
        let options = TrainerOptions::new(vocab_size);
        BpeTrainer::new(options).train(&counts).unwrap()
    }

    #[test]
    fn test_merge_job_heap_key_count_then_lexicographic_pair() {
        let lower = MergeJob {
            count: 5,
            pair: (0, 1),
            bytes_a: vec![b'a'],
            bytes_b: vec![b'a'],
        };
        let higher_count = MergeJob {
            count: 6,
            pair: (0, 1),
            bytes_a: vec![b'a'],
            bytes_b: vec![b'a'],
        };
        assert!(higher_count > lower);

        let tie_small_bytes = MergeJob {
            count: 5,
            pair: (0, 1),
            bytes_a: vec![b'a'],
            bytes_b: vec![b'a'],
        };
        let tie_large_bytes = MergeJob {
            count: 5,
            pair: (2, 3),
            bytes_a: vec![b'b'],
            bytes_b: vec![b'b'],
        };
        assert!(tie_large_bytes > tie_small_bytes);
    }

    #[test]
    fn test_trivial_merge() {
        let result = train_str("ab ab ab", 257);
        assert_eq!(result.merges.len(), 1);
        assert_eq!(result.merges.get((97, 98)), Some(256));
        assert_eq!(result.vocab.get(256), Some(b"ab".as_slice()));
    }

    #[test]
    fn test_vocab_size_floor_is_enforced() {
        let options = TrainerOptions::new(10).with_special_tokens(&["<|endoftext|>"]);
        let err = BpeTrainer::new(options)
            .train(&PreTokenCounts::new())
            .unwrap_err();
        assert!(matches!(err, BpeError::VocabSizeTooSmall { .. }));
    }

    #[test]
    fn test_merge_monotonicity() {
        let result = train_str("the quick brown fox the quick brown fox jumps", 270);
        for (i, (_, c)) in result.merges.iter_in_order().enumerate() {
            assert_eq!(c, 256 + i as TokenId);
        }
    }

    #[test]
    fn test_tie_break_prefers_lexicographically_larger_pair() {
        // "az" and "by" each occur twice: pair (a,z) and (b,y) tie on count.
        // vocab[b'b']=[98] > vocab[b'a']=[97], so (b,y) must win the tie.
        let result = train_str("az az by by", 257);
        assert_eq!(result.merges.len(), 1);
        assert_eq!(result.merges.get((b'b' as TokenId, b'y' as TokenId)), Some(256));
        assert_eq!(result.merges.get((b'a' as TokenId, b'z' as TokenId)), None);
    }
}
