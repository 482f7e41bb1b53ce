use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::classify::ArchiveEntry;

/// Key shared by every member of a retention group.
///
/// Package archives group by (parent, prefix); source archives add their
/// extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub parent: PathBuf,
    pub prefix: String,
    pub extension: Option<String>,
}

impl GroupKey {
    pub fn of(entry: &ArchiveEntry) -> Self {
        Self {
            parent: entry.parent.clone(),
            prefix: entry.prefix.clone(),
            extension: entry.extension.clone(),
        }
    }
}

/// Archive entries bucketed by [`GroupKey`], in discovery order per bucket.
#[derive(Debug, Default)]
pub struct RetentionTable {
    groups: BTreeMap<GroupKey, Vec<ArchiveEntry>>,
}

impl RetentionTable {
    pub fn insert(&mut self, entry: ArchiveEntry) {
        self.groups.entry(GroupKey::of(&entry)).or_default().push(entry);
    }

    /// Every entry beyond the `keep` newest of each group, group by group.
    pub fn select_for_removal(&self, keep: usize) -> Vec<&ArchiveEntry> {
        self.groups
            .values()
            .flat_map(|members| select_for_removal(members, keep))
            .collect()
    }
}

/// Select the members of one group that exceed the retention count.
///
/// Members are ranked by [`natural_cmp`] on their file names, largest first;
/// the first `keep` survive. The sort is stable, so identical names keep
/// their discovery order.
pub fn select_for_removal(group: &[ArchiveEntry], keep: usize) -> Vec<&ArchiveEntry> {
    if group.len() <= keep {
        return Vec::new();
    }

    let mut ranked: Vec<&ArchiveEntry> = group.iter().collect();
    ranked.sort_by(|a, b| natural_cmp(&b.file_name, &a.file_name));
    ranked.split_off(keep)
}

/// Compare two strings treating embedded digit runs as numbers.
///
/// Rules: digit runs compare by value with leading zeros ignored, and on
/// equal value the run with fewer leading zeros is smaller; a digit sorts
/// before any other byte; other bytes compare bytewise; when one string is a
/// prefix of the other the shorter one is smaller.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (ca, cb) = (a[i], b[j]);
        match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                if ca != cb {
                    return ca.cmp(&cb);
                }
                i += 1;
                j += 1;
            }
            (true, true) => {
                let zeros_a = skip_while(a, i, |c| c == b'0');
                let zeros_b = skip_while(b, j, |c| c == b'0');
                let end_a = skip_while(a, zeros_a, |c| c.is_ascii_digit());
                let end_b = skip_while(b, zeros_b, |c| c.is_ascii_digit());

                let ordering = (end_a - zeros_a)
                    .cmp(&(end_b - zeros_b))
                    .then_with(|| a[zeros_a..end_a].cmp(&b[zeros_b..end_b]))
                    .then_with(|| (zeros_a - i).cmp(&(zeros_b - j)));
                if ordering != Ordering::Equal {
                    return ordering;
                }
                i = end_a;
                j = end_b;
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn skip_while(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(bytes.len(), |offset| start + offset)
}
