//! Convoy grouping
//!
//! Partitions a bead snapshot by parent convoy, preserving first-seen
//! order of distinct keys and input order within each group. Beads with no
//! parent land in a trailing ungrouped bucket. This is a stable partition,
//! not a sort: regrouping the flattened output reproduces the same groups.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Bead;

/// Beads sharing one convoy parent (or no parent)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvoyGroup {
    /// None for the ungrouped bucket, always listed last
    pub convoy_id: Option<String>,
    pub beads: Vec<Bead>,
}

/// Partition beads by their parent convoy reference
pub fn group_by_convoy(beads: &[Bead]) -> Vec<ConvoyGroup> {
    let mut groups: Vec<ConvoyGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ungrouped: Vec<Bead> = Vec::new();

    for bead in beads {
        match bead.convoy_key() {
            Some(convoy) => {
                let idx = *index.entry(convoy.to_string()).or_insert_with(|| {
                    groups.push(ConvoyGroup {
                        convoy_id: Some(convoy.to_string()),
                        beads: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[idx].beads.push(bead.clone());
            }
            None => ungrouped.push(bead.clone()),
        }
    }

    if !ungrouped.is_empty() {
        groups.push(ConvoyGroup {
            convoy_id: None,
            beads: ungrouped,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bead(id: &str, parent: Option<&str>) -> Bead {
        Bead {
            id: id.to_string(),
            kind: "task".to_string(),
            status: "open".to_string(),
            parent: parent.map(str::to_string),
            depends_on: Default::default(),
            updated_at: Utc::now(),
        }
    }

    fn ids(group: &ConvoyGroup) -> Vec<&str> {
        group.beads.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_groups_keyed_by_parent_ungrouped_last() {
        let beads = vec![
            bead("a", None),
            bead("b", Some("c1")),
            bead("c", Some("c1")),
        ];

        let groups = group_by_convoy(&beads);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].convoy_id.as_deref(), Some("c1"));
        assert_eq!(ids(&groups[0]), ["b", "c"]);
        assert_eq!(groups[1].convoy_id, None);
        assert_eq!(ids(&groups[1]), ["a"]);
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let beads = vec![
            bead("1", Some("c2")),
            bead("2", Some("c1")),
            bead("3", Some("c2")),
            bead("4", Some("c3")),
        ];

        let groups = group_by_convoy(&beads);
        let keys: Vec<_> = groups.iter().map(|g| g.convoy_id.as_deref()).collect();
        assert_eq!(keys, [Some("c2"), Some("c1"), Some("c3")]);
        assert_eq!(ids(&groups[0]), ["1", "3"]);
    }

    #[test]
    fn test_no_ungrouped_bucket_when_all_parented() {
        let beads = vec![bead("x", Some("c1"))];
        let groups = group_by_convoy(&beads);
        assert_eq!(groups.len(), 1);
        assert!(groups.iter().all(|g| g.convoy_id.is_some()));
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_convoy(&[]).is_empty());
    }

    #[test]
    fn test_regrouping_flattened_output_is_identity() {
        let beads = vec![
            bead("a", None),
            bead("b", Some("c1")),
            bead("c", Some("c2")),
            bead("d", Some("c1")),
            bead("e", None),
        ];

        let groups = group_by_convoy(&beads);
        let flattened: Vec<Bead> = groups.iter().flat_map(|g| g.beads.clone()).collect();
        let regrouped = group_by_convoy(&flattened);

        assert_eq!(groups.len(), regrouped.len());
        for (first, second) in groups.iter().zip(&regrouped) {
            assert_eq!(first.convoy_id, second.convoy_id);
            assert_eq!(ids(first), ids(second));
        }
    }
}
