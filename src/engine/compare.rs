use crate::models::Area;
use serde::Serialize;

/// Area × profession score matrix, assembled per invocation and discarded
/// after rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub professions: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub area: String,
    /// One entry per profession, in `professions` order; `None` where that
    /// profession's filtered set lacks the area.
    pub scores: Vec<Option<f64>>,
}

impl ComparisonResult {
    /// True when no professions were selected; renders as "no table".
    pub fn is_empty(&self) -> bool {
        self.professions.is_empty()
    }
}

/// Assemble the matrix from per-profession filtered results. Row labels are
/// the union of area names across all professions, in first-seen order.
pub fn build_comparison(per_profession: &[(String, Vec<Area>)]) -> ComparisonResult {
    let mut professions = Vec::with_capacity(per_profession.len());
    let mut row_labels: Vec<String> = Vec::new();
    for (profession, areas) in per_profession {
        professions.push(profession.clone());
        for area in areas {
            if !row_labels.iter().any(|label| label == &area.name) {
                row_labels.push(area.name.clone());
            }
        }
    }
    let rows = row_labels
        .into_iter()
        .map(|label| {
            let scores = per_profession
                .iter()
                .map(|(_, areas)| {
                    areas
                        .iter()
                        .find(|area| area.name == label)
                        .map(|area| area.score)
                })
                .collect();
            ComparisonRow {
                area: label,
                scores,
            }
        })
        .collect();
    ComparisonResult { professions, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testutil::area;

    #[test]
    fn no_professions_means_an_empty_result() {
        let result = build_comparison(&[]);
        assert!(result.is_empty());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn rows_are_the_union_of_names_in_first_seen_order() {
        let per_profession = vec![
            (
                "Teacher".to_string(),
                vec![
                    area("Deira", 40_000.0, 0.8, 25.27, 55.31),
                    area("Marina", 45_000.0, 0.5, 25.265, 55.305),
                ],
            ),
            (
                "Engineer".to_string(),
                vec![
                    area("Marina", 45_000.0, 0.9, 25.265, 55.305),
                    area("Jumeirah", 90_000.0, 0.4, 25.27, 55.31),
                ],
            ),
        ];
        let result = build_comparison(&per_profession);
        let labels: Vec<_> = result.rows.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(labels, ["Deira", "Marina", "Jumeirah"]);
    }

    #[test]
    fn missing_combinations_are_marked_not_dropped() {
        let per_profession = vec![
            (
                "Teacher".to_string(),
                vec![area("Deira", 40_000.0, 0.8, 25.27, 55.31)],
            ),
            (
                "Engineer".to_string(),
                vec![area("Marina", 45_000.0, 0.9, 25.265, 55.305)],
            ),
        ];
        let result = build_comparison(&per_profession);
        assert_eq!(result.rows.len(), 2);

        let deira = &result.rows[0];
        assert_eq!(deira.scores, vec![Some(0.8), None]);
        let marina = &result.rows[1];
        assert_eq!(marina.scores, vec![None, Some(0.9)]);
    }

    #[test]
    fn a_profession_with_no_areas_still_gets_a_column() {
        let per_profession = vec![
            (
                "Teacher".to_string(),
                vec![area("Deira", 40_000.0, 0.8, 25.27, 55.31)],
            ),
            ("Nurse".to_string(), Vec::new()),
        ];
        let result = build_comparison(&per_profession);
        assert_eq!(result.professions, ["Teacher", "Nurse"]);
        assert_eq!(result.rows[0].scores, vec![Some(0.8), None]);
    }
}
