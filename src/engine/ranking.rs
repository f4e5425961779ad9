use crate::models::Area;

/// How many areas the "most/least affordable" lists show by default.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest score first ("most affordable").
    Descending,
    /// Lowest score first ("least affordable").
    Ascending,
}

/// The first `n` areas after a stable sort of a copy by score. Ties keep
/// their input order, so repeated calls on identical input are
/// deterministic. The input is never mutated.
pub fn top_n(areas: &[Area], n: usize, order: SortOrder) -> Vec<Area> {
    let mut ranked = areas.to_vec();
    match order {
        SortOrder::Descending => ranked.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortOrder::Ascending => ranked.sort_by(|a, b| a.score.total_cmp(&b.score)),
    }
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testutil::area;

    fn names(areas: &[Area]) -> Vec<&str> {
        areas.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn descending_puts_the_highest_score_first() {
        let areas = vec![
            area("Marina", 45_000.0, 0.5, 25.265, 55.305),
            area("Deira", 40_000.0, 0.8, 25.27, 55.31),
            area("Jumeirah", 90_000.0, 0.3, 25.27, 55.31),
        ];
        let top = top_n(&areas, DEFAULT_TOP_N, SortOrder::Descending);
        assert_eq!(names(&top), ["Deira", "Marina", "Jumeirah"]);
    }

    #[test]
    fn ascending_puts_the_lowest_score_first() {
        let areas = vec![
            area("Marina", 45_000.0, 0.5, 25.265, 55.305),
            area("Deira", 40_000.0, 0.8, 25.27, 55.31),
        ];
        let least = top_n(&areas, 1, SortOrder::Ascending);
        assert_eq!(names(&least), ["Marina"]);
    }

    #[test]
    fn ties_keep_their_input_order() {
        let areas = vec![
            area("First", 40_000.0, 0.9, 25.27, 55.31),
            area("Second", 45_000.0, 0.9, 25.265, 55.305),
        ];
        let top = top_n(&areas, 1, SortOrder::Descending);
        assert_eq!(names(&top), ["First"]);
    }

    #[test]
    fn truncates_to_n_and_never_mutates_the_input() {
        let areas = vec![
            area("Marina", 45_000.0, 0.5, 25.265, 55.305),
            area("Deira", 40_000.0, 0.8, 25.27, 55.31),
            area("Jumeirah", 90_000.0, 0.3, 25.27, 55.31),
        ];
        let top = top_n(&areas, 2, SortOrder::Descending);
        assert_eq!(top.len(), 2);
        // input order untouched
        assert_eq!(names(&areas), ["Marina", "Deira", "Jumeirah"]);
    }

    #[test]
    fn n_larger_than_the_collection_returns_everything() {
        let areas = vec![area("Deira", 40_000.0, 0.8, 25.27, 55.31)];
        assert_eq!(top_n(&areas, 10, SortOrder::Descending).len(), 1);
    }
}
