use crate::engine::ranking::{top_n, SortOrder};
use crate::models::Area;

/// Outcome of a suggestion request that completed successfully.
///
/// An empty candidate pool is a real answer ("no suitable areas found") and
/// must render differently from a transport failure, which stays an `Err` at
/// the boundary and never reaches this type.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Suggestions(Vec<Area>),
    NoMatch,
}

/// Order the service's candidate pool most-affordable-first. Same stable
/// tie-break rule as the top/least lists.
pub fn rank_suggestions(suggested: Vec<Area>) -> SuggestionOutcome {
    if suggested.is_empty() {
        return SuggestionOutcome::NoMatch;
    }
    let n = suggested.len();
    SuggestionOutcome::Suggestions(top_n(&suggested, n, SortOrder::Descending))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testutil::area;

    #[test]
    fn empty_pool_is_no_match_not_an_error() {
        assert_eq!(rank_suggestions(Vec::new()), SuggestionOutcome::NoMatch);
    }

    #[test]
    fn suggestions_come_back_score_descending() {
        let pool = vec![
            area("Marina", 45_000.0, 0.5, 25.265, 55.305),
            area("Deira", 40_000.0, 0.8, 25.27, 55.31),
        ];
        match rank_suggestions(pool) {
            SuggestionOutcome::Suggestions(ranked) => {
                let names: Vec<_> = ranked.iter().map(|a| a.name.as_str()).collect();
                assert_eq!(names, ["Deira", "Marina"]);
            }
            SuggestionOutcome::NoMatch => panic!("expected suggestions"),
        }
    }

    #[test]
    fn tied_scores_keep_service_order() {
        let pool = vec![
            area("First", 40_000.0, 0.9, 25.27, 55.31),
            area("Second", 45_000.0, 0.9, 25.265, 55.305),
        ];
        match rank_suggestions(pool) {
            SuggestionOutcome::Suggestions(ranked) => {
                assert_eq!(ranked[0].name, "First");
                assert_eq!(ranked[1].name, "Second");
            }
            SuggestionOutcome::NoMatch => panic!("expected suggestions"),
        }
    }
}
