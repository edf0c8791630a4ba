use crate::candidate::Candidate;

/// Case-insensitive substring filter over candidate display names.
///
/// The result preserves the input order; callers rely on a stable list so
/// the highlighted row does not jump while the user types.
pub fn filter_candidates(query: &str, candidates: &[Candidate]) -> Vec<Candidate> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.display_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn person(id: u64, first: &str, last: &str) -> Candidate {
        Candidate {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    fn directory() -> Vec<Candidate> {
        vec![
            person(1, "Ada", "Lovelace"),
            person(2, "Grace", "Hopper"),
            person(3, "Alan", "Turing"),
            person(4, "Radia", "Perlman"),
        ]
    }

    #[test]
    fn matches_are_case_insensitive() {
        let matches = filter_candidates("ADA", &directory());
        assert_eq!(
            matches.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 4]
        );
    }

    #[test]
    fn matches_anywhere_in_display_name() {
        let matches = filter_candidates("lov", &directory());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 1);
    }

    #[test]
    fn matches_across_first_last_boundary() {
        let matches = filter_candidates("ace hop", &directory());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
    }

    #[test]
    fn empty_query_matches_everything_in_input_order() {
        let matches = filter_candidates("", &directory());
        assert_eq!(
            matches.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        assert_eq!(filter_candidates("zzz", &directory()), Vec::new());
    }
}
