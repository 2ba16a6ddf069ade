use alumni_directory::{
    derive_options, filter_roster, matches, AlumniDirectory, AlumniRecord, BuiltinRoster,
    FilterCriteria, RosterSource,
};
use anyhow::Result;

fn roster() -> Result<Vec<AlumniRecord>> {
    Ok(BuiltinRoster::new().load()?)
}

fn contains_term(record: &AlumniRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    [&record.name, &record.location, &record.profession]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// All-unset criteria keep the whole roster in its original order.
#[test]
fn test_unset_criteria_return_full_roster() -> Result<()> {
    let roster = roster()?;
    let results = filter_roster(&roster, &FilterCriteria::default());
    let expected: Vec<&AlumniRecord> = roster.iter().collect();
    assert_eq!(results, expected);
    Ok(())
}

#[test]
fn test_search_partitions_roster() -> Result<()> {
    let roster = roster()?;
    for term in ["kolkata", "SOFTWARE", "an", "Scientist", "wb", "zzz", ", "] {
        let criteria = FilterCriteria::default().with_search_term(term);
        let results = filter_roster(&roster, &criteria);

        for record in &roster {
            let included = results.iter().any(|r| r.id == record.id);
            assert_eq!(
                included,
                contains_term(record, term),
                "term {:?} record {:?}",
                term,
                record.name
            );
        }
    }
    Ok(())
}

#[test]
fn test_every_listed_batch_selects_only_that_batch() -> Result<()> {
    let roster = roster()?;
    let options = derive_options(&roster);

    assert!(options.batches.windows(2).all(|pair| pair[0] > pair[1]));

    for batch in &options.batches {
        let criteria = FilterCriteria::default().with_batch(*batch);
        let results = filter_roster(&roster, &criteria);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.batch == *batch));
    }
    Ok(())
}

#[test]
fn test_every_listed_profession_selects_only_that_profession() -> Result<()> {
    let roster = roster()?;
    let options = derive_options(&roster);

    assert!(options.professions.windows(2).all(|pair| pair[0] < pair[1]));

    for profession in &options.professions {
        let criteria = FilterCriteria::default().with_profession(profession.as_str());
        let results = filter_roster(&roster, &criteria);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| &r.profession == profession));
    }
    Ok(())
}

#[test]
fn test_results_preserve_roster_order() -> Result<()> {
    let roster = roster()?;
    let criteria = FilterCriteria::default().with_search_term("a");
    let results = filter_roster(&roster, &criteria);

    let positions: Vec<usize> = results
        .iter()
        .map(|r| roster.iter().position(|candidate| candidate.id == r.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn test_predicate_is_deterministic() -> Result<()> {
    let roster = roster()?;
    let criteria = FilterCriteria::default()
        .with_search_term("engineer")
        .with_batch(2010);
    let first: Vec<bool> = roster.iter().map(|r| matches(r, &criteria)).collect();
    let second: Vec<bool> = roster.iter().map(|r| matches(r, &criteria)).collect();
    assert_eq!(first, second);
    assert_eq!(filter_roster(&roster, &criteria), filter_roster(&roster, &criteria));
    Ok(())
}

#[test]
fn test_reset_matches_unfiltered_view_from_any_state() -> Result<()> {
    let roster = roster()?;
    let unfiltered: Vec<AlumniRecord> = roster.clone();

    let states = [
        FilterCriteria::default().with_search_term("kolkata"),
        FilterCriteria::default().with_batch(2005).with_profession("Product Designer"),
        FilterCriteria::default()
            .with_search_term("nobody")
            .with_batch(1850)
            .with_profession("Pilot"),
    ];

    for state in states {
        let mut directory = AlumniDirectory::with_criteria(roster.clone(), state);
        let _ = directory.filtered();
        directory.reset();
        let after: Vec<AlumniRecord> = directory.filtered().into_iter().cloned().collect();
        assert_eq!(after, unfiltered);
    }
    Ok(())
}

mod scenarios {
    use super::*;

    fn two_alumni() -> Vec<AlumniRecord> {
        vec![
            AlumniRecord {
                id: "1".to_string(),
                name: "Dr. Arindam Bose".to_string(),
                batch: 1998,
                location: "Kolkata, WB".to_string(),
                profession: "Cardiologist".to_string(),
                avatar: String::new(),
            },
            AlumniRecord {
                id: "2".to_string(),
                name: "Sneha Roy".to_string(),
                batch: 2005,
                location: "Bangalore, KA".to_string(),
                profession: "Product Designer".to_string(),
                avatar: String::new(),
            },
        ]
    }

    fn names(directory: &AlumniDirectory) -> Vec<&str> {
        directory.filtered().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_search_by_city() {
        let mut directory = AlumniDirectory::new(two_alumni());
        directory.set_search_term("kolkata");
        assert_eq!(names(&directory), vec!["Dr. Arindam Bose"]);
    }

    #[test]
    fn test_select_batch() {
        let mut directory = AlumniDirectory::new(two_alumni());
        directory.set_selected_batch(Some(2005));
        assert_eq!(names(&directory), vec!["Sneha Roy"]);
    }

    #[test]
    fn test_search_and_batch_must_both_match() {
        let mut directory = AlumniDirectory::new(two_alumni());
        directory.set_search_term("roy");
        directory.set_selected_batch(Some(1998));
        assert!(names(&directory).is_empty());
        assert!(directory.is_empty_result());
    }

    #[test]
    fn test_select_profession() {
        let mut directory = AlumniDirectory::new(two_alumni());
        directory.set_search_term("");
        directory.set_selected_profession(Some("Cardiologist".to_string()));
        assert_eq!(names(&directory), vec!["Dr. Arindam Bose"]);
    }
}
