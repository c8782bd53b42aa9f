use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use termplan::config::CatalogFile;
use termplan::dag::Scheduler;
use termplan::errors::PlannerError;
use termplan_test_utils::builders::{CatalogFileBuilder, CourseConfigBuilder};
use termplan_test_utils::term_index_of;

const UNIT_LIMIT: u32 = 12;

// Strategy to generate an acyclic catalog.
// Acyclicity comes from only letting course N require courses 0..N-1.
fn catalog_strategy(max_courses: usize) -> impl Strategy<Value = CatalogFile> {
    (1..=max_courses).prop_flat_map(|num_courses| {
        let units_strat = proptest::collection::vec(1..=UNIT_LIMIT, num_courses);
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            num_courses,
        );

        (units_strat, deps_strat).prop_map(|(units, raw_deps)| {
            let mut builder = CatalogFileBuilder::new().with_unit_limit(UNIT_LIMIT);
            for (i, (units, potential_deps)) in units.into_iter().zip(raw_deps).enumerate() {
                let mut course = CourseConfigBuilder::new(&format!("course_{}", i), units);

                // Sanitize: only allow prerequisites < i.
                let valid_deps: BTreeSet<usize> = if i == 0 {
                    BTreeSet::new()
                } else {
                    potential_deps.into_iter().map(|d| d % i).collect()
                };
                for dep in valid_deps {
                    course = course.after(&format!("course_{}", dep));
                }
                builder = builder.with_course(course.build());
            }
            builder.build()
        })
    })
}

proptest! {
    #[test]
    fn every_course_is_placed_exactly_once(cfg in catalog_strategy(25)) {
        let scheduler = Scheduler::from_config(&cfg).unwrap();
        let terms = scheduler.schedule().unwrap();

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for term in &terms {
            for name in term.course_names() {
                *seen.entry(name).or_default() += 1;
            }
        }

        prop_assert_eq!(seen.len(), cfg.courses().len());
        for course in cfg.courses() {
            prop_assert_eq!(seen.get(course.name.as_str()).copied(), Some(1));
        }
    }

    #[test]
    fn terms_respect_the_unit_limit(cfg in catalog_strategy(25)) {
        let scheduler = Scheduler::from_config(&cfg).unwrap();
        let terms = scheduler.schedule().unwrap();

        for term in &terms {
            let sum: u32 = term.courses().iter().map(|c| c.units()).sum();
            prop_assert_eq!(term.units(), sum);
            prop_assert!(term.units() <= term.unit_limit());
            prop_assert!(!term.is_empty());
        }
    }

    #[test]
    fn prerequisites_land_in_strictly_earlier_terms(cfg in catalog_strategy(25)) {
        let scheduler = Scheduler::from_config(&cfg).unwrap();
        let terms = scheduler.schedule().unwrap();

        for course in cfg.courses() {
            let dependent_term = term_index_of(&terms, &course.name).unwrap();
            for prereq in &course.after {
                let prereq_term = term_index_of(&terms, prereq).unwrap();
                prop_assert!(
                    prereq_term < dependent_term,
                    "{} (term {}) must come before {} (term {})",
                    prereq, prereq_term, course.name, dependent_term
                );
            }
        }
    }

    #[test]
    fn scheduling_is_deterministic(cfg in catalog_strategy(25)) {
        let first = Scheduler::from_config(&cfg).unwrap().schedule().unwrap();
        let rebuilt = Scheduler::from_config(&cfg).unwrap();
        let second = rebuilt.schedule().unwrap();
        let third = rebuilt.schedule().unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);
    }

    #[test]
    fn oversized_course_always_stalls(
        cfg in catalog_strategy(10),
        extra in (UNIT_LIMIT + 1)..=(UNIT_LIMIT * 2),
    ) {
        let mut scheduler = Scheduler::from_config(&cfg).unwrap();
        scheduler
            .add_course(termplan::catalog::Course::new("OVERSIZED", extra))
            .unwrap();

        match scheduler.schedule() {
            Err(PlannerError::NoProgress { remaining, .. }) => {
                prop_assert_eq!(remaining, vec!["OVERSIZED".to_string()]);
            }
            other => prop_assert!(false, "Expected NoProgress, got: {:?}", other),
        }
    }
}
