use orgchart_core::analysis::{
    analyze, analyze_with, long_reporting_lines, managers_above, reporting_depths, AnalysisError,
    AnalysisPolicy, LongReportingLine,
};
use orgchart_core::hierarchy::Hierarchy;
use orgchart_core::model::Employee;

/// Chain of `len` employees with ids "1".."len"; "1" is the root.
fn chain(len: usize) -> Vec<Employee> {
    (1..=len)
        .map(|i| {
            let e = Employee::new(i.to_string(), "Level", i.to_string(), 100_000);
            if i == 1 {
                e
            } else {
                e.reporting_to((i - 1).to_string())
            }
        })
        .collect()
}

#[test]
fn depth_counts_managers_between_employee_and_root() {
    let employees = chain(5);
    let hierarchy = Hierarchy::build(&employees);

    let depths: Vec<usize> =
        reporting_depths(&employees, &hierarchy).expect("depths").iter().map(|d| d.depth).collect();
    // The CEO and its direct reports have nobody in between.
    assert_eq!(depths, vec![0, 0, 1, 2, 3]);
}

#[test]
fn seven_level_chain_reports_only_the_bottom_employee() {
    let employees = chain(7);

    let report = analyze(&employees).expect("analysis");
    assert_eq!(
        report.long_reporting_lines,
        vec![LongReportingLine { employee_id: "7".into(), excess_managers: 1 }]
    );
}

#[test]
fn employees_within_threshold_are_omitted() {
    assert!(analyze(&chain(6)).expect("analysis").long_reporting_lines.is_empty());

    let report = analyze(&chain(8)).expect("analysis");
    assert_eq!(
        report.long_reporting_lines,
        vec![
            LongReportingLine { employee_id: "7".into(), excess_managers: 1 },
            LongReportingLine { employee_id: "8".into(), excess_managers: 2 },
        ]
    );
}

#[test]
fn violations_follow_input_order() {
    let mut employees = chain(8);
    employees.reverse();

    let report = analyze(&employees).expect("analysis");
    let ids: Vec<&str> =
        report.long_reporting_lines.iter().map(|l| l.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["8", "7"]);
}

#[test]
fn dangling_reference_stops_the_walk() {
    let employees = vec![
        Employee::new("1", "Root", "One", 100),
        Employee::new("2", "Direct", "Report", 100).reporting_to("1"),
        Employee::new("3", "Orphan", "A", 100).reporting_to("404"),
        Employee::new("4", "Orphan", "B", 100).reporting_to("3"),
    ];
    let hierarchy = Hierarchy::build(&employees);

    let depths: Vec<usize> =
        reporting_depths(&employees, &hierarchy).expect("depths").iter().map(|d| d.depth).collect();
    assert_eq!(depths, vec![0, 0, 0, 1]);
}

#[test]
fn multiple_roots_are_tolerated() {
    let employees = vec![
        Employee::new("1", "Root", "One", 100),
        Employee::new("2", "Root", "Two", 100),
        Employee::new("3", "Report", "A", 100).reporting_to("2"),
    ];

    let report = analyze(&employees).expect("analysis");
    assert!(report.long_reporting_lines.is_empty());
}

#[test]
fn longest_acyclic_walk_stays_within_the_guard() {
    // Everyone has a manager entry: the top of the chain reports to an
    // unknown id, so the bottom employee walks past every other record.
    let mut employees = chain(6);
    employees[0].manager_id = Some("board".into());
    let hierarchy = Hierarchy::build(&employees);
    let bottom = &employees[5];

    assert_eq!(managers_above(bottom, &hierarchy, employees.len()), Ok(5));
    assert_eq!(managers_above(bottom, &hierarchy, 5), Ok(5));
    assert_eq!(
        managers_above(bottom, &hierarchy, 4),
        Err(AnalysisError::CircularReference { employee_id: "6".into() })
    );

    let depths = reporting_depths(&employees, &hierarchy).expect("depths");
    assert_eq!(depths[5].depth, employees.len() - 1);
}

#[test]
fn cycle_fails_once_walk_exceeds_employee_count() {
    let employees = vec![
        Employee::new("a", "Loop", "A", 100).reporting_to("b"),
        Employee::new("b", "Loop", "B", 100).reporting_to("c"),
        Employee::new("c", "Loop", "C", 100).reporting_to("a"),
    ];
    let hierarchy = Hierarchy::build(&employees);

    assert_eq!(
        managers_above(&employees[0], &hierarchy, employees.len()),
        Err(AnalysisError::CircularReference { employee_id: "a".into() })
    );
}

#[test]
fn two_node_cycle_fails_the_analysis() {
    let employees = vec![
        Employee::new("1", "Root", "One", 100),
        Employee::new("2", "Loop", "A", 100).reporting_to("3"),
        Employee::new("3", "Loop", "B", 100).reporting_to("2"),
    ];

    let err = analyze(&employees).unwrap_err();
    assert_eq!(err, AnalysisError::CircularReference { employee_id: "2".into() });
    assert!(err.to_string().contains("Circular reference"));
}

#[test]
fn self_managed_employee_is_a_cycle() {
    let employees = vec![Employee::new("1", "Self", "Managed", 100).reporting_to("1")];
    assert!(matches!(analyze(&employees), Err(AnalysisError::CircularReference { .. })));
}

#[test]
fn cycle_reachable_from_a_tail_fails() {
    let employees = vec![
        Employee::new("1", "Loop", "A", 100).reporting_to("2"),
        Employee::new("2", "Loop", "B", 100).reporting_to("1"),
        Employee::new("3", "Tail", "C", 100).reporting_to("1"),
    ];
    assert!(matches!(analyze(&employees), Err(AnalysisError::CircularReference { .. })));
}

#[test]
fn custom_depth_threshold() {
    let policy = AnalysisPolicy { max_reporting_depth: 1, ..Default::default() };
    let report = analyze_with(&chain(4), &policy).expect("analysis");
    assert_eq!(
        report.long_reporting_lines,
        vec![LongReportingLine { employee_id: "4".into(), excess_managers: 1 }]
    );
}

#[test]
fn long_reporting_lines_filters_precomputed_depths() {
    let employees = chain(4);
    let hierarchy = Hierarchy::build(&employees);
    let depths = reporting_depths(&employees, &hierarchy).expect("depths");

    assert_eq!(long_reporting_lines(&depths, 0).len(), 2);
    assert!(long_reporting_lines(&depths, 2).is_empty());
}

#[test]
fn analysis_is_idempotent() {
    let employees = chain(8);
    let first = analyze(&employees).expect("first");
    let second = analyze(&employees).expect("second");
    assert_eq!(first, second);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = analyze(&chain(7)).expect("analysis");
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["salaryIssues"].is_array());
    assert_eq!(json["longReportingLines"][0]["employeeId"], "7");
    assert_eq!(json["longReportingLines"][0]["excessManagers"], 1);
}

#[test]
fn invalid_policy_is_rejected() {
    let policy =
        AnalysisPolicy { min_salary_ratio: 2.0, max_salary_ratio: 1.0, ..Default::default() };
    assert!(matches!(analyze_with(&chain(2), &policy), Err(AnalysisError::InvalidPolicy(_))));

    let policy = AnalysisPolicy { min_salary_ratio: f64::NAN, ..Default::default() };
    assert!(policy.validate().is_err());
}
