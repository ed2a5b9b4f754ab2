#![cfg(feature = "serde")]

use airland::{problem::LandingProblem, schedule::Schedule};

#[test]
fn test_problem_and_schedule_survive_json() {
    let problem =
        LandingProblem::parse("2\n0 0 5 10 1 1\n0 5\n0 0 5 10 2 3\n5 0\n").unwrap();
    let schedule = Schedule::from_times(&problem, &[(1, 2), (0, 9)]).unwrap();

    let problem_json = serde_json::to_string(&problem).unwrap();
    let schedule_json = serde_json::to_string(&schedule).unwrap();

    let problem_back: LandingProblem = serde_json::from_str(&problem_json).unwrap();
    let schedule_back: Schedule = serde_json::from_str(&schedule_json).unwrap();

    assert_eq!(problem_back, problem);
    assert_eq!(schedule_back.landing_times(&problem_back), vec![(1, 2), (0, 9)]);
}

#[test]
fn test_ragged_separation_matrix_is_rejected() {
    let json = r#"{"aircraft":[
        {"id":0,"appearance_time":0,"earliest_time":0,"target_time":5,"latest_time":10,
         "early_penalty":1.0,"late_penalty":1.0,"separations":[0]},
        {"id":1,"appearance_time":0,"earliest_time":0,"target_time":5,"latest_time":10,
         "early_penalty":1.0,"late_penalty":1.0,"separations":[5,0]}
    ]}"#;
    let err = serde_json::from_str::<LandingProblem>(json).unwrap_err();
    assert!(err.to_string().contains("expected 2 separations"));
}

#[test]
fn test_inverted_window_is_rejected() {
    let json = r#"{"aircraft":[
        {"id":0,"appearance_time":0,"earliest_time":9,"target_time":5,"latest_time":10,
         "early_penalty":1.0,"late_penalty":1.0,"separations":[0]}
    ]}"#;
    assert!(serde_json::from_str::<LandingProblem>(json).is_err());
}

#[test]
fn test_schedule_with_duplicate_ids_is_rejected() {
    let json = r#"{"sequence":[[0,{"bits":1,"len":1}],[0,{"bits":2,"len":2}]],
                   "positions":[7,0]}"#;
    let err = serde_json::from_str::<Schedule>(json).unwrap_err();
    assert!(err.to_string().contains("appears twice"));
}

#[test]
fn test_schedule_positions_are_rebuilt() {
    let json = r#"{"sequence":[[1,{"bits":2,"len":2}],[0,{"bits":9,"len":4}]],
                   "positions":[7,7]}"#;
    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.position(0), 1);
    assert_eq!(schedule.position(1), 0);
    assert_eq!(schedule.gene(0).value(), 9);
}

#[test]
fn test_oversized_gene_is_clamped() {
    let json = r#"{"sequence":[[0,{"bits":255,"len":200}]]}"#;
    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.gene(0).len(), 64);
}
