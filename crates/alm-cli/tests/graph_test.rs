use alm_cli::graph::{app_graph, app_router, routes};
use alm_nav::{ArgumentPolicy, NavError};

#[test]
fn app_graph_has_the_full_route_table() {
    let graph = app_graph(routes::DEFAULT_START).expect("graph");
    let templates: Vec<_> = graph.templates().map(|t| t.to_string()).collect();
    assert_eq!(
        templates,
        [
            "calendar",
            "sprints",
            "sprintDetail/{sprintId}",
            "goals",
            "goalDetail/{goalId}",
            "tasks",
            "taskDetail/{taskId}",
            "dailyCheckup",
            "sprintReview",
            "settings",
        ]
    );
    assert_eq!(graph.start_route(), "calendar");
}

#[test]
fn detail_templates_use_the_id_arguments() {
    let graph = app_graph(routes::DEFAULT_START).unwrap();
    assert_eq!(graph.template(routes::SPRINT_DETAIL).unwrap().param(), Some(routes::SPRINT_ID_ARG));
    assert_eq!(graph.template(routes::GOAL_DETAIL).unwrap().param(), Some(routes::GOAL_ID_ARG));
    assert_eq!(graph.template(routes::TASK_DETAIL).unwrap().param(), Some(routes::TASK_ID_ARG));
}

#[test]
fn app_router_opens_on_calendar() {
    let router = app_router(routes::DEFAULT_START, ArgumentPolicy::Lenient).unwrap();
    assert_eq!(router.current_entry().unwrap().route, routes::CALENDAR);
    let view = router.render_current().unwrap().expect("calendar renders");
    assert_eq!(view.title, "Calendar");
}

#[test]
fn sprint_list_action_leads_to_sprint_detail_placeholder() {
    let mut router = app_router(routes::DEFAULT_START, ArgumentPolicy::Lenient).unwrap();
    let view = router.navigate(routes::SPRINTS, None).unwrap().unwrap();
    let first = view.actions[0].action.clone();

    let detail = router.dispatch(first).unwrap();
    assert!(detail.is_none(), "detail screens are placeholders");
    let entry = router.current_entry().unwrap();
    assert_eq!(entry.route, routes::SPRINT_DETAIL);
    assert_eq!(entry.argument.as_deref(), Some("s-1"));

    let back = router.navigate_up().unwrap().unwrap();
    assert_eq!(back.title, "Sprints");
}

#[test]
fn calendar_sprints_goals_then_up_lands_on_sprints() {
    let mut router = app_router("calendar", ArgumentPolicy::Lenient).unwrap();
    router.navigate("sprints", None).unwrap();
    router.navigate("goals", None).unwrap();
    router.navigate_up().unwrap();
    assert_eq!(router.current_entry().unwrap().route, "sprints");
}

#[test]
fn app_router_rejects_bad_start() {
    let err = app_router("goalDetail", ArgumentPolicy::Lenient).expect_err("param start");
    assert_eq!(
        err,
        NavError::MissingArgument {
            route: "goalDetail".into()
        }
    );
}
