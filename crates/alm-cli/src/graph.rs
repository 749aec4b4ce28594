use alm_nav::{ArgumentPolicy, NavError, NavGraph, Router};

use crate::screens::{self, View};

/// Route names and templates for the app.
pub mod routes {
    pub const CALENDAR: &str = "calendar";
    pub const SPRINTS: &str = "sprints";
    pub const SPRINT_DETAIL: &str = "sprintDetail";
    pub const GOALS: &str = "goals";
    pub const GOAL_DETAIL: &str = "goalDetail";
    pub const TASKS: &str = "tasks";
    pub const TASK_DETAIL: &str = "taskDetail";
    pub const DAILY_CHECKUP: &str = "dailyCheckup";
    pub const SPRINT_REVIEW: &str = "sprintReview";
    pub const SETTINGS: &str = "settings";

    pub const SPRINT_ID_ARG: &str = "sprintId";
    pub const GOAL_ID_ARG: &str = "goalId";
    pub const TASK_ID_ARG: &str = "taskId";

    pub const SPRINT_DETAIL_TEMPLATE: &str = "sprintDetail/{sprintId}";
    pub const GOAL_DETAIL_TEMPLATE: &str = "goalDetail/{goalId}";
    pub const TASK_DETAIL_TEMPLATE: &str = "taskDetail/{taskId}";

    pub const DEFAULT_START: &str = CALENDAR;
}

/// Build the app's route table, opening on `start_route`.
///
/// The three detail routes are registered as placeholders until their
/// screens exist.
pub fn app_graph(start_route: &str) -> Result<NavGraph<View>, NavError> {
    NavGraph::builder()
        .screen(routes::CALENDAR, screens::calendar)
        .screen(routes::SPRINTS, screens::sprints)
        .placeholder(routes::SPRINT_DETAIL_TEMPLATE)
        .screen(routes::GOALS, screens::goals)
        .placeholder(routes::GOAL_DETAIL_TEMPLATE)
        .screen(routes::TASKS, screens::tasks)
        .placeholder(routes::TASK_DETAIL_TEMPLATE)
        .screen(routes::DAILY_CHECKUP, screens::daily_checkup)
        .screen(routes::SPRINT_REVIEW, screens::sprint_review)
        .screen(routes::SETTINGS, screens::settings)
        .start(start_route)
        .build()
}

/// Build the graph and return a router already started on `start_route`.
pub fn app_router(start_route: &str, policy: ArgumentPolicy) -> Result<Router<View>, NavError> {
    let mut router = Router::new(app_graph(start_route)?).with_policy(policy);
    router.start_default()?;
    Ok(router)
}
