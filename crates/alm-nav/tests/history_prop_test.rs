use alm_nav::{NavGraph, Router};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Navigate(usize),
    NavigateBad,
    Up,
}

const TARGETS: &[(&str, Option<&str>)] = &[
    ("sprints", None),
    ("goals", None),
    ("sprintDetail", Some("1")),
    ("settings", None),
];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..TARGETS.len()).prop_map(Op::Navigate),
        Just(Op::NavigateBad),
        Just(Op::Up),
    ]
}

fn router() -> Router<()> {
    let graph = NavGraph::builder()
        .screen("calendar", || ())
        .screen("sprints", || ())
        .screen("goals", || ())
        .placeholder("sprintDetail/{sprintId}")
        .screen("settings", || ())
        .build()
        .expect("graph");
    let mut router = Router::new(graph);
    router.start("calendar").expect("start");
    router
}

proptest! {
    #[test]
    fn depth_tracks_successful_transitions(ops in proptest::collection::vec(op(), 0..64)) {
        let mut router = router();
        let mut expected: usize = 1;

        for op in ops {
            match op {
                Op::Navigate(i) => {
                    let (route, arg) = TARGETS[i];
                    router.navigate(route, arg).unwrap();
                    expected += 1;
                    prop_assert_eq!(router.current_entry().unwrap().route.as_str(), route);
                }
                Op::NavigateBad => {
                    prop_assert!(router.navigate("sprintDetail", None).is_err());
                }
                Op::Up => {
                    if router.navigate_up().is_ok() {
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(router.depth(), expected.max(1));
            prop_assert!(router.depth() >= 1);
        }
    }
}
