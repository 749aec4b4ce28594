use alm_nav::{NavError, RouteTemplate};

#[test]
fn plain_template_has_no_parameter() {
    let t = RouteTemplate::parse("calendar").expect("parse");
    assert_eq!(t.name(), "calendar");
    assert_eq!(t.param(), None);
    assert!(!t.requires_argument());
    assert_eq!(t.to_string(), "calendar");
}

#[test]
fn parameterised_template_splits_name_and_param() {
    let t = RouteTemplate::parse("sprintDetail/{sprintId}").expect("parse");
    assert_eq!(t.name(), "sprintDetail");
    assert_eq!(t.param(), Some("sprintId"));
    assert!(t.requires_argument());
    assert_eq!(t.to_string(), "sprintDetail/{sprintId}");
}

#[test]
fn malformed_templates_are_rejected() {
    let bad_templates = [
        "",
        "/{id}",
        "detail/{}",
        "detail/id",
        "detail/{id}/more",
        "de{tail",
        "detail/{a/b}",
    ];
    for bad in bad_templates {
        let err = RouteTemplate::parse(bad).expect_err(bad);
        assert!(
            matches!(err, NavError::InvalidTemplate { .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn resolve_substitutes_argument() {
    let t = RouteTemplate::parse("goalDetail/{goalId}").unwrap();
    assert_eq!(t.resolve(Some("7")).unwrap(), "goalDetail/7");
}

#[test]
fn resolve_encodes_reserved_characters() {
    let t = RouteTemplate::parse("taskDetail/{taskId}").unwrap();
    let path = t.resolve(Some("a/b c")).unwrap();
    assert_eq!(path, "taskDetail/a%2Fb%20c");
    assert_eq!(t.extract(&path).as_deref(), Some("a/b c"));
}

#[test]
fn resolve_without_argument_is_missing() {
    let t = RouteTemplate::parse("sprintDetail/{sprintId}").unwrap();
    assert_eq!(
        t.resolve(None),
        Err(NavError::MissingArgument {
            route: "sprintDetail".into()
        })
    );
    assert_eq!(
        t.resolve(Some("")),
        Err(NavError::MissingArgument {
            route: "sprintDetail".into()
        })
    );
}

#[test]
fn resolve_rejects_argument_on_plain_route() {
    let t = RouteTemplate::parse("settings").unwrap();
    assert_eq!(
        t.resolve(Some("x")),
        Err(NavError::UnexpectedArgument {
            route: "settings".into()
        })
    );
}

#[test]
fn extract_fails_on_absent_or_malformed_segment() {
    let t = RouteTemplate::parse("sprintDetail/{sprintId}").unwrap();
    assert_eq!(t.extract("sprintDetail"), None);
    assert_eq!(t.extract("sprintDetail/"), None);
    assert_eq!(t.extract("sprintDetail/a/b"), None);
    assert_eq!(t.extract("sprintDetail/%FF"), None);
    assert_eq!(t.extract("goalDetail/42"), None);
}

#[test]
fn extract_on_plain_route_is_none() {
    let t = RouteTemplate::parse("calendar").unwrap();
    assert_eq!(t.extract("calendar"), None);
}
