use std::fmt;

use crate::error::NavError;

/// A route identifier, optionally templated on a single trailing parameter.
///
/// `calendar` is a plain route; `sprintDetail/{sprintId}` is a parameterised
/// one whose *name* is `sprintDetail` and whose *parameter* is `sprintId`.
/// Concrete paths substitute the percent-encoded argument for the parameter
/// segment, e.g. `sprintDetail/42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteTemplate {
    name: String,
    param: Option<String>,
}

impl RouteTemplate {
    /// Parse a template string.
    ///
    /// The name must be a single non-empty segment. At most one `{param}`
    /// segment is allowed and it must come last.
    pub fn parse(template: &str) -> Result<Self, NavError> {
        let invalid = |reason: &str| NavError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let (name, param) = match template.split_once('/') {
            None => (template, None),
            Some((name, rest)) => {
                let param = rest
                    .strip_prefix('{')
                    .and_then(|p| p.strip_suffix('}'))
                    .ok_or_else(|| invalid("only a trailing `{param}` segment is allowed"))?;
                if param.is_empty() || param.contains(['{', '}', '/']) {
                    return Err(invalid("parameter name must be a plain identifier"));
                }
                (name, Some(param.to_string()))
            }
        };

        if name.is_empty() {
            return Err(invalid("route name is empty"));
        }
        if name.contains(['{', '}']) {
            return Err(invalid("route name cannot contain braces"));
        }

        Ok(Self {
            name: name.to_string(),
            param,
        })
    }

    /// The static route name, used as the lookup key in a graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter name, if the route is templated.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    pub fn requires_argument(&self) -> bool {
        self.param.is_some()
    }

    /// Build the concrete path for this route.
    ///
    /// An empty argument counts as missing.
    pub fn resolve(&self, argument: Option<&str>) -> Result<String, NavError> {
        let argument = argument.filter(|a| !a.is_empty());
        match (&self.param, argument) {
            (None, None) => Ok(self.name.clone()),
            (None, Some(_)) => Err(NavError::UnexpectedArgument {
                route: self.name.clone(),
            }),
            (Some(_), None) => Err(NavError::MissingArgument {
                route: self.name.clone(),
            }),
            (Some(_), Some(arg)) => Ok(format!("{}/{}", self.name, urlencoding::encode(arg))),
        }
    }

    /// Extract the argument back out of a concrete path.
    ///
    /// Returns `None` when the route takes no argument, or when the path does
    /// not belong to this route, has no argument segment, has more than one
    /// segment after the name, or does not percent-decode to UTF-8.
    pub fn extract(&self, path: &str) -> Option<String> {
        self.param.as_ref()?;
        let (name, segment) = split_path(path);
        if name != self.name {
            return None;
        }
        let segment = segment.filter(|s| !s.is_empty() && !s.contains('/'))?;
        urlencoding::decode(segment).ok().map(|s| s.into_owned())
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}/{{{}}}", self.name, param),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Split a concrete path into its route name and the remainder, if any.
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('/') {
        Some((name, rest)) => (name, Some(rest)),
        None => (path, None),
    }
}
