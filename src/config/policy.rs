use std::collections::HashSet;
use std::str::FromStr;

/// Data routes whose token requirement can be toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    ListVolunteers,
    GetVolunteer,
    ListOwnVolunteers,
    CreateVolunteer,
    UpdateVolunteer,
    DeleteVolunteer,
    ListRequests,
    CreateRequest,
    DeleteRequest,
}

impl RouteName {
    pub const ALL: [RouteName; 9] = [
        RouteName::ListVolunteers,
        RouteName::GetVolunteer,
        RouteName::ListOwnVolunteers,
        RouteName::CreateVolunteer,
        RouteName::UpdateVolunteer,
        RouteName::DeleteVolunteer,
        RouteName::ListRequests,
        RouteName::CreateRequest,
        RouteName::DeleteRequest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::ListVolunteers => "list_volunteers",
            RouteName::GetVolunteer => "get_volunteer",
            RouteName::ListOwnVolunteers => "list_own_volunteers",
            RouteName::CreateVolunteer => "create_volunteer",
            RouteName::UpdateVolunteer => "update_volunteer",
            RouteName::DeleteVolunteer => "delete_volunteer",
            RouteName::ListRequests => "list_requests",
            RouteName::CreateRequest => "create_request",
            RouteName::DeleteRequest => "delete_request",
        }
    }
}

impl FromStr for RouteName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| format!("unknown route '{s}'"))
    }
}

/// Which routes sit behind the token-verification middleware.
///
/// The default guards only the two owner listings. Write and delete routes are
/// open, which is almost certainly unintended; deployments can tighten this
/// through `PROTECTED_ROUTES` without touching the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPolicy {
    protected: HashSet<RouteName>,
}

impl AuthPolicy {
    pub fn none() -> Self {
        Self {
            protected: HashSet::new(),
        }
    }

    pub fn from_names(names: &[String]) -> Result<Self, String> {
        let protected = names
            .iter()
            .map(|name| name.parse::<RouteName>())
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { protected })
    }

    pub fn protect(mut self, route: RouteName) -> Self {
        self.protected.insert(route);
        self
    }

    pub fn requires_token(&self, route: RouteName) -> bool {
        self.protected.contains(&route)
    }
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self::none()
            .protect(RouteName::ListOwnVolunteers)
            .protect(RouteName::ListRequests)
    }
}
