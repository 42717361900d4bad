//! Resource paths of the KVK API.

use std::fmt;

/// A top-level KVK API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Extensive company information from the Trade Register.
    BasisProfile,
    /// Company lookup in the Trade Register.
    Search,
    /// Information about a single establishment.
    BranchProfile,
    /// Current and historical trade names of a registration.
    Naming,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::BasisProfile,
        Resource::Search,
        Resource::BranchProfile,
        Resource::Naming,
    ];

    /// Path below the API version. May span several segments.
    pub fn path(self) -> &'static str {
        match self {
            Resource::BasisProfile => "basisprofielen",
            Resource::Search => "zoeken",
            Resource::BranchProfile => "vestigingsprofielen",
            Resource::Naming => "naamgevingen/kvknummer",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Optional refinement of a basis profile request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisProfileResource {
    /// Owner of the company.
    Owner,
    /// Head office of the company.
    HeadOffice,
    /// All branches of the company.
    Branches,
}

impl BasisProfileResource {
    pub fn path(self) -> &'static str {
        match self {
            BasisProfileResource::Owner => "eigenaar",
            BasisProfileResource::HeadOffice => "hoofdvestiging",
            BasisProfileResource::Branches => "vestigingen",
        }
    }
}

impl fmt::Display for BasisProfileResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_are_fixed() {
        let paths: Vec<_> = Resource::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            ["basisprofielen", "zoeken", "vestigingsprofielen", "naamgevingen/kvknummer"]
        );
    }

    #[test]
    fn basis_profile_subresource_paths() {
        assert_eq!(BasisProfileResource::Owner.path(), "eigenaar");
        assert_eq!(BasisProfileResource::HeadOffice.path(), "hoofdvestiging");
        assert_eq!(BasisProfileResource::Branches.to_string(), "vestigingen");
    }
}
