use clap::{Args, Subcommand};

/// Organization membership commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// List members of an organization.
    Members(OrgMembersArgs),
    /// Change a member's org role.
    SetRole(OrgSetRoleArgs),
    /// Remove a member from an organization.
    Remove(OrgRemoveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OrgMembersArgs {
    pub org_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct OrgSetRoleArgs {
    pub org_id: String,
    pub user_id: String,
    /// New role, e.g. `org:manager`.
    pub role: String,
}

#[derive(Clone, Debug, Args)]
pub struct OrgRemoveArgs {
    pub org_id: String,
    pub user_id: String,
}
