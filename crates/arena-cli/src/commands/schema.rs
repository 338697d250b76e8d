use arena_core::{AccessCheck, RoleAssignment, User};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

fn schema(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::User => schema_for!(User),
        SchemaType::RoleAssignment => schema_for!(RoleAssignment),
        SchemaType::AccessCheck => schema_for!(AccessCheck),
    }
}

/// Handle `arena schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name), flags.format)
}
