//! Worked examples of scope isolation, role matching and the platform bypass.

use arena_access::{AccessResolver, Allow, Decision, Deny};
use arena_core::{roles, AccessCheck, RoleAssignment, User};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn resolver() -> AccessResolver {
    AccessResolver::default()
}

/// Owner of org A, player on team T, primary org A, no primary team.
#[fixture]
fn owner_of_a() -> User {
    User::new("u-owner", "kai", "kai@example.gg")
        .with_primary_org("A")
        .with_role(RoleAssignment::platform(roles::PLATFORM_USER))
        .with_role(RoleAssignment::org(roles::ORG_OWNER, "A"))
        .with_role(RoleAssignment::team(roles::TEAM_PLAYER, "T"))
}

#[rstest]
#[case::same_org(AccessCheck::org([roles::ORG_OWNER]).with_scope_id("A"), Decision::Allowed(Allow::RoleMatched))]
#[case::other_org(AccessCheck::org([roles::ORG_OWNER]).with_scope_id("B"), Decision::Denied(Deny::NoMatchingRole))]
#[case::role_not_held(AccessCheck::org([roles::ORG_MANAGER]).with_scope_id("A"), Decision::Denied(Deny::NoMatchingRole))]
#[case::any_of_listed(AccessCheck::org([roles::ORG_MANAGER, roles::ORG_OWNER]).with_scope_id("A"), Decision::Allowed(Allow::RoleMatched))]
#[case::primary_org_fallback(AccessCheck::org([roles::ORG_OWNER]), Decision::Allowed(Allow::RoleMatched))]
#[case::explicit_team(AccessCheck::team([roles::TEAM_PLAYER]).with_scope_id("T"), Decision::Allowed(Allow::RoleMatched))]
#[case::no_primary_team(AccessCheck::team([roles::TEAM_PLAYER]), Decision::Denied(Deny::MissingScopeId))]
#[case::org_role_in_team_scope(AccessCheck::team([roles::ORG_OWNER]).with_scope_id("A"), Decision::Denied(Deny::NoMatchingRole))]
#[case::platform_role(AccessCheck::platform([roles::PLATFORM_USER]), Decision::Allowed(Allow::RoleMatched))]
#[case::platform_staff_not_held(AccessCheck::platform([roles::PLATFORM_STAFF]), Decision::Denied(Deny::NoMatchingRole))]
fn owner_of_org_a(
    resolver: AccessResolver,
    owner_of_a: User,
    #[case] check: AccessCheck,
    #[case] expected: Decision,
) {
    assert_eq!(resolver.decide(Some(&owner_of_a), &check), expected);
}

#[rstest]
fn platform_checks_ignore_scope_id(resolver: AccessResolver) {
    let staff = User::new("u-staff", "ops", "ops@example.gg")
        .with_role(RoleAssignment::platform(roles::PLATFORM_STAFF));
    let check = AccessCheck::platform([roles::PLATFORM_STAFF]).with_scope_id("irrelevant");
    assert!(resolver.is_authorized(Some(&staff), &check));
}

#[rstest]
fn platform_grant_with_stray_scope_id_still_matches(resolver: AccessResolver) {
    let mut grant = RoleAssignment::platform(roles::PLATFORM_STAFF);
    grant.scope_id = "somewhere".parse().ok();
    let staff = User::new("u-staff", "ops", "ops@example.gg").with_role(grant);
    let check = AccessCheck::platform([roles::PLATFORM_STAFF]).with_scope_id("elsewhere");
    assert!(resolver.is_authorized(Some(&staff), &check));
}

#[rstest]
fn super_admin_passes_checks_it_holds_no_role_for(resolver: AccessResolver) {
    let admin = User::new("u-admin", "root", "root@example.gg")
        .with_role(RoleAssignment::platform(roles::PLATFORM_SUPERADMIN));

    for check in [
        AccessCheck::org([roles::ORG_OWNER]).with_scope_id("Z"),
        AccessCheck::team([roles::TEAM_OWNER]),
        AccessCheck::platform(Vec::<String>::new()),
    ] {
        assert_eq!(
            resolver.decide(Some(&admin), &check),
            Decision::Allowed(Allow::SuperAdmin)
        );
    }
}

#[rstest]
fn absent_user_is_denied(resolver: AccessResolver) {
    assert_eq!(
        resolver.decide(None, &AccessCheck::platform([roles::PLATFORM_USER])),
        Decision::Denied(Deny::Unauthenticated)
    );
}

#[rstest]
fn duplicate_grants_are_idempotent(resolver: AccessResolver, owner_of_a: User) {
    let doubled = owner_of_a
        .clone()
        .with_role(RoleAssignment::org(roles::ORG_OWNER, "A"));
    for org in ["A", "B"] {
        let check = AccessCheck::org([roles::ORG_OWNER]).with_scope_id(org);
        assert_eq!(
            resolver.decide(Some(&doubled), &check),
            resolver.decide(Some(&owner_of_a), &check)
        );
    }
}

#[rstest]
fn backend_object_ids_compare_by_normalized_string(resolver: AccessResolver) {
    let user: User = serde_json::from_str(
        r#"{
            "_id": "u-9",
            "roles": [{"scope": "org", "role": "org:manager", "scopeId": {"$oid": "65a1f0"}}]
        }"#,
    )
    .unwrap();
    let check: AccessCheck = serde_json::from_str(
        r#"{"scope": "org", "allowedRoles": ["org:manager"], "scopeId": " 65a1f0 "}"#,
    )
    .unwrap();
    assert!(resolver.is_authorized(Some(&user), &check));
}

#[test]
fn free_functions_use_default_resolver() {
    let user = User::new("u-1", "kai", "kai@example.gg")
        .with_role(RoleAssignment::platform(roles::PLATFORM_SUPER_ADMIN));
    let check = AccessCheck::org([roles::ORG_OWNER]).with_scope_id("A");
    assert!(!arena_access::is_authorized(Some(&user), &check));
    assert_eq!(
        arena_access::decide(Some(&user), &check),
        Decision::Denied(Deny::NoMatchingRole)
    );
}
